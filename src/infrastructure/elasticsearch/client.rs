use super::response::{Acknowledged, ErrorResponse, IndexedDocument};
use crate::{config::Config, domain::search::errors::SearchError};
use bytes::Bytes;
use reqwest::{Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Thin REST client for the handful of engine endpoints this crate uses.
///
/// Any non-2xx answer is turned into [`SearchError::Engine`] carrying the
/// engine's status and root-cause reason.
pub struct ElasticsearchClient {
    http: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl ElasticsearchClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.elasticsearch_request_timeout_seconds))
            .build()?;

        info!("Initializing ElasticsearchClient for {}", config.elasticsearch_url);
        Ok(Self {
            http,
            base_url: config.elasticsearch_url.trim_end_matches('/').to_string(),
            username: config.elasticsearch_username.clone(),
            password: config.elasticsearch_password.clone(),
        })
    }

    /// `GET /`: succeeds when the cluster answers at all.
    pub async fn ping(&self) -> Result<(), SearchError> {
        self.send(self.request(Method::GET, "")).await?;
        Ok(())
    }

    /// `POST /{index}/_search`, returning the raw response body.
    pub async fn search<B>(&self, index: &str, body: &B) -> Result<Bytes, SearchError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("{}/_search", index);
        let response = self
            .send(self.request(Method::POST, &path).json(body))
            .await?;
        Ok(response.bytes().await?)
    }

    /// `PUT /{index}` with settings and mappings.
    pub async fn create_index(
        &self,
        index: &str,
        body: &serde_json::Value,
    ) -> Result<(), SearchError> {
        let response = self.send(self.request(Method::PUT, index).json(body)).await?;
        let ack: Acknowledged = decode(&response.bytes().await?)?;
        if !ack.acknowledged {
            return Err(SearchError::NotAcknowledged(format!("create index {}", index)));
        }
        info!("Created index {}", index);
        Ok(())
    }

    /// `PUT /{index}/_doc/{id}`: stores or overwrites one document.
    pub async fn index_document<T>(&self, index: &str, id: &str, doc: &T) -> Result<(), SearchError>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("{}/_doc/{}", index, id);
        let response = self.send(self.request(Method::PUT, &path).json(doc)).await?;
        let indexed: IndexedDocument = decode(&response.bytes().await?)?;
        debug!(
            "Add document to index: {}, id: {}, result: {}",
            indexed.index, indexed.id, indexed.result
        );
        Ok(())
    }

    /// `POST /{index}/_refresh`: makes indexed documents visible to search.
    pub async fn refresh(&self, index: &str) -> Result<(), SearchError> {
        let path = format!("{}/_refresh", index);
        self.send(self.request(Method::POST, &path)).await?;
        Ok(())
    }

    /// `DELETE /{index}`.
    pub async fn delete_index(&self, index: &str) -> Result<(), SearchError> {
        let response = self.send(self.request(Method::DELETE, index)).await?;
        let ack: Acknowledged = decode(&response.bytes().await?)?;
        if !ack.acknowledged {
            return Err(SearchError::NotAcknowledged(format!("delete index {}", index)));
        }
        info!("Deleted index {}", index);
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let builder = self.http.request(method, url);
        match &self.username {
            Some(user) => builder.basic_auth(user, self.password.as_deref()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, SearchError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(engine_error(response).await)
    }
}

/// Settings and mappings for a two-field `author`/`title` text index.
pub fn index_mapping() -> serde_json::Value {
    serde_json::json!({
        "settings": {
            "index": {
                "refresh_interval": "60s",
                "auto_expand_replicas": "0-all"
            }
        },
        "mappings": {
            "properties": {
                "author": { "type": "text" },
                "title": { "type": "text" }
            }
        }
    })
}

async fn engine_error(response: Response) -> SearchError {
    let http_status = response.status().as_u16();
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return SearchError::Transport(e),
    };

    match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(err) => {
            let status = err.status.unwrap_or(http_status);
            let reason = err.reason();
            warn!("engine returned error [{}] {}", status, reason);
            SearchError::Engine { status, reason }
        }
        Err(e) => SearchError::Decode(format!("failed to decode error response body: {}", e)),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, SearchError> {
    serde_json::from_slice(body)
        .map_err(|e| SearchError::Decode(format!("failed to decode response body: {}", e)))
}
