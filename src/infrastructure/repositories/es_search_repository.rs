use crate::domain::search::{
    entity::SearchResult,
    errors::SearchError,
    repository::Searcher,
    value_objects::{IndexName, Keyword},
};
use crate::infrastructure::elasticsearch::{
    client::ElasticsearchClient,
    query::{Query, SearchBody},
    response::SearchResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

const TITLE_FIELD: &str = "title";
const SEARCH_FROM: usize = 0;
const SEARCH_SIZE: usize = 10;

pub struct EsSearchRepository {
    client: Arc<ElasticsearchClient>,
}

impl EsSearchRepository {
    pub fn new(client: Arc<ElasticsearchClient>) -> Self {
        info!("Initializing EsSearchRepository");
        Self { client }
    }
}

#[async_trait]
impl Searcher for EsSearchRepository {
    /// Phrase-matches `keyword` against `title`, returning at most the first
    /// ten hits in engine order.
    ///
    /// # Errors
    /// `ValidationError` for a blank keyword or empty index name, `Transport` or
    /// `Engine` when the query fails, `Decode` when any hit is malformed.
    #[instrument(skip(self, keyword), fields(keyword_len = keyword.len()))]
    async fn search(
        &self,
        keyword: &str,
        index_name: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let keyword = Keyword::new(keyword)?;
        let index = IndexName::new(index_name)?;

        let body = SearchBody::new(Query::match_phrase(TITLE_FIELD, keyword.as_str()))
            .page(SEARCH_FROM, SEARCH_SIZE);

        let raw = self
            .client
            .search(index.as_str(), &body)
            .await
            .inspect_err(|e| error!("search against {} failed: {}", index.as_str(), e))?;

        decode_hits(&raw)
    }
}

/// Decodes every hit's `_source`; one bad document fails the whole batch.
fn decode_hits(raw: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let response: SearchResponse = serde_json::from_slice(raw)
        .map_err(|e| SearchError::Decode(format!("failed to decode search response: {}", e)))?;

    debug!(
        "search matched {} documents, {} returned",
        response.total_hits(),
        response.hits.hits.len()
    );

    response
        .hits
        .hits
        .into_iter()
        .map(|hit| {
            let id = hit.id.unwrap_or_default();
            let source = hit.source.ok_or_else(|| {
                SearchError::Decode(format!("document {} has no _source", id))
            })?;
            serde_json::from_value::<SearchResult>(source).map_err(|e| {
                SearchError::Decode(format!("failed to decode document {}: {}", id, e))
            })
        })
        .collect()
}
