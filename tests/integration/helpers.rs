use search_service::{
    config::Config,
    domain::search::entity::SearchResult,
    infrastructure::elasticsearch::client::{ElasticsearchClient, index_mapping},
    telemetry::init_tracing,
};
use std::sync::Arc;
use uuid::Uuid;

fn build_config(elasticsearch_url: String) -> Config {
    Config {
        elasticsearch_url,
        elasticsearch_username: std::env::var("ELASTICSEARCH_USERNAME").ok(),
        elasticsearch_password: std::env::var("ELASTICSEARCH_PASSWORD").ok(),
        elasticsearch_request_timeout_seconds: 10,
    }
}

/// Connects to the first reachable cluster, or `None` when there is none.
pub async fn connect() -> Option<Arc<ElasticsearchClient>> {
    init_tracing();

    let mut candidates = Vec::new();
    if let Ok(config) = Config::load() {
        candidates.push(config.elasticsearch_url);
    }
    candidates.push("http://127.0.0.1:9200".to_string());
    candidates.push("http://127.0.0.1:19200".to_string());

    for candidate in candidates {
        let Ok(client) = ElasticsearchClient::new(&build_config(candidate.clone())) else {
            continue;
        };
        if client.ping().await.is_ok() {
            return Some(Arc::new(client));
        }
    }

    tracing::warn!("no Elasticsearch reachable; skipping live test");
    None
}

/// Creates `index` with the author/title mapping and indexes `docs` under ids 0..n.
pub async fn seed_index(client: &ElasticsearchClient, index: &str, docs: &[SearchResult]) {
    let _ = client.delete_index(index).await;
    client
        .create_index(index, &index_mapping())
        .await
        .expect("failed to create index");
    for (i, doc) in docs.iter().enumerate() {
        client
            .index_document(index, &i.to_string(), doc)
            .await
            .expect("failed to index document");
    }
    client.refresh(index).await.expect("failed to refresh index");
}

pub fn unique_index(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::now_v7().simple())
}
