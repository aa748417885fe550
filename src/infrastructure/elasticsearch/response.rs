//! Response bodies returned by the engine.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Hits,
}

#[derive(Debug, Default, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct TotalHits {
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Option<serde_json::Value>,
}

impl SearchResponse {
    pub fn total_hits(&self) -> u64 {
        self.hits.total.as_ref().map(|t| t.value).unwrap_or(0)
    }
}

/// `{ "status": 400, "error": { "root_cause": [ { "reason": "..." } ] } }`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<u16>,
    pub error: ErrorBody,
}

/// Some proxies and older nodes send `error` as a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Structured(ErrorCause),
    Message(String),
}

#[derive(Debug, Deserialize)]
pub struct ErrorCause {
    #[serde(default)]
    pub root_cause: Vec<RootCause>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RootCause {
    #[serde(default)]
    pub reason: Option<String>,
}

impl ErrorResponse {
    /// First root cause reason, falling back to the top-level reason.
    pub fn reason(&self) -> String {
        match &self.error {
            ErrorBody::Structured(cause) => cause
                .root_cause
                .first()
                .and_then(|c| c.reason.clone())
                .or_else(|| cause.reason.clone())
                .unwrap_or_else(|| "unknown error".to_string()),
            ErrorBody::Message(message) => message.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Acknowledged {
    pub acknowledged: bool,
}

#[derive(Debug, Deserialize)]
pub struct IndexedDocument {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    pub result: String,
}
