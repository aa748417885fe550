//! Query DSL bodies sent to `_search`.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    /// Tokens must appear contiguously and in order in the field.
    MatchPhrase(BTreeMap<String, String>),
}

impl Query {
    pub fn match_phrase(field: &str, phrase: &str) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(field.to_string(), phrase.to_string());
        Query::MatchPhrase(clause)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchBody {
    pub query: Query,
    pub from: usize,
    pub size: usize,
}

impl SearchBody {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            from: 0,
            size: 10,
        }
    }

    pub fn page(mut self, from: usize, size: usize) -> Self {
        self.from = from;
        self.size = size;
        self
    }
}
