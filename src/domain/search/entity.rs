use serde::{Deserialize, Serialize};

/// One decoded hit: the `author` and `title` fields of a stored document.
///
/// Fields absent from the stored document decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub author: String,
    pub title: String,
}

impl SearchResult {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}
