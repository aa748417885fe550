use super::errors::SearchError;
use validator::Validate;

/// Phrase to match against the `title` field. Stored trimmed.
#[derive(Debug, Clone, Validate)]
pub struct Keyword {
    #[validate(length(min = 1))]
    pub value: String,
}

impl Keyword {
    pub fn new(value: &str) -> Result<Self, SearchError> {
        let keyword = Self {
            value: value.trim().to_string(),
        };
        keyword
            .validate()
            .map_err(|e| SearchError::ValidationError(format!("keyword: {}", e)))?;
        Ok(keyword)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Target index or index pattern. Naming rules are left to the engine.
#[derive(Debug, Clone, Validate)]
pub struct IndexName {
    #[validate(length(min = 1))]
    pub value: String,
}

impl IndexName {
    pub fn new(value: &str) -> Result<Self, SearchError> {
        let index = Self {
            value: value.to_string(),
        };
        index
            .validate()
            .map_err(|e| SearchError::ValidationError(format!("index name: {}", e)))?;
        Ok(index)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}
