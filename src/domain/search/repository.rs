use super::entity::SearchResult;
use super::errors::SearchError;
use async_trait::async_trait;

/// Keyword search against a named index.
///
/// Zero matches is `Ok(vec![])`, never an error. Dropping the returned future
/// cancels the in-flight request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Searcher: Send + Sync {
    async fn search(
        &self,
        keyword: &str,
        index_name: &str,
    ) -> Result<Vec<SearchResult>, SearchError>;
}
