use async_trait::async_trait;
use search_service::domain::search::{
    entity::SearchResult, errors::SearchError, repository::Searcher,
};

/// Returns the Hamlet record for every query.
#[derive(Clone)]
pub struct FixtureSearcher;

#[async_trait]
impl Searcher for FixtureSearcher {
    async fn search(
        &self,
        _keyword: &str,
        _index_name: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(vec![hamlet()])
    }
}

/// Fails every query the way an unreachable cluster would be reported.
#[derive(Clone)]
pub struct FailingSearcher;

#[async_trait]
impl Searcher for FailingSearcher {
    async fn search(
        &self,
        _keyword: &str,
        _index_name: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Err(SearchError::Engine {
            status: 503,
            reason: "cluster unavailable".to_string(),
        })
    }
}

pub fn hamlet() -> SearchResult {
    SearchResult::new("William Shakespeare", "Hamlet")
}
