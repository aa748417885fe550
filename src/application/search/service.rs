use crate::domain::search::{entity::SearchResult, errors::SearchError, repository::Searcher};
use tracing::error;

pub struct SearchService {
    repository: Box<dyn Searcher>,
}

impl SearchService {
    pub fn new(repository: Box<dyn Searcher>) -> Self {
        Self { repository }
    }

    /// Forwards to the injected [`Searcher`].
    ///
    /// A failing searcher is logged and reported as `Ok` with an empty list,
    /// so an empty result does not imply the search ran. The `Err` arm is
    /// never produced.
    pub async fn get_search_service(
        &self,
        keyword: &str,
        index_name: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        match self.repository.search(keyword, index_name).await {
            Ok(results) => Ok(results),
            Err(err) => {
                error!(index = index_name, "search failed: {}", err);
                Ok(Vec::new())
            }
        }
    }
}
