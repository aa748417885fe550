use super::helpers::{connect, seed_index, unique_index};
use search_service::{
    application::search::service::SearchService,
    domain::search::{entity::SearchResult, errors::SearchError, repository::Searcher},
    infrastructure::repositories::es_search_repository::EsSearchRepository,
};

const INDEX_NAME: &str = "test_index";

#[tokio::test]
async fn indexed_document_is_found_by_title_phrase() {
    let Some(client) = connect().await else {
        return;
    };
    let hamlet = SearchResult::new("William Shakespeare", "Hamlet");
    seed_index(&client, INDEX_NAME, std::slice::from_ref(&hamlet)).await;

    let repo = EsSearchRepository::new(client.clone());
    let got = repo.search("Hamlet", INDEX_NAME).await;

    client
        .delete_index(INDEX_NAME)
        .await
        .expect("failed to delete index");
    assert_eq!(got.expect("search failed"), vec![hamlet]);
}

#[tokio::test]
async fn phrase_must_match_in_order() {
    let Some(client) = connect().await else {
        return;
    };
    let index = unique_index("phrase");
    let docs = vec![
        SearchResult::new("William Shakespeare", "The Merchant of Venice"),
        SearchResult::new("Thomas Mann", "Death in Venice"),
    ];
    seed_index(&client, &index, &docs).await;

    let repo = EsSearchRepository::new(client.clone());
    let in_order = repo.search("Merchant of Venice", &index).await;
    let reversed = repo.search("Venice of Merchant", &index).await;

    client.delete_index(&index).await.expect("failed to delete index");
    assert_eq!(in_order.expect("search failed"), vec![docs[0].clone()]);
    assert!(reversed.expect("search failed").is_empty());
}

#[tokio::test]
async fn missing_index_is_an_engine_error_but_service_succeeds() {
    let Some(client) = connect().await else {
        return;
    };
    let index = unique_index("missing");

    let repo = EsSearchRepository::new(client.clone());
    let err = repo.search("Hamlet", &index).await.unwrap_err();
    assert!(matches!(err, SearchError::Engine { status: 404, .. }));

    let service = SearchService::new(Box::new(EsSearchRepository::new(client)));
    let got = service.get_search_service("Hamlet", &index).await;
    assert!(got.expect("service never returns an error").is_empty());
}
