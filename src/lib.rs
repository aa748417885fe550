//! Keyword search over an Elasticsearch index, split into a `Searcher`
//! repository and a service that depends only on the trait.

pub mod config;
pub mod telemetry;

pub mod domain {
    pub mod search {
        pub mod entity;
        pub mod errors;
        pub mod repository;
        pub mod value_objects;
    }
}

pub mod application {
    pub mod search {
        pub mod service;
    }
}

pub mod infrastructure {
    pub mod elasticsearch {
        pub mod client;
        pub mod query;
        pub mod response;
    }
    pub mod repositories {
        pub mod es_search_repository;
    }
}
