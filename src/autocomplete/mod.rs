pub mod model;
pub mod query_param;
pub mod handler;
pub mod routes;
mod autocomplete_service;

pub use autocomplete_service::AutocompleteService;
