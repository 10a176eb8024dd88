pub mod core;
pub mod errors;
pub mod router;
pub mod database;
pub mod autocomplete;
pub mod welcome;
