mod config;
mod app_state;

pub use config::{AutocompleteConfig, UserDbConfig};
pub use app_state::*;
