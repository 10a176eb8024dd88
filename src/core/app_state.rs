use std::sync::Arc;
use crate::core::AutocompleteConfig;
use crate::database::UserDirectory;

#[derive(Clone)]
pub struct AppState {
    pub env: AutocompleteConfig,
    pub user_directory: Arc<dyn UserDirectory>,
}
