use std::sync::Arc;
use crate::autocomplete::model::{AutocompleteQuery, SearchType, Suggestion};
use crate::core::AppState;
use crate::errors::AppError;

pub struct AutocompleteService;

impl AutocompleteService {

    /// Looks up the suggestions for an already validated query.
    ///
    /// Only users are searchable. The directory decides the order of the results, the
    /// service only projects each record to its `{id, label}` suggestion.
    pub async fn suggest(
        state: Arc<AppState>,
        query: &AutocompleteQuery,
    ) -> Result<Vec<Suggestion>, AppError> {
        match query.search_type {
            SearchType::Users => {
                let users = state.user_directory
                    .search_active_users(&query.q, query.limit)
                    .await?;
                Ok(users.into_iter().map(Suggestion::from).collect())
            }
        }
    }
}
