use std::collections::HashMap;
use std::sync::Arc;
use axum::extract::{Query, State};
use axum::Json;
use crate::autocomplete::autocomplete_service::AutocompleteService;
use crate::autocomplete::model::{AutocompleteQuery, Suggestion};
use crate::core::AppState;
use crate::errors::AppResponse;

pub async fn handle_autocomplete(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>
) -> AppResponse<Json<Vec<Suggestion>>> {

    let query = AutocompleteQuery::try_from(&params)?;
    let suggestions = AutocompleteService::suggest(state, &query).await?;
    Ok(Json(suggestions))
}
