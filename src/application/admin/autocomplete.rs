use crate::{
    domain::entities::{AutocompleteModel, AutocompleteResult},
    domain::ports::changelist_repository::ChangeListRepository,
    infrastructure::http::middleware::error::ApiResult,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MAX_RESULTS: i64 = 20;

#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteRequest {
    pub model: AutocompleteModel,
    #[serde(default)]
    pub term: String,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    pub results: Vec<AutocompleteResult>,
}

/// Lookups behind the autocomplete widgets of the admin forms
#[derive(Clone)]
pub struct AutocompleteAdmin {
    changelists: Arc<dyn ChangeListRepository>,
}

impl AutocompleteAdmin {
    pub fn new(changelists: Arc<dyn ChangeListRepository>) -> Self {
        Self { changelists }
    }

    pub async fn search(&self, request: &AutocompleteRequest) -> ApiResult<AutocompleteResponse> {
        let results = self
            .changelists
            .autocomplete(request.model, request.term.trim(), MAX_RESULTS)
            .await?;
        Ok(AutocompleteResponse { results })
    }
}
