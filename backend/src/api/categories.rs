//! Category API endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::DataPayload;
use crate::AppState;

/// GET /api/categories - Distinct categories in order of first occurrence.
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<DataPayload<Vec<String>>> {
    let categories = state.store.list_categories().await;
    success(DataPayload { data: categories })
}
