use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::error;
use vitrine_core::api_routes::CATALOG_UNAVAILABLE;
use vitrine_model::CatalogResponse;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

/// List the media directory.
///
/// Every request scans the directory again on the blocking pool; there is no
/// cache to invalidate.
pub async fn list_media_handler(
    State(state): State<AppState>,
) -> AppResult<Json<CatalogResponse>> {
    let scanner = Arc::clone(&state.scanner);
    let root = state.media_root().to_path_buf();

    let files = tokio::task::spawn_blocking(move || scanner.scan(&root))
        .await
        .map_err(|err| {
            error!(error = %err, "catalog scan task did not complete");
            AppError::internal(CATALOG_UNAVAILABLE)
        })??;

    Ok(Json(CatalogResponse { files }))
}
