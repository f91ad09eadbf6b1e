use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;
use vitrine_core::api_routes::MEDIA_CATALOG;

use crate::{
    handlers::list_media_handler,
    infra::{app_state::AppState, config::CorsConfig},
};

/// Build the complete application router.
///
/// The catalog endpoint is always mounted. The media directory itself is
/// served under the published prefix when file serving is enabled, so every
/// file address in a catalog response resolves against the same server.
/// Subdirectory entries are listed but not browsable: their addresses never
/// answer with a success status.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let mut router = Router::new().route(MEDIA_CATALOG, get(list_media_handler));

    if config.media.serve_files {
        info!(
            prefix = %config.media.url_prefix,
            root = %config.media.root.display(),
            "serving media files"
        );
        router = router.nest_service(
            &config.media.url_prefix,
            ServeDir::new(&config.media.root),
        );
    }

    if let Some(cors) = cors_layer(&config.cors) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if !cors.is_enabled() {
        return None;
    }

    let allow_origin = if cors.is_wildcard_included() {
        AllowOrigin::any()
    } else {
        // Origins are validated during config load.
        let origins: Vec<HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::HEAD]),
    )
}
