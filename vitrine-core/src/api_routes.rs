/// Catalog listing endpoint. `GET` only, no parameters.
pub const MEDIA_CATALOG: &str = "/api/media";

/// Default published prefix under which directory contents are served.
pub const DEFAULT_MEDIA_PREFIX: &str = "/Media";

/// Generic message returned to callers when a catalog cannot be produced.
pub const CATALOG_UNAVAILABLE: &str = "Unable to fetch media files.";
