//! # Vitrine Server
//!
//! Publishes a single flat directory of media files over HTTP.
//!
//! - `GET /api/media` lists the directory as `{ "files": [ { name, url, type } ] }`
//!   in natural name order, or answers `500 { "error": ... }` when the
//!   directory cannot be read.
//! - The files themselves are served under the published prefix (`/Media` by
//!   default) so every `url` in the listing resolves.
//!
//! Configuration is layered (defaults, `vitrine.toml`, environment, CLI); see
//! [`infra::config`].

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
