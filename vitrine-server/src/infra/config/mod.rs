pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigOverrides,
};
pub use models::{Config, ConfigMetadata, CorsConfig, MediaConfig, ServerConfig};
pub use sources::EnvConfig;
pub use validation::{ConfigWarning, ConfigWarnings};
