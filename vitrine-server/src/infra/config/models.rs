use std::path::{Path, PathBuf};

use vitrine_core::{DirectoryPolicy, api_routes::DEFAULT_MEDIA_PREFIX};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MEDIA_ROOT: &str = "public/Media";

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub media: MediaConfig,
    pub cors: CorsConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn media_root(&self) -> &Path {
        &self.media.root
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory whose entries form the catalog
    pub root: PathBuf,
    /// Published prefix, always with a leading `/` and no trailing `/`
    pub url_prefix: String,
    /// Serve the directory's files under `url_prefix`
    pub serve_files: bool,
    /// List subdirectories as `other` entries
    pub include_directories: bool,
}

impl MediaConfig {
    pub fn directory_policy(&self) -> DirectoryPolicy {
        if self.include_directories {
            DirectoryPolicy::Include
        } else {
            DirectoryPolicy::Skip
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_MEDIA_ROOT),
            url_prefix: DEFAULT_MEDIA_PREFIX.to_string(),
            serve_files: true,
            include_directories: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Empty means no CORS layer is installed.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
