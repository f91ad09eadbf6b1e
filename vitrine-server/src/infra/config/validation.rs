use axum::http::HeaderValue;
use thiserror::Error;

use super::models::Config;
use vitrine_core::api_routes::MEDIA_CATALOG;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("invalid media url prefix '{prefix}': {reason}")]
    InvalidUrlPrefix { prefix: String, reason: &'static str },
    #[error("invalid CORS origin '{origin}'")]
    InvalidCorsOrigin { origin: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Normalize a published prefix to `/segment[/segment...]`.
///
/// A leading `/` is added when missing and trailing slashes are dropped. The
/// prefix is emitted verbatim in every address, so only unreserved URL
/// characters (`A-Z a-z 0-9 - . _ ~`) and `/` are accepted. The root prefix is
/// rejected, as is any prefix that would shadow the catalog endpoint.
pub fn normalize_url_prefix(raw: &str) -> Result<String, ConfigGuardRailError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason| ConfigGuardRailError::InvalidUrlPrefix {
        prefix: raw.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("the prefix must name a path below the root"));
    }

    let normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };

    if normalized.contains("//") {
        return Err(invalid("empty path segment"));
    }
    if !normalized.chars().all(is_prefix_char) {
        return Err(invalid(
            "only unreserved URL characters and '/' are allowed",
        ));
    }
    if normalized.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(invalid("dot segments are not allowed"));
    }

    let api_root = MEDIA_CATALOG
        .rsplit_once('/')
        .map(|(root, _)| root)
        .unwrap_or(MEDIA_CATALOG);
    if normalized == api_root
        || normalized.starts_with(&format!("{api_root}/"))
    {
        return Err(invalid("the prefix overlaps the catalog endpoint"));
    }

    Ok(normalized)
}

fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '.' | '_' | '~')
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    for origin in &config.cors.allowed_origins {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            return Err(ConfigGuardRailError::InvalidCorsOrigin {
                origin: origin.clone(),
            });
        }
    }

    if config.cors.is_wildcard_included()
        && config.cors.allowed_origins.len() > 1
    {
        warnings.push(
            "CORS wildcard origin listed alongside explicit origins; every origin will be allowed",
        );
    }

    if !config.media.root.is_dir() {
        warnings.push_with_hint(
            format!(
                "media root {} is not a readable directory; catalog requests will fail",
                config.media.root.display()
            ),
            "Create the directory or point MEDIA_ROOT / --media-root at an existing one",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_gets_leading_slash_and_loses_trailing() {
        assert_eq!(normalize_url_prefix("Media").unwrap(), "/Media");
        assert_eq!(normalize_url_prefix("/Media/").unwrap(), "/Media");
        assert_eq!(normalize_url_prefix(" /files/public// ").unwrap(), "/files/public");
    }

    #[test]
    fn test_root_prefix_is_rejected() {
        assert!(normalize_url_prefix("").is_err());
        assert!(normalize_url_prefix("/").is_err());
        assert!(normalize_url_prefix("///").is_err());
    }

    #[test]
    fn test_prefix_cannot_shadow_catalog_endpoint() {
        assert!(normalize_url_prefix("/api").is_err());
        assert!(normalize_url_prefix("/api/media").is_err());
        assert!(normalize_url_prefix("/api/media/files").is_err());
        assert!(normalize_url_prefix("/apidocs").is_ok());
    }

    #[test]
    fn test_malformed_prefixes_are_rejected() {
        assert!(normalize_url_prefix("/a//b").is_err());
        assert!(normalize_url_prefix("/media?x=1").is_err());
        assert!(normalize_url_prefix("/{name}").is_err());
        assert!(normalize_url_prefix("/files/../secret").is_err());
    }

    #[test]
    fn test_prefix_must_be_encoded_already() {
        for raw in ["/my media", "/50%off", "/médias", "/a+b", "/a;b"] {
            assert!(
                matches!(
                    normalize_url_prefix(raw),
                    Err(ConfigGuardRailError::InvalidUrlPrefix { .. })
                ),
                "{raw} should be rejected"
            );
        }
        assert_eq!(
            normalize_url_prefix("my-media_v2.~x").unwrap(),
            "/my-media_v2.~x"
        );
    }

    #[test]
    fn test_invalid_cors_origin_is_an_error() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["http://ok.test".into(), "bad\norigin".into()];
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::InvalidCorsOrigin { .. })
        ));
    }

    #[test]
    fn test_missing_media_root_is_a_warning() {
        let mut config = Config::default();
        config.media.root = "/definitely/not/here".into();
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("/definitely/not/here"));
    }
}
