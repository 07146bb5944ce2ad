//! Canvas LMS connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default Canvas instance.
fn default_base_url() -> String {
    String::from("https://canvas.uautonoma.cl")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Default `per_page` for paginated endpoints. Canvas caps this at 100.
const fn default_page_size() -> u32 {
    100
}

/// Largest `per_page` Canvas honours.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Clone, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// Web root of the instance, without the `/api/v1` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API access token sent as `Authorization: Bearer`.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl CanvasConfig {
    /// Check if both an instance URL and a token are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.token.trim().is_empty()
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn web_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Browser URL of a course.
    #[must_use]
    pub fn course_url(&self, course_id: u64) -> String {
        format!("{}/courses/{course_id}", self.web_root())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a token and
    /// [`ConfigError::InvalidValue`] for an out-of-range page size or a
    /// base URL that is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "canvas".into(),
            });
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "canvas.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "canvas.page_size".into(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = CanvasConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.page_size, 100);
        assert_eq!(config.timeout_secs, 30);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn course_url_ignores_trailing_slash() {
        let config = CanvasConfig {
            base_url: "https://canvas.example.edu/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.course_url(42),
            "https://canvas.example.edu/courses/42"
        );
    }

    #[test]
    fn rejects_oversized_page() {
        let config = CanvasConfig {
            token: "tok".into(),
            page_size: 500,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "canvas.page_size"
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let config = CanvasConfig {
            token: "secret-token".into(),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
