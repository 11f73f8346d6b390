//! # Client Settings
//!
//! Where the completion endpoint lives, how long to wait for it, and how to
//! treat answers without step markers. Settings are plain JSON; every field
//! has a default so a partial file (or none at all) is fine.
//!
//! ```json
//! {
//!   "base_url": "https://beamcee.example.com",
//!   "missing_marker_policy": "single-block"
//! }
//! ```
//!
//! Two environment variables override the file: `BEAMCEE_BASE_URL` and
//! `BEAMCEE_ENDPOINT_PATH`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::segmenter::MissingMarkerPolicy;

/// Default host serving the chat-completion integration
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default chat-completion route
pub const DEFAULT_ENDPOINT_PATH: &str = "/integrations/chat-gpt/conversationgpt4";

pub const ENV_BASE_URL: &str = "BEAMCEE_BASE_URL";
pub const ENV_ENDPOINT_PATH: &str = "BEAMCEE_ENDPOINT_PATH";

/// Completion client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Scheme and host, e.g. `https://beamcee.example.com`
    pub base_url: String,

    /// Route of the streaming chat-completion endpoint
    pub endpoint_path: String,

    /// Upper bound on the whole request, stream included
    pub request_timeout_secs: u64,

    /// Upper bound on establishing the connection
    pub connect_timeout_secs: u64,

    /// Behavior when the answer has no `Step N:` markers
    pub missing_marker_policy: MissingMarkerPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
            missing_marker_policy: MissingMarkerPolicy::Empty,
        }
    }
}

impl ClientSettings {
    /// Full endpoint URL
    ///
    /// ```rust
    /// use beam_core::settings::ClientSettings;
    ///
    /// let settings = ClientSettings {
    ///     base_url: "https://api.example.com/".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     settings.endpoint_url(),
    ///     "https://api.example.com/integrations/chat-gpt/conversationgpt4"
    /// );
    /// ```
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.endpoint_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Apply `BEAMCEE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(path) = lookup(ENV_ENDPOINT_PATH).filter(|v| !v.trim().is_empty()) {
            self.endpoint_path = path.trim().to_string();
        }
        self
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> BeamResult<()> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(BeamError::settings("base_url", "must not be empty"));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(BeamError::settings(
                "base_url",
                format!("'{}' must start with http:// or https://", base),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(BeamError::settings("request_timeout_secs", "must be at least 1"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(BeamError::settings("connect_timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(
            settings.endpoint_url(),
            "http://localhost:3000/integrations/chat-gpt/conversationgpt4"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(120));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{"base_url":"https://x.test","missing_marker_policy":"error"}"#;
        let settings: ClientSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.base_url, "https://x.test");
        assert_eq!(settings.endpoint_path, DEFAULT_ENDPOINT_PATH);
        assert_eq!(settings.missing_marker_policy, MissingMarkerPolicy::Error);
    }

    #[test]
    fn test_url_joining() {
        let settings = ClientSettings {
            base_url: "https://x.test/".to_string(),
            endpoint_path: "chat".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.endpoint_url(), "https://x.test/chat");
    }

    #[test]
    fn test_overrides() {
        let settings = ClientSettings::default().with_overrides(|key| match key {
            ENV_BASE_URL => Some(" https://override.test ".to_string()),
            ENV_ENDPOINT_PATH => Some(String::new()),
            _ => None,
        });
        assert_eq!(settings.base_url, "https://override.test");
        assert_eq!(settings.endpoint_path, DEFAULT_ENDPOINT_PATH);
    }

    #[test]
    fn test_validation() {
        let bad_scheme = ClientSettings {
            base_url: "ftp://x".to_string(),
            ..Default::default()
        };
        assert_eq!(bad_scheme.validate().unwrap_err().error_code(), "SETTINGS");

        let empty = ClientSettings {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let zero_timeout = ClientSettings {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
