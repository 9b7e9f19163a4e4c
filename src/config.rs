//! Configuration management for the CRPT client.

use serde::{Deserialize, Serialize};

use crate::ratelimit::TimeWindow;

/// Main configuration for the CRPT client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Document creation endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Which header name carries the request signature
    #[serde(default)]
    pub signature_header: SignatureHeader,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            signature_header: SignatureHeader::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

fn default_endpoint() -> String {
    "https://ismp.crpt.ru/api/v3/lk/documents/create".to_string()
}

/// Header name used for the document signature.
///
/// Deployments disagree on the header name, so it is configurable rather
/// than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureHeader {
    /// `Signature`
    #[default]
    Signature,
    /// `X-Signature`
    XSignature,
}

impl SignatureHeader {
    /// Get the wire name of this header.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureHeader::Signature => "Signature",
            SignatureHeader::XSignature => "X-Signature",
        }
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Time unit of the replenishment window
    #[serde(default = "default_window")]
    pub window: TimeWindow,

    /// Window duration, in units of `window`
    #[serde(default = "default_duration")]
    pub duration: u64,

    /// Maximum number of requests admitted per window
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            duration: default_duration(),
            limit: default_limit(),
        }
    }
}

fn default_window() -> TimeWindow {
    TimeWindow::Second
}

fn default_duration() -> u64 {
    1
}

fn default_limit() -> usize {
    100
}

impl ClientConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: &str) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents)
            .map_err(|e| crate::error::CrptError::Config(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();

        assert_eq!(config.endpoint, "https://ismp.crpt.ru/api/v3/lk/documents/create");
        assert_eq!(config.signature_header, SignatureHeader::Signature);
        assert_eq!(config.rate_limit.window, TimeWindow::Second);
        assert_eq!(config.rate_limit.duration, 1);
        assert_eq!(config.rate_limit.limit, 100);
    }

    #[test]
    fn test_signature_header_names() {
        assert_eq!(SignatureHeader::Signature.name(), "Signature");
        assert_eq!(SignatureHeader::XSignature.name(), "X-Signature");
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
signature_header: x-signature
rate_limit:
  window: minute
  limit: 10
"#;
        let config: ClientConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.signature_header, SignatureHeader::XSignature);
        assert_eq!(config.rate_limit.window, TimeWindow::Minute);
        assert_eq!(config.rate_limit.duration, 1);
        assert_eq!(config.rate_limit.limit, 10);
        // Unset fields fall back to defaults
        assert_eq!(config.endpoint, "https://ismp.crpt.ru/api/v3/lk/documents/create");
    }
}
