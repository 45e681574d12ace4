//! Analytics configuration injected at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{TelemetryError, TelemetryResult};

/// Version tag sent with every page configuration.
pub const MEASUREMENT_VERSION: &str = "4";

/// Vendor id prefix selecting the legacy transport.
pub const LEGACY_PREFIX: &str = "UA-";

/// Vendor id prefix selecting the modern transport.
pub const MODERN_PREFIX: &str = "G-";

/// Host on which modern-transport debug mode stays off.
pub const DEFAULT_DEBUG_HOST_EXCLUSION: &str = "web-vitals-report.web.app";

/// Transport family selected by the vendor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Beacon delivery with custom dimension remapping
    Legacy,
    /// Event-based delivery with optional debug mode
    Modern,
    /// Unrecognized vendor id; only the base config is sent
    Unknown,
}

impl Transport {
    /// Classify a vendor id by its prefix.
    pub fn from_vendor_id(vendor_id: &str) -> Self {
        if vendor_id.starts_with(LEGACY_PREFIX) {
            Transport::Legacy
        } else if vendor_id.starts_with(MODERN_PREFIX) {
            Transport::Modern
        } else {
            Transport::Unknown
        }
    }
}

/// Page-level settings the tag is configured with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagConfig {
    pub measurement_version: String,
    pub page_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<String>,
    /// Custom dimension/metric slot to parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_map: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<bool>,
}

/// Configuration for the analytics session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Vendor property id, e.g. `UA-12345-1` or `G-ABCDEF`
    pub vendor_id: String,
    /// Path of the current page
    pub current_path: String,
    /// Hostname of the current page
    pub current_hostname: String,
    /// Hostname on which debug mode is not enabled
    pub debug_host_exclusion: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            vendor_id: String::new(),
            current_path: "/".to_string(),
            current_hostname: String::new(),
            debug_host_exclusion: DEFAULT_DEBUG_HOST_EXCLUSION.to_string(),
        }
    }
}

impl AnalyticsConfig {
    /// Create a config for the given vendor id.
    pub fn new(vendor_id: &str) -> Self {
        Self {
            vendor_id: vendor_id.to_string(),
            ..Default::default()
        }
    }

    /// Set the current page path.
    pub fn with_path(mut self, path: &str) -> Self {
        self.current_path = path.to_string();
        self
    }

    /// Set the current hostname.
    pub fn with_hostname(mut self, hostname: &str) -> Self {
        self.current_hostname = hostname.to_string();
        self
    }

    /// Set the host on which debug mode stays off.
    pub fn with_debug_host_exclusion(mut self, hostname: &str) -> Self {
        self.debug_host_exclusion = hostname.to_string();
        self
    }

    /// Parse a config from JSON, requiring a vendor id.
    pub fn from_json(json: &str) -> TelemetryResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.vendor_id.is_empty() {
            return Err(TelemetryError::InvalidConfig(
                "vendorId must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Transport family for the configured vendor id.
    pub fn transport(&self) -> Transport {
        Transport::from_vendor_id(&self.vendor_id)
    }

    /// Build the tag configuration for the current page.
    pub fn tag_config(&self) -> TagConfig {
        let mut config = TagConfig {
            measurement_version: MEASUREMENT_VERSION.to_string(),
            page_path: self.current_path.clone(),
            transport_type: None,
            custom_map: None,
            debug_mode: None,
        };

        match self.transport() {
            Transport::Legacy => {
                config.transport_type = Some("beacon".to_string());
                config.custom_map = Some(legacy_custom_map());
            }
            Transport::Modern => {
                if self.current_hostname != self.debug_host_exclusion {
                    config.debug_mode = Some(true);
                }
            }
            Transport::Unknown => {}
        }

        config
    }
}

fn legacy_custom_map() -> BTreeMap<String, String> {
    [
        ("dimension1", "measurement_version"),
        ("dimension2", "client_id"),
        ("dimension3", "segments"),
        ("dimension4", "config"),
        ("dimension5", "event_meta"),
        ("dimension6", "event_debug"),
        ("metric1", "report_size"),
    ]
    .into_iter()
    .map(|(slot, param)| (slot.to_string(), param.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AnalyticsConfig::default();
        assert!(config.vendor_id.is_empty());
        assert_eq!(config.current_path, "/");
        assert_eq!(config.debug_host_exclusion, DEFAULT_DEBUG_HOST_EXCLUSION);
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyticsConfig::new("G-TEST")
            .with_path("/report")
            .with_hostname("localhost")
            .with_debug_host_exclusion("example.com");

        assert_eq!(config.vendor_id, "G-TEST");
        assert_eq!(config.current_path, "/report");
        assert_eq!(config.current_hostname, "localhost");
        assert_eq!(config.debug_host_exclusion, "example.com");
    }

    #[test]
    fn test_transport_from_vendor_id() {
        assert_eq!(Transport::from_vendor_id("UA-123-1"), Transport::Legacy);
        assert_eq!(Transport::from_vendor_id("G-ABC"), Transport::Modern);
        assert_eq!(Transport::from_vendor_id("AW-1"), Transport::Unknown);
        assert_eq!(Transport::from_vendor_id(""), Transport::Unknown);
    }

    #[test]
    fn test_legacy_tag_config() {
        let tag = AnalyticsConfig::new("UA-XXXXXXXX-Y")
            .with_path("/blog/")
            .tag_config();

        assert_eq!(tag.measurement_version, "4");
        assert_eq!(tag.page_path, "/blog/");
        assert_eq!(tag.transport_type.as_deref(), Some("beacon"));
        assert_eq!(tag.debug_mode, None);

        let map = tag.custom_map.unwrap();
        assert_eq!(map.len(), 7);
        assert_eq!(map["dimension1"], "measurement_version");
        assert_eq!(map["dimension6"], "event_debug");
        assert_eq!(map["metric1"], "report_size");
    }

    #[test]
    fn test_modern_tag_config_debug_mode() {
        let tag = AnalyticsConfig::new("G-ABC")
            .with_hostname("localhost")
            .tag_config();
        assert_eq!(tag.debug_mode, Some(true));
        assert!(tag.custom_map.is_none());
        assert!(tag.transport_type.is_none());

        let tag = AnalyticsConfig::new("G-ABC")
            .with_hostname(DEFAULT_DEBUG_HOST_EXCLUSION)
            .tag_config();
        assert_eq!(tag.debug_mode, None);
    }

    #[test]
    fn test_unknown_tag_config() {
        let tag = AnalyticsConfig::new("XYZ").tag_config();
        assert_eq!(tag.transport_type, None);
        assert_eq!(tag.custom_map, None);
        assert_eq!(tag.debug_mode, None);
    }

    #[test]
    fn test_config_from_json() {
        let config = AnalyticsConfig::from_json(
            r#"{ "vendorId": "G-1", "currentPath": "/x", "currentHostname": "a.test" }"#,
        )
        .unwrap();
        assert_eq!(config.vendor_id, "G-1");
        assert_eq!(config.current_path, "/x");
        assert_eq!(config.debug_host_exclusion, DEFAULT_DEBUG_HOST_EXCLUSION);

        assert!(matches!(
            AnalyticsConfig::from_json("{}"),
            Err(TelemetryError::InvalidConfig(_))
        ));
        assert!(matches!(
            AnalyticsConfig::from_json("not json"),
            Err(TelemetryError::Serialization(_))
        ));
    }

    #[test]
    fn test_tag_config_serialization_omits_unset() {
        let tag = AnalyticsConfig::new("G-1").with_path("/").tag_config();
        let value = serde_json::to_value(&tag).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "measurement_version": "4",
                "page_path": "/",
                "debug_mode": true
            })
        );
    }
}
