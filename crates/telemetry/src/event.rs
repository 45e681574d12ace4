//! Analytics event parameters and tag commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::TagConfig;

/// Property bag attached to an analytics event.
///
/// Only the fields that are set are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_meta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_debug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_interaction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<String>,
    /// Anonymized configuration descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

impl EventParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.event_category = Some(category.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.event_label = Some(label.to_string());
        self
    }

    pub fn with_meta(mut self, meta: &str) -> Self {
        self.event_meta = Some(meta.to_string());
        self
    }

    pub fn with_debug(mut self, debug: &str) -> Self {
        self.event_debug = Some(debug.to_string());
        self
    }

    /// Mark the event as not caused by a user interaction.
    pub fn non_interactive(mut self) -> Self {
        self.non_interaction = Some(true);
        self
    }

    pub fn with_report_size(mut self, size: u64) -> Self {
        self.report_size = Some(size);
        self
    }

    pub fn with_segments(mut self, segments: &str) -> Self {
        self.segments = Some(segments.to_string());
        self
    }

    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }
}

/// A command delivered to the analytics tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TagCommand {
    /// Tag initialization timestamp
    Js { timestamp: DateTime<Utc> },
    /// Property configuration for a vendor id
    Config { id: String, config: TagConfig },
    /// A named event with its parameters
    Event { name: String, params: EventParams },
}

impl TagCommand {
    /// Create an event command.
    pub fn event(name: &str, params: EventParams) -> Self {
        TagCommand::Event {
            name: name.to_string(),
            params,
        }
    }

    /// Short name of the command kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TagCommand::Js { .. } => "js",
            TagCommand::Config { .. } => "config",
            TagCommand::Event { .. } => "event",
        }
    }

    /// Event name and parameters, if this is an event command.
    pub fn as_event(&self) -> Option<(&str, &EventParams)> {
        match self {
            TagCommand::Event { name, params } => Some((name.as_str(), params)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_params_builder() {
        let params = EventParams::new()
            .with_value(30.0)
            .with_category("Web Vitals")
            .with_label("v1-123")
            .with_meta("good")
            .with_debug("html>body")
            .non_interactive();

        assert_eq!(params.value, Some(30.0));
        assert_eq!(params.event_category.as_deref(), Some("Web Vitals"));
        assert_eq!(params.event_label.as_deref(), Some("v1-123"));
        assert_eq!(params.non_interaction, Some(true));
        assert!(params.report_size.is_none());
    }

    #[test]
    fn test_event_params_skip_unset_fields() {
        let params = EventParams::new().with_value(1.0).with_report_size(3);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({ "value": 1.0, "report_size": 3 }));
    }

    #[test]
    fn test_tag_command_serialization() {
        let command = TagCommand::event("LCP", EventParams::new().with_value(2100.0));
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(
            value,
            json!({ "command": "event", "name": "LCP", "params": { "value": 2100.0 } })
        );

        let parsed: TagCommand = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, command);
    }

    #[test]
    fn test_tag_command_kind() {
        assert_eq!(TagCommand::Js { timestamp: Utc::now() }.kind(), "js");
        let command = TagCommand::event("FID", EventParams::new());
        assert_eq!(command.kind(), "event");
        assert_eq!(command.as_event().map(|(name, _)| name), Some("FID"));
    }
}
