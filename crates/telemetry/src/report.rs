//! Usage telemetry for report generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitals::NOT_SET;

use crate::event::EventParams;
use crate::privacy::{anonymize_config, segments, truthy_text, view_id, ReportState};

/// Event category for report usage.
pub const USAGE_CATEGORY: &str = "Usage";

/// Metadata attached to a generated report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportMeta {
    /// Where the report data came from, e.g. `ga` or `bigquery`
    #[serde(default)]
    pub source: Option<String>,
}

/// A generated report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Report {
    #[serde(default)]
    pub rows: Vec<Value>,
    #[serde(default)]
    pub meta: ReportMeta,
}

/// Error returned by report generation.
///
/// Codes arrive as-is from the reporting API and may be strings or numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportError {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ReportError {
    /// An error carrying only a message.
    pub fn with_message(message: &str) -> Self {
        Self {
            code: None,
            message: Some(Value::from(message)),
        }
    }
}

/// Result of one report generation attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportOutcome {
    #[serde(default)]
    pub state: ReportState,
    /// Time taken in milliseconds
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub report: Option<Report>,
    #[serde(default)]
    pub error: Option<ReportError>,
}

impl ReportOutcome {
    /// A successful outcome.
    pub fn success(state: ReportState, duration: f64, report: Report) -> Self {
        Self {
            state,
            duration,
            report: Some(report),
            error: None,
        }
    }

    /// A failed outcome.
    pub fn failure(state: ReportState, duration: f64, error: ReportError) -> Self {
        Self {
            state,
            duration,
            report: None,
            error: Some(error),
        }
    }

    /// `report_error` if an error is present, otherwise `report_success`.
    pub fn event_name(&self) -> &'static str {
        if self.error.is_some() {
            "report_error"
        } else {
            "report_success"
        }
    }

    /// Error code, else error message, else `(not set)`.
    pub fn label(&self) -> String {
        self.error
            .as_ref()
            .and_then(|e| {
                truthy_text(e.code.as_ref()).or_else(|| truthy_text(e.message.as_ref()))
            })
            .unwrap_or_else(|| NOT_SET.to_string())
    }

    /// Report source, else `(not set)`.
    pub fn meta(&self) -> String {
        self.report
            .as_ref()
            .and_then(|r| non_empty(&r.meta.source))
            .unwrap_or(NOT_SET)
            .to_string()
    }

    pub fn report_size(&self) -> u64 {
        self.report.as_ref().map_or(0, |r| r.rows.len() as u64)
    }

    /// Build the usage event for this outcome.
    pub fn to_event(&self) -> (&'static str, EventParams) {
        let params = EventParams::new()
            .with_value(self.duration)
            .with_report_size(self.report_size())
            .with_segments(&segments(&self.state))
            .with_config(&anonymize_config(&self.state, &view_id(&self.state)))
            .with_category(USAGE_CATEGORY)
            .with_label(&self.label())
            .with_meta(&self.meta());
        (self.event_name(), params)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
