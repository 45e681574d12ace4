//! Web Vitals Analytics
//!
//! This crate forwards web vitals and report usage to an analytics tag:
//!
//! - Normalized events for CLS, FCP, FID and LCP with rating and debug locator
//! - Tag configuration for legacy (`UA-`) and modern (`G-`) vendor ids
//! - Report success/error telemetry with anonymized configuration state
//! - Pluggable sinks: log, in-memory recording, bounded beacon queue
//!
//! Reporting never fails from the caller's point of view. Debug derivation
//! degrades to placeholders and sink errors are logged and dropped.
//!
//! # Example
//!
//! ```rust
//! use telemetry::{Analytics, AnalyticsConfig, RecordingSink};
//! use vitals::{ElementNode, MetricName, MetricSample, RawEntry};
//!
//! let config = AnalyticsConfig::new("G-EXAMPLE")
//!     .with_path("/pricing")
//!     .with_hostname("localhost");
//! let mut analytics = Analytics::init(config, RecordingSink::new());
//!
//! let hero = ElementNode::new("img").with_id("hero");
//! let sample = MetricSample::new(MetricName::Lcp, 2300.0, 2300.0, "v1-1")
//!     .with_entries(vec![RawEntry::largest_paint(Some(hero))]);
//! analytics.report_metric(sample);
//!
//! let params = analytics.sink().last_event("LCP").unwrap();
//! assert_eq!(params.event_meta.as_deref(), Some("good"));
//! assert_eq!(params.event_debug.as_deref(), Some("img#hero"));
//! ```
//!
//! # Modules
//!
//! - [`config`] - Startup configuration and tag config
//! - [`event`] - Event parameters and tag commands
//! - [`reporter`] - Web vitals event construction
//! - [`report`] - Report usage telemetry
//! - [`privacy`] - State anonymization
//! - [`transport`] - Sinks

mod client;
pub mod config;
mod error;
pub mod event;
pub mod privacy;
pub mod report;
pub mod reporter;
pub mod transport;

pub use client::Analytics;
pub use config::{AnalyticsConfig, TagConfig, Transport};
pub use error::{TelemetryError, TelemetryResult};
pub use event::{EventParams, TagCommand};
pub use privacy::{anonymize_config, ReportState};
pub use report::{Report, ReportError, ReportMeta, ReportOutcome};
pub use reporter::metric_event;
pub use transport::{AnalyticsSink, LogSink, QueueConfig, QueueSink, RecordingSink};
