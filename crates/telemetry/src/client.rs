//! Analytics session tying configuration, reporters and a sink together.

use chrono::Utc;

use vitals::{DomNode, MetricSample};

use crate::config::AnalyticsConfig;
use crate::event::{EventParams, TagCommand};
use crate::report::ReportOutcome;
use crate::reporter::metric_event;
use crate::transport::AnalyticsSink;

/// An initialized analytics tag.
///
/// Every reporting method is fire-and-forget: sink failures are logged and
/// counted, never returned.
#[derive(Debug)]
pub struct Analytics<S: AnalyticsSink> {
    config: AnalyticsConfig,
    sink: S,
    commands_sent: u64,
    commands_dropped: u64,
}

impl<S: AnalyticsSink> Analytics<S> {
    /// Initialize the tag: send the start timestamp, then the page config.
    pub fn init(config: AnalyticsConfig, sink: S) -> Self {
        let mut analytics = Self {
            config,
            sink,
            commands_sent: 0,
            commands_dropped: 0,
        };

        analytics.dispatch(TagCommand::Js {
            timestamp: Utc::now(),
        });
        analytics.dispatch(TagCommand::Config {
            id: analytics.config.vendor_id.clone(),
            config: analytics.config.tag_config(),
        });

        tracing::debug!(
            "Analytics initialized for {} ({:?} transport)",
            analytics.config.vendor_id,
            analytics.config.transport()
        );
        analytics
    }

    /// Report a finalized web vitals sample.
    ///
    /// Suitable as the callback handed to the vitals measurement layer.
    pub fn report_metric<N: DomNode>(&mut self, sample: MetricSample<N>) {
        let (name, params) = metric_event(&sample);
        tracing::debug!(
            "Reporting {} = {} ({})",
            name,
            sample.value,
            params.event_meta.as_deref().unwrap_or_default()
        );
        self.send_event(name, params);
    }

    /// Report the outcome of a report generation attempt.
    pub fn measure_report(&mut self, outcome: &ReportOutcome) {
        let (name, params) = outcome.to_event();
        self.send_event(name, params);
    }

    /// Send an arbitrary event.
    pub fn send_event(&mut self, name: &str, params: EventParams) {
        self.dispatch(TagCommand::event(name, params));
    }

    fn dispatch(&mut self, command: TagCommand) {
        let kind = command.kind();
        match self.sink.send(command) {
            Ok(()) => self.commands_sent += 1,
            Err(e) => {
                self.commands_dropped += 1;
                tracing::warn!("Dropped analytics {} command: {}", kind, e);
            }
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the session and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Commands accepted by the sink.
    pub fn commands_sent(&self) -> u64 {
        self.commands_sent
    }

    /// Commands the sink rejected.
    pub fn commands_dropped(&self) -> u64 {
        self.commands_dropped
    }
}
