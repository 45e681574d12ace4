//! Sinks that receive tag commands.

use crate::error::{TelemetryError, TelemetryResult};
use crate::event::{EventParams, TagCommand};

/// Destination for analytics tag commands.
pub trait AnalyticsSink {
    /// Deliver one command. Failures are reported but never retried here.
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()>;
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Box<S> {
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()> {
        (**self).send(command)
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &mut S {
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()> {
        (**self).send(command)
    }
}

/// Writes every command to the log. Used when no vendor tag is installed.
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()> {
        let payload = serde_json::to_string(&command)?;
        tracing::info!(target: "analytics", kind = command.kind(), "{}", payload);
        Ok(())
    }
}

/// Keeps commands in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<TagCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far, in order.
    pub fn commands(&self) -> &[TagCommand] {
        &self.commands
    }

    /// Event commands only.
    pub fn events(&self) -> impl Iterator<Item = (&str, &EventParams)> {
        self.commands.iter().filter_map(TagCommand::as_event)
    }

    /// Parameters of the most recent event with the given name.
    pub fn last_event(&self, name: &str) -> Option<&EventParams> {
        self.events()
            .filter(|(event_name, _)| *event_name == name)
            .map(|(_, params)| params)
            .last()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl AnalyticsSink for RecordingSink {
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()> {
        self.commands.push(command);
        Ok(())
    }
}

/// Configuration for [`QueueSink`].
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Payloads per beacon
    pub batch_size: usize,
    /// Maximum queue size before rejecting commands
    pub max_queue_size: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            batch_size: 20,
            max_queue_size: 1000,
        }
    }
}

impl QueueConfig {
    /// Set the batch size. Zero is raised to one.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the maximum queue size.
    pub fn with_max_queue_size(mut self, size: usize) -> Self {
        self.max_queue_size = size;
        self
    }
}

/// Bounded queue of serialized commands awaiting delivery.
///
/// The owner drains batches and hands them to whatever beacon or HTTP
/// transport the page provides.
#[derive(Debug, Default)]
pub struct QueueSink {
    config: QueueConfig,
    queue: Vec<String>,
}

impl QueueSink {
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            config,
            queue: Vec::new(),
        }
    }

    /// Check if a full batch is waiting.
    pub fn should_flush(&self) -> bool {
        self.queue.len() >= self.batch_size()
    }

    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    pub fn has_queued(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Take up to one batch of payloads, oldest first.
    pub fn next_batch(&mut self) -> Vec<String> {
        let count = self.batch_size().min(self.queue.len());
        self.queue.drain(..count).collect()
    }

    /// Take all queued payloads.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queue)
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    // A zero batch size behaves as one.
    fn batch_size(&self) -> usize {
        self.config.batch_size.max(1)
    }
}

impl AnalyticsSink for QueueSink {
    fn send(&mut self, command: TagCommand) -> TelemetryResult<()> {
        if self.queue.len() >= self.config.max_queue_size {
            return Err(TelemetryError::QueueFull);
        }
        let payload = serde_json::to_string(&command)?;
        self.queue.push(payload);
        Ok(())
    }
}
