//! Metric samples and the raw performance entries they carry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownMetric;

/// The web vitals this crate knows how to rate and debug.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricName {
    /// Cumulative Layout Shift (unitless score)
    Cls,
    /// First Contentful Paint (milliseconds)
    Fcp,
    /// First Input Delay (milliseconds)
    Fid,
    /// Largest Contentful Paint (milliseconds)
    Lcp,
}

impl MetricName {
    /// All supported metrics.
    pub const ALL: [MetricName; 4] = [
        MetricName::Cls,
        MetricName::Fcp,
        MetricName::Fid,
        MetricName::Lcp,
    ];

    /// The short upper-case name used in analytics events.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Cls => "CLS",
            MetricName::Fcp => "FCP",
            MetricName::Fid => "FID",
            MetricName::Lcp => "LCP",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLS" => Ok(MetricName::Cls),
            "FCP" => Ok(MetricName::Fcp),
            "FID" => Ok(MetricName::Fid),
            "LCP" => Ok(MetricName::Lcp),
            other => Err(UnknownMetric(other.to_string())),
        }
    }
}

/// Width and height of a layout rectangle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One element moved by a layout shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSource<N> {
    /// The shifted node, if it is still reachable
    pub node: Option<N>,
    /// Bounds before the shift
    pub previous_rect: Rect,
    /// Bounds after the shift
    pub current_rect: Rect,
}

impl<N> ShiftSource<N> {
    pub fn new(node: Option<N>, previous_rect: Rect, current_rect: Rect) -> Self {
        Self {
            node,
            previous_rect,
            current_rect,
        }
    }
}

/// A `largest-contentful-paint` candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct LargestPaint<N> {
    pub element: Option<N>,
}

/// A `first-input` timing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstInput<N> {
    /// Event type of the interaction, e.g. `pointerdown`
    pub name: String,
    pub target: Option<N>,
}

/// A `layout-shift` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutShift<N> {
    pub value: f64,
    pub sources: Option<Vec<ShiftSource<N>>>,
}

/// A performance entry as delivered by the page's performance observer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEntry<N> {
    LargestContentfulPaint(LargestPaint<N>),
    FirstInput(FirstInput<N>),
    LayoutShift(LayoutShift<N>),
    /// A `paint` entry such as `first-contentful-paint`
    Paint { name: String },
}

impl<N> RawEntry<N> {
    /// Create a largest-contentful-paint entry.
    pub fn largest_paint(element: Option<N>) -> Self {
        RawEntry::LargestContentfulPaint(LargestPaint { element })
    }

    /// Create a first-input entry.
    pub fn first_input(name: &str, target: Option<N>) -> Self {
        RawEntry::FirstInput(FirstInput {
            name: name.to_string(),
            target,
        })
    }

    /// Create a layout-shift entry.
    pub fn layout_shift(value: f64, sources: Option<Vec<ShiftSource<N>>>) -> Self {
        RawEntry::LayoutShift(LayoutShift { value, sources })
    }

    pub fn as_largest_paint(&self) -> Option<&LargestPaint<N>> {
        match self {
            RawEntry::LargestContentfulPaint(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_first_input(&self) -> Option<&FirstInput<N>> {
        match self {
            RawEntry::FirstInput(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_layout_shift(&self) -> Option<&LayoutShift<N>> {
        match self {
            RawEntry::LayoutShift(entry) => Some(entry),
            _ => None,
        }
    }
}

/// A finalized metric handed over by the vitals measurement layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample<N> {
    pub name: MetricName,
    /// Current metric value
    pub value: f64,
    /// Change since the previous report of this metric
    pub delta: f64,
    /// Unique id of this metric instance for the page view
    pub id: String,
    pub entries: Vec<RawEntry<N>>,
}

impl<N> MetricSample<N> {
    /// Create a sample with no entries.
    pub fn new(name: MetricName, value: f64, delta: f64, id: &str) -> Self {
        Self {
            name,
            value,
            delta,
            id: id.to_string(),
            entries: Vec::new(),
        }
    }

    /// Attach the raw entries behind this sample.
    pub fn with_entries(mut self, entries: Vec<RawEntry<N>>) -> Self {
        self.entries = entries;
        self
    }
}
