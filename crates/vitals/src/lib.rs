//! Web Vitals Debugging
//!
//! This crate turns finalized web vitals measurements into something a person
//! can act on:
//!
//! - Rating of CLS, FCP, FID and LCP values against fixed thresholds
//! - Debug locators such as `div#hero>img.banner` for the element behind a metric
//! - Per-metric selection of the responsible performance entry
//!
//! DOM access goes through the [`DomNode`] trait so the same logic runs
//! against a live page (`web` feature) or an in-memory [`ElementNode`] tree.
//!
//! # Example
//!
//! ```rust
//! use vitals::{rate, resolve, ElementNode, MetricName, Rating, RawEntry};
//!
//! let body = ElementNode::new("body");
//! let banner = ElementNode::new("img").with_class("banner").within(&body);
//! let entries = vec![RawEntry::largest_paint(Some(banner))];
//!
//! assert_eq!(rate(MetricName::Lcp, 3100.0), Rating::NeedsImprovement);
//! assert_eq!(
//!     resolve(MetricName::Lcp, &entries).as_deref(),
//!     Some("html>body>img.banner")
//! );
//! ```
//!
//! # Modules
//!
//! - [`metric`] - Metric names, samples and raw entries
//! - [`rating`] - Threshold ratings
//! - [`dom`] - DOM navigation capability
//! - [`locator`] - Node path derivation
//! - [`debug`] - Per-metric debug information

pub mod debug;
pub mod dom;
mod error;
pub mod locator;
pub mod metric;
pub mod rating;
#[cfg(feature = "web")]
mod web;

pub use debug::{resolve, NOT_SET, SIGNIN_WIDGET_ID};
pub use dom::{DomNode, ElementNode};
pub use error::{DomError, DomResult, UnknownMetric};
pub use locator::{locate, BODY_PATH, ERROR_PATH};
pub use metric::{FirstInput, LargestPaint, LayoutShift, MetricName, MetricSample, RawEntry, Rect, ShiftSource};
pub use rating::{rate, Rating};
