//! Per-metric selection of the entry responsible for a measurement.

use crate::dom::DomNode;
use crate::locator::locate;
use crate::metric::{MetricName, RawEntry, ShiftSource};

/// Placeholder for metrics without debug information.
pub const NOT_SET: &str = "(not set)";

/// Id of the third-party sign-in widget whose internals are reported as one label.
pub const SIGNIN_WIDGET_ID: &str = "google-signin2";

/// Derive the debug string for a metric from its raw entries.
///
/// Returns `None` when the entries carry nothing to point at.
pub fn resolve<N: DomNode>(metric: MetricName, entries: &[RawEntry<N>]) -> Option<String> {
    match metric {
        MetricName::Lcp => largest_paint_element(entries),
        MetricName::Fid => first_input_target(entries),
        MetricName::Cls => largest_shift_source(entries),
        MetricName::Fcp => Some(NOT_SET.to_string()),
    }
}

fn largest_paint_element<N: DomNode>(entries: &[RawEntry<N>]) -> Option<String> {
    // The last candidate is the one the browser settled on.
    let entry = entries.iter().filter_map(RawEntry::as_largest_paint).last()?;
    Some(locate(entry.element.as_ref()))
}

fn first_input_target<N: DomNode>(entries: &[RawEntry<N>]) -> Option<String> {
    let entry = entries.iter().find_map(RawEntry::as_first_input)?;
    let target = entry.target.as_ref();

    let in_widget = target.is_some_and(|node| matches!(node.closest_id(SIGNIN_WIDGET_ID), Ok(true)));
    if in_widget {
        return Some(format!("{}(#{})", entry.name, SIGNIN_WIDGET_ID));
    }

    Some(format!("{}({})", entry.name, locate(target)))
}

fn largest_shift_source<N: DomNode>(entries: &[RawEntry<N>]) -> Option<String> {
    let largest = entries
        .iter()
        .filter_map(RawEntry::as_layout_shift)
        .reduce(|best, next| if next.value > best.value { next } else { best })?;

    let source = largest.sources.as_deref()?.iter().reduce(pick_source)?;
    Some(locate(source.node.as_ref()))
}

/// The running best survives only while it has a node and is at least as large.
fn pick_source<'a, N>(best: &'a ShiftSource<N>, next: &'a ShiftSource<N>) -> &'a ShiftSource<N> {
    if best.node.is_some() && best.previous_rect.area() >= next.previous_rect.area() {
        best
    } else {
        next
    }
}
