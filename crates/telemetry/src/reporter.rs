//! Conversion of web vitals samples into analytics events.

use vitals::{rate, resolve, DomNode, MetricName, MetricSample, NOT_SET};

use crate::event::EventParams;

/// Event category for web vitals.
pub const WEB_VITALS_CATEGORY: &str = "Web Vitals";

/// Round half toward positive infinity, as browsers do.
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Delta in the integer-friendly unit sent to analytics.
///
/// CLS is a small unitless score and is scaled by 1000 first.
pub fn rounded_delta(metric: MetricName, delta: f64) -> f64 {
    match metric {
        MetricName::Cls => js_round(delta * 1000.0),
        _ => js_round(delta),
    }
}

/// Build the analytics event for a metric sample.
pub fn metric_event<N: DomNode>(sample: &MetricSample<N>) -> (&'static str, EventParams) {
    let rating = rate(sample.name, sample.value);
    let debug = resolve(sample.name, &sample.entries).unwrap_or_else(|| NOT_SET.to_string());

    let params = EventParams::new()
        .with_value(rounded_delta(sample.name, sample.delta))
        .with_category(WEB_VITALS_CATEGORY)
        .with_label(&sample.id)
        .with_meta(rating.as_str())
        .with_debug(&debug)
        .non_interactive();

    (sample.name.as_str(), params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vitals::{ElementNode, RawEntry, Rect, ShiftSource};

    #[test]
    fn test_rounded_delta() {
        assert_eq!(rounded_delta(MetricName::Cls, 0.03), 30.0);
        assert_eq!(rounded_delta(MetricName::Cls, 0.0004), 0.0);
        assert_eq!(rounded_delta(MetricName::Lcp, 2499.5), 2500.0);
        assert_eq!(rounded_delta(MetricName::Fid, 12.4), 12.0);
    }

    #[test]
    fn test_js_round_half_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(0.0), 0.0);
    }

    #[test]
    fn test_cls_event() {
        let body = ElementNode::new("body");
        let ad = ElementNode::new("div").with_class("ad-slot").within(&body);
        let sample = MetricSample::new(MetricName::Cls, 0.18, 0.03, "abc").with_entries(vec![
            RawEntry::layout_shift(
                0.18,
                Some(vec![ShiftSource::new(
                    Some(ad),
                    Rect::new(300.0, 250.0),
                    Rect::new(300.0, 250.0),
                )]),
            ),
        ]);

        let (name, params) = metric_event(&sample);
        assert_eq!(name, "CLS");
        assert_eq!(params.value, Some(30.0));
        assert_eq!(params.event_category.as_deref(), Some("Web Vitals"));
        assert_eq!(params.event_label.as_deref(), Some("abc"));
        assert_eq!(params.event_meta.as_deref(), Some("needs-improvement"));
        assert_eq!(params.event_debug.as_deref(), Some("html>body>div.ad-slot"));
        assert_eq!(params.non_interaction, Some(true));
    }

    #[test]
    fn test_missing_debug_is_not_set() {
        let sample: MetricSample<ElementNode> = MetricSample::new(MetricName::Lcp, 4200.0, 4200.0, "x");
        let (name, params) = metric_event(&sample);
        assert_eq!(name, "LCP");
        assert_eq!(params.event_meta.as_deref(), Some("poor"));
        assert_eq!(params.event_debug.as_deref(), Some("(not set)"));
    }

    #[test]
    fn test_broken_tree_still_reports_value() {
        let broken = ElementNode::new("img").failing();
        let sample = MetricSample::new(MetricName::Lcp, 1000.0, 1000.0, "y")
            .with_entries(vec![RawEntry::largest_paint(Some(broken))]);
        let (_, params) = metric_event(&sample);
        assert_eq!(params.value, Some(1000.0));
        assert_eq!(params.event_debug.as_deref(), Some("(error)"));
    }

    proptest! {
        #[test]
        fn prop_rounded_delta_is_integral(delta in 0.0f64..100_000.0) {
            for metric in MetricName::ALL {
                let rounded = rounded_delta(metric, delta);
                prop_assert_eq!(rounded.fract(), 0.0);
            }
        }
    }
}
