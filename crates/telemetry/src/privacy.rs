//! Anonymization of report state before it leaves the page.
//!
//! Report state is an opaque bag; only the *shape* of the per-view
//! configuration and the chosen segment names are ever sent, never
//! user-segment values.

use serde_json::{Map, Value};

use vitals::NOT_SET;

/// Opaque key-value state of the report UI.
pub type ReportState = Map<String, Value>;

/// Describe which configuration was active for `view_id`.
///
/// Returns `(not set)` unless `opts:<view_id>` exists and is active.
pub fn anonymize_config(state: &ReportState, view_id: &str) -> String {
    let opts = match state.get(&format!("opts:{}", view_id)) {
        Some(Value::Object(opts)) if opts.get("active").is_some_and(is_truthy) => opts,
        _ => return NOT_SET.to_string(),
    };

    let metrics = ["lcpName", "fidName", "clsName"]
        .iter()
        .map(|key| display(opts.get(*key)))
        .collect::<Vec<_>>()
        .join(",");

    [
        format!("id={}", display(opts.get("metricIdDim"))),
        format!("name={}", display(opts.get("metricNameDim"))),
        format!("metrics={}", metrics),
        format!("filters={}", display(opts.get("filters"))),
    ]
    .join("|")
}

/// The view id recorded in the state, if any.
pub fn view_id(state: &ReportState) -> String {
    display(state.get("viewId"))
}

/// Both selected segments, sorted and comma-joined.
///
/// Ordering follows the page's default sort: values compare by their text
/// (`null` as `"null"`) and missing segments go last. Null and missing
/// segments render empty.
pub fn segments(state: &ReportState) -> String {
    let mut segments: Vec<(Option<String>, String)> = ["segmentA", "segmentB"]
        .iter()
        .map(|key| match state.get(*key) {
            None => (None, String::new()),
            Some(Value::Null) => (Some("null".to_string()), String::new()),
            Some(value) => (Some(display(Some(value))), display(Some(value))),
        })
        .collect();
    segments.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    segments
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text of a value if it is truthy, e.g. an error code or message.
pub(crate) fn truthy_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| is_truthy(v)).map(|v| display(Some(v)))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a state value as plain text. Missing and null values are empty.
fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_state(value: Value) -> ReportState {
        match value {
            Value::Object(map) => map,
            _ => panic!("state must be an object"),
        }
    }

    #[test]
    fn test_anonymize_missing_view() {
        let state = make_state(json!({ "viewId": "view1" }));
        assert_eq!(anonymize_config(&state, "view1"), "(not set)");
    }

    #[test]
    fn test_anonymize_inactive_view() {
        let state = make_state(json!({ "opts:view1": { "active": false, "metricIdDim": "ga:dimension1" } }));
        assert_eq!(anonymize_config(&state, "view1"), "(not set)");

        let state = make_state(json!({ "opts:view1": { "metricIdDim": "ga:dimension1" } }));
        assert_eq!(anonymize_config(&state, "view1"), "(not set)");
    }

    #[test]
    fn test_anonymize_active_view() {
        let state = make_state(json!({
            "opts:view1": {
                "active": true,
                "metricIdDim": "ga:dimension2",
                "metricNameDim": "ga:eventAction",
                "lcpName": "LCP",
                "fidName": "FID",
                "clsName": "CLS",
                "filters": "ga:deviceCategory==mobile"
            }
        }));
        assert_eq!(
            anonymize_config(&state, "view1"),
            "id=ga:dimension2|name=ga:eventAction|metrics=LCP,FID,CLS|filters=ga:deviceCategory==mobile"
        );
    }

    #[test]
    fn test_anonymize_missing_fields_render_empty() {
        let state = make_state(json!({ "opts:v": { "active": 1, "lcpName": "LCP" } }));
        assert_eq!(anonymize_config(&state, "v"), "id=|name=|metrics=LCP,,|filters=");
    }

    #[test]
    fn test_view_id() {
        assert_eq!(view_id(&make_state(json!({ "viewId": "123" }))), "123");
        assert_eq!(view_id(&make_state(json!({ "viewId": 42 }))), "42");
        assert_eq!(view_id(&make_state(json!({}))), "");
    }

    #[test]
    fn test_segments_sorted() {
        let state = make_state(json!({ "segmentA": "mobile", "segmentB": "desktop" }));
        assert_eq!(segments(&state), "desktop, mobile");
    }

    #[test]
    fn test_segments_missing_sorts_last() {
        let state = make_state(json!({ "segmentB": "tablet" }));
        assert_eq!(segments(&state), "tablet, ");

        assert_eq!(segments(&ReportState::new()), ", ");
    }

    #[test]
    fn test_segments_null_sorts_as_text() {
        let state = make_state(json!({ "segmentA": null, "segmentB": "tablet" }));
        assert_eq!(segments(&state), ", tablet");

        let state = make_state(json!({ "segmentA": "organic", "segmentB": null }));
        assert_eq!(segments(&state), ", organic");

        let state = make_state(json!({ "segmentA": "all", "segmentB": null }));
        assert_eq!(segments(&state), "all, ");
    }

    #[test]
    fn test_truthy_text() {
        assert_eq!(truthy_text(Some(&json!(403))), Some("403".to_string()));
        assert_eq!(truthy_text(Some(&json!("E_QUOTA"))), Some("E_QUOTA".to_string()));
        assert_eq!(truthy_text(Some(&json!(0))), None);
        assert_eq!(truthy_text(Some(&json!(""))), None);
        assert_eq!(truthy_text(Some(&Value::Null)), None);
        assert_eq!(truthy_text(None), None);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
