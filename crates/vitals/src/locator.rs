//! Structural path derivation for DOM nodes.

use crate::dom::DomNode;
use crate::error::DomResult;

/// Path segment emitted when a node is missing or cannot be read.
pub const ERROR_PATH: &str = "(error)";

/// Fixed anchor for the document body.
pub const BODY_PATH: &str = "html>body";

/// What one level of the upward walk produced.
enum Level<N> {
    /// Walk ends with this prefix
    Anchor(String),
    /// Walk continues into the parent
    Label { label: String, parent: Option<N> },
}

/// Build a `>`-delimited path such as `div#hero>img.banner` for a node.
///
/// An element id ends the walk, as does `body`. A missing node or a failing
/// accessor turns that level into `(error)` without discarding the levels
/// already collected below it. This function never fails.
pub fn locate<N: DomNode>(node: Option<&N>) -> String {
    let mut segments = Vec::new();

    let mut level = node.map(describe);
    loop {
        match level {
            Some(Ok(Level::Anchor(prefix))) => {
                segments.push(prefix);
                break;
            }
            Some(Ok(Level::Label { label, parent })) => {
                segments.push(label);
                level = parent.as_ref().map(describe);
            }
            Some(Err(e)) => {
                tracing::trace!("Node walk stopped: {}", e);
                segments.push(ERROR_PATH.to_string());
                break;
            }
            None => {
                segments.push(ERROR_PATH.to_string());
                break;
            }
        }
    }

    segments.reverse();
    segments.join(">")
}

fn describe<N: DomNode>(node: &N) -> DomResult<Level<N>> {
    let mut label = node.tag_name()?.to_lowercase();
    if label == "body" {
        return Ok(Level::Anchor(BODY_PATH.to_string()));
    }

    if let Some(id) = node.id()? {
        label.push('#');
        label.push_str(&id);
        return Ok(Level::Anchor(label));
    }

    let classes = node.class_list()?;
    if !classes.is_empty() {
        label.push('.');
        label.push_str(&classes.join("."));
    }

    Ok(Level::Label {
        label,
        parent: node.parent_element()?,
    })
}
