//! DOM navigation capability.
//!
//! The locator and resolver never touch a concrete browser binding; they walk
//! any type implementing [`DomNode`]. [`ElementNode`] is an in-memory tree used
//! for replaying recorded entries and for tests. With the `web` feature,
//! `web_sys::Element` implements the trait as well.

use std::rc::Rc;

use crate::error::{DomError, DomResult};

/// Read-only view of an element and its ancestry.
///
/// Every accessor is fallible: host bindings may throw on detached or
/// foreign nodes, and callers are expected to degrade rather than fail.
pub trait DomNode: Sized {
    /// Tag name as reported by the host (any case).
    fn tag_name(&self) -> DomResult<String>;

    /// The `id` attribute, if set.
    fn id(&self) -> DomResult<Option<String>>;

    /// Class names in class-list order.
    fn class_list(&self) -> DomResult<Vec<String>>;

    /// The parent element, or `None` at the top of the tree.
    fn parent_element(&self) -> DomResult<Option<Self>>;

    /// Whether this node or one of its ancestors carries the given id.
    fn closest_id(&self, id: &str) -> DomResult<bool> {
        if self.id()?.as_deref() == Some(id) {
            return Ok(true);
        }
        let mut current = self.parent_element()?;
        while let Some(node) = current {
            if node.id()?.as_deref() == Some(id) {
                return Ok(true);
            }
            current = node.parent_element()?;
        }
        Ok(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    /// Every accessor fails
    All,
    /// Only the parent lookup fails
    Parent,
}

#[derive(Debug, Clone, PartialEq)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<ElementNode>,
    fault: Option<Fault>,
}

/// An immutable in-memory element with an owned parent chain.
///
/// Nodes are cheap to clone and are built leaf-last:
///
/// ```rust
/// use vitals::ElementNode;
///
/// let body = ElementNode::new("BODY");
/// let hero = ElementNode::new("div").with_class("hero").within(&body);
/// let img = ElementNode::new("img").within(&hero);
/// assert_eq!(vitals::locate(Some(&img)), "html>body>div.hero>img");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode(Rc<ElementData>);

impl ElementNode {
    /// Create a detached element with the given tag.
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(ElementData {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            parent: None,
            fault: None,
        }))
    }

    /// Set the `id` attribute.
    pub fn with_id(mut self, id: &str) -> Self {
        Rc::make_mut(&mut self.0).id = Some(id.to_string());
        self
    }

    /// Append a class name.
    pub fn with_class(mut self, class: &str) -> Self {
        Rc::make_mut(&mut self.0).classes.push(class.to_string());
        self
    }

    /// Append several class names in order.
    pub fn with_classes<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        Rc::make_mut(&mut self.0)
            .classes
            .extend(classes.into_iter().map(str::to_string));
        self
    }

    /// Attach this element under `parent`.
    pub fn within(mut self, parent: &ElementNode) -> Self {
        Rc::make_mut(&mut self.0).parent = Some(parent.clone());
        self
    }

    /// Make every accessor of this node fail, as a revoked host object would.
    pub fn failing(mut self) -> Self {
        Rc::make_mut(&mut self.0).fault = Some(Fault::All);
        self
    }

    /// Make only the parent lookup of this node fail.
    pub fn with_failing_parent(mut self) -> Self {
        Rc::make_mut(&mut self.0).fault = Some(Fault::Parent);
        self
    }

    fn check(&self, property: &'static str) -> DomResult<()> {
        match self.0.fault {
            Some(Fault::All) => Err(DomError::Property(property)),
            _ => Ok(()),
        }
    }
}

impl DomNode for ElementNode {
    fn tag_name(&self) -> DomResult<String> {
        self.check("tagName")?;
        Ok(self.0.tag.clone())
    }

    fn id(&self) -> DomResult<Option<String>> {
        self.check("id")?;
        Ok(self.0.id.clone().filter(|id| !id.is_empty()))
    }

    fn class_list(&self) -> DomResult<Vec<String>> {
        self.check("classList")?;
        Ok(self.0.classes.clone())
    }

    fn parent_element(&self) -> DomResult<Option<Self>> {
        self.check("parentElement")?;
        if self.0.fault == Some(Fault::Parent) {
            return Err(DomError::Detached);
        }
        Ok(self.0.parent.clone())
    }
}
