//! DOM capability backed by `web_sys`.

use web_sys::{Element, Node};

use crate::dom::DomNode;
use crate::error::{DomError, DomResult};

impl DomNode for Element {
    fn tag_name(&self) -> DomResult<String> {
        Ok(Element::tag_name(self))
    }

    fn id(&self) -> DomResult<Option<String>> {
        let id = Element::id(self);
        Ok((!id.is_empty()).then_some(id))
    }

    fn class_list(&self) -> DomResult<Vec<String>> {
        let list = Element::class_list(self);
        Ok((0..list.length()).filter_map(|i| list.item(i)).collect())
    }

    fn parent_element(&self) -> DomResult<Option<Self>> {
        Ok(Node::parent_element(self))
    }

    fn closest_id(&self, id: &str) -> DomResult<bool> {
        Element::closest(self, &format!("#{}", id))
            .map(|found| found.is_some())
            .map_err(|e| DomError::Script(format!("{:?}", e)))
    }
}
