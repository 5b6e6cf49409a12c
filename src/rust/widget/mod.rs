//! Minimal stand-in for the host-owned widget subtree.
//!
//! The real tree belongs to the host UI. The handler only needs attribute
//! lookup and text writes, so that is all this handle exposes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Cheaply cloneable handle to one node of the panel's widget tree.
///
/// Clones share the underlying node, so a handle resolved once keeps
/// observing writes made through any other handle.
#[derive(Clone)]
pub struct Widget {
    inner: Arc<RwLock<WidgetData>>,
}

#[derive(Default)]
struct WidgetData {
    tag: String,
    attributes: HashMap<String, String>,
    text: String,
    children: Vec<Widget>,
}

impl Widget {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(WidgetData {
                tag: tag.into(),
                ..WidgetData::default()
            })),
        }
    }

    pub fn tag(&self) -> String {
        if let Ok(data) = self.inner.read() {
            data.tag.clone()
        } else {
            String::new()
        }
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut data) = self.inner.write() {
            data.attributes.insert(name.into(), value.into());
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        if let Ok(data) = self.inner.read() {
            data.attributes.get(name).cloned()
        } else {
            None
        }
    }

    pub fn append_child(&self, child: Widget) {
        if let Ok(mut data) = self.inner.write() {
            data.children.push(child);
        }
    }

    pub fn text(&self) -> String {
        if let Ok(data) = self.inner.read() {
            data.text.clone()
        } else {
            String::new()
        }
    }

    pub fn set_text(&self, text: impl Into<String>) {
        if let Ok(mut data) = self.inner.write() {
            data.text = text.into();
        }
    }

    /// Depth-first search of the descendants for a node whose `name`
    /// attribute equals `value`. The root itself is not a candidate,
    /// mirroring a jQuery-style `.find`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<Widget> {
        let children = if let Ok(data) = self.inner.read() {
            data.children.clone()
        } else {
            Vec::new()
        };

        for child in children {
            if child.attribute(name).as_deref() == Some(value) {
                return Some(child);
            }
            if let Some(found) = child.find_by_attribute(name, value) {
                return Some(found);
            }
        }
        None
    }

    /// True when both handles point at the same node.
    pub fn same_node(&self, other: &Widget) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
#[path = "test_widget.rs"]
mod tests;
