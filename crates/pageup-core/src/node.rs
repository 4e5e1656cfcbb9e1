//! HTML node tree.
//!
//! This module defines the node types for representing an HTML document
//! fragment. There are exactly two shapes: a leaf carrying text and a
//! parent carrying child nodes, so the tree is a closed sum type rather
//! than an open class hierarchy.

use indexmap::IndexMap;

/// HTML attributes, rendered in insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in an HTML document tree.
///
/// Children are exclusively owned, so the tree is acyclic by
/// construction: every child is built fresh and moved into its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// A childless node. With a tag it renders as `<tag>value</tag>`;
    /// without one the value passes through as raw text.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },

    /// A node with an ordered sequence of children and no text of its
    /// own. An empty child list is valid and renders as `<tag></tag>`.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// Create a tagless leaf that renders as raw text
    pub fn raw_text(value: &str) -> Self {
        Self::Leaf {
            tag: None,
            value: value.to_string(),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf with no attributes
    pub fn leaf(tag: &str, value: &str) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes
    pub fn leaf_with_attrs(tag: &str, value: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self::Leaf {
            tag: Some(tag.to_string()),
            value: value.to_string(),
            attrs: collect_attrs(attrs),
        }
    }

    /// Create a parent node with no attributes
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: tag.to_string(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Create a parent node with attributes
    pub fn parent_with_attrs(tag: &str, children: Vec<HtmlNode>, attrs: Vec<(&str, &str)>) -> Self {
        Self::Parent {
            tag: tag.to_string(),
            children,
            attrs: collect_attrs(attrs),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Check if this is a parent node
    pub fn is_parent(&self) -> bool {
        matches!(self, Self::Parent { .. })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Leaf { attrs, .. } | Self::Parent { attrs, .. } => {
                attrs.get(name).map(String::as_str)
            }
        }
    }

    /// Set an attribute, preserving the position of an existing key
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self {
            Self::Leaf { attrs, .. } | Self::Parent { attrs, .. } => {
                attrs.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Get the child nodes (empty for leaves)
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Append a child node. Turns a leaf into a no-op; only parents own
    /// children.
    pub fn add_child(&mut self, child: HtmlNode) {
        if let Self::Parent { children, .. } = self {
            children.push(child);
        }
    }

    /// Get all text content from this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Self::Leaf { value, .. } => value.clone(),
            Self::Parent { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
        }
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
