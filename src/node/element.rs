//! Node tree - what components render and the host mounts.
//!
//! A [`Node`] is a plain description: building one has no side effects and
//! nothing is laid out until the tree is passed to
//! [`mount`](crate::pipeline::mount).

use std::fmt;

use crate::state::mouse::{MouseCallback, MouseHandlers};

use super::node_ref::NodeRef;
use super::style::Style;

// =============================================================================
// Key
// =============================================================================

/// Reconciliation identity of a node among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Named(String),
    Index(usize),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Named(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

// =============================================================================
// Tag
// =============================================================================

/// Element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Block container.
    Div,
    /// Inline element, used for spacers.
    Span,
    Custom(String),
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Div => f.write_str("div"),
            Tag::Span => f.write_str("span"),
            Tag::Custom(name) => f.write_str(name),
        }
    }
}

// =============================================================================
// Element
// =============================================================================

/// A rendered element: the only node kind that occupies layout space.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub key: Option<Key>,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub style: Style,
    pub handlers: MouseHandlers,
    pub node_ref: Option<NodeRef>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            key: None,
            id: None,
            class_name: None,
            style: Style::default(),
            handlers: MouseHandlers::default(),
            node_ref: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn on_click(mut self, callback: MouseCallback) -> Self {
        self.handlers.on_click = Some(callback);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

// =============================================================================
// Fragment
// =============================================================================

/// Non-rendering group: lets several siblings share one list position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fragment {
    pub key: Option<Key>,
    pub children: Vec<Node>,
}

// =============================================================================
// Node
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Fragment(Fragment),
    Text(String),
    /// Unkeyed sequence, flattened into its parent by [`children_to_vec`].
    List(Vec<Node>),
    /// Renders nothing.
    Empty,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn list<I, N>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn fragment(key: Option<Key>, children: Vec<Node>) -> Self {
        Self::Fragment(Fragment { key, children })
    }

    /// The key declared on this node, if any.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Node::Element(el) => el.key.as_ref(),
            Node::Fragment(frag) => frag.key.as_ref(),
            Node::Text(_) | Node::List(_) | Node::Empty => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Rendered siblings this node contributes to its parent, in order.
    ///
    /// Fragments and lists are transparent; empty slots contribute nothing.
    pub fn leaves(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    match node {
        Node::Fragment(Fragment { children, .. }) | Node::List(children) => {
            for child in children {
                collect_leaves(child, out);
            }
        }
        Node::Empty => {}
        leaf => out.push(leaf),
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Empty, Into::into)
    }
}

// =============================================================================
// Child normalization
// =============================================================================

/// Flatten children into one ordered sequence.
///
/// Nested lists are spliced in place and empty slots dropped. Keyed
/// fragments and elements stay whole: they carry their own identity.
pub fn children_to_vec(children: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(children.len());
    flatten_into(children, &mut out);
    out
}

fn flatten_into(children: Vec<Node>, out: &mut Vec<Node>) {
    for child in children {
        match child {
            Node::List(items) => flatten_into(items, out),
            Node::Empty => {}
            other => out.push(other),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_to_vec_flattens_lists() {
        let children = vec![
            Node::text("a"),
            Node::list(["b", "c"]),
            Node::Empty,
            Node::List(vec![Node::list(["d"]), Node::Empty]),
        ];

        let flat = children_to_vec(children);
        assert_eq!(flat, vec![Node::text("a"), Node::text("b"), Node::text("c"), Node::text("d")]);
    }

    #[test]
    fn test_children_to_vec_keeps_fragments_whole() {
        let frag = Node::fragment(Some("f".into()), vec![Node::text("x"), Node::text("y")]);
        let flat = children_to_vec(vec![frag.clone(), Node::text("z")]);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0], frag);
    }

    #[test]
    fn test_key_accessors() {
        let keyed = Node::from(Element::div().key("row-1"));
        assert_eq!(keyed.key(), Some(&Key::Named("row-1".to_string())));
        assert_eq!(Node::text("hi").key(), None);

        let wrapped = Node::fragment(Some(3usize.into()), vec![Node::text("hi")]);
        assert_eq!(wrapped.key(), Some(&Key::Index(3)));
        assert_eq!(wrapped.leaves(), vec![&Node::text("hi")]);
    }

    #[test]
    fn test_leaves_skip_groups_and_empties() {
        let tree = Node::List(vec![
            Node::fragment(None, vec![Node::text("a"), Node::Empty]),
            Node::from(Element::span().child("inner")),
            Node::list(["b"]),
        ]);

        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 3);
        assert_eq!(leaves[0], &Node::text("a"));
        assert!(leaves[1].as_element().is_some());
        assert_eq!(leaves[2], &Node::text("b"));
    }

    #[test]
    fn test_option_into_node() {
        assert_eq!(Node::from(None::<&str>), Node::Empty);
        assert_eq!(Node::from(Some("x")), Node::text("x"));
    }
}
