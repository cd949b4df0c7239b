//! Primitive types - Props and prop values.
//!
//! Props are plain structs built with struct-update syntax:
//!
//! ```ignore
//! flex_container(FlexProps {
//!     direction: Some(FlexDirection::Column.into()),
//!     spacing: Some(1.into()),
//!     ..Default::default()
//! });
//! ```

use std::rc::Rc;

use spark_signals::Signal;

use crate::node::{Node, NodeRef, Style};
use crate::state::mouse::MouseCallback;
use crate::types::{FlexDirection, Size};

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Components read the current value once per render.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal.
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// A spacing directive: a gutter size or a ready-made node.
///
/// Absence is `None` at the use site, so the full union is
/// `Option<Spacing>`: absent, sized, or node.
#[derive(Debug, Clone, PartialEq)]
pub enum Spacing {
    /// Rendered as an empty span sized along the main axis.
    Size(Size),
    /// Rendered as a clone of the node.
    Node(Node),
}

impl From<Size> for Spacing {
    fn from(value: Size) -> Self {
        Self::Size(value)
    }
}

impl From<u16> for Spacing {
    fn from(value: u16) -> Self {
        Self::Size(value.into())
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        Self::Size(value.into())
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Self::Size(value.into())
    }
}

impl From<&str> for Spacing {
    fn from(value: &str) -> Self {
        Self::Size(value.into())
    }
}

impl From<String> for Spacing {
    fn from(value: String) -> Self {
        Self::Size(value.into())
    }
}

impl From<Node> for Spacing {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

// =============================================================================
// Flex Props
// =============================================================================

/// Properties for [`flex_container`](super::flex_container) and the stack
/// presets.
///
/// # Example
///
/// ```ignore
/// use spark_flex::primitives::{flex_container, FlexProps};
///
/// let toolbar = flex_container(FlexProps {
///     vertical_center: Some(true.into()),
///     spacing: Some(2.into()),
///     spacing_start: Some(1.into()),
///     children: Some(vec![Node::text("File"), Node::text("Edit")]),
///     ..Default::default()
/// });
/// ```
#[derive(Default)]
pub struct FlexProps {
    // =========================================================================
    // Identity
    // =========================================================================

    pub id: Option<String>,

    pub class_name: Option<String>,

    /// Forwarded to the container element.
    pub node_ref: Option<NodeRef>,

    // =========================================================================
    // Layout
    // =========================================================================

    /// Main axis. `None` leaves the host default (row).
    pub direction: Option<PropValue<FlexDirection>>,

    /// Center children on the cross axis (`align_items: center`).
    pub vertical_center: Option<PropValue<bool>>,

    /// Center children on the main axis (`justify_content: center`).
    pub horizontal_center: Option<PropValue<bool>>,

    /// Style overrides, merged over the derived container style.
    pub style: Option<Style>,

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Gutter between adjacent children. Without it, children render as-is
    /// and `spacing_start` / `spacing_end` are ignored.
    pub spacing: Option<Spacing>,

    /// Gutter before the first child.
    pub spacing_start: Option<Spacing>,

    /// Gutter after the last child.
    pub spacing_end: Option<Spacing>,

    // =========================================================================
    // Event Callbacks
    // =========================================================================

    pub on_click: Option<MouseCallback>,

    pub on_mouse_down: Option<MouseCallback>,

    pub on_mouse_move: Option<MouseCallback>,

    pub on_mouse_up: Option<MouseCallback>,

    // =========================================================================
    // Children
    // =========================================================================

    pub children: Option<Vec<Node>>,
}
