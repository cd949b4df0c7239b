//! Primitives - Layout components.
//!
//! - [`flex_container`] - Flexbox container with centering and spacing
//! - [`vertical_stack`] - Flex container fixed to column direction
//! - [`horizontal_stack`] - Flex container fixed to row direction
//!
//! # Rendering
//!
//! Components are plain functions from props to a [`Node`](crate::node::Node).
//! They hold no state between calls and touch nothing outside their return
//! value; the host decides when to call them and what to do with the tree.
//!
//! Reactive props ([`PropValue::Signal`], [`PropValue::Getter`]) are read
//! once per call, so re-rendering after a signal changes picks up the new
//! value.

mod flex;
mod stack;
mod types;

pub use flex::{child_key, container_style, flex_container, render_children, render_spacing, Gutters};
pub use stack::{horizontal_stack, vertical_stack};
pub use types::*;
