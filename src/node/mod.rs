//! Node Module - Declarative output of components.
//!
//! - [`Node`] / [`Element`] / [`Fragment`] - the rendered tree
//! - [`Style`] - per-element style set with last-write-wins merge
//! - [`NodeRef`] / [`NodeHandle`] - forwarded references to mounted elements
//! - [`children_to_vec`] - child normalization

mod element;
mod node_ref;
mod style;

pub use element::{children_to_vec, Element, Fragment, Key, Node, Tag};
pub use node_ref::{NodeHandle, NodeRef};
pub use style::Style;
