//! # spark-flex
//!
//! Flex containers and stack presets for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive props and [Taffy](https://github.com/DioxusLabs/taffy) for layout.
//!
//! ## Architecture
//!
//! Components are pure functions from props to a [`Node`] tree. A host
//! mounts the tree, lays it out in terminal cells, and routes pointer input
//! back to the listeners the components attached:
//!
//! ```text
//! FlexProps → flex_container → Node tree → mount → MountedTree → dispatch
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Layout enums and sizes
//! - [`node`] - Elements, fragments, styles, refs
//! - [`primitives`] - `flex_container`, `vertical_stack`, `horizontal_stack`
//! - [`layout`] - Taffy bridge and text measurement
//! - [`pipeline`] - Mounting, layout queries, event routing
//! - [`state`] - Pointer events, hit testing, crossterm conversion

pub mod error;
pub mod layout;
pub mod node;
pub mod pipeline;
pub mod primitives;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::FlexError;

pub use node::{Element, Fragment, Key, Node, NodeHandle, NodeRef, Style, Tag};

pub use pipeline::{mount, LayoutRect, MountOptions, MountedTree};

pub use primitives::{
    flex_container, horizontal_stack, vertical_stack, FlexProps, PropValue, Spacing,
};

pub use state::{MouseButton, MouseCallback, MouseEvent, MouseHandlers};
