//! Mount Pipeline
//!
//! ```text
//! Node tree → MountedTree (Taffy layout) → HitGrid → pointer dispatch
//! ```
//!
//! Components only describe nodes. Everything with side effects (layout,
//! filling refs, firing listeners) happens here.

pub mod mount;

pub use mount::{mount, LayoutRect, MountOptions, MountedKind, MountedNode, MountedTree};
