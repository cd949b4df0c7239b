//! Layout Module
//!
//! Flexbox layout computation for terminal cells using Taffy.
//!
//! The bridge converts element [`Style`](crate::node::Style)s into Taffy
//! styles; text leaves are sized by the measure helpers in
//! [`text_measure`]. The mount pipeline owns the Taffy tree itself.

mod taffy_bridge;
mod text_measure;

pub use taffy_bridge::to_taffy_style;
pub use text_measure::*;
