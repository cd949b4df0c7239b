//! Stack presets - flex containers with a fixed direction.
//!
//! Both forward every prop (the node ref included) to
//! [`flex_container`]. The preset direction replaces any direction the
//! caller passed.

use crate::types::FlexDirection;

use super::flex::flex_container;
use super::types::FlexProps;
use crate::node::Node;

/// Flex container laid out top to bottom.
pub fn vertical_stack(props: FlexProps) -> Node {
    flex_container(FlexProps {
        direction: Some(FlexDirection::Column.into()),
        ..props
    })
}

/// Flex container laid out left to right.
pub fn horizontal_stack(props: FlexProps) -> Node {
    flex_container(FlexProps {
        direction: Some(FlexDirection::Row.into()),
        ..props
    })
}
