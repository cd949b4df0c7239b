//! State Module - Pointer input for mounted trees.
//!
//! - **Mouse** - Event types, hit grid, reactive pointer state, dispatch
//! - **Input** - crossterm event conversion

pub mod input;
pub mod mouse;

pub use input::{convert_modifiers, convert_mouse_event};
pub use mouse::{
    HandlerTree, HitGrid, Listener, Modifiers, MouseAction, MouseButton, MouseCallback,
    MouseEvent, MouseHandlers, PointerState, ScrollDirection, ScrollInfo,
};
