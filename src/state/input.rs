//! Input Module - crossterm event conversion.
//!
//! Bridges crossterm's event types to our [`MouseEvent`] so terminal input
//! can be fed straight into a mounted tree.
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::read;
//!
//! let mut mounted = mount(&tree, MountOptions::from_terminal()?)?;
//! loop {
//!     mounted.handle_input(read()?)?;
//! }
//! ```

use crossterm::event::{
    KeyModifiers, MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
};

use super::mouse::{Modifiers, MouseAction, MouseButton, MouseEvent, ScrollDirection, ScrollInfo};

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert crossterm MouseEvent to our MouseEvent
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> MouseEvent {
    let (action, button) = match event.kind {
        MouseEventKind::Down(btn) => (MouseAction::Down, convert_mouse_button(btn)),
        MouseEventKind::Up(btn) => (MouseAction::Up, convert_mouse_button(btn)),
        MouseEventKind::Drag(btn) => (MouseAction::Drag, convert_mouse_button(btn)),
        MouseEventKind::Moved => (MouseAction::Move, MouseButton::None),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => (MouseAction::Scroll, MouseButton::None),
    };

    let direction = match event.kind {
        MouseEventKind::ScrollUp => Some(ScrollDirection::Up),
        MouseEventKind::ScrollDown => Some(ScrollDirection::Down),
        MouseEventKind::ScrollLeft => Some(ScrollDirection::Left),
        MouseEventKind::ScrollRight => Some(ScrollDirection::Right),
        _ => None,
    };

    MouseEvent {
        action,
        button,
        x: event.column,
        y: event.row,
        modifiers: convert_modifiers(event.modifiers),
        scroll: direction.map(|direction| ScrollInfo { direction, delta: 1 }),
        target: None, // Filled by dispatch
    }
}

fn convert_mouse_button(btn: CrosstermMouseButton) -> MouseButton {
    match btn {
        CrosstermMouseButton::Left => MouseButton::Left,
        CrosstermMouseButton::Right => MouseButton::Right,
        CrosstermMouseButton::Middle => MouseButton::Middle,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
pub fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    out.set(Modifiers::SHIFT, mods.contains(KeyModifiers::SHIFT));
    out.set(Modifiers::CTRL, mods.contains(KeyModifiers::CONTROL));
    out.set(Modifiers::ALT, mods.contains(KeyModifiers::ALT));
    out.set(Modifiers::META, mods.intersects(KeyModifiers::META | KeyModifiers::SUPER));
    out
}

// =============================================================================
// TESTS
// =============================================================================
