//! Mouse Module - Pointer events, hit testing and dispatch.
//!
//! The host fills a [`HitGrid`] from computed layout and routes each
//! [`MouseEvent`] to the element under the pointer. Handlers fire on the
//! target first, then on every ancestor that has one (bubbling).
//!
//! # API
//!
//! - [`MouseEvent`] - Event passed to handlers
//! - [`MouseHandlers`] - Per-element pass-through callbacks
//! - [`HitGrid`] - O(1) coordinate-to-element lookup
//! - [`PointerState`] - Reactive pointer state and dispatch
//!
//! # Example
//!
//! ```ignore
//! use spark_flex::state::mouse::{MouseEvent, MouseButton};
//!
//! let mounted = mount(&tree, MountOptions::default())?;
//! mounted.dispatch(MouseEvent::down(MouseButton::Left, 3, 1));
//! mounted.dispatch(MouseEvent::up(MouseButton::Left, 3, 1)); // click
//! ```

use std::fmt;
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::node::NodeHandle;

// =============================================================================
// TYPES
// =============================================================================

/// Mouse action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Scroll information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInfo {
    pub direction: ScrollDirection,
    pub delta: u16,
}

bitflags::bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
    }
}

/// Mouse event
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Action type (down, up, move, drag, scroll)
    pub action: MouseAction,
    /// Button pressed
    pub button: MouseButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Scroll info (only for scroll events)
    pub scroll: Option<ScrollInfo>,
    /// Element under the pointer (filled by dispatch)
    pub target: Option<NodeHandle>,
}

impl MouseEvent {
    /// Create a new mouse event
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::empty(),
            scroll: None,
            target: None,
        }
    }

    /// Create a scroll event
    pub fn scroll(x: u16, y: u16, direction: ScrollDirection, delta: u16) -> Self {
        Self {
            scroll: Some(ScrollInfo { direction, delta }),
            ..Self::new(MouseAction::Scroll, MouseButton::None, x, y)
        }
    }

    /// Create a mouse down event
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    /// Create a mouse up event
    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }

    /// Create a mouse move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self::new(MouseAction::Move, MouseButton::None, x, y)
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// Mouse event callback (Rc so one callback can sit on several elements).
pub type MouseCallback = Rc<dyn Fn(&MouseEvent)>;

/// Which pointer listener an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    Click,
    MouseDown,
    MouseMove,
    MouseUp,
}

/// Pointer callbacks attached to one element.
///
/// A `None` slot means no listener is attached for that event.
#[derive(Clone, Default)]
pub struct MouseHandlers {
    pub on_click: Option<MouseCallback>,
    pub on_mouse_down: Option<MouseCallback>,
    pub on_mouse_move: Option<MouseCallback>,
    pub on_mouse_up: Option<MouseCallback>,
}

impl MouseHandlers {
    pub fn get(&self, listener: Listener) -> Option<&MouseCallback> {
        match listener {
            Listener::Click => self.on_click.as_ref(),
            Listener::MouseDown => self.on_mouse_down.as_ref(),
            Listener::MouseMove => self.on_mouse_move.as_ref(),
            Listener::MouseUp => self.on_mouse_up.as_ref(),
        }
    }

    /// True when no listener is attached.
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none()
            && self.on_mouse_down.is_none()
            && self.on_mouse_move.is_none()
            && self.on_mouse_up.is_none()
    }
}

fn same_callback(a: &Option<MouseCallback>, b: &Option<MouseCallback>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

// Callbacks compare by identity.
impl PartialEq for MouseHandlers {
    fn eq(&self, other: &Self) -> bool {
        same_callback(&self.on_click, &other.on_click)
            && same_callback(&self.on_mouse_down, &other.on_mouse_down)
            && same_callback(&self.on_mouse_move, &other.on_mouse_move)
            && same_callback(&self.on_mouse_up, &other.on_mouse_up)
    }
}

impl fmt::Debug for MouseHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_mouse_down", &self.on_mouse_down.is_some())
            .field("on_mouse_move", &self.on_mouse_move.is_some())
            .field("on_mouse_up", &self.on_mouse_up.is_some())
            .finish()
    }
}

/// The element tree events are routed through.
pub trait HandlerTree {
    fn handlers(&self, node: NodeHandle) -> Option<&MouseHandlers>;
    fn parent(&self, node: NodeHandle) -> Option<NodeHandle>;
}

// =============================================================================
// HIT GRID - O(1) Coordinate to Element Lookup
// =============================================================================

/// A grid for O(1) mouse hit detection.
///
/// Each cell holds the element occupying that position, or `None`.
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<NodeHandle>>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, None);
        self.clear();
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, node: NodeHandle) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for cy in y..y_end {
            let row = cy as usize * self.width as usize;
            for cx in x..x_end {
                self.cells[row + cx as usize] = Some(node);
            }
        }
    }

    /// Get the element at a position.
    pub fn get(&self, x: u16, y: u16) -> Option<NodeHandle> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }
}

// =============================================================================
// POINTER STATE
// =============================================================================

/// Reactive pointer state for one mounted tree.
pub struct PointerState {
    last_event: Signal<Option<MouseEvent>>,
    hovered: Signal<Option<NodeHandle>>,
    pressed: Signal<Option<(NodeHandle, MouseButton)>>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            last_event: signal(None),
            hovered: signal(None),
            pressed: signal(None),
        }
    }

    /// Last dispatched event, with its target filled in.
    pub fn last_event(&self) -> Option<MouseEvent> {
        self.last_event.get()
    }

    /// Element currently under the pointer.
    pub fn hovered(&self) -> Option<NodeHandle> {
        self.hovered.get()
    }

    /// Element holding the current press, if any.
    pub fn pressed(&self) -> Option<NodeHandle> {
        self.pressed.get().map(|(node, _)| node)
    }

    /// Clear all pointer state.
    pub fn reset(&self) {
        self.last_event.set(None);
        self.hovered.set(None);
        self.pressed.set(None);
    }

    /// Dispatch an event. Returns true if any handler fired.
    pub fn dispatch<T: HandlerTree>(&self, mut event: MouseEvent, grid: &HitGrid, tree: &T) -> bool {
        event.target = grid.get(event.x, event.y);
        let target = event.target;

        self.last_event.set(Some(event.clone()));
        self.hovered.set(target);

        match event.action {
            MouseAction::Down => {
                self.pressed.set(target.map(|node| (node, event.button)));
                bubble(tree, target, &event, Listener::MouseDown)
            }
            MouseAction::Up => {
                let fired = bubble(tree, target, &event, Listener::MouseUp);
                let pressed = self.pressed.get();
                self.pressed.set(None);

                // Click: same button, fired from the nearest element holding both ends
                let clicked = match (pressed, target) {
                    (Some((down_on, button)), Some(up_on)) if button == event.button => {
                        match common_ancestor(tree, down_on, up_on) {
                            Some(shared) => bubble(tree, Some(shared), &event, Listener::Click),
                            None => false,
                        }
                    }
                    _ => false,
                };
                fired || clicked
            }
            MouseAction::Move | MouseAction::Drag => bubble(tree, target, &event, Listener::MouseMove),
            MouseAction::Scroll => false,
        }
    }
}

/// Nearest node that is `a` or an ancestor of `a` and also `b` or an ancestor of `b`.
fn common_ancestor<T: HandlerTree>(tree: &T, a: NodeHandle, b: NodeHandle) -> Option<NodeHandle> {
    let mut chain = Vec::new();
    let mut current = Some(a);
    while let Some(node) = current {
        chain.push(node);
        current = tree.parent(node);
    }

    let mut current = Some(b);
    while let Some(node) = current {
        if chain.contains(&node) {
            return Some(node);
        }
        current = tree.parent(node);
    }
    None
}

/// Fire `listener` on `start` and each ancestor that has one.
fn bubble<T: HandlerTree>(
    tree: &T,
    start: Option<NodeHandle>,
    event: &MouseEvent,
    listener: Listener,
) -> bool {
    let mut fired = false;
    let mut current = start;
    while let Some(node) = current {
        if let Some(callback) = tree.handlers(node).and_then(|h| h.get(listener)) {
            tracing::trace!(node = node.index(), ?listener, "pointer listener");
            callback(event);
            fired = true;
        }
        current = tree.parent(node);
    }
    fired
}

// =============================================================================
// TESTS
// =============================================================================
