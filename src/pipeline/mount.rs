//! Mount API - Lay out a node tree and route pointer input into it.
//!
//! [`mount`] walks a [`Node`] tree, builds the matching Taffy tree, computes
//! layout for the viewport and fills the hit grid. The returned
//! [`MountedTree`] answers layout queries, dispatches pointer events and
//! owns every [`NodeRef`] it filled: dropping or unmounting it clears them.
//!
//! # Example
//!
//! ```ignore
//! use spark_flex::pipeline::{mount, MountOptions};
//!
//! let mut mounted = mount(&app(), MountOptions::from_terminal()?)?;
//! loop {
//!     mounted.handle_input(crossterm::event::read()?)?;
//! }
//! ```

use crossterm::event::Event;
use taffy::{AvailableSpace, NodeId, Size as TaffySize, Style as TaffyStyle, TaffyTree};

use crate::error::FlexError;
use crate::layout::{measure_text_height, string_width, to_taffy_style};
use crate::node::{Element, Fragment, Node, NodeHandle, NodeRef, Tag};
use crate::state::input::convert_mouse_event;
use crate::state::mouse::{HandlerTree, HitGrid, MouseEvent, MouseHandlers, PointerState};

// =============================================================================
// Options
// =============================================================================

/// Viewport the tree is laid out in, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountOptions {
    pub width: u16,
    pub height: u16,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self { width: 80, height: 24 }
    }
}

impl MountOptions {
    /// Use the current terminal size.
    pub fn from_terminal() -> Result<Self, FlexError> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self { width, height })
    }
}

// =============================================================================
// Mounted nodes
// =============================================================================

/// Absolute position and size of a mounted node, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

#[derive(Debug, Clone)]
pub enum MountedKind {
    Element {
        tag: Tag,
        id: Option<String>,
        class_name: Option<String>,
        handlers: MouseHandlers,
    },
    Text(String),
}

/// One element or text leaf of a mounted tree.
///
/// Fragments, lists and empty slots never mount; their children attach to
/// the nearest element.
#[derive(Debug, Clone)]
pub struct MountedNode {
    pub parent: Option<NodeHandle>,
    pub children: Vec<NodeHandle>,
    pub kind: MountedKind,
    pub rect: LayoutRect,
    taffy_id: NodeId,
}

impl MountedNode {
    pub fn is_element(&self) -> bool {
        matches!(self.kind, MountedKind::Element { .. })
    }
}

// =============================================================================
// Mounted tree
// =============================================================================

pub struct MountedTree {
    taffy: TaffyTree<String>,
    nodes: Vec<MountedNode>,
    roots: Vec<NodeHandle>,
    refs: Vec<(NodeRef, NodeHandle)>,
    hit_grid: HitGrid,
    pointer: PointerState,
    options: MountOptions,
}

/// Mount a node tree into a viewport.
///
/// Refs are filled only once layout succeeds. Fails with
/// [`FlexError::InvalidSize`] if any element carries a size the host
/// cannot resolve.
pub fn mount(root: &Node, options: MountOptions) -> Result<MountedTree, FlexError> {
    let mut mounted = MountedTree {
        taffy: TaffyTree::new(),
        nodes: Vec::new(),
        roots: Vec::new(),
        refs: Vec::new(),
        hit_grid: HitGrid::new(options.width, options.height),
        pointer: PointerState::new(),
        options,
    };

    let mut roots = Vec::new();
    mounted.build(root, None, &mut roots)?;
    mounted.roots = roots;
    mounted.compute()?;

    for (node_ref, handle) in &mounted.refs {
        node_ref.set(Some(*handle));
    }

    tracing::debug!(
        nodes = mounted.nodes.len(),
        roots = mounted.roots.len(),
        listeners = mounted.listener_count(),
        width = options.width,
        height = options.height,
        "mounted tree"
    );
    Ok(mounted)
}

impl MountedTree {
    // =========================================================================
    // Building
    // =========================================================================

    fn push(&mut self, node: MountedNode) -> NodeHandle {
        let handle = NodeHandle::new(self.nodes.len());
        self.nodes.push(node);
        handle
    }

    fn build(
        &mut self,
        node: &Node,
        parent: Option<NodeHandle>,
        out: &mut Vec<NodeHandle>,
    ) -> Result<(), FlexError> {
        match node {
            Node::Element(el) => out.push(self.build_element(el, parent)?),
            Node::Text(content) => {
                let taffy_id = self
                    .taffy
                    .new_leaf_with_context(TaffyStyle::default(), content.clone())?;
                out.push(self.push(MountedNode {
                    parent,
                    children: Vec::new(),
                    kind: MountedKind::Text(content.clone()),
                    rect: LayoutRect::default(),
                    taffy_id,
                }));
            }
            Node::Fragment(Fragment { children, .. }) | Node::List(children) => {
                for child in children {
                    self.build(child, parent, out)?;
                }
            }
            Node::Empty => {}
        }
        Ok(())
    }

    fn build_element(
        &mut self,
        el: &Element,
        parent: Option<NodeHandle>,
    ) -> Result<NodeHandle, FlexError> {
        let style = to_taffy_style(&el.style).inspect_err(|err| {
            tracing::warn!(%err, id = el.id.as_deref(), tag = %el.tag, "rejected element style");
        })?;
        let taffy_id = self.taffy.new_leaf(style)?;
        let handle = self.push(MountedNode {
            parent,
            children: Vec::new(),
            kind: MountedKind::Element {
                tag: el.tag.clone(),
                id: el.id.clone(),
                class_name: el.class_name.clone(),
                handlers: el.handlers.clone(),
            },
            rect: LayoutRect::default(),
            taffy_id,
        });
        if let Some(node_ref) = &el.node_ref {
            self.refs.push((node_ref.clone(), handle));
        }

        let mut children = Vec::new();
        for child in &el.children {
            self.build(child, Some(handle), &mut children)?;
        }

        let child_ids: Vec<NodeId> = children
            .iter()
            .map(|child| self.nodes[child.index()].taffy_id)
            .collect();
        self.taffy.set_children(taffy_id, &child_ids)?;
        self.nodes[handle.index()].children = children;
        Ok(handle)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn compute(&mut self) -> Result<(), FlexError> {
        let available = TaffySize {
            width: AvailableSpace::Definite(self.options.width as f32),
            height: AvailableSpace::Definite(self.options.height as f32),
        };

        for root in &self.roots {
            let root_id = self.nodes[root.index()].taffy_id;
            self.taffy.compute_layout_with_measure(
                root_id,
                available,
                |known, space, _node_id, content: Option<&mut String>, _style| {
                    content.map_or(TaffySize::ZERO, |text| measure_text(text, known, space))
                },
            )?;
        }

        // Nodes are stored in pre-order, so a parent's origin is final before its children.
        // Origins stay unclamped: a centered or overflowing child may sit left of its parent.
        let mut origins: Vec<(f32, f32)> = Vec::with_capacity(self.nodes.len());
        for index in 0..self.nodes.len() {
            let layout = self.taffy.layout(self.nodes[index].taffy_id)?;
            let (parent_x, parent_y) = self.nodes[index]
                .parent
                .map_or((0.0, 0.0), |parent| origins[parent.index()]);

            let x = parent_x + layout.location.x;
            let y = parent_y + layout.location.y;
            origins.push((x, y));

            self.nodes[index].rect = clip_rect(x, y, layout.size.width, layout.size.height);
        }

        self.hit_grid.clear();
        for (index, node) in self.nodes.iter().enumerate() {
            if node.is_element() {
                let r = node.rect;
                self.hit_grid
                    .fill_rect(r.x, r.y, r.width, r.height, NodeHandle::new(index));
            }
        }
        Ok(())
    }

    /// Lay the tree out again in a new viewport.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), FlexError> {
        self.options = MountOptions { width, height };
        self.hit_grid.resize(width, height);
        self.compute()?;
        tracing::debug!(width, height, "resized tree");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn options(&self) -> MountOptions {
        self.options
    }

    /// Top-level mounted nodes, in order.
    pub fn roots(&self) -> &[NodeHandle] {
        &self.roots
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&MountedNode> {
        self.nodes.get(handle.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn layout(&self, handle: NodeHandle) -> Option<LayoutRect> {
        self.node(handle).map(|node| node.rect)
    }

    /// Mounted children of a node; fragments are already spliced away.
    pub fn children(&self, handle: NodeHandle) -> &[NodeHandle] {
        self.node(handle).map_or(&[], |node| &node.children)
    }

    /// First element (in document order) with the given id.
    pub fn handle_by_id(&self, id: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .position(|node| {
                matches!(&node.kind, MountedKind::Element { id: Some(el_id), .. } if el_id == id)
            })
            .map(NodeHandle::new)
    }

    pub fn element_id(&self, handle: NodeHandle) -> Option<&str> {
        match &self.node(handle)?.kind {
            MountedKind::Element { id, .. } => id.as_deref(),
            MountedKind::Text(_) => None,
        }
    }

    pub fn class_name(&self, handle: NodeHandle) -> Option<&str> {
        match &self.node(handle)?.kind {
            MountedKind::Element { class_name, .. } => class_name.as_deref(),
            MountedKind::Text(_) => None,
        }
    }

    /// Element at a cell, innermost first.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<NodeHandle> {
        self.hit_grid.get(x, y)
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Route a pointer event. Returns true if any listener fired.
    pub fn dispatch(&self, event: MouseEvent) -> bool {
        tracing::debug!(action = ?event.action, x = event.x, y = event.y, "dispatch pointer event");
        self.pointer.dispatch(event, &self.hit_grid, self)
    }

    /// Feed a terminal event. Mouse events are dispatched and resizes
    /// relayout the tree; anything else is ignored.
    pub fn handle_input(&mut self, event: Event) -> Result<bool, FlexError> {
        match event {
            Event::Mouse(mouse) => Ok(self.dispatch(convert_mouse_event(mouse))),
            Event::Resize(width, height) => {
                self.resize(width, height)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    pub fn hovered(&self) -> Option<NodeHandle> {
        self.pointer.hovered()
    }

    /// Element holding the current press, until the button is released.
    pub fn pressed(&self) -> Option<NodeHandle> {
        self.pointer.pressed()
    }

    /// Number of elements with at least one pointer listener attached.
    pub fn listener_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(&node.kind, MountedKind::Element { handlers, .. } if !handlers.is_empty()))
            .count()
    }

    pub fn last_event(&self) -> Option<MouseEvent> {
        self.pointer.last_event()
    }

    /// Tear the tree down, clearing every ref it filled.
    pub fn unmount(self) {
        tracing::debug!(nodes = self.nodes.len(), "unmounting tree");
    }
}

impl Drop for MountedTree {
    fn drop(&mut self) {
        for (node_ref, handle) in &self.refs {
            // A ref passed to a newer tree belongs to that tree now
            if node_ref.get() == Some(*handle) {
                node_ref.set(None);
            }
        }
        self.pointer.reset();
    }
}

impl HandlerTree for MountedTree {
    fn handlers(&self, node: NodeHandle) -> Option<&MouseHandlers> {
        match &self.node(node)?.kind {
            MountedKind::Element { handlers, .. } => Some(handlers),
            MountedKind::Text(_) => None,
        }
    }

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.node(node)?.parent
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn to_cells(value: f32) -> u16 {
    value.round().clamp(0.0, u16::MAX as f32) as u16
}

/// Absolute float bounds to the visible, non-negative part in cells.
fn clip_rect(x: f32, y: f32, width: f32, height: f32) -> LayoutRect {
    let (left, top) = (to_cells(x), to_cells(y));
    LayoutRect {
        x: left,
        y: top,
        width: to_cells(x + width).saturating_sub(left),
        height: to_cells(y + height).saturating_sub(top),
    }
}

/// Measure a text leaf, wrapping at the available width.
fn measure_text(
    text: &str,
    known: TaffySize<Option<f32>>,
    space: TaffySize<AvailableSpace>,
) -> TaffySize<f32> {
    if text.is_empty() {
        return TaffySize::ZERO;
    }

    let text_width = string_width(text);
    let wrap_at = match known.width {
        Some(width) => to_cells(width),
        None => match space.width {
            AvailableSpace::Definite(width) => to_cells(width).min(text_width),
            AvailableSpace::MinContent => text_width,
            AvailableSpace::MaxContent => u16::MAX,
        },
    };

    TaffySize {
        width: known.width.unwrap_or(text_width.min(wrap_at) as f32),
        height: known
            .height
            .unwrap_or(measure_text_height(text, wrap_at.max(1)) as f32),
    }
}

// =============================================================================
// Tests
// =============================================================================
