//! Flex Container - Flexbox container with optional centering and gutters.
//!
//! Renders one `div` whose display is flex, styled from the props, holding
//! the children with spacer nodes woven in between (and around) them.
//!
//! # Spacing
//!
//! With `spacing` set, each child becomes a keyed group:
//!
//! ```text
//! [start?] child0 [gap] | child1 [gap] | ... | childN [end?]
//! ```
//!
//! Without `spacing`, children are handed through untouched and the start
//! and end gutters are ignored.
//!
//! # Example
//!
//! ```ignore
//! use spark_flex::primitives::{flex_container, FlexProps};
//! use spark_flex::types::FlexDirection;
//!
//! let list = flex_container(FlexProps {
//!     direction: Some(FlexDirection::Column.into()),
//!     spacing: Some(1.into()),
//!     children: Some(items),
//!     ..Default::default()
//! });
//! ```

use crate::node::{children_to_vec, Element, Fragment, Key, Node, Style};
use crate::state::mouse::MouseHandlers;
use crate::types::{AlignItems, Display, FlexDirection, JustifyContent};

use super::types::{FlexProps, PropValue, Spacing};

// =============================================================================
// Flex Container
// =============================================================================

/// Render a flex container.
pub fn flex_container(props: FlexProps) -> Node {
    let direction = props.direction.as_ref().map(PropValue::get);
    let vertical_center = props.vertical_center.as_ref().is_some_and(PropValue::get);
    let horizontal_center = props.horizontal_center.as_ref().is_some_and(PropValue::get);

    let style = container_style(direction, vertical_center, horizontal_center, props.style.as_ref());

    let gutters = Gutters {
        direction,
        spacing: props.spacing.as_ref(),
        start: props.spacing_start.as_ref(),
        end: props.spacing_end.as_ref(),
    };
    let children = render_children(props.children, &gutters).unwrap_or_default();

    tracing::trace!(
        id = props.id.as_deref(),
        direction = direction.map(|d| d.as_str()),
        children = children.len(),
        "flex_container"
    );

    Node::Element(Element {
        id: props.id,
        class_name: props.class_name,
        style,
        handlers: MouseHandlers {
            on_click: props.on_click,
            on_mouse_down: props.on_mouse_down,
            on_mouse_move: props.on_mouse_move,
            on_mouse_up: props.on_mouse_up,
        },
        node_ref: props.node_ref,
        children,
        ..Element::div()
    })
}

// =============================================================================
// Styling
// =============================================================================

/// Derive the container style.
///
/// Centering flags map independently: `vertical_center` sets only
/// `align_items`, `horizontal_center` only `justify_content`. Overrides are
/// merged last.
pub fn container_style(
    direction: Option<FlexDirection>,
    vertical_center: bool,
    horizontal_center: bool,
    overrides: Option<&Style>,
) -> Style {
    let derived = Style {
        display: Some(Display::Flex),
        flex_direction: direction,
        align_items: vertical_center.then_some(AlignItems::Center),
        justify_content: horizontal_center.then_some(JustifyContent::Center),
        ..Default::default()
    };

    match overrides {
        Some(overrides) => derived.merge(overrides),
        None => derived,
    }
}

// =============================================================================
// Children
// =============================================================================

/// Spacing directives for one render.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gutters<'a> {
    pub direction: Option<FlexDirection>,
    pub spacing: Option<&'a Spacing>,
    pub start: Option<&'a Spacing>,
    pub end: Option<&'a Spacing>,
}

/// Weave spacers between children.
///
/// Returns `children` unchanged when `gutters.spacing` is `None`, even if a
/// start or end gutter is set.
pub fn render_children(children: Option<Vec<Node>>, gutters: &Gutters<'_>) -> Option<Vec<Node>> {
    let Some(spacing) = gutters.spacing else {
        return children;
    };
    let items = children_to_vec(children?);
    let last = items.len().saturating_sub(1);

    let groups = items
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            let key = child_key(&child, index);
            let mut group = Vec::with_capacity(4);

            if index == 0 {
                group.extend(render_spacing(gutters.start, gutters.direction));
            }
            group.push(child);
            if index < last {
                group.extend(render_spacing(Some(spacing), gutters.direction));
            }
            if index == last {
                group.extend(render_spacing(gutters.end, gutters.direction));
            }

            Node::Fragment(Fragment { key: Some(key), children: group })
        })
        .collect();

    Some(groups)
}

/// Identity of a child: its declared key, else its position.
///
/// Spacers share the group key of the child they follow.
pub fn child_key(child: &Node, index: usize) -> Key {
    child.key().cloned().unwrap_or(Key::Index(index))
}

/// Render one spacing directive.
///
/// Sizes become an empty span: `width` for `Row` or no direction, `height`
/// for `Column`. The reverse directions match neither, so their spacer
/// gets no size at all.
pub fn render_spacing(spacing: Option<&Spacing>, direction: Option<FlexDirection>) -> Option<Node> {
    match spacing? {
        Spacing::Size(size) => {
            let mut style = Style::default();
            match direction {
                None | Some(FlexDirection::Row) => style.width = Some(size.clone()),
                Some(FlexDirection::Column) => style.height = Some(size.clone()),
                Some(FlexDirection::RowReverse) | Some(FlexDirection::ColumnReverse) => {}
            }
            Some(Node::Element(Element::span().style(style)))
        }
        Spacing::Node(node) => Some(node.clone()),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{NodeRef, Tag};
    use crate::types::Size;
    use spark_signals::signal;
    use std::rc::Rc;

    fn items(n: usize) -> Vec<Node> {
        (0..n).map(|i| Node::text(format!("item {}", i))).collect()
    }

    fn container(node: &Node) -> &Element {
        node.as_element().expect("container element")
    }

    fn spacer_style(node: &Node) -> &Style {
        let el = node.as_element().expect("spacer element");
        assert_eq!(el.tag, Tag::Span);
        assert!(el.children.is_empty());
        &el.style
    }

    // -------------------------------------------------------------------------
    // Styling
    // -------------------------------------------------------------------------

    #[test]
    fn test_container_style_defaults() {
        let style = container_style(None, false, false, None);
        assert_eq!(style.display, Some(Display::Flex));
        assert_eq!(style.flex_direction, None);
        assert_eq!(style.align_items, None);
        assert_eq!(style.justify_content, None);
    }

    #[test]
    fn test_centering_flags_are_independent() {
        let vertical = container_style(None, true, false, None);
        assert_eq!(vertical.align_items, Some(AlignItems::Center));
        assert_eq!(vertical.justify_content, None);

        let horizontal = container_style(None, false, true, None);
        assert_eq!(horizontal.align_items, None);
        assert_eq!(horizontal.justify_content, Some(JustifyContent::Center));

        let both = container_style(None, true, true, None);
        assert_eq!(both.align_items, Some(AlignItems::Center));
        assert_eq!(both.justify_content, Some(JustifyContent::Center));
    }

    #[test]
    fn test_style_overrides_win() {
        let overrides = Style {
            display: Some(Display::None),
            flex_direction: Some(FlexDirection::Column),
            align_items: Some(AlignItems::FlexEnd),
            ..Default::default()
        };

        let style = container_style(Some(FlexDirection::Row), true, false, Some(&overrides));
        assert_eq!(style.display, Some(Display::None));
        assert_eq!(style.flex_direction, Some(FlexDirection::Column));
        assert_eq!(style.align_items, Some(AlignItems::FlexEnd));
    }

    // -------------------------------------------------------------------------
    // Children
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_spacing_passes_children_through() {
        let children = vec![
            Node::text("a"),
            Node::list(["b", "c"]),
            Node::Empty,
        ];
        let start = Spacing::from(1);
        let end = Spacing::from(2);
        let gutters = Gutters { start: Some(&start), end: Some(&end), ..Default::default() };

        let out = render_children(Some(children.clone()), &gutters);
        assert_eq!(out, Some(children));
        assert_eq!(render_children(None, &gutters), None);
    }

    #[test]
    fn test_spacing_without_children() {
        let spacing = Spacing::from(1);
        let gutters = Gutters { spacing: Some(&spacing), ..Default::default() };

        assert_eq!(render_children(None, &gutters), None);
        assert_eq!(render_children(Some(Vec::new()), &gutters), Some(Vec::new()));
    }

    #[test]
    fn test_spacing_interleaves() {
        let spacing = Spacing::from(1);
        let gutters = Gutters { spacing: Some(&spacing), ..Default::default() };

        let groups = render_children(Some(items(3)), &gutters).unwrap();
        assert_eq!(groups.len(), 3);

        let leaves: Vec<&Node> = groups.iter().flat_map(Node::leaves).collect();
        assert_eq!(leaves.len(), 5);
        for (i, leaf) in leaves.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(*leaf, &Node::text(format!("item {}", i / 2)));
            } else {
                assert_eq!(spacer_style(leaf).width, Some(Size::from(1)));
            }
        }
    }

    #[test]
    fn test_single_child_gets_no_gap() {
        let spacing = Spacing::from(1);
        let gutters = Gutters { spacing: Some(&spacing), ..Default::default() };

        let groups = render_children(Some(items(1)), &gutters).unwrap();
        assert_eq!(groups[0].leaves(), vec![&Node::text("item 0")]);
    }

    #[test]
    fn test_start_and_end_gutters() {
        let spacing = Spacing::from(1);
        let start = Spacing::from(3);
        let end = Spacing::from(5);
        let gutters = Gutters {
            spacing: Some(&spacing),
            start: Some(&start),
            end: Some(&end),
            direction: None,
        };

        let groups = render_children(Some(items(3)), &gutters).unwrap();
        let leaves: Vec<&Node> = groups.iter().flat_map(Node::leaves).collect();
        assert_eq!(leaves.len(), 7);

        assert_eq!(spacer_style(leaves[0]).width, Some(Size::from(3)));
        assert_eq!(leaves[1], &Node::text("item 0"));
        assert_eq!(spacer_style(leaves[2]).width, Some(Size::from(1)));
        assert_eq!(leaves[3], &Node::text("item 1"));
        assert_eq!(spacer_style(leaves[4]).width, Some(Size::from(1)));
        assert_eq!(leaves[5], &Node::text("item 2"));
        assert_eq!(spacer_style(leaves[6]).width, Some(Size::from(5)));
    }

    #[test]
    fn test_group_keys() {
        let spacing = Spacing::from(1);
        let gutters = Gutters { spacing: Some(&spacing), ..Default::default() };
        let children = vec![
            Node::from(Element::div().key("first")),
            Node::text("plain"),
            Node::from(Element::div()),
        ];

        let groups = render_children(Some(children), &gutters).unwrap();
        let keys: Vec<Option<&Key>> = groups.iter().map(Node::key).collect();
        assert_eq!(
            keys,
            vec![Some(&Key::from("first")), Some(&Key::Index(1)), Some(&Key::Index(2))]
        );
        // The child keeps its own key inside the group
        assert_eq!(groups[0].leaves()[0].key(), Some(&Key::from("first")));
    }

    #[test]
    fn test_children_normalized_before_spacing() {
        let spacing = Spacing::from(1);
        let gutters = Gutters { spacing: Some(&spacing), ..Default::default() };
        let children = vec![Node::list(["a", "b"]), Node::Empty, Node::text("c")];

        let groups = render_children(Some(children), &gutters).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].key(), Some(&Key::Index(2)));
    }

    // -------------------------------------------------------------------------
    // Spacers
    // -------------------------------------------------------------------------

    #[test]
    fn test_render_spacing_absent() {
        assert_eq!(render_spacing(None, Some(FlexDirection::Row)), None);
    }

    #[test]
    fn test_spacer_axis_by_direction() {
        let size = Spacing::from("1rem");

        for direction in [None, Some(FlexDirection::Row)] {
            let node = render_spacing(Some(&size), direction).unwrap();
            let style = spacer_style(&node);
            assert_eq!(style.width, Some(Size::from("1rem")));
            assert_eq!(style.height, None);
        }

        let node = render_spacing(Some(&Spacing::from(8)), Some(FlexDirection::Column)).unwrap();
        let style = spacer_style(&node);
        assert_eq!(style.height, Some(Size::from(8)));
        assert_eq!(style.width, None);
    }

    #[test]
    fn test_reverse_directions_leave_spacer_unsized() {
        for direction in [FlexDirection::RowReverse, FlexDirection::ColumnReverse] {
            let node = render_spacing(Some(&Spacing::from(4)), Some(direction)).unwrap();
            let style = spacer_style(&node);
            assert_eq!(style.width, None);
            assert_eq!(style.height, None);
        }
    }

    #[test]
    fn test_node_spacing_is_cloned_verbatim() {
        let divider = Node::from(Element::span().class_name("divider").child("|"));
        let spacing = Spacing::from(divider.clone());

        let first = render_spacing(Some(&spacing), Some(FlexDirection::Column)).unwrap();
        let second = render_spacing(Some(&spacing), None).unwrap();
        assert_eq!(first, divider);
        assert_eq!(second, divider);
    }

    // -------------------------------------------------------------------------
    // Container
    // -------------------------------------------------------------------------

    #[test]
    fn test_flex_container_passthrough() {
        let node_ref = NodeRef::new();
        let on_click: crate::state::mouse::MouseCallback = Rc::new(|_| {});

        let node = flex_container(FlexProps {
            id: Some("toolbar".to_string()),
            class_name: Some("bar".to_string()),
            node_ref: Some(node_ref.clone()),
            on_click: Some(on_click.clone()),
            children: Some(items(2)),
            ..Default::default()
        });

        let el = container(&node);
        assert_eq!(el.tag, Tag::Div);
        assert_eq!(el.id.as_deref(), Some("toolbar"));
        assert_eq!(el.class_name.as_deref(), Some("bar"));
        assert_eq!(el.node_ref.as_ref(), Some(&node_ref));
        assert!(el.handlers.on_click.as_ref().is_some_and(|c| Rc::ptr_eq(c, &on_click)));
        assert!(el.handlers.on_mouse_down.is_none());
        assert!(el.handlers.on_mouse_move.is_none());
        assert!(el.handlers.on_mouse_up.is_none());
        assert_eq!(el.children, items(2));
    }

    #[test]
    fn test_flex_container_without_children() {
        let node = flex_container(FlexProps {
            spacing: Some(1.into()),
            ..Default::default()
        });
        assert!(container(&node).children.is_empty());
    }

    #[test]
    fn test_flex_container_reads_signals() {
        let direction = signal(FlexDirection::Row);
        let centered = signal(false);

        let render = || {
            flex_container(FlexProps {
                direction: Some(direction.clone().into()),
                vertical_center: Some(centered.clone().into()),
                horizontal_center: Some(PropValue::Getter(Rc::new(|| true))),
                ..Default::default()
            })
        };

        let first = render();
        assert_eq!(container(&first).style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(container(&first).style.align_items, None);

        direction.set(FlexDirection::Column);
        centered.set(true);

        let second = render();
        assert_eq!(container(&second).style.flex_direction, Some(FlexDirection::Column));
        assert_eq!(container(&second).style.align_items, Some(AlignItems::Center));
        assert_eq!(container(&second).style.justify_content, Some(JustifyContent::Center));
    }
}
