//! Stacks Example - Flex containers, spacing and pointer events
//!
//! This example demonstrates:
//! - A vertical stack of horizontal toolbars
//! - Gutters between, before and after children
//! - Centering along both axes
//! - Click bubbling from a child to its container
//!
//! Run with: cargo run --example stacks

use std::cell::Cell;
use std::rc::Rc;

use spark_flex::{
    flex_container, horizontal_stack, mount, vertical_stack, Element, FlexProps, MountOptions,
    MountedTree, MouseButton, MouseEvent, Node, NodeHandle, NodeRef, Spacing, Style,
};

fn button(id: &str, label: &str) -> Node {
    Element::div()
        .id(id)
        .style(Style::default().width(label.len() as u16 + 2).height(1))
        .child(label)
        .into()
}

fn main() -> Result<(), spark_flex::FlexError> {
    println!("=== spark-flex Stacks Example ===\n");

    let clicks = Rc::new(Cell::new(0u32));
    let toolbar_ref = NodeRef::new();

    let tree = vertical_stack(FlexProps {
        id: Some("root".to_string()),
        style: Some(Style::default().width("100%").height(20)),
        spacing: Some(Spacing::from(1)),
        spacing_start: Some(Spacing::from(1)),
        children: Some(vec![
            horizontal_stack(FlexProps {
                id: Some("toolbar".to_string()),
                node_ref: Some(toolbar_ref.clone()),
                spacing: Some(Spacing::from(2)),
                spacing_start: Some(Spacing::from(1)),
                spacing_end: Some(Spacing::from(1)),
                on_click: Some(Rc::new({
                    let clicks = clicks.clone();
                    move |event: &MouseEvent| {
                        clicks.set(clicks.get() + 1);
                        println!("  toolbar click at ({}, {})", event.x, event.y);
                    }
                })),
                children: Some(vec![
                    button("file", "File"),
                    button("edit", "Edit"),
                    button("view", "View"),
                ]),
                ..Default::default()
            }),
            flex_container(FlexProps {
                id: Some("banner".to_string()),
                vertical_center: Some(true.into()),
                horizontal_center: Some(true.into()),
                style: Some(Style::default().width("100%").height(5)),
                children: Some(vec![Node::text("centered")]),
                ..Default::default()
            }),
        ]),
        ..Default::default()
    });

    let mounted = mount(&tree, MountOptions::default())?;
    println!("elements with listeners: {}\n", mounted.listener_count());

    println!("Layout results (80x24):");
    for &root in mounted.roots() {
        print_tree(&mounted, root, 1);
    }

    println!("\ntoolbar ref: {:?}", toolbar_ref.get());

    if let Some(edit) = mounted.handle_by_id("edit").and_then(|h| mounted.layout(h)) {
        println!("\nClicking \"Edit\"...");
        mounted.dispatch(MouseEvent::down(MouseButton::Left, edit.x, edit.y));
        println!("  pressed: {:?}", mounted.pressed());
        mounted.dispatch(MouseEvent::up(MouseButton::Left, edit.x, edit.y));
    }

    // Press on "File", release on "View": the toolbar still gets the click
    let ends = ["file", "view"].map(|id| mounted.handle_by_id(id).and_then(|h| mounted.layout(h)));
    if let [Some(file), Some(view)] = ends {
        println!("\nDragging from \"File\" to \"View\"...");
        mounted.dispatch(MouseEvent::down(MouseButton::Left, file.x, file.y));
        mounted.dispatch(MouseEvent::up(MouseButton::Left, view.x, view.y));
    }
    println!("clicks: {}", clicks.get());

    mounted.unmount();
    println!("toolbar ref after unmount: {:?}", toolbar_ref.get());

    println!("\n=== Stacks Example Complete ===");
    Ok(())
}

fn print_tree(mounted: &MountedTree, handle: NodeHandle, depth: usize) {
    let indent = "  ".repeat(depth);
    if let Some(rect) = mounted.layout(handle) {
        let label = mounted.element_id(handle).unwrap_or("-");
        println!(
            "{}[{:2}] {} at ({}, {}) size {}x{}",
            indent,
            handle.index(),
            label,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    }
    for &child in mounted.children(handle) {
        print_tree(mounted, child, depth + 1);
    }
}
