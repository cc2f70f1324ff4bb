use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use dropdom::layout::layout;
use dropdom::{
    collect_focusable, contains_element, hit_path, hit_test, hit_test_focusable, Border, Element,
    Event, FocusState, Key, LayoutResult, Modifiers, MouseButton, Overflow, Rect, Style,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// A dropdown-shaped tree: focusable container, clickable heading with a
/// label, an overlay panel with a clickable item, and a second focusable
/// element below.
fn tree() -> (Element, LayoutResult) {
    let root = Element::col()
        .id("root")
        .child(
            Element::col()
                .id("container")
                .focusable(true)
                .child(
                    Element::row()
                        .id("heading")
                        .clickable(true)
                        .child(Element::text("Pick").id("label")),
                )
                .child(
                    Element::col()
                        .id("panel")
                        .z_index(1)
                        .child(Element::text("item").id("item").clickable(true)),
                ),
        )
        .child(Element::text("other").id("other").focusable(true).clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 20)),
        ("container", Rect::new(0, 0, 20, 3)),
        ("heading", Rect::new(1, 1, 18, 1)),
        ("label", Rect::new(1, 1, 4, 1)),
        ("panel", Rect::new(0, 3, 20, 2)),
        ("item", Rect::new(0, 3, 20, 1)),
        ("other", Rect::new(0, 3, 20, 1)),
    ]);

    (root, layout)
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_bubbles_to_clickable_ancestor() {
    let (root, layout) = tree();
    assert_eq!(hit_test(&layout, &root, 2, 1), Some("heading".to_string()));
}

#[test]
fn test_hit_test_focusable_finds_container() {
    let (root, layout) = tree();
    assert_eq!(
        hit_test_focusable(&layout, &root, 2, 1),
        Some("container".to_string())
    );
}

#[test]
fn test_overlay_wins_over_flow_content() {
    let (root, layout) = tree();
    // "item" and "other" share a rect; the panel's z-index puts item on top.
    assert_eq!(hit_test(&layout, &root, 5, 3), Some("item".to_string()));
}

#[test]
fn test_hit_path_lists_ancestors() {
    let (root, layout) = tree();
    assert_eq!(
        hit_path(&layout, &root, 2, 1),
        vec!["root", "container", "heading", "label"]
    );
    assert!(hit_path(&layout, &root, 50, 50).is_empty());
}

#[test]
fn test_contains_element() {
    let (root, _) = tree();
    assert!(contains_element(&root, "container", "item"));
    assert!(contains_element(&root, "container", "container"));
    assert!(!contains_element(&root, "container", "other"));
    assert!(!contains_element(&root, "missing", "item"));
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_collect_focusable_tree_order() {
    let (root, _) = tree();
    assert_eq!(collect_focusable(&root), vec!["container", "other"]);
}

#[test]
fn test_tab_moves_focus_with_blur_target() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "container".into()
        }]
    );

    let events = focus.process_events(&[key(KeyCode::Tab)], &root, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "container".into(),
                new_target: Some("other".into()),
            },
            Event::Focus {
                target: "other".into()
            },
        ]
    );
    assert_eq!(focus.focused(), Some("other"));
}

#[test]
fn test_backtab_wraps_to_last() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();
    focus.process_events(&[key(KeyCode::BackTab)], &root, &layout);
    assert_eq!(focus.focused(), Some("other"));
}

#[test]
fn test_keys_target_focused_element() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();
    focus.move_focus("container");

    let events = focus.process_events(&[key(KeyCode::Esc)], &root, &layout);
    assert_eq!(
        events,
        vec![Event::Key {
            target: Some("container".into()),
            key: Key::Escape,
            modifiers: Modifiers::new(),
        }]
    );
}

#[test]
fn test_click_focuses_then_clicks() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();

    let events = focus.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 2, 1)],
        &root,
        &layout,
    );

    assert_eq!(
        events,
        vec![
            Event::Focus {
                target: "container".into()
            },
            Event::Click {
                target: Some("heading".into()),
                x: 2,
                y: 1,
                button: MouseButton::Left,
            },
        ]
    );
}

#[test]
fn test_click_on_empty_space_blurs() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();
    focus.move_focus("container");

    let events = focus.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 30, 10)],
        &root,
        &layout,
    );

    assert_eq!(
        events[0],
        Event::Blur {
            target: "container".into(),
            new_target: None,
        }
    );
    assert_eq!(focus.focused(), None);
}

#[test]
fn test_click_inside_panel_keeps_container_focus() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();
    focus.move_focus("container");

    let events = focus.process_events(
        &[mouse(MouseEventKind::Down(CtMouseButton::Left), 5, 3)],
        &root,
        &layout,
    );

    // No focus change, only the click on the item.
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], Event::Click { target: Some(t), .. } if t == "item"));
}

#[test]
fn test_move_focus_same_element_is_noop() {
    let mut focus = FocusState::new();
    assert_eq!(focus.move_focus("a").len(), 1);
    assert!(focus.move_focus("a").is_empty());
}

#[test]
fn test_sync_drops_vanished_focus() {
    let (root, _) = tree();
    let mut focus = FocusState::new();
    focus.move_focus("gone");
    let events = focus.sync(&root);
    assert_eq!(focus.focused(), None);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "gone".into(),
            new_target: None,
        }]
    );
}

#[test]
fn test_sync_keeps_present_focus() {
    let (root, _) = tree();
    let mut focus = FocusState::new();
    focus.move_focus("other");
    assert!(focus.sync(&root).is_empty());
    assert_eq!(focus.focused(), Some("other"));
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_enter_and_leave() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 2, 1)], &root, &layout);
    let entered: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            Event::MouseEnter { target } => Some(target.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(entered, vec!["root", "container", "heading", "label"]);

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 30, 10)], &root, &layout);
    let left: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            Event::MouseLeave { target } => Some(target.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(left, vec!["label", "heading", "container"]);
    assert_eq!(focus.hovered(), &["root".to_string()]);
}

#[test]
fn test_hover_into_panel_stays_inside_container() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();
    focus.process_events(&[mouse(MouseEventKind::Moved, 2, 1)], &root, &layout);

    let events = focus.process_events(&[mouse(MouseEventKind::Moved, 5, 3)], &root, &layout);
    assert!(!events.contains(&Event::MouseLeave {
        target: "container".into()
    }));
    assert!(events.contains(&Event::MouseEnter {
        target: "item".into()
    }));
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_wheel_targets_element_under_pointer() {
    let (root, layout) = tree();
    let mut focus = FocusState::new();

    let events = focus.process_events(
        &[
            mouse(MouseEventKind::ScrollDown, 2, 1),
            mouse(MouseEventKind::ScrollUp, 30, 10),
        ],
        &root,
        &layout,
    );
    assert_eq!(
        events,
        vec![
            Event::Scroll {
                target: Some("label".into()),
                delta_y: 1,
                x: 2,
                y: 1,
            },
            Event::Scroll {
                target: Some("root".into()),
                delta_y: -1,
                x: 30,
                y: 10,
            },
        ]
    );
}

#[test]
fn test_scrolled_out_items_are_not_hit() {
    // Three visible rows inside the border; item-1 is scrolled past.
    let root = Element::col()
        .id("list")
        .max_height(5)
        .overflow(Overflow::Auto)
        .scroll_y(2)
        .style(Style::new().border(Border::Single))
        .children(
            (0..6)
                .map(|i| Element::text(format!("item-{i}")).id(format!("item-{i}")).clickable(true))
                .collect(),
        );
    let layout = layout(&root, Rect::new(0, 0, 10, 10));

    assert_eq!(hit_test(&layout, &root, 2, 1), Some("item-2".to_string()));
    assert_eq!(hit_test(&layout, &root, 2, 3), Some("item-4".to_string()));
    // The bottom border row, where item-5 would be drawn unclipped.
    assert_eq!(hit_test(&layout, &root, 2, 4), None);
    assert_eq!(hit_path(&layout, &root, 2, 0), vec!["list".to_string()]);
}
