use dropdom::layout::layout;
use dropdom::{Border, Edges, Element, Overflow, Position, Rect, Size, Style};

// ============================================================================
// Flow
// ============================================================================

#[test]
fn test_column_stacks_children() {
    let root = Element::col()
        .id("root")
        .child(Element::text("abc").id("a"))
        .child(Element::text("hello").id("b"));

    let result = layout(&root, Rect::new(0, 0, 20, 10));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 2)));
    assert_eq!(result.get("a"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("b"), Some(&Rect::new(0, 1, 20, 1)));
}

#[test]
fn test_column_gap() {
    let root = Element::col()
        .id("root")
        .gap(1)
        .child(Element::text("a").id("a"))
        .child(Element::text("b").id("b"));

    let result = layout(&root, Rect::new(0, 0, 20, 10));

    assert_eq!(result.get("root").map(|r| r.height), Some(3));
    assert_eq!(result.get("b").map(|r| r.y), Some(2));
}

#[test]
fn test_row_grow_takes_spare_width() {
    let root = Element::row()
        .id("row")
        .width(Size::Fixed(20))
        .child(Element::text("label").id("label").grow(1))
        .child(Element::text("▾").id("arrow"));

    let result = layout(&root, Rect::new(0, 0, 40, 5));

    assert_eq!(result.get("row"), Some(&Rect::new(0, 0, 20, 1)));
    assert_eq!(result.get("label"), Some(&Rect::new(0, 0, 19, 1)));
    assert_eq!(result.get("arrow"), Some(&Rect::new(19, 0, 1, 1)));
}

#[test]
fn test_row_overflow_shrinks_grower() {
    let root = Element::row()
        .id("row")
        .width(Size::Fixed(10))
        .child(Element::text("abcdefghijklmno").id("label").grow(1))
        .child(Element::text("▾").id("arrow"));

    let result = layout(&root, Rect::new(0, 0, 40, 5));

    assert_eq!(result.get("label"), Some(&Rect::new(0, 0, 9, 1)));
    assert_eq!(result.get("arrow"), Some(&Rect::new(9, 0, 1, 1)));
}

#[test]
fn test_border_and_padding_shrink_inner_area() {
    let root = Element::col()
        .id("root")
        .style(Style::new().border(Border::Rounded))
        .padding(Edges::horizontal(1))
        .child(Element::text("x").id("x"));

    let result = layout(&root, Rect::new(0, 0, 20, 10));

    assert_eq!(result.get("root"), Some(&Rect::new(0, 0, 20, 3)));
    assert_eq!(result.get("x"), Some(&Rect::new(2, 1, 16, 1)));
}

#[test]
fn test_max_height_clamps() {
    let root = Element::col().id("root").max_height(2).children(vec![
        Element::text("1").id("one"),
        Element::text("2").id("two"),
        Element::text("3").id("three"),
    ]);

    let result = layout(&root, Rect::new(0, 0, 10, 10));

    assert_eq!(result.get("root").map(|r| r.height), Some(2));
    // Third child has no room left.
    assert_eq!(result.get("three").map(|r| r.height), Some(0));
}

// ============================================================================
// Out of flow
// ============================================================================

fn trigger_with_panel(panel: Element) -> Element {
    Element::col()
        .id("trigger")
        .width(Size::Fixed(10))
        .child(Element::text("trigger").id("label"))
        .child(panel)
}

#[test]
fn test_below_panel_hangs_under_parent() {
    let root = trigger_with_panel(
        Element::col()
            .id("panel")
            .position(Position::Below)
            .width(Size::Fixed(6))
            .left(0)
            .child(Element::text("xx")),
    );

    let result = layout(&root, Rect::new(0, 0, 40, 10));

    // Panel does not take flow space.
    assert_eq!(result.get("trigger"), Some(&Rect::new(0, 0, 10, 1)));
    assert_eq!(result.get("panel"), Some(&Rect::new(0, 1, 6, 1)));
}

#[test]
fn test_below_panel_right_aligned() {
    let root = trigger_with_panel(
        Element::col()
            .id("panel")
            .position(Position::Below)
            .width(Size::Fixed(6))
            .right(0)
            .child(Element::text("xx")),
    );

    let result = layout(&root, Rect::new(0, 0, 40, 10));

    assert_eq!(result.get("panel"), Some(&Rect::new(4, 1, 6, 1)));
}

#[test]
fn test_fill_panel_matches_parent_width() {
    let root = trigger_with_panel(
        Element::col()
            .id("panel")
            .position(Position::Below)
            .width(Size::Fill)
            .top(1)
            .child(Element::text("xx")),
    );

    let result = layout(&root, Rect::new(0, 0, 40, 10));

    assert_eq!(result.get("panel"), Some(&Rect::new(0, 2, 10, 1)));
}

#[test]
fn test_absolute_offsets_from_parent_origin() {
    let root = Element::col()
        .id("root")
        .width(Size::Fixed(20))
        .height(Size::Fixed(10))
        .child(
            Element::text("pop")
                .id("pop")
                .position(Position::Absolute)
                .left(3)
                .top(2),
        );

    let result = layout(&root, Rect::new(0, 0, 40, 20));

    assert_eq!(result.get("pop"), Some(&Rect::new(3, 2, 3, 1)));
}

// ============================================================================
// Scrolling
// ============================================================================

/// Bordered list showing three of its six rows.
fn scroll_list(scroll_y: u16) -> Element {
    Element::col()
        .id("list")
        .max_height(5)
        .overflow(Overflow::Auto)
        .scroll_y(scroll_y)
        .style(Style::new().border(Border::Single))
        .children(
            (0..6)
                .map(|i| Element::text(format!("item-{i}")).id(format!("item-{i}")))
                .collect(),
        )
}

#[test]
fn test_scroll_column_keeps_child_heights() {
    let result = layout(&scroll_list(0), Rect::new(0, 0, 10, 20));

    assert_eq!(result.get("list"), Some(&Rect::new(0, 0, 10, 5)));
    assert_eq!(result.get("item-0"), Some(&Rect::new(1, 1, 8, 1)));
    assert_eq!(result.get("item-5"), Some(&Rect::new(1, 6, 8, 1)));
    assert_eq!(result.clip("item-5"), Some(Rect::new(1, 1, 8, 3)));
    assert_eq!(result.clip("list"), None);

    let extent = result.scroll_extent("list").unwrap();
    assert_eq!(extent.viewport, Rect::new(1, 1, 8, 3));
    assert_eq!(extent.content_height, 6);
    assert_eq!(extent.offset, 0);
    assert_eq!(extent.max_offset(), 3);
    assert!(extent.overflows());
}

#[test]
fn test_scroll_offset_shifts_children() {
    let result = layout(&scroll_list(2), Rect::new(0, 0, 10, 20));

    assert_eq!(result.get("item-2"), Some(&Rect::new(1, 1, 8, 1)));
    assert_eq!(result.get("item-4"), Some(&Rect::new(1, 3, 8, 1)));
    // Shifted above row 0: cut to nothing.
    assert_eq!(result.get("item-0").map(|r| r.height), Some(0));
    assert!(!result.is_visible_at("item-1", 1, 0));
    assert!(result.is_visible_at("item-3", 1, 2));

    // Spans stay in content rows regardless of the offset.
    assert_eq!(result.content_span("item-0"), Some((0, 1)));
    assert_eq!(result.content_span("item-4"), Some((4, 1)));
}

#[test]
fn test_scroll_offset_is_clamped() {
    let result = layout(&scroll_list(100), Rect::new(0, 0, 10, 20));

    assert_eq!(result.scroll_extent("list").map(|e| e.offset), Some(3));
    assert_eq!(result.get("item-5"), Some(&Rect::new(1, 3, 8, 1)));
}

#[test]
fn test_short_content_does_not_scroll() {
    let root = Element::col()
        .id("list")
        .overflow(Overflow::Auto)
        .scroll_y(4)
        .child(Element::text("only").id("only"));
    let result = layout(&root, Rect::new(0, 0, 10, 20));

    let extent = result.scroll_extent("list").unwrap();
    assert_eq!(extent.offset, 0);
    assert!(!extent.overflows());
    assert_eq!(result.get("only"), Some(&Rect::new(0, 0, 10, 1)));
}

#[test]
fn test_bounds_is_available_area() {
    let root = Element::text("x").id("x").width(Size::Fixed(3));
    let result = layout(&root, Rect::new(0, 0, 120, 40));
    assert_eq!(result.bounds(), Rect::new(0, 0, 120, 40));
    assert_eq!(result.get("x").map(|r| r.width), Some(3));
}
