//! Box layout for the element tree.
//!
//! Columns stack flow children top to bottom, rows left to right with
//! `grow` sharing out spare width. `Absolute` and `Below` children are
//! taken out of flow and placed against the parent's outer rect.
//!
//! A column with `Overflow::Auto` lays its children out at full height,
//! shifts them up by its scroll offset and clips them to its inner rect.

mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Overflow, Position, Size};

/// Scroll geometry of an `Overflow::Auto` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollExtent {
    /// Inner rect the children are clipped to.
    pub viewport: Rect,
    pub content_height: u16,
    /// Applied offset, already clamped to `max_offset`.
    pub offset: u16,
}

impl ScrollExtent {
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    pub fn overflows(&self) -> bool {
        self.content_height > self.viewport.height
    }
}

/// Computed rects keyed by element ID.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    bounds: Rect,
    rects: HashMap<String, Rect>,
    /// Visible area of elements inside a scrolling column.
    clips: HashMap<String, Rect>,
    scroll: HashMap<String, ScrollExtent>,
    /// (top, height) of scrolled elements in content rows of their
    /// nearest scrolling ancestor.
    spans: HashMap<String, (u16, u16)>,
}

impl LayoutResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// The area the tree was laid out in.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    /// Visible part of an element clipped by a scrolling ancestor. `None`
    /// when nothing clips it.
    pub fn clip(&self, id: &str) -> Option<Rect> {
        self.clips.get(id).copied()
    }

    /// Whether the point is both inside the element and not clipped away.
    pub fn is_visible_at(&self, id: &str, x: u16, y: u16) -> bool {
        self.get(id).is_some_and(|r| r.contains(x, y))
            && self.clip(id).is_none_or(|c| c.contains(x, y))
    }

    pub fn scroll_extent(&self, id: &str) -> Option<ScrollExtent> {
        self.scroll.get(id).copied()
    }

    /// Position of `id` within the content of its nearest scrolling
    /// ancestor, as (top row, height).
    pub fn content_span(&self, id: &str) -> Option<(u16, u16)> {
        self.spans.get(id).copied()
    }

    pub fn insert(&mut self, id: String, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Take in the layout of a scrolled column's content, laid out
    /// unscrolled from the top of `viewport`.
    fn merge_scrolled(&mut self, content: LayoutResult, viewport: Rect, offset: u16) {
        let LayoutResult {
            rects,
            clips,
            scroll,
            mut spans,
            ..
        } = content;

        for (id, rect) in &rects {
            spans
                .entry(id.clone())
                .or_insert((rect.y.saturating_sub(viewport.y), rect.height));
        }
        self.spans.extend(spans);

        for (id, rect) in rects {
            let clip = clips
                .get(&id)
                .map(|c| c.scrolled_up(offset).intersection(viewport))
                .unwrap_or(viewport);
            self.clips.insert(id.clone(), clip);
            self.rects.insert(id, rect.scrolled_up(offset));
        }

        for (id, mut extent) in scroll {
            extent.viewport = extent.viewport.scrolled_up(offset).intersection(viewport);
            self.scroll.insert(id, extent);
        }
    }
}

/// Lay out `root` inside `available`.
pub fn layout(root: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    result.bounds = available;
    let (_, intrinsic_h) = measure(root);
    let height = match root.height {
        Size::Fixed(h) => h.min(available.height),
        Size::Fill => available.height,
        Size::Auto => clamp_height(root, intrinsic_h).min(available.height),
    };
    let width = match root.width {
        Size::Fixed(w) => w.min(available.width),
        _ => available.width,
    };
    place(
        root,
        Rect::new(available.x, available.y, width, height),
        &mut result,
    );
    result
}

/// Space taken by border and padding on each axis.
fn chrome(element: &Element) -> (u16, u16) {
    let border = element.style.border.width() * 2;
    (
        element.padding.horizontal_total() + border,
        element.padding.vertical_total() + border,
    )
}

fn clamp_height(element: &Element, height: u16) -> u16 {
    match element.max_height {
        Some(max) => height.min(max),
        None => height,
    }
}

/// Intrinsic (content-driven) outer size of an element.
fn measure(element: &Element) -> (u16, u16) {
    let (chrome_w, chrome_h) = chrome(element);

    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text) as u16, 1),
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children
                .iter()
                .filter(|c| c.in_flow())
                .map(outer_size)
                .collect();
            let gaps = element.gap * sizes.len().saturating_sub(1) as u16;
            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().map(|s| s.1).sum::<u16>() + gaps,
                ),
                Direction::Row => (
                    sizes.iter().map(|s| s.0).sum::<u16>() + gaps,
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };

    (content_w + chrome_w, content_h + chrome_h)
}

/// Intrinsic size with fixed sizes and `max_height` applied.
fn outer_size(element: &Element) -> (u16, u16) {
    let (w, h) = measure(element);
    let w = match element.width {
        Size::Fixed(fixed) => fixed,
        _ => w,
    };
    let h = match element.height {
        Size::Fixed(fixed) => fixed,
        _ => h,
    };
    (w, clamp_height(element, h))
}

fn place(element: &Element, rect: Rect, result: &mut LayoutResult) {
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let (chrome_w, chrome_h) = chrome(element);
    let border = element.style.border.width();
    let inner = Rect::new(
        rect.x.saturating_add(element.padding.left + border),
        rect.y.saturating_add(element.padding.top + border),
        rect.width.saturating_sub(chrome_w),
        rect.height.saturating_sub(chrome_h),
    );

    let flow: Vec<&Element> = children.iter().filter(|c| c.in_flow()).collect();
    match (element.direction, element.overflow) {
        (Direction::Column, Overflow::Auto) => place_scrolled(element, &flow, inner, result),
        (Direction::Column, Overflow::Visible) => place_column(element, &flow, inner, result),
        (Direction::Row, _) => place_row(element, &flow, inner, result),
    }

    for child in children.iter().filter(|c| !c.in_flow()) {
        place_out_of_flow(child, rect, result);
    }
}

fn place_column(parent: &Element, flow: &[&Element], inner: Rect, result: &mut LayoutResult) {
    let mut y = inner.y;
    let bottom = inner.bottom();

    for (i, child) in flow.iter().enumerate() {
        if i > 0 {
            y = y.saturating_add(parent.gap);
        }
        let remaining = bottom.saturating_sub(y);
        let (_, intrinsic_h) = outer_size(child);

        let width = match child.width {
            Size::Fixed(w) => w.min(inner.width),
            Size::Fill | Size::Auto => inner.width,
        };
        let height = match child.height {
            Size::Fill => clamp_height(child, remaining),
            _ => intrinsic_h,
        }
        .min(remaining);

        place(child, Rect::new(inner.x, y, width, height), result);
        y = y.saturating_add(height);
    }
}

fn place_scrolled(parent: &Element, flow: &[&Element], inner: Rect, result: &mut LayoutResult) {
    let gaps = parent.gap * flow.len().saturating_sub(1) as u16;
    let content_height = flow.iter().map(|c| outer_size(c).1).sum::<u16>() + gaps;
    let offset = parent
        .scroll_y
        .min(content_height.saturating_sub(inner.height));

    let mut content = LayoutResult::new();
    let full = Rect::new(inner.x, inner.y, inner.width, content_height.max(inner.height));
    place_column(parent, flow, full, &mut content);
    result.merge_scrolled(content, inner, offset);

    result.scroll.insert(
        parent.id.clone(),
        ScrollExtent {
            viewport: inner,
            content_height,
            offset,
        },
    );
}

fn place_row(parent: &Element, flow: &[&Element], inner: Rect, result: &mut LayoutResult) {
    let gaps = parent.gap * flow.len().saturating_sub(1) as u16;
    let widths: Vec<u16> = flow
        .iter()
        .map(|child| match child.width {
            Size::Fixed(w) => w,
            Size::Fill => 0,
            Size::Auto => outer_size(child).0,
        })
        .collect();

    let used: u16 = widths.iter().sum::<u16>() + gaps;
    let spare = inner.width.saturating_sub(used);
    let weights: Vec<u16> = flow
        .iter()
        .map(|child| match (child.width, child.grow) {
            (Size::Fill, 0) => 1,
            (_, grow) => grow,
        })
        .collect();
    let total_weight: u16 = weights.iter().sum();

    // Growers share the spare space; anything still too wide is shrunk from
    // the first grower, which holds the truncatable content.
    let mut overflow = used.saturating_sub(inner.width);
    let mut handed_out = 0;
    let mut x = inner.x;
    let mut growers_seen = 0;
    let grower_count = weights.iter().filter(|w| **w > 0).count();

    for (i, child) in flow.iter().enumerate() {
        if i > 0 {
            x = x.saturating_add(parent.gap);
        }
        let mut width = widths[i];
        if total_weight > 0 && weights[i] > 0 {
            growers_seen += 1;
            let share = if growers_seen == grower_count {
                spare - handed_out
            } else {
                spare * weights[i] / total_weight
            };
            handed_out += share;
            width += share;
            let cut = overflow.min(width);
            width -= cut;
            overflow -= cut;
        }
        let width = width.min(inner.right().saturating_sub(x));

        let height = match child.height {
            Size::Fixed(h) => h.min(inner.height),
            _ => inner.height,
        };

        place(child, Rect::new(x, inner.y, width, height), result);
        x = x.saturating_add(width);
    }
}

fn place_out_of_flow(child: &Element, parent: Rect, result: &mut LayoutResult) {
    let (intrinsic_w, intrinsic_h) = outer_size(child);
    let width = match child.width {
        Size::Fixed(w) => w,
        Size::Fill => parent.width,
        Size::Auto => intrinsic_w,
    };
    let height = match child.height {
        Size::Fixed(h) => h,
        _ => intrinsic_h,
    };

    let origin_y = match child.position {
        Position::Below => parent.bottom(),
        _ => parent.y,
    };
    let y = offset(origin_y, child.top.unwrap_or(0));
    let x = match (child.left, child.right) {
        (Some(left), _) => offset(parent.x, left),
        (None, Some(right)) => offset(parent.right(), -right).saturating_sub(width),
        (None, None) => parent.x,
    };

    place(child, Rect::new(x, y, width, height), result);
}

fn offset(origin: u16, delta: i16) -> u16 {
    (origin as i32 + delta as i32).clamp(0, u16::MAX as i32) as u16
}
