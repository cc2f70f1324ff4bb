//! Paints a laid-out element tree into a [`Buffer`].
//!
//! Elements are painted in ascending effective z-index (a child inherits its
//! parent's z-index unless it sets a higher one), tree order breaking ties.
//! Elements inside a scrolling column are clipped to its viewport.

use crate::buffer::{Buffer, Cell};
use crate::element::{find_element, Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Overflow, Rgb, Style};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

struct RenderItem<'a> {
    element: &'a Element,
    style: &'a Style,
    z_index: i16,
    tree_order: usize,
    inherited_fg: Rgb,
}

/// Render `root` using `layout`. `focused` selects `style_focused` on the
/// focused element and on `focus_within` ancestors of it.
pub fn render_to_buffer(
    root: &Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    focused: Option<&str>,
) {
    let mut items = Vec::new();
    collect(root, focused, 0, DEFAULT_FG, &mut items);

    // Stable sort keeps tree order within a z level.
    items.sort_by_key(|item| (item.z_index, item.tree_order));
    log::trace!("[render] painting {} elements", items.len());

    let screen = Rect::from_size(buf.width(), buf.height());
    for item in &items {
        let Some(rect) = layout.get(&item.element.id) else {
            continue;
        };
        let clip = layout.clip(&item.element.id).unwrap_or(screen);
        paint(item, *rect, clip, layout, buf);
    }
}

fn collect<'a>(
    element: &'a Element,
    focused: Option<&str>,
    parent_z: i16,
    parent_fg: Rgb,
    items: &mut Vec<RenderItem<'a>>,
) {
    let style = effective_style(element, focused);
    let z_index = element.z_index.max(parent_z);
    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(parent_fg);

    items.push(RenderItem {
        element,
        style,
        z_index,
        tree_order: items.len(),
        inherited_fg: fg,
    });

    if let Content::Children(children) = &element.content {
        for child in children {
            collect(child, focused, z_index, fg, items);
        }
    }
}

fn effective_style<'a>(element: &'a Element, focused: Option<&str>) -> &'a Style {
    let Some(focused_style) = &element.style_focused else {
        return &element.style;
    };
    let Some(focused) = focused else {
        return &element.style;
    };

    let has_focus = element.id == focused
        || (element.focus_within && find_element(element, focused).is_some());
    if has_focus {
        focused_style
    } else {
        &element.style
    }
}

fn paint(item: &RenderItem<'_>, rect: Rect, clip: Rect, layout: &LayoutResult, buf: &mut Buffer) {
    if let Some(bg) = item.style.background {
        fill_rect(buf, rect.intersection(clip), bg.to_rgb());
    }

    render_border(item, rect, clip, buf);

    if item.element.overflow == Overflow::Auto {
        render_scroll_thumb(item, rect, clip, layout, buf);
    }

    if let Content::Text(text) = &item.element.content {
        render_text(text, item, rect, clip, buf);
    }
}

fn clipped<'b>(buf: &'b mut Buffer, clip: Rect, x: u16, y: u16) -> Option<&'b mut Cell> {
    if clip.contains(x, y) {
        buf.get_mut(x, y)
    } else {
        None
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                *cell = Cell {
                    bg,
                    ..Cell::default()
                };
            }
        }
    }
}

fn render_text(text: &str, item: &RenderItem<'_>, rect: Rect, clip: Rect, buf: &mut Buffer) {
    let element = item.element;
    let border = item.style.border.width();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let explicit_bg = item.style.background.map(|c| c.to_rgb());
    let line = truncate_to_width(text, inner.width as usize);
    let y = inner.y;
    let mut x = inner.x;

    for ch in line.chars() {
        let width = char_width(ch) as u16;
        if x.saturating_add(width) > inner.right() {
            break;
        }

        // Text keeps whatever background was painted underneath it.
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

        if let Some(cell) = clipped(buf, clip, x, y) {
            *cell = Cell {
                char: ch,
                fg: item.inherited_fg,
                bg,
                style: item.style.text_style,
                wide_continuation: false,
            };
        }
        for extra in 1..width {
            if let Some(cell) = clipped(buf, clip, x + extra, y) {
                cell.wide_continuation = true;
            }
        }
        x = x.saturating_add(width.max(1));
    }
}

fn render_border(item: &RenderItem<'_>, rect: Rect, clip: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match item.style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        Border::Thick => ('┏', '┓', '┗', '┛', '━', '┃'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = item
        .style
        .border_color
        .map(|c| c.to_rgb())
        .unwrap_or(item.inherited_fg);

    set_char(buf, clip, rect.x, rect.y, tl, fg);
    set_char(buf, clip, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, clip, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, clip, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, clip, x, rect.y, h, fg);
        set_char(buf, clip, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, clip, rect.x, y, v, fg);
        set_char(buf, clip, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, clip: Rect, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = clipped(buf, clip, x, y) {
        cell.char = ch;
        cell.fg = fg;
        cell.wide_continuation = false;
    }
}

/// Thumb drawn over the right border of a scrolling column whose content
/// does not fit.
fn render_scroll_thumb(
    item: &RenderItem<'_>,
    rect: Rect,
    clip: Rect,
    layout: &LayoutResult,
    buf: &mut Buffer,
) {
    if item.style.border == Border::None || rect.width < 2 {
        return;
    }
    let Some(extent) = layout.scroll_extent(&item.element.id) else {
        return;
    };
    if !extent.overflows() {
        return;
    }

    let track = extent.viewport.height as u32;
    let content = extent.content_height as u32;
    let thumb = (track * track / content).clamp(1, track);
    let max_offset = extent.max_offset() as u32;
    let position = if max_offset > 0 {
        extent.offset as u32 * (track - thumb) / max_offset
    } else {
        0
    };

    let x = rect.right() - 1;
    let top = extent.viewport.y as u32 + position;
    for y in top..top + thumb {
        set_char(buf, clip, x, y as u16, '┃', item.inherited_fg);
    }
}
