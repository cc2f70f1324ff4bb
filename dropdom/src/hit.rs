//! Pointer hit testing.
//!
//! The top-most element under the point wins (highest effective z-index,
//! then latest in tree order). Queries then walk up from that element the
//! way DOM events bubble, so a click on a label inside a clickable row
//! resolves to the row. Parts of elements scrolled out of view are not
//! hit.

use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Ancestor chain (root first) of the top-most element under the point.
pub fn hit_path(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Vec<String> {
    let mut best: Option<(i16, usize, Vec<String>)> = None;
    let mut order = 0;
    let mut path = Vec::new();
    visit(layout, root, x, y, 0, &mut order, &mut path, &mut best);
    best.map(|(_, _, path)| path).unwrap_or_default()
}

/// Nearest clickable element under the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    nearest(layout, root, x, y, |e| e.clickable)
}

/// Nearest focusable element under the point.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    nearest(layout, root, x, y, |e| e.focusable)
}

fn nearest(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
    accept: impl Fn(&Element) -> bool,
) -> Option<String> {
    let path = hit_path(layout, root, x, y);
    let mut element = root;
    let mut found = None;

    // Walk the chain root → leaf, remembering the deepest match.
    for (depth, id) in path.iter().enumerate() {
        if depth > 0 {
            element = element.child_elements().iter().find(|c| &c.id == id)?;
        }
        if accept(element) {
            found = Some(element.id.clone());
        }
    }

    found
}

#[allow(clippy::too_many_arguments)]
fn visit(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    parent_z: i16,
    order: &mut usize,
    path: &mut Vec<String>,
    best: &mut Option<(i16, usize, Vec<String>)>,
) {
    let z_index = element.z_index.max(parent_z);
    path.push(element.id.clone());
    *order += 1;

    let hit = layout.is_visible_at(&element.id, x, y);
    if hit {
        let beats = match best {
            Some((best_z, best_order, _)) => (z_index, *order) > (*best_z, *best_order),
            None => true,
        };
        if beats {
            *best = Some((z_index, *order, path.clone()));
        }
    }

    // Out-of-flow children may sit outside their parent's rect, so every
    // branch is visited.
    if let Content::Children(children) = &element.content {
        for child in children {
            visit(layout, child, x, y, z_index, order, path, best);
        }
    }

    path.pop();
}
