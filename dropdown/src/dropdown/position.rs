//! Horizontal overflow avoidance for the panel.

use super::state::Direction;

/// Columns kept free at the right edge of the viewport.
pub const PANEL_MARGIN: u16 = 30;

/// Where the trigger sits when the panel opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    /// Left edge of the trigger, in columns.
    pub x: u16,
    pub viewport_width: u16,
}

impl Anchor {
    pub const fn new(x: u16, viewport_width: u16) -> Self {
        Self { x, viewport_width }
    }
}

/// Whether a panel of `panel_width` fits left-aligned at `anchor`.
///
/// Without a (non-zero) panel width the panel follows the trigger's width
/// and always fits.
pub fn has_space(anchor: Anchor, panel_width: Option<u16>, margin: u16) -> bool {
    match panel_width {
        None | Some(0) => true,
        Some(width) => {
            let right_edge = anchor.x as u32 + width as u32;
            right_edge < (anchor.viewport_width as u32).saturating_sub(margin as u32)
        }
    }
}

pub(crate) fn direction_for(anchor: Anchor, panel_width: Option<u16>, margin: u16) -> Direction {
    if has_space(anchor, panel_width, margin) {
        Direction::LeftToRight
    } else {
        Direction::RightToLeft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_width_always_fits() {
        assert!(has_space(Anchor::new(500, 10), None, PANEL_MARGIN));
        assert!(has_space(Anchor::new(500, 10), Some(0), PANEL_MARGIN));
    }

    #[test]
    fn fits_when_strictly_inside_margin() {
        // 60 + 200 = 260 < 300 - 30
        assert!(has_space(Anchor::new(60, 300), Some(200), PANEL_MARGIN));
        // 70 + 200 = 270, not < 270
        assert!(!has_space(Anchor::new(70, 300), Some(200), PANEL_MARGIN));
    }

    #[test]
    fn narrow_viewport_never_fits() {
        assert!(!has_space(Anchor::new(0, 20), Some(1), PANEL_MARGIN));
    }

    #[test]
    fn direction_follows_space() {
        assert_eq!(
            direction_for(Anchor::new(10, 300), Some(200), PANEL_MARGIN),
            Direction::LeftToRight
        );
        assert_eq!(
            direction_for(Anchor::new(80, 300), Some(200), PANEL_MARGIN),
            Direction::RightToLeft
        );
    }
}
