#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    Fill,
    #[default]
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// How an element is placed relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Takes part in the parent's flow.
    #[default]
    Static,
    /// Out of flow, offsets measured from the parent's top-left corner.
    Absolute,
    /// Out of flow, offsets measured from the parent's bottom-left corner.
    /// Used for panels that hang under their trigger.
    Below,
}

/// What happens to children that do not fit a column's inner height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Children are squeezed into the remaining space.
    #[default]
    Visible,
    /// Children keep their height; the column scrolls by `scroll_y` and
    /// clips them to its inner rect, drawing a thumb on its right border.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
    Thick,
}

impl Border {
    /// Cells taken by the border on each side.
    pub const fn width(&self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
            reverse: false,
        }
    }
}
