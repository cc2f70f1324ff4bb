use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Direction, Edges, Overflow, Position, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub overflow: Overflow,
    /// Rows scrolled past when `overflow` is `Auto`. Layout clamps it to the
    /// content height.
    pub scroll_y: u16,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub right: Option<i16>,
    pub z_index: i16,

    // Flow
    pub direction: Direction,
    pub gap: u16,
    pub grow: u16,

    // Visual
    pub style: Style,
    /// Replaces `style` while this element (or, with `focus_within`, a
    /// descendant) holds focus.
    pub style_focused: Option<Style>,
    pub focus_within: bool,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,

    /// Free-form attributes, e.g. `aria-expanded`.
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            max_height: None,
            padding: Edges::default(),
            overflow: Overflow::Visible,
            scroll_y: 0,
            position: Position::Static,
            top: None,
            left: None,
            right: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            grow: 0,
            style: Style::default(),
            style_focused: None,
            focus_within: false,
            focusable: false,
            clickable: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Builder methods

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn max_height(mut self, value: u16) -> Self {
        self.max_height = Some(value);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn scroll_y(mut self, value: u16) -> Self {
        self.scroll_y = value;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, value: i16) -> Self {
        self.top = Some(value);
        self
    }

    pub fn left(mut self, value: i16) -> Self {
        self.left = Some(value);
        self
    }

    pub fn right(mut self, value: i16) -> Self {
        self.right = Some(value);
        self
    }

    pub fn z_index(mut self, value: i16) -> Self {
        self.z_index = value;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn grow(mut self, grow: u16) -> Self {
        self.grow = grow;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn focus_within(mut self, value: bool) -> Self {
        self.focus_within = value;
        self
    }

    pub fn focusable(mut self, value: bool) -> Self {
        self.focusable = value;
        self
    }

    pub fn clickable(mut self, value: bool) -> Self {
        self.clickable = value;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Accessors

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Whether the element takes part in its parent's flow layout.
    pub fn in_flow(&self) -> bool {
        self.position == Position::Static
    }
}
