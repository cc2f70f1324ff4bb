//! Open/closed indicator shown at the end of the trigger row.

use dropdom::{Color, Element, Style};

/// Renders the indicator glyph for the current state.
pub trait ArrowRenderer {
    fn render(&self, expanded: bool) -> Element;
}

impl<F> ArrowRenderer for F
where
    F: Fn(bool) -> Element,
{
    fn render(&self, expanded: bool) -> Element {
        self(expanded)
    }
}

/// Default indicator: one glyph per state.
#[derive(Debug, Clone)]
pub struct Arrow {
    expanded: String,
    collapsed: String,
    color: Option<Color>,
}

impl Default for Arrow {
    fn default() -> Self {
        Self::new("▴", "▾")
    }
}

impl Arrow {
    pub fn new(expanded: impl Into<String>, collapsed: impl Into<String>) -> Self {
        Self {
            expanded: expanded.into(),
            collapsed: collapsed.into(),
            color: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn glyph(&self, expanded: bool) -> &str {
        if expanded { &self.expanded } else { &self.collapsed }
    }
}

impl ArrowRenderer for Arrow {
    fn render(&self, expanded: bool) -> Element {
        let mut element = Element::text(self.glyph(expanded));
        if let Some(color) = self.color {
            element = element.style(Style::new().foreground(color));
        }
        element
    }
}
