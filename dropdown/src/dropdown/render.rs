//! Element tree for the Dropdown widget.
//!
//! ```text
//! container (focusable, focus-within ring, aria-*)
//! ├── heading (clickable row)
//! │   ├── value (grows, truncated with …)
//! │   ├── loading indicator (while loading)
//! │   └── arrow
//! └── panel (only while expanded, hangs below, z-index 1)
//!     └── panel-content (border, scrolls past max height)
//!         └── caller content
//! ```

use dropdom::{Border, Edges, Element, Overflow, Position, Size, Style};

use super::state::{Direction, Dropdown};

/// What the trigger row shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Text(String),
    Element(Element),
}

impl Default for Label {
    fn default() -> Self {
        Label::Text(String::new())
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

impl From<Element> for Label {
    fn from(value: Element) -> Self {
        Label::Element(value)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl Dropdown {
    /// Build the element tree for the current state.
    pub fn element(&self) -> Element {
        let theme = &self.config.theme;
        let text_color = if self.disabled { theme.muted } else { theme.text };

        let base = Style::new()
            .border(Border::Rounded)
            .border_color(theme.border)
            .background(theme.background)
            .foreground(text_color);
        let focused = base.clone().border_color(theme.accent);

        let mut container = Element::col()
            .id(&self.id)
            .focusable(true)
            .focus_within(true)
            .style(base)
            .style_focused(focused)
            .data("aria-expanded", bool_attr(self.state.expanded))
            .data("aria-readonly", "true")
            .data("aria-disabled", bool_attr(self.disabled));
        if let Some(labelled_by) = &self.labelled_by {
            container = container.data("aria-labelledby", labelled_by);
        }

        container = container.child(self.heading());
        if self.state.expanded {
            container = container.child(self.panel());
        }
        container
    }

    fn heading(&self) -> Element {
        let value_id = format!("{}-value", self.id);
        let value = match &self.label {
            Label::Text(text) => Element::text(text).id(value_id).grow(1),
            Label::Element(element) => Element::row().id(value_id).grow(1).child(element.clone()),
        };

        let mut heading = Element::row()
            .id(self.heading_id())
            .clickable(true)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .gap(1)
            .child(value);

        if self.is_loading {
            heading = heading.child(
                self.loading
                    .render(&format!("{}-loading", self.id), self.tick),
            );
        }

        heading.child(self.arrow.render(self.state.expanded))
    }

    fn panel(&self) -> Element {
        let theme = &self.config.theme;
        let width = match self.panel_width {
            Some(width) if width > 0 => Size::Fixed(width),
            _ => Size::Fill,
        };

        let panel = Element::col()
            .id(self.panel_id())
            .position(Position::Below)
            .padding(Edges::top(self.config.panel_offset))
            .z_index(1)
            .width(width);
        let panel = match self.state.direction {
            Direction::LeftToRight => panel.left(0),
            Direction::RightToLeft => panel.right(0),
        };

        let content = Element::col()
            .id(self.panel_content_id())
            .width(Size::Fill)
            .max_height(self.config.max_panel_height.saturating_add(2))
            .overflow(Overflow::Auto)
            .scroll_y(self.scroll)
            .style(
                Style::new()
                    .border(Border::Single)
                    .border_color(theme.border)
                    .background(theme.background),
            )
            .child(self.content.render(&self.content_props));

        panel.child(content)
    }
}
