//! Multi-select list used as panel content.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use dropdom::{Edges, Element, Event, EventResult, Key, Size, Style};
use dropdown::{ContentProps, ContentRenderer, Theme};
use log::debug;

/// Shared set of picked options.
pub type Selection = Rc<RefCell<BTreeSet<String>>>;

/// Checkbox list over the comma-separated `options` prop. Option element
/// IDs are `{prefix}-opt-{option}`.
pub struct Picker {
    prefix: String,
    selection: Selection,
    theme: Theme,
}

impl Picker {
    pub fn new(prefix: impl Into<String>, selection: Selection, theme: Theme) -> Self {
        Self {
            prefix: prefix.into(),
            selection,
            theme,
        }
    }

    fn option_id(&self, option: &str) -> String {
        format!("{}-opt-{}", self.prefix, option)
    }

    fn option_of<'a>(&self, target: &'a str) -> Option<&'a str> {
        target
            .strip_prefix(self.prefix.as_str())?
            .strip_prefix("-opt-")
    }

    fn toggle(&mut self, option: &str) {
        let mut selection = self.selection.borrow_mut();
        if !selection.remove(option) {
            selection.insert(option.to_string());
        }
        debug!("[picker] {} -> {:?}", option, *selection);
    }
}

impl ContentRenderer for Picker {
    fn render(&self, props: &ContentProps) -> Element {
        let selection = self.selection.borrow();
        let options = props.get_list("options");
        if options.is_empty() {
            return Element::text("No options").style(Style::new().foreground(self.theme.muted));
        }

        Element::col().width(Size::Fill).children(
            options
                .into_iter()
                .map(|option| {
                    let mark = if selection.contains(option) { "[x]" } else { "[ ]" };
                    Element::text(format!("{mark} {option}"))
                        .id(self.option_id(option))
                        .width(Size::Fill)
                        .padding(Edges::horizontal(1))
                        .focusable(true)
                        .clickable(true)
                        .style_focused(
                            Style::new()
                                .background(self.theme.accent)
                                .foreground(self.theme.background),
                        )
                })
                .collect(),
        )
    }

    fn on_event(&mut self, event: &Event, _props: &ContentProps) -> EventResult {
        let target = match event {
            Event::Click {
                target: Some(target),
                ..
            } => target,
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                ..
            } => target,
            _ => return EventResult::Ignored,
        };

        match self.option_of(target) {
            Some(option) => {
                self.toggle(option);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> (Picker, Selection) {
        let selection = Selection::default();
        (
            Picker::new("fruits", Rc::clone(&selection), Theme::default()),
            selection,
        )
    }

    #[test]
    fn test_click_toggles_option() {
        let (mut picker, selection) = picker();
        let click = Event::Click {
            target: Some("fruits-opt-pear".into()),
            x: 0,
            y: 0,
            button: dropdom::MouseButton::Left,
        };

        let props = ContentProps::new();
        assert_eq!(picker.on_event(&click, &props), EventResult::Consumed);
        assert!(selection.borrow().contains("pear"));
        picker.on_event(&click, &props);
        assert!(selection.borrow().is_empty());
    }

    #[test]
    fn test_foreign_targets_ignored() {
        let (mut picker, _) = picker();
        let click = Event::Click {
            target: Some("colours-opt-red".into()),
            x: 0,
            y: 0,
            button: dropdom::MouseButton::Left,
        };
        assert_eq!(
            picker.on_event(&click, &ContentProps::new()),
            EventResult::Ignored
        );
    }
}
