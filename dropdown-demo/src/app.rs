//! Demo screen: a handful of dropdowns showing each option.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dropdom::{Edges, Element, Event, EventResult, FocusState, Key, Size, Style};
use dropdown::{ContentProps, Dropdown, DropdownConfig, EventContext};
use log::info;

use crate::picker::{Picker, Selection};

const FRUITS: &str = "apple,banana,cherry,kiwi,mango,pear,plum";
const COLOURS: &str = "red,green,blue,teal,amber,violet";
const STATUS_LINES: usize = 5;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: DropdownConfig,
    dropdowns: Vec<Dropdown>,
    fruits: Selection,
    colours: Selection,
    status: Rc<RefCell<VecDeque<String>>>,
}

impl App {
    pub fn new(config: DropdownConfig) -> Self {
        let status = Rc::new(RefCell::new(VecDeque::new()));
        let fruits = Selection::default();
        let colours = Selection::default();
        let theme = config.theme;

        let dropdowns = vec![
            Dropdown::new(Picker::new("fruits", Rc::clone(&fruits), theme))
                .id("fruits")
                .config(config.clone())
                .label("Select fruits")
                .labelled_by("fruits-label")
                .content_props(ContentProps::new().with("options", FRUITS))
                .on_menu_toggle(logger(&status, "fruits")),
            Dropdown::new(Picker::new("colours", Rc::clone(&colours), theme))
                .id("colours")
                .config(config.clone())
                .label("Select colours")
                .panel_width(40)
                .content_props(ContentProps::new().with("options", COLOURS))
                .on_menu_toggle(logger(&status, "colours")),
            Dropdown::new(|_: &ContentProps| Element::text("unreachable"))
                .id("disabled")
                .config(config.clone())
                .label("Disabled")
                .disabled(true)
                .on_menu_toggle(logger(&status, "disabled")),
            Dropdown::new(|_: &ContentProps| Element::text("Loaded!"))
                .id("loading")
                .config(config.clone())
                .label("Fetching")
                .loading(true)
                .on_menu_toggle(logger(&status, "loading")),
        ];

        Self {
            config,
            dropdowns,
            fruits,
            colours,
            status,
        }
    }

    /// Report initial state to every toggle callback.
    pub fn mount(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.mount();
        }
    }

    /// Whether anything changed since the last call, clearing the flags.
    pub fn take_dirty(&mut self) -> bool {
        let mut dirty = false;
        for dropdown in &mut self.dropdowns {
            dirty |= dropdown.is_dirty();
            dropdown.clear_dirty();
        }
        dirty
    }

    pub fn is_animating(&self) -> bool {
        self.dropdowns.iter().any(Dropdown::is_loading)
    }

    pub fn tick(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.tick();
        }
    }

    pub fn element(&self) -> Element {
        let theme = &self.config.theme;
        let [fruits, colours, disabled, loading] = &self.dropdowns[..] else {
            return Element::text("no dropdowns");
        };

        let title = Element::text("Dropdown demo")
            .style(Style::new().bold().foreground(theme.accent));
        let help = Element::text(
            "Tab: focus  Enter/Space/Down: open  Esc/Up: close  l: loading  h: hover mode  q: quit",
        )
        .style(Style::new().foreground(theme.muted));

        let left = Element::row()
            .width(Size::Fill)
            .gap(2)
            .child(
                Element::col()
                    .gap(1)
                    .child(Element::text("Fruits").id("fruits-label"))
                    .child(fruits.element().width(Size::Fixed(28))),
            )
            .child(
                Element::col()
                    .gap(1)
                    .child(Element::text("Disabled"))
                    .child(disabled.element().width(Size::Fixed(20))),
            )
            .child(
                Element::col()
                    .gap(1)
                    .child(Element::text("Loading"))
                    .child(loading.element().width(Size::Fixed(20))),
            );

        // Pinned to the right edge so its 40-column panel flips leftwards.
        let right = Element::row()
            .width(Size::Fill)
            .child(Element::box_().width(Size::Fill))
            .child(colours.element().width(Size::Fixed(24)));

        let mode = if colours.state().expanded() || fruits.state().expanded() {
            "open"
        } else {
            "closed"
        };
        let summary = Element::text(format!(
            "fruits: {}  colours: {}  panels: {}",
            join(&self.fruits),
            join(&self.colours),
            mode,
        ));

        let status = Element::col().children(
            self.status
                .borrow()
                .iter()
                .map(|line| Element::text(line.clone()).style(Style::new().dim()))
                .collect(),
        );

        Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::all(1))
            .gap(1)
            .style(
                Style::new()
                    .background(theme.background)
                    .foreground(theme.text),
            )
            .child(title)
            .child(help)
            .child(right)
            .child(left)
            .child(summary)
            .child(status)
    }

    /// Dispatch one targeted event. Focus requests raised by a dropdown are
    /// applied right away and the resulting Blur/Focus events dispatched.
    pub fn handle(&mut self, event: &Event, cx: &EventContext<'_>, focus: &mut FocusState) -> Flow {
        let mut result = EventResult::Ignored;
        let mut follow_up = Vec::new();

        for dropdown in &mut self.dropdowns {
            result = result.or(dropdown.handle_event(event, cx));
            if dropdown.take_focus_request() {
                follow_up.extend(focus.move_focus(dropdown.element_id()));
            }
        }
        for event in &follow_up {
            for dropdown in &mut self.dropdowns {
                dropdown.handle_event(event, cx);
            }
        }

        self.refresh_labels();

        if result.is_consumed() {
            return Flow::Continue;
        }
        match event {
            Event::Key {
                key: Key::Char('q'),
                ..
            } => Flow::Quit,
            Event::Key {
                key: Key::Char('c'),
                modifiers,
                ..
            } if modifiers.ctrl => Flow::Quit,
            Event::Key {
                key: Key::Char('l'),
                ..
            } => {
                self.toggle_loading();
                Flow::Continue
            }
            Event::Key {
                key: Key::Char('h'),
                ..
            } => {
                self.toggle_hover();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn toggle_loading(&mut self) {
        if let Some(dropdown) = self.find_mut("loading") {
            let loading = !dropdown.is_loading();
            dropdown.set_loading(loading);
            dropdown.set_label(if loading { "Fetching" } else { "Ready" });
            info!("Loading dropdown loading: {loading}");
        }
    }

    fn toggle_hover(&mut self) {
        let Some(fruits) = self.find_mut("fruits") else {
            return;
        };
        let enabled = !fruits.is_toggle_on_hover();
        for dropdown in &mut self.dropdowns {
            dropdown.set_toggle_on_hover(enabled);
        }
        self.push_status(format!("hover mode: {}", if enabled { "on" } else { "off" }));
    }

    fn refresh_labels(&mut self) {
        let labels = [
            ("fruits", join(&self.fruits), "Select fruits"),
            ("colours", join(&self.colours), "Select colours"),
        ];
        for (id, picked, placeholder) in labels {
            if let Some(dropdown) = self.find_mut(id) {
                let label = if picked.is_empty() {
                    placeholder.to_string()
                } else {
                    picked
                };
                dropdown.set_label(label);
            }
        }
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Dropdown> {
        self.dropdowns.iter_mut().find(|d| d.element_id() == id)
    }

    fn push_status(&self, line: String) {
        push_line(&self.status, line);
    }
}

fn join(selection: &Selection) -> String {
    selection
        .borrow()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_line(status: &RefCell<VecDeque<String>>, line: String) {
    let mut status = status.borrow_mut();
    status.push_back(line);
    while status.len() > STATUS_LINES {
        status.pop_front();
    }
}

/// Toggle callback writing to the status area and the log.
fn logger(status: &Rc<RefCell<VecDeque<String>>>, name: &'static str) -> impl FnMut(bool) + 'static {
    let status = Rc::clone(status);
    move |open| {
        info!("Dropdown {name} toggled: {open}");
        push_line(&status, format!("{name}: {}", if open { "opened" } else { "closed" }));
    }
}
