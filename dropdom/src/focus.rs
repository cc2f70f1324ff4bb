use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_path, hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks focus and hover, and turns raw crossterm events into targeted
/// [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    /// Ancestor chain (root first) under the pointer.
    hovered: Vec<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// IDs currently under the pointer, outermost first.
    pub fn hovered(&self) -> &[String] {
        &self.hovered
    }

    /// Programmatically move focus, returning the Blur/Focus events a
    /// handler needs to see. Empty when `id` already has focus.
    pub fn move_focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }
        self.transition(Some(id.to_string()))
    }

    /// Clear focus, returning the Blur event if something was focused.
    pub fn blur(&mut self) -> Vec<Event> {
        self.transition(None)
    }

    /// Drop focus and hover on elements no longer in the tree, e.g. an item
    /// inside a panel that just closed. Returns the Blur for a vanished
    /// focused element so its owner can react.
    pub fn sync(&mut self, root: &Element) -> Vec<Event> {
        self.hovered.retain(|id| find_element(root, id).is_some());

        let vanished = self
            .focused
            .as_deref()
            .is_some_and(|id| find_element(root, id).is_none());
        if !vanished {
            return Vec::new();
        }
        log::debug!("[focus] focused element {:?} vanished", self.focused);
        self.blur()
    }

    fn transition(&mut self, new: Option<String>) -> Vec<Event> {
        let mut events = Vec::new();
        let old = std::mem::replace(&mut self.focused, new.clone());
        if let Some(old) = old {
            events.push(Event::Blur {
                target: old,
                new_target: new.clone(),
            });
        }
        if let Some(new) = new {
            events.push(Event::Focus { target: new });
        }
        events
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let next = match self.position_in(&focusable) {
            Some(i) => focusable[(i + 1) % focusable.len()].clone(),
            None => focusable[0].clone(),
        };
        self.move_focus(&next)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let prev = match self.position_in(&focusable) {
            Some(0) | None => focusable[focusable.len() - 1].clone(),
            Some(i) => focusable[i - 1].clone(),
        };
        self.move_focus(&prev)
    }

    fn position_in(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_ref()?;
        focusable.iter().position(|id| id == current)
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    let Some(key) = Key::from_crossterm(key_event.code) else {
                        continue;
                    };
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => events.extend(self.focus_next(root)),
                        Key::BackTab => events.extend(self.focus_prev(root)),
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }
                CrosstermEvent::Mouse(mouse) => {
                    let (x, y) = (mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            // Focus moves before the click lands, as in a browser.
                            match hit_test_focusable(layout, root, x, y) {
                                Some(id) => events.extend(self.move_focus(&id)),
                                None => events.extend(self.blur()),
                            }
                            events.push(Event::Click {
                                target: hit_test(layout, root, x, y),
                                x,
                                y,
                                button: button.into(),
                            });
                        }
                        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                            let delta_y = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                            events.push(Event::Scroll {
                                target: hit_path(layout, root, x, y).pop(),
                                delta_y,
                                x,
                                y,
                            });
                        }
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                            events.extend(self.update_hover(hit_path(layout, root, x, y)));
                            events.push(Event::MouseMove { x, y });
                        }
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }
                _ => {}
            }
        }

        events
    }

    /// Diff the hovered chain: leaves innermost first, then enters
    /// outermost first.
    fn update_hover(&mut self, path: Vec<String>) -> Vec<Event> {
        let mut events = Vec::new();

        for id in self.hovered.iter().rev() {
            if !path.contains(id) {
                events.push(Event::MouseLeave { target: id.clone() });
            }
        }
        for id in &path {
            if !self.hovered.contains(id) {
                events.push(Event::MouseEnter { target: id.clone() });
            }
        }

        self.hovered = path;
        events
    }
}

/// Collect the IDs of all focusable elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_inner(root, &mut result);
    result
}

fn collect_focusable_inner(element: &Element, result: &mut Vec<String>) {
    if element.focusable {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_inner(child, result);
        }
    }
}
