//! Event handling for the Dropdown widget.

use dropdom::{
    Element, Event, EventResult, Key, LayoutResult, Modifiers, Rect, contains_element,
};
use log::trace;

use super::position::Anchor;
use super::state::Dropdown;

/// What a handler can see of the host at dispatch time.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    /// Tree the event was routed against.
    pub root: &'a Element,
    /// Layout of `root` from the last render.
    pub layout: &'a LayoutResult,
    pub viewport: Rect,
}

impl Dropdown {
    /// Route a host event to this dropdown.
    ///
    /// Returns `Consumed` for the events whose default handling the dropdown
    /// suppresses (the keys it acts on, clicks on its trigger, and whatever
    /// the panel content consumes).
    pub fn handle_event(&mut self, event: &Event, cx: &EventContext<'_>) -> EventResult {
        match event {
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if self.owns(cx, target) => {
                if self.in_panel(cx, target) {
                    let result = self.content.on_event(event, &self.content_props);
                    if result.is_consumed() {
                        self.dirty = true;
                        return result;
                    }
                }
                self.on_key(*key, *modifiers, self.anchor(cx))
            }
            Event::Click {
                target: Some(target),
                ..
            } => {
                if *target == self.heading_id() {
                    self.toggle(self.anchor(cx));
                    EventResult::Consumed
                } else if self.in_panel(cx, target) {
                    let result = self.content.on_event(event, &self.content_props);
                    if result.is_consumed() {
                        self.dirty = true;
                    }
                    result
                } else {
                    EventResult::Ignored
                }
            }
            Event::Scroll {
                target: Some(target),
                delta_y,
                ..
            } if self.in_panel(cx, target) => self.scroll_by(cx, *delta_y),
            Event::MouseEnter { target } if *target == self.id => {
                self.on_hover(true, self.anchor(cx));
                EventResult::Ignored
            }
            Event::MouseLeave { target } if *target == self.id => {
                self.on_hover(false, self.anchor(cx));
                EventResult::Ignored
            }
            Event::Focus { target } if self.owns(cx, target) => {
                self.on_focus();
                self.focused_id = Some(target.clone());
                if self.in_panel(cx, target) {
                    self.reveal(cx, target);
                }
                EventResult::Ignored
            }
            // A focused panel item may already be gone when the panel closed
            // under it, so the remembered ID counts as owned too.
            Event::Blur { target, new_target }
                if self.owns(cx, target) || self.focused_id.as_deref() == Some(target) =>
            {
                let stays_inside = new_target
                    .as_deref()
                    .is_some_and(|next| self.owns(cx, next));
                if !stays_inside {
                    self.on_blur();
                }
                EventResult::Ignored
            }
            _ => {
                trace!("Dropdown {} ignoring {:?}", self.id, event);
                EventResult::Ignored
            }
        }
    }

    /// Escape/Up close and hand focus back to the container;
    /// Space/Enter/Down open. Everything else is ignored.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers, anchor: Anchor) -> EventResult {
        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Escape | Key::Up => {
                self.close();
                self.focus_requested = true;
                EventResult::Consumed
            }
            Key::Char(' ') | Key::Enter | Key::Down => {
                self.open(anchor);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Pointer entered (`true`) or left the container. No-op unless hover
    /// toggling is enabled.
    pub fn on_hover(&mut self, entered: bool, anchor: Anchor) {
        if !self.toggle_on_hover {
            return;
        }
        if entered {
            self.open(anchor);
        } else {
            self.close();
        }
    }

    pub fn on_focus(&mut self) {
        if !self.state.has_focus {
            self.set_focus(true);
        }
    }

    /// Focus left the container for an element outside it.
    pub fn on_blur(&mut self) {
        self.focused_id = None;
        self.set_focus(false);
        self.close();
    }

    /// Scroll the panel content so the element `id` is fully in view,
    /// preferring its top edge when it is taller than the panel.
    fn reveal(&mut self, cx: &EventContext<'_>, id: &str) {
        let Some(extent) = cx.layout.scroll_extent(&self.panel_content_id()) else {
            return;
        };
        let Some((top, height)) = cx.layout.content_span(id) else {
            return;
        };

        let view = extent.viewport.height;
        let offset = extent.offset;
        let next = if top < offset {
            top
        } else if top.saturating_add(height) > offset.saturating_add(view) {
            top.saturating_add(height).saturating_sub(view).min(top)
        } else {
            offset
        };
        self.set_scroll(next.min(extent.max_offset()));
    }

    /// Mouse wheel over the panel. Consumed only when the content moved.
    fn scroll_by(&mut self, cx: &EventContext<'_>, delta_y: i16) -> EventResult {
        let Some(extent) = cx.layout.scroll_extent(&self.panel_content_id()) else {
            return EventResult::Ignored;
        };
        let next = (extent.offset as i32 + delta_y as i32).clamp(0, extent.max_offset() as i32) as u16;
        if next == extent.offset {
            return EventResult::Ignored;
        }
        self.set_scroll(next);
        EventResult::Consumed
    }

    /// Anchor for the overflow check: the trigger's left edge.
    fn anchor(&self, cx: &EventContext<'_>) -> Anchor {
        let x = cx
            .layout
            .get(&self.heading_id())
            .or_else(|| cx.layout.get(&self.id))
            .map(|rect| rect.x)
            .unwrap_or(0);
        Anchor::new(x, cx.viewport.width)
    }

    fn owns(&self, cx: &EventContext<'_>, id: &str) -> bool {
        contains_element(cx.root, &self.id, id)
    }

    fn in_panel(&self, cx: &EventContext<'_>, id: &str) -> bool {
        contains_element(cx.root, &self.panel_id(), id)
    }
}
