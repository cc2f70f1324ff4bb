//! Dropdown widget state.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use super::position::{Anchor, direction_for};
use super::render::Label;
use crate::arrow::{Arrow, ArrowRenderer};
use crate::config::DropdownConfig;
use crate::content::{ContentProps, ContentRenderer};
use crate::loading::Loading;

fn next_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("__dropdown_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Which edge of the trigger the panel is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Panel hangs from the trigger's left edge.
    #[default]
    LeftToRight,
    /// Panel hangs from the trigger's right edge, growing leftwards.
    RightToLeft,
}

/// Interaction state of one dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub(super) expanded: bool,
    pub(super) has_focus: bool,
    pub(super) direction: Direction,
}

impl DropdownState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// A toggleable panel hosting arbitrary content.
///
/// The panel is shown only while the dropdown is expanded. Disabled and
/// loading dropdowns are forced closed and cannot be opened.
pub struct Dropdown {
    pub(super) id: String,
    pub(super) state: DropdownState,
    pub(super) label: Label,
    pub(super) content: Box<dyn ContentRenderer>,
    pub(super) content_props: ContentProps,
    pub(super) is_loading: bool,
    pub(super) disabled: bool,
    pub(super) toggle_on_hover: bool,
    pub(super) labelled_by: Option<String>,
    pub(super) on_menu_toggle: Option<Box<dyn FnMut(bool)>>,
    pub(super) arrow: Box<dyn ArrowRenderer>,
    pub(super) panel_width: Option<u16>,
    pub(super) config: DropdownConfig,
    pub(super) loading: Loading,
    pub(super) tick: usize,
    /// Rows the panel content is scrolled down by.
    pub(super) scroll: u16,
    /// Owned element holding focus, remembered so its Blur is recognised
    /// even after the element left the tree.
    pub(super) focused_id: Option<String>,
    pub(super) focus_requested: bool,
    pub(super) dirty: bool,
    pub(super) mounted: bool,
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("label", &self.label)
            .field("content_props", &self.content_props)
            .field("is_loading", &self.is_loading)
            .field("disabled", &self.disabled)
            .field("toggle_on_hover", &self.toggle_on_hover)
            .field("panel_width", &self.panel_width)
            .finish_non_exhaustive()
    }
}

impl Dropdown {
    /// Create a collapsed dropdown showing `content` when opened.
    pub fn new(content: impl ContentRenderer + 'static) -> Self {
        let config = DropdownConfig::default();
        Self {
            id: next_id(),
            state: DropdownState::default(),
            label: Label::default(),
            content: Box::new(content),
            content_props: ContentProps::new(),
            is_loading: false,
            disabled: false,
            toggle_on_hover: false,
            labelled_by: None,
            on_menu_toggle: None,
            arrow: Box::new(default_arrow(&config)),
            panel_width: None,
            loading: default_loading(&config),
            config,
            tick: 0,
            scroll: 0,
            focused_id: None,
            focus_requested: false,
            dirty: true,
            mounted: false,
        }
    }

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------

    /// Set the element ID of the container. Other element IDs derive from it.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set what the trigger row shows.
    pub fn label(mut self, label: impl Into<Label>) -> Self {
        self.label = label.into();
        self
    }

    pub fn content_props(mut self, props: ContentProps) -> Self {
        self.content_props = props;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Open on pointer enter and close on pointer leave.
    pub fn toggle_on_hover(mut self, enabled: bool) -> Self {
        self.toggle_on_hover = enabled;
        self
    }

    /// ID of the element labelling this dropdown (`aria-labelledby`).
    pub fn labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    /// Called with the new value on every open/close, and once on mount.
    pub fn on_menu_toggle(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_menu_toggle = Some(Box::new(callback));
        self
    }

    /// Replace the default open/closed indicator.
    pub fn arrow_renderer(mut self, arrow: impl ArrowRenderer + 'static) -> Self {
        self.arrow = Box::new(arrow);
        self
    }

    /// Fix the panel width. Also enables flipping the panel to right-aligned
    /// when it would run past the viewport edge.
    pub fn panel_width(mut self, width: u16) -> Self {
        self.panel_width = Some(width);
        self
    }

    /// Apply a config. Resets the arrow to the configured glyphs, so call
    /// this before `arrow_renderer`.
    pub fn config(mut self, config: DropdownConfig) -> Self {
        self.arrow = Box::new(default_arrow(&config));
        self.loading = default_loading(&config);
        self.config = config;
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// ID of the focusable container element.
    pub fn element_id(&self) -> &str {
        &self.id
    }

    /// ID of the clickable trigger row.
    pub fn heading_id(&self) -> String {
        format!("{}-heading", self.id)
    }

    /// ID of the panel element (present only while expanded).
    pub fn panel_id(&self) -> String {
        format!("{}-panel", self.id)
    }

    /// ID of the bordered, scrolling box inside the panel.
    pub fn panel_content_id(&self) -> String {
        format!("{}-panel-content", self.id)
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    pub fn has_focus(&self) -> bool {
        self.state.has_focus
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_toggle_on_hover(&self) -> bool {
        self.toggle_on_hover
    }

    pub fn props(&self) -> &ContentProps {
        &self.content_props
    }

    /// Rows the panel content is scrolled down by.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Report the initial state to the toggle callback. Only the first call
    /// has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let expanded = self.state.expanded;
        if let Some(callback) = self.on_menu_toggle.as_mut() {
            callback(expanded);
        }
    }

    /// Click on the trigger: recompute the direction, then flip the state.
    /// Disabled or loading dropdowns end up closed.
    pub fn toggle(&mut self, anchor: Anchor) {
        self.update_direction(anchor);
        let next = if self.is_blocked() {
            false
        } else {
            !self.state.expanded
        };
        self.set_expanded(next);
    }

    /// Open the panel. Returns false when disabled or loading.
    pub fn open(&mut self, anchor: Anchor) -> bool {
        if self.is_blocked() {
            debug!(
                "Dropdown {} stays closed (disabled: {}, loading: {})",
                self.id, self.disabled, self.is_loading
            );
            return false;
        }
        self.update_direction(anchor);
        self.set_expanded(true);
        true
    }

    pub fn close(&mut self) {
        self.set_expanded(false);
    }

    /// Setting loading forces the panel closed.
    pub fn set_loading(&mut self, is_loading: bool) {
        if self.is_loading != is_loading {
            self.is_loading = is_loading;
            self.dirty = true;
        }
        if is_loading {
            self.close();
        }
    }

    /// Disabling forces the panel closed.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            self.disabled = disabled;
            self.dirty = true;
        }
        if disabled {
            self.close();
        }
    }

    pub fn set_toggle_on_hover(&mut self, enabled: bool) {
        self.toggle_on_hover = enabled;
    }

    pub fn set_label(&mut self, label: impl Into<Label>) {
        let label = label.into();
        if label != self.label {
            self.label = label;
            self.dirty = true;
        }
    }

    /// Mutable access to the content parameters; marks the widget dirty.
    pub fn props_mut(&mut self) -> &mut ContentProps {
        self.dirty = true;
        &mut self.content_props
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.is_loading {
            self.dirty = true;
        }
    }

    fn is_blocked(&self) -> bool {
        self.is_loading || self.disabled
    }

    fn update_direction(&mut self, anchor: Anchor) {
        let direction = direction_for(anchor, self.panel_width, self.config.margin);
        if direction != self.state.direction {
            debug!(
                "Dropdown {} direction {:?} -> {:?} (x: {}, viewport: {})",
                self.id, self.state.direction, direction, anchor.x, anchor.viewport_width
            );
            self.state.direction = direction;
            self.dirty = true;
        }
    }

    pub(super) fn set_expanded(&mut self, expanded: bool) {
        if self.state.expanded == expanded {
            return;
        }
        self.state.expanded = expanded;
        self.dirty = true;
        if !expanded {
            self.scroll = 0;
        }
        debug!("Dropdown {} expanded: {}", self.id, expanded);
        if let Some(callback) = self.on_menu_toggle.as_mut() {
            callback(expanded);
        }
    }

    pub(super) fn set_scroll(&mut self, scroll: u16) {
        if self.scroll != scroll {
            self.scroll = scroll;
            self.dirty = true;
        }
    }

    pub(super) fn set_focus(&mut self, has_focus: bool) {
        if self.state.has_focus != has_focus {
            self.state.has_focus = has_focus;
            self.dirty = true;
        }
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Check and clear a request to move focus back to the container.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

fn default_arrow(config: &DropdownConfig) -> Arrow {
    Arrow::new(&config.arrow_expanded, &config.arrow_collapsed)
}

fn default_loading(config: &DropdownConfig) -> Loading {
    Loading::new(config.loading_frames.clone()).color(config.theme.accent)
}
