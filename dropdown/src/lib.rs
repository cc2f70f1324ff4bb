//! A dropdown widget: a focusable trigger row that opens a panel hosting
//! caller-supplied content.
//!
//! The widget owns its open/closed state and reacts to the targeted events
//! produced by [`dropdom::FocusState`]. Rendering produces a
//! [`dropdom::Element`] tree that the host lays out and paints.

pub mod arrow;
pub mod config;
pub mod content;
pub mod dropdown;
pub mod error;
pub mod loading;

pub use arrow::{Arrow, ArrowRenderer};
pub use config::{DropdownConfig, Theme};
pub use content::{ContentProps, ContentRenderer};
pub use dropdown::{
    Anchor, Direction, Dropdown, DropdownState, EventContext, Label, PANEL_MARGIN, has_space,
};
pub use error::ConfigError;
pub use loading::Loading;

pub use dropdom;
