//! Dropdown widget - a trigger row that toggles a panel of caller content.
//!
//! # Example
//!
//! ```ignore
//! let mut fruits = Dropdown::new(|props: &ContentProps| {
//!     Element::text(props.get("hint").unwrap_or_default())
//! })
//! .id("fruits")
//! .label("Select fruits")
//! .content_props(ContentProps::new().with("hint", "Nothing here yet"))
//! .panel_width(30)
//! .on_menu_toggle(|open| log::info!("fruits open: {open}"));
//!
//! fruits.mount();
//!
//! // In the event loop:
//! let cx = EventContext { root: &root, layout, viewport };
//! fruits.handle_event(&event, &cx);
//! if fruits.take_focus_request() {
//!     pending.extend(focus.move_focus(fruits.element_id()));
//! }
//! ```

mod events;
mod position;
mod render;
mod state;

pub use events::EventContext;
pub use position::{Anchor, PANEL_MARGIN, has_space};
pub use render::Label;
pub use state::{Direction, Dropdown, DropdownState};
