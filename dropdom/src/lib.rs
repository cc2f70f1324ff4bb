pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{contains_element, find_element, Content, Element};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_path, hit_test, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect, ScrollExtent};
pub use render::render_to_buffer;
pub use terminal::Terminal;
pub use types::*;
