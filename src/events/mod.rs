pub mod click;
pub mod keyboard;
pub mod pointer;

pub use click::{wire_close_button, wire_ring_clicks};
pub use keyboard::wire_escape_close;
pub use pointer::wire_drag_handlers;
