pub mod controller;
pub mod handler;

pub use controller::{handle_direction_input, resolve_direction};
pub use handler::{InputHandler, KeyAction};
