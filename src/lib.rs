//! Snake on a 20x20 grid, played in the terminal
//!
//! - [`game`]: engine, state, speed curve and the [`game::Session`] a front end drives
//! - [`input`]: key translation and the reversal guard
//! - [`storage`]: key-value persistence for the high score
//! - [`render`]: ratatui drawing
//! - [`modes`]: the interactive driver loop

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
pub mod storage;
