//! # cstairs-tui - Terminal UI
//!
//! View layer for control-stairs: terminal lifecycle, crossterm event
//! translation, the theme palette, the staircase and description widgets,
//! and the synchronous draw/poll/update loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
