//! # cstairs-app - Application State and Message Handling
//!
//! The TEA model layer for control-stairs: [`AppState`] is the Model,
//! [`Message`] the event vocabulary, and [`update`] the single mutation
//! point. The crate knows nothing about terminals; the TUI layer translates
//! backend events into [`Message`]s and reads the state back each frame.

pub mod config;
pub mod handler;
pub mod message;
pub mod state;

pub use config::{load_settings, Settings};
pub use handler::{update, UpdateResult};
pub use message::{InputKey, Message};
pub use state::{AppPhase, AppState};
