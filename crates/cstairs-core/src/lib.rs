//! # cstairs-core - Domain Model and Layout Engine
//!
//! Foundation crate for control-stairs. Provides the level table, the
//! responsive staircase layout engine, the cell/pixel viewport transform,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** and knows nothing about
//! terminals or rendering backends. Everything in it is a total function
//! over its input domain: degenerate container sizes produce clamped,
//! non-negative geometry rather than errors.
//!
//! ## Public API
//!
//! ### Levels (`levels`)
//! - [`Level`] - One autonomy level: label, abbreviated label, fill color,
//!   label tone, and description text
//! - [`LEVELS`] - The six fixed levels, bottom (no control) to top
//! - [`WIDGET_DESCRIPTION`] - Static description of the whole diagram for
//!   assistive output
//!
//! ### Layout (`layout`)
//! - [`StairLayout`] - Per-width geometry: margins, breakpoints, step
//!   rectangles, description box, and hit-testing
//! - [`Breakpoint`] - Discrete width tier selecting step sizes
//! - [`TextScale`] - Width-proportional, clamped text sizes
//!
//! ### Viewport (`viewport`)
//! - [`Viewport`] - Maps terminal cells to logical pixels and back; the one
//!   transform shared by the renderer and the hit-tester
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] / [`ResultExt`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cstairs_core::prelude::*;
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod levels;
pub mod logging;
pub mod viewport;

/// Prelude for common imports used throughout all control-stairs crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use geometry::{CellRect, PointF, RectF};
pub use layout::{Breakpoint, StairLayout, TextScale};
pub use levels::{Level, TextTone, LEVELS, LEVEL_COUNT, TITLE, WIDGET_DESCRIPTION};
pub use viewport::Viewport;
