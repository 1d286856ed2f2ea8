//! Application state (Model in TEA pattern)

use cstairs_core::levels::{Level, LEVELS};
use cstairs_core::{PointF, StairLayout, Viewport};

use crate::config::Settings;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
///
/// Viewport and layout are recomputed together on resize, synchronously,
/// so a draw never sees geometry for a stale terminal size.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Loaded settings
    pub settings: Settings,

    /// Cell/pixel transform for the current terminal size
    pub viewport: Viewport,

    /// Staircase geometry for the current container width
    pub layout: StairLayout,

    /// Currently hovered step, if any
    pub hovered: Option<usize>,
}

impl AppState {
    pub fn new(settings: Settings, columns: u16, rows: u16) -> Self {
        let viewport = Viewport::new(
            columns,
            rows,
            settings.ui.column_px,
            settings.ui.canvas_height,
        );
        let layout = StairLayout::compute(viewport.width_px());
        Self {
            phase: AppPhase::Running,
            settings,
            viewport,
            layout,
            hovered: None,
        }
    }

    /// Recompute viewport and layout for a new terminal size
    ///
    /// Hover survives the resize unless `behavior.reset_hover_on_resize`
    /// says otherwise; the index stays valid either way since the step
    /// count is fixed.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.viewport = Viewport::new(
            columns,
            rows,
            self.settings.ui.column_px,
            self.settings.ui.canvas_height,
        );
        self.layout = StairLayout::compute(self.viewport.width_px());
        if self.settings.behavior.reset_hover_on_resize {
            self.hovered = None;
        }
    }

    /// Step under a pointer cell, if any
    pub fn step_at(&self, column: u16, row: u16) -> Option<usize> {
        let point: PointF = self.viewport.to_logical(column, row);
        self.layout.hit_test(point)
    }

    /// The hovered level's table entry
    pub fn hovered_level(&self) -> Option<&'static Level> {
        self.hovered.map(|index| &LEVELS[index])
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default(), 80, 24)
    }
}
