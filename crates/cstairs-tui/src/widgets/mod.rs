//! Widgets for the staircase diagram

pub mod description;
pub mod staircase;

pub use description::{DescriptionPanel, HOVER_PROMPT};
pub use staircase::Staircase;

use cstairs_core::CellRect;
use ratatui::layout::Rect;

/// On-screen area for a cell rectangle, clipped to the render area
pub(crate) fn cell_rect_to_area(cells: CellRect, area: Rect) -> Option<Rect> {
    if cells.is_empty() {
        return None;
    }
    let rect = Rect::new(cells.x, cells.y, cells.width, cells.height).intersection(area);
    if rect.is_empty() {
        None
    } else {
        Some(rect)
    }
}
