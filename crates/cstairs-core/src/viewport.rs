//! Terminal cell <-> logical pixel transform
//!
//! The layout engine works in logical pixel space; the terminal supplies a
//! cell grid. A [`Viewport`] derives the logical container width from the
//! column count (a fixed pixel width per column) and spreads the fixed
//! canvas height over the available rows.
//!
//! Both directions of the transform share the same two scale factors:
//! [`Viewport::to_cells`] places rectangles for the renderer and
//! [`Viewport::to_logical`] maps pointer cells back for the hit-tester, so
//! the two can never disagree about where a step is.

use crate::geometry::{CellRect, PointF, RectF};

/// Logical pixels represented by one terminal column
pub const DEFAULT_COLUMN_PX: f64 = 8.0;

/// Logical canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT_PX: f64 = 550.0;

/// Cell grid dimensions plus the logical scale factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    columns: u16,
    rows: u16,
    column_px: f64,
    height_px: f64,
}

impl Viewport {
    /// Build a viewport for a cell grid; scale factors are floored at 1px
    /// so degenerate configuration cannot divide by zero
    pub fn new(columns: u16, rows: u16, column_px: f64, height_px: f64) -> Self {
        Self {
            columns,
            rows,
            column_px: column_px.max(1.0),
            height_px: height_px.max(1.0),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Logical container width implied by the column count
    pub fn width_px(&self) -> f64 {
        f64::from(self.columns) * self.column_px
    }

    pub fn height_px(&self) -> f64 {
        self.height_px
    }

    fn row_px(&self) -> f64 {
        self.height_px / f64::from(self.rows.max(1))
    }

    /// Logical position of a cell's center
    pub fn to_logical(&self, column: u16, row: u16) -> PointF {
        PointF::new(
            (f64::from(column) + 0.5) * self.column_px,
            (f64::from(row) + 0.5) * self.row_px(),
        )
    }

    /// Row containing a logical y position, clamped to the grid
    pub fn row_at(&self, y: f64) -> u16 {
        if self.rows == 0 {
            return 0;
        }
        let row = (y / self.row_px()).floor() as i64;
        row.clamp(0, i64::from(self.rows) - 1) as u16
    }

    /// Cell rectangle covering a logical rectangle, clamped to the grid
    ///
    /// A rectangle with positive logical size that starts on-screen maps to
    /// at least one cell in each direction; anything off-screen or
    /// zero-sized maps to an empty rect.
    pub fn to_cells(&self, rect: RectF) -> CellRect {
        if self.columns == 0 || self.rows == 0 || rect.width <= 0.0 || rect.height <= 0.0 {
            return CellRect::EMPTY;
        }

        let columns = i64::from(self.columns);
        let rows = i64::from(self.rows);

        let x0 = ((rect.x / self.column_px).floor() as i64).clamp(0, columns);
        let mut x1 = ((rect.right() / self.column_px).ceil() as i64).clamp(0, columns);
        let y0 = ((rect.y / self.row_px()).floor() as i64).clamp(0, rows);
        let mut y1 = ((rect.bottom() / self.row_px()).ceil() as i64).clamp(0, rows);

        if x1 <= x0 {
            x1 = (x0 + 1).min(columns);
        }
        if y1 <= y0 {
            y1 = (y0 + 1).min(rows);
        }

        CellRect::new(
            x0 as u16,
            y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StairLayout;
    use crate::levels::LEVEL_COUNT;

    fn viewport_80x24() -> Viewport {
        Viewport::new(80, 24, DEFAULT_COLUMN_PX, DEFAULT_CANVAS_HEIGHT_PX)
    }

    #[test]
    fn test_width_follows_columns() {
        assert_eq!(viewport_80x24().width_px(), 640.0);
        assert_eq!(Viewport::new(45, 24, 8.0, 550.0).width_px(), 360.0);
        assert_eq!(Viewport::new(0, 24, 8.0, 550.0).width_px(), 0.0);
    }

    #[test]
    fn test_to_logical_is_cell_center() {
        let viewport = viewport_80x24();
        let point = viewport.to_logical(0, 0);
        assert_eq!(point.x, 4.0);
        assert!((point.y - 550.0 / 24.0 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_at_clamps_to_grid() {
        let viewport = viewport_80x24();
        assert_eq!(viewport.row_at(0.0), 0);
        assert_eq!(viewport.row_at(-5.0), 0);
        assert_eq!(viewport.row_at(549.9), 23);
        assert_eq!(viewport.row_at(1000.0), 23);
        // Row 12 spans logical y in [275, 297.9..)
        assert_eq!(viewport.row_at(280.0), 12);
    }

    #[test]
    fn test_to_cells_clamps_to_grid() {
        let viewport = viewport_80x24();
        let cells = viewport.to_cells(RectF::new(600.0, 500.0, 200.0, 200.0));
        assert!(cells.x + cells.width <= 80);
        assert!(cells.y + cells.height <= 24);
    }

    #[test]
    fn test_to_cells_empty_for_degenerate_input() {
        let viewport = viewport_80x24();
        assert!(viewport.to_cells(RectF::new(10.0, 10.0, 0.0, 5.0)).is_empty());
        assert!(Viewport::new(0, 0, 8.0, 550.0)
            .to_cells(RectF::new(0.0, 0.0, 100.0, 100.0))
            .is_empty());
    }

    #[test]
    fn test_visible_rect_gets_at_least_one_cell() {
        let viewport = viewport_80x24();
        let cells = viewport.to_cells(RectF::new(16.0, 23.0, 2.0, 2.0));
        assert!(cells.width >= 1);
        assert!(cells.height >= 1);
    }

    #[test]
    fn test_renderer_and_hit_tester_agree() {
        // A cell drawn inside a step must hit-test back to that step. Cells
        // on the rect boundary may round either way; interior cells of a
        // step tall/wide enough to have an interior must round-trip.
        let viewport = viewport_80x24();
        let layout = StairLayout::compute(viewport.width_px());
        for index in 0..LEVEL_COUNT {
            let cells = viewport.to_cells(layout.step_rect(index));
            assert!(!cells.is_empty());
            assert!(cells.width >= 3 && cells.height >= 3);
            let interior_column = cells.x + cells.width / 2;
            let interior_row = cells.y + cells.height / 2;
            let point = viewport.to_logical(interior_column, interior_row);
            assert_eq!(layout.hit_test(point), Some(index), "step {}", index);
        }
    }
}
