//! The staircase widget: six steps, hover highlighting, centered labels

use cstairs_core::levels::{LEVELS, LEVEL_COUNT};
use cstairs_core::{StairLayout, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::palette;

/// Steps need this many rows to carry their own border
const MIN_ROWS_FOR_BORDER: u16 = 3;

/// Widget drawing the six staircase steps
///
/// Geometry comes straight from [`StairLayout::step_rect`], the same
/// rectangles the hit-tester checks, mapped through the shared viewport.
pub struct Staircase<'a> {
    layout: &'a StairLayout,
    viewport: Viewport,
    hovered: Option<usize>,
}

impl<'a> Staircase<'a> {
    pub fn new(layout: &'a StairLayout, viewport: Viewport, hovered: Option<usize>) -> Self {
        Self {
            layout,
            viewport,
            hovered,
        }
    }

    fn render_step(&self, index: usize, step_area: Rect, buf: &mut Buffer) {
        let level = &LEVELS[index];
        let hovered = self.hovered == Some(index);
        let fill = Style::default().bg(palette::level_fill(level));

        let inner = if step_area.height >= MIN_ROWS_FOR_BORDER {
            let border_style = if hovered {
                Style::default().fg(palette::BORDER_HOVER)
            } else {
                Style::default().fg(palette::BORDER_IDLE)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if hovered {
                    BorderType::Thick
                } else {
                    BorderType::Plain
                })
                .border_style(border_style)
                .style(fill);
            let inner = block.inner(step_area);
            block.render(step_area, buf);
            inner
        } else {
            // Too short for a border: fill only, highlight via the label
            Block::default().style(fill).render(step_area, buf);
            step_area
        };

        if inner.is_empty() {
            return;
        }

        let mut label_style = Style::default()
            .fg(palette::level_text(level))
            .bg(palette::level_fill(level));
        if hovered && step_area.height < MIN_ROWS_FOR_BORDER {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        // Anchor the label to the row holding the step's logical center;
        // adjacent steps' cell rects can overlap by a row after rounding,
        // and the center row is the one a later-drawn neighbor won't cover.
        let rect = self.layout.step_rect(index);
        let center_row = self
            .viewport
            .row_at(rect.y + rect.height / 2.0)
            .clamp(inner.y, inner.y + inner.height - 1);

        let label = truncate_label(self.layout.label(index), inner.width as usize);
        let label_row = Rect::new(inner.x, center_row, inner.width, 1);
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(label_style)
            .render(label_row, buf);
    }
}

impl Widget for Staircase<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for index in 0..LEVEL_COUNT {
            let cells = self.viewport.to_cells(self.layout.step_rect(index));
            if let Some(step_area) = super::cell_rect_to_area(cells, area) {
                self.render_step(index, step_area, buf);
            }
        }
    }
}

/// Truncate a label to max display width, adding ellipsis if needed
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push('…');
    truncated
}
