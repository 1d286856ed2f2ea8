//! Description panel below the staircase
//!
//! Shows the hovered level's description wrapped in the fixed text box, or
//! a centered prompt when nothing is hovered.

use cstairs_core::levels::LEVELS;
use cstairs_core::{StairLayout, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::palette;

/// Default text when nothing is hovered
pub const HOVER_PROMPT: &str = "Hover over a level to see details";

pub struct DescriptionPanel<'a> {
    layout: &'a StairLayout,
    viewport: Viewport,
    hovered: Option<usize>,
}

impl<'a> DescriptionPanel<'a> {
    pub fn new(layout: &'a StairLayout, viewport: Viewport, hovered: Option<usize>) -> Self {
        Self {
            layout,
            viewport,
            hovered,
        }
    }

    fn render_description(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let cells = self.viewport.to_cells(self.layout.description_box());
        if let Some(text_area) = super::cell_rect_to_area(cells, area) {
            Paragraph::new(LEVELS[index].description)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(palette::TEXT_DARK))
                .render(text_area, buf);
        }
    }

    fn render_prompt(&self, area: Rect, buf: &mut Buffer) {
        let row = self.viewport.row_at(self.layout.prompt_anchor().y);
        let prompt_area = Rect::new(area.x, row, area.width, 1).intersection(area);
        if prompt_area.is_empty() {
            return;
        }
        Paragraph::new(HOVER_PROMPT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::TEXT_DARK))
            .render(prompt_area, buf);
    }
}

impl Widget for DescriptionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        match self.hovered {
            Some(index) => self.render_description(index, area, buf),
            None => self.render_prompt(area, buf),
        }
    }
}
