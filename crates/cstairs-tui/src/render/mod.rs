//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use cstairs_app::AppState;
use cstairs_core::levels::TITLE;
use cstairs_core::TextScale;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets::{DescriptionPanel, Staircase};

/// Render the complete UI (View function in TEA)
///
/// Pure over the state: reads geometry and hover, draws background, title,
/// staircase, and description area. Safe to re-invoke every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    // Canvas background
    let bg_block = Block::default().style(Style::default().bg(palette::CANVAS_BG));
    frame.render_widget(bg_block, area);

    render_title(frame, state, area);

    frame.render_widget(
        Staircase::new(&state.layout, state.viewport, state.hovered),
        area,
    );

    frame.render_widget(
        DescriptionPanel::new(&state.layout, state.viewport, state.hovered),
        area,
    );
}

/// Centered title above the staircase
///
/// Cells cannot scale glyphs, so the width-proportional title size maps to
/// emphasis instead: bold once the scale reaches its upper clamp.
fn render_title(frame: &mut Frame, state: &AppState, area: Rect) {
    let row = state.viewport.row_at(state.layout.title_anchor().y);
    let title_area = Rect::new(area.x, row, area.width, 1).intersection(area);
    if title_area.is_empty() {
        return;
    }

    let scale = TextScale::for_width(state.layout.width());
    let mut style = Style::default().fg(palette::TEXT_DARK);
    if scale.title >= TextScale::TITLE_MAX {
        style = style.add_modifier(Modifier::BOLD);
    }

    frame.render_widget(
        Paragraph::new(TITLE).alignment(Alignment::Center).style(style),
        title_area,
    );
}
