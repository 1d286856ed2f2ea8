//! Full-screen render tests
//!
//! Each test renders the complete view into a TestBackend buffer and
//! asserts on its text content.

use super::view;
use cstairs_app::{AppState, Settings};
use cstairs_core::levels::{LEVELS, TITLE};
use ratatui::{backend::TestBackend, Terminal};

fn render_screen(state: &AppState, columns: u16, rows: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(columns, rows)).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_unhovered_screen_has_title_labels_and_prompt() {
    let state = AppState::new(Settings::default(), 80, 24);
    let content = render_screen(&state, 80, 24);

    assert!(content.contains(TITLE));
    for level in &LEVELS {
        assert!(content.contains(level.name), "missing {:?}", level.name);
    }
    assert!(content.contains("Hover over a level to see details"));
}

#[test]
fn test_hovered_screen_swaps_prompt_for_description() {
    let mut state = AppState::new(Settings::default(), 80, 24);
    state.hovered = Some(5);
    let content = render_screen(&state, 80, 24);

    assert!(content.contains("Level 5 - Code Generation"));
    assert!(content.contains("computational"));
    assert!(!content.contains("Hover over a level to see details"));
}

#[test]
fn test_hovered_step_gets_thick_border() {
    let mut state = AppState::new(Settings::default(), 80, 24);
    state.hovered = Some(5);
    let content = render_screen(&state, 80, 24);
    assert!(content.contains('┏'));
}

#[test]
fn test_narrow_screen_abbreviates_labels() {
    let state = AppState::new(Settings::default(), 45, 20);
    let content = render_screen(&state, 45, 20);

    assert!(content.contains("L0 - No Control"));
    assert!(content.contains("L5 - Code Gen"));
    assert!(!content.contains("Level 0 - No Control"));
}

#[test]
fn test_render_is_stable_across_frames() {
    // The view must not accumulate state: two draws of the same state
    // produce identical screens.
    let mut state = AppState::new(Settings::default(), 80, 24);
    state.hovered = Some(2);
    let first = render_screen(&state, 80, 24);
    let second = render_screen(&state, 80, 24);
    assert_eq!(first, second);
}

#[test]
fn test_degenerate_sizes_do_not_panic() {
    for (columns, rows) in [(0, 0), (1, 1), (3, 2), (12, 4)] {
        let state = AppState::new(Settings::default(), columns, rows);
        let _ = render_screen(&state, columns, rows);
    }
}
