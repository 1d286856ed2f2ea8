//! Update function - handles state transitions (TEA pattern)

use cstairs_core::levels::LEVEL_COUNT;
use tracing::{debug, trace};

use crate::message::{InputKey, Message};
use crate::state::{AppPhase, AppState};

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Process a message and update state
///
/// The only place application state is mutated. Returns an optional
/// follow-up message for the event loop to feed back in.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => handle_key(state, key),

        Message::PointerMoved { column, row } => {
            state.hovered = state.step_at(column, row);
            UpdateResult::none()
        }

        Message::PointerPressed { column, row } => {
            // Touch-start analog: a press selects the step under it, a
            // press outside the staircase clears the selection
            state.hovered = state.step_at(column, row);
            trace!(column, row, hovered = ?state.hovered, "pointer pressed");
            UpdateResult::none()
        }

        Message::Resized { columns, rows } => {
            state.resize(columns, rows);
            debug!(columns, rows, "terminal resized");
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),
    }
}

/// Keyboard handling: quit keys plus hover navigation for mouseless use
fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            UpdateResult::message(Message::Quit)
        }

        // Up climbs the staircase, Down steps off it below level 0
        InputKey::Up => {
            state.hovered = Some(match state.hovered {
                None => 0,
                Some(index) => (index + 1).min(LEVEL_COUNT - 1),
            });
            UpdateResult::none()
        }
        InputKey::Down => {
            state.hovered = match state.hovered {
                None | Some(0) => None,
                Some(index) => Some(index - 1),
            };
            UpdateResult::none()
        }
        InputKey::Home => {
            state.hovered = Some(0);
            UpdateResult::none()
        }
        InputKey::End => {
            state.hovered = Some(LEVEL_COUNT - 1);
            UpdateResult::none()
        }

        _ => UpdateResult::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state_80x24() -> AppState {
        AppState::new(Settings::default(), 80, 24)
    }

    /// Cell at the center of a step's on-screen rectangle
    fn center_cell_of(state: &AppState, index: usize) -> (u16, u16) {
        let cells = state.viewport.to_cells(state.layout.step_rect(index));
        assert!(!cells.is_empty());
        (cells.x + cells.width / 2, cells.y + cells.height / 2)
    }

    #[test]
    fn test_quit_message_sets_phase() {
        let mut state = state_80x24();
        update(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn test_quit_keys_produce_quit_message() {
        for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
            let mut state = state_80x24();
            let result = update(&mut state, Message::Key(key));
            assert_eq!(result.message, Some(Message::Quit));
        }
    }

    #[test]
    fn test_pointer_move_sets_hover() {
        let mut state = state_80x24();
        let (column, row) = center_cell_of(&state, 2);
        update(&mut state, Message::PointerMoved { column, row });
        assert_eq!(state.hovered, Some(2));
    }

    #[test]
    fn test_pointer_move_outside_clears_hover() {
        let mut state = state_80x24();
        state.hovered = Some(4);
        update(&mut state, Message::PointerMoved { column: 40, row: 0 });
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_pointer_press_behaves_like_move() {
        let mut state = state_80x24();
        let (column, row) = center_cell_of(&state, 5);
        update(&mut state, Message::PointerPressed { column, row });
        assert_eq!(state.hovered, Some(5));

        update(&mut state, Message::PointerPressed { column: 40, row: 0 });
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_resize_message_recomputes_layout() {
        let mut state = state_80x24();
        update(
            &mut state,
            Message::Resized {
                columns: 45,
                rows: 20,
            },
        );
        assert_eq!(state.layout.width(), 360.0);
    }

    #[test]
    fn test_keyboard_navigation_climbs_and_descends() {
        let mut state = state_80x24();

        update(&mut state, Message::Key(InputKey::Up));
        assert_eq!(state.hovered, Some(0));

        update(&mut state, Message::Key(InputKey::Up));
        assert_eq!(state.hovered, Some(1));

        update(&mut state, Message::Key(InputKey::Down));
        assert_eq!(state.hovered, Some(0));

        update(&mut state, Message::Key(InputKey::Down));
        assert_eq!(state.hovered, None);

        update(&mut state, Message::Key(InputKey::Down));
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_keyboard_navigation_saturates_at_top() {
        let mut state = state_80x24();
        state.hovered = Some(5);
        update(&mut state, Message::Key(InputKey::Up));
        assert_eq!(state.hovered, Some(5));
    }

    #[test]
    fn test_home_and_end_jump() {
        let mut state = state_80x24();
        update(&mut state, Message::Key(InputKey::End));
        assert_eq!(state.hovered, Some(5));
        update(&mut state, Message::Key(InputKey::Home));
        assert_eq!(state.hovered, Some(0));
    }

    #[test]
    fn test_tick_changes_nothing() {
        let mut state = state_80x24();
        state.hovered = Some(1);
        let result = update(&mut state, Message::Tick);
        assert!(result.message.is_none());
        assert_eq!(state.hovered, Some(1));
        assert_eq!(state.phase, AppPhase::Running);
    }
}
