//! Message types for the application (TEA pattern)

/// Terminal-agnostic key representation
///
/// The TUI layer converts backend key events into this; only keys the
/// application reacts to are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Esc,
    Up,
    Down,
    Home,
    End,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer moved to a cell (hover tracking)
    PointerMoved { column: u16, row: u16 },

    /// Pointer pressed at a cell (the touch-start analog)
    PointerPressed { column: u16, row: u16 },

    /// Terminal was resized
    Resized { columns: u16, rows: u16 },

    /// Tick event for periodic redraws
    Tick,

    /// Request to quit the application
    Quit,
}
