//! Application state management for the terminal calculator.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{ArithmeticEngine, Calculator, Key, Keypad, Operator};
use std::collections::VecDeque;

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal mode - keys press buttons, arrows move the selection
    Normal,
    /// Help screen is displayed
    Help,
}

/// A completed calculation shown in the tape panel.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The collapsed expression, e.g. `2 + 3`.
    pub expression: String,
    /// The display text it produced, e.g. `5`.
    pub result: String,
}

/// Main application state containing the calculator and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage user interactions with the calculator.
///
/// # Examples
///
/// ```
/// use tcalc::application::App;
/// use tcalc::domain::Key;
///
/// let app = App::default();
/// assert_eq!(app.calculator.display, "0");
/// assert_eq!(app.selected_key(), Key::Equals);
/// ```
#[derive(Debug)]
pub struct App {
    /// The calculator state machine driven by every button press.
    pub calculator: Calculator,
    /// Current application mode.
    pub mode: AppMode,
    /// Row of the highlighted keypad button.
    pub selected_row: usize,
    /// Column of the highlighted keypad button.
    pub selected_col: usize,
    /// Completed calculations, oldest first.
    pub history: VecDeque<HistoryEntry>,
    /// Transient status line text, shown until the next key press.
    pub status_message: Option<String>,
    /// Scroll position in the help screen.
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            calculator: Calculator::default(),
            mode: AppMode::Normal,
            // Start on the equals button so Enter computes right away.
            selected_row: 4,
            selected_col: 2,
            history: VecDeque::new(),
            status_message: None,
            help_scroll: 0,
        }
    }
}

impl App {
    /// Forwards a keypad event to the calculator, recording a tape entry
    /// when an equals press actually resolves a pending operation.
    pub fn press_key(&mut self, key: Key) {
        if key == Key::Equals {
            if let (Some(lhs), Some(op)) =
                (self.calculator.pending_operand, self.calculator.pending_operator)
            {
                let rhs = self.calculator.display_value();
                self.calculator.press(key);
                self.record_history(lhs, op, rhs);
                return;
            }
        }
        self.calculator.press(key);
    }

    fn record_history(&mut self, lhs: f64, op: Operator, rhs: f64) {
        const MAX_HISTORY_SIZE: usize = 100;

        self.history.push_back(HistoryEntry {
            expression: format!(
                "{} {} {}",
                ArithmeticEngine::format_trimmed(lhs),
                op.symbol(),
                ArithmeticEngine::format_trimmed(rhs)
            ),
            result: self.calculator.display.clone(),
        });
        if self.history.len() > MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
    }

    /// Moves the keypad selection up one row.
    pub fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.clamp_selected_col();
        }
    }

    /// Moves the keypad selection down one row.
    pub fn move_selection_down(&mut self) {
        if self.selected_row < Keypad::rows().len() - 1 {
            self.selected_row += 1;
            self.clamp_selected_col();
        }
    }

    /// Moves the keypad selection left one column.
    pub fn move_selection_left(&mut self) {
        if self.selected_col > 0 {
            self.selected_col -= 1;
        }
    }

    /// Moves the keypad selection right one column.
    pub fn move_selection_right(&mut self) {
        if self.selected_col < Keypad::rows()[self.selected_row].len() - 1 {
            self.selected_col += 1;
        }
    }

    // The bottom row is one button short, so vertical moves re-clamp.
    fn clamp_selected_col(&mut self) {
        let row_len = Keypad::rows()[self.selected_row].len();
        if self.selected_col >= row_len {
            self.selected_col = row_len - 1;
        }
    }

    /// The keypad button under the selection cursor.
    pub fn selected_key(&self) -> Key {
        Keypad::rows()[self.selected_row][self.selected_col]
    }

    /// Presses the highlighted button.
    pub fn press_selected(&mut self) {
        self.press_key(self.selected_key());
    }

    /// The in-progress expression shown above the display, if an
    /// operator is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.calculator.pending_operand, self.calculator.pending_operator) {
            (Some(operand), Some(op)) => Some(format!(
                "{} {}",
                ArithmeticEngine::format_trimmed(operand),
                op.symbol()
            )),
            _ => None,
        }
    }

    /// Sets the status message based on a clipboard copy result.
    pub fn set_copy_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(text) => {
                self.status_message = Some(format!("Copied {} to clipboard", text));
            }
            Err(err) => {
                self.status_message = Some(format!("Copy failed: {}", err));
            }
        }
    }
}
