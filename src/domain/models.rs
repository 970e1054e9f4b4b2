//! Core calculator state machine.
//!
//! This module contains the keypad event alphabet and the four-function
//! calculator state machine that decides how consecutive button presses
//! combine into a running calculation.

use super::services::ArithmeticEngine;

/// A binary arithmetic operator on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Returns the symbol shown on the keypad and in the tape.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Maps a typed character to an operator.
    ///
    /// Accepts both the plain keyboard characters and the typographic
    /// symbols shown on the keypad (`x`/`*`/`×` multiply, `/`/`÷` divide).
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A single keypad action.
///
/// This is the complete input alphabet of the calculator: every button on
/// the keypad produces exactly one of these events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit button, 0 through 9.
    Digit(u8),
    /// The decimal point button.
    Dot,
    /// One of the four arithmetic operator buttons.
    Operator(Operator),
    /// The equals button.
    Equals,
    /// The percent button.
    Percent,
    /// The backspace button.
    Backspace,
    /// The clear-all (AC) button.
    Clear,
}

/// The four-function calculator state machine.
///
/// Holds the display string together with the pending operand/operator pair
/// and the new-entry flag, and updates them in place as keys are pressed.
/// Operator presses chain left to right with no precedence, matching a
/// typical basic calculator. Arithmetic failures never surface as errors:
/// the display shows the literal `Error` instead, cleared by the next
/// clear, digit, or dot press.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{Calculator, Key, Operator};
///
/// let mut calc = Calculator::default();
/// calc.press(Key::Digit(2));
/// calc.press(Key::Operator(Operator::Add));
/// calc.press(Key::Digit(3));
/// calc.press(Key::Equals);
/// assert_eq!(calc.display, "5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// What is currently shown; also the number being typed.
    pub display: String,
    /// Left-hand operand captured when an operator was chosen.
    pub pending_operand: Option<f64>,
    /// Operator awaiting its right-hand operand.
    pub pending_operator: Option<Operator>,
    /// True when the next digit starts a fresh number instead of appending.
    pub new_entry: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            new_entry: true,
        }
    }
}

impl Calculator {
    /// Applies a single keypad event to the machine.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Dot => self.input_dot(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.calculate(),
            Key::Percent => self.percent(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear_all(),
        }
    }

    /// Appends a digit to the display, or starts a fresh number after a
    /// clear, an operator press, or a computed result. A leading zero is
    /// replaced rather than extended, so `"00"` can never appear.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            return;
        }
        let c = char::from(b'0' + digit);
        if self.new_entry || self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
        self.new_entry = false;
    }

    /// Inserts the decimal point. Starting a fresh entry yields `"0."`;
    /// a display that already contains a point is left alone.
    pub fn input_dot(&mut self) {
        if self.new_entry {
            self.display = "0.".to_string();
            self.new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Drops the last typed character, collapsing to `"0"` rather than an
    /// empty display. Does nothing on a fresh entry, so computed results
    /// cannot be edited character by character.
    pub fn backspace(&mut self) {
        if self.new_entry {
            return;
        }
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    /// Resets every field to its initial value.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Selects the operator for the next computation.
    ///
    /// If an operator is already pending and a right-hand value has been
    /// typed, the pending computation is collapsed first so that presses
    /// chain left to right (`2 + 3 × 4 =` gives `20`, not `14`). The
    /// display value is then captured as the left-hand operand. Pressing a
    /// second operator without typing digits just retargets the pending
    /// operator.
    pub fn set_operator(&mut self, op: Operator) {
        if self.pending_operator.is_some() && !self.new_entry {
            self.calculate();
        }
        self.pending_operand = Some(self.display_value());
        self.pending_operator = Some(op);
        self.new_entry = true;
    }

    /// Resolves the pending computation into the display.
    ///
    /// The display provides the right-hand value; with no pending operand
    /// it serves as both sides, so `=` after an operator press reuses the
    /// captured value (`7 + =` gives `14`), and `=` with nothing pending
    /// leaves the display numerically unchanged. A non-finite result shows
    /// as `Error`. Both pending fields are cleared.
    pub fn calculate(&mut self) {
        let rhs = self.display_value();
        let lhs = self.pending_operand.unwrap_or(rhs);
        let result = match self.pending_operator {
            Some(op) => ArithmeticEngine::evaluate(op, lhs, rhs),
            None => rhs,
        };
        self.display = ArithmeticEngine::format_result(result);
        self.pending_operand = None;
        self.pending_operator = None;
        self.new_entry = true;
    }

    /// Converts the display to a percentage.
    ///
    /// With a pending operation this yields `operand × display / 100`
    /// (so `50 + 10 % =` gives `55`); otherwise plain `display / 100`.
    /// The pending operand and operator are kept. An unparseable display
    /// (the `Error` state) leaves the machine untouched.
    pub fn percent(&mut self) {
        let value = match self.display.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return,
        };
        let scaled = match (self.pending_operand, self.pending_operator) {
            (Some(operand), Some(_)) => operand * value / 100.0,
            _ => value / 100.0,
        };
        self.display = ArithmeticEngine::format_trimmed(scaled);
        self.new_entry = true;
    }

    /// Numeric value of the display, treating anything unparseable
    /// (the `Error` state) as zero.
    pub fn display_value(&self) -> f64 {
        self.display.parse::<f64>().unwrap_or(0.0)
    }
}
