//! Keypad layout shared by the renderer and the selection logic.

use super::models::{Key, Operator};

/// Visual grouping of a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digit and decimal point buttons.
    Plain,
    /// Clear, backspace, and percent.
    Action,
    /// Operators and equals.
    Filled,
}

/// The fixed five-row button grid.
pub struct Keypad;

impl Keypad {
    /// Returns the grid rows, top to bottom. The last row has three
    /// buttons because zero spans a double-width cell.
    pub fn rows() -> [&'static [Key]; 5] {
        [
            &[Key::Clear, Key::Backspace, Key::Percent, Key::Operator(Operator::Divide)],
            &[Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Operator(Operator::Multiply)],
            &[Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Operator(Operator::Subtract)],
            &[Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Operator(Operator::Add)],
            &[Key::Digit(0), Key::Dot, Key::Equals],
        ]
    }

    /// Classifies a key for styling.
    pub fn kind(key: Key) -> ButtonKind {
        match key {
            Key::Operator(_) | Key::Equals => ButtonKind::Filled,
            Key::Clear | Key::Backspace | Key::Percent => ButtonKind::Action,
            Key::Digit(_) | Key::Dot => ButtonKind::Plain,
        }
    }
}

impl Key {
    /// Button caption.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(digit) => digit.to_string(),
            Key::Dot => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Percent => "%".to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Clear => "AC".to_string(),
        }
    }

    /// Maps a typed character to the key it triggers, if any.
    pub fn from_char(c: char) -> Option<Key> {
        if let Some(digit) = c.to_digit(10) {
            return Some(Key::Digit(digit as u8));
        }
        match c {
            '.' => Some(Key::Dot),
            '=' => Some(Key::Equals),
            '%' => Some(Key::Percent),
            'c' | 'C' => Some(Key::Clear),
            _ => Operator::from_char(c).map(Key::Operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let rows = Keypad::rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[1].len(), 4);
        assert_eq!(rows[2].len(), 4);
        assert_eq!(rows[3].len(), 4);
        assert_eq!(rows[4].len(), 3);
    }

    #[test]
    fn test_top_row_holds_actions() {
        let rows = Keypad::rows();
        assert_eq!(
            rows[0],
            &[Key::Clear, Key::Backspace, Key::Percent, Key::Operator(Operator::Divide)]
        );
        assert_eq!(rows[4], &[Key::Digit(0), Key::Dot, Key::Equals]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(7).label(), "7");
        assert_eq!(Key::Dot.label(), ".");
        assert_eq!(Key::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Key::Equals.label(), "=");
        assert_eq!(Key::Percent.label(), "%");
        assert_eq!(Key::Backspace.label(), "⌫");
        assert_eq!(Key::Clear.label(), "AC");
    }

    #[test]
    fn test_from_char_digits_and_dot() {
        assert_eq!(Key::from_char('5'), Some(Key::Digit(5)));
        assert_eq!(Key::from_char('0'), Some(Key::Digit(0)));
        assert_eq!(Key::from_char('.'), Some(Key::Dot));
    }

    #[test]
    fn test_from_char_operators() {
        assert_eq!(Key::from_char('+'), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_char('x'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('*'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('×'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('/'), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operator::Divide)));
    }

    #[test]
    fn test_from_char_actions() {
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('%'), Some(Key::Percent));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('z'), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Keypad::kind(Key::Digit(5)), ButtonKind::Plain);
        assert_eq!(Keypad::kind(Key::Dot), ButtonKind::Plain);
        assert_eq!(Keypad::kind(Key::Clear), ButtonKind::Action);
        assert_eq!(Keypad::kind(Key::Percent), ButtonKind::Action);
        assert_eq!(Keypad::kind(Key::Operator(Operator::Add)), ButtonKind::Filled);
        assert_eq!(Keypad::kind(Key::Equals), ButtonKind::Filled);
    }
}
