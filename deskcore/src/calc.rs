//! Calculator state: the expression buffer and what the display shows.
//!
//! Keystrokes are appended to the buffer without any grammar check; the
//! buffer is only parsed when `=` is pressed. On a failed evaluation the
//! display shows `Error` and the buffer is reset.

use crate::expr::{self, EvalError};

/// Text shown on the display after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// One calculator button (or the key bound to it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKey {
    Digit(u8),
    Point,
    Op(Operator),
    Clear,
    Equals,
    Backspace,
}

impl CalcKey {
    /// Map a typed character to a key. Only characters that have a
    /// button (plus `.` and `=`) are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c {
            '0'..='9' => CalcKey::Digit(c as u8 - b'0'),
            '.' => CalcKey::Point,
            '+' => CalcKey::Op(Operator::Add),
            '-' => CalcKey::Op(Operator::Subtract),
            '*' => CalcKey::Op(Operator::Multiply),
            '/' => CalcKey::Op(Operator::Divide),
            '=' => CalcKey::Equals,
            _ => return None,
        };
        Some(key)
    }

    /// Button caption.
    pub fn label(self) -> String {
        match self {
            CalcKey::Digit(d) => d.to_string(),
            CalcKey::Point => ".".into(),
            CalcKey::Op(op) => op.symbol().to_string(),
            CalcKey::Clear => "C".into(),
            CalcKey::Equals => "=".into(),
            CalcKey::Backspace => "<-".into(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Calculator {
    buffer: String,
    display: String,
    last_error: Option<EvalError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Error from the most recent `=`, if it failed.
    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Append a token to the buffer and mirror the buffer on the display.
    pub fn append(&mut self, token: &str) {
        self.buffer.push_str(token);
        self.display.clone_from(&self.buffer);
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.display.clear();
        self.last_error = None;
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
        self.display.clone_from(&self.buffer);
    }

    /// Evaluate the buffer. The buffer is empty afterwards whatever the
    /// outcome; the display shows either the result or [`ERROR_TEXT`].
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        let result = expr::evaluate(&self.buffer);
        self.buffer.clear();
        match &result {
            Ok(value) => {
                self.display = expr::format_number(*value);
                self.last_error = None;
            }
            Err(e) => {
                self.display = ERROR_TEXT.to_string();
                self.last_error = Some(e.clone());
            }
        }
        result
    }

    /// Dispatch a button press.
    pub fn press(&mut self, key: CalcKey) {
        match key {
            CalcKey::Digit(d) => self.append(&d.to_string()),
            CalcKey::Point => self.append("."),
            CalcKey::Op(op) => self.append(&op.symbol().to_string()),
            CalcKey::Clear => self.clear(),
            CalcKey::Backspace => self.backspace(),
            CalcKey::Equals => match self.evaluate() {
                Ok(value) => log::debug!("evaluated to {value}"),
                Err(e) => log::warn!("evaluation failed: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            let key = CalcKey::from_char(c).unwrap();
            calc.press(key);
        }
    }

    #[test]
    fn test_display_mirrors_buffer() {
        let mut calc = Calculator::new();
        let mut expected = String::new();
        for token in ["1", "2", "+", "+", "7", ".", ".", "/"] {
            calc.append(token);
            expected.push_str(token);
            assert_eq!(calc.display(), expected);
            assert_eq!(calc.buffer(), expected);
        }
    }

    #[test]
    fn test_clear() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12*3");
        calc.clear();
        assert_eq!(calc.buffer(), "");
        assert_eq!(calc.display(), "");

        press_all(&mut calc, "9/0=");
        calc.clear();
        assert_eq!(calc.display(), "");
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_seven_plus_eight() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "7+8=");
        assert_eq!(calc.display(), "15");
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_precedence_scenario() {
        let mut calc = Calculator::new();
        calc.append("12+7*2");
        assert_eq!(calc.evaluate(), Ok(26.0));
        assert_eq!(calc.display(), "26");
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_division_by_zero_shows_error() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "9/0");
        assert_eq!(calc.evaluate(), Err(EvalError::DivisionByZero));
        assert_eq!(calc.display(), ERROR_TEXT);
        assert_eq!(calc.buffer(), "");
        assert_eq!(calc.last_error(), Some(&EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed_and_empty() {
        let mut calc = Calculator::new();
        assert_eq!(calc.evaluate(), Err(EvalError::Empty));
        assert_eq!(calc.display(), ERROR_TEXT);

        calc.append("12+");
        assert!(calc.evaluate().is_err());
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_held_minus_key_shows_error() {
        let mut calc = Calculator::new();
        for _ in 0..5_000 {
            calc.press(CalcKey::Op(Operator::Subtract));
        }
        calc.press(CalcKey::Digit(5));
        calc.press(CalcKey::Equals);
        assert_eq!(calc.display(), ERROR_TEXT);
        assert_eq!(calc.last_error(), Some(&EvalError::TooDeep));
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_typing_after_result_starts_new_buffer() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "2*3=");
        assert_eq!(calc.display(), "6");
        press_all(&mut calc, "4");
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "123");
        calc.press(CalcKey::Backspace);
        assert_eq!(calc.display(), "12");
        calc.press(CalcKey::Backspace);
        calc.press(CalcKey::Backspace);
        calc.press(CalcKey::Backspace);
        assert_eq!(calc.buffer(), "");
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(CalcKey::from_char('7'), Some(CalcKey::Digit(7)));
        assert_eq!(CalcKey::from_char('/'), Some(CalcKey::Op(Operator::Divide)));
        assert_eq!(CalcKey::from_char('x'), None);
        assert_eq!(CalcKey::Op(Operator::Multiply).label(), "*");
        assert_eq!(CalcKey::Clear.label(), "C");
    }
}
