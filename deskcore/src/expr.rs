//! Arithmetic expression evaluator
//!
//! A small tokenizer plus recursive-descent parser over numeric literals,
//! `+ - * / // **` and parentheses. Calculator buffers are evaluated here
//! instead of being handed to a general-purpose interpreter.
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '//') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `**` binds tighter than a leading sign, so `-2**2` is `-4`, and it is
//! right-associative: `2**3**2` is `2**9`.
//!
//! Signs and parentheses nest at most [`MAX_DEPTH`] levels deep.

use thiserror::Error;

/// Nesting limit for signs, parentheses and exponents.
pub const MAX_DEPTH: usize = 256;

/// Largest magnitude up to which every whole `f64` is exact (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("unexpected '{0}' at position {1}")]
    UnexpectedToken(String, usize),
    #[error("expression ends unexpectedly")]
    UnexpectedEnd,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unbalanced parenthesis")]
    UnbalancedParen,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is too large")]
    Overflow,
    #[error("result is not a real number")]
    NonReal,
    #[error("expression is nested too deeply")]
    TooDeep,
}

pub type Result<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    SlashSlash,
    LParen,
    RParen,
    Eof,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => format_number(*n),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::StarStar => "**".into(),
            Token::Slash => "/".into(),
            Token::SlashSlash => "//".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

struct Lexer {
    input: Vec<char>,
    pos: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self { input: input.chars().collect(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() { self.pos += 1; } else { break; }
        }
    }

    fn read_number(&mut self) -> Result<f64> {
        let start = self.pos;
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.pos += 1;
            } else {
                break;
            }
        }
        let text: String = self.input[start..self.pos].iter().collect();
        if text == "." {
            return Err(EvalError::InvalidNumber(text));
        }
        text.parse::<f64>().map_err(|_| EvalError::InvalidNumber(text))
    }

    /// Returns the next token together with the position it started at.
    fn next_token(&mut self) -> Result<(Token, usize)> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(ch) = self.next_char() else {
            return Ok((Token::Eof, start));
        };
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => {
                if self.peek() == Some('*') {
                    self.pos += 1;
                    Token::StarStar
                } else {
                    Token::Star
                }
            }
            '/' => {
                if self.peek() == Some('/') {
                    self.pos += 1;
                    Token::SlashSlash
                } else {
                    Token::Slash
                }
            }
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                self.pos -= 1;
                Token::Number(self.read_number()?)
            }
            other => return Err(EvalError::UnexpectedChar(other, start)),
        };
        Ok((token, start))
    }
}

struct Parser {
    lexer: Lexer,
    cur: Token,
    cur_pos: usize,
    /// Open parentheses, for telling a stray `)` from a misplaced one.
    depth: usize,
    /// Active `parse_unary` frames.
    nesting: usize,
}

impl Parser {
    fn new(input: &str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let (cur, cur_pos) = lexer.next_token()?;
        Ok(Self { lexer, cur, cur_pos, depth: 0, nesting: 0 })
    }

    fn bump(&mut self) -> Result<()> {
        let (tok, pos) = self.lexer.next_token()?;
        self.cur = tok;
        self.cur_pos = pos;
        Ok(())
    }

    fn unexpected(&self) -> EvalError {
        match self.cur {
            Token::Eof => EvalError::UnexpectedEnd,
            Token::RParen if self.depth == 0 => EvalError::UnbalancedParen,
            _ => EvalError::UnexpectedToken(self.cur.describe(), self.cur_pos),
        }
    }

    fn parse(mut self) -> Result<f64> {
        if self.cur == Token::Eof {
            return Err(EvalError::Empty);
        }
        let value = self.parse_expr()?;
        if self.cur != Token::Eof {
            return Err(self.unexpected());
        }
        checked(value)
    }

    fn parse_expr(&mut self) -> Result<f64> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.cur {
                Token::Plus => {
                    self.bump()?;
                    lhs += self.parse_term()?;
                }
                Token::Minus => {
                    self.bump()?;
                    lhs -= self.parse_term()?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.cur {
                Token::Star => {
                    self.bump()?;
                    lhs *= self.parse_unary()?;
                }
                Token::Slash => {
                    self.bump()?;
                    let rhs = self.parse_unary()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs /= rhs;
                }
                Token::SlashSlash => {
                    self.bump()?;
                    let rhs = self.parse_unary()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs = (lhs / rhs).floor();
                }
                _ => return Ok(lhs),
            }
        }
    }

    // Every sign, parenthesis and exponent level passes through here, so
    // this is the one place the recursion is bounded.
    fn parse_unary(&mut self) -> Result<f64> {
        if self.nesting >= MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        self.nesting += 1;
        let value = self.parse_signed();
        self.nesting -= 1;
        value
    }

    fn parse_signed(&mut self) -> Result<f64> {
        match self.cur {
            Token::Plus => {
                self.bump()?;
                self.parse_unary()
            }
            Token::Minus => {
                self.bump()?;
                Ok(-self.parse_unary()?)
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<f64> {
        let base = self.parse_primary()?;
        if self.cur != Token::StarStar {
            return Ok(base);
        }
        self.bump()?;
        let exponent = self.parse_unary()?;
        if base == 0.0 && exponent < 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(EvalError::NonReal);
        }
        checked(base.powf(exponent))
    }

    fn parse_primary(&mut self) -> Result<f64> {
        match self.cur {
            Token::Number(n) => {
                self.bump()?;
                Ok(n)
            }
            Token::LParen => {
                self.bump()?;
                self.depth += 1;
                let value = self.parse_expr()?;
                if self.cur != Token::RParen {
                    return Err(match self.cur {
                        Token::Eof => EvalError::UnbalancedParen,
                        _ => self.unexpected(),
                    });
                }
                self.depth -= 1;
                self.bump()?;
                Ok(value)
            }
            _ => Err(self.unexpected()),
        }
    }
}

fn checked(value: f64) -> Result<f64> {
    if value.is_finite() { Ok(value) } else { Err(EvalError::Overflow) }
}

/// Evaluate an arithmetic expression.
pub fn evaluate(input: &str) -> Result<f64> {
    Parser::new(input)?.parse()
}

/// Format a result for the calculator display.
///
/// Exact whole numbers drop the fractional part. Huge and tiny magnitudes
/// use the shortest scientific form that reads back to the same value;
/// everything else keeps at most ten decimals with trailing zeros removed.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "Error".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    if n == n.floor() && n.abs() <= MAX_EXACT_INT {
        // avoid "-0"
        format!("{}", n as i64)
    } else if n.abs() > MAX_EXACT_INT || n.abs() < 1e-6 {
        format!("{:e}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("12+7*2"), Ok(26.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
    }

    #[test]
    fn test_true_and_floor_division() {
        assert_eq!(evaluate("9/2"), Ok(4.5));
        assert_eq!(evaluate("9//2"), Ok(4.0));
        assert_eq!(evaluate("-9//2"), Ok(-5.0));
    }

    #[test]
    fn test_power() {
        assert_eq!(evaluate("2**10"), Ok(1024.0));
        assert_eq!(evaluate("-2**2"), Ok(-4.0));
        assert_eq!(evaluate("2**3**2"), Ok(512.0));
        assert_eq!(evaluate("2**-1"), Ok(0.5));
        assert_eq!(evaluate("0**-1"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("(-8)**0.5"), Err(EvalError::NonReal));
        assert_eq!(evaluate("10**400"), Err(EvalError::Overflow));
    }

    #[test]
    fn test_signs_and_operator_runs() {
        assert_eq!(evaluate("-5+3"), Ok(-2.0));
        assert_eq!(evaluate("5--3"), Ok(8.0));
        assert_eq!(evaluate("5+-+3"), Ok(2.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate(".5+.5"), Ok(1.0));
        assert_eq!(evaluate("5.+1"), Ok(6.0));
        assert!(matches!(evaluate("1.2.3"), Err(EvalError::UnexpectedToken(_, 3))));
        assert_eq!(evaluate("."), Err(EvalError::InvalidNumber(".".into())));
    }

    #[test]
    fn test_errors() {
        assert_eq!(evaluate(""), Err(EvalError::Empty));
        assert_eq!(evaluate("   "), Err(EvalError::Empty));
        assert_eq!(evaluate("12+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("9/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("9//0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("(1+2"), Err(EvalError::UnbalancedParen));
        assert_eq!(evaluate("1+2)"), Err(EvalError::UnbalancedParen));
        assert_eq!(evaluate("2*/3"), Err(EvalError::UnexpectedToken("/".into(), 2)));
        assert_eq!(evaluate("3x"), Err(EvalError::UnexpectedChar('x', 1)));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(f64::NAN), "Error");
    }

    #[test]
    fn test_format_keeps_every_digit() {
        assert_eq!(format_number(1_234_567_890_123_456.0), "1234567890123456");
        assert_eq!(format_number(-9_007_199_254_740_992.0), "-9007199254740992");
        assert_eq!(format_number(1e20), "1e20");
        assert_eq!(format_number(1.5e-7), "1.5e-7");

        let big = 123_456_789_012_345_680_000.0_f64;
        assert_eq!(format_number(big).parse::<f64>(), Ok(big));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let signs = format!("{}5", "-".repeat(100_000));
        assert_eq!(evaluate(&signs), Err(EvalError::TooDeep));

        let parens = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert_eq!(evaluate(&parens), Err(EvalError::TooDeep));

        let powers = format!("1{}", "**1".repeat(100_000));
        assert_eq!(evaluate(&powers), Err(EvalError::TooDeep));
    }

    #[test]
    fn test_nesting_below_limit() {
        let signs = format!("{}5", "-".repeat(100));
        assert_eq!(evaluate(&signs), Ok(5.0));

        let depth = MAX_DEPTH / 2;
        let parens = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(evaluate(&parens), Ok(7.0));

        // long flat chains do not nest
        let sum = vec!["1"; 10_000].join("+");
        assert_eq!(evaluate(&sum), Ok(10_000.0));
    }
}
