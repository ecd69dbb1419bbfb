//! Arithmetic expression evaluator.
//!
//! Accepts digits, decimal points, whitespace, `+ - * /` and parentheses,
//! nothing else. Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! ```
//!
//! `++` and `--` written without a space between them are rejected, and
//! nesting (parentheses plus unary signs) stops at [`MAX_DEPTH`] levels.
//!
//! The result is rounded to the nearest whole number, halves upward.

use crate::error::ExpressionError;

/// Deepest nesting of parentheses and unary signs the parser accepts.
pub const MAX_DEPTH: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if matches!(c, '+' | '-') && chars.peek().map(|&(_, next)| next) == Some(c) {
            return Err(ExpressionError::Malformed(format!("unexpected {c}{c}")));
        }
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::Open,
            ')' => Token::Close,
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
                let literal = &input[start..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ExpressionError::Malformed(format!("bad number {literal:?}")))?;
                Token::Number(value)
            }
            other => return Err(ExpressionError::InvalidCharacter(other)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ExpressionError>,
    ) -> Result<T, ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::Malformed("expression nested too deeply".to_string()));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn expr(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, ExpressionError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(-self.nested(Self::unary)?)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, ExpressionError> {
        match self.bump() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Open) => {
                let value = self.nested(Self::expr)?;
                match self.bump() {
                    Some(Token::Close) => Ok(value),
                    _ => Err(ExpressionError::Malformed("unclosed parenthesis".to_string())),
                }
            }
            Some(token) => Err(ExpressionError::Malformed(format!("unexpected {token:?}"))),
            None => Err(ExpressionError::Malformed("unexpected end of expression".to_string())),
        }
    }
}

/// Evaluate without rounding.
pub fn evaluate_exact(expression: &str) -> Result<f64, ExpressionError> {
    if expression.trim().is_empty() {
        return Err(ExpressionError::Empty);
    }
    if let Some(bad) = expression.chars().find(|&c| !is_allowed(c)) {
        return Err(ExpressionError::InvalidCharacter(bad));
    }

    let mut parser = Parser {
        tokens: tokenize(expression)?,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(ExpressionError::Malformed(format!("unexpected {token:?}")));
    }
    if !value.is_finite() {
        return Err(ExpressionError::NonFinite);
    }
    Ok(value)
}

/// Evaluate and round to the nearest whole number.
///
/// ```
/// use slagalica_engine::games::moj_broj::evaluate;
///
/// assert_eq!(evaluate("(100 - 4) * 5 + 18"), Ok(498));
/// assert_eq!(evaluate("7 / 2"), Ok(4));
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, ExpressionError> {
    let value = evaluate_exact(expression)?;
    Ok((value + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
        assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
        assert_eq!(evaluate("100 - 10 - 5"), Ok(85));
        assert_eq!(evaluate("100 / 10 / 5"), Ok(2));
    }

    #[test]
    fn test_unary_and_decimals() {
        assert_eq!(evaluate("-5 + 10"), Ok(5));
        assert_eq!(evaluate("-(2 * 3)"), Ok(-6));
        assert_eq!(evaluate("1.5 * 4"), Ok(6));
    }

    #[test]
    fn test_rounding_halves_up() {
        assert_eq!(evaluate("5 / 2"), Ok(3));
        assert_eq!(evaluate("-5 / 2"), Ok(-2));
        assert_eq!(evaluate("10 / 3"), Ok(3));
        assert_eq!(evaluate("20 / 3"), Ok(7));
    }

    #[test]
    fn test_empty() {
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(evaluate("   "), Err(ExpressionError::Empty));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(evaluate("2 ^ 3"), Err(ExpressionError::InvalidCharacter('^')));
        assert_eq!(evaluate("alert(1)"), Err(ExpressionError::InvalidCharacter('a')));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(evaluate("2 +"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("(2 + 3"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("2 + 3)"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("()"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("1.2.3"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("2 (3)"), Err(ExpressionError::Malformed(_))));
    }

    #[test]
    fn test_doubled_sign_without_space() {
        assert!(matches!(evaluate("2--3"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("2++3"), Err(ExpressionError::Malformed(_))));
        assert!(matches!(evaluate("--5"), Err(ExpressionError::Malformed(_))));
        assert_eq!(evaluate("2 - -3"), Ok(5));
        assert_eq!(evaluate("2+-3"), Ok(-1));
        assert_eq!(evaluate("2-+3"), Ok(-1));
    }

    #[test]
    fn test_nesting_limit() {
        let shallow = format!("{}5{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(evaluate(&shallow), Ok(5));

        let deep = format!("{}5{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert!(matches!(evaluate(&deep), Err(ExpressionError::Malformed(_))));

        let unclosed = "(".repeat(10_000);
        assert!(matches!(evaluate(&unclosed), Err(ExpressionError::Malformed(_))));

        let signs = "- ".repeat(10_000) + "5";
        assert!(matches!(evaluate(&signs), Err(ExpressionError::Malformed(_))));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(evaluate("1 / 0"), Err(ExpressionError::NonFinite));
        assert_eq!(evaluate("0 / 0"), Err(ExpressionError::NonFinite));
    }
}
