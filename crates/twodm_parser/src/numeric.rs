//! Numeric literal decoding.
//!
//! 2DM files come from many producers, so the accepted grammar is that of
//! conventional integer and float literal parsers:
//!
//! ```text
//! integer := ws* sign? digits ws*
//! float   := ws* sign? (decimal | "inf" | "infinity" | "nan") ws*
//! decimal := (digits ("." digits?)? | "." digits) (("e" | "E") sign? digits)?
//! digits  := digit ("_"? digit)*
//! sign    := "+" | "-"
//! ```
//!
//! The special float words are case-insensitive. The sign of `nan` is ignored.

use twodm_foundation::{Error, Material, NumberKind, Result};

/// Byte cursor over a trimmed literal.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_n(&self, n: usize) -> Option<u8> {
        self.bytes.get(self.pos + n).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Consumes `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes an optional `+` or `-`. Returns true for `-`.
    fn eat_sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        }
    }

    /// Consumes a digit run with single underscores between digits.
    ///
    /// Returns false without consuming anything if no digit is next. A
    /// misplaced underscore is left unconsumed so the caller's end check fails.
    fn digits(&mut self) -> bool {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return false;
        }
        loop {
            self.pos += 1;
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {}
                Some(b'_') if self.peek_n(1).is_some_and(|b| b.is_ascii_digit()) => {
                    self.pos += 1;
                }
                _ => return true,
            }
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

/// Removes digit-group underscores. The grammar has already been checked.
fn without_underscores(text: &str) -> String {
    text.chars().filter(|&c| c != '_').collect()
}

/// Parses a base-10 integer token.
///
/// # Errors
/// Returns [`ErrorKind::InvalidNumber`](twodm_foundation::ErrorKind::InvalidNumber)
/// if the token does not match the integer grammar or does not fit in an `i64`.
pub fn parse_integer(token: &str) -> Result<i64> {
    let fail = || Error::invalid_number(token, NumberKind::Integer);

    let text = token.trim();
    let mut scanner = Scanner::new(text);
    scanner.eat_sign();
    if !scanner.digits() || !scanner.at_end() {
        return Err(fail());
    }

    without_underscores(text).parse::<i64>().map_err(|_| fail())
}

/// Parses a floating point token.
///
/// Magnitudes beyond the `f64` range round to infinity.
///
/// # Errors
/// Returns [`ErrorKind::InvalidNumber`](twodm_foundation::ErrorKind::InvalidNumber)
/// if the token does not match the float grammar.
pub fn parse_float(token: &str) -> Result<f64> {
    let fail = || Error::invalid_number(token, NumberKind::Float);

    let text = token.trim();
    let mut scanner = Scanner::new(text);
    let negative = scanner.eat_sign();

    let word = scanner.rest();
    if word.eq_ignore_ascii_case(b"inf") || word.eq_ignore_ascii_case(b"infinity") {
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if word.eq_ignore_ascii_case(b"nan") {
        return Ok(f64::NAN);
    }

    let integral = scanner.digits();
    let fractional = scanner.eat(b'.') && scanner.digits();
    if !integral && !fractional {
        return Err(fail());
    }
    if scanner.eat(b'e') || scanner.eat(b'E') {
        scanner.eat_sign();
        if !scanner.digits() {
            return Err(fail());
        }
    }
    if !scanner.at_end() {
        return Err(fail());
    }

    without_underscores(text).parse::<f64>().map_err(|_| fail())
}

/// Parses a material token: integer first, then float if `allow_float` is set.
///
/// Integer tokens outside the `i64` range fail the integer grammar and fall
/// back to the nearest `f64`, losing precision. With `allow_float` unset they
/// are rejected.
///
/// # Errors
/// Returns the integer parse error when `allow_float` is false, otherwise
/// the float parse error if neither grammar matches.
pub fn parse_material(token: &str, allow_float: bool) -> Result<Material> {
    match parse_integer(token) {
        Ok(value) => Ok(Material::Int(value)),
        Err(_) if allow_float => parse_float(token).map(Material::Float),
        Err(err) => Err(err),
    }
}
