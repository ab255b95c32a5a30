//! Element text format (§6.2): parsing delegates one factor at a time to
//! the active `FactorKind`; printing threads an explicit indentation level
//! through a small `Printer` value rather than a global stream wrapper
//! (§9 "Global I/O singleton").

use crate::element::Element;
use crate::error::{GarsideError, GarsideResult};
use crate::factor::FactorKind;
use std::fmt;

fn peek(s: &str, pos: usize) -> Option<char> {
    s[pos..].chars().next()
}

fn skip_separators(s: &str, pos: &mut usize) {
    while let Some(c) = peek(s, *pos) {
        if c.is_whitespace() || c == '.' {
            *pos += c.len_utf8();
        } else {
            break;
        }
    }
}

fn skip_whitespace(s: &str, pos: &mut usize) {
    while let Some(c) = peek(s, *pos) {
        if c.is_whitespace() {
            *pos += c.len_utf8();
        } else {
            break;
        }
    }
}

fn parse_signed_int(s: &str, pos: &mut usize) -> GarsideResult<i32> {
    let bytes = s.as_bytes();
    let mut i = *pos;
    let negative = if i < bytes.len() && bytes[i] as char == '-' {
        i += 1;
        true
    } else {
        false
    };
    let start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == start {
        return Err(GarsideError::invalid_string(
            "expected an integer exponent",
        ));
    }
    let magnitude: i32 = s[start..i]
        .parse()
        .map_err(|_| GarsideError::invalid_string(format!("bad exponent `{}`", &s[start..i])))?;
    *pos = i;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parses a whole element: a sequence of `FACTOR (^ INT)?` tokens separated
/// by whitespace or `.`, negative exponents invoking right-division.
pub fn parse_element<F: FactorKind>(
    s: &str,
    pos: &mut usize,
    parameter: &F::Parameter,
) -> GarsideResult<Element<F>> {
    let mut elem = Element::identity(parameter.clone());
    skip_separators(s, pos);
    while *pos < s.len() {
        let checkpoint = *pos;
        let factor = match F::parse(s, pos, parameter) {
            Ok(f) => f,
            Err(e) => {
                *pos = checkpoint;
                return Err(e);
            }
        };
        skip_whitespace(s, pos);
        let mut exponent: i32 = 1;
        if peek(s, *pos) == Some('^') {
            *pos += 1;
            skip_whitespace(s, pos);
            exponent = parse_signed_int(s, pos)?;
        }
        let factor_elem = Element::from_factor(factor);
        if exponent >= 0 {
            for _ in 0..exponent {
                elem.right_multiply(&factor_elem);
            }
        } else {
            let inv = factor_elem.invert();
            for _ in 0..(-exponent) {
                elem.right_multiply(&inv);
            }
        }
        skip_separators(s, pos);
    }
    Ok(elem)
}

/// Explicit, caller-owned indentation state for pretty-printing — never a
/// global/thread-local stream wrapper (§9).
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Printer { indent: 0 }
    }

    pub fn indented(&self) -> Self {
        Printer {
            indent: self.indent + 1,
        }
    }

    fn write_indent(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            write!(f, "  ")?;
        }
        Ok(())
    }

    /// Renders `element` in the grammar of §6.2: Δ powers as `D`/`D ^ k`,
    /// factors separated by ` . `.
    pub fn print_element<F: FactorKind>(
        &self,
        f: &mut fmt::Formatter<'_>,
        element: &Element<F>,
    ) -> fmt::Result {
        self.write_indent(f)?;
        let mut wrote_anything = false;
        if element.inf() == 1 {
            write!(f, "D")?;
            wrote_anything = true;
        } else if element.inf() != 0 {
            write!(f, "D ^ {}", element.inf())?;
            wrote_anything = true;
        }
        for factor in element.factors() {
            if wrote_anything {
                write!(f, " . ")?;
            }
            factor.print(f)?;
            wrote_anything = true;
        }
        if !wrote_anything {
            write!(f, "1")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::classical::Classical;

    #[test]
    fn parses_half_twist_word() {
        let mut pos = 0usize;
        let e = parse_element::<Classical>("s_1 . s_2 . s_1", &mut pos, &3).unwrap();
        assert_eq!(e.inf(), 1);
        assert_eq!(e.canonical_length(), 0);
    }

    #[test]
    fn negative_exponent_inverts() {
        let mut pos = 0usize;
        let e = parse_element::<Classical>("s_1 ^ -1", &mut pos, &3).unwrap();
        let mut pos2 = 0usize;
        let atom = parse_element::<Classical>("s_1", &mut pos2, &3).unwrap();
        assert_eq!(e, atom.invert());
    }

    #[test]
    fn rejects_out_of_range_generator() {
        let mut pos = 0usize;
        assert!(parse_element::<Classical>("s_9", &mut pos, &3).is_err());
    }
}
