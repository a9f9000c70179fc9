//! The legacy raw point-list format.
//!
//! A raw document is whitespace-separated words of base-36 digits. Each word
//! is one stroke and every 4 digits of a word are one point: two signed
//! digits of x, then two of y.
//!
//! ```text
//! 0000 0a0a0k0k
//! └┬─┘ └┬─┘└┬─┘
//!  │    │   └─ (20, 20)
//!  │    └───── (10, 10)
//!  └────────── (0, 0), a stroke of its own
//! ```
//!
//! The raw format does not go through the lexer or the grammar.

use hsc_core::{RawPoint, RawSketch, RawStroke};
use log::debug;

use crate::{
    chars,
    error::{Diagnostic, ErrorCode, ParseError},
    numeral::{self, NumeralError},
    span::Span,
};

/// Characters per point.
const POINT_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between points or words.
    S0,
    X1,
    X2,
    Y1,
    /// A point just completed.
    Y2,
}

/// Returns `true` if `source` is a well-formed raw document.
///
/// Well-formed means only base-36 digits and whitespace, every word a
/// multiple of four digits long.
///
/// # Examples
///
/// ```
/// # use hsc_parser::raw;
/// assert!(raw::verify("0000 0a0a0k0k\n"));
/// assert!(raw::verify(""));
/// assert!(!raw::verify("abc"));
/// assert!(!raw::verify("ab cd"));
/// ```
pub fn verify(source: &str) -> bool {
    let mut state = State::S0;
    for c in source.chars() {
        state = if chars::is_base36(c) {
            match state {
                State::S0 | State::Y2 => State::X1,
                State::X1 => State::X2,
                State::X2 => State::Y1,
                State::Y1 => State::Y2,
            }
        } else if chars::is_whitespace(c) && matches!(state, State::S0 | State::Y2) {
            State::S0
        } else {
            return false;
        };
    }
    matches!(state, State::S0 | State::Y2)
}

/// Parse a raw document.
///
/// Input is expected to pass [`verify`]. A word whose length is not a
/// multiple of four loses its trailing partial point.
///
/// # Errors
///
/// Returns an E202 diagnostic when a complete point holds a character that is
/// not a base-36 digit.
pub fn parse(source: &str) -> Result<RawSketch, ParseError> {
    let strokes = words(source)
        .map(|(offset, word)| stroke(offset, word))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(strokes = strokes.len(); "Raw sketch parsed");
    Ok(RawSketch::new(strokes))
}

/// Non-empty whitespace-separated words with their byte offsets.
fn words(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .split(chars::is_whitespace)
        .scan(0, |offset, word| {
            let start = *offset;
            // Every whitespace character is a single byte.
            *offset += word.len() + 1;
            Some((start, word))
        })
        .filter(|(_, word)| !word.is_empty())
}

fn stroke(offset: usize, word: &str) -> Result<RawStroke, Diagnostic> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let chunks = chars.chunks_exact(POINT_CHARS);
    if !chunks.remainder().is_empty() {
        debug!(
            offset,
            dropped = chunks.remainder().len();
            "Dropping partial point at end of raw word"
        );
    }

    let mut points = Vec::with_capacity(chars.len() / POINT_CHARS);
    for chunk in chunks {
        let &[(start, _), _, (mid, _), (last, last_char)] = chunk else {
            continue;
        };
        let end = last + last_char.len_utf8();

        let coordinate = |range: std::ops::Range<usize>| {
            numeral::base36::<i16, 2>(&word[range.clone()]).map_err(|err| {
                invalid_coordinate(Span::new(offset + range.start..offset + range.end), err)
            })
        };
        points.push(RawPoint::new(coordinate(start..mid)?, coordinate(mid..end)?));
    }
    Ok(RawStroke::new(points))
}

fn invalid_coordinate(span: Span, err: NumeralError) -> Diagnostic {
    Diagnostic::error(format!("invalid raw coordinate: {err}"))
        .with_code(ErrorCode::E202)
        .with_label(span, ErrorCode::E202.description())
        .with_help("raw coordinates are two base-36 digits")
}
