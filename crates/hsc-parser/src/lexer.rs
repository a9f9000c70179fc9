//! Lexical analyzer for sketch source text.
//!
//! The lexer is a single forward scan over the source. It strips comments
//! and whitespace and emits every remaining token as a borrowed slice of the
//! source:
//!
//! - `%` as the very first character of a line starts a comment running to
//!   the end of that line.
//! - Each of `: [ ] , ;` is a token on its own.
//! - `(` opens a string literal that ends at the matching `)`; parentheses
//!   nest, and both delimiters belong to the token.
//! - Any other run of characters is one token.
//!
//! Lexing stops right after the first `;`. It never fails: a string literal
//! still open at the end of input is emitted as it stands and left for the
//! grammar layer to reject.

use log::{trace, warn};
use winnow::{
    Parser as _,
    combinator::{alt, preceded},
    error::{ContextError, ErrMode},
    stream::Stream,
    token::{one_of, take_while},
};

use crate::{chars, span::Span, tokens::Token};

type Input<'src> = &'src str;
type IResult<O> = Result<O, ErrMode<ContextError>>;

/// Parse a `%` comment up to, not including, the line break
fn comment<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    preceded('%', take_while(0.., |c: char| !chars::is_newline(c)))
        .take()
        .parse_next(input)
}

/// Parse a run of whitespace, line breaks included
fn whitespace<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., chars::is_whitespace).parse_next(input)
}

/// Parse one of the single-character operators
fn operator<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    one_of(chars::is_operator).take().parse_next(input)
}

/// Parse a string literal, delimiters included.
///
/// Parentheses nest: the literal ends at the `)` that brings the depth back
/// to zero. A literal still open at the end of input is returned as it
/// stands.
fn string_literal<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    if !input.starts_with('(') {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    let mut depth = 0usize;
    let end = input.char_indices().find_map(|(offset, c)| {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset + 1);
                }
            }
            _ => {}
        }
        None
    });

    let len = end.unwrap_or(input.len());
    let text = input.next_slice(len);
    if end.is_none() {
        warn!(depth, len; "Unterminated string literal at end of input");
    }
    Ok(text)
}

/// Parse a run of ordinary characters
fn word<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| {
        !chars::is_whitespace(c) && !chars::is_operator(c) && c != '('
    })
    .parse_next(input)
}

/// Lexer that accumulates tokens during one scan of the source.
struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    /// Byte offset of the unconsumed `input` within the source.
    fn offset(&self, input: Input<'src>) -> usize {
        self.source.len() - input.len()
    }

    /// `%` only opens a comment as the first character of a line.
    fn at_line_start(&self, offset: usize) -> bool {
        self.source[..offset]
            .chars()
            .next_back()
            .is_none_or(chars::is_newline)
    }

    /// Scan the whole source, stopping right after the first `;`.
    fn tokenize(&mut self) {
        let mut input = self.source;

        while !input.is_empty() {
            let start = self.offset(input);

            if self.at_line_start(start) && comment(&mut input).is_ok() {
                continue;
            }
            if whitespace(&mut input).is_ok() {
                continue;
            }

            let Ok(text) = alt((operator, string_literal, word)).parse_next(&mut input) else {
                break;
            };
            self.tokens
                .push(Token::new(self.source, Span::new(start..start + text.len())));

            if text == ";" {
                break;
            }
        }
    }

    fn finish(self) -> Vec<Token<'src>> {
        trace!(count = self.tokens.len(); "Tokenized source");
        self.tokens
    }
}

/// Split sketch source text into tokens.
///
/// # Examples
///
/// ```
/// # use hsc_parser::tokenize;
/// let tokens = tokenize("% comment\nData: [abc]; ignored");
/// let texts: Vec<_> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(texts, ["Data", ":", "[", "abc", "]", ";"]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize();
    lexer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_comment_and_early_stop() {
        assert_eq!(
            texts("% comment\nData: [abc];"),
            ["Data", ":", "[", "abc", "]", ";"]
        );
        assert_eq!(
            texts("% comment\nData: [abc]; Pencil: [000000];"),
            ["Data", ":", "[", "abc", "]", ";"]
        );
    }

    #[test]
    fn test_stops_before_unterminated_string_after_semicolon() {
        assert_eq!(texts("Marker:(a);(never closed"), ["Marker", ":", "(a)", ";"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n\n").is_empty());
        assert!(tokenize("% only a comment").is_empty());
    }

    #[test]
    fn test_percent_only_starts_comment_at_line_start() {
        assert_eq!(texts("a %b\n%c\nd"), ["a", "%b", "d"]);
        assert_eq!(texts("  %x"), ["%x"]);
        assert_eq!(texts("a\r\n%c\r\nb"), ["a", "b"]);
    }

    #[test]
    fn test_operators_are_single_tokens() {
        assert_eq!(texts("a:[b,c]"), ["a", ":", "[", "b", ",", "c", "]"]);
        assert_eq!(texts("[]"), ["[", "]"]);
    }

    #[test]
    fn test_string_literals_nest() {
        assert_eq!(texts("Marker:(a (b) c)"), ["Marker", ":", "(a (b) c)"]);
        assert_eq!(texts("(x)(y)"), ["(x)", "(y)"]);
        assert_eq!(texts("(a;b, [c])"), ["(a;b, [c])"]);
        assert_eq!(texts("(multi\nline)"), ["(multi\nline)"]);
    }

    #[test]
    fn test_string_right_after_word() {
        assert_eq!(texts("abc(d)e"), ["abc", "(d)", "e"]);
    }

    #[test]
    fn test_unterminated_string_is_emitted() {
        assert_eq!(texts("Marker:(open (inner)"), ["Marker", ":", "(open (inner)"]);
    }

    #[test]
    fn test_deeply_nested_string_literal() {
        let open = "(".repeat(50_000);
        let source = format!("Marker: {open};");
        let tokens = tokenize(&source);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].as_str().len(), 50_001);

        let source = format!("Marker: {open}{};", ")".repeat(50_000));
        let texts: Vec<_> = tokenize(&source).iter().map(|t| t.as_str()).collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[2].len(), 100_000);
        assert_eq!(texts[3], ";");
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "Brush: [05 0000]";
        let tokens = tokenize(source);
        for token in &tokens {
            assert_eq!(&source[token.span().range()], token.as_str());
        }
        assert_eq!(tokens[3].span(), Span::new(8..10));
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(texts("Marker:(héllo) ünï"), ["Marker", ":", "(héllo)", "ünï"]);
    }

    #[test]
    fn test_trailing_word_at_end_of_input() {
        assert_eq!(texts("Data"), ["Data"]);
        assert_eq!(texts("a\r\nb"), ["a", "b"]);
    }
}
