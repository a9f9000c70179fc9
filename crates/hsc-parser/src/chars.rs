//! Character classes shared by the lexer, the numeral decoders and the raw
//! format validator.
//!
//! These are deliberately narrower than the `char::is_ascii_*` family:
//! whitespace is exactly space, tab, line feed and carriage return.

/// Space, tab, line feed or carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Line feed or carriage return.
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub fn is_lowercase(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_uppercase(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// `0` through `9`.
pub fn is_base10(c: char) -> bool {
    c.is_ascii_digit()
}

/// `0`-`9`, `a`-`z` or `A`-`Z`.
pub fn is_base36(c: char) -> bool {
    is_base10(c) || is_lowercase(c) || is_uppercase(c)
}

/// One of the single-character operators `: [ ] , ;`.
pub fn is_operator(c: char) -> bool {
    matches!(c, ':' | '[' | ']' | ',' | ';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r'] {
            assert!(is_whitespace(c), "{c:?}");
        }
        assert!(!is_whitespace('\u{0B}'));
        assert!(!is_whitespace('\u{A0}'));
        assert!(is_newline('\r'));
        assert!(!is_newline(' '));
    }

    #[test]
    fn test_base36() {
        for c in ['0', '9', 'a', 'z', 'A', 'Z'] {
            assert!(is_base36(c), "{c:?}");
        }
        for c in ['\'', '-', '.', 'é', '_'] {
            assert!(!is_base36(c), "{c:?}");
        }
        assert!(is_base10('7'));
        assert!(!is_base10('a'));
    }

    #[test]
    fn test_operators() {
        for c in ":[],;".chars() {
            assert!(is_operator(c));
        }
        assert!(!is_operator('('));
        assert!(!is_operator('%'));
    }
}
