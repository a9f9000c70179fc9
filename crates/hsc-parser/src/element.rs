//! Element parser.
//!
//! Consumes one element from the token stream: a type name followed by the
//! argument syntax its [`Shape`] prescribes. The result is an
//! [`ElementData`] view holding the type and the argument tokens; argument
//! contents are not interpreted here.
//!
//! Inside a bracketed list, `,` tokens separate arguments and are dropped, so
//! `[1, 0, 0]` and `[1 0 0]` carry the same three arguments.

use winnow::{
    Parser as _,
    combinator::repeat,
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    grammar::{ElementType, Shape},
    span::Span,
    tokens::Token,
};

/// Context attached to element parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// What went wrong
    Failure {
        code: ErrorCode,
        message: String,
        help: Option<&'static str>,
    },
    /// Remaining token count (`eof_offset()`) where the failing element began
    StartOffset(usize),
}

pub(crate) type Input<'t, 'src> = TokenSlice<'t, Token<'src>>;
pub(crate) type IResult<O> = Result<O, ErrMode<ContextError<Context>>>;

/// A parsed element: its type, its name token and its argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ElementData<'t, 'src> {
    ty: ElementType,
    name: &'t Token<'src>,
    arguments: Vec<&'t Token<'src>>,
}

impl<'t, 'src> ElementData<'t, 'src> {
    pub(crate) fn ty(&self) -> ElementType {
        self.ty
    }

    pub(crate) fn name(&self) -> &'t Token<'src> {
        self.name
    }

    pub(crate) fn arguments(&self) -> &[&'t Token<'src>] {
        &self.arguments
    }

    /// Span from the type name through the last argument.
    pub(crate) fn span(&self) -> Span {
        self.arguments
            .last()
            .map_or(self.name.span(), |last| self.name.span().union(last.span()))
    }
}

/// Build a Cut error carrying a failure description and where the element began.
fn failure(
    code: ErrorCode,
    message: impl Into<String>,
    help: Option<&'static str>,
    start_offset: usize,
) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Failure {
        code,
        message: message.into(),
        help,
    });
    e.push(Context::StartOffset(start_offset));
    ErrMode::Cut(e)
}

/// Parse the single-character operator `op`
fn operator<'t, 'src>(input: &mut Input<'t, 'src>, op: char) -> IResult<&'t Token<'src>> {
    any.verify(|token: &Token<'_>| token.is_operator(op))
        .parse_next(input)
}

/// Take every token up to, not including, the next `]`
fn list_contents<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<Vec<&'t Token<'src>>> {
    repeat(0.., any.verify(|token: &Token<'_>| !token.is_operator(']'))).parse_next(input)
}

/// Look at the next token without consuming it
pub(crate) fn peek<'t, 'src>(input: &mut Input<'t, 'src>) -> Option<&'t Token<'src>> {
    let checkpoint = input.checkpoint();
    let token = input.next_token();
    input.reset(&checkpoint);
    token
}

/// Parse the `:` or `[` that opens a list element.
///
/// Running out of input here is E101; any other token is E100.
fn delimiter<'t, 'src>(
    input: &mut Input<'t, 'src>,
    ty: ElementType,
    op: char,
    expected: &str,
    start_offset: usize,
) -> IResult<()> {
    let at_end = input.eof_offset() == 0;
    operator(input, op).map_err(|_| {
        let code = if at_end {
            ErrorCode::E101
        } else {
            ErrorCode::E100
        };
        failure(
            code,
            format!("{expected} `{ty}`"),
            Some("list elements are written `Type: [ arguments ]`"),
            start_offset,
        )
    })?;
    Ok(())
}

/// Parse `: [ arguments ]`, dropping `,` separators
fn list<'t, 'src>(
    input: &mut Input<'t, 'src>,
    ty: ElementType,
    start_offset: usize,
) -> IResult<Vec<&'t Token<'src>>> {
    delimiter(input, ty, ':', "expected `:` after", start_offset)?;
    delimiter(
        input,
        ty,
        '[',
        "expected `[` to open the argument list of",
        start_offset,
    )?;

    let contents = list_contents(input)?;

    operator(input, ']').map_err(|_| {
        failure(
            ErrorCode::E104,
            format!("`{ty}` argument list is never closed"),
            Some("add `]` after the last argument"),
            start_offset,
        )
    })?;

    Ok(contents
        .into_iter()
        .filter(|token| !token.is_operator(','))
        .collect())
}

/// Parse the arguments that `shape` prescribes
fn arguments<'t, 'src>(
    input: &mut Input<'t, 'src>,
    ty: ElementType,
    shape: Shape,
    start_offset: usize,
) -> IResult<Vec<&'t Token<'src>>> {
    match shape {
        Shape::NoArgs => Ok(Vec::new()),
        Shape::Single(_) => {
            operator(input, ':').map_err(|_| {
                failure(
                    ErrorCode::E103,
                    format!("expected `:` and one argument after `{ty}`"),
                    Some("single-argument elements are written `Type: value`"),
                    start_offset,
                )
            })?;
            let value = input.next_token().ok_or_else(|| {
                failure(
                    ErrorCode::E103,
                    format!("`{ty}` is missing its argument"),
                    Some("single-argument elements are written `Type: value`"),
                    start_offset,
                )
            })?;
            Ok(vec![value])
        }
        Shape::Fixed { count, .. } => {
            let arguments = list(input, ty, start_offset)?;
            if arguments.len() != count {
                return Err(failure(
                    ErrorCode::E103,
                    format!(
                        "`{ty}` takes exactly {count} arguments, found {}",
                        arguments.len()
                    ),
                    None,
                    start_offset,
                ));
            }
            Ok(arguments)
        }
        Shape::Variable { multiplier, .. } => {
            let arguments = list(input, ty, start_offset)?;
            if arguments.len() % multiplier != 0 {
                return Err(failure(
                    ErrorCode::E103,
                    format!(
                        "`{ty}` arguments come in groups of {multiplier}, found {}",
                        arguments.len()
                    ),
                    Some("each Brush stroke is a diameter followed by its digit string"),
                    start_offset,
                ));
            }
            Ok(arguments)
        }
    }
}

/// Parse one element
pub(crate) fn element<'t, 'src>(input: &mut Input<'t, 'src>) -> IResult<ElementData<'t, 'src>> {
    let start_offset = input.eof_offset();

    let name = input.next_token().ok_or_else(|| {
        failure(
            ErrorCode::E101,
            "expected an element, found end of input",
            None,
            start_offset,
        )
    })?;
    let ty = ElementType::from_name(name.as_str()).ok_or_else(|| {
        failure(
            ErrorCode::E102,
            format!("unknown element type `{name}`"),
            Some("known element types are Data, Pencil, Brush, Affine and Marker"),
            start_offset,
        )
    })?;

    let arguments = arguments(input, ty, ty.shape(), start_offset)?;
    Ok(ElementData {
        ty,
        name,
        arguments,
    })
}

/// Convert an element parser error into a [`Diagnostic`].
///
/// The primary label covers the tokens consumed by the failing element, or
/// the token it stopped at when nothing was consumed.
pub(crate) fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[Token<'_>],
    current_remaining: usize,
) -> Diagnostic {
    let context = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => Some(e),
        ErrMode::Incomplete(_) => None,
    };

    let start_remaining = context.and_then(|e| {
        e.context().find_map(|ctx| match ctx {
            Context::StartOffset(n) => Some(*n),
            Context::Failure { .. } => None,
        })
    });
    let end_offset = tokens.len() - current_remaining;
    let start_offset = start_remaining.map_or(end_offset, |r| tokens.len() - r);

    let span = if start_offset < end_offset {
        tokens[start_offset].span().union(tokens[end_offset - 1].span())
    } else if let Some(token) = tokens.get(end_offset) {
        token.span()
    } else {
        tokens.last().map(Token::span).unwrap_or_default()
    };

    let failure = context.and_then(|e| {
        e.context().find_map(|ctx| match ctx {
            Context::Failure {
                code,
                message,
                help,
            } => Some((*code, message.clone(), *help)),
            Context::StartOffset(_) => None,
        })
    });

    match failure {
        Some((code, message, help)) => {
            let diag = Diagnostic::error(message)
                .with_code(code)
                .with_label(span, code.description());
            match help {
                Some(help) => diag.with_help(help),
                None => diag,
            }
        }
        None => Diagnostic::error("unexpected token or end of input")
            .with_code(ErrorCode::E100)
            .with_label(span, ErrorCode::E100.description()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_one(source: &str) -> Result<(ElementType, Vec<String>), Diagnostic> {
        let tokens = tokenize(source);
        let mut input = TokenSlice::new(&tokens);
        match element(&mut input) {
            Ok(data) => Ok((
                data.ty(),
                data.arguments()
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            )),
            Err(e) => Err(convert_error(e, &tokens, input.eof_offset())),
        }
    }

    fn error_code(source: &str) -> Option<ErrorCode> {
        parse_one(source).err().and_then(|d| d.code())
    }

    #[test]
    fn test_variable_list() {
        let (ty, args) = parse_one("Pencil: [000000 001001]").unwrap();
        assert_eq!(ty, ElementType::Pencil);
        assert_eq!(args, ["000000", "001001"]);
    }

    #[test]
    fn test_empty_variable_list() {
        let (ty, args) = parse_one("Data:[]").unwrap();
        assert_eq!(ty, ElementType::Data);
        assert!(args.is_empty());
    }

    #[test]
    fn test_commas_separate_list_arguments() {
        let (_, args) = parse_one("Brush:[05,000000005f]").unwrap();
        assert_eq!(args, ["05", "000000005f"]);

        let (_, args) = parse_one("Affine:[1,0,0,0,1,0,0,0,1]").unwrap();
        assert_eq!(args.len(), 9);
    }

    #[test]
    fn test_single_argument() {
        let (ty, args) = parse_one("Marker: (hello (world))").unwrap();
        assert_eq!(ty, ElementType::Marker);
        assert_eq!(args, ["(hello (world))"]);
    }

    #[test]
    fn test_single_argument_is_not_validated_here() {
        let (_, args) = parse_one("Marker: plain").unwrap();
        assert_eq!(args, ["plain"]);
    }

    #[test]
    fn test_unknown_element_type() {
        let err = parse_one("Mask: [1]").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
        assert_eq!(err.message(), "unknown element type `Mask`");
        assert_eq!(err.primary_span(), Some(Span::new(0..4)));
    }

    #[test]
    fn test_fixed_count_mismatch() {
        assert_eq!(error_code("Affine: [1 0 0]"), Some(ErrorCode::E103));
        assert_eq!(
            error_code("Affine: [1 0 0 0 1 0 0 0 1 0]"),
            Some(ErrorCode::E103)
        );
    }

    #[test]
    fn test_odd_brush_argument_count() {
        let err = parse_one("Brush: [05 00000000 06]").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E103));
        assert_eq!(err.primary_span(), Some(Span::new(0..23)));
    }

    #[test]
    fn test_single_argument_missing_colon_or_value() {
        assert_eq!(error_code("Marker (hi)"), Some(ErrorCode::E103));
        assert_eq!(error_code("Marker:"), Some(ErrorCode::E103));
        assert_eq!(error_code("Marker"), Some(ErrorCode::E103));
    }

    #[test]
    fn test_list_missing_delimiters() {
        assert_eq!(error_code("Data [000000]"), Some(ErrorCode::E100));
        assert_eq!(error_code("Data: 000000"), Some(ErrorCode::E100));
        assert_eq!(error_code("Data"), Some(ErrorCode::E101));
        assert_eq!(error_code("Pencil:"), Some(ErrorCode::E101));
    }

    #[test]
    fn test_unterminated_list() {
        let err = parse_one("Pencil: [000000 111111").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E104));
        assert_eq!(err.primary_span(), Some(Span::new(0..22)));
    }

    #[test]
    fn test_no_args_shape_consumes_nothing() {
        let tokens = tokenize("Pencil: [0]");
        let mut input = TokenSlice::new(&tokens);
        let args = arguments(&mut input, ElementType::Pencil, Shape::NoArgs, 0).unwrap();
        assert!(args.is_empty());
        assert_eq!(input.eof_offset(), tokens.len());
    }

    #[test]
    fn test_element_span() {
        let tokens = tokenize("Data: [000000 111111]");
        let mut input = TokenSlice::new(&tokens);
        let data = element(&mut input).unwrap();
        assert_eq!(data.name().as_str(), "Data");
        assert_eq!(data.span(), Span::new(0..20));
    }

    #[test]
    fn test_elements_parse_back_to_back() {
        let tokens = tokenize("Pencil:[000000] Affine:[1 0 0 0 1 0 0 0 1] Marker:(x)");
        let mut input = TokenSlice::new(&tokens);
        let types: Vec<_> = std::iter::from_fn(|| element(&mut input).ok())
            .map(|data| data.ty())
            .collect();
        assert_eq!(
            types,
            [ElementType::Pencil, ElementType::Affine, ElementType::Marker]
        );
    }
}
