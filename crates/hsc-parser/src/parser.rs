//! Document parser.
//!
//! Turns a token sequence into a [`Sketch`]. A document is a sequence of
//! statements separated by `,` and ended by `;` or the end of input:
//!
//! ```text
//! Pencil: [000000 00a00a] Affine: [1 0 0 0 1 0 0 0 1], Marker: (done);
//! └──────── payload ────┘ └─────── modifier ────────┘  └─ payload ──┘
//! ```
//!
//! The first element of a statement is its payload; every element after it
//! is a modifier. A payload whose type names an enabled grouping kind also
//! produces a grouping [`Element`] carrying the statement's atoms and
//! modifiers. The flat atom list receives each statement's atoms at its
//! front, so the last statement's atoms come first.

use hsc_core::{Affine, Atom, Element, GroupKind, Marker, Point, Sketch, Stroke};
use log::{debug, trace, warn};
use winnow::stream::{Stream, TokenSlice};

use crate::{
    chars,
    element::{self, ElementData, Input},
    error::{Diagnostic, ErrorCode},
    grammar::ElementType,
    numeral::{self, NumeralError},
    span::Span,
    tokens::Token,
};

/// Digits per point of a Data or Pencil digit string: x and y.
const POINT_DIGITS: usize = 6;
/// Digits per point of a Brush digit string: x, y and pressure.
const BRUSH_POINT_DIGITS: usize = 8;
/// Pen diameter of strokes without an explicit one.
const DEFAULT_DIAMETER: u32 = 3;
/// Largest two-digit base-36 pressure value.
const MAX_PRESSURE: f32 = (36 * 36 - 1) as f32;

/// Digit separator with no meaning; `000'000` reads as `000000`.
const DIGIT_SEPARATOR: char = '\'';

/// The `name → kind` lookup the document parser uses to decide which
/// statements are groups.
pub trait GroupLookup {
    /// Returns the grouping kind named `name`, if it is enabled.
    fn group_kind(&self, name: &str) -> Option<GroupKind>;
}

/// Every built-in grouping kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGroups;

impl GroupLookup for BuiltinGroups {
    fn group_kind(&self, name: &str) -> Option<GroupKind> {
        GroupKind::from_name(name)
    }
}

/// Only the listed grouping kinds.
impl GroupLookup for [GroupKind] {
    fn group_kind(&self, name: &str) -> Option<GroupKind> {
        GroupKind::from_name(name).filter(|kind| self.contains(kind))
    }
}

/// Build a [`Sketch`] from a token sequence.
///
/// # Errors
///
/// Returns the [`Diagnostic`] for the first malformed statement. There is no
/// recovery: one bad statement rejects the whole document.
pub fn build_sketch<L>(tokens: &[Token<'_>], groups: &L) -> Result<Sketch, Diagnostic>
where
    L: GroupLookup + ?Sized,
{
    let Some(first) = tokens.first() else {
        return Err(Diagnostic::error("document is empty")
            .with_code(ErrorCode::E101)
            .with_label(Span::default(), "expected at least one statement")
            .with_help("a document ends with `;`, e.g. `Marker: (hello);`"));
    };
    if first.is_operator(';') {
        debug!("Document holds only a terminator");
        return Ok(Sketch::new());
    }

    let mut input = TokenSlice::new(tokens);
    let mut sketch = Sketch::new();
    let mut statements = 0usize;

    while input.eof_offset() > 0 {
        let elements = statement(&mut input, tokens)?;
        assemble(&elements, groups, &mut sketch)?;
        statements += 1;

        // The separator; statement() only returns before one or at the end.
        if input.next_token().is_some_and(|token| token.is_operator(';')) {
            break;
        }
    }

    debug!(
        statements,
        elements = sketch.elements().len(),
        atoms = sketch.atoms().len();
        "Sketch built"
    );
    Ok(sketch)
}

/// Parse the elements of one statement, up to but not including its separator.
fn statement<'t, 'src>(
    input: &mut Input<'t, 'src>,
    tokens: &'t [Token<'src>],
) -> Result<Vec<ElementData<'t, 'src>>, Diagnostic> {
    let mut elements = Vec::new();
    while element::peek(input).is_some_and(|token| !token.is_separator()) {
        let data = element::element(input)
            .map_err(|err| element::convert_error(err, tokens, input.eof_offset()))?;
        trace!(element = data.ty().as_str(), arguments = data.arguments().len(); "Parsed element");
        elements.push(data);
    }

    if elements.is_empty() {
        let span = element::peek(input)
            .or_else(|| tokens.last())
            .map(Token::span)
            .unwrap_or_default();
        return Err(Diagnostic::error("statement has no elements")
            .with_code(ErrorCode::E105)
            .with_label(span, "expected an element before this separator")
            .with_help("remove the extra separator"));
    }
    Ok(elements)
}

/// Decode one statement and add its atoms and group to `sketch`.
fn assemble<L>(
    elements: &[ElementData<'_, '_>],
    groups: &L,
    sketch: &mut Sketch,
) -> Result<(), Diagnostic>
where
    L: GroupLookup + ?Sized,
{
    let Some((payload, modifiers)) = elements.split_first() else {
        return Ok(());
    };

    let mut group = groups.group_kind(payload.name().as_str()).map(Element::new);

    let atoms: Vec<Atom> = match payload.ty() {
        ElementType::Data | ElementType::Pencil | ElementType::Brush => strokes(payload)?
            .into_iter()
            .map(Atom::from)
            .collect(),
        ElementType::Marker => vec![marker(payload)?.into()],
        ElementType::Affine => {
            affine(payload)?;
            warn!(
                span:% = payload.span();
                "Affine as the first element of a statement has nothing to transform"
            );
            Vec::new()
        }
    };

    for modifier in modifiers {
        match modifier.ty() {
            ElementType::Affine => {
                let affine = affine(modifier)?;
                match group.as_mut() {
                    Some(group) => group.push_modifier(affine),
                    None => debug!(
                        span:% = modifier.span();
                        "Affine modifier on a statement that is not a group"
                    ),
                }
            }
            other => warn!(
                element = other.as_str(), span:% = modifier.span();
                "Modifier has no effect"
            ),
        }
    }

    debug!(
        payload = payload.ty().as_str(),
        atoms = atoms.len(),
        grouped = group.is_some();
        "Statement assembled"
    );

    if let Some(group) = group {
        sketch.push_element(group.with_atoms(atoms.clone()));
    }
    sketch.prepend_atoms(atoms);
    Ok(())
}

/// Decode the strokes of a Data, Pencil or Brush element.
fn strokes(element: &ElementData<'_, '_>) -> Result<Vec<Stroke>, Diagnostic> {
    let brush = element.ty() == ElementType::Brush;
    let step = if brush { 2 } else { 1 };

    let mut strokes = Vec::new();
    for chunk in element.arguments().chunks_exact(step) {
        let Some((digits, diameter)) = chunk.split_last() else {
            continue;
        };
        let diameter = match diameter.first() {
            Some(token) => numeral::base36::<u32, 2>(token.as_str())
                .map_err(|err| invalid_numeral(element, token, "pen diameter", err))?,
            None => DEFAULT_DIAMETER,
        };
        strokes.push(Stroke::new(diameter, points(element, digits, brush)?));
    }
    Ok(strokes)
}

/// Decode the points of one digit string.
fn points(
    element: &ElementData<'_, '_>,
    token: &Token<'_>,
    brush: bool,
) -> Result<Vec<Point>, Diagnostic> {
    let group_size = if brush {
        BRUSH_POINT_DIGITS
    } else {
        POINT_DIGITS
    };

    let mut points = Vec::new();
    let mut digits = String::with_capacity(group_size);
    for c in token.as_str().chars() {
        if c == DIGIT_SEPARATOR {
            continue;
        }
        if !chars::is_base36(c) {
            return Err(invalid_numeral(
                element,
                token,
                "digit string",
                NumeralError::InvalidDigit(c),
            ));
        }

        digits.push(c);
        if digits.len() == group_size {
            let point = point(&digits, brush)
                .map_err(|err| invalid_numeral(element, token, "digit string", err))?;
            points.push(point);
            digits.clear();
        }
    }

    if !digits.is_empty() {
        return Err(Diagnostic::error(format!(
            "digit string `{token}` ends with {} leftover digits",
            digits.len()
        ))
        .with_code(ErrorCode::E200)
        .with_label(token.span(), ErrorCode::E200.description())
        .with_element(element.name().span(), element.ty())
        .with_help(format!("each point takes exactly {group_size} digits")));
    }
    Ok(points)
}

/// Decode one point from a full group of ASCII digits.
fn point(digits: &str, brush: bool) -> Result<Point, NumeralError> {
    let x = numeral::base36::<i16, 3>(&digits[0..3])?;
    let y = numeral::base36::<i16, 3>(&digits[3..6])?;
    let pressure = if brush {
        f32::from(numeral::base36::<u16, 2>(&digits[6..8])?) / MAX_PRESSURE
    } else {
        1.0
    };
    Ok(Point::new(x, y, pressure))
}

fn marker(element: &ElementData<'_, '_>) -> Result<Marker, Diagnostic> {
    let Some(token) = element.arguments().first() else {
        return Err(Diagnostic::error("marker has no text")
            .with_code(ErrorCode::E201)
            .with_label(element.span(), ErrorCode::E201.description()));
    };

    if !token.is_string() {
        return Err(Diagnostic::error(format!("marker text `{token}` is not parenthesized"))
            .with_code(ErrorCode::E201)
            .with_label(token.span(), ErrorCode::E201.description())
            .with_element(element.name().span(), element.ty())
            .with_help("write the text as `(text)`"));
    }

    let text = token.as_str();
    Ok(Marker::new(&text[1..text.len() - 1]))
}

/// Decode the nine row-major coefficients of an Affine element.
fn affine(element: &ElementData<'_, '_>) -> Result<Affine, Diagnostic> {
    let mut matrix = [0.0f32; 9];
    for (slot, token) in matrix.iter_mut().zip(element.arguments()) {
        *slot = numeral::base10_float(token.as_str())
            .map_err(|err| invalid_numeral(element, token, "coefficient", err))?;
    }
    Ok(Affine::new(matrix))
}

fn invalid_numeral(
    element: &ElementData<'_, '_>,
    token: &Token<'_>,
    what: &str,
    err: NumeralError,
) -> Diagnostic {
    Diagnostic::error(format!("invalid {what} `{token}`: {err}"))
        .with_code(ErrorCode::E202)
        .with_label(token.span(), ErrorCode::E202.description())
        .with_element(element.name().span(), element.ty())
}
