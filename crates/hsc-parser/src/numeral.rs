//! Numeral decoders.
//!
//! Sketch documents encode coordinates and pressure as fixed-width base-36
//! digit groups and transform coefficients as plain decimal numbers:
//!
//! - [`base36`] decodes exactly `N` base-36 digits into an integer type, with
//!   two's-complement-style wraparound for signed targets.
//! - [`base10_int`] decodes an optionally signed decimal integer.
//! - [`base10_float`] decodes an optionally signed decimal with at most one
//!   `.` and no exponent.
//!
//! The decoders reject malformed input with a [`NumeralError`] instead of
//! trusting the caller to have validated it.

use thiserror::Error;

/// Errors produced by the numeral decoders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("expected {expected} digits, found {found}")]
    Width { expected: usize, found: usize },

    #[error("`{0}` is not a valid digit")]
    InvalidDigit(char),

    #[error("numeral has no digits")]
    Empty,

    #[error("numeral is out of range")]
    Overflow,
}

/// Integer types that fixed-width base-36 numerals can decode into.
pub trait Base36Target: Copy {
    /// Bit width of the type.
    const BITS: u32;
    /// Whether values at or above half the numeral range wrap to negative.
    const SIGNED: bool;

    /// Converts an accumulated value already known to fit.
    fn from_accumulated(value: i128) -> Self;
}

macro_rules! impl_base36_target {
    ($($ty:ty => $signed:expr),* $(,)?) => {
        $(
            impl Base36Target for $ty {
                const BITS: u32 = <$ty>::BITS;
                const SIGNED: bool = $signed;

                fn from_accumulated(value: i128) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_base36_target! {
    i8 => true,
    u8 => false,
    i16 => true,
    u16 => false,
    i32 => true,
    u32 => false,
    i64 => true,
    u64 => false,
}

/// Decodes exactly `N` base-36 digits into `T`.
///
/// Digits are `0`-`9` then `a`-`z` (case-insensitive) for 10 through 35. For
/// a signed `T`, results at or above `36^N / 2` have `36^N` subtracted, so
/// the upper half of the digit range maps onto negative values.
///
/// `36^N` must not exceed `2^T::BITS`; this is checked at compile time.
///
/// # Examples
///
/// ```
/// # use hsc_parser::numeral::base36;
/// assert_eq!(base36::<i16, 3>("00z"), Ok(35));
/// assert_eq!(base36::<i16, 3>("zzz"), Ok(-1));
/// assert_eq!(base36::<u16, 2>("ZZ"), Ok(1295));
/// ```
pub fn base36<T: Base36Target, const N: usize>(text: &str) -> Result<T, NumeralError> {
    const {
        assert!(
            36u128.pow(N as u32) <= 1u128 << T::BITS,
            "numeral width does not fit the target type"
        );
    }

    let found = text.chars().count();
    if found != N {
        return Err(NumeralError::Width { expected: N, found });
    }

    let modulus = 36i128.pow(N as u32);
    let mut result = 0i128;
    for c in text.chars() {
        let digit = c.to_digit(36).ok_or(NumeralError::InvalidDigit(c))?;
        result = 36 * result + i128::from(digit);
    }

    if T::SIGNED && result >= modulus / 2 {
        result -= modulus;
    }
    Ok(T::from_accumulated(result))
}

/// Decodes an optionally signed decimal integer.
///
/// # Examples
///
/// ```
/// # use hsc_parser::numeral::base10_int;
/// assert_eq!(base10_int("+42"), Ok(42));
/// assert_eq!(base10_int("-7"), Ok(-7));
/// assert!(base10_int("4.2").is_err());
/// ```
pub fn base10_int(text: &str) -> Result<i64, NumeralError> {
    let (negative, digits) = split_sign(text);
    let magnitude = decimal_digits(digits)?;
    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or(NumeralError::Overflow)
}

/// Decodes an optionally signed decimal number with an optional fraction.
///
/// The integer and fractional digits are decoded separately, the fraction
/// scaled by `10^-digits`, and the sign applied once to the sum. Exponent
/// notation is not accepted.
///
/// # Examples
///
/// ```
/// # use hsc_parser::numeral::base10_float;
/// assert_eq!(base10_float("-1.5"), Ok(-1.5));
/// assert_eq!(base10_float(".25"), Ok(0.25));
/// assert_eq!(base10_float("3"), Ok(3.0));
/// assert!(base10_float("1e5").is_err());
/// ```
pub fn base10_float(text: &str) -> Result<f32, NumeralError> {
    let (negative, body) = split_sign(text);

    let magnitude = match body.split_once('.') {
        None => decimal_digits(body)? as f64,
        Some((int_part, frac_part)) => {
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(NumeralError::Empty);
            }

            let mut value = 0.0f64;
            if !int_part.is_empty() {
                value += decimal_digits(int_part)? as f64;
            }
            if !frac_part.is_empty() {
                let scale = i32::try_from(frac_part.len()).map_err(|_| NumeralError::Overflow)?;
                value += decimal_digits(frac_part)? as f64 * 10f64.powi(-scale);
            }
            value
        }
    };

    let value = if negative { -magnitude } else { magnitude };
    Ok(value as f32)
}

/// Strips one leading `+` or `-`, reporting whether it was a minus.
fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn decimal_digits(digits: &str) -> Result<u64, NumeralError> {
    if digits.is_empty() {
        return Err(NumeralError::Empty);
    }

    digits.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(10).ok_or(NumeralError::InvalidDigit(c))?;
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(digit)))
            .ok_or(NumeralError::Overflow)
    })
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Encodes `value` as exactly three base-36 digits, wrapping negatives.
    fn encode_base36_3(value: i16) -> String {
        let mut n = i32::from(value).rem_euclid(36 * 36 * 36);
        let mut digits = ['0'; 3];
        for slot in digits.iter_mut().rev() {
            let digit = u32::try_from(n % 36).expect("digit is below 36");
            *slot = char::from_digit(digit, 36).expect("digit is below 36");
            n /= 36;
        }
        digits.iter().collect()
    }

    fn check_base36_roundtrip(value: i16) -> Result<(), TestCaseError> {
        let text = encode_base36_3(value);
        prop_assert_eq!(base36::<i16, 3>(&text), Ok(value));
        prop_assert_eq!(base36::<i16, 3>(&text.to_uppercase()), Ok(value));
        Ok(())
    }

    fn check_base36_is_deterministic(text: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(base36::<i16, 3>(text), base36::<i16, 3>(text));
        Ok(())
    }

    fn check_base10_int_roundtrip(value: i64) -> Result<(), TestCaseError> {
        prop_assert_eq!(base10_int(&value.to_string()), Ok(value));
        Ok(())
    }

    proptest! {
        #[test]
        fn base36_roundtrip(value in -23328i16..=23327) {
            check_base36_roundtrip(value)?;
        }

        #[test]
        fn base36_is_deterministic(text in "[0-9a-zA-Z]{3}") {
            check_base36_is_deterministic(&text)?;
        }

        #[test]
        fn base10_int_roundtrip(value in any::<i64>()) {
            check_base10_int_roundtrip(value)?;
        }
    }
}
