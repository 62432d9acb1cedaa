//! Integer text conversion in any base from 2 to 36.
//!
//! This is the numeric text layer used by the `algos` tools: it turns plain
//! integer text into fixed-width integers and back again.
//!
//! - Digits above 9 are letters and are case-insensitive on input.
//! - Output always uses uppercase letters.
//! - A leading `-` (or `+`) is accepted on input.
//! - Malformed input is rejected with a [`RadixError`], never truncated.
//!
//! # Example
//!
//! ```
//! use algos_radix::{Base, format, parse};
//!
//! let value: i32 = parse("-ff", Base::HEX).unwrap();
//! assert_eq!(value, -255);
//! assert_eq!(format(value, Base::HEX), "-FF");
//! assert_eq!(format(0u8, Base::BINARY), "0");
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Errors produced while parsing integer text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RadixError {
    #[error("base {0} is out of range (expected 2..=36)")]
    InvalidBase(u32),

    #[error("cannot parse an integer from empty text")]
    Empty,

    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("number too large to fit in target type")]
    PosOverflow,

    #[error("number too small to fit in target type")]
    NegOverflow,
}

/// A numeric base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEX: Base = Base(16);

    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub fn new(radix: u32) -> Result<Self, RadixError> {
        if (Self::MIN..=Self::MAX).contains(&radix) {
            Ok(Base(radix))
        } else {
            Err(RadixError::InvalidBase(radix))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Base {
    fn default() -> Self {
        Base::DECIMAL
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for Base {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let radix: u32 = parse(s, Base::DECIMAL)?;
        Base::new(radix)
    }
}

mod private {
    pub trait Sealed {}
}

/// Integer types that can be converted to and from text.
///
/// Every implementor fits losslessly in an `i128`, which is the width used
/// while accumulating digits. This is a sealed trait.
pub trait Radix: private::Sealed + Copy + Into<i128> + TryFrom<i128> {}

macro_rules! impl_radix {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Radix for $ty {}
        )*
    };
}

impl_radix!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Parses `text` as an integer written in `base`.
///
/// # Errors
///
/// - [`RadixError::Empty`] if there are no digits after the optional sign.
/// - [`RadixError::InvalidDigit`] for any character that is not a digit in `base`.
/// - [`RadixError::PosOverflow`] / [`RadixError::NegOverflow`] if the value
///   does not fit in `T`.
pub fn parse<T: Radix>(text: &str, base: Base) -> Result<T, RadixError> {
    let (negative, digits, offset) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..], 1),
        Some(b'+') => (false, &text[1..], 1),
        _ => (false, text, 0),
    };
    if digits.is_empty() {
        return Err(RadixError::Empty);
    }

    // Any magnitude past u64::MAX overflows every supported type, so stopping
    // there keeps the accumulator far away from the i128 limits.
    const LIMIT: i128 = u64::MAX as i128 + 1;

    let mut magnitude: i128 = 0;
    let mut saturated = false;
    for (position, digit) in digits.char_indices() {
        let value = digit
            .to_digit(base.get())
            .ok_or(RadixError::InvalidDigit {
                digit,
                position: position + offset,
            })?;
        if !saturated {
            magnitude = magnitude * base.get() as i128 + value as i128;
            saturated = magnitude > LIMIT;
        }
    }

    let overflow = if negative {
        RadixError::NegOverflow
    } else {
        RadixError::PosOverflow
    };
    if saturated {
        return Err(overflow);
    }
    let value = if negative { -magnitude } else { magnitude };
    T::try_from(value).map_err(|_| overflow)
}

/// Formats `value` in `base`, using uppercase letters for digits above 9.
///
/// The output is accepted by [`parse`] and yields `value` back.
pub fn format<T: Radix>(value: T, base: Base) -> String {
    let value: i128 = value.into();
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return String::from("0");
    }

    let radix = base.get() as u128;
    // 64 binary digits plus a sign.
    let mut buf = [0u8; 65];
    let mut at = buf.len();
    while magnitude > 0 {
        let digit = (magnitude % radix) as u32;
        at -= 1;
        buf[at] = char::from_digit(digit, base.get())
            .expect("digit is below the base")
            .to_ascii_uppercase() as u8;
        magnitude /= radix;
    }
    if value < 0 {
        at -= 1;
        buf[at] = b'-';
    }

    buf[at..].iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse::<i32>("0", Base::DECIMAL), Ok(0));
        assert_eq!(parse::<i32>("42", Base::DECIMAL), Ok(42));
        assert_eq!(parse::<i32>("-42", Base::DECIMAL), Ok(-42));
        assert_eq!(parse::<i32>("+7", Base::DECIMAL), Ok(7));
        assert_eq!(parse::<u32>("-0", Base::DECIMAL), Ok(0));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse::<u32>("ff", Base::HEX), Ok(255));
        assert_eq!(parse::<u32>("FF", Base::HEX), Ok(255));
        assert_eq!(parse::<u32>("fF", Base::HEX), Ok(255));
        assert_eq!(parse::<i64>("z", Base::new(36).unwrap()), Ok(35));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse::<i32>("", Base::DECIMAL), Err(RadixError::Empty));
        assert_eq!(parse::<i32>("-", Base::DECIMAL), Err(RadixError::Empty));
        assert_eq!(
            parse::<i32>("12a", Base::DECIMAL),
            Err(RadixError::InvalidDigit {
                digit: 'a',
                position: 2
            })
        );
        assert_eq!(
            parse::<i32>("-1 2", Base::DECIMAL),
            Err(RadixError::InvalidDigit {
                digit: ' ',
                position: 2
            })
        );
        assert_eq!(
            parse::<u8>("2", Base::BINARY),
            Err(RadixError::InvalidDigit {
                digit: '2',
                position: 0
            })
        );
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(parse::<u8>("255", Base::DECIMAL), Ok(255));
        assert_eq!(parse::<u8>("256", Base::DECIMAL), Err(RadixError::PosOverflow));
        assert_eq!(parse::<i8>("-128", Base::DECIMAL), Ok(-128));
        assert_eq!(parse::<i8>("-129", Base::DECIMAL), Err(RadixError::NegOverflow));
        assert_eq!(parse::<u32>("-1", Base::DECIMAL), Err(RadixError::NegOverflow));
        assert_eq!(
            parse::<u64>("99999999999999999999999999999999999999999999", Base::DECIMAL),
            Err(RadixError::PosOverflow)
        );
    }

    #[test]
    fn test_format() {
        assert_eq!(format(0i32, Base::DECIMAL), "0");
        assert_eq!(format(-255i32, Base::HEX), "-FF");
        assert_eq!(format(5u8, Base::BINARY), "101");
        assert_eq!(format(i64::MIN, Base::DECIMAL), i64::MIN.to_string());
        assert_eq!(format(u64::MAX, Base::HEX), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn test_format_every_digit() {
        let base = Base::new(36).unwrap();
        for digit in 0..36u8 {
            let expected = char::from_digit(digit.into(), 36)
                .unwrap()
                .to_ascii_uppercase()
                .to_string();
            assert_eq!(format(digit, base), expected);
            assert_eq!(parse::<u8>(&expected, base), Ok(digit));
        }
        assert_eq!(format(-35i8, base), "-Z");
    }

    #[test]
    fn test_format_parse_extremes() {
        for base in [2, 3, 8, 10, 16, 36] {
            let base = Base::new(base).unwrap();
            for value in [i64::MIN, -1, 0, 1, i64::MAX] {
                assert_eq!(parse::<i64>(&format(value, base), base), Ok(value));
            }
            assert_eq!(parse::<u64>(&format(u64::MAX, base), base), Ok(u64::MAX));
        }
    }

    #[test]
    fn test_base_validation() {
        assert_eq!(Base::new(1), Err(RadixError::InvalidBase(1)));
        assert_eq!(Base::new(37), Err(RadixError::InvalidBase(37)));
        assert_eq!("16".parse::<Base>(), Ok(Base::HEX));
        assert_eq!("40".parse::<Base>(), Err(RadixError::InvalidBase(40)));
        assert_eq!(Base::default(), Base::DECIMAL);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RadixError::InvalidDigit {
                digit: 'x',
                position: 3
            }
            .to_string(),
            "invalid digit 'x' at position 3"
        );
        assert_eq!(
            RadixError::InvalidBase(99).to_string(),
            "base 99 is out of range (expected 2..=36)"
        );
    }
}
