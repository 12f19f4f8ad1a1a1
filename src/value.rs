//! Value Parser: normalizes heterogeneous numeric input into the canonical
//! sign / integer / decimal-digits triple the rest of the pipeline consumes.

use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number format: `{0}`")]
    InvalidNumberFormat(String),
    #[error("unsupported input: {0}")]
    UnsupportedInput(&'static str),
}

/// Accepted input shapes. The enum is closed: anything convertible lands in
/// one of these four, so type-level rejection happens at compile time.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i128),
    Float(f64),
    Big(BigInt),
    Str(String),
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(v: $t) -> Self {
                    Value::Int(v as i128)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<u128> for Value {
    #[inline]
    fn from(v: u128) -> Self {
        Value::Big(BigInt::from(v))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<BigInt> for Value {
    #[inline]
    fn from(v: BigInt) -> Self {
        Value::Big(v)
    }
}

impl From<BigUint> for Value {
    #[inline]
    fn from(v: BigUint) -> Self {
        Value::Big(BigInt::from(v))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// The canonical parsed input. Sign lives only in `negative`; the integer
/// part is unsigned; decimal digits keep their leading zeros verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericValue {
    pub negative: bool,
    pub integer: BigUint,
    pub decimals: Option<String>,
}

impl NumericValue {
    /// True when the entire value, integer part and every decimal digit,
    /// is zero. The sign of such a value is ignored downstream.
    pub fn is_zero(&self) -> bool {
        self.integer == BigUint::from(0u8)
            && self
                .decimals
                .as_deref()
                .is_none_or(|d| d.bytes().all(|b| b == b'0'))
    }
}

/// Parse any accepted input into a [`NumericValue`].
///
/// Floats go through their shortest round-trip decimal rendering, so their
/// fractional part is subject to binary float precision; strings and big
/// integers are the exact path.
pub fn parse(value: Value) -> Result<NumericValue, ParseError> {
    match value {
        Value::Int(i) => Ok(NumericValue {
            negative: i < 0,
            integer: BigUint::from(i.unsigned_abs()),
            decimals: None,
        }),
        Value::Big(b) => {
            let (sign, magnitude) = b.into_parts();
            Ok(NumericValue {
                negative: sign == Sign::Minus,
                integer: magnitude,
                decimals: None,
            })
        }
        Value::Float(f) => {
            if f.is_nan() {
                return Err(ParseError::InvalidNumberFormat("NaN".to_string()));
            }
            if f.is_infinite() {
                return Err(ParseError::UnsupportedInput("non-finite float"));
            }
            parse_str(&format!("{f}"))
        }
        Value::Str(s) => parse_str(s.trim()),
    }
}

/// Grammar: `-? digits ( "." digits )?`. Leading zeros in the integer part
/// are stripped; leading zeros in the decimal part are significant.
fn parse_str(s: &str) -> Result<NumericValue, ParseError> {
    let bad = || ParseError::InvalidNumberFormat(s.to_string());

    let (negative, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s),
    };
    let (int_digits, dec_digits) = match rest.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (rest, None),
    };
    if int_digits.is_empty() || !int_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    if let Some(d) = dec_digits
        && (d.is_empty() || !d.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(bad());
    }

    let trimmed = int_digits.trim_start_matches('0');
    let integer = if trimmed.is_empty() {
        BigUint::from(0u8)
    } else {
        trimmed.parse::<BigUint>().map_err(|_| bad())?
    };

    Ok(NumericValue {
        negative,
        integer,
        decimals: dec_digits.map(str::to_string),
    })
}
