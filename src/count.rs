//! The count a template is rendered for

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A count, integral or fractional.
///
/// Branch selection compares numerically, so `Count::from(1.0)` is singular
/// exactly like `Count::from(1)`. No range checks are made: negative and
/// fractional counts simply fall through to the plural form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Count {
    Int(i128),
    Float(f64),
}

impl Count {
    /// Exactly zero
    pub fn is_zero(&self) -> bool {
        match *self {
            Count::Int(n) => n == 0,
            Count::Float(n) => n == 0.0,
        }
    }

    /// Exactly one
    pub fn is_one(&self) -> bool {
        match *self {
            Count::Int(n) => n == 1,
            Count::Float(n) => n == 1.0,
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Int(n) => write!(f, "{}", n),
            // f64's Display already prints 2.0 as "2" and 1.5 as "1.5"
            Count::Float(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! count_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Count {
                fn from(n: $ty) -> Self {
                    Count::Int(n as i128)
                }
            }
        )*
    };
}

count_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl From<f64> for Count {
    fn from(n: f64) -> Self {
        Count::Float(n)
    }
}

impl From<f32> for Count {
    fn from(n: f32) -> Self {
        Count::Float(n as f64)
    }
}

/// Error for count text that is not a number
#[derive(Debug, Error, PartialEq)]
#[error("invalid count '{input}': expected an integer or decimal number")]
pub struct ParseCountError {
    pub input: String,
}

impl FromStr for Count {
    type Err = ParseCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i128>() {
            return Ok(Count::Int(n));
        }
        trimmed
            .parse::<f64>()
            .map(Count::Float)
            .map_err(|_| ParseCountError {
                input: s.to_string(),
            })
    }
}
