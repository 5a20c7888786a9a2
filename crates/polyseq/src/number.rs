//! Tagged numeric union used to validate constructor arguments.
//!
//! Rust callers normally pass plain integers or floats. The `Bool` and `Complex`
//! variants exist so that values arriving from loosely typed sources (CLI, bindings,
//! config files) are rejected with a type error instead of being coerced.

use nalgebra::Complex;

use crate::error::SequenceError;

/// A numeric argument of unknown kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Bool(bool),
    Complex(Complex<f64>),
}

impl Number {
    /// Real value of an `Int` or `Float`; `Bool` and `Complex` are type errors.
    pub fn as_real(&self, what: &str) -> Result<f64, SequenceError> {
        match *self {
            Number::Int(i) => Ok(i as f64),
            Number::Float(x) => Ok(x),
            Number::Bool(b) => Err(SequenceError::invalid_type(format!(
                "{what} must not be a boolean (got {b})"
            ))),
            Number::Complex(z) => Err(SequenceError::invalid_type(format!(
                "{what} must not be complex (got {z})"
            ))),
        }
    }

    /// Integral value; floats are accepted only when finite with no fractional part.
    pub fn as_count(&self, what: &str) -> Result<i64, SequenceError> {
        match *self {
            Number::Int(i) => Ok(i),
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => {
                if x < i64::MIN as f64 || x > i64::MAX as f64 {
                    return Err(SequenceError::invalid_value(format!(
                        "{what}={x} is out of range"
                    )));
                }
                Ok(x as i64)
            }
            Number::Float(x) => Err(SequenceError::invalid_type(format!(
                "{what} must be an integer (got {x})"
            ))),
            other => other.as_real(what).map(|x| x as i64),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            #[inline]
            fn from(v: $t) -> Self {
                Number::Int(i64::from(v))
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    #[inline]
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<bool> for Number {
    #[inline]
    fn from(v: bool) -> Self {
        Number::Bool(v)
    }
}

impl From<Complex<f64>> for Number {
    #[inline]
    fn from(v: Complex<f64>) -> Self {
        Number::Complex(v)
    }
}
