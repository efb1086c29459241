// ============================================================================
// Num Kinds
// Variant selection and per-variant factories
// ============================================================================

use super::nan::NAN;
use super::num::Num;
use super::value::Value;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A primitive number handed to a [`NumKind`] factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    Decimal(Decimal),
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

/// The variants a [`Num`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumKind {
    /// `rust_decimal` backed values
    Decimal,
    /// `f64` backed values
    Double,
    /// The undefined sentinel
    NaN,
}

impl NumKind {
    /// The kind of an existing value.
    pub const fn of(num: &Num) -> NumKind {
        match num {
            Num::Defined(Value::Decimal(_)) => NumKind::Decimal,
            Num::Defined(Value::Double(_)) => NumKind::Double,
            Num::NaN => NumKind::NaN,
        }
    }

    /// Build a value of this kind.
    ///
    /// `NumKind::NaN` ignores its input and always returns the sentinel: use
    /// `Decimal` or `Double` to convert real numbers.
    pub fn from_number(self, value: impl Into<Number>) -> Num {
        (self.function())(value.into())
    }

    /// Constructor function for this kind, for pipelines that build values
    /// without branching on the variant.
    pub fn function(self) -> fn(Number) -> Num {
        match self {
            NumKind::Decimal => decimal_from_number,
            NumKind::Double => double_from_number,
            NumKind::NaN => nan_from_number,
        }
    }
}

fn decimal_from_number(value: Number) -> Num {
    match value {
        Number::Int(i) => Num::decimal(i),
        Number::Float(x) => Decimal::from_f64(x).map_or(NAN, Num::from_decimal),
        Number::Decimal(d) => Num::from_decimal(d),
    }
}

fn nan_from_number(_value: Number) -> Num {
    NAN
}

fn double_from_number(value: Number) -> Num {
    match value {
        Number::Int(i) => Num::double(i as f64),
        Number::Float(x) => Num::double(x),
        Number::Decimal(d) => d.to_f64().map_or(NAN, Num::double),
    }
}
