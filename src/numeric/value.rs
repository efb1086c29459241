// ============================================================================
// Defined Values
// The concrete representations a defined Num can hold
// ============================================================================

use super::errors::{NumError, NumResult};
use super::num::Num;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use std::cmp::Ordering;
use std::fmt;

/// A finite, representable quantity.
///
/// `Decimal` is backed by `rust_decimal` (28 significant digits), `Double`
/// by `f64`. A `Double` is never IEEE NaN or infinite; constructors in
/// [`Num`] route those inputs to the sentinel instead.
///
/// Binary operations keep the representation of the left operand and convert
/// the right one. Every operation that has no representable result
/// (overflow, division by zero, logarithm of a non-positive value, ...)
/// yields [`Num::NaN`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Arbitrary-precision decimal
    Decimal(Decimal),
    /// 64-bit floating point, always finite
    Double(f64),
}

impl Value {
    // ========================================================================
    // Conversion between representations
    // ========================================================================

    /// Convert to a decimal, `None` if the double is outside the decimal range.
    #[inline]
    pub fn to_decimal(self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(d),
            Value::Double(x) => Decimal::from_f64(x),
        }
    }

    /// Lossy conversion to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Value::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
            Value::Double(x) => x,
        }
    }

    /// Lossy conversion to `f32`. Doubles beyond the `f32` range give IEEE NaN.
    #[inline]
    pub fn to_f32(self) -> f32 {
        match self {
            Value::Decimal(d) => d.to_f32().unwrap_or(f32::NAN),
            Value::Double(x) => {
                let narrowed = x as f32;
                if narrowed.is_finite() {
                    narrowed
                } else {
                    f32::NAN
                }
            },
        }
    }

    /// Integral part as `i32`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the integral part does not fit.
    pub fn to_i32(self) -> NumResult<i32> {
        match self {
            Value::Decimal(d) => d.trunc().to_i32().ok_or(NumError::OutOfRange("i32")),
            Value::Double(x) => {
                let t = x.trunc();
                if t >= i32::MIN as f64 && t <= i32::MAX as f64 {
                    Ok(t as i32)
                } else {
                    Err(NumError::OutOfRange("i32"))
                }
            },
        }
    }

    /// Integral part as `i64`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the integral part does not fit.
    pub fn to_i64(self) -> NumResult<i64> {
        match self {
            Value::Decimal(d) => d.trunc().to_i64().ok_or(NumError::OutOfRange("i64")),
            Value::Double(x) => {
                let t = x.trunc();
                // i64::MAX as f64 rounds up to 2^63, which is itself out of range
                if t >= i64::MIN as f64 && t < i64::MAX as f64 {
                    Ok(t as i64)
                } else {
                    Err(NumError::OutOfRange("i64"))
                }
            },
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub(crate) fn plus(self, rhs: Value) -> Num {
        self.combine(rhs, "plus", Decimal::checked_add, |a, b| a + b)
    }

    pub(crate) fn minus(self, rhs: Value) -> Num {
        self.combine(rhs, "minus", Decimal::checked_sub, |a, b| a - b)
    }

    pub(crate) fn multiplied_by(self, rhs: Value) -> Num {
        self.combine(rhs, "multiplied_by", Decimal::checked_mul, |a, b| a * b)
    }

    pub(crate) fn divided_by(self, rhs: Value) -> Num {
        self.combine(rhs, "divided_by", Decimal::checked_div, |a, b| a / b)
    }

    pub(crate) fn remainder(self, rhs: Value) -> Num {
        self.combine(rhs, "remainder", Decimal::checked_rem, |a, b| a % b)
    }

    pub(crate) fn pow_value(self, exponent: Value) -> Num {
        self.combine(exponent, "pow", decimal_powd, |a, b| a.powf(b))
    }

    pub(crate) fn floor(self) -> Num {
        self.map("floor", |d| Some(d.floor()), f64::floor)
    }

    pub(crate) fn ceil(self) -> Num {
        self.map("ceil", |d| Some(d.ceil()), f64::ceil)
    }

    pub(crate) fn abs(self) -> Num {
        self.map("abs", |d| Some(d.abs()), f64::abs)
    }

    pub(crate) fn negate(self) -> Num {
        self.map("negate", |d| Some(-d), |x| -x)
    }

    pub(crate) fn pow(self, n: i64) -> Num {
        self.map("pow", |d| d.checked_powi(n), |x| x.powf(n as f64))
    }

    pub(crate) fn log(self) -> Num {
        self.map(
            "log",
            |d| {
                if d > Decimal::ZERO {
                    d.checked_ln()
                } else {
                    None
                }
            },
            f64::ln,
        )
    }

    pub(crate) fn sqrt(self) -> Num {
        self.map("sqrt", |d| d.sqrt(), f64::sqrt)
    }

    pub(crate) fn sqrt_with_precision(self, precision: u32) -> Num {
        self.map(
            "sqrt",
            |d| d.sqrt().and_then(|root| round_significant(root, precision)),
            f64::sqrt,
        )
    }

    // ========================================================================
    // Sign and ordering
    // ========================================================================

    #[inline]
    pub(crate) fn signum(self) -> Ordering {
        match self {
            Value::Decimal(d) => d.cmp(&Decimal::ZERO),
            Value::Double(x) => x.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        }
    }

    /// Compare two defined values across representations.
    pub(crate) fn compare(self, rhs: Value) -> Ordering {
        match (self, rhs) {
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(&b),
            (Value::Double(a), Value::Double(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            (Value::Decimal(a), Value::Double(b)) => match Decimal::from_f64(b) {
                Some(b) => a.cmp(&b),
                None => self
                    .to_f64()
                    .partial_cmp(&b)
                    .unwrap_or(Ordering::Equal),
            },
            (Value::Double(_), Value::Decimal(_)) => rhs.compare(self).reverse(),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn combine<D, F>(self, rhs: Value, op: &'static str, on_decimal: D, on_double: F) -> Num
    where
        D: FnOnce(Decimal, Decimal) -> Option<Decimal>,
        F: FnOnce(f64, f64) -> f64,
    {
        let result = match self {
            Value::Decimal(a) => rhs
                .to_decimal()
                .and_then(|b| on_decimal(a, b))
                .map(Num::from_decimal),
            Value::Double(a) => Some(Num::double(on_double(a, rhs.to_f64()))),
        };
        self.settle(result, op)
    }

    fn map<D, F>(self, op: &'static str, on_decimal: D, on_double: F) -> Num
    where
        D: FnOnce(Decimal) -> Option<Decimal>,
        F: FnOnce(f64) -> f64,
    {
        let result = match self {
            Value::Decimal(d) => on_decimal(d).map(Num::from_decimal),
            Value::Double(x) => Some(Num::double(on_double(x))),
        };
        self.settle(result, op)
    }

    fn settle(self, result: Option<Num>, op: &'static str) -> Num {
        match result {
            Some(num) if !num.is_nan() => num,
            _ => {
                tracing::trace!(op, value = %self, "no representable result, yielding NaN");
                Num::NaN
            },
        }
    }
}

/// `checked_powd` answers zero for `0^-n` and a signed root for a negative
/// base with a fractional exponent; both have no real result.
fn decimal_powd(base: Decimal, exponent: Decimal) -> Option<Decimal> {
    if exponent.is_zero() {
        return Some(Decimal::ONE);
    }
    if base.is_zero() {
        return if exponent.is_sign_negative() {
            None
        } else {
            Some(Decimal::ZERO)
        };
    }
    if base.is_sign_negative() && exponent != exponent.trunc() {
        return None;
    }
    base.checked_powd(exponent)
}

/// Round to `precision` significant digits. Zero means unlimited precision.
pub(crate) fn round_significant(value: Decimal, precision: u32) -> Option<Decimal> {
    if precision == 0 {
        Some(value)
    } else {
        value.round_sf(precision)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Double(x) => write!(f, "{}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Value {
        Value::Decimal(Decimal::from(n))
    }

    #[test]
    fn test_decimal_arithmetic() {
        assert_eq!(dec(7).plus(dec(5)), Num::decimal(12));
        assert_eq!(dec(7).minus(dec(5)), Num::decimal(2));
        assert_eq!(dec(7).multiplied_by(dec(5)), Num::decimal(35));
        assert_eq!(dec(7).remainder(dec(5)), Num::decimal(2));
        assert_eq!(
            dec(7).divided_by(dec(2)),
            Num::from_decimal(Decimal::new(35, 1))
        );
    }

    #[test]
    fn test_division_by_zero_is_nan() {
        assert!(dec(1).divided_by(dec(0)).is_nan());
        assert!(dec(1).remainder(dec(0)).is_nan());
        assert!(Value::Double(1.0).divided_by(Value::Double(0.0)).is_nan());
        assert!(Value::Double(1.0).remainder(Value::Double(0.0)).is_nan());
    }

    #[test]
    fn test_overflow_is_nan() {
        let max = Value::Decimal(Decimal::MAX);
        assert!(max.plus(max).is_nan());
        assert!(max.multiplied_by(dec(2)).is_nan());
        assert!(Value::Double(f64::MAX).multiplied_by(Value::Double(2.0)).is_nan());
    }

    #[test]
    fn test_left_representation_wins() {
        let mixed = dec(2).plus(Value::Double(0.5));
        assert_eq!(mixed, Num::from_decimal(Decimal::new(25, 1)));

        let mixed = Value::Double(0.5).plus(dec(2));
        assert_eq!(mixed, Num::double(2.5));
    }

    #[test]
    fn test_unary_operations() {
        let x = Value::Decimal(Decimal::new(-25, 1)); // -2.5
        assert_eq!(x.floor(), Num::decimal(-3));
        assert_eq!(x.ceil(), Num::decimal(-2));
        assert_eq!(x.abs(), Num::from_decimal(Decimal::new(25, 1)));
        assert_eq!(x.negate(), Num::from_decimal(Decimal::new(25, 1)));
        assert_eq!(dec(3).pow(3), Num::decimal(27));
        assert_eq!(Value::Double(2.0).pow(10), Num::double(1024.0));
    }

    #[test]
    fn test_domain_errors_are_nan() {
        assert!(dec(0).log().is_nan());
        assert!(dec(-4).log().is_nan());
        assert!(dec(-4).sqrt().is_nan());
        assert!(Value::Double(-4.0).sqrt().is_nan());
        assert!(Value::Double(0.0).log().is_nan());

        let half = Value::Decimal(Decimal::new(5, 1));
        let minus_one = dec(-1);
        assert!(dec(-8).pow_value(half).is_nan());
        assert!(Value::Double(-8.0).pow_value(Value::Double(0.5)).is_nan());
        assert!(dec(0).pow_value(minus_one).is_nan());
        assert!(dec(0).pow_value(Value::Decimal(Decimal::new(-5, 1))).is_nan());
        assert!(Value::Double(0.0).pow_value(Value::Double(-1.0)).is_nan());
        assert!(dec(0).pow(-1).is_nan());
    }

    #[test]
    fn test_pow_value_edges() {
        assert_eq!(dec(-2).pow_value(dec(3)), Num::decimal(-8));
        let root = dec(4).pow_value(Value::Decimal(Decimal::new(5, 1)));
        assert!((root.to_f64() - 2.0).abs() < 1e-12);
        assert_eq!(dec(0).pow_value(dec(0)), Num::decimal(1));
        assert_eq!(dec(0).pow_value(dec(2)), Num::decimal(0));
        assert_eq!(dec(-2).pow_value(dec(-1)), Num::from_decimal(Decimal::new(-5, 1)));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(dec(16).sqrt(), Num::decimal(4));
        assert_eq!(Value::Double(2.25).sqrt(), Num::double(1.5));

        // sqrt(2) = 1.41421356...
        let root = dec(2).sqrt_with_precision(4);
        assert_eq!(root, Num::from_decimal(Decimal::new(1414, 3)));

        // Zero precision keeps every digit the root was computed with
        assert_eq!(dec(2).sqrt_with_precision(0), dec(2).sqrt());
        assert!(!dec(2).sqrt_with_precision(0).is_zero());
    }

    #[test]
    fn test_to_f32_out_of_range() {
        assert!(Value::Double(1e300).to_f32().is_nan());
        assert!(Value::Double(-1e300).to_f32().is_nan());
        assert_eq!(Value::Double(0.5).to_f32(), 0.5f32);
    }

    #[test]
    fn test_compare_across_representations() {
        assert_eq!(dec(2).compare(Value::Double(1.5)), Ordering::Greater);
        assert_eq!(Value::Double(1.5).compare(dec(2)), Ordering::Less);
        assert_eq!(dec(2).compare(Value::Double(2.0)), Ordering::Equal);
        assert_eq!(Value::Decimal(Decimal::MAX).compare(Value::Double(1e300)), Ordering::Less);
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(Value::Decimal(Decimal::new(-79, 1)).to_i32(), Ok(-7));
        assert_eq!(Value::Double(7.9).to_i64(), Ok(7));
        assert_eq!(
            Value::Double(1e10).to_i32(),
            Err(NumError::OutOfRange("i32"))
        );
        assert_eq!(
            Value::Double(1e19).to_i64(),
            Err(NumError::OutOfRange("i64"))
        );
        assert_eq!(
            Value::Decimal(Decimal::MAX).to_i64(),
            Err(NumError::OutOfRange("i64"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Decimal(Decimal::new(12345, 2)).to_string(), "123.45");
        assert_eq!(Value::Double(0.5).to_string(), "0.5");
    }
}
