// ============================================================================
// Num
// Closed numeric abstraction over defined values and the NaN sentinel
// ============================================================================

use super::errors::{NumError, NumResult};
use super::kind::{NumKind, Number};
use super::value::Value;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// A numeric value used by indicator and strategy code.
///
/// Every `Num` is either a finite [`Value`] or the undefined sentinel
/// [`Num::NaN`]. The sentinel does NOT follow IEEE-754: it is equal to,
/// greater than and less than everything, and most binary operations pass
/// the other operand through unchanged. The full rule table:
///
/// | Operation | `NaN.op(x)` |
/// |---|---|
/// | `plus`, `multiplied_by`, `remainder`, `min`, `max` | `x` |
/// | `minus` | `x.negate()` |
/// | `divided_by` | decimal `1` |
/// | `floor`, `ceil`, `abs`, `negate`, `pow*`, `log`, `sqrt*` | `NaN` |
/// | `is_zero`, `is_positive`, `is_positive_or_zero`, `is_negative_or_zero` | `true` |
/// | `is_negative` | `false` |
/// | `is_equal` and every ordering predicate | `true` |
/// | `compare_to` | `Ordering::Equal` |
/// | `to_i32`, `to_i64` | `Err(UnsupportedRepresentation)` |
/// | `to_f32`, `to_f64` | IEEE NaN |
///
/// A defined value combined with NaN yields NaN, and its predicates
/// against NaN are `false`.
///
/// `PartialEq` is structural: `Num::NaN == Num::NaN`, and defined values are
/// equal when they share a representation and a value. Use [`Num::is_equal`]
/// for the absorbing comparison.
///
/// # Example
/// ```
/// use ta_num::numeric::{Num, NAN};
///
/// let close = Num::decimal(101);
/// assert_eq!(NAN.plus(close), close);
/// assert!(close.plus(NAN).is_nan());
/// assert_eq!(NAN.divided_by(close), Num::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    /// A finite, representable quantity
    Defined(Value),
    /// The undefined sentinel
    NaN,
}

impl Num {
    /// Decimal zero
    pub const ZERO: Num = Num::Defined(Value::Decimal(Decimal::ZERO));

    /// Decimal one
    pub const ONE: Num = Num::Defined(Value::Decimal(Decimal::ONE));

    /// Decimal one hundred
    pub const HUNDRED: Num = Num::Defined(Value::Decimal(Decimal::ONE_HUNDRED));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Decimal from an integer.
    #[inline]
    pub fn decimal(value: i64) -> Num {
        Num::Defined(Value::Decimal(Decimal::from(value)))
    }

    /// Wrap a `rust_decimal::Decimal`.
    #[inline]
    pub fn from_decimal(value: Decimal) -> Num {
        Num::Defined(Value::Decimal(value))
    }

    /// Double from an `f64`. IEEE NaN and infinities become the sentinel.
    #[inline]
    pub fn double(value: f64) -> Num {
        if value.is_finite() {
            Num::Defined(Value::Double(value))
        } else {
            Num::NaN
        }
    }

    /// Parse a decimal literal. `"NaN"` parses to the sentinel.
    ///
    /// # Errors
    /// Returns `InvalidInput` when the string is not a decimal literal.
    pub fn parse_decimal(s: &str) -> NumResult<Num> {
        let s = s.trim();
        if s == "NaN" {
            return Ok(Num::NaN);
        }
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Num::from_decimal)
            .map_err(|_| NumError::InvalidInput)
    }

    // ========================================================================
    // Identity
    // ========================================================================

    /// `true` only for the sentinel.
    #[inline]
    pub const fn is_nan(self) -> bool {
        matches!(self, Num::NaN)
    }

    /// The underlying value, `None` for the sentinel.
    #[inline]
    pub const fn delegate(self) -> Option<Value> {
        match self {
            Num::Defined(value) => Some(value),
            Num::NaN => None,
        }
    }

    /// Name of the variant, used in logs and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Num::Defined(Value::Decimal(_)) => "DecimalNum",
            Num::Defined(Value::Double(_)) => "DoubleNum",
            Num::NaN => "NaN",
        }
    }

    /// The variant this value belongs to.
    #[inline]
    pub const fn kind(self) -> NumKind {
        NumKind::of(&self)
    }

    /// Constructor for values of the same variant as `self`.
    ///
    /// For the sentinel the returned function maps every input to NaN.
    #[inline]
    pub fn function(self) -> fn(Number) -> Num {
        self.kind().function()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn plus(self, augend: Num) -> Num {
        match (self, augend) {
            (Num::NaN, _) => augend,
            (Num::Defined(a), Num::Defined(b)) => a.plus(b),
            (Num::Defined(_), Num::NaN) => Num::NaN,
        }
    }

    pub fn minus(self, subtrahend: Num) -> Num {
        match (self, subtrahend) {
            (Num::NaN, _) => subtrahend.negate(),
            (Num::Defined(a), Num::Defined(b)) => a.minus(b),
            (Num::Defined(_), Num::NaN) => Num::NaN,
        }
    }

    pub fn multiplied_by(self, multiplicand: Num) -> Num {
        match (self, multiplicand) {
            (Num::NaN, _) => multiplicand,
            (Num::Defined(a), Num::Defined(b)) => a.multiplied_by(b),
            (Num::Defined(_), Num::NaN) => Num::NaN,
        }
    }

    /// Division. NaN divided by anything, NaN included, is decimal one.
    pub fn divided_by(self, divisor: Num) -> Num {
        match (self, divisor) {
            (Num::NaN, _) => Num::ONE,
            (Num::Defined(a), Num::Defined(b)) => a.divided_by(b),
            (Num::Defined(_), Num::NaN) => Num::NaN,
        }
    }

    pub fn remainder(self, divisor: Num) -> Num {
        match (self, divisor) {
            (Num::NaN, _) => divisor,
            (Num::Defined(a), Num::Defined(b)) => a.remainder(b),
            (Num::Defined(_), Num::NaN) => Num::NaN,
        }
    }

    pub fn pow(self, n: i64) -> Num {
        match self {
            Num::Defined(a) => a.pow(n),
            Num::NaN => Num::NaN,
        }
    }

    pub fn pow_num(self, n: Num) -> Num {
        match (self, n) {
            (Num::Defined(a), Num::Defined(b)) => a.pow_value(b),
            _ => Num::NaN,
        }
    }

    pub fn floor(self) -> Num {
        self.map_defined(Value::floor)
    }

    pub fn ceil(self) -> Num {
        self.map_defined(Value::ceil)
    }

    pub fn abs(self) -> Num {
        self.map_defined(Value::abs)
    }

    pub fn negate(self) -> Num {
        self.map_defined(Value::negate)
    }

    /// Natural logarithm.
    pub fn log(self) -> Num {
        self.map_defined(Value::log)
    }

    pub fn sqrt(self) -> Num {
        self.map_defined(Value::sqrt)
    }

    /// Square root rounded to `precision` significant digits.
    ///
    /// Zero means unlimited precision. Only decimals are rounded; a double
    /// root is returned as computed.
    pub fn sqrt_with_precision(self, precision: u32) -> Num {
        match self {
            Num::Defined(a) => a.sqrt_with_precision(precision),
            Num::NaN => Num::NaN,
        }
    }

    #[inline]
    fn map_defined(self, op: fn(Value) -> Num) -> Num {
        match self {
            Num::Defined(a) => op(a),
            Num::NaN => Num::NaN,
        }
    }

    // ========================================================================
    // Sign predicates
    // ========================================================================
    //
    // NaN answers true to every sign predicate except is_negative. This table
    // is relied upon downstream and is kept as is.

    pub fn is_zero(self) -> bool {
        match self {
            Num::Defined(a) => a.signum() == Ordering::Equal,
            Num::NaN => true,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Num::Defined(a) => a.signum() == Ordering::Greater,
            Num::NaN => true,
        }
    }

    pub fn is_positive_or_zero(self) -> bool {
        match self {
            Num::Defined(a) => a.signum() != Ordering::Less,
            Num::NaN => true,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Num::Defined(a) => a.signum() == Ordering::Less,
            Num::NaN => false,
        }
    }

    pub fn is_negative_or_zero(self) -> bool {
        match self {
            Num::Defined(a) => a.signum() != Ordering::Greater,
            Num::NaN => true,
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Ordering used by sorting. NaN on either side compares equal.
    ///
    /// This is not a total order: NaN is equal to values that differ from
    /// each other.
    pub fn compare_to(self, other: Num) -> Ordering {
        match (self, other) {
            (Num::Defined(a), Num::Defined(b)) => a.compare(b),
            _ => Ordering::Equal,
        }
    }

    pub fn is_equal(self, other: Num) -> bool {
        self.holds(other, |o| o == Ordering::Equal)
    }

    pub fn is_greater_than(self, other: Num) -> bool {
        self.holds(other, |o| o == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal(self, other: Num) -> bool {
        self.holds(other, |o| o != Ordering::Less)
    }

    pub fn is_less_than(self, other: Num) -> bool {
        self.holds(other, |o| o == Ordering::Less)
    }

    pub fn is_less_than_or_equal(self, other: Num) -> bool {
        self.holds(other, |o| o != Ordering::Greater)
    }

    /// NaN satisfies every predicate; a defined value satisfies none
    /// against NaN.
    #[inline]
    fn holds(self, other: Num, predicate: fn(Ordering) -> bool) -> bool {
        match (self, other) {
            (Num::NaN, _) => true,
            (Num::Defined(_), Num::NaN) => false,
            (Num::Defined(a), Num::Defined(b)) => predicate(a.compare(b)),
        }
    }

    pub fn min(self, other: Num) -> Num {
        match (self, other) {
            (Num::NaN, _) => other,
            (Num::Defined(_), Num::NaN) => Num::NaN,
            (Num::Defined(a), Num::Defined(b)) => {
                if a.compare(b) != Ordering::Greater {
                    self
                } else {
                    other
                }
            },
        }
    }

    pub fn max(self, other: Num) -> Num {
        match (self, other) {
            (Num::NaN, _) => other,
            (Num::Defined(_), Num::NaN) => Num::NaN,
            (Num::Defined(a), Num::Defined(b)) => {
                if a.compare(b) != Ordering::Less {
                    self
                } else {
                    other
                }
            },
        }
    }

    // ========================================================================
    // Conversion to primitives
    // ========================================================================

    /// # Errors
    /// `UnsupportedRepresentation` for NaN, `OutOfRange` if the integral
    /// part does not fit.
    pub fn to_i32(self) -> NumResult<i32> {
        match self {
            Num::Defined(a) => a.to_i32(),
            Num::NaN => Err(NumError::UnsupportedRepresentation("i32")),
        }
    }

    /// # Errors
    /// `UnsupportedRepresentation` for NaN, `OutOfRange` if the integral
    /// part does not fit.
    pub fn to_i64(self) -> NumResult<i64> {
        match self {
            Num::Defined(a) => a.to_i64(),
            Num::NaN => Err(NumError::UnsupportedRepresentation("i64")),
        }
    }

    pub fn to_f32(self) -> f32 {
        match self {
            Num::Defined(a) => a.to_f32(),
            Num::NaN => f32::NAN,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Num::Defined(a) => a.to_f64(),
            Num::NaN => f64::NAN,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Num {
    #[inline]
    fn default() -> Self {
        Num::ZERO
    }
}

impl From<Value> for Num {
    #[inline]
    fn from(value: Value) -> Self {
        Num::Defined(value)
    }
}

impl From<Decimal> for Num {
    #[inline]
    fn from(value: Decimal) -> Self {
        Num::from_decimal(value)
    }
}

impl From<i64> for Num {
    #[inline]
    fn from(value: i64) -> Self {
        Num::decimal(value)
    }
}

impl From<f64> for Num {
    #[inline]
    fn from(value: f64) -> Self {
        Num::double(value)
    }
}

impl FromStr for Num {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Num::parse_decimal(s)
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Defined(value) => write!(f, "{}", value),
            Num::NaN => write!(f, "NaN"),
        }
    }
}

// Operators follow the same rules as the named methods

impl Add for Num {
    type Output = Num;

    #[inline]
    fn add(self, rhs: Num) -> Num {
        self.plus(rhs)
    }
}

impl Sub for Num {
    type Output = Num;

    #[inline]
    fn sub(self, rhs: Num) -> Num {
        self.minus(rhs)
    }
}

impl Mul for Num {
    type Output = Num;

    #[inline]
    fn mul(self, rhs: Num) -> Num {
        self.multiplied_by(rhs)
    }
}

impl Div for Num {
    type Output = Num;

    #[inline]
    fn div(self, rhs: Num) -> Num {
        self.divided_by(rhs)
    }
}

impl Rem for Num {
    type Output = Num;

    #[inline]
    fn rem(self, rhs: Num) -> Num {
        self.remainder(rhs)
    }
}

impl Neg for Num {
    type Output = Num;

    #[inline]
    fn neg(self) -> Num {
        self.negate()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn samples() -> Vec<Num> {
        vec![
            Num::decimal(0),
            Num::decimal(42),
            Num::decimal(-17),
            Num::from_decimal(Decimal::new(-15, 1)),
            Num::double(0.0),
            Num::double(3.25),
            Num::double(-1e12),
            Num::NaN,
        ]
    }

    #[test]
    fn test_nan_ordering_predicates_hold_against_everything() {
        for x in samples() {
            assert!(Num::NaN.is_equal(x), "NaN == {}", x);
            assert!(Num::NaN.is_greater_than(x), "NaN > {}", x);
            assert!(Num::NaN.is_greater_than_or_equal(x), "NaN >= {}", x);
            assert!(Num::NaN.is_less_than(x), "NaN < {}", x);
            assert!(Num::NaN.is_less_than_or_equal(x), "NaN <= {}", x);
            assert_eq!(Num::NaN.compare_to(x), Ordering::Equal);
        }
    }

    #[test]
    fn test_nan_pass_through() {
        for x in samples() {
            assert_eq!(Num::NaN.plus(x), x);
            assert_eq!(Num::NaN.multiplied_by(x), x);
            assert_eq!(Num::NaN.remainder(x), x);
            assert_eq!(Num::NaN.min(x), x);
            assert_eq!(Num::NaN.max(x), x);
            assert_eq!(Num::NaN.minus(x), x.negate());
        }
        assert_eq!(Num::NaN.minus(Num::NaN), Num::NaN);
    }

    #[test]
    fn test_nan_divided_by_is_one() {
        for x in samples() {
            assert_eq!(Num::NaN.divided_by(x), Num::decimal(1));
        }
        assert_eq!(Num::NaN.divided_by(Num::NaN), Num::ONE);
        assert_eq!(Num::NaN.divided_by(Num::decimal(0)), Num::ONE);
    }

    #[test]
    fn test_nan_unary_fixed_points() {
        let nan = Num::NaN;
        assert_eq!(nan.floor(), nan);
        assert_eq!(nan.ceil(), nan);
        assert_eq!(nan.abs(), nan);
        assert_eq!(nan.negate(), nan);
        assert_eq!(nan.sqrt(), nan);
        assert_eq!(nan.sqrt_with_precision(10), nan);
        assert_eq!(nan.log(), nan);
        assert_eq!(nan.pow(3), nan);
        assert_eq!(nan.pow_num(Num::decimal(2)), nan);
    }

    #[test]
    fn test_nan_sign_predicates() {
        assert!(Num::NaN.is_zero());
        assert!(Num::NaN.is_positive());
        assert!(Num::NaN.is_positive_or_zero());
        assert!(!Num::NaN.is_negative());
        assert!(Num::NaN.is_negative_or_zero());
    }

    #[test]
    fn test_nan_conversions() {
        assert_eq!(
            Num::NaN.to_i32(),
            Err(NumError::UnsupportedRepresentation("i32"))
        );
        assert_eq!(
            Num::NaN.to_i64(),
            Err(NumError::UnsupportedRepresentation("i64"))
        );
        assert!(Num::NaN.to_f32().is_nan());
        assert!(Num::NaN.to_f64().is_nan());
        assert_eq!(Num::NaN.delegate(), None);
        assert_eq!(Num::NaN.name(), "NaN");
        assert_eq!(Num::NaN.to_string(), "NaN");
    }

    #[test]
    fn test_defined_with_nan_operand() {
        let x = Num::decimal(5);
        assert!(x.plus(Num::NaN).is_nan());
        assert!(x.minus(Num::NaN).is_nan());
        assert!(x.multiplied_by(Num::NaN).is_nan());
        assert!(x.divided_by(Num::NaN).is_nan());
        assert!(x.remainder(Num::NaN).is_nan());
        assert!(x.pow_num(Num::NaN).is_nan());
        assert!(x.min(Num::NaN).is_nan());
        assert!(x.max(Num::NaN).is_nan());

        assert!(!x.is_equal(Num::NaN));
        assert!(!x.is_greater_than(Num::NaN));
        assert!(!x.is_greater_than_or_equal(Num::NaN));
        assert!(!x.is_less_than(Num::NaN));
        assert!(!x.is_less_than_or_equal(Num::NaN));
        assert_eq!(x.compare_to(Num::NaN), Ordering::Equal);
    }

    #[test]
    fn test_defined_predicates() {
        let two = Num::decimal(2);
        let three = Num::double(3.0);

        assert!(two.is_less_than(three));
        assert!(three.is_greater_than(two));
        assert!(two.is_equal(Num::double(2.0)));
        assert!(two.is_less_than_or_equal(two));
        assert_eq!(two.min(three), two);
        assert_eq!(two.max(three), three);

        assert!(Num::decimal(0).is_zero());
        assert!(Num::decimal(0).is_negative_or_zero());
        assert!(!Num::decimal(0).is_positive());
        assert!(Num::double(-0.5).is_negative());
        assert!(!Num::double(-0.5).is_positive_or_zero());
    }

    #[test]
    fn test_defined_variants_are_not_nan() {
        assert!(!Num::decimal(1).is_nan());
        assert!(!Num::double(1.0).is_nan());
        assert_eq!(Num::decimal(1).name(), "DecimalNum");
        assert_eq!(Num::double(1.0).name(), "DoubleNum");
        assert_eq!(
            Num::decimal(1).delegate(),
            Some(Value::Decimal(Decimal::ONE))
        );
    }

    #[test]
    fn test_non_finite_doubles_become_nan() {
        assert!(Num::double(f64::NAN).is_nan());
        assert!(Num::double(f64::INFINITY).is_nan());
        assert!(Num::double(f64::NEG_INFINITY).is_nan());
        assert!(Num::from(f64::NAN).is_nan());
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Num::decimal(9);
        let b = Num::decimal(4);
        for (x, y) in [(a, b), (Num::NaN, b), (a, Num::NaN), (Num::NaN, Num::NaN)] {
            assert_eq!(x + y, x.plus(y));
            assert_eq!(x - y, x.minus(y));
            assert_eq!(x * y, x.multiplied_by(y));
            assert_eq!(x / y, x.divided_by(y));
            assert_eq!(x % y, x.remainder(y));
            assert_eq!(-x, x.negate());
        }
    }

    #[test]
    fn test_parse() {
        let x: Num = "123.45".parse().unwrap();
        assert_eq!(x, Num::from_decimal(Decimal::new(12345, 2)));

        let nan: Num = "NaN".parse().unwrap();
        assert!(nan.is_nan());

        assert_eq!(Num::parse_decimal("1e3"), Ok(Num::decimal(1000)));
        assert_eq!(Num::parse_decimal("abc"), Err(NumError::InvalidInput));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Num::ZERO, Num::decimal(0));
        assert_eq!(Num::ONE, Num::decimal(1));
        assert_eq!(Num::HUNDRED, Num::decimal(100));
        assert_eq!(Num::default(), Num::ZERO);
    }

    #[test]
    fn test_sort_with_compare_to() {
        let mut values = vec![Num::decimal(3), Num::decimal(1), Num::decimal(2)];
        values.sort_by(|a, b| a.compare_to(*b));
        assert_eq!(values, vec![Num::decimal(1), Num::decimal(2), Num::decimal(3)]);
    }

    #[test]
    fn quickcheck_nan_absorbs_decimals() {
        fn prop(n: i64) -> bool {
            let x = Num::decimal(n);
            Num::NaN.plus(x) == x
                && Num::NaN.multiplied_by(x) == x
                && Num::NaN.divided_by(x) == Num::ONE
                && Num::NaN.is_equal(x)
                && x.plus(Num::NaN).is_nan()
        }
        quickcheck(prop as fn(i64) -> bool);
    }

    #[test]
    fn quickcheck_nan_minus_is_negation() {
        fn prop(n: i32) -> bool {
            let x = Num::decimal(n as i64);
            Num::NaN.minus(x) == x.negate()
        }
        quickcheck(prop as fn(i32) -> bool);
    }
}
