// ============================================================================
// Numeric Module
// Polymorphic numeric values for indicator and strategy code
// ============================================================================
//
// This module provides:
// - Num: closed sum type over defined values and the NaN sentinel
// - Value: the defined representations (rust_decimal Decimal, finite f64)
// - NAN / NaN: the process-wide undefined value and its factory
// - NumKind / Number: per-variant constructors from primitives
// - NumError: errors raised by conversions to primitives
//
// Design principles:
// - Arithmetic is total: every operation returns a Num, never panics
// - NaN follows its own absorbing rules, not IEEE-754
// - Defined results that cannot be represented degrade to NaN

mod errors;
mod kind;
mod nan;
mod num;
mod value;

pub use errors::{NumError, NumResult};
pub use kind::{NumKind, Number};
pub use nan::{NaN, NAN};
pub use num::Num;
pub use value::Value;

pub(crate) use value::round_significant;
