// ============================================================================
// TA Num Library
// Numeric abstraction for technical-analysis indicators and strategies
// ============================================================================

//! # TA Num
//!
//! A closed numeric type for indicator code that should not care whether it
//! runs on decimals or floating point.
//!
//! ## Features
//!
//! - **One value type** [`Num`](numeric::Num) over `rust_decimal` decimals and finite `f64`
//! - **Undefined sentinel** [`NAN`](numeric::NAN) with absorbing rules that differ from IEEE-754
//! - **Total arithmetic**: overflow, division by zero and domain errors yield NaN
//! - **Configurable construction** through [`NumConfig`](config::NumConfig)
//!
//! ## The NaN sentinel
//!
//! NaN is equal to everything and satisfies every ordering predicate. Most
//! binary operations return the other operand, and NaN divided by anything
//! is decimal one. Use `is_nan()` when these rules are not what you need.
//!
//! ## Example
//!
//! ```rust
//! use ta_num::prelude::*;
//!
//! let config = NumConfig::decimal();
//! let closes: Vec<Num> = [101, 103, 102].iter().map(|&c| config.num(c)).collect();
//!
//! // A missing bar does not poison a running sum: NaN passes the augend through
//! let sum = closes.iter().fold(NAN, |acc, &c| acc.plus(c));
//! assert_eq!(sum, Num::decimal(306));
//!
//! assert!(NAN.is_equal(Num::decimal(7)));
//! assert!(NAN.to_i32().is_err());
//! assert_eq!(NAN.to_string(), "NaN");
//! ```

pub mod config;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{NumConfig, MAX_DECIMAL_PRECISION};
    pub use crate::numeric::{NaN, Num, NumError, NumKind, NumResult, Number, Value, NAN};
}
