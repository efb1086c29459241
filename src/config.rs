// ============================================================================
// Num Configuration
// Representation and precision used to build values from primitives
// ============================================================================

use crate::numeric::{round_significant, Num, NumKind, Number, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of significant digits a `rust_decimal::Decimal` holds
pub const MAX_DECIMAL_PRECISION: u32 = 28;

/// Configuration for building `Num` values from primitive inputs.
///
/// Indicator code holds one of these and calls [`NumConfig::num`] instead
/// of picking a representation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumConfig {
    /// Representation of built values
    pub kind: NumKind,

    /// Significant digits kept by decimal values. Ignored for doubles.
    pub precision: u32,
}

impl NumConfig {
    /// Create a new configuration with required parameters
    pub fn new(kind: NumKind, precision: u32) -> Self {
        Self { kind, precision }
    }

    /// Builder method: Set decimal precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.kind {
            NumKind::NaN => Err("NaN kind cannot build defined values".to_string()),
            NumKind::Decimal => {
                if self.precision == 0 {
                    return Err("Precision must be positive".to_string());
                }
                if self.precision > MAX_DECIMAL_PRECISION {
                    return Err(format!(
                        "Precision cannot exceed {} significant digits",
                        MAX_DECIMAL_PRECISION
                    ));
                }
                Ok(())
            },
            NumKind::Double => Ok(()),
        }
    }

    /// Build a value of the configured kind.
    ///
    /// Decimals are rounded to `precision` significant digits; a precision of
    /// zero leaves them unrounded.
    pub fn num(&self, value: impl Into<Number>) -> Num {
        let num = self.kind.from_number(value);
        match num {
            Num::Defined(Value::Decimal(d)) => {
                round_significant(d, self.precision).map_or(Num::NaN, Num::from_decimal)
            },
            _ => num,
        }
    }

    /// Constructor function of the configured kind, without rounding.
    pub fn function(&self) -> fn(Number) -> Num {
        self.kind.function()
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl NumConfig {
    /// Full decimal precision
    pub fn decimal() -> Self {
        Self::new(NumKind::Decimal, MAX_DECIMAL_PRECISION)
    }

    /// Decimal with 8 significant digits, cheaper to carry through long series
    pub fn low_precision() -> Self {
        Self::new(NumKind::Decimal, 8)
    }

    /// Native floating point
    pub fn double() -> Self {
        Self::new(NumKind::Double, 0)
    }
}

impl Default for NumConfig {
    fn default() -> Self {
        Self::decimal()
    }
}
