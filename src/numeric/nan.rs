// ============================================================================
// NaN Sentinel
// The single process-wide undefined value
// ============================================================================

use super::kind::{NumKind, Number};
use super::num::Num;

/// The undefined value. Every code path that produces "undefined" yields
/// this same value.
///
/// Initialized at compile time; safe to read from any thread.
pub static NAN: Num = Num::NaN;

/// Entry points for the undefined sentinel.
///
/// `NaN` carries no state. It exists so callers can name the sentinel's
/// factory and reach the shared static without matching on [`Num`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaN;

impl NaN {
    /// Reference to the shared sentinel. Always the same address.
    #[inline]
    pub fn instance() -> &'static Num {
        &NAN
    }

    /// Returns [`NAN`] whatever the input.
    ///
    /// This does NOT parse `value`: converting a real number requires
    /// [`NumKind::Decimal`] or [`NumKind::Double`].
    #[inline]
    pub fn value_of(value: impl Into<Number>) -> Num {
        NumKind::NaN.from_number(value)
    }

    /// Constructor function mapping every input to [`NAN`].
    #[inline]
    pub fn function() -> fn(Number) -> Num {
        NumKind::NaN.function()
    }
}

impl From<NaN> for Num {
    #[inline]
    fn from(_: NaN) -> Self {
        NAN
    }
}
