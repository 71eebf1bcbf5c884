//! Fixed-precision storage for opinion components
//!
//! Every stored component is quantized to [`DECIMAL_PLACES`] places with
//! half-up rounding, and anything whose magnitude falls below one unit of
//! the last place is snapped to exactly zero. Validation against [0, 1] and
//! the mass-sum tolerance then operates on these quantized values only.

use crate::error::{Field, OpinionError, Result};
use crate::traits::IntoComponent;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::trace;

/// Number of decimal places kept for every component
pub const DECIMAL_PLACES: u32 = 6;

/// Smallest representable step, `1e-6`
pub fn resolution() -> Decimal {
    Decimal::new(1, DECIMAL_PLACES)
}

/// Absolute tolerance for `belief + disbelief + uncertainty == 1`
pub fn sum_tolerance() -> Decimal {
    resolution()
}

/// Quantize a value to the stored precision.
///
/// Rounds half-up (midpoint away from zero) and snaps sub-resolution
/// magnitudes to zero.
pub fn quantize(value: Decimal) -> Decimal {
    let rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if rounded.abs() < resolution() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Check that a value lies in the closed unit interval
pub(crate) fn unit_interval(field: Field, value: Decimal) -> Result<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        trace!(%field, %value, "component out of range");
        return Err(OpinionError::out_of_range(field, value));
    }
    Ok(value)
}

/// Convert, quantize and range-check a single component
pub(crate) fn component<T: IntoComponent>(field: Field, raw: T) -> Result<Decimal> {
    let value = raw.into_component().map_err(|repr| {
        trace!(%field, value = %repr, "component not representable");
        OpinionError::out_of_range(field, repr)
    })?;
    unit_interval(field, quantize(value))
}

/// Check the mass-sum invariant on already quantized masses
pub(crate) fn check_mass_sum(belief: Decimal, disbelief: Decimal, uncertainty: Decimal) -> Result<()> {
    let sum = belief + disbelief + uncertainty;
    if (sum - Decimal::ONE).abs() > sum_tolerance() {
        trace!(%sum, "mass sum outside tolerance");
        return Err(OpinionError::InvariantViolation {
            sum: sum.to_string(),
        });
    }
    Ok(())
}
