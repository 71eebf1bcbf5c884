//! Fusion operators
//!
//! Both operators combine two opinions about the same proposition held by
//! different sources:
//! - cumulative fusion pools the evidence behind both opinions
//! - average fusion treats them as two assessments of the same evidence
//!
//! Each opinion is weighted by the other's uncertainty, so both operators
//! are undefined when both inputs are dogmatic (zero uncertainty). That
//! limiting case is rejected rather than approximated.

use crate::error::{OpinionError, Result};
use crate::opinion::Opinion;
use rust_decimal::Decimal;
use tracing::{debug, warn};

const CUMULATIVE: &str = "cumulative fusion";
const AVERAGE: &str = "average fusion";

fn reject_dogmatic_pair(operator: &'static str, a: &Opinion, b: &Opinion) -> Result<()> {
    if a.uncertainty().is_zero() && b.uncertainty().is_zero() {
        warn!(operator, "both opinions are dogmatic, refusing to fuse");
        return Err(OpinionError::UndefinedOperation {
            operator,
            reason: "both uncertainties are zero",
        });
    }
    Ok(())
}

impl Opinion {
    /// Cumulative fusion `A ⊕ B`
    ///
    /// The result is the opinion an observer would hold after seeing the
    /// evidence behind both inputs. The vacuous opinion is its identity.
    ///
    /// # Errors
    ///
    /// [`OpinionError::UndefinedOperation`] when both uncertainties are zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_core::Opinion;
    ///
    /// let long_term = Opinion::new(0.5, 0.3, 0.2, 0.5).unwrap();
    /// let short_term = Opinion::new(0.6, 0.2, 0.2, 0.5).unwrap();
    /// let fused = long_term.cumulative_fusion(&short_term).unwrap();
    /// assert_eq!(fused.to_string(),
    ///     "Opinion(belief=0.611, disbelief=0.278, uncertainty=0.111, base_rate=0.500)");
    /// ```
    pub fn cumulative_fusion(&self, other: &Opinion) -> Result<Opinion> {
        reject_dogmatic_pair(CUMULATIVE, self, other)?;

        let (u_a, u_b) = (self.uncertainty(), other.uncertainty());
        let denominator = u_a + u_b - u_a * u_b;

        let belief = (self.belief() * u_b + other.belief() * u_a) / denominator;
        let disbelief = (self.disbelief() * u_b + other.disbelief() * u_a) / denominator;
        let uncertainty = (u_a * u_b) / denominator;
        let base_rate = cumulative_base_rate(self, other);

        debug!(
            operator = CUMULATIVE,
            %u_a,
            %u_b,
            %belief,
            %disbelief,
            %uncertainty,
            %base_rate,
            "fused opinions"
        );
        Opinion::new(belief, disbelief, uncertainty, base_rate)
    }

    /// Average fusion
    ///
    /// Both inputs are treated as dependent assessments of the same
    /// evidence; the base rate is the plain mean of both base rates.
    ///
    /// # Errors
    ///
    /// [`OpinionError::UndefinedOperation`] when both uncertainties are zero.
    pub fn average_fusion(&self, other: &Opinion) -> Result<Opinion> {
        reject_dogmatic_pair(AVERAGE, self, other)?;

        let (u_a, u_b) = (self.uncertainty(), other.uncertainty());
        let denominator = u_a + u_b;

        let belief = (self.belief() * u_b + other.belief() * u_a) / denominator;
        let disbelief = (self.disbelief() * u_b + other.disbelief() * u_a) / denominator;
        let uncertainty = (Decimal::from(2) * u_a * u_b) / denominator;
        let base_rate = mean(self.base_rate(), other.base_rate());

        debug!(
            operator = AVERAGE,
            %u_a,
            %u_b,
            %belief,
            %disbelief,
            %uncertainty,
            %base_rate,
            "fused opinions"
        );
        Opinion::new(belief, disbelief, uncertainty, base_rate)
    }
}

/// Base rate of a cumulative fusion.
///
/// Two vacuous inputs fall back to the mean, where the general formula would
/// divide by zero. The caller has already excluded two dogmatic inputs, the
/// only other zero of `u_a + u_b − 2·u_a·u_b`.
fn cumulative_base_rate(a: &Opinion, b: &Opinion) -> Decimal {
    let (u_a, u_b) = (a.uncertainty(), b.uncertainty());
    if u_a == Decimal::ONE && u_b == Decimal::ONE {
        return mean(a.base_rate(), b.base_rate());
    }

    let numerator = a.base_rate() * u_b + b.base_rate() * u_a
        - (a.base_rate() + b.base_rate()) * u_a * u_b;
    let denominator = u_a + u_b - Decimal::from(2) * u_a * u_b;
    numerator / denominator
}

fn mean(x: Decimal, y: Decimal) -> Decimal {
    (x + y) / Decimal::from(2)
}
