//! Binomial opinion value type
//!
//! An opinion about a binary proposition is a belief mass, a disbelief mass
//! and an uncertainty mass that together sum to one, plus the base rate used
//! to project the uncertainty mass onto a point probability.

use crate::error::{Field, OpinionError, Result};
use crate::precision::{check_mass_sum, component, sum_tolerance, unit_interval};
use crate::record::OpinionRecord;
use crate::traits::IntoComponent;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base rate used when none is given
pub const DEFAULT_BASE_RATE: f64 = 0.5;

/// Binomial opinion `(belief, disbelief, uncertainty, base_rate)`
///
/// Components are stored at six decimal places. Every value of this type
/// satisfies:
/// - each component lies in [0, 1]
/// - `belief + disbelief + uncertainty` is within `1e-6` of 1
///
/// There are no setters. Use [`Opinion::with_masses`] or
/// [`Opinion::with_base_rate`] to obtain a revalidated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OpinionRecord", into = "OpinionRecord")]
pub struct Opinion {
    belief: Decimal,
    disbelief: Decimal,
    uncertainty: Decimal,
    base_rate: Decimal,
}

impl Opinion {
    /// Create a new opinion
    ///
    /// Each component is quantized and range-checked on its own before the
    /// mass sum is validated.
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_core::Opinion;
    ///
    /// let opinion = Opinion::new(0.5, 0.3, 0.2, 0.5).unwrap();
    /// assert_eq!(opinion.to_string(),
    ///     "Opinion(belief=0.500, disbelief=0.300, uncertainty=0.200, base_rate=0.500)");
    ///
    /// assert!(Opinion::new(0.5, 0.3, 0.3, 0.5).is_err());
    /// ```
    pub fn new<B, D, U, A>(belief: B, disbelief: D, uncertainty: U, base_rate: A) -> Result<Self>
    where
        B: IntoComponent,
        D: IntoComponent,
        U: IntoComponent,
        A: IntoComponent,
    {
        let belief = component(Field::Belief, belief)?;
        let disbelief = component(Field::Disbelief, disbelief)?;
        let uncertainty = component(Field::Uncertainty, uncertainty)?;
        let base_rate = component(Field::BaseRate, base_rate)?;
        check_mass_sum(belief, disbelief, uncertainty)?;

        Ok(Self {
            belief,
            disbelief,
            uncertainty,
            base_rate,
        })
    }

    /// Create a new opinion with the default base rate of 0.5
    pub fn with_default_base_rate<B, D, U>(belief: B, disbelief: D, uncertainty: U) -> Result<Self>
    where
        B: IntoComponent,
        D: IntoComponent,
        U: IntoComponent,
    {
        Self::new(belief, disbelief, uncertainty, DEFAULT_BASE_RATE)
    }

    /// The vacuous opinion `(0, 0, 1, base_rate)`: no evidence at all
    pub fn vacuous<A: IntoComponent>(base_rate: A) -> Result<Self> {
        Self::new(Decimal::ZERO, Decimal::ZERO, Decimal::ONE, base_rate)
    }

    /// Belief mass
    pub fn belief(&self) -> Decimal {
        self.belief
    }

    /// Disbelief mass
    pub fn disbelief(&self) -> Decimal {
        self.disbelief
    }

    /// Uncertainty mass
    pub fn uncertainty(&self) -> Decimal {
        self.uncertainty
    }

    /// Base rate (prior probability of the proposition)
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Whether the opinion carries no uncertainty at all
    pub fn is_dogmatic(&self) -> bool {
        self.uncertainty.is_zero()
    }

    /// Projected probability `belief + base_rate · uncertainty`
    ///
    /// The result is not quantized. Masses may sum to slightly more than 1,
    /// so a projection above 1 by no more than the sum tolerance is clamped
    /// to 1; anything further out is [`OpinionError::OutOfRange`].
    pub fn probability(&self) -> Result<Decimal> {
        let projected = self.belief + self.base_rate * self.uncertainty;
        if projected > Decimal::ONE && projected - Decimal::ONE <= sum_tolerance() {
            return Ok(Decimal::ONE);
        }
        unit_interval(Field::Probability, projected)
    }

    /// Copy of this opinion with new masses, revalidated as a whole
    pub fn with_masses<B, D, U>(&self, belief: B, disbelief: D, uncertainty: U) -> Result<Self>
    where
        B: IntoComponent,
        D: IntoComponent,
        U: IntoComponent,
    {
        Self::new(belief, disbelief, uncertainty, self.base_rate)
    }

    /// Copy of this opinion with a new base rate
    pub fn with_base_rate<A: IntoComponent>(&self, base_rate: A) -> Result<Self> {
        Self::new(self.belief, self.disbelief, self.uncertainty, base_rate)
    }

    /// Plain `f64` view of this opinion
    pub fn to_record(&self) -> OpinionRecord {
        OpinionRecord::from(*self)
    }
}

impl TryFrom<OpinionRecord> for Opinion {
    type Error = OpinionError;

    fn try_from(record: OpinionRecord) -> Result<Self> {
        Self::new(
            record.belief,
            record.disbelief,
            record.uncertainty,
            record.base_rate,
        )
    }
}

impl fmt::Display for Opinion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Opinion(belief={:.3}, disbelief={:.3}, uncertainty={:.3}, base_rate={:.3})",
            rounded(self.belief),
            rounded(self.disbelief),
            rounded(self.uncertainty),
            rounded(self.base_rate)
        )
    }
}

/// Round for display, half-up at three places
fn rounded(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}
