//! Opinions derived from evidence counts
//!
//! Maps `r` positive and `s` negative observations onto an opinion using the
//! non-informative prior weight `W`:
//! `b = r/(r+s+W)`, `d = s/(r+s+W)`, `u = W/(r+s+W)`.

use crate::error::{OpinionError, Result};
use crate::opinion::{Opinion, DEFAULT_BASE_RATE};
use rust_decimal::Decimal;
use tracing::debug;

/// Default non-informative prior weight
pub const DEFAULT_PRIOR_WEIGHT: f64 = 2.0;

/// Prior used when mapping evidence onto an opinion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvidencePrior {
    /// Base rate of the resulting opinion
    pub base_rate: f64,
    /// Non-informative prior weight `W` (> 0)
    pub weight: f64,
}

impl Default for EvidencePrior {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            weight: DEFAULT_PRIOR_WEIGHT,
        }
    }
}

impl EvidencePrior {
    /// Create a prior with the given base rate and weight
    pub fn new(base_rate: f64, weight: f64) -> Self {
        Self { base_rate, weight }
    }
}

impl Opinion {
    /// Derive an opinion from evidence with the default prior
    /// (base rate 0.5, weight 2)
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_core::Opinion;
    /// use rust_decimal::Decimal;
    ///
    /// let opinion = Opinion::from_evidence(2, 1).unwrap();
    /// assert_eq!(opinion.belief(), Decimal::new(4, 1));
    /// assert_eq!(opinion.uncertainty(), Decimal::new(4, 1));
    /// ```
    pub fn from_evidence(positive: u64, negative: u64) -> Result<Self> {
        Self::from_evidence_with(positive, negative, &EvidencePrior::default())
    }

    /// Derive an opinion from evidence with an explicit prior
    ///
    /// # Errors
    ///
    /// [`OpinionError::InvalidArgument`] if either count is zero or the
    /// prior weight is not a positive finite number.
    pub fn from_evidence_with(positive: u64, negative: u64, prior: &EvidencePrior) -> Result<Self> {
        if positive == 0 {
            return Err(OpinionError::InvalidArgument(
                "positive evidence must be a positive integer".to_string(),
            ));
        }
        if negative == 0 {
            return Err(OpinionError::InvalidArgument(
                "negative evidence must be a positive integer".to_string(),
            ));
        }
        let weight = prior_weight(prior.weight)?;

        let r = Decimal::from(positive);
        let s = Decimal::from(negative);
        let total = r + s + weight;
        debug!(positive, negative, %weight, "deriving opinion from evidence");

        Self::new(r / total, s / total, weight / total, prior.base_rate)
    }
}

fn prior_weight(weight: f64) -> Result<Decimal> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(OpinionError::InvalidArgument(format!(
            "prior weight must be a positive number, got {}",
            weight
        )));
    }
    Decimal::try_from(weight).map_err(|_| {
        OpinionError::InvalidArgument(format!("prior weight {} is not representable", weight))
    })
}
