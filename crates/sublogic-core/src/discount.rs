//! Trust discounting
//!
//! Derives A's opinion about X from A's trust in B and B's opinion about X.
//! B's belief and disbelief are scaled by the projected probability of A's
//! trust; whatever mass is lost goes to uncertainty.

use crate::error::Result;
use crate::opinion::Opinion;
use crate::precision::quantize;
use rust_decimal::Decimal;
use tracing::debug;

impl Opinion {
    /// Trust discounting `trust ⊗ referral`
    ///
    /// `self` is the trust opinion about the referring agent. The result
    /// keeps the referral's base rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use sublogic_core::Opinion;
    ///
    /// let trust = Opinion::new(0.2, 0.4, 0.4, 0.75).unwrap();
    /// let referral = Opinion::new(0.45, 0.35, 0.2, 0.25).unwrap();
    /// let derived = trust.trust_discounting(&referral).unwrap();
    /// assert_eq!(derived.to_string(),
    ///     "Opinion(belief=0.225, disbelief=0.175, uncertainty=0.600, base_rate=0.250)");
    /// ```
    pub fn trust_discounting(&self, referral: &Opinion) -> Result<Opinion> {
        let p = self.probability()?;

        let belief = quantize(p * referral.belief());
        let disbelief = quantize(p * referral.disbelief());
        // Referral masses may exceed 1 by the sum tolerance; never go negative.
        let uncertainty = (Decimal::ONE - belief - disbelief).max(Decimal::ZERO);

        debug!(
            %p,
            %belief,
            %disbelief,
            %uncertainty,
            "discounted referral opinion"
        );
        Opinion::new(belief, disbelief, uncertainty, referral.base_rate())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Opinions whose mass sum lies anywhere in the 1 ± 1e-6 band
    fn opinion() -> impl Strategy<Value = Opinion> {
        (0i64..=1_000_000, 0i64..=1_000_000, -1i64..=1, 0i64..=1_000_000).prop_map(
            |(b, rest, drift, a)| {
                let d = rest % (1_000_000 - b + 1);
                let u = (1_000_000 - b - d + drift).clamp(0, 1_000_000);
                Opinion::new(
                    Decimal::new(b, 6),
                    Decimal::new(d, 6),
                    Decimal::new(u, 6),
                    Decimal::new(a, 6),
                )
                .unwrap()
            },
        )
    }

    proptest! {
        /// Property: the referral's base rate passes through unchanged
        #[test]
        fn test_discount_keeps_referral_base_rate(trust in opinion(), referral in opinion()) {
            let derived = trust.trust_discounting(&referral).unwrap();
            prop_assert_eq!(derived.base_rate(), referral.base_rate());
        }

        /// Property: discounting never adds belief or disbelief
        #[test]
        fn test_discount_never_strengthens(trust in opinion(), referral in opinion()) {
            let derived = trust.trust_discounting(&referral).unwrap();
            prop_assert!(derived.belief() <= referral.belief());
            prop_assert!(derived.disbelief() <= referral.disbelief());
            let unassigned = (Decimal::ONE - referral.belief() - referral.disbelief()).max(Decimal::ZERO);
            prop_assert!(derived.uncertainty() >= unassigned);
        }
    }
}
