//! Sublogic Core
//!
//! Binomial opinions from subjective logic and the operators that combine
//! them. An opinion about a binary proposition splits its mass between
//! belief, disbelief and uncertainty, and carries a base rate that projects
//! the uncertain mass onto a point probability.
//!
//! ## Key Concepts
//!
//! - **Opinion**: validated `(belief, disbelief, uncertainty, base_rate)`
//!   stored at six decimal places
//! - **Evidence**: opinions derived from positive/negative observation counts
//! - **Cumulative fusion**: pools the evidence behind two opinions
//! - **Average fusion**: averages two assessments of the same evidence
//! - **Trust discounting**: propagates an opinion through a trust relation
//!
//! ## Example
//!
//! ```
//! use sublogic_core::Opinion;
//!
//! let a = Opinion::from_evidence(2, 1).unwrap();
//! let b = Opinion::from_evidence(4, 3).unwrap();
//! let fused = a.cumulative_fusion(&b).unwrap();
//! assert!(fused.uncertainty() < a.uncertainty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod discount;
pub mod error;
pub mod evidence;
pub mod fusion;
pub mod opinion;
pub mod precision;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use error::{Field, OpinionError, Result};
pub use evidence::{EvidencePrior, DEFAULT_PRIOR_WEIGHT};
pub use opinion::{Opinion, DEFAULT_BASE_RATE};
pub use record::OpinionRecord;
pub use traits::IntoComponent;
