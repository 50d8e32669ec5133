//! Application layer containing the two entry points of the conveyor.
//!
//! `OfferGenerator` quotes preliminary offers and `CreditEvaluator` performs the
//! final underwriting. Both are stateless, so `batch` simply fans work out across
//! `tokio`'s blocking pool.

pub mod batch;
pub mod evaluator;
pub mod offers;
