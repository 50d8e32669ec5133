//! Value objects shared by the scoring, amortization and application layers.

pub mod applicant;
pub mod credit;
pub mod money;
pub mod precision;
pub mod rejection;
