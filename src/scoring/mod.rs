//! Interest rate determination.
//!
//! The full calculator scores an [`ApplicantProfile`] against the ordered rate
//! table in [`rules`]; the preliminary calculator only looks at the insurance and
//! salary-client flags and never refuses.

pub mod age;
pub mod rules;

use crate::domain::applicant::ApplicantProfile;
use crate::domain::rejection::Rejection;
use chrono::{Local, NaiveDate};
use rules::{RATE_RULES, ScoringContext, apply_rules};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

/// Annual percentage rate every calculation starts from.
pub const BASE_RATE: Decimal = dec!(9.75);

/// Either an annual percentage rate or the reason the applicant was refused.
pub type RateDecision = Result<Decimal, Rejection>;

#[derive(Debug, Default, Clone, Copy)]
pub struct RateCalculator;

impl RateCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Scores `profile` as of today.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> RateDecision {
        self.evaluate_on(profile, Local::now().date_naive())
    }

    /// Scores `profile` with ages computed on `as_of`.
    pub fn evaluate_on(&self, profile: &ApplicantProfile, as_of: NaiveDate) -> RateDecision {
        info!(applicant = %profile.full_name(), "scoring applicant");
        let context = ScoringContext { profile, as_of };
        apply_rules(RATE_RULES, BASE_RATE, &context)
    }

    /// Rate for a preliminary offer, keyed only on the two product flags.
    pub fn preliminary_rate(&self, insurance_enabled: bool, salary_client: bool) -> Decimal {
        let adjustment = match (insurance_enabled, salary_client) {
            (false, false) => dec!(1.5),
            (false, true) | (true, false) => dec!(0.5),
            (true, true) => dec!(-1.5),
        };
        BASE_RATE + adjustment
    }
}
