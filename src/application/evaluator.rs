use crate::amortization::AmortizationEngine;
use crate::domain::applicant::ApplicantProfile;
use crate::domain::credit::CreditResult;
use crate::domain::rejection::Rejection;
use crate::scoring::RateCalculator;
use chrono::{Local, NaiveDate};
use tracing::info;

/// Final underwriting: scores the applicant and, if accepted, prices the loan.
///
/// `CreditEvaluator` holds no mutable state, so a single instance may serve any
/// number of concurrent evaluations.
#[derive(Debug, Default, Clone, Copy)]
pub struct CreditEvaluator {
    rates: RateCalculator,
    amortization: AmortizationEngine,
}

impl CreditEvaluator {
    /// Creates a new `CreditEvaluator`.
    ///
    /// # Arguments
    ///
    /// * `rates` - The full rate calculator.
    /// * `amortization` - The engine that prices the resolved rate.
    pub fn new(rates: RateCalculator, amortization: AmortizationEngine) -> Self {
        Self {
            rates,
            amortization,
        }
    }

    /// Evaluates `profile` as of today.
    ///
    /// The clock is read once; ages and every schedule date derive from that reading.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> Result<CreditResult, Rejection> {
        self.evaluate_on(profile, Local::now().date_naive())
    }

    /// Evaluates `profile` with `as_of` as the evaluation date.
    ///
    /// A rejection from the rate calculator is returned unchanged and nothing
    /// else is computed.
    pub fn evaluate_on(
        &self,
        profile: &ApplicantProfile,
        as_of: NaiveDate,
    ) -> Result<CreditResult, Rejection> {
        let rate = self.rates.evaluate_on(profile, as_of)?;
        let amortization = self
            .amortization
            .schedule(profile.amount, rate, profile.term, as_of);

        info!(
            applicant = %profile.full_name(),
            %rate,
            monthly_payment = %amortization.monthly_payment,
            "credit approved"
        );

        Ok(CreditResult {
            amount: profile.amount,
            term: profile.term,
            rate,
            monthly_payment: amortization.monthly_payment,
            total_cost: amortization.total_cost,
            insurance_enabled: profile.insurance_enabled,
            salary_client: profile.salary_client,
            payment_schedule: amortization.entries,
        })
    }
}
