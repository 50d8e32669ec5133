use crate::amortization::AmortizationEngine;
use crate::domain::applicant::LoanApplicationRequest;
use crate::domain::credit::LoanOffer;
use crate::scoring::RateCalculator;
use tracing::info;

/// Flag combinations quoted for every request, in output order:
/// `(insurance_enabled, salary_client)`.
pub const OFFER_FLAGS: [(bool, bool); 4] =
    [(false, false), (false, true), (true, false), (true, true)];

/// Quotes the four preliminary offers for a loan request.
///
/// Offers never refuse: the preliminary rate only depends on the product flags.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfferGenerator {
    rates: RateCalculator,
    amortization: AmortizationEngine,
}

impl OfferGenerator {
    pub fn new(rates: RateCalculator, amortization: AmortizationEngine) -> Self {
        Self {
            rates,
            amortization,
        }
    }

    pub fn generate_offers(&self, request: &LoanApplicationRequest) -> [LoanOffer; 4] {
        info!(
            amount = %request.amount,
            term = %request.term,
            "generating loan offers"
        );
        OFFER_FLAGS.map(|(insurance_enabled, salary_client)| {
            self.single_offer(request, insurance_enabled, salary_client)
        })
    }

    fn single_offer(
        &self,
        request: &LoanApplicationRequest,
        insurance_enabled: bool,
        salary_client: bool,
    ) -> LoanOffer {
        let rate = self.rates.preliminary_rate(insurance_enabled, salary_client);
        let monthly_payment = self
            .amortization
            .monthly_payment(request.amount, rate, request.term);
        LoanOffer {
            requested_amount: request.amount,
            total_amount: self.amortization.total_cost(request.amount, rate, request.term),
            term: request.term,
            monthly_payment,
            rate,
            insurance_enabled,
            salary_client,
        }
    }
}
