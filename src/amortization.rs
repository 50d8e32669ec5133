use crate::domain::credit::PaymentScheduleEntry;
use crate::domain::money::{Amount, MONTHS_PER_YEAR, Term};
use crate::domain::precision::{CENT, divide, divide_up, installment, interest};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Monthly payment, total repayment and the month-by-month schedule of a loan.
#[derive(Debug, Clone, PartialEq)]
pub struct Amortization {
    pub monthly_payment: Decimal,
    /// Monthly payment times the number of installments.
    pub total_cost: Decimal,
    pub entries: Vec<PaymentScheduleEntry>,
}

/// Level-payment (annuity) amortization under the shared precision policy.
///
/// The engine is stateless: identical inputs, including the start date, always
/// produce identical output.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Converts an annual percentage rate into a monthly fraction.
    pub fn monthly_rate(&self, annual_rate: Decimal) -> Decimal {
        divide(divide(annual_rate, dec!(100)), Decimal::from(MONTHS_PER_YEAR))
    }

    /// Level installment, rounded up to the cent.
    pub fn monthly_payment(&self, principal: Amount, annual_rate: Decimal, term: Term) -> Decimal {
        let rate = self.monthly_rate(annual_rate);
        level_payment(principal.value(), rate, term.months())
    }

    /// Total repaid over the whole term.
    pub fn total_cost(&self, principal: Amount, annual_rate: Decimal, term: Term) -> Decimal {
        total_repaid(self.monthly_payment(principal, annual_rate, term), term.months())
    }

    /// Builds the full schedule. Entry `i` falls due `i` months after `start`.
    pub fn schedule(
        &self,
        principal: Amount,
        annual_rate: Decimal,
        term: Term,
        start: NaiveDate,
    ) -> Amortization {
        let rate = self.monthly_rate(annual_rate);
        let months = term.months();
        let monthly_payment = level_payment(principal.value(), rate, months);
        debug!(%principal, %annual_rate, months, %monthly_payment, "generating payment schedule");

        let mut entries = Vec::with_capacity(months as usize);
        let mut balance = principal.value();
        for number in 1..=months {
            let interest_payment = interest(balance * rate);
            let principal_payment = monthly_payment - interest_payment;
            balance -= principal_payment;
            // Absorbs the rounding residue of the final installment.
            if balance <= Decimal::ZERO {
                balance = Decimal::ZERO;
            }
            entries.push(PaymentScheduleEntry {
                number,
                date: due_date(start, number),
                total_payment: monthly_payment,
                interest_payment,
                principal_payment,
                remaining_balance: balance,
            });
        }

        Amortization {
            monthly_payment,
            total_cost: total_repaid(monthly_payment, months),
            entries,
        }
    }
}

/// Level installment `P * r * g / (g - 1)` with `g = (1 + r)^n`, rounded up to the cent.
///
/// Computed as `P * r + P * r / (g - 1)` so the quotient can round up on its own.
/// A zero rate degrades to straight-line repayment. When `g` no longer fits a
/// `Decimal` the annuity is within a cent of interest-only, and one cent over
/// the interest still clears the balance.
fn level_payment(principal: Decimal, rate: Decimal, months: u32) -> Decimal {
    if rate.is_zero() {
        return installment(divide_up(principal, Decimal::from(months)));
    }
    let interest_only = principal * rate;
    match compound_growth(rate, months).filter(|growth| *growth != Decimal::ONE) {
        Some(growth) => {
            installment(interest_only + divide_up(interest_only, growth - Decimal::ONE))
        }
        None => installment(interest_only) + CENT,
    }
}

/// `(1 + rate)^months`, or `None` on overflow.
fn compound_growth(rate: Decimal, months: u32) -> Option<Decimal> {
    let factor = Decimal::ONE + rate;
    (0..months).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(factor))
}

/// `payment * months`, saturating at `Decimal::MAX`.
fn total_repaid(payment: Decimal, months: u32) -> Decimal {
    payment.saturating_mul(Decimal::from(months))
}

fn due_date(start: NaiveDate, number: u32) -> NaiveDate {
    start
        .checked_add_months(Months::new(number))
        .unwrap_or(NaiveDate::MAX)
}
