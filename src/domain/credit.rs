use super::money::{Amount, Term};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One installment of a payment schedule.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentScheduleEntry {
    /// 1-based installment number.
    pub number: u32,
    pub date: NaiveDate,
    pub total_payment: Decimal,
    pub interest_payment: Decimal,
    pub principal_payment: Decimal,
    /// Outstanding principal after this installment. Never negative.
    pub remaining_balance: Decimal,
}

/// Final underwriting result for an approved applicant.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CreditResult {
    pub amount: Amount,
    pub term: Term,
    pub rate: Decimal,
    pub monthly_payment: Decimal,
    /// Principal plus total interest.
    pub total_cost: Decimal,
    pub insurance_enabled: bool,
    pub salary_client: bool,
    pub payment_schedule: Vec<PaymentScheduleEntry>,
}

/// A preliminary quote for one insurance/salary-client combination.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct LoanOffer {
    pub requested_amount: Amount,
    pub total_amount: Decimal,
    pub term: Term,
    pub monthly_payment: Decimal,
    pub rate: Decimal,
    pub insurance_enabled: bool,
    pub salary_client: bool,
}
