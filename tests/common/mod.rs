#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use loan_conveyor::domain::applicant::{
    ApplicantProfile, Employment, EmploymentStatus, Gender, LoanApplicationRequest,
    MaritalStatus, Position,
};
use loan_conveyor::domain::money::{Amount, Term};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::io::Error;
use std::path::Path;

pub const REQUEST_HEADER: [&str; 9] = [
    "amount",
    "term",
    "first_name",
    "last_name",
    "middle_name",
    "email",
    "birth_date",
    "passport_series",
    "passport_number",
];

pub const SCORING_HEADER: [&str; 22] = [
    "amount",
    "term",
    "first_name",
    "last_name",
    "middle_name",
    "gender",
    "birth_date",
    "passport_series",
    "passport_number",
    "passport_issue_date",
    "passport_issue_branch",
    "marital_status",
    "dependents",
    "employment_status",
    "employer_inn",
    "salary",
    "position",
    "work_experience_total",
    "work_experience_current",
    "account",
    "insurance_enabled",
    "salary_client",
];

/// Evaluation date used throughout the integration tests.
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Business owner, middle manager, married, one dependent, male aged 26 on [`as_of`].
pub fn reference_profile() -> ApplicantProfile {
    ApplicantProfile {
        amount: Amount::new(dec!(15000)).unwrap(),
        term: Term::new(6).unwrap(),
        first_name: "Gift".to_string(),
        last_name: "Masenya".to_string(),
        middle_name: Some("Senyaman".to_string()),
        gender: Gender::Male,
        birth_date: NaiveDate::from_ymd_opt(2000, 4, 15),
        passport_series: "4444".to_string(),
        passport_number: "666666".to_string(),
        passport_issue_date: NaiveDate::from_ymd_opt(2018, 10, 10),
        passport_issue_branch: "Home Affairs".to_string(),
        marital_status: MaritalStatus::Married,
        dependents: 1,
        employment: Employment {
            status: EmploymentStatus::BusinessOwner,
            employer_inn: "458256".to_string(),
            salary: Amount::new(dec!(25000)).unwrap(),
            position: Position::MiddleManager,
            work_experience_total: 13,
            work_experience_current: 4,
        },
        account: "5698523641".to_string(),
        insurance_enabled: true,
        salary_client: false,
    }
}

pub fn loan_request(amount: Decimal, years: u16) -> LoanApplicationRequest {
    LoanApplicationRequest {
        amount: Amount::new(amount).unwrap(),
        term: Term::new(years).unwrap(),
        first_name: "Gift".to_string(),
        last_name: "Masenya".to_string(),
        middle_name: None,
        email: "senyaman@example.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2000, 4, 4),
        passport_series: "1234".to_string(),
        passport_number: "123456".to_string(),
    }
}

/// A date `years` whole years before [`as_of`].
pub fn born_years_ago(years: u32) -> Option<NaiveDate> {
    as_of().with_year(as_of().year() - years as i32)
}

fn wire<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value).unwrap() {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

pub fn scoring_row(profile: &ApplicantProfile) -> Vec<String> {
    vec![
        wire(&profile.amount),
        profile.term.years().to_string(),
        profile.first_name.clone(),
        profile.last_name.clone(),
        profile.middle_name.clone().unwrap_or_default(),
        wire(&profile.gender),
        optional_date(profile.birth_date),
        profile.passport_series.clone(),
        profile.passport_number.clone(),
        optional_date(profile.passport_issue_date),
        profile.passport_issue_branch.clone(),
        wire(&profile.marital_status),
        profile.dependents.to_string(),
        wire(&profile.employment.status),
        profile.employment.employer_inn.clone(),
        wire(&profile.employment.salary),
        wire(&profile.employment.position),
        profile.employment.work_experience_total.to_string(),
        profile.employment.work_experience_current.to_string(),
        profile.account.clone(),
        profile.insurance_enabled.to_string(),
        profile.salary_client.to_string(),
    ]
}

pub fn request_row(request: &LoanApplicationRequest) -> Vec<String> {
    vec![
        wire(&request.amount),
        request.term.years().to_string(),
        request.first_name.clone(),
        request.last_name.clone(),
        request.middle_name.clone().unwrap_or_default(),
        request.email.clone(),
        optional_date(request.birth_date),
        request.passport_series.clone(),
        request.passport_number.clone(),
    ]
}

pub fn write_scoring_csv(path: &Path, profiles: &[ApplicantProfile]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(SCORING_HEADER)?;
    for profile in profiles {
        wtr.write_record(scoring_row(profile))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_requests_csv(path: &Path, requests: &[LoanApplicationRequest]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(REQUEST_HEADER)?;
    for request in requests {
        wtr.write_record(request_row(request))?;
    }
    wtr.flush()?;
    Ok(())
}
