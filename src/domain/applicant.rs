use super::money::{Amount, Term};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Married,
    Divorced,
    Single,
    WidowWidower,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    BusinessOwner,
    Unemployed,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Ordinary,
    MiddleManager,
    TopManager,
}

/// Employment details used by the scoring rules.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Employment {
    pub status: EmploymentStatus,
    /// Employer tax id, carried through but never interpreted.
    pub employer_inn: String,
    /// Monthly salary.
    pub salary: Amount,
    pub position: Position,
    /// Total work experience in months.
    pub work_experience_total: u32,
    /// Work experience at the current employer in months.
    pub work_experience_current: u32,
}

/// Full applicant data submitted for final underwriting.
///
/// Identity and passport fields are carried for the caller's benefit only;
/// none of them take part in rate calculation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ApplicantProfile {
    pub amount: Amount,
    pub term: Term,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub gender: Gender,
    /// A missing birth date is a rejection, never an age of zero.
    pub birth_date: Option<NaiveDate>,
    pub passport_series: String,
    pub passport_number: String,
    pub passport_issue_date: Option<NaiveDate>,
    pub passport_issue_branch: String,
    pub marital_status: MaritalStatus,
    pub dependents: u32,
    pub employment: Employment,
    pub account: String,
    pub insurance_enabled: bool,
    pub salary_client: bool,
}

impl ApplicantProfile {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Profile-light request used to quote preliminary offers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LoanApplicationRequest {
    pub amount: Amount,
    pub term: Term,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub passport_series: String,
    pub passport_number: String,
}
