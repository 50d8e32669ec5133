use crate::domain::applicant::{
    ApplicantProfile, Employment, EmploymentStatus, Gender, LoanApplicationRequest,
    MaritalStatus, Position,
};
use crate::domain::money::{Amount, Term};
use crate::error::{ConveyorError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One flattened scoring row; employment columns sit next to the applicant's.
#[derive(Debug, Deserialize)]
struct ScoringRecord {
    amount: Amount,
    term: Term,
    first_name: String,
    last_name: String,
    middle_name: Option<String>,
    gender: Gender,
    birth_date: Option<NaiveDate>,
    passport_series: String,
    passport_number: String,
    passport_issue_date: Option<NaiveDate>,
    passport_issue_branch: String,
    marital_status: MaritalStatus,
    dependents: u32,
    employment_status: EmploymentStatus,
    employer_inn: String,
    salary: Amount,
    position: Position,
    work_experience_total: u32,
    work_experience_current: u32,
    account: String,
    insurance_enabled: bool,
    salary_client: bool,
}

impl From<ScoringRecord> for ApplicantProfile {
    fn from(record: ScoringRecord) -> Self {
        Self {
            amount: record.amount,
            term: record.term,
            first_name: record.first_name,
            last_name: record.last_name,
            middle_name: record.middle_name,
            gender: record.gender,
            birth_date: record.birth_date,
            passport_series: record.passport_series,
            passport_number: record.passport_number,
            passport_issue_date: record.passport_issue_date,
            passport_issue_branch: record.passport_issue_branch,
            marital_status: record.marital_status,
            dependents: record.dependents,
            employment: Employment {
                status: record.employment_status,
                employer_inn: record.employer_inn,
                salary: record.salary,
                position: record.position,
                work_experience_total: record.work_experience_total,
                work_experience_current: record.work_experience_current,
            },
            account: record.account,
            insurance_enabled: record.insurance_enabled,
            salary_client: record.salary_client,
        }
    }
}

/// Reads loan applications from a CSV source.
///
/// This reader wraps `csv::Reader` and yields one `Result` per row, so a single
/// malformed row (bad enum value, non-positive amount, missing column) does not
/// stop the rest of the file from being processed.
pub struct ApplicationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApplicationReader<R> {
    /// Creates a new `ApplicationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows as preliminary offer requests.
    pub fn requests(self) -> impl Iterator<Item = Result<LoanApplicationRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ConveyorError::from))
    }

    /// Lazily deserializes rows as full scoring profiles.
    pub fn profiles(self) -> impl Iterator<Item = Result<ApplicantProfile>> {
        self.reader
            .into_deserialize::<ScoringRecord>()
            .map(|result| result.map(ApplicantProfile::from).map_err(ConveyorError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const REQUEST_HEADER: &str = "amount,term,first_name,last_name,middle_name,email,birth_date,\
        passport_series,passport_number";

    const SCORING_HEADER: &str = "amount,term,first_name,last_name,middle_name,gender,birth_date,\
        passport_series,passport_number,passport_issue_date,passport_issue_branch,marital_status,\
        dependents,employment_status,employer_inn,salary,position,work_experience_total,\
        work_experience_current,account,insurance_enabled,salary_client";

    #[test]
    fn test_reader_valid_requests() {
        let data = format!(
            "{REQUEST_HEADER}\n\
             15000, 6, Ada, Quinn, , ada@example.com, 2000-04-04, 1234, 123456\n\
             2500.50, 1, Bo, Lind, Erik, bo@example.com, , 4321, 654321"
        );
        let reader = ApplicationReader::new(data.as_bytes());
        let results: Vec<Result<LoanApplicationRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.amount.value(), dec!(15000));
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.amount.value(), dec!(2500.50));
        assert_eq!(second.middle_name.as_deref(), Some("Erik"));
        assert_eq!(second.birth_date, None);
    }

    #[test]
    fn test_reader_keeps_long_amounts_exact() {
        let data = format!(
            "{REQUEST_HEADER}\n\
             1234567890123456.78,6,Ada,Quinn,,ada@example.com,,1234,123456\n\
             0.000000000000000001,1,Bo,Lind,,bo@example.com,,4321,654321"
        );
        let reader = ApplicationReader::new(data.as_bytes());
        let results: Vec<Result<LoanApplicationRequest>> = reader.requests().collect();

        assert_eq!(results[0].as_ref().unwrap().amount.value(), dec!(1234567890123456.78));
        assert_eq!(
            results[1].as_ref().unwrap().amount.value(),
            dec!(0.000000000000000001)
        );
    }

    #[test]
    fn test_reader_valid_profile() {
        let data = format!(
            "{SCORING_HEADER}\n\
             15000,6,Ada,Quinn,,MALE,2000-04-15,4444,666666,2018-10-10,Central,MARRIED,1,\
             BUSINESS_OWNER,458256,25000,MIDDLE_MANAGER,13,4,5698523641,true,false"
        );
        let reader = ApplicationReader::new(data.as_bytes());
        let results: Vec<Result<ApplicantProfile>> = reader.profiles().collect();

        assert_eq!(results.len(), 1);
        let profile = results[0].as_ref().unwrap();
        assert_eq!(profile.employment.status, EmploymentStatus::BusinessOwner);
        assert_eq!(profile.employment.salary.value(), dec!(25000));
        assert_eq!(profile.employment.position, Position::MiddleManager);
        assert_eq!(profile.marital_status, MaritalStatus::Married);
        assert!(profile.insurance_enabled);
        assert!(!profile.salary_client);
    }

    #[test]
    fn test_reader_missing_birth_date_is_kept_as_none() {
        let data = format!(
            "{SCORING_HEADER}\n\
             15000,6,Ada,Quinn,,FEMALE,,4444,666666,,Central,SINGLE,0,\
             EMPLOYED,458256,25000,ORDINARY,13,4,5698523641,false,false"
        );
        let reader = ApplicationReader::new(data.as_bytes());
        let profile = reader.profiles().next().unwrap().unwrap();
        assert_eq!(profile.birth_date, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = format!(
            "{SCORING_HEADER}\n\
             15000,6,Ada,Quinn,,MALE,2000-04-15,4444,666666,,Central,MARRIED,1,\
             RETIRED,458256,25000,MIDDLE_MANAGER,13,4,5698523641,true,false\n\
             15000,6,Ada,Quinn,,MALE,2000-04-15,4444,666666,,Central,MARRIED,1,\
             EMPLOYED,458256,-5,MIDDLE_MANAGER,13,4,5698523641,true,false"
        );
        let reader = ApplicationReader::new(data.as_bytes());
        let results: Vec<Result<ApplicantProfile>> = reader.profiles().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(ConveyorError::CsvError(_))));
        assert!(matches!(results[1], Err(ConveyorError::CsvError(_))));
    }
}
