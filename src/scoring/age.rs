use crate::domain::rejection::Rejection;
use chrono::NaiveDate;

/// Youngest age at which an applicant may enter a contract at all.
pub const MINIMUM_LEGAL_AGE: u32 = 18;

/// Whole years elapsed from `birth_date` to `as_of`.
///
/// A birth date after `as_of` counts as zero years.
pub fn whole_years_between(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    as_of.years_since(birth_date).unwrap_or(0)
}

/// Computes the applicant's age on `as_of`, refusing minors outright.
pub fn applicant_age(birth_date: Option<NaiveDate>, as_of: NaiveDate) -> Result<u32, Rejection> {
    let birth_date = birth_date.ok_or(Rejection::MissingBirthDate)?;
    let age = whole_years_between(birth_date, as_of);
    if age < MINIMUM_LEGAL_AGE {
        return Err(Rejection::AgeBelowMinimumLegal);
    }
    Ok(age)
}
