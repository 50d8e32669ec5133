use serde::{Serialize, Serializer};
use thiserror::Error;

/// Business-rule outcomes that end an evaluation without a rate.
///
/// These are expected results, not infrastructure failures: callers receive
/// them as the `Err` side of a decision and choose how to present them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    #[error("unemployed applicants are ineligible")]
    UnemployedApplicant,
    #[error("requested amount exceeds 20× salary")]
    AmountExceedsSalaryMultiple,
    #[error("applicant below minimum age")]
    ApplicantTooYoung,
    #[error("applicant above maximum age")]
    ApplicantTooOld,
    #[error("insufficient total work experience")]
    InsufficientTotalExperience,
    #[error("insufficient current-job experience")]
    InsufficientCurrentExperience,
    #[error("birth date required")]
    MissingBirthDate,
    #[error("applicant below legal age of 18")]
    AgeBelowMinimumLegal,
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::UnemployedApplicant => "UNEMPLOYED_APPLICANT",
            Rejection::AmountExceedsSalaryMultiple => "AMOUNT_EXCEEDS_SALARY_MULTIPLE",
            Rejection::ApplicantTooYoung => "APPLICANT_TOO_YOUNG",
            Rejection::ApplicantTooOld => "APPLICANT_TOO_OLD",
            Rejection::InsufficientTotalExperience => "INSUFFICIENT_TOTAL_EXPERIENCE",
            Rejection::InsufficientCurrentExperience => "INSUFFICIENT_CURRENT_EXPERIENCE",
            Rejection::MissingBirthDate => "MISSING_BIRTH_DATE",
            Rejection::AgeBelowMinimumLegal => "AGE_BELOW_MINIMUM_LEGAL",
        }
    }
}

impl Serialize for Rejection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Rejection::UnemployedApplicant.code(), "UNEMPLOYED_APPLICANT");
        assert_eq!(
            serde_json::to_string(&Rejection::MissingBirthDate).unwrap(),
            "\"MISSING_BIRTH_DATE\""
        );
    }

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(
            Rejection::InsufficientCurrentExperience.to_string(),
            "insufficient current-job experience"
        );
    }
}
