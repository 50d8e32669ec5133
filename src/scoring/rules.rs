use super::age::whole_years_between;
use crate::domain::applicant::{ApplicantProfile, EmploymentStatus, Gender, MaritalStatus, Position};
use crate::domain::rejection::Rejection;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::ops::RangeInclusive;
use tracing::{debug, info};

const SALARY_MULTIPLE_LIMIT: Decimal = dec!(20);
const MIN_SCORING_AGE: u32 = 20;
const MAX_SCORING_AGE: u32 = 60;
const FEMALE_DISCOUNT_AGES: RangeInclusive<u32> = 35..=60;
const MALE_DISCOUNT_AGES: RangeInclusive<u32> = 30..=55;
const MIN_TOTAL_EXPERIENCE_MONTHS: u32 = 12;
const MIN_CURRENT_EXPERIENCE_MONTHS: u32 = 3;

/// What a single rule does to the running rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    Adjust(Decimal),
    Reject(Rejection),
}

/// Facts a rule may inspect. `as_of` is read once per evaluation.
pub struct ScoringContext<'a> {
    pub profile: &'a ApplicantProfile,
    pub as_of: NaiveDate,
}

impl ScoringContext<'_> {
    fn age(&self) -> Option<u32> {
        self.profile
            .birth_date
            .map(|birth_date| whole_years_between(birth_date, self.as_of))
    }
}

/// A named entry of the rate table.
pub struct ScoringRule {
    pub name: &'static str,
    check: fn(&ScoringContext<'_>) -> Option<RuleEffect>,
}

impl ScoringRule {
    pub fn check(&self, context: &ScoringContext<'_>) -> Option<RuleEffect> {
        (self.check)(context)
    }
}

/// The rate table, in evaluation order.
///
/// Order decides which rejection a multiply-disqualified applicant receives.
pub const RATE_RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "employment status",
        check: employment_status,
    },
    ScoringRule {
        name: "position",
        check: position,
    },
    ScoringRule {
        name: "salary multiple",
        check: salary_multiple,
    },
    ScoringRule {
        name: "marital status",
        check: marital_status,
    },
    ScoringRule {
        name: "dependents",
        check: dependents,
    },
    ScoringRule {
        name: "age limits",
        check: age_limits,
    },
    ScoringRule {
        name: "gender age band",
        check: gender_age_band,
    },
    ScoringRule {
        name: "work experience",
        check: work_experience,
    },
];

/// Folds `rules` over `base_rate`, stopping at the first rejection.
///
/// Adjustments made before a rejection are discarded along with the rate.
pub fn apply_rules(
    rules: &[ScoringRule],
    base_rate: Decimal,
    context: &ScoringContext<'_>,
) -> Result<Decimal, Rejection> {
    rules
        .iter()
        .try_fold(base_rate, |rate, rule| match rule.check(context) {
            Some(RuleEffect::Adjust(delta)) => {
                debug!(rule = rule.name, %delta, rate = %(rate + delta), "rate adjusted");
                Ok(rate + delta)
            }
            Some(RuleEffect::Reject(rejection)) => {
                info!(rule = rule.name, code = rejection.code(), "refusal: {rejection}");
                Err(rejection)
            }
            None => Ok(rate),
        })
}

fn employment_status(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    match context.profile.employment.status {
        EmploymentStatus::SelfEmployed => Some(RuleEffect::Adjust(dec!(1))),
        EmploymentStatus::BusinessOwner => Some(RuleEffect::Adjust(dec!(3))),
        EmploymentStatus::Unemployed => Some(RuleEffect::Reject(Rejection::UnemployedApplicant)),
        EmploymentStatus::Employed => None,
    }
}

fn position(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    match context.profile.employment.position {
        Position::TopManager => Some(RuleEffect::Adjust(dec!(-4))),
        Position::MiddleManager => Some(RuleEffect::Adjust(dec!(-2))),
        Position::Ordinary => None,
    }
}

fn salary_multiple(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    let ceiling = context
        .profile
        .employment
        .salary
        .value()
        .checked_mul(SALARY_MULTIPLE_LIMIT);
    // An unrepresentable ceiling cannot be exceeded.
    ceiling
        .is_some_and(|ceiling| context.profile.amount.value() > ceiling)
        .then_some(RuleEffect::Reject(Rejection::AmountExceedsSalaryMultiple))
}

fn marital_status(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    match context.profile.marital_status {
        MaritalStatus::Married => Some(RuleEffect::Adjust(dec!(-3))),
        MaritalStatus::Divorced => Some(RuleEffect::Adjust(dec!(1))),
        MaritalStatus::Single | MaritalStatus::WidowWidower => None,
    }
}

fn dependents(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    (context.profile.dependents > 1).then_some(RuleEffect::Adjust(dec!(1)))
}

fn age_limits(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    match context.age() {
        None => Some(RuleEffect::Reject(Rejection::MissingBirthDate)),
        Some(age) if age < MIN_SCORING_AGE => {
            Some(RuleEffect::Reject(Rejection::ApplicantTooYoung))
        }
        Some(age) if age > MAX_SCORING_AGE => {
            Some(RuleEffect::Reject(Rejection::ApplicantTooOld))
        }
        Some(_) => None,
    }
}

fn gender_age_band(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    let age = context.age()?;
    let band = match context.profile.gender {
        Gender::Female => FEMALE_DISCOUNT_AGES,
        Gender::Male => MALE_DISCOUNT_AGES,
    };
    band.contains(&age).then_some(RuleEffect::Adjust(dec!(-3)))
}

fn work_experience(context: &ScoringContext<'_>) -> Option<RuleEffect> {
    let employment = &context.profile.employment;
    if employment.work_experience_total < MIN_TOTAL_EXPERIENCE_MONTHS {
        Some(RuleEffect::Reject(Rejection::InsufficientTotalExperience))
    } else if employment.work_experience_current < MIN_CURRENT_EXPERIENCE_MONTHS {
        Some(RuleEffect::Reject(Rejection::InsufficientCurrentExperience))
    } else {
        None
    }
}
