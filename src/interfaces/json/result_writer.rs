use crate::domain::credit::{CreditResult, LoanOffer};
use crate::domain::rejection::Rejection;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Wire shape of an underwriting decision.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum DecisionRecord<'a> {
    Approved(&'a CreditResult),
    Rejected {
        kind: &'static str,
        message: String,
    },
}

impl<'a> From<&'a std::result::Result<CreditResult, Rejection>> for DecisionRecord<'a> {
    fn from(decision: &'a std::result::Result<CreditResult, Rejection>) -> Self {
        match decision {
            Ok(credit) => DecisionRecord::Approved(credit),
            Err(rejection) => DecisionRecord::Rejected {
                kind: rejection.code(),
                message: rejection.to_string(),
            },
        }
    }
}

/// Writes results as JSON Lines: one document per application.
pub struct ResultWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_offers(&mut self, offers: &[LoanOffer]) -> Result<()> {
        self.write_line(&offers)
    }

    pub fn write_decision(
        &mut self,
        decision: &std::result::Result<CreditResult, Rejection>,
    ) -> Result<()> {
        self.write_line(&DecisionRecord::from(decision))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
