use super::evaluator::CreditEvaluator;
use super::offers::OfferGenerator;
use crate::domain::applicant::{ApplicantProfile, LoanApplicationRequest};
use crate::domain::credit::{CreditResult, LoanOffer};
use crate::domain::rejection::Rejection;
use crate::error::{ConveyorError, Result};
use chrono::NaiveDate;

/// Rows handed to the blocking pool at a time. Bounds both memory and the number
/// of in-flight tasks when a large file is streamed.
pub const CHUNK_SIZE: usize = 256;

/// Pulls up to `size` rows from `rows`, handing malformed ones to `on_error`.
///
/// Returns `None` once the source is exhausted. A chunk may be empty when every
/// row in it was malformed.
pub fn next_chunk<T, I, E>(rows: &mut I, size: usize, mut on_error: E) -> Option<Vec<T>>
where
    I: Iterator<Item = Result<T>>,
    E: FnMut(ConveyorError),
{
    let mut pulled = 0;
    let mut chunk = Vec::new();
    for row in rows.take(size) {
        pulled += 1;
        match row {
            Ok(value) => chunk.push(value),
            Err(e) => on_error(e),
        }
    }
    (pulled > 0).then_some(chunk)
}

/// Evaluates every profile on the blocking pool, returning decisions in input order.
///
/// All evaluations share the single `as_of` date supplied by the caller.
pub async fn evaluate_batch(
    evaluator: CreditEvaluator,
    profiles: Vec<ApplicantProfile>,
    as_of: NaiveDate,
) -> Result<Vec<std::result::Result<CreditResult, Rejection>>> {
    fan_out(profiles, move |profile| evaluator.evaluate_on(&profile, as_of)).await
}

/// Quotes offers for every request on the blocking pool, in input order.
pub async fn quote_batch(
    generator: OfferGenerator,
    requests: Vec<LoanApplicationRequest>,
) -> Result<Vec<[LoanOffer; 4]>> {
    fan_out(requests, move |request| generator.generate_offers(&request)).await
}

async fn fan_out<T, R, F>(items: Vec<T>, work: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> R + Clone + Send + 'static,
{
    let handles: Vec<_> = items
        .into_iter()
        .map(|item| {
            let work = work.clone();
            tokio::task::spawn_blocking(move || work(item))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| ConveyorError::TaskError(e.to_string()))?;
        results.push(result);
    }
    Ok(results)
}
