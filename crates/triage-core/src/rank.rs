//! Match scoring and ordering.
//!
//! The score model: a candidate starts at 100 and loses 10 points per
//! documented caveat — a `Conditional` presentation value, or a
//! `Conditional` value for a queried non-universal funding source. Each
//! applied penalty is recorded as a human-readable detail. The inclusion
//! gates in the engine are strict (`Y` only), so candidates they admit
//! score a clean 100; the function is total over the tri-state values so
//! the sort key is fully specified.

use std::cmp::Reverse;

use triage_model::{AvailabilityStatus, Eligibility, FundingSource, MatchResult};

const CONDITIONAL_PENALTY: u8 = 10;

/// Score one candidate's eligibility values for the queried presentation
/// and funding source.
pub fn score_candidate(
    presentation: Eligibility,
    funding: Eligibility,
    funding_source: FundingSource,
) -> (u8, Vec<String>) {
    let mut score = 100u8;
    let mut details = Vec::new();

    if presentation.is_conditional() {
        score = score.saturating_sub(CONDITIONAL_PENALTY);
        details.push("Conditional treatment for this presentation".to_string());
    }
    if !funding_source.is_universal() && funding.is_conditional() {
        score = score.saturating_sub(CONDITIONAL_PENALTY);
        details.push("Conditional acceptance of this funding".to_string());
    }
    (score, details)
}

/// Order results for display: clinicians whose effective status is exactly
/// `Available` first, then descending score. The sort is stable, so ties
/// retain roster order — repeated queries over an unchanged roster return
/// identical orderings.
pub fn sort_results(results: &mut [MatchResult]) {
    results.sort_by_key(|result| {
        (
            result.availability_status != AvailabilityStatus::Available,
            Reverse(result.match_score),
        )
    });
}
