//! Candidate search across a time window.
//!
//! Each instant depends only on the shared [`DailyContext`], so the loop is
//! a map over instants, a filter on the gate, and a total-order sort.

use std::cmp::Ordering;

use chrono::{NaiveDateTime, TimeDelta};
use janma_ephem::EphemerisGateway;
use janma_vedic_base::RectificationFilter;
use tracing::info;

use crate::daily::DailyContext;
use crate::error::SearchError;
use crate::evaluate::evaluate_instant;
use crate::search_types::{Candidate, SearchOptions, SearchRequest};

/// Instants from `start` to `end` inclusive at `step_minutes` spacing.
pub fn candidate_instants(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step_minutes: u32,
) -> impl Iterator<Item = NaiveDateTime> {
    let step = TimeDelta::minutes(i64::from(step_minutes.max(1)));
    std::iter::successors(Some(start), move |t| t.checked_add_signed(step))
        .take_while(move |t| *t <= end)
}

/// Best first; equal scores in chronological order.
pub fn rank_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then_with(|| a.time.cmp(&b.time))
}

/// Scan the request's window and return accepted candidates, best first.
///
/// An empty list is a valid outcome. Any ephemeris failure aborts the
/// search.
pub fn search_candidates<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    request: &SearchRequest,
    options: &SearchOptions,
) -> Result<Vec<Candidate>, SearchError> {
    request.geo.validate()?;
    options.validate()?;
    let filter = RectificationFilter::new(options.orb_deg)?;
    let (start, end) = request.window.bounds(request.geo.date)?;

    let daily = DailyContext::compute(gateway, &request.geo)?;

    let mut scanned = 0usize;
    let mut candidates = candidate_instants(start, end, options.step_minutes)
        .inspect(|_| scanned += 1)
        .map(|t| evaluate_instant(gateway, request, &daily, &filter, &options.weights, t))
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>, _>>()?;

    candidates.sort_by(rank_order);
    if let Some(cap) = options.max_candidates {
        candidates.truncate(cap);
    }

    info!(
        date = %request.geo.date,
        %start,
        %end,
        step_minutes = options.step_minutes,
        scanned,
        accepted = candidates.len(),
        best = candidates.first().map(|c| c.composite_score),
        "candidate search finished"
    );

    Ok(candidates)
}
