//! Caller-facing rectification report.

use chrono::NaiveDate;
use janma_ephem::EphemerisGateway;
use serde::Serialize;

use crate::error::SearchError;
use crate::search::search_candidates;
use crate::search_types::{Candidate, SearchOptions, SearchRequest};

/// Version tag of the rule set.
pub const ENGINE_VERSION: &str = "bphs-btr-v1";

/// Verse sources of each rule, BPHS chapter 4.
pub const METHODOLOGY: &str = "\
BPHS birth time rectification, Brihat Parashara Hora Shastra chapter 4.
- Gulika: 4.1-4.3
- Madhya Pranapada: 4.5
- Degree matching: 4.6
- Sphuta Pranapada: 4.7
- Triple verification (Pranapada, Gulika, Moon): 4.8
- Trine rule, mandatory: 4.10
- Nisheka lagna: 4.12-4.16
- Bhava, Hora, Ghati and Varnada lagnas: 4.18-4.28
Every candidate passes the trine rule. Candidates are ranked by degree \
match, Gulika/Moon alignment, Nisheka plausibility and, when supplied, \
physical traits and life events.";

/// Ranked candidates plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectificationReport {
    pub engine_version: &'static str,
    pub date: NaiveDate,
    /// Local `HH:MM` start of the searched window.
    pub window_start: String,
    /// Local `HH:MM` end of the searched window.
    pub window_end: String,
    pub step_minutes: u32,
    pub best: Option<Candidate>,
    pub candidates: Vec<Candidate>,
    pub methodology: &'static str,
}

/// Run a search and wrap the result in a report.
pub fn rectify<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    request: &SearchRequest,
    options: &SearchOptions,
) -> Result<RectificationReport, SearchError> {
    let (start, end) = request.window.clock_bounds()?;
    let candidates = search_candidates(gateway, request, options)?;
    Ok(RectificationReport {
        engine_version: ENGINE_VERSION,
        date: request.geo.date,
        window_start: start.format("%H:%M").to_string(),
        window_end: end.format("%H:%M").to_string(),
        step_minutes: options.step_minutes,
        best: candidates.first().cloned(),
        candidates,
        methodology: METHODOLOGY,
    })
}
