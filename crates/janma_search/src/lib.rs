//! Birth-time rectification search.
//!
//! This crate provides:
//! - Per-date invariants (sunrise, sunset, next sunrise, day/night Gulika)
//! - Per-instant BPHS evaluation and the mandatory trine gate
//! - Composite scoring and deterministic ranking
//! - A report wrapper for callers
//!
//! All astronomy goes through an [`janma_ephem::EphemerisGateway`].

pub mod daily;
pub mod error;
pub mod evaluate;
pub mod report;
pub mod search;
pub mod search_types;

pub use daily::{DailyContext, gulika_for_date, sunrise_sunset};
pub use error::SearchError;
pub use evaluate::{InstantChart, composite_score, evaluate_instant};
pub use report::{ENGINE_VERSION, METHODOLOGY, RectificationReport, rectify};
pub use search::{candidate_instants, rank_order, search_candidates};
pub use search_types::{Candidate, GeoTime, SearchOptions, SearchRequest, SearchWindow};
