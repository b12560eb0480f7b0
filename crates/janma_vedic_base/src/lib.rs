//! Pure BPHS rectification math on sidereal longitudes.
//!
//! This crate provides:
//! - Rashi, graha and nakshatra tables
//! - Gulika khanda selection (day and night)
//! - Madhya and sphuta Pranapada
//! - Bhava, Hora, Ghati and Varnada lagnas
//! - Nisheka lagna and gestation plausibility
//! - Vimshottari dasha: birth balance and running periods
//! - Divisional (varga) charts
//! - The rectification filter and trait/life-event scorers
//!
//! Nothing here performs I/O or ephemeris lookups; lagna and planet
//! longitudes are inputs.

pub mod amsha;
pub mod dasha;
pub mod error;
pub mod events;
pub mod graha;
pub mod nakshatra;
pub mod nisheka;
pub mod pranapada;
pub mod rashi;
pub mod special_lagna;
pub mod traits;
pub mod upagraha;
pub mod util;
pub mod verification;

pub use amsha::{D3, D7, D9, D10, D12, D60, DivisionalChart, divisional_chart, divisional_longitude};
pub use dasha::{
    RunningPeriod, VimshottariBirth, nakshatra_lord, running_period, running_period_at_date,
    vimshottari_birth,
};
pub use error::VedicError;
pub use events::{ChildrenEvents, EventScores, LifeEvents, NatalChart};
pub use graha::{ALL_GRAHAS, Graha, GrahaLongitudes, WEEKDAY_LORDS, rashi_lord, sign_lord};
pub use nakshatra::{NAKSHATRA_NAMES, NAKSHATRA_SPAN_27, NakshatraPosition, nakshatra_from_longitude};
pub use nisheka::{NishekaResult, nisheka};
pub use pranapada::{madhya_pranapada, sphuta_pranapada};
pub use rashi::{ALL_RASHIS, Rashi, SignMode, format_longitude, house_from_lagna, nth_sign_from};
pub use special_lagna::{SpecialLagnaSet, special_lagnas};
pub use traits::{Build, Complexion, Height, PhysicalTraits, TraitScores, score_traits};
pub use upagraha::{GulikaKhandas, GulikaResult, is_daytime, weekday_index};
pub use util::{angular_difference, degree_in_sign, normalize_360, sign_of};
pub use verification::{
    DEFAULT_ORB_DEG, RectificationFilter, VerificationScores, passes_trine_rule,
};
