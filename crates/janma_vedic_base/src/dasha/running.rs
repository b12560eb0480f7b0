//! Running mahadasha and antardasha at a query instant.

use chrono::NaiveDate;
use janma_time::date_to_jd_midnight_ut;

use crate::graha::Graha;

use super::vimshottari::{
    DAYS_PER_YEAR, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    vimshottari_birth,
};

/// Mahadasha and antardasha in force at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningPeriod {
    pub major_lord: Graha,
    pub sub_lord: Graha,
    pub years_into_major: f64,
    pub years_into_sub: f64,
}

/// Mean years from `birth_jd` to `query_jd`.
pub fn event_elapsed_years(birth_jd: f64, query_jd: f64) -> f64 {
    (query_jd - birth_jd) / DAYS_PER_YEAR
}

/// Running periods for a natal Moon at `query_jd`.
///
/// While the query lies inside the birth mahadasha, `years_into_major` is
/// the time since birth; the portion consumed before birth is not added.
/// Queries before birth fall in the first mahadasha.
pub fn running_period(birth_jd: f64, query_jd: f64, moon_lon: f64) -> RunningPeriod {
    let birth = vimshottari_birth(moon_lon);
    let elapsed = event_elapsed_years(birth_jd, query_jd);

    let mut idx = birth.start_index as usize;
    let mut years_into_major = elapsed;
    if elapsed > birth.remaining_years {
        let mut consumed = birth.remaining_years;
        loop {
            idx = (idx + 1) % VIMSHOTTARI_GRAHAS.len();
            let span = VIMSHOTTARI_YEARS[idx];
            if consumed + span >= elapsed {
                years_into_major = elapsed - consumed;
                break;
            }
            consumed += span;
        }
    }

    let major_years = VIMSHOTTARI_YEARS[idx];
    let (sub_idx, sub_start) = antardasha_at(idx, major_years, years_into_major);
    RunningPeriod {
        major_lord: VIMSHOTTARI_GRAHAS[idx],
        sub_lord: VIMSHOTTARI_GRAHAS[sub_idx],
        years_into_major,
        years_into_sub: years_into_major - sub_start,
    }
}

/// Running periods at 00:00 UT of a calendar date.
pub fn running_period_at_date(birth_jd: f64, date: NaiveDate, moon_lon: f64) -> RunningPeriod {
    running_period(birth_jd, date_to_jd_midnight_ut(date), moon_lon)
}

/// Antardasha index and its start offset (years into the mahadasha).
///
/// Sub-periods start at the major lord and follow the cycle; each lasts
/// `years(sub) * years(major) / 120`. Positions past the last boundary stay
/// in the last sub-period.
fn antardasha_at(major_idx: usize, major_years: f64, years_into_major: f64) -> (usize, f64) {
    let n = VIMSHOTTARI_GRAHAS.len();
    let mut acc = 0.0;
    for step in 0..n {
        let i = (major_idx + step) % n;
        let span = VIMSHOTTARI_YEARS[i] * major_years / VIMSHOTTARI_TOTAL_YEARS;
        if acc + span >= years_into_major {
            return (i, acc);
        }
        if step + 1 < n {
            acc += span;
        }
    }
    ((major_idx + n - 1) % n, acc)
}
