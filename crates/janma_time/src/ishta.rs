//! Ishta-kala: time elapsed since local sunrise in ghatis and palas.
//!
//! One day = 60 ghatis, one ghati = 60 palas, one pala = 24 seconds.

use chrono::NaiveDateTime;

/// Seconds in one pala.
pub const SECONDS_PER_PALA: f64 = 24.0;

/// Palas in one ghati.
pub const PALAS_PER_GHATI: f64 = 60.0;

/// Ghatis in one civil day.
pub const GHATIS_PER_DAY: f64 = 60.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Elapsed time since sunrise in traditional units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IshtaKala {
    /// Whole ghatis elapsed.
    pub ghatis: u32,
    /// Whole palas within the current ghati (0..59).
    pub palas: u32,
    /// Total palas elapsed, with fraction.
    pub total_palas: f64,
}

impl IshtaKala {
    /// Build from elapsed seconds. A negative delta wraps by one day.
    pub fn from_seconds(elapsed_s: f64) -> Self {
        let elapsed_s = if elapsed_s < 0.0 {
            elapsed_s + SECONDS_PER_DAY
        } else {
            elapsed_s
        };
        let total_palas = elapsed_s / SECONDS_PER_PALA;
        let ghatis = (total_palas / PALAS_PER_GHATI).floor() as u32;
        let palas = (total_palas % PALAS_PER_GHATI).floor() as u32;
        Self {
            ghatis,
            palas,
            total_palas,
        }
    }

    /// Ishta-kala of `moment` measured from `sunrise`.
    ///
    /// Moments before sunrise on the same civil date are counted from the
    /// previous sunrise by adding 24 hours.
    pub fn between(moment: NaiveDateTime, sunrise: NaiveDateTime) -> Self {
        let delta_ms = (moment - sunrise).num_milliseconds();
        Self::from_seconds(delta_ms as f64 / 1000.0)
    }

    /// Elapsed time as fractional ghatis.
    pub fn ghatikas(&self) -> f64 {
        self.total_palas / PALAS_PER_GHATI
    }

    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.total_palas * SECONDS_PER_PALA
    }
}
