//! Vimshottari dasha: the 120-year, 9-graha period system.
//!
//! - `vimshottari`: graha sequence, period lengths, nakshatra lordship,
//!   and the birth summary.
//! - `balance`: remaining years of the first mahadasha at birth.
//! - `running`: mahadasha and antardasha in force at a later instant.

pub mod balance;
pub mod running;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use running::{RunningPeriod, event_elapsed_years, running_period, running_period_at_date};
pub use vimshottari::{
    DAYS_PER_YEAR, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    VimshottariBirth, nakshatra_lord, vimshottari_birth, vimshottari_years,
};
