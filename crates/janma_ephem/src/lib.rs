//! Ephemeris boundary for birth-time rectification.
//!
//! This crate provides:
//! - The [`EphemerisGateway`] trait: sidereal Lagna, sidereal graha
//!   longitudes and local sunrise/sunset
//! - [`AnalyticEphemeris`], a dependency-free implementation built on
//!   low-precision solar, lunar and Keplerian theories
//! - Ayanamsha systems (Lahiri, Raman, Krishnamurti, Fagan-Bradley)

pub mod analytic;
pub mod ayanamsha;
pub mod error;
pub mod frames;
pub mod gateway;
pub mod lagna;
pub mod lunar;
pub mod planets;
pub mod riseset;
pub mod solar;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem, UnknownAyanamsha, ayanamsha_deg};
pub use error::EphemerisError;
pub use gateway::{EphemerisGateway, GeoLocation};
pub use riseset::{SUN_CENTRE_ALTITUDE_DEG, sunrise_sunset_jd};
