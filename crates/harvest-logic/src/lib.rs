//! Pure farm simulation rules for Harvest.
//!
//! This crate contains all game rules that are independent of any engine,
//! RNG, or I/O. Functions take plain data and return results, making them
//! unit-testable and portable across the native engine, the simtest
//! harness, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Tuning knobs: cadence, thresholds, rates, fees |
//! | [`economy`] | Pricing, growth/yield curves, reserve, upgrade ladder |
//! | [`hydration`] | Evaporation, stress bands, death curve, growth gate |
//! | [`plague`] | Stress-coupled infection onset and kill probabilities |

pub mod constants;
pub mod economy;
pub mod hydration;
pub mod plague;
