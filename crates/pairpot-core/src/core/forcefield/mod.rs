//! # Force Field Module
//!
//! Lennard-Jones parameterization and the closed-form 12-6 potential math.
//!
//! ## Overview
//!
//! The force field is a single-species Lennard-Jones 12-6 model with two
//! scalar parameters:
//!
//! - **epsilon** - the well depth (energy scale)
//! - **sigma** - the zero-crossing distance (length scale)
//!
//! [`params`] manages the parameter pair, its documented defaults, TOML
//! deserialization, and positivity validation. [`potentials`] holds the pure
//! per-pair energy and force functions; the accumulation over all pairs
//! lives in [`crate::evaluator`].

pub mod params;
pub mod potentials;
