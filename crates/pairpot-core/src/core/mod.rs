//! # Core Module
//!
//! Stateless building blocks for pairwise potential evaluation.
//!
//! ## Overview
//!
//! This module holds everything the evaluation loop consumes but does not
//! own: the geometric data definitions for particles and forces, and the
//! closed-form force field math.
//!
//! - **Particle Representation** ([`models`]) - position and force vector types
//! - **Force Field** ([`forcefield`]) - Lennard-Jones parameters and potentials

pub mod forcefield;
pub mod models;
