//! # Pairpot Core Library
//!
//! A small, self-contained evaluation core for the pairwise Lennard-Jones
//! potential: given a set of Cartesian particle positions and two scalar
//! parameters (well depth ε, length scale σ), it produces the total potential
//! energy and the net force on every particle.
//!
//! ## Architectural Philosophy
//!
//! The library is deliberately split into two layers:
//!
//! - **[`core`]: The Foundation.** Stateless data definitions (positions,
//!   forces, parameters) and the pure closed-form potential math
//!   (`potentials`). Nothing in this layer allocates per-call state or
//!   performs iteration over particle pairs.
//!
//! - **[`evaluator`]: The Evaluation Core.** The triangular pair loop that
//!   accumulates pair energies and action/reaction force pairs into a fresh
//!   [`evaluator::Evaluation`]. This is the only place where sign
//!   conventions, Newton's third law, and the O(N²) loop live.
//!
//! Everything else a simulation needs — how positions are produced, how the
//! result feeds an integrator or optimizer, file formats, progress display —
//! belongs to the surrounding driver, not to this crate.
//!
//! ## Usage
//!
//! ```
//! use nalgebra::Point3;
//! use pairpot::core::forcefield::params::LjParams;
//! use pairpot::evaluator;
//!
//! let positions = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(3.4, 0.0, 0.0),
//! ];
//! let result = evaluator::evaluate(&positions, &LjParams::default()).unwrap();
//! assert_eq!(result.forces.len(), positions.len());
//! ```

pub mod core;
pub mod evaluator;

pub use crate::core::forcefield::params::LjParams;
pub use crate::evaluator::{Evaluation, EvaluatorError, Property, evaluate};
