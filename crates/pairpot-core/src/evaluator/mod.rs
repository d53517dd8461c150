//! # Evaluator Module
//!
//! The pairwise evaluation core: a triangular loop over all unordered
//! particle pairs that accumulates Lennard-Jones pair energies into a total
//! and action/reaction force pairs into per-particle accumulators.
//!
//! ## Overview
//!
//! [`evaluate`] is a pure function over its inputs: it holds no state
//! between calls, performs no I/O, and returns a freshly allocated
//! [`Evaluation`] owned by the caller. Parameters are validated before any
//! pair is visited, and a pair with exactly zero separation aborts the call
//! with [`EvaluatorError::DegenerateGeometry`] instead of letting Inf/NaN
//! propagate into the result.
//!
//! With the `parallel` feature enabled, rows of the triangular pair loop are
//! partitioned across the rayon thread pool and reduced into a single
//! energy/force accumulator. Each pair is still visited exactly once; the
//! only divergence from the serial build is floating-point summation order.

pub mod error;

use crate::core::forcefield::params::LjParams;
use crate::core::forcefield::potentials;
use crate::core::models::particle::{Force, Position, zeroed_forces};
use std::str::FromStr;
use tracing::{debug, instrument};

pub use error::EvaluatorError;

/// A result quantity the evaluator knows how to compute.
///
/// This is the complete implemented set; parsing any other property name
/// fails with [`EvaluatorError::UnsupportedProperty`] so that a driver can
/// reject a misconfigured request before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Energy,
    Forces,
}

impl Property {
    pub const ALL: [Property; 2] = [Property::Energy, Property::Forces];

    pub fn name(&self) -> &'static str {
        match self {
            Property::Energy => "energy",
            Property::Forces => "forces",
        }
    }
}

impl FromStr for Property {
    type Err = EvaluatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy" => Ok(Property::Energy),
            "forces" => Ok(Property::Forces),
            other => Err(EvaluatorError::UnsupportedProperty(other.to_string())),
        }
    }
}

/// Total potential energy and per-particle net forces for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub energy: f64,
    /// Index-aligned with the input positions; `forces[i]` is the net force
    /// on particle `i` from all other particles.
    pub forces: Vec<Force>,
}

/// Evaluates total Lennard-Jones energy and per-particle forces.
///
/// Every unordered pair `(i, j)` with `i < j` contributes
/// `4ε((σ/r)^12 − (σ/r)^6)` to the energy exactly once, and an equal and
/// opposite force pair to particles `i` and `j`. Zero and one-particle
/// inputs are valid and yield zero energy and an all-zero force set.
#[instrument(skip_all, name = "pairwise_evaluation", fields(n_particles = positions.len()))]
pub fn evaluate(positions: &[Position], params: &LjParams) -> Result<Evaluation, EvaluatorError> {
    params.validate()?;

    let n = positions.len();
    debug!(
        n_pairs = n * n.saturating_sub(1) / 2,
        epsilon = params.epsilon,
        sigma = params.sigma,
        "evaluating pairwise interactions"
    );

    let (energy, forces) = sum_pairs(positions, params)?;
    Ok(Evaluation { energy, forces })
}

/// Accumulates all pairs `(i, j)` with `j > i` for one row of the triangle.
fn accumulate_row(
    i: usize,
    positions: &[Position],
    params: &LjParams,
    energy: &mut f64,
    forces: &mut [Force],
) -> Result<(), EvaluatorError> {
    for j in (i + 1)..positions.len() {
        let rij = positions[i] - positions[j];
        let dist = rij.norm();
        if dist == 0.0 {
            return Err(EvaluatorError::DegenerateGeometry {
                first: i,
                second: j,
            });
        }

        *energy += potentials::lennard_jones_12_6(dist, params.sigma, params.epsilon);

        // Positive f pushes i away from j; j receives the exact reaction.
        let f = potentials::lennard_jones_12_6_force(dist, params.sigma, params.epsilon);
        let force = rij * (f / dist);
        forces[i] += force;
        forces[j] -= force;
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn sum_pairs(
    positions: &[Position],
    params: &LjParams,
) -> Result<(f64, Vec<Force>), EvaluatorError> {
    let mut energy = 0.0;
    let mut forces = zeroed_forces(positions.len());
    for i in 0..positions.len() {
        accumulate_row(i, positions, params, &mut energy, &mut forces)?;
    }
    Ok((energy, forces))
}

#[cfg(feature = "parallel")]
fn sum_pairs(
    positions: &[Position],
    params: &LjParams,
) -> Result<(f64, Vec<Force>), EvaluatorError> {
    use rayon::prelude::*;

    let n = positions.len();
    (0..n)
        .into_par_iter()
        .try_fold(
            || (0.0, zeroed_forces(n)),
            |(mut energy, mut forces), i| {
                accumulate_row(i, positions, params, &mut energy, &mut forces)?;
                Ok((energy, forces))
            },
        )
        .try_reduce(
            || (0.0, zeroed_forces(n)),
            |(energy_a, mut forces_a), (energy_b, forces_b)| {
                for (a, b) in forces_a.iter_mut().zip(forces_b) {
                    *a += b;
                }
                Ok((energy_a + energy_b, forces_a))
            },
        )
}
