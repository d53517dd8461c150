use nalgebra::{Point3, Vector3};

/// Cartesian location of one particle. Index identity within a position
/// slice is the particle identity for the duration of one evaluation.
pub type Position = Point3<f64>;

/// Net force acting on one particle, index-aligned with its position.
pub type Force = Vector3<f64>;

/// Allocates the per-particle force accumulator for a system of `n` particles.
pub fn zeroed_forces(n: usize) -> Vec<Force> {
    vec![Vector3::zeros(); n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_forces_has_requested_length_and_zero_entries() {
        let forces = zeroed_forces(3);
        assert_eq!(forces.len(), 3);
        assert!(forces.iter().all(|f| f.norm() == 0.0));
    }

    #[test]
    fn zeroed_forces_of_empty_system_is_empty() {
        assert!(zeroed_forces(0).is_empty());
    }
}
