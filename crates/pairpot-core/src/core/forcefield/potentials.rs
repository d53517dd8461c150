#[inline]
pub fn lennard_jones_12_6(dist: f64, sigma: f64, well_depth: f64) -> f64 {
    let s = sigma / dist;
    let s6 = s.powi(6);
    let s12 = s6 * s6;
    4.0 * well_depth * (s12 - s6)
}

/// Signed radial force magnitude; positive values are repulsive (the force
/// on a particle points away from its partner), negative values attractive.
#[inline]
pub fn lennard_jones_12_6_force(dist: f64, sigma: f64, well_depth: f64) -> f64 {
    let s = sigma / dist;
    let s6 = s.powi(6);
    let s12 = s6 * s6;
    24.0 * well_depth * (2.0 * s12 - s6) / dist
}

/// Separation at which the 12-6 force vanishes: `2^(1/6) * sigma`.
#[inline]
pub fn equilibrium_distance(sigma: f64) -> f64 {
    2.0_f64.powf(1.0 / 6.0) * sigma
}
