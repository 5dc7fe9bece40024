//! Keplerian orbit solver.
//!
//! Positions are relative to the parent body, in scene units, with the parent
//! at one focus of the ellipse. The orbital plane is x/z; inclination tilts
//! the z axis towards y. There is no argument of periapsis or ascending node:
//! every orbit's periapsis lies on +x.
//!
//! The mean anomaly is not reduced modulo 2π. Very long sessions therefore
//! lose precision in `sin`/`cos`; the simulated time spans used here are far
//! from that regime.

use std::f64::consts::TAU;

use crate::config::SceneScales;
use crate::data::OrbitalElements;
use crate::math::Vec3;

/// Fixed-point iterations for Kepler's equation. Enough for e ≲ 0.3.
pub const KEPLER_ITERATIONS: usize = 6;

/// Segments of a sampled orbit path.
pub const ORBIT_PATH_SEGMENTS: usize = 256;

/// Mean anomaly after `elapsed_days`, unbounded.
#[inline]
pub fn mean_anomaly(orbit: &OrbitalElements, elapsed_days: f64) -> f64 {
    let mean_motion = TAU / orbit.orbital_period_days;
    mean_motion * elapsed_days
}

/// Solve `E = M + e·sin(E)` by fixed-point iteration seeded at `E₀ = M`.
#[inline]
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        e_anom = mean_anomaly + eccentricity * e_anom.sin();
    }
    e_anom
}

/// Converts orbital elements into scene-space offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSolver {
    /// Scene units per km
    pub distance_scale: f64,
}

impl Default for OrbitSolver {
    fn default() -> Self {
        Self {
            distance_scale: SceneScales::default().distance,
        }
    }
}

impl OrbitSolver {
    pub fn new(distance_scale: f64) -> Self {
        Self { distance_scale }
    }

    /// Point on the ellipse at eccentric anomaly `e_anom`.
    fn ellipse_point(&self, orbit: &OrbitalElements, e_anom: f64) -> Vec3 {
        let a = orbit.semi_major_axis_km * self.distance_scale;
        let e = orbit.eccentricity;
        let b = a * (1.0 - e * e).sqrt();

        let x = a * (e_anom.cos() - e);
        let z_prime = b * e_anom.sin();

        let inclination = orbit.inclination_deg.to_radians();
        let y = z_prime * inclination.sin();
        let z = z_prime * inclination.cos();

        [x, y, z]
    }

    /// Offset from the parent after `elapsed_days` of simulated time.
    ///
    /// Pure: the same inputs always give the same output.
    pub fn position(&self, orbit: &OrbitalElements, elapsed_days: f64) -> Vec3 {
        let m = mean_anomaly(orbit, elapsed_days);
        let e_anom = eccentric_anomaly(m, orbit.eccentricity);
        self.ellipse_point(orbit, e_anom)
    }

    /// Closed display loop: `ORBIT_PATH_SEGMENTS + 1` points, last == first.
    ///
    /// Samples the eccentric anomaly uniformly; for display only.
    pub fn orbit_path(&self, orbit: &OrbitalElements) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(ORBIT_PATH_SEGMENTS + 1);
        for i in 0..ORBIT_PATH_SEGMENTS {
            let angle = (i as f64 / ORBIT_PATH_SEGMENTS as f64) * TAU;
            points.push(self.ellipse_point(orbit, angle));
        }
        points.push(points[0]);
        points
    }
}

/// `OrbitSolver::default().position(..)`.
pub fn position(orbit: &OrbitalElements, elapsed_days: f64) -> Vec3 {
    OrbitSolver::default().position(orbit, elapsed_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded::embedded_dataset;
    use crate::math::{length, sub};

    fn elements(a_km: f64, period: f64, e: f64, inc: f64) -> OrbitalElements {
        OrbitalElements {
            semi_major_axis_km: a_km,
            orbital_period_days: period,
            eccentricity: e,
            inclination_deg: inc,
        }
    }

    fn all_orbits() -> Vec<OrbitalElements> {
        fn walk(body: &crate::data::CelestialBody, out: &mut Vec<OrbitalElements>) {
            if let Some(o) = body.orbit {
                out.push(o);
            }
            for m in &body.moons {
                walk(m, out);
            }
        }
        let mut out = Vec::new();
        for b in &embedded_dataset().bodies {
            walk(b, &mut out);
        }
        out
    }

    #[test]
    fn circular_orbit_keeps_constant_radius() {
        let solver = OrbitSolver::default();
        let orbit = elements(149598023.0, 365.256, 0.0, 23.0);
        let a = orbit.semi_major_axis_km * solver.distance_scale;
        for step in 0..200 {
            let t = step as f64 * 7.3;
            let p = solver.position(&orbit, t);
            assert!((length(p) - a).abs() < 1e-9 * a, "t={} r={}", t, length(p));
        }
    }

    #[test]
    fn periodic_in_orbital_period() {
        let solver = OrbitSolver::default();
        for orbit in all_orbits() {
            let a = orbit.semi_major_axis_km * solver.distance_scale;
            for t in [0.0, 1.5, 42.0, 365.0] {
                let p0 = solver.position(&orbit, t);
                let p1 = solver.position(&orbit, t + orbit.orbital_period_days);
                assert!(length(sub(p0, p1)) < 1e-6 * a.max(1.0), "{:?} t={}", orbit, t);
            }
        }
    }

    #[test]
    fn zero_inclination_stays_in_plane() {
        let solver = OrbitSolver::default();
        let orbit = elements(57909050.0, 87.969, 0.2056, 0.0);
        for step in 0..100 {
            let p = solver.position(&orbit, step as f64 * 3.1);
            assert_eq!(p[1], 0.0);
        }
    }

    #[test]
    fn starts_at_periapsis() {
        let solver = OrbitSolver::new(1.0);
        let orbit = elements(100.0, 10.0, 0.2, 0.0);
        let p = solver.position(&orbit, 0.0);
        assert!((p[0] - 80.0).abs() < 1e-12);
        assert!(p[2].abs() < 1e-12);
        // Half a period later the body sits at apoapsis
        let q = solver.position(&orbit, 5.0);
        assert!((q[0] + 120.0).abs() < 1e-9);
    }

    #[test]
    fn kepler_iteration_is_close_to_converged() {
        // Residual of Kepler's equation after six iterations, e = 0.2056
        let e = 0.2056;
        for i in 0..64 {
            let m = i as f64 * 0.1;
            let e_anom = eccentric_anomaly(m, e);
            let residual = e_anom - e * e_anom.sin() - m;
            assert!(residual.abs() < 1e-4, "m={} residual={}", m, residual);
        }
    }

    #[test]
    fn deterministic() {
        let orbit = elements(384400.0, 27.322, 0.0549, 5.1);
        assert_eq!(position(&orbit, 1234.5), position(&orbit, 1234.5));
    }

    #[test]
    fn retrograde_inclination_flips_depth_axis() {
        let solver = OrbitSolver::new(1.0);
        let orbit = elements(10.0, 4.0, 0.0, 180.0);
        let p = solver.position(&orbit, 1.0);
        // Quarter period: z' = +b, rotated by 180 degrees onto -z
        assert!((p[2] + 10.0).abs() < 1e-9);
        assert!(p[1].abs() < 1e-9);
    }

    #[test]
    fn orbit_path_is_closed() {
        let solver = OrbitSolver::default();
        for orbit in all_orbits() {
            let path = solver.orbit_path(&orbit);
            assert_eq!(path.len(), ORBIT_PATH_SEGMENTS + 1);
            assert_eq!(path.first(), path.last());
        }
    }

    #[test]
    fn orbit_path_matches_position_samples() {
        let solver = OrbitSolver::default();
        let orbit = elements(227939200.0, 686.98, 0.0, 1.85);
        let path = solver.orbit_path(&orbit);
        // For a circular orbit E == M, so a quarter period lands on sample 64
        let p = solver.position(&orbit, orbit.orbital_period_days / 4.0);
        assert!(length(sub(p, path[64])) < 1e-9);
    }
}
