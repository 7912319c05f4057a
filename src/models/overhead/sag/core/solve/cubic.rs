//! Closed-form real-root extraction for depressed cubics.
//!
//! Both temperature-adjusted state equations reduce to the depressed form
//! `x³ + p·x + q = 0`, which is solved directly via Cardano's formula, or
//! its trigonometric variant when all three roots are real. No iteration,
//! no initial guess, no convergence failure.

use std::f64::consts::TAU;

/// Returns the real roots of `x³ + p·x + q = 0`.
///
/// The discriminant decides the root structure: one real root when
/// positive, a simple plus a double root when zero, three distinct real
/// roots when negative (the casus irreducibilis, handled trigonometrically).
pub(super) fn real_roots(p: f64, q: f64) -> Vec<f64> {
    let half_q = q / 2.0;
    let third_p = p / 3.0;
    let discriminant = half_q * half_q + third_p * third_p * third_p;

    if discriminant > 0.0 {
        let sqrt_disc = discriminant.sqrt();
        vec![(-half_q + sqrt_disc).cbrt() + (-half_q - sqrt_disc).cbrt()]
    } else if discriminant == 0.0 {
        if p == 0.0 {
            // Triple root at the origin.
            vec![0.0]
        } else {
            // Simple root and a double root.
            vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
        }
    } else {
        // discriminant < 0 implies p < 0.
        let amplitude = 2.0 * (-third_p).sqrt();
        let phase = (3.0 * q / (p * amplitude)).clamp(-1.0, 1.0).acos() / 3.0;
        (0..3)
            .map(|k| amplitude * (phase - TAU * f64::from(k) / 3.0).cos())
            .collect()
    }
}

/// Selects the smallest strictly positive root, if any exists.
pub(super) fn smallest_positive(roots: &[f64]) -> Option<f64> {
    roots
        .iter()
        .copied()
        .filter(|root| *root > 0.0)
        .min_by(f64::total_cmp)
}
