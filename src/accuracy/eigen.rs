//! Closed-form eigen-decomposition of 2x2 covariance blocks.

use super::DomainError;

/// Eigenvalues of a 2x2 matrix, larger first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenPair {
    /// λmax, the variance along the major axis of the error ellipse.
    pub max: f64,
    /// λmin, the variance along the minor axis. `max >= min` holds for
    /// every pair computed from finite input.
    pub min: f64,
}

/// Computes the eigenvalues of the 2x2 matrix `[[a, b], [c, d]]` as the
/// roots of its characteristic polynomial:
///
/// ```text
/// x² - (a + d)x + (ad - bc) = 0
/// ```
///
/// Covariance callers pass `b == c` (symmetry); the closed form does not
/// itself require it. A negative discriminant is reported as
/// [`DomainError::NegativeDiscriminant`]. Non-finite inputs propagate as
/// non-finite eigenvalues, not as an error.
pub fn eigenvalues_2x2(a: f64, b: f64, c: f64, d: f64) -> Result<EigenPair, DomainError> {
    let p = a + d;
    let q = a * d - b * c;
    let disc = p * p - 4.0 * q;
    if disc < 0.0 {
        return Err(DomainError::NegativeDiscriminant(disc));
    }
    let r = disc.sqrt();
    Ok(EigenPair {
        max: 0.5 * (p + r),
        min: 0.5 * (p - r),
    })
}
