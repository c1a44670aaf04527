//! CE90 and LE90 scalar error bounds.

use super::DomainError;
use super::eigen::eigenvalues_2x2;
use super::lookup::lookup_r;

/// 90th-percentile scale factor for a one-dimensional normal error
/// distribution.
const LE90_FACTOR: f64 = 1.6499;

/// Vertical linear error at the 90th percentile.
///
/// `c2_2` is the vertical-position variance. A negative variance is a
/// [`DomainError::NegativeVariance`].
pub fn le90(c2_2: f64) -> Result<f64, DomainError> {
    if c2_2 < 0.0 {
        return Err(DomainError::NegativeVariance(c2_2));
    }
    Ok(LE90_FACTOR * c2_2.sqrt())
}

/// Horizontal circular error at the 90th percentile.
///
/// Takes the three independent entries of the symmetric horizontal
/// covariance block (`c0_1` is implicitly equal to `c1_0`):
///
/// ```text
/// (λmax, λmin) = eig([[c0_0, c1_0], [c1_0, c1_1]])
/// CE90 = R(σmin / σmax) * σmax
/// ```
///
/// An all-zero covariance has λmax == 0 and no defined axis ratio; it is
/// reported as [`DomainError::DegenerateCovariance`].
pub fn ce90(c0_0: f64, c1_0: f64, c1_1: f64) -> Result<f64, DomainError> {
    let eig = eigenvalues_2x2(c0_0, c1_0, c1_0, c1_1)?;
    if eig.max == 0.0 {
        return Err(DomainError::DegenerateCovariance);
    }
    let smax = eig.max.sqrt();
    let smin = eig.min.sqrt();
    Ok(lookup_r(smin / smax)? * smax)
}
