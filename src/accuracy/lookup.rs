//! Radial error-scale lookup table.

use super::DomainError;

/// Empirical circular-error scale factors R(r) sampled uniformly over
/// r ∈ [0, 1], where r = σmin/σmax of the error ellipse. The values encode
/// a fixed engineering convention and must be reproduced exactly; they are
/// not derivable from a formula.
pub const R_LOOKUP_TABLE: [f64; 21] = [
    1.6449, 1.6456, 1.6479, 1.6518, 1.6573, 1.6646, 1.6738, 1.6852, 1.6992, 1.7163, 1.7371,
    1.7621, 1.7915, 1.8251, 1.8625, 1.9034, 1.9472, 1.9936, 2.0424, 2.0932, 2.1460,
];

/// Returns the scale factor R(r) by floor-indexing into [`R_LOOKUP_TABLE`].
///
/// `r` is mathematically bounded in [0, 1]; a finite value outside that
/// range (floating-point rounding at the boundary, or a malformed ratio)
/// clamps to the nearest table entry. A non-finite `r` is a
/// [`DomainError::NonFiniteLookup`].
pub fn lookup_r(r: f64) -> Result<f64, DomainError> {
    if !r.is_finite() {
        return Err(DomainError::NonFiniteLookup(r));
    }
    let n = (R_LOOKUP_TABLE.len() - 1) as f64;
    let ndx = (n * r).floor().clamp(0.0, n) as usize;
    Ok(R_LOOKUP_TABLE[ndx])
}
