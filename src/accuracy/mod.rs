//! Positional-error metrics: CE90/LE90 from error-covariance components.
//!
//! Every function here is pure and stateless; the only shared data is the
//! immutable R lookup table. Identical inputs always give identical outputs,
//! including for invalid inputs. Callers decide what to do with a
//! [`DomainError`]; this module never logs or recovers.

pub mod eigen;
pub mod lookup;
pub mod metrics;

pub use eigen::{EigenPair, eigenvalues_2x2};
pub use lookup::{R_LOOKUP_TABLE, lookup_r};
pub use metrics::{ce90, le90};

/// An input drove a metric outside its mathematical domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The characteristic polynomial has complex roots. Carries the
    /// discriminant. A well-formed covariance cannot produce this.
    NegativeDiscriminant(f64),
    /// Vertical variance below zero.
    NegativeVariance(f64),
    /// All-zero horizontal covariance; the axis ratio is undefined.
    DegenerateCovariance,
    /// The lookup ratio is NaN or infinite.
    NonFiniteLookup(f64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NegativeDiscriminant(d) => {
                write!(f, "negative discriminant {} in eigenvalue computation", d)
            }
            DomainError::NegativeVariance(v) => write!(f, "negative vertical variance {}", v),
            DomainError::DegenerateCovariance => write!(f, "degenerate (all-zero) covariance"),
            DomainError::NonFiniteLookup(r) => write!(f, "non-finite lookup ratio {}", r),
        }
    }
}

impl std::error::Error for DomainError {}
