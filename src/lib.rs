//! Positional-accuracy metrics for georeferenced imagery overlays.
//!
//! Computes CE90/LE90 error bounds from position-error covariance
//! components and maps them onto a discrete color ramp for rendering.

pub mod accuracy;
pub mod colormap;
pub mod metadata;

pub use accuracy::{DomainError, EigenPair, ce90, eigenvalues_2x2, le90, lookup_r};
pub use metadata::{AccuracySummary, CovarianceRecord};
