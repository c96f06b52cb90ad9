//! The solver's error type.
//!
//! All validation happens at the entry to [`crate::solve_case`]; once the
//! linear system is formed the only failure mode is
//! [`Error::SingularSystem`], which is fatal and carries the offending pivot
//! for diagnostic purposes. There are no retries and no partial results.

use std::fmt;

use aeromath::type_aliases::Float;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Non-positive chord or span, fewer than two sections, or mismatched
    /// array lengths between sections and inter-sections.
    InvalidGeometry(String),
    /// Negative or zero freestream speed magnitude.
    InvalidFreestream(String),
    /// The AIC matrix (or the 2D panel block system) is numerically singular.
    SingularSystem { pivot: Float },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidGeometry(msg) => write!(f, "invalid geometry: {}", msg),
            Error::InvalidFreestream(msg) => write!(f, "invalid freestream: {}", msg),
            Error::SingularSystem { pivot } => write!(
                f,
                "singular system: failing pivot magnitude {:e}",
                pivot
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<aeromath::Error> for Error {
    fn from(error: aeromath::Error) -> Self {
        match error {
            aeromath::Error::SingularSystem { pivot } => Error::SingularSystem { pivot },
        }
    }
}
