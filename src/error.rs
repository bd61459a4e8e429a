//! Error types for the resolver driver.

use core::fmt;

/// Errors returned by [`Resolver`](crate::Resolver) operations.
///
/// Generic over the backend's own error type, which is passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverError<E> {
    /// The handle has no backend installed yet.
    ///
    /// Checked before anything else; no backend call is made.
    NotConfigured,

    /// The backend reported a failure.
    Backend(E),
}

// Allow ergonomic `?` propagation from raw backend errors.
impl<E> From<E> for ResolverError<E> {
    fn from(error: E) -> Self {
        ResolverError::Backend(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ResolverError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolverError::NotConfigured => write!(f, "Resolver is not configured"),
            ResolverError::Backend(e) => write!(f, "Backend error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for ResolverError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ResolverError::NotConfigured => defmt::write!(f, "Resolver is not configured"),
            ResolverError::Backend(e) => defmt::write!(f, "Backend error: {}", e),
        }
    }
}

/// A selector byte that is neither `0` (up) nor `1` (down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDirection(pub u8);

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid direction selector {} (must be 0 or 1)", self.0)
    }
}
