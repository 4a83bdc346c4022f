//! Error type for the fallible reallocation paths.

use std::collections::TryReserveError;
use thiserror::Error;

/// Failure to obtain storage for a [`RingDeque`](crate::RingDeque).
///
/// Returned by the `try_*` constructors and reallocation methods.  Their infallible
/// counterparts panic with this error's message instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingDequeError {
    /// The requested slot count rounds up past the largest power of two a `usize` can hold.
    #[error("ring deque capacity overflow: {requested} slots cannot be rounded up to a power of two")]
    CapacityOverflow { requested: usize },

    /// The allocator refused the request, or the byte size overflowed `isize::MAX`.
    #[error("ring deque allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
