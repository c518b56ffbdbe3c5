use thiserror::Error;

/// Error returned when a ring cannot be bound to the memory it was given.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum RingError {
    /// The supplied memory region is empty, so there is nothing to wrap around.
    #[error("ring buffer memory must hold at least one byte")]
    ZeroCapacity,
}
