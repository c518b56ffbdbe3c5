use crate::arrays;
use crate::error::RingError;
use crate::rings::{Ring, WritableRing};
use std::fmt;
use tracing::{debug, trace};

/// Ring buffer that is only ever written to.
///
/// The memory is assumed to be drained by some external consumer, so from the ring's point of view it is always
/// empty: every write succeeds in full and the write cursor simply keeps going around. If the consumer falls more than
/// a lap behind, the bytes it has not yet seen are overwritten.
pub struct WriteOnlyRing<'a> {
    data: &'a mut [u8],
    write_pos: usize,
}

impl<'a> WriteOnlyRing<'a> {
    /// Create a ring writing from the start of the given memory.
    ///
    /// Fails if `data` is empty.
    pub fn new(data: &'a mut [u8]) -> Result<Self, RingError> {
        if data.is_empty() {
            return Err(RingError::ZeroCapacity);
        }

        trace!(capacity = data.len(), "binding write-only ring");

        Ok(Self {
            data,
            write_pos: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Copy all of `src` into the ring and advance the write cursor past it. Returns `src.len()`.
    ///
    /// When `src` is longer than the capacity only its last `capacity` bytes can survive, so the earlier ones are
    /// skipped rather than copied and immediately overwritten. The memory and cursor end up exactly as if `src` had
    /// been written in capacity-sized pieces.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let capacity = self.capacity();
        let mut start = self.write_pos;
        let mut tail = src;

        if src.len() > capacity {
            let skip = src.len() - capacity;

            debug!(requested = src.len(), capacity, skipped = skip, "write-only ring lapped itself");

            start = arrays::advance(start, skip, capacity);
            tail = &src[skip..];
        }

        self.write_pos = arrays::wrapping_write(&mut self.data[..], start, tail);
        src.len()
    }

    /// Move the write cursor back to the start of the memory.
    pub fn reset(&mut self) {
        trace!(capacity = self.capacity(), "resetting write-only ring");
        self.write_pos = 0;
    }

    /// Release the borrowed memory.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }
}

impl fmt::Debug for WriteOnlyRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteOnlyRing")
            .field("capacity", &self.capacity())
            .field("write_pos", &self.write_pos)
            .finish()
    }
}

impl Ring for WriteOnlyRing<'_> {
    #[inline]
    fn capacity(&self) -> usize {
        WriteOnlyRing::capacity(self)
    }

    fn as_slice(&self) -> &[u8] {
        WriteOnlyRing::as_slice(self)
    }

    fn reset(&mut self) {
        WriteOnlyRing::reset(self)
    }
}

impl WritableRing for WriteOnlyRing<'_> {
    #[inline]
    fn write_position(&self) -> usize {
        self.write_pos
    }

    fn write(&mut self, src: &[u8]) -> usize {
        WriteOnlyRing::write(self, src)
    }
}
