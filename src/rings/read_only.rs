use crate::arrays;
use crate::error::RingError;
use crate::rings::{ReadableRing, Ring};
use std::fmt;
use tracing::{debug, trace};

/// Ring buffer that is only ever read from.
///
/// The memory is assumed to be kept topped up by some external producer, so from the ring's point of view it is always
/// full: reads, peeks and discards never come up short and the read cursor simply keeps going around.
///
/// The ring cannot know how far ahead the producer actually is. Callers must never ask for more bytes than have really
/// been produced; doing so silently returns stale or not-yet-written memory.
pub struct ReadOnlyRing<'a> {
    data: &'a [u8],
    read_pos: usize,
}

impl<'a> ReadOnlyRing<'a> {
    /// Create a ring reading from the start of the given memory.
    ///
    /// Fails if `data` is empty.
    pub fn new(data: &'a [u8]) -> Result<Self, RingError> {
        if data.is_empty() {
            return Err(RingError::ZeroCapacity);
        }

        trace!(capacity = data.len(), "binding read-only ring");

        Ok(Self {
            data,
            read_pos: 0,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data
    }

    /// Copy `dest.len()` bytes at the read cursor into `dest` and advance past them.
    ///
    /// A request longer than the capacity keeps wrapping, so `dest` receives the memory repeated lap after lap. Returns
    /// `dest.len()`.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        self.read_pos = self.copy_laps(self.read_pos, dest);
        dest.len()
    }

    /// Advance the read cursor by `count` bytes without copying anything. Returns `count`.
    pub fn discard(&mut self, count: usize) -> usize {
        self.read_pos = arrays::advance(self.read_pos, count, self.capacity());
        count
    }

    /// Copy `dest.len()` bytes at the read cursor into `dest` without moving the cursor. Returns `dest.len()`.
    pub fn peek(&self, dest: &mut [u8]) -> usize {
        self.peek_at(0, dest)
    }

    /// Copy `dest.len()` bytes beginning `offset` bytes past the read cursor into `dest` without moving the cursor.
    ///
    /// `offset` wraps around the capacity like everything else. Returns `dest.len()`.
    pub fn peek_at(&self, offset: usize, dest: &mut [u8]) -> usize {
        let start = arrays::advance(self.read_pos, offset, self.capacity());
        self.copy_laps(start, dest);
        dest.len()
    }

    /// Move the read cursor back to the start of the memory.
    pub fn reset(&mut self) {
        trace!(capacity = self.capacity(), "resetting read-only ring");
        self.read_pos = 0;
    }

    /// Release the borrowed memory.
    pub fn into_inner(self) -> &'a [u8] {
        self.data
    }

    /// Fill `dest` from `start` onward, one lap of the memory at a time. Returns the position after the last byte.
    fn copy_laps(&self, start: usize, dest: &mut [u8]) -> usize {
        if dest.len() > self.capacity() {
            debug!(
                requested = dest.len(),
                capacity = self.capacity(),
                "read-only ring transfer spans more than one lap"
            );
        }

        dest.chunks_mut(self.capacity())
            .fold(start, |pos, chunk| arrays::wrapping_read(self.data, pos, chunk))
    }
}

impl fmt::Debug for ReadOnlyRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyRing")
            .field("capacity", &self.capacity())
            .field("read_pos", &self.read_pos)
            .finish()
    }
}

impl Ring for ReadOnlyRing<'_> {
    #[inline]
    fn capacity(&self) -> usize {
        ReadOnlyRing::capacity(self)
    }

    fn as_slice(&self) -> &[u8] {
        self.data
    }

    fn reset(&mut self) {
        ReadOnlyRing::reset(self)
    }
}

impl ReadableRing for ReadOnlyRing<'_> {
    #[inline]
    fn read_position(&self) -> usize {
        self.read_pos
    }

    fn read(&mut self, dest: &mut [u8]) -> usize {
        ReadOnlyRing::read(self, dest)
    }

    fn discard(&mut self, count: usize) -> usize {
        ReadOnlyRing::discard(self, count)
    }

    fn peek_at(&self, offset: usize, dest: &mut [u8]) -> usize {
        ReadOnlyRing::peek_at(self, offset, dest)
    }
}
