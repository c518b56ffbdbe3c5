use crate::arrays::{self, WrappingSlice};
use crate::error::RingError;
use crate::rings::{ReadableRing, Ring, WritableRing};
use std::fmt;
use tracing::trace;

/// Fixed-capacity ring buffer with independent read and write cursors over borrowed memory.
///
/// Writes saturate at the free space and reads saturate at the occupied length; neither ever fails. Whenever the ring
/// drains completely both cursors snap back to the start of the memory so that the next write gets the longest
/// possible contiguous span.
pub struct DuplexRing<'a> {
    /// Borrowed backing memory. Its length is the capacity and never changes.
    data: &'a mut [u8],

    /// Index the next written byte will be stored at. Always less than the capacity.
    write_pos: usize,

    /// Index of the next byte to be read. Always less than the capacity.
    read_pos: usize,

    /// Number of bytes currently held.
    ///
    /// Equal cursors mean either empty or full, so this is the only reliable measure of occupancy.
    len: usize,
}

impl<'a> DuplexRing<'a> {
    /// Create an empty ring over the given memory.
    ///
    /// Fails if `data` is empty. The existing contents of `data` are left alone but are not considered readable.
    pub fn new(data: &'a mut [u8]) -> Result<Self, RingError> {
        if data.is_empty() {
            return Err(RingError::ZeroCapacity);
        }

        trace!(capacity = data.len(), "binding duplex ring");

        Ok(Self {
            data,
            write_pos: 0,
            read_pos: 0,
            len: 0,
        })
    }

    /// Returns the fixed number of bytes the ring can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of bytes that can be written before the ring is full.
    #[inline]
    pub fn write_capacity(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns the number of bytes that can be read before the ring is empty.
    #[inline]
    pub fn read_capacity(&self) -> usize {
        self.len
    }

    /// Returns the number of bytes in the ring. Same as [`read_capacity`](Self::read_capacity).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no more bytes can be written.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the index the next written byte will be stored at.
    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// Returns the index of the next byte to be read.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// Returns how many bytes can be written at the write cursor before it has to wrap.
    #[inline]
    pub fn write_span(&self) -> usize {
        self.write_capacity().min(self.capacity() - self.write_pos)
    }

    /// Returns how many bytes can be read at the read cursor before it has to wrap.
    #[inline]
    pub fn read_span(&self) -> usize {
        self.len.min(self.capacity() - self.read_pos)
    }

    /// Returns the backing memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Returns the bytes held by the ring in order, as at most two slices.
    ///
    /// The second slice is empty unless the held bytes wrap around the end of the memory.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let slices = self.data.wrapping_range(self.read_pos, self.len);
        (slices[0], slices[1])
    }

    /// Returns the contiguous run of readable bytes at the read cursor.
    ///
    /// Pair with [`discard`](Self::discard) to consume bytes without copying them.
    pub fn read_slice(&self) -> &[u8] {
        &self.data[self.read_pos..self.read_pos + self.read_span()]
    }

    /// Returns the contiguous run of free bytes at the write cursor.
    ///
    /// Bytes placed here become readable only after a call to [`commit`](Self::commit).
    pub fn write_slice(&mut self) -> &mut [u8] {
        let span = self.write_span();
        &mut self.data[self.write_pos..self.write_pos + span]
    }

    /// Publish up to `count` bytes previously placed into [`write_slice`](Self::write_slice).
    ///
    /// Returns the number of bytes published, which is at most the current write span.
    pub fn commit(&mut self, count: usize) -> usize {
        let count = count.min(self.write_span());
        self.write_pos = arrays::advance(self.write_pos, count, self.capacity());
        self.len += count;
        count
    }

    /// Copy bytes from `src` into the ring.
    ///
    /// Returns the number of bytes written, which is less than `src.len()` if there was not enough free space.
    pub fn write(&mut self, src: &[u8]) -> usize {
        let count = src.len().min(self.write_capacity());

        if count < src.len() {
            trace!(requested = src.len(), written = count, "duplex ring write saturated");
        }

        if count == 0 {
            return 0;
        }

        self.write_pos = arrays::wrapping_write(&mut self.data[..], self.write_pos, &src[..count]);
        self.len += count;
        count
    }

    /// Move bytes out of the ring into `dest`.
    ///
    /// Returns the number of bytes read, which is less than `dest.len()` if the ring did not hold enough.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        let count = self.peek(dest);

        if count < dest.len() {
            trace!(requested = dest.len(), read = count, "duplex ring read saturated");
        }

        self.consume(count)
    }

    /// Drop up to `count` bytes from the front of the ring without copying them.
    ///
    /// Returns the number of bytes discarded.
    pub fn discard(&mut self, count: usize) -> usize {
        let count = count.min(self.len);
        self.consume(count)
    }

    /// Copy bytes from the front of the ring into `dest` without consuming them.
    ///
    /// Returns the number of bytes copied.
    pub fn peek(&self, dest: &mut [u8]) -> usize {
        self.peek_at(0, dest)
    }

    /// Copy bytes beginning `offset` bytes past the front of the ring into `dest` without consuming them.
    ///
    /// Returns `0` if `offset` is not less than the number of bytes held, otherwise the number of bytes copied.
    pub fn peek_at(&self, offset: usize, dest: &mut [u8]) -> usize {
        if offset >= self.len {
            return 0;
        }

        let count = dest.len().min(self.len - offset);
        let start = arrays::advance(self.read_pos, offset, self.capacity());

        arrays::wrapping_read(&self.data[..], start, &mut dest[..count]);
        count
    }

    /// Empty the ring and move both cursors back to the start. The memory contents are untouched.
    pub fn reset(&mut self) {
        trace!(capacity = self.capacity(), "resetting duplex ring");

        self.write_pos = 0;
        self.read_pos = 0;
        self.len = 0;
    }

    /// Release the borrowed memory.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }

    /// Advance the read cursor past `count` held bytes.
    fn consume(&mut self, count: usize) -> usize {
        debug_assert!(count <= self.len);

        self.len -= count;

        if self.len == 0 {
            self.write_pos = 0;
            self.read_pos = 0;
        } else {
            self.read_pos = arrays::advance(self.read_pos, count, self.capacity());
        }

        count
    }
}

impl fmt::Debug for DuplexRing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DuplexRing")
            .field("capacity", &self.capacity())
            .field("write_pos", &self.write_pos)
            .field("read_pos", &self.read_pos)
            .field("len", &self.len)
            .finish()
    }
}

impl Ring for DuplexRing<'_> {
    #[inline]
    fn capacity(&self) -> usize {
        DuplexRing::capacity(self)
    }

    fn as_slice(&self) -> &[u8] {
        DuplexRing::as_slice(self)
    }

    fn reset(&mut self) {
        DuplexRing::reset(self)
    }
}

impl ReadableRing for DuplexRing<'_> {
    #[inline]
    fn read_position(&self) -> usize {
        self.read_pos
    }

    fn read(&mut self, dest: &mut [u8]) -> usize {
        DuplexRing::read(self, dest)
    }

    fn discard(&mut self, count: usize) -> usize {
        DuplexRing::discard(self, count)
    }

    fn peek_at(&self, offset: usize, dest: &mut [u8]) -> usize {
        DuplexRing::peek_at(self, offset, dest)
    }
}

impl WritableRing for DuplexRing<'_> {
    #[inline]
    fn write_position(&self) -> usize {
        self.write_pos
    }

    fn write(&mut self, src: &[u8]) -> usize {
        DuplexRing::write(self, src)
    }
}
