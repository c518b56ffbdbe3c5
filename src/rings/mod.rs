//! Circular byte buffers over borrowed memory.
//!
//! Three flavors are provided, each suited to a different relationship with the outside world:
//!
//! - [`DuplexRing`] tracks both ends itself and knows exactly how many bytes it holds.
//! - [`ReadOnlyRing`] is filled by somebody else (a DMA engine, another core, a memory-mapped peripheral) and is
//!   therefore always considered full.
//! - [`WriteOnlyRing`] is drained by somebody else and is therefore always considered empty.
//!
//! None of them allocate. Every transfer is bounded by at most two `memcpy`s.
pub mod duplex;
pub mod read_only;
pub mod write_only;

pub use self::duplex::DuplexRing;
pub use self::read_only::ReadOnlyRing;
pub use self::write_only::WriteOnlyRing;

/// Base trait that all rings implement.
pub trait Ring {
    /// Returns the fixed number of bytes the ring wraps around.
    fn capacity(&self) -> usize;

    /// Returns the backing memory the ring was created over.
    fn as_slice(&self) -> &[u8];

    /// Moves every cursor back to the start of the backing memory without touching its contents.
    fn reset(&mut self);
}

/// A ring that can be read from.
pub trait ReadableRing: Ring {
    /// Returns the index of the next byte to be read.
    fn read_position(&self) -> usize;

    /// Copy bytes out of the ring into `dest` and advance the read cursor past them.
    ///
    /// Returns the number of bytes read.
    fn read(&mut self, dest: &mut [u8]) -> usize;

    /// Advance the read cursor by up to `count` bytes without copying them anywhere.
    ///
    /// Returns the number of bytes discarded.
    fn discard(&mut self, count: usize) -> usize;

    /// Copy bytes at the read cursor into `dest` without consuming them.
    ///
    /// Returns the number of bytes copied.
    fn peek(&self, dest: &mut [u8]) -> usize {
        self.peek_at(0, dest)
    }

    /// Copy bytes beginning `offset` bytes past the read cursor into `dest` without consuming them.
    ///
    /// Returns the number of bytes copied.
    fn peek_at(&self, offset: usize, dest: &mut [u8]) -> usize;
}

/// A ring that can be written to.
pub trait WritableRing: Ring {
    /// Returns the index the next written byte will be stored at.
    fn write_position(&self) -> usize;

    /// Copy bytes from `src` into the ring and advance the write cursor past them.
    ///
    /// Returns the number of bytes written.
    fn write(&mut self, src: &[u8]) -> usize;
}
