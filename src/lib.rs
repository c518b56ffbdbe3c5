//! Fixed-capacity circular byte buffers over caller-supplied memory.
//!
//! The rings in this crate never allocate and never own the memory they wrap; they are cursors over a borrowed
//! `[u8]`. Every transfer takes an explicit length and reports how many bytes actually moved, so a request that does
//! not fit is satisfied partially rather than rejected.
//!
//! ```
//! use wrapbuf::DuplexRing;
//!
//! let mut memory = [0u8; 15];
//! let mut ring = DuplexRing::new(&mut memory)?;
//!
//! assert_eq!(ring.write(b"Hello, world!\n"), 14);
//! assert_eq!(ring.write(b"Hello, world!\n"), 1);
//! assert!(ring.is_full());
//!
//! let mut out = [0u8; 15];
//! assert_eq!(ring.read(&mut out), 15);
//! assert_eq!(&out, b"Hello, world!\nH");
//! assert!(ring.is_empty());
//! # Ok::<(), wrapbuf::RingError>(())
//! ```
//!
//! None of the rings are synchronized. Sharing one between a producer and a consumer on different threads is the
//! caller's responsibility.
mod arrays;
mod error;
mod io;
pub mod rings;

pub use crate::error::RingError;
pub use crate::rings::{DuplexRing, ReadOnlyRing, ReadableRing, Ring, WritableRing, WriteOnlyRing};
