//! Byte I/O adapters for the rings.
//!
//! Every ring operation completes immediately, so the asynchronous implementations are always ready and never
//! register a waker. An empty [`DuplexRing`] reads `Ok(0)` and a full one writes `Ok(0)`; callers that need to tell
//! "nothing right now" apart from end-of-stream should check [`DuplexRing::is_empty`] themselves.

use crate::rings::{DuplexRing, ReadOnlyRing, WriteOnlyRing};
use futures_io::{AsyncRead, AsyncWrite};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

impl io::Read for DuplexRing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(DuplexRing::read(self, buf))
    }
}

impl io::Write for DuplexRing<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(DuplexRing::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for ReadOnlyRing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(ReadOnlyRing::read(self, buf))
    }
}

impl io::Write for WriteOnlyRing<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(WriteOnlyRing::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsyncRead for DuplexRing<'_> {
    fn poll_read(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut [u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(DuplexRing::read(self.get_mut(), buf)))
    }
}

impl AsyncWrite for DuplexRing<'_> {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(DuplexRing::write(self.get_mut(), buf)))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

impl AsyncRead for ReadOnlyRing<'_> {
    fn poll_read(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut [u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(ReadOnlyRing::read(self.get_mut(), buf)))
    }
}

impl AsyncWrite for WriteOnlyRing<'_> {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Ok(WriteOnlyRing::write(self.get_mut(), buf)))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}
