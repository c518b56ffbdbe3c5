//! Provides functions for copying elements through wrapping ranges of an array.
//!
//! Every ring in this crate maps a linear stream onto a fixed region by splitting each transfer into at most two
//! contiguous runs: one from the cursor to the end of the region, and one from the start of the region onward. That
//! split lives here so the rings only have to decide *how much* to move.
use std::ops::Range;

/// Split a wrapping run of `len` elements beginning at `start` into at most two contiguous ranges of an array with
/// length `capacity`.
///
/// The second range is empty unless the run crosses the end of the array. `start` must be less than `capacity` and
/// `len` must not exceed `capacity`.
#[inline]
pub fn split(start: usize, len: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
    debug_assert!(start < capacity);
    debug_assert!(len <= capacity);

    let first = len.min(capacity - start);
    (start..start + first, 0..len - first)
}

/// Advance a cursor by `count` elements, wrapping around `capacity`.
#[inline]
pub fn advance(cursor: usize, count: usize, capacity: usize) -> usize {
    // Reducing `count` first keeps the sum below `2 * capacity`, which cannot overflow for any slice length.
    (cursor + count % capacity) % capacity
}

/// Copy as many elements as possible from one slice to another.
///
/// Returns the number of elements copied.
#[inline]
pub fn copy<T: Copy>(src: &[T], dest: &mut [T]) -> usize {
    let len = src.len().min(dest.len());
    dest[..len].copy_from_slice(&src[..len]);
    len
}

/// Copy as many elements as possible from a slice of slices to another.
///
/// Returns the number of elements copied.
pub fn copy_from_seq<T: Copy>(seq: &[&[T]], dest: &mut [T]) -> usize {
    let mut copied = 0;

    for slice in seq {
        if copied < dest.len() {
            copied += copy(slice, &mut dest[copied..]);
        } else {
            break;
        }
    }

    copied
}

/// Copy as many elements as possible from a slice into a slice of slices.
///
/// Returns the number of elements copied.
pub fn copy_to_seq<T: Copy>(src: &[T], seq: &mut [&mut [T]]) -> usize {
    let mut copied = 0;

    for slice in seq.iter_mut() {
        if copied < src.len() {
            copied += copy(&src[copied..], slice);
        } else {
            break;
        }
    }

    copied
}

/// Copy all of `src` into `array` beginning at `start`, wrapping around the end of the array.
///
/// `src` must not be longer than `array`. Returns the index following the last element written.
pub fn wrapping_write<T: Copy>(array: &mut [T], start: usize, src: &[T]) -> usize {
    let capacity = array.len();
    let mut slices = array.wrapping_range_mut(start, src.len());

    let copied = copy_to_seq(src, &mut slices);
    debug_assert_eq!(copied, src.len());

    advance(start, copied, capacity)
}

/// Fill all of `dest` from `array` beginning at `start`, wrapping around the end of the array.
///
/// `dest` must not be longer than `array`. Returns the index following the last element read.
pub fn wrapping_read<T: Copy>(array: &[T], start: usize, dest: &mut [T]) -> usize {
    let slices = array.wrapping_range(start, dest.len());

    let copied = copy_from_seq(&slices, dest);
    debug_assert_eq!(copied, dest.len());

    advance(start, copied, array.len())
}

/// Extension trait for slices for working with wrapping ranges and indices.
pub trait WrappingSlice<T> {
    /// Gets the pair of slices covering `len` elements beginning at `start`, wrapping around length.
    fn wrapping_range(&self, start: usize, len: usize) -> [&[T]; 2];

    /// Gets the pair of mutable slices covering `len` elements beginning at `start`, wrapping around length.
    fn wrapping_range_mut(&mut self, start: usize, len: usize) -> [&mut [T]; 2];
}

impl<T> WrappingSlice<T> for [T] {
    fn wrapping_range(&self, start: usize, len: usize) -> [&[T]; 2] {
        let (head, tail) = split(start, len, self.len());
        [&self[head], &self[tail]]
    }

    fn wrapping_range_mut(&mut self, start: usize, len: usize) -> [&mut [T]; 2] {
        let (head, tail) = split(start, len, self.len());
        let head_len = head.end - head.start;

        // The tail always ends at or before `start`, so the two runs never overlap.
        let (left, right) = self.split_at_mut(head.start);
        [&mut right[..head_len], &mut left[tail]]
    }
}
