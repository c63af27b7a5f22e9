//! Non-cryptographic checksum traits.
//!
//! Two layers:
//!
//! - [`Checksum`] is the streaming interface every running CRC state
//!   implements, including states whose parameters are only known at runtime.
//! - [`FixedChecksum`] adds construction and one-shot helpers for checksums
//!   whose parameters are fixed at compile time.

use core::fmt::Debug;

/// Streaming checksum state.
///
/// # Usage
///
/// ```rust,ignore
/// use crc_engine::{catalogue, Checksum, Engine, Strategy};
///
/// let engine = Engine::for_algorithm(&catalogue::CRC_32_ISO_HDLC, Strategy::Table8);
/// let mut state = engine.digest();
/// state.update(b"1234");
/// state.update(b"56789");
/// assert_eq!(state.finalize(), 0xCBF4_3926);
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the state to the one it was created with
/// - the result must not depend on how the input was split across `update` calls
pub trait Checksum: Clone {
  /// The checksum output type.
  ///
  /// The narrowest unsigned integer that holds the checksum width.
  type Output: Copy + Eq + Debug;

  /// Update the state with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the state with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the state with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the state; further updates continue from
  /// the data processed so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the state to its initial value.
  fn reset(&mut self);
}

/// Checksum whose parameters are fixed at compile time.
///
/// ```rust,ignore
/// use crc_engine::{Crc64Xz, FixedChecksum};
///
/// assert_eq!(Crc64Xz::checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
/// ```
pub trait FixedChecksum: Checksum + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Create a new state with the algorithm's initial value.
  #[must_use]
  fn new() -> Self;

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  ///
  /// ```rust,ignore
  /// use crc_engine::{Crc32, FixedChecksum};
  /// use std::fs::File;
  ///
  /// let file = File::open("data.bin")?;
  /// let mut reader = Crc32::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("CRC: {:08x}", reader.crc());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner, Self::new())
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner, Self::new())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Byte-wise XOR fold: order-insensitive, so it only checks that every byte
  /// is seen exactly once.
  #[derive(Clone, Debug, Default)]
  struct Fold(u8, usize);

  impl Checksum for Fold {
    type Output = (u8, usize);

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b);
      self.1 += data.len();
    }

    fn finalize(&self) -> (u8, usize) {
      (self.0, self.1)
    }

    fn reset(&mut self) {
      *self = Self::default();
    }
  }

  impl FixedChecksum for Fold {
    const OUTPUT_SIZE: usize = 1;

    fn new() -> Self {
      Self::default()
    }
  }

  #[test]
  fn vectored_matches_contiguous() {
    let whole = Fold::checksum(b"hello world");
    assert_eq!(Fold::checksum_vectored(&[b"hello", b"", b" world"]), whole);

    let mut state = Fold::new();
    state.update_vectored(&[b"hel", b"lo world"]);
    assert_eq!(state.finalize(), whole);
    state.reset();
    assert_eq!(state.finalize(), (0, 0));
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_contiguous() {
    use std::io::IoSlice;

    let mut state = Fold::new();
    state.update_io_slices(&[IoSlice::new(b"hello"), IoSlice::new(b""), IoSlice::new(b" world")]);
    assert_eq!(state.finalize(), Fold::checksum(b"hello world"));
  }
}
