//! I/O adapters that checksum the bytes flowing through a reader or writer.
//!
//! Both adapters take the running state by value, so they work for
//! compile-time presets and for states borrowed from a runtime engine alike.
//!
//! # Example
//!
//! ```rust
//! # use traits::{io::ChecksumReader, Checksum};
//! # #[derive(Clone, Default)]
//! # struct Sum(u32);
//! # impl Checksum for Sum {
//! #   type Output = u32;
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = ChecksumReader::new(Cursor::new(b"abc".to_vec()), Sum::default());
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(
//!   reader.crc(),
//!   u32::from(b'a') + u32::from(b'b') + u32::from(b'c')
//! );
//! # Ok::<(), std::io::Error>(())
//! ```

#![cfg(feature = "std")]

use crate::Checksum;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

// Only the bytes the inner writer accepted are checksummed, so `write_all`
// retries after a short write never count a byte twice.
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and computes a checksum transparently.
///
/// All reads pass through to the inner reader while updating the checksum
/// with the bytes actually read (short reads included).
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C: Checksum> {
  inner: R,
  hasher: C,
}

impl<R, C: Checksum> ChecksumReader<R, C> {
  /// Wrap `inner`, feeding every byte read into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: R, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// Current checksum of the bytes read so far.
  ///
  /// Further reads keep updating the checksum.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  /// Mutable access to the running state.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    let crc = self.hasher.finalize();
    (self.inner, crc)
  }

  /// Unwrap, returning the inner reader and discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, C: Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and computes a checksum transparently.
///
/// Only bytes accepted by the inner writer are checksummed.
///
/// ```rust
/// # use traits::{io::ChecksumWriter, Checksum};
/// # #[derive(Clone, Default)]
/// # struct Sum(u32);
/// # impl Checksum for Sum {
/// #   type Output = u32;
/// #   fn update(&mut self, data: &[u8]) {
/// #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&self) -> Self::Output { self.0 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// # }
/// # use std::io::Write;
/// let mut writer = ChecksumWriter::new(Vec::new(), Sum::default());
/// writer.write_all(b"hello world")?;
/// let (out, checksum) = writer.into_parts();
/// assert_eq!(out, b"hello world".to_vec());
/// assert_eq!(
///   checksum,
///   b"hello world"
///     .iter()
///     .fold(0u32, |acc, &b| acc.wrapping_add(u32::from(b)))
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C: Checksum> {
  inner: W,
  hasher: C,
}

impl<W, C: Checksum> ChecksumWriter<W, C> {
  /// Wrap `inner`, feeding every byte written into `hasher`.
  #[inline]
  #[must_use]
  pub fn new(inner: W, hasher: C) -> Self {
    Self { inner, hasher }
  }

  /// Current checksum of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut C {
    &mut self.hasher
  }

  /// Unwrap, returning the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    let crc = self.hasher.finalize();
    (self.inner, crc)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, C: Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Cursor, IoSliceMut, Read, Write},
    vec::Vec,
  };

  use super::*;

  #[derive(Clone, Default, Debug)]
  struct Sum(u32);

  impl Checksum for Sum {
    type Output = u32;

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Accepts at most `limit` bytes per `write` call.
  struct ShortWriter {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for ShortWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  fn sum(data: &[u8]) -> u32 {
    data.iter().map(|&b| u32::from(b)).sum()
  }

  #[test]
  fn reader_counts_only_bytes_read() {
    let mut reader = ChecksumReader::new(Cursor::new(b"hello world".to_vec()), Sum::default());
    let mut buf = [0u8; 5];
    let n = reader.read(&mut buf).unwrap();
    assert_eq!(n, 5);
    assert_eq!(reader.crc(), sum(b"hello"));

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(reader.crc(), sum(b"hello world"));
  }

  #[test]
  fn reader_vectored() {
    let mut reader = ChecksumReader::new(Cursor::new(b"abcdef".to_vec()), Sum::default());
    let mut a = [0u8; 2];
    let mut b = [0u8; 8];
    let mut bufs = [IoSliceMut::new(&mut a), IoSliceMut::new(&mut b)];
    let n = reader.read_vectored(&mut bufs).unwrap();
    assert_eq!(n, 6);
    assert_eq!(reader.crc(), sum(b"abcdef"));
  }

  #[test]
  fn writer_short_writes_are_not_double_counted() {
    let inner = ShortWriter { out: Vec::new(), limit: 3 };
    let mut writer = ChecksumWriter::new(inner, Sum::default());
    writer.write_all(b"hello world").unwrap();
    let (inner, crc) = writer.into_parts();
    assert_eq!(inner.out, b"hello world");
    assert_eq!(crc, sum(b"hello world"));
  }

  #[test]
  fn reader_accessors() {
    let mut reader = ChecksumReader::new(Cursor::new(b"abc".to_vec()), Sum::default());
    assert_eq!(reader.inner().position(), 0);

    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf).unwrap();
    assert_eq!(reader.inner().position(), 2);

    // Skipping ahead on the inner reader bypasses the checksum.
    reader.inner_mut().set_position(3);
    reader.hasher_mut().update(b"!");
    assert_eq!(reader.crc(), sum(b"ab!"));

    let inner = reader.into_inner();
    assert_eq!(inner.into_inner(), b"abc");
  }

  #[test]
  fn writer_accessors() {
    let mut writer = ChecksumWriter::new(Vec::new(), Sum::default());
    writer.write_all(b"xy").unwrap();
    assert_eq!(writer.inner(), b"xy");

    // Writes straight to the inner writer are not checksummed.
    writer.inner_mut().extend_from_slice(b"z");
    assert_eq!(writer.crc(), sum(b"xy"));

    writer.hasher_mut().reset();
    writer.write_all(b"w").unwrap();
    assert_eq!(writer.crc(), sum(b"w"));
    assert_eq!(writer.into_inner(), b"xyzw");
  }
}
