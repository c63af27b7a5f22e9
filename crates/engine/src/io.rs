//! I/O helpers: checksums of readers and files, and transparent adapters.
//!
//! - [`Engine::checksum_reader`] drains any [`Read`] through a caller buffer
//! - [`Engine::checksum_file`] / [`Engine::checksum_path`] open a path first
//! - [`Engine::reader`] / [`Engine::writer`] wrap a stream in a
//!   [`ChecksumReader`] / [`ChecksumWriter`] driven by a [`Digest`]
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use crc_engine::{Strategy, catalogue};
//!
//! let engine = catalogue::CRC_32_ISCSI.engine(Strategy::Table8);
//! let mut reader = engine.reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(reader.crc(), engine.checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

use std::{
  fs::File,
  io::{ErrorKind, Read},
  path::Path,
  vec,
};

use log::{debug, trace};
pub use traits::io::{ChecksumReader, ChecksumWriter};

use crate::{CrcError, Digest, Engine, config};

impl Engine {
  /// Checksum everything `reader` yields, reading through `buf`.
  ///
  /// `Interrupted` reads are retried; any other read error aborts the
  /// computation without a partial result.
  ///
  /// # Errors
  ///
  /// - [`CrcError::EmptyParameters`] when `buf` is empty
  /// - [`CrcError::Io`] when a read fails
  pub fn checksum_reader<R: Read>(&self, mut reader: R, buf: &mut [u8]) -> Result<u64, CrcError> {
    if buf.is_empty() {
      return Err(CrcError::EmptyParameters);
    }
    let mut raw = self.init_raw();
    let mut total = 0u64;
    loop {
      let n = match reader.read(buf) {
        Ok(0) => break,
        Ok(n) => n,
        Err(e) if e.kind() == ErrorKind::Interrupted => continue,
        Err(e) => return Err(e.into()),
      };
      let Some(chunk) = buf.get(..n) else {
        return Err(std::io::Error::new(ErrorKind::InvalidData, "reader overran its buffer").into());
      };
      raw = self.update_raw(raw, chunk);
      total += n as u64;
      trace!("read {n} bytes ({total} total)");
    }
    Ok(self.finalize_raw(raw))
  }

  /// Checksum the file at `path`, reading through the caller's `buf`.
  ///
  /// The buffer is checked before the path is touched.
  ///
  /// # Errors
  ///
  /// - [`CrcError::EmptyParameters`] when `buf` is empty
  /// - [`CrcError::Io`] when the file cannot be opened or read
  ///
  /// ```rust,no_run
  /// use crc_engine::{Strategy, catalogue};
  ///
  /// let engine = catalogue::CRC_32_ISO_HDLC.engine(Strategy::Table8);
  /// let mut buf = [0u8; 8192];
  /// let crc = engine.checksum_file("data.bin", &mut buf)?;
  /// println!("{crc:08x}");
  /// # Ok::<(), crc_engine::CrcError>(())
  /// ```
  pub fn checksum_file<P: AsRef<Path>>(&self, path: P, buf: &mut [u8]) -> Result<u64, CrcError> {
    if buf.is_empty() {
      return Err(CrcError::EmptyParameters);
    }
    let path = path.as_ref();
    debug!(
      "checksumming {} with {}({}), {}-byte buffer",
      path.display(),
      self.name().unwrap_or("custom"),
      self.strategy(),
      buf.len()
    );
    let file = File::open(path)?;
    self.checksum_reader(file, buf)
  }

  /// Checksum the file at `path` with a scratch buffer sized by
  /// [`config`](crate::config) (4096 bytes unless overridden).
  ///
  /// # Errors
  ///
  /// [`CrcError::Io`] when the file cannot be opened or read.
  pub fn checksum_path<P: AsRef<Path>>(&self, path: P) -> Result<u64, CrcError> {
    let mut buf = vec![0u8; config::get().file_buffer];
    self.checksum_file(path, &mut buf)
  }

  /// Wrap a reader so every byte read is checksummed.
  #[inline]
  #[must_use]
  pub fn reader<R: Read>(&self, inner: R) -> ChecksumReader<R, Digest<'_>> {
    ChecksumReader::new(inner, self.digest())
  }

  /// Wrap a writer so every byte accepted by it is checksummed.
  #[inline]
  #[must_use]
  pub fn writer<W: std::io::Write>(&self, inner: W) -> ChecksumWriter<W, Digest<'_>> {
    ChecksumWriter::new(inner, self.digest())
  }
}
