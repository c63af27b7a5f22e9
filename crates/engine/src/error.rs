//! Error type shared by every fallible operation in the crate.

use crate::Strategy;

/// Errors returned by the CRC engine.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CrcError {
  /// Raw parameters with a width outside `1..=64`.
  #[error("invalid CRC width {bits}: expected 1..=64 bits")]
  InvalidWidth { bits: u8 },

  /// A zero-sized scratch buffer was passed to a file or reader compute.
  #[error("empty scratch buffer")]
  EmptyParameters,

  /// No catalogue entry matches the requested name.
  #[error("unknown CRC algorithm")]
  UnknownAlgorithm,

  /// Strategy label not recognised.
  #[error("unknown strategy (expected table8, table4 or bits)")]
  UnknownStrategy,

  /// A definition did not reproduce its published check value.
  #[error("{algorithm}({strategy}): check mismatch, expected {expected:#x}, got {actual:#x}")]
  CheckMismatch {
    algorithm: &'static str,
    strategy: Strategy,
    expected: u64,
    actual: u64,
  },

  /// Opening or reading the input failed.
  #[cfg(feature = "std")]
  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}
