//! Runtime configuration (env overrides).
//!
//! This module centralizes the process-wide knobs so:
//! - Callers that do not pick a strategy get a consistent default
//! - Benchmarks/tests can force a strategy without code changes
//! - File helpers share one scratch buffer size
//!
//! | Variable | Effect | Default |
//! |----------|--------|---------|
//! | `CRC_ENGINE_STRATEGY` | default [`Strategy`] (`table8`, `table4`, `bits` or an alias) | `table8` |
//! | `CRC_ENGINE_FILE_BUFFER` | scratch buffer bytes for path checksums | 4096 |
//!
//! The environment is read once, on first use. Without `std` the defaults
//! apply.

use crate::Strategy;

/// Scratch buffer size for path checksums when no override is set.
pub const DEFAULT_FILE_BUFFER: usize = 4096;

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  /// Strategy used when the caller does not pick one.
  pub strategy: Strategy,
  /// Scratch buffer bytes for [`Engine::checksum_path`](crate::Engine::checksum_path).
  pub file_buffer: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      strategy: Strategy::Table8,
      file_buffer: DEFAULT_FILE_BUFFER,
    }
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overrides {
  strategy: Option<Strategy>,
  file_buffer: Option<usize>,
}

impl Overrides {
  fn apply(self) -> Config {
    let defaults = Config::default();
    Config {
      strategy: self.strategy.unwrap_or(defaults.strategy),
      file_buffer: self.file_buffer.map_or(defaults.file_buffer, |n| n.max(1)),
    }
  }
}

#[cfg(any(feature = "std", test))]
fn parse_usize(value: &str) -> Option<usize> {
  let value = value.trim();
  if value.is_empty() {
    return None;
  }
  value.parse::<usize>().ok()
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn var(name: &str) -> Option<std::string::String> {
    std::env::var(name).ok()
  }

  Overrides {
    strategy: var("CRC_ENGINE_STRATEGY").and_then(|v| Strategy::parse(&v)),
    file_buffer: var("CRC_ENGINE_FILE_BUFFER").and_then(|v| parse_usize(&v)),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(|| {
    let overrides = read_env_overrides();
    if overrides != Overrides::default() {
      log::debug!("crc-engine env overrides: {overrides:?}");
    }
    overrides
  })
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  overrides().apply()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    assert_eq!(
      Overrides::default().apply(),
      Config {
        strategy: Strategy::Table8,
        file_buffer: 4096
      }
    );
  }

  #[test]
  fn overrides_apply() {
    let config = Overrides {
      strategy: Some(Strategy::Bits),
      file_buffer: Some(17),
    }
    .apply();
    assert_eq!(config.strategy, Strategy::Bits);
    assert_eq!(config.file_buffer, 17);
  }

  #[test]
  fn file_buffer_is_clamped() {
    let config = Overrides {
      strategy: None,
      file_buffer: Some(0),
    }
    .apply();
    assert_eq!(config.file_buffer, 1);
  }

  #[test]
  fn parse_usize_rejects_garbage() {
    assert_eq!(parse_usize(" 8192 "), Some(8192));
    assert_eq!(parse_usize(""), None);
    assert_eq!(parse_usize("4k"), None);
    assert_eq!(parse_usize("-1"), None);
  }
}
