//! The CRC engine: a [`Definition`] bound to one [`Strategy`].

use core::fmt;

use crate::{
  CrcError, Digest, Strategy,
  catalogue::Algorithm,
  common::{portable, reference, tables},
  config,
  params::{CHECK_INPUT, Definition},
};

/// Precomputed per-strategy state.
#[derive(Clone)]
enum Kernel {
  Bits { poly_reflected: u64 },
  Table4([u64; 16]),
  Table8([u64; 256]),
}

impl fmt::Debug for Kernel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bits { poly_reflected } => f
        .debug_struct("Bits")
        .field("poly_reflected", &format_args!("{poly_reflected:#x}"))
        .finish(),
      Self::Table4(_) => f.write_str("Table4"),
      Self::Table8(_) => f.write_str("Table8"),
    }
  }
}

/// A CRC definition bound to a computation strategy.
///
/// Construction precomputes the strategy's table; afterwards the engine is
/// immutable, so one engine can be shared by any number of threads, each
/// driving its own [`Digest`].
///
/// # Example
///
/// ```rust
/// use crc_engine::{Checksum, Engine, Strategy, catalogue};
///
/// let engine = Engine::for_algorithm(&catalogue::CRC_32_ISO_HDLC, Strategy::Table8);
/// assert_eq!(engine.checksum(b"123456789"), 0xCBF4_3926);
///
/// let mut digest = engine.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0xCBF4_3926);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
  name: Option<&'static str>,
  definition: Definition,
  strategy: Strategy,
  kernel: Kernel,
}

impl Engine {
  /// Bind `definition` to `strategy`, building its table.
  ///
  /// This is a `const fn`, so engines can live in `static`s with their
  /// tables computed at compile time.
  #[must_use]
  pub const fn new(definition: Definition, strategy: Strategy) -> Self {
    let kernel = match strategy {
      Strategy::Bits => Kernel::Bits {
        poly_reflected: definition.poly_reflected(),
      },
      Strategy::Table4 => Kernel::Table4(tables::table4(&definition)),
      Strategy::Table8 => Kernel::Table8(tables::table8(&definition)),
    };
    Self {
      name: None,
      definition,
      strategy,
      kernel,
    }
  }

  /// Engine for a catalogue algorithm; the name is kept for diagnostics.
  #[must_use]
  pub const fn for_algorithm(algorithm: &Algorithm, strategy: Strategy) -> Self {
    let mut engine = Self::new(*algorithm.definition(), strategy);
    engine.name = Some(algorithm.name());
    engine
  }

  /// Engine using the process-wide default strategy (see [`config`]).
  #[must_use]
  pub fn with_default_strategy(definition: Definition) -> Self {
    Self::new(definition, config::get().strategy)
  }

  /// Catalogue name, when the engine was built from an [`Algorithm`].
  #[inline]
  #[must_use]
  pub const fn name(&self) -> Option<&'static str> {
    self.name
  }

  #[inline]
  #[must_use]
  pub const fn definition(&self) -> &Definition {
    &self.definition
  }

  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.strategy
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Raw register API
  // ───────────────────────────────────────────────────────────────────────────

  /// Starting register for a new message.
  #[inline]
  #[must_use]
  pub const fn init_raw(&self) -> u64 {
    self.definition.crc_init()
  }

  /// Fold `data` into a raw register and return the new register.
  ///
  /// Chunks may be fed in any split; the result only depends on the
  /// concatenated bytes.
  ///
  /// ```rust
  /// use crc_engine::{Engine, Strategy, catalogue};
  ///
  /// let engine = Engine::for_algorithm(&catalogue::CRC_16_XMODEM, Strategy::Table4);
  /// let raw = engine.update_raw(engine.init_raw(), b"12345");
  /// let raw = engine.update_raw(raw, b"6789");
  /// assert_eq!(engine.finalize_raw(raw), 0x31C3);
  /// ```
  #[inline]
  #[must_use]
  pub fn update_raw(&self, raw: u64, data: &[u8]) -> u64 {
    let def = &self.definition;
    let raw = raw & def.mask();
    match &self.kernel {
      Kernel::Bits { poly_reflected } => reference::update(def, *poly_reflected, raw, data),
      Kernel::Table4(table) => portable::update_table4(def, table, raw, data),
      Kernel::Table8(table) => portable::update_table8(def, table, raw, data),
    }
  }

  /// Turn a raw register into the published checksum.
  #[inline]
  #[must_use]
  pub const fn finalize_raw(&self, raw: u64) -> u64 {
    self.definition.finalize(raw)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Checksums
  // ───────────────────────────────────────────────────────────────────────────

  /// Checksum of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    self.finalize_raw(self.update_raw(self.init_raw(), data))
  }

  /// Start a streaming computation.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> Digest<'_> {
    Digest::new(self, self.init_raw())
  }

  /// Continue a computation from a finished checksum.
  ///
  /// Feeding `b` into `resume(checksum(a))` yields `checksum(a ++ b)`.
  ///
  /// ```rust
  /// use crc_engine::{Checksum, Engine, Strategy, catalogue};
  ///
  /// let engine = Engine::for_algorithm(&catalogue::CRC_64_XZ, Strategy::Table8);
  /// let mut digest = engine.resume(engine.checksum(b"1234"));
  /// digest.update(b"56789");
  /// assert_eq!(digest.finalize(), 0x995D_C9BB_DF19_39FA);
  /// ```
  #[inline]
  #[must_use]
  pub const fn resume(&self, checksum: u64) -> Digest<'_> {
    Digest::new(self, self.definition.unfinalize(checksum))
  }

  /// Checksum of `"123456789"` as computed by this engine's strategy.
  ///
  /// Compare with [`Definition::check`] to validate the pair; [`verify`](Self::verify)
  /// does exactly that.
  #[inline]
  #[must_use]
  pub fn check_value(&self) -> u64 {
    self.checksum(CHECK_INPUT)
  }

  /// Compare [`check_value`](Self::check_value) with the definition's
  /// published check value.
  ///
  /// # Errors
  ///
  /// [`CrcError::CheckMismatch`] when they differ.
  pub fn verify(&self) -> Result<(), CrcError> {
    let actual = self.check_value();
    let expected = self.definition.check();
    if actual == expected {
      return Ok(());
    }
    Err(CrcError::CheckMismatch {
      algorithm: self.name.unwrap_or("custom"),
      strategy: self.strategy,
      expected,
      actual,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalogue;

  #[test]
  fn every_strategy_hits_the_check_value() {
    for algorithm in [
      &catalogue::CRC_32_ISO_HDLC,
      &catalogue::CRC_32_BZIP2,
      &catalogue::CRC_64_XZ,
      &catalogue::CRC_3_GSM,
      &catalogue::CRC_12_UMTS,
    ] {
      for strategy in Strategy::ALL {
        let engine = Engine::for_algorithm(algorithm, strategy);
        assert_eq!(engine.checksum(CHECK_INPUT), algorithm.definition().check());
        assert!(engine.verify().is_ok());
      }
    }
  }

  #[test]
  fn empty_input_is_finalized_init() {
    for strategy in Strategy::ALL {
      let engine = Engine::for_algorithm(&catalogue::CRC_16_GENIBUS, strategy);
      assert_eq!(engine.checksum(&[]), engine.finalize_raw(engine.init_raw()));
      assert_eq!(engine.checksum(&[]), 0x0000);
    }
  }

  #[test]
  fn verify_reports_wrong_check_values() {
    let def = catalogue::CRC_32_ISO_HDLC.definition().with_check(0x1234);
    let engine = Engine::new(def, Strategy::Table4);
    match engine.verify() {
      Err(CrcError::CheckMismatch {
        algorithm,
        strategy,
        expected,
        actual,
      }) => {
        assert_eq!(algorithm, "custom");
        assert_eq!(strategy, Strategy::Table4);
        assert_eq!(expected, 0x1234);
        assert_eq!(actual, 0xCBF4_3926);
      }
      other => panic!("expected a check mismatch, got {other:?}"),
    }
  }

  #[test]
  fn check_value_is_computed_not_stored() {
    let def = catalogue::CRC_32_ISO_HDLC.definition().with_check(0x1234);
    for strategy in Strategy::ALL {
      let engine = Engine::new(def, strategy);
      assert_eq!(engine.check_value(), 0xCBF4_3926, "{strategy}");
      assert_eq!(engine.check_value(), engine.checksum(CHECK_INPUT));
      assert_ne!(engine.check_value(), def.check());
    }
  }

  #[test]
  fn default_strategy_follows_config() {
    let def = *catalogue::CRC_16_ARC.definition();
    let engine = Engine::with_default_strategy(def);
    assert_eq!(engine.strategy(), config::get().strategy);
    assert_eq!(engine.name(), None);
    assert_eq!(engine.check_value(), 0xBB3D);
    assert!(engine.verify().is_ok());
  }

  #[test]
  fn names_follow_the_algorithm() {
    let engine = Engine::for_algorithm(&catalogue::CRC_32_XFER, Strategy::Bits);
    assert_eq!(engine.name(), Some("CRC-32/XFER"));
    assert_eq!(engine.strategy(), Strategy::Bits);
    assert_eq!(Engine::new(*catalogue::CRC_32_XFER.definition(), Strategy::Bits).name(), None);
  }

  #[test]
  fn unmasked_raw_registers_are_masked() {
    let engine = Engine::for_algorithm(&catalogue::CRC_8_SMBUS, Strategy::Table8);
    let masked = engine.update_raw(0x00, b"abc");
    let dirty = engine.update_raw(0xFF00, b"abc");
    assert_eq!(masked, dirty);
  }
}
