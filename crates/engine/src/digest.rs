//! Streaming state over a borrowed [`Engine`].

use traits::Checksum;

use crate::Engine;

/// Running CRC computation.
///
/// Created by [`Engine::digest`] or [`Engine::resume`]. The digest borrows
/// its engine and owns only the width-masked raw register, so concurrent
/// computations over one engine each hold their own digest.
///
/// [`finalize`](Checksum::finalize) does not consume the state; feeding more
/// bytes afterwards continues the same message. Use [`reset`](Checksum::reset)
/// or a fresh digest to start a new one.
#[derive(Clone, Debug)]
pub struct Digest<'e> {
  engine: &'e Engine,
  register: u64,
}

impl<'e> Digest<'e> {
  #[inline]
  pub(crate) const fn new(engine: &'e Engine, register: u64) -> Self {
    Self {
      engine,
      register: register & engine.definition().mask(),
    }
  }

  /// The engine this digest feeds.
  #[inline]
  #[must_use]
  pub const fn engine(&self) -> &'e Engine {
    self.engine
  }

  /// Current raw (unfinalized) register.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.register
  }
}

impl Checksum for Digest<'_> {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.register = self.engine.update_raw(self.register, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.engine.finalize_raw(self.register)
  }

  #[inline]
  fn reset(&mut self) {
    self.register = self.engine.init_raw();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Strategy, catalogue, params::CHECK_INPUT};

  #[test]
  fn chunked_updates_match_one_shot() {
    for strategy in Strategy::ALL {
      let engine = Engine::for_algorithm(&catalogue::CRC_24_OPENPGP, strategy);
      let expected = engine.checksum(CHECK_INPUT);
      for split in 0..=CHECK_INPUT.len() {
        let (a, b) = CHECK_INPUT.split_at(split);
        let mut digest = engine.digest();
        digest.update(a);
        digest.update(&[]);
        digest.update(b);
        assert_eq!(digest.finalize(), expected, "{strategy} split={split}");
      }
    }
  }

  #[test]
  fn finalize_is_idempotent_and_reset_restarts() {
    let engine = Engine::for_algorithm(&catalogue::CRC_16_MODBUS, Strategy::Table8);
    let mut digest = engine.digest();
    digest.update(CHECK_INPUT);
    assert_eq!(digest.finalize(), 0x4B37);
    assert_eq!(digest.finalize(), 0x4B37);

    digest.reset();
    assert_eq!(digest.register(), engine.init_raw());
    assert_eq!(digest.finalize(), engine.checksum(&[]));
  }

  #[test]
  fn vectored_update() {
    let engine = Engine::for_algorithm(&catalogue::CRC_32_ISCSI, Strategy::Table4);
    let mut digest = engine.digest();
    digest.update_vectored(&[b"123", b"", b"456789"]);
    assert_eq!(digest.finalize(), 0xE306_9283);
  }

  #[test]
  fn resume_continues_every_reflection_mode() {
    for algorithm in [
      &catalogue::CRC_12_UMTS,
      &catalogue::CRC_32_JAMCRC,
      &catalogue::CRC_64_WE,
      &catalogue::CRC_5_USB,
    ] {
      let engine = Engine::for_algorithm(algorithm, Strategy::Bits);
      let (a, b) = CHECK_INPUT.split_at(3);
      let mut digest = engine.resume(engine.checksum(a));
      digest.update(b);
      assert_eq!(digest.finalize(), algorithm.definition().check(), "{}", algorithm.name());
    }
  }
}
