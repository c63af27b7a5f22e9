//! CRC algorithm parameters.
//!
//! This module defines the parameter set of a CRC algorithm following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crate::{
  CrcError,
  common::reference,
  reflect::{reflect, top_bit, width_mask},
};

/// Input whose checksum every catalogue entry publishes as its check value.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `bits`: number of bits in the CRC (1 to 64)
/// - `poly`: generator polynomial, normal form, without the implicit high bit
/// - `init`: initial register value, as published (unreflected)
/// - `ref_in`: process input bytes LSB first
/// - `ref_out`: reflect the final register before the XOR
/// - `xor_out`: value XORed into the final register
/// - `check`: checksum of [`CHECK_INPUT`]
///
/// Every stored value is masked to `bits`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Definition {
  bits: u8,
  poly: u64,
  init: u64,
  ref_in: bool,
  ref_out: bool,
  xor_out: u64,
  check: u64,
}

impl Definition {
  /// Build a definition from raw parameters.
  ///
  /// `poly`, `init` and `xor_out` are masked to the width, and the check
  /// value is computed with the bit-serial reference.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidWidth`] when `bits` is outside `1..=64`.
  ///
  /// ```rust
  /// use crc_engine::Definition;
  ///
  /// let def = Definition::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
  /// assert_eq!(def.check(), 0xCBF4_3926);
  /// # Ok::<(), crc_engine::CrcError>(())
  /// ```
  pub fn new(bits: u8, poly: u64, init: u64, ref_in: bool, ref_out: bool, xor_out: u64) -> Result<Self, CrcError> {
    if bits == 0 || bits > 64 {
      return Err(CrcError::InvalidWidth { bits });
    }
    let unchecked = Self::unchecked(bits, poly, init, ref_in, ref_out, xor_out, 0);
    Ok(unchecked.with_check(reference::checksum(&unchecked, CHECK_INPUT)))
  }

  /// Const constructor for published parameter sets.
  ///
  /// Meant for `const` items only, where a width outside `1..=64` fails
  /// compilation. Called at runtime it panics on such a width; runtime
  /// callers use [`new`](Self::new).
  #[doc(hidden)]
  #[must_use]
  pub const fn published(
    bits: u8,
    poly: u64,
    init: u64,
    ref_in: bool,
    ref_out: bool,
    xor_out: u64,
    check: u64,
  ) -> Self {
    assert!(bits >= 1 && bits <= 64, "CRC width must be 1..=64");
    Self::unchecked(bits, poly, init, ref_in, ref_out, xor_out, check)
  }

  const fn unchecked(bits: u8, poly: u64, init: u64, ref_in: bool, ref_out: bool, xor_out: u64, check: u64) -> Self {
    let mask = width_mask(bits);
    Self {
      bits,
      poly: poly & mask,
      init: init & mask,
      ref_in,
      ref_out,
      xor_out: xor_out & mask,
      check: check & mask,
    }
  }

  /// Replace the expected check value.
  ///
  /// Used when the caller knows the published check and wants
  /// [`Engine::verify`](crate::Engine::verify) to compare against it.
  #[inline]
  #[must_use]
  pub const fn with_check(mut self, check: u64) -> Self {
    self.check = check & width_mask(self.bits);
    self
  }

  #[inline]
  #[must_use]
  pub const fn bits(&self) -> u8 {
    self.bits
  }

  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  #[inline]
  #[must_use]
  pub const fn ref_in(&self) -> bool {
    self.ref_in
  }

  #[inline]
  #[must_use]
  pub const fn ref_out(&self) -> bool {
    self.ref_out
  }

  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u64 {
    self.xor_out
  }

  /// Expected checksum of [`CHECK_INPUT`].
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }

  #[inline]
  #[must_use]
  pub const fn top_bit(&self) -> u64 {
    top_bit(self.bits)
  }

  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.bits)
  }

  /// Starting register: `init`, reflected when the input is reflected.
  #[inline]
  #[must_use]
  pub const fn crc_init(&self) -> u64 {
    if self.ref_in { reflect(self.init, self.bits) } else { self.init }
  }

  /// The polynomial bit-reversed over the width, as used by LSB-first updates.
  #[inline]
  #[must_use]
  pub const fn poly_reflected(&self) -> u64 {
    reflect(self.poly, self.bits)
  }

  /// Turn a raw register into the published checksum.
  ///
  /// The register is reflected when `ref_in` and `ref_out` differ, then
  /// XORed with `xor_out`.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, raw: u64) -> u64 {
    let raw = raw & self.mask();
    let out = if self.ref_in != self.ref_out { reflect(raw, self.bits) } else { raw };
    (out ^ self.xor_out) & self.mask()
  }

  /// Inverse of [`finalize`](Self::finalize): recover the register that
  /// produced `crc`.
  #[inline]
  #[must_use]
  pub const fn unfinalize(&self, crc: u64) -> u64 {
    let raw = (crc ^ self.xor_out) & self.mask();
    if self.ref_in != self.ref_out { reflect(raw, self.bits) } else { raw }
  }
}

impl fmt::Display for Definition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let w = (self.bits as usize).div_ceil(4) + 2;
    write!(
      f,
      "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x} check={:#0w$x}",
      self.bits, self.poly, self.init, self.ref_in, self.ref_out, self.xor_out, self.check,
    )
  }
}
