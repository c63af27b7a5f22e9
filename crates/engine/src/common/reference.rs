//! Bit-serial reference processor for every CRC width.
//!
//! This module is the canonical "source of truth" for CRC computation. It
//! processes one bit at a time, so it is:
//!
//! - **Obviously correct**: each step mirrors the polynomial division
//! - **Const-evaluable**: check values are verified at compile time
//! - **Table-free**: it is also the [`Strategy::Bits`](crate::Strategy::Bits) kernel
//!
//! Both table strategies are built from these functions and must produce
//! identical results.
//!
//! # CRC Model
//!
//! Rocksoft model (CRC RevEng catalogue), see [`Definition`].
//!
//! # Register Layout
//!
//! The register lives in the low `bits` bits of a `u64`. Reflected
//! definitions keep it bit-reversed (LSB first), so a byte is folded into the
//! low end; normal definitions fold into the high end.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{
  params::{CHECK_INPUT, Definition},
  reflect::{top_bit, width_mask},
};

// ─────────────────────────────────────────────────────────────────────────────
// Single-byte processors
// ─────────────────────────────────────────────────────────────────────────────

/// Register contribution of one byte for a normal (MSB-first) definition.
///
/// Starts from a zero register and feeds `byte` MSB first: each input bit
/// flips the top bit, then the register shifts left, XORing `poly` when the
/// bit shifted out was set.
#[must_use]
pub const fn raw_normal_byte(bits: u8, poly: u64, byte: u8) -> u64 {
  let top = top_bit(bits);
  let mut crc = 0u64;
  let mut bit: u8 = 0x80;
  while bit != 0 {
    if byte & bit != 0 {
      crc ^= top;
    }
    crc = if crc & top != 0 { (crc << 1) ^ poly } else { crc << 1 };
    bit >>= 1;
  }
  crc & width_mask(bits)
}

/// Register contribution of one byte for a reflected (LSB-first) definition.
///
/// `poly_reflected` is the polynomial bit-reversed over the width.
#[must_use]
pub const fn raw_reflected_byte(poly_reflected: u64, byte: u8) -> u64 {
  let mut crc = byte as u64;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly_reflected } else { crc >> 1 };
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Message update
// ─────────────────────────────────────────────────────────────────────────────

/// Fold `data` into the raw register `crc`, eight shift steps per byte.
///
/// `poly_reflected` must be `def.poly_reflected()`; the engine computes it
/// once and passes it in. Returns the raw (unfinalized) register.
#[must_use]
pub const fn update(def: &Definition, poly_reflected: u64, mut crc: u64, data: &[u8]) -> u64 {
  let bits = def.bits();
  let poly = def.poly();
  let mask = def.mask();
  let mut i: usize = 0;
  while i < data.len() {
    let b = data[i] as u64;
    crc = if def.ref_in() {
      // For widths up to 8 the register fits in the low byte and `crc >> 8` is 0.
      (crc >> 8) ^ raw_reflected_byte(poly_reflected, ((crc ^ b) & 0xFF) as u8)
    } else if bits > 8 {
      let index = ((crc >> (bits - 8)) ^ b) & 0xFF;
      ((crc << 8) ^ raw_normal_byte(bits, poly, index as u8)) & mask
    } else {
      let index = ((crc << (8 - bits)) ^ b) & 0xFF;
      raw_normal_byte(bits, poly, index as u8)
    };
    i += 1;
  }
  crc
}

/// Complete checksum of `data` with the bit-serial processor.
#[must_use]
pub const fn checksum(def: &Definition, data: &[u8]) -> u64 {
  def.finalize(update(def, def.poly_reflected(), def.crc_init(), data))
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time known answers
// ─────────────────────────────────────────────────────────────────────────────

const _: () = {
  let iso_hdlc = Definition::published(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926);
  assert!(checksum(&iso_hdlc, CHECK_INPUT) == iso_hdlc.check());

  let bzip2 = Definition::published(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918);
  assert!(checksum(&bzip2, CHECK_INPUT) == bzip2.check());

  let xz = Definition::published(
    64,
    0x42F0_E1EB_A9EA_3693,
    u64::MAX,
    true,
    true,
    u64::MAX,
    0x995D_C9BB_DF19_39FA,
  );
  assert!(checksum(&xz, CHECK_INPUT) == xz.check());

  let gsm3 = Definition::published(3, 0x3, 0x0, false, false, 0x7, 0x4);
  assert!(checksum(&gsm3, CHECK_INPUT) == gsm3.check());

  let umts12 = Definition::published(12, 0x80F, 0x0, false, true, 0x0, 0xDAF);
  assert!(checksum(&umts12, CHECK_INPUT) == umts12.check());
};
