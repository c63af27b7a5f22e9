//! Const-fn lookup table generation for every CRC width.
//!
//! Tables are computed with `const fn` from the bit-serial processors in
//! [`reference`](super::reference), so an engine built in a `static` carries
//! its table in the binary.
//!
//! | Strategy | Entries | Entry `k` holds |
//! |----------|---------|-----------------|
//! | 8-bit | 256 | contribution of byte `k` |
//! | 4-bit, reflected | 16 | contribution of byte `k << 4` |
//! | 4-bit, normal | 16 | contribution of byte `k` |
//!
//! The 4-bit layouts differ because a reflected register consumes the low
//! nibble first while a normal register consumes the high nibble first.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..16).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use super::reference::{raw_normal_byte, raw_reflected_byte};
use crate::params::Definition;

/// Generate the 256-entry table for byte-at-a-time updates.
#[must_use]
pub const fn table8(def: &Definition) -> [u64; 256] {
  let mut table = [0u64; 256];
  let poly_reflected = def.poly_reflected();
  let mut i = 0usize;
  while i < 256 {
    table[i] = if def.ref_in() {
      raw_reflected_byte(poly_reflected, i as u8)
    } else {
      raw_normal_byte(def.bits(), def.poly(), i as u8)
    };
    i += 1;
  }
  table
}

/// Generate the 16-entry table for nibble-at-a-time updates.
#[must_use]
pub const fn table4(def: &Definition) -> [u64; 16] {
  let mut table = [0u64; 16];
  let poly_reflected = def.poly_reflected();
  let mut i = 0usize;
  while i < 16 {
    table[i] = if def.ref_in() {
      raw_reflected_byte(poly_reflected, (i << 4) as u8)
    } else {
      raw_normal_byte(def.bits(), def.poly(), i as u8)
    };
    i += 1;
  }
  table
}
