//! Table-driven update loops for every CRC width.
//!
//! Each loop folds input into a raw register using a table from
//! [`tables`](super::tables). Three register layouts are handled:
//!
//! | Layout | Condition | Index source |
//! |--------|-----------|--------------|
//! | reflected | `ref_in` | low bits of the register |
//! | normal, wide | `bits > N` | top `N` bits of the register |
//! | normal, narrow | `bits <= N` | whole register, left-aligned to `N` bits |
//!
//! where `N` is the table's index width (8 or 4).

// SAFETY: All array indexing in this module uses masked indices:
// - `& 0xFF` for 256-entry tables
// - `& 0xF` for 16-entry tables
// Clippy cannot prove this, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::params::Definition;

/// Update a raw register one byte at a time with a 256-entry table.
#[inline]
#[must_use]
pub fn update_table8(def: &Definition, table: &[u64; 256], mut crc: u64, data: &[u8]) -> u64 {
  let bits = def.bits();
  if def.ref_in() {
    for &b in data {
      crc = (crc >> 8) ^ table[((crc ^ u64::from(b)) & 0xFF) as usize];
    }
  } else if bits > 8 {
    let shift = bits - 8;
    let mask = def.mask();
    for &b in data {
      crc = ((crc << 8) ^ table[(((crc >> shift) ^ u64::from(b)) & 0xFF) as usize]) & mask;
    }
  } else {
    let shift = 8 - bits;
    for &b in data {
      crc = table[(((crc << shift) ^ u64::from(b)) & 0xFF) as usize];
    }
  }
  crc
}

/// Update a raw register one nibble at a time with a 16-entry table.
///
/// Reflected registers take the low nibble of each byte first, normal
/// registers the high nibble.
#[inline]
#[must_use]
pub fn update_table4(def: &Definition, table: &[u64; 16], mut crc: u64, data: &[u8]) -> u64 {
  let bits = def.bits();
  if def.ref_in() {
    // For widths up to 4 the register fits in one nibble and `crc >> 4` is 0.
    for &b in data {
      let b = u64::from(b);
      crc = table[((crc ^ b) & 0xF) as usize] ^ (crc >> 4);
      crc = table[((crc ^ (b >> 4)) & 0xF) as usize] ^ (crc >> 4);
    }
  } else if bits > 4 {
    let shift = bits - 4;
    let mask = def.mask();
    for &b in data {
      let b = u64::from(b);
      crc = (table[(((crc >> shift) ^ (b >> 4)) & 0xF) as usize] ^ (crc << 4)) & mask;
      crc = (table[(((crc >> shift) ^ b) & 0xF) as usize] ^ (crc << 4)) & mask;
    }
  } else {
    let shift = 4 - bits;
    for &b in data {
      let b = u64::from(b);
      crc = table[(((crc << shift) ^ (b >> 4)) & 0xF) as usize];
      crc = table[(((crc << shift) ^ b) & 0xF) as usize];
    }
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    common::{reference, tables},
    params::CHECK_INPUT,
  };

  fn all_strategies(def: &Definition, data: &[u8]) -> [u64; 3] {
    let init = def.crc_init();
    [
      def.finalize(update_table8(def, &tables::table8(def), init, data)),
      def.finalize(update_table4(def, &tables::table4(def), init, data)),
      def.finalize(reference::update(def, def.poly_reflected(), init, data)),
    ]
  }

  #[test]
  fn layouts_agree_on_check_input() {
    let defs = [
      Definition::published(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926),
      Definition::published(32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918),
      Definition::published(8, 0x07, 0, false, false, 0, 0xF4),
      Definition::published(6, 0x27, 0x3F, false, false, 0, 0x0D),
      Definition::published(3, 0x3, 0x7, true, true, 0, 0x6),
      Definition::published(4, 0x3, 0xF, false, false, 0xF, 0xB),
      Definition::published(12, 0x80F, 0, false, true, 0, 0xDAF),
    ];
    for def in &defs {
      assert_eq!(all_strategies(def, CHECK_INPUT), [def.check(); 3], "{def}");
    }
  }

  #[test]
  fn empty_input_leaves_register_untouched() {
    let def = Definition::published(5, 0x09, 0x09, false, false, 0, 0);
    assert_eq!(update_table8(&def, &tables::table8(&def), 0x09, &[]), 0x09);
    assert_eq!(update_table4(&def, &tables::table4(&def), 0x09, &[]), 0x09);
  }
}
