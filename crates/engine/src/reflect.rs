//! Bit reflection and width helpers.
//!
//! Every register in this crate is a `u64` holding a CRC of `bits` width in
//! its low bits. These helpers derive the per-width constants from `bits`.

/// Reverse the low `num_bits` bits of `value`.
///
/// Bit `i` moves to bit `num_bits - 1 - i`. Bits at and above `num_bits` are
/// ignored, `num_bits == 0` yields 0, and widths above 64 are treated as 64.
///
/// ```rust
/// use crc_engine::reflect;
///
/// assert_eq!(reflect(0b0001, 4), 0b1000);
/// assert_eq!(reflect(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect(0xFF00, 8), 0);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u64, num_bits: u8) -> u64 {
  if num_bits == 0 {
    return 0;
  }
  let n = if num_bits > 64 { 64 } else { num_bits as u32 };
  value.reverse_bits() >> (64 - n)
}

/// Highest bit of a `bits`-wide register: `1 << (bits - 1)`.
///
/// `bits` is clamped to `1..=64`.
#[inline]
#[must_use]
pub const fn top_bit(bits: u8) -> u64 {
  1u64 << (clamp_width(bits) - 1)
}

/// All-ones mask for a `bits`-wide register.
///
/// Computed as `((top_bit - 1) << 1) | 1` so width 64 does not overflow.
#[inline]
#[must_use]
pub const fn width_mask(bits: u8) -> u64 {
  ((top_bit(bits) - 1) << 1) | 1
}

#[inline]
const fn clamp_width(bits: u8) -> u32 {
  if bits == 0 {
    1
  } else if bits > 64 {
    64
  } else {
    bits as u32
  }
}
