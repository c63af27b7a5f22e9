//! Computation strategies.

use core::{fmt, str::FromStr};

use crate::CrcError;

/// How an [`Engine`](crate::Engine) turns bytes into register updates.
///
/// All three strategies produce bit-identical results for every definition;
/// they differ only in speed and table memory.
///
/// | Strategy | Table | Work per byte |
/// |----------|-------|---------------|
/// | [`Table8`](Self::Table8) | 256 × `u64` | one lookup |
/// | [`Table4`](Self::Table4) | 16 × `u64` | two nibble lookups |
/// | [`Bits`](Self::Bits) | none | eight shift steps |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
  /// Byte-at-a-time lookup table.
  #[default]
  Table8,
  /// Nibble-at-a-time lookup table.
  Table4,
  /// Bit-serial reference processor.
  Bits,
}

impl Strategy {
  /// Every strategy, in catalogue enumeration order.
  pub const ALL: [Self; 3] = [Self::Table8, Self::Table4, Self::Bits];

  /// Display label used in catalogue entry names (`"Table8"`).
  #[inline]
  #[must_use]
  pub const fn label(self) -> &'static str {
    match self {
      Self::Table8 => "Table8",
      Self::Table4 => "Table4",
      Self::Bits => "Bits",
    }
  }

  /// Lowercase identifier accepted by [`FromStr`] and the environment.
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Table8 => "table8",
      Self::Table4 => "table4",
      Self::Bits => "bits",
    }
  }

  /// Parse a strategy name, ASCII case-insensitively.
  ///
  /// Besides the canonical names this accepts `auto` and `table` for
  /// [`Table8`](Self::Table8), `nibble` for [`Table4`](Self::Table4) and
  /// `bitwise`/`reference` for [`Bits`](Self::Bits).
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("table8") || value.eq_ignore_ascii_case("table") || value.eq_ignore_ascii_case("auto")
    {
      return Some(Self::Table8);
    }
    if value.eq_ignore_ascii_case("table4") || value.eq_ignore_ascii_case("nibble") {
      return Some(Self::Table4);
    }
    if value.eq_ignore_ascii_case("bits")
      || value.eq_ignore_ascii_case("bitwise")
      || value.eq_ignore_ascii_case("reference")
    {
      return Some(Self::Bits);
    }
    None
  }
}

impl fmt::Display for Strategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Strategy {
  type Err = CrcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or(CrcError::UnknownStrategy)
  }
}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  #[test]
  fn labels_round_trip_through_parse() {
    for strategy in Strategy::ALL {
      assert_eq!(Strategy::parse(strategy.as_str()), Some(strategy));
      assert_eq!(Strategy::parse(strategy.label()), Some(strategy));
      assert_eq!(strategy.to_string(), strategy.label());
    }
  }

  #[test]
  fn aliases() {
    assert_eq!(Strategy::parse(" AUTO "), Some(Strategy::Table8));
    assert_eq!(Strategy::parse("Table"), Some(Strategy::Table8));
    assert_eq!(Strategy::parse("nibble"), Some(Strategy::Table4));
    assert_eq!(Strategy::parse("BitWise"), Some(Strategy::Bits));
    assert_eq!(Strategy::parse("reference"), Some(Strategy::Bits));
  }

  #[test]
  fn unknown_names_are_rejected() {
    assert_eq!(Strategy::parse(""), None);
    assert_eq!(Strategy::parse("table16"), None);
    assert!(matches!("simd".parse::<Strategy>(), Err(CrcError::UnknownStrategy)));
  }

  #[test]
  fn default_is_table8() {
    assert_eq!(Strategy::default(), Strategy::Table8);
    assert_eq!(Strategy::ALL.first(), Some(&Strategy::Table8));
  }
}
