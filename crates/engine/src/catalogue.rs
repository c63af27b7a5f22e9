//! Catalogue of named standard CRC definitions.
//!
//! 106 standard algorithms from the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/all.htm),
//! widths 3 to 64, ordered by width. Newer RevEng entries (for example
//! CRC-32/MEF or CRC-64/NVME) are not listed; build them from raw
//! parameters with [`Definition::new`]. Each entry is a named [`Algorithm`]
//! constant and usable with every [`Strategy`].
//!
//! # Example
//!
//! ```rust
//! use crc_engine::{Strategy, catalogue};
//!
//! let algorithm = catalogue::find("crc-32/iso-hdlc").unwrap();
//! assert_eq!(algorithm.engine(Strategy::Table4).checksum(b"123456789"), 0xCBF4_3926);
//! assert_eq!(catalogue::self_test().unwrap(), catalogue::ALGORITHMS.len() * 3);
//! ```

use core::{fmt, str::FromStr};

use log::{debug, error};

use crate::{CrcError, Engine, Strategy, config, params::Definition};

/// A named catalogue definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Algorithm {
  name: &'static str,
  definition: Definition,
}

impl Algorithm {
  #[must_use]
  pub const fn new(name: &'static str, definition: Definition) -> Self {
    Self { name, definition }
  }

  /// Catalogue name, e.g. `"CRC-32/ISO-HDLC"`.
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  #[inline]
  #[must_use]
  pub const fn definition(&self) -> &Definition {
    &self.definition
  }

  /// Build an engine for this algorithm.
  #[inline]
  #[must_use]
  pub const fn engine(&self, strategy: Strategy) -> Engine {
    Engine::for_algorithm(self, strategy)
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.name, self.definition)
  }
}

impl FromStr for Algorithm {
  type Err = CrcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    find(s).copied().ok_or(CrcError::UnknownAlgorithm)
  }
}

macro_rules! define_catalogue {
  (
    $(
      $(#[$meta:meta])*
      $ident:ident => $name:literal, $bits:literal, $poly:literal, $init:literal,
        $ref_in:literal, $ref_out:literal, $xor_out:literal, $check:literal;
    )*
  ) => {
    $(
      $(#[$meta])*
      #[doc = concat!("`", $name, "`")]
      pub const $ident: Algorithm = Algorithm::new(
        $name,
        Definition::published($bits, $poly, $init, $ref_in, $ref_out, $xor_out, $check),
      );
    )*

    /// Every catalogue algorithm, in registration order.
    pub const ALGORITHMS: &[Algorithm] = &[$($ident),*];
  };
}

define_catalogue! {
  // CRC-3
  CRC_3_GSM => "CRC-3/GSM", 3, 0x3, 0x0, false, false, 0x7, 0x4;
  CRC_3_ROHC => "CRC-3/ROHC", 3, 0x3, 0x7, true, true, 0x0, 0x6;

  // CRC-4
  CRC_4_G_704 => "CRC-4/G-704", 4, 0x3, 0x0, true, true, 0x0, 0x7;
  CRC_4_INTERLAKEN => "CRC-4/INTERLAKEN", 4, 0x3, 0xF, false, false, 0xF, 0xB;

  // CRC-5
  CRC_5_EPC_C1G2 => "CRC-5/EPC-C1G2", 5, 0x09, 0x09, false, false, 0x00, 0x00;
  CRC_5_G_704 => "CRC-5/G-704", 5, 0x15, 0x00, true, true, 0x00, 0x07;
  CRC_5_USB => "CRC-5/USB", 5, 0x05, 0x1F, true, true, 0x1F, 0x19;

  // CRC-6
  CRC_6_CDMA2000_A => "CRC-6/CDMA2000-A", 6, 0x27, 0x3F, false, false, 0x00, 0x0D;
  CRC_6_CDMA2000_B => "CRC-6/CDMA2000-B", 6, 0x07, 0x3F, false, false, 0x00, 0x3B;
  CRC_6_DARC => "CRC-6/DARC", 6, 0x19, 0x00, true, true, 0x00, 0x26;
  CRC_6_G_704 => "CRC-6/G-704", 6, 0x03, 0x00, true, true, 0x00, 0x06;
  CRC_6_GSM => "CRC-6/GSM", 6, 0x2F, 0x00, false, false, 0x3F, 0x13;

  // CRC-7
  CRC_7_MMC => "CRC-7/MMC", 7, 0x09, 0x00, false, false, 0x00, 0x75;
  CRC_7_ROHC => "CRC-7/ROHC", 7, 0x4F, 0x7F, true, true, 0x00, 0x53;
  CRC_7_UMTS => "CRC-7/UMTS", 7, 0x45, 0x00, false, false, 0x00, 0x61;

  // CRC-8
  CRC_8_AUTOSAR => "CRC-8/AUTOSAR", 8, 0x2F, 0xFF, false, false, 0xFF, 0xDF;
  CRC_8_BLUETOOTH => "CRC-8/BLUETOOTH", 8, 0xA7, 0x00, true, true, 0x00, 0x26;
  CRC_8_CDMA2000 => "CRC-8/CDMA2000", 8, 0x9B, 0xFF, false, false, 0x00, 0xDA;
  CRC_8_DARC => "CRC-8/DARC", 8, 0x39, 0x00, true, true, 0x00, 0x15;
  CRC_8_DVB_S2 => "CRC-8/DVB-S2", 8, 0xD5, 0x00, false, false, 0x00, 0xBC;
  CRC_8_GSM_A => "CRC-8/GSM-A", 8, 0x1D, 0x00, false, false, 0x00, 0x37;
  CRC_8_GSM_B => "CRC-8/GSM-B", 8, 0x49, 0x00, false, false, 0xFF, 0x94;
  CRC_8_I_432_1 => "CRC-8/I-432-1", 8, 0x07, 0x00, false, false, 0x55, 0xA1;
  CRC_8_I_CODE => "CRC-8/I-CODE", 8, 0x1D, 0xFD, false, false, 0x00, 0x7E;
  CRC_8_LTE => "CRC-8/LTE", 8, 0x9B, 0x00, false, false, 0x00, 0xEA;
  CRC_8_MAXIM_DOW => "CRC-8/MAXIM-DOW", 8, 0x31, 0x00, true, true, 0x00, 0xA1;
  CRC_8_MIFARE_MAD => "CRC-8/MIFARE-MAD", 8, 0x1D, 0xC7, false, false, 0x00, 0x99;
  CRC_8_NRSC_5 => "CRC-8/NRSC-5", 8, 0x31, 0xFF, false, false, 0x00, 0xF7;
  CRC_8_OPENSAFETY => "CRC-8/OPENSAFETY", 8, 0x2F, 0x00, false, false, 0x00, 0x3E;
  CRC_8_ROHC => "CRC-8/ROHC", 8, 0x07, 0xFF, true, true, 0x00, 0xD0;
  CRC_8_SAE_J1850 => "CRC-8/SAE-J1850", 8, 0x1D, 0xFF, false, false, 0xFF, 0x4B;
  CRC_8_SMBUS => "CRC-8/SMBUS", 8, 0x07, 0x00, false, false, 0x00, 0xF4;
  CRC_8_TECH_3250 => "CRC-8/TECH-3250", 8, 0x1D, 0xFF, true, true, 0x00, 0x97;
  CRC_8_WCDMA => "CRC-8/WCDMA", 8, 0x9B, 0x00, true, true, 0x00, 0x25;

  // CRC-10
  CRC_10_ATM => "CRC-10/ATM", 10, 0x233, 0x000, false, false, 0x000, 0x199;
  CRC_10_CDMA2000 => "CRC-10/CDMA2000", 10, 0x3D9, 0x3FF, false, false, 0x000, 0x233;
  CRC_10_GSM => "CRC-10/GSM", 10, 0x175, 0x000, false, false, 0x3FF, 0x12A;

  // CRC-11
  CRC_11_FLEXRAY => "CRC-11/FLEXRAY", 11, 0x385, 0x01A, false, false, 0x000, 0x5A3;
  CRC_11_UMTS => "CRC-11/UMTS", 11, 0x307, 0x000, false, false, 0x000, 0x061;

  // CRC-12
  CRC_12_CDMA2000 => "CRC-12/CDMA2000", 12, 0xF13, 0xFFF, false, false, 0x000, 0xD4D;
  CRC_12_DECT => "CRC-12/DECT", 12, 0x80F, 0x000, false, false, 0x000, 0xF5B;
  CRC_12_GSM => "CRC-12/GSM", 12, 0xD31, 0x000, false, false, 0xFFF, 0xB34;
  CRC_12_UMTS => "CRC-12/UMTS", 12, 0x80F, 0x000, false, true, 0x000, 0xDAF;

  // CRC-13
  CRC_13_BBC => "CRC-13/BBC", 13, 0x1CF5, 0x0000, false, false, 0x0000, 0x04FA;

  // CRC-14
  CRC_14_DARC => "CRC-14/DARC", 14, 0x0805, 0x0000, true, true, 0x0000, 0x082D;
  CRC_14_GSM => "CRC-14/GSM", 14, 0x202D, 0x0000, false, false, 0x3FFF, 0x30AE;

  // CRC-15
  CRC_15_CAN => "CRC-15/CAN", 15, 0x4599, 0x0000, false, false, 0x0000, 0x059E;
  CRC_15_MPT1327 => "CRC-15/MPT1327", 15, 0x6815, 0x0000, false, false, 0x0001, 0x2566;

  // CRC-16
  CRC_16_ARC => "CRC-16/ARC", 16, 0x8005, 0x0000, true, true, 0x0000, 0xBB3D;
  CRC_16_CDMA2000 => "CRC-16/CDMA2000", 16, 0xC867, 0xFFFF, false, false, 0x0000, 0x4C06;
  CRC_16_CMS => "CRC-16/CMS", 16, 0x8005, 0xFFFF, false, false, 0x0000, 0xAEE7;
  CRC_16_DDS_110 => "CRC-16/DDS-110", 16, 0x8005, 0x800D, false, false, 0x0000, 0x9ECF;
  CRC_16_DECT_R => "CRC-16/DECT-R", 16, 0x0589, 0x0000, false, false, 0x0001, 0x007E;
  CRC_16_DECT_X => "CRC-16/DECT-X", 16, 0x0589, 0x0000, false, false, 0x0000, 0x007F;
  CRC_16_DNP => "CRC-16/DNP", 16, 0x3D65, 0x0000, true, true, 0xFFFF, 0xEA82;
  CRC_16_EN_13757 => "CRC-16/EN-13757", 16, 0x3D65, 0x0000, false, false, 0xFFFF, 0xC2B7;
  CRC_16_GENIBUS => "CRC-16/GENIBUS", 16, 0x1021, 0xFFFF, false, false, 0xFFFF, 0xD64E;
  CRC_16_GSM => "CRC-16/GSM", 16, 0x1021, 0x0000, false, false, 0xFFFF, 0xCE3C;
  CRC_16_IBM_3740 => "CRC-16/IBM-3740", 16, 0x1021, 0xFFFF, false, false, 0x0000, 0x29B1;
  CRC_16_IBM_SDLC => "CRC-16/IBM-SDLC", 16, 0x1021, 0xFFFF, true, true, 0xFFFF, 0x906E;
  CRC_16_ISO_IEC_14443_3_A => "CRC-16/ISO-IEC-14443-3-A", 16, 0x1021, 0xC6C6, true, true, 0x0000, 0xBF05;
  CRC_16_KERMIT => "CRC-16/KERMIT", 16, 0x1021, 0x0000, true, true, 0x0000, 0x2189;
  CRC_16_LJ1200 => "CRC-16/LJ1200", 16, 0x6F63, 0x0000, false, false, 0x0000, 0xBDF4;
  CRC_16_MAXIM_DOW => "CRC-16/MAXIM-DOW", 16, 0x8005, 0x0000, true, true, 0xFFFF, 0x44C2;
  CRC_16_MCRF4XX => "CRC-16/MCRF4XX", 16, 0x1021, 0xFFFF, true, true, 0x0000, 0x6F91;
  CRC_16_MODBUS => "CRC-16/MODBUS", 16, 0x8005, 0xFFFF, true, true, 0x0000, 0x4B37;
  CRC_16_NRSC_5 => "CRC-16/NRSC-5", 16, 0x080B, 0xFFFF, true, true, 0x0000, 0xA066;
  CRC_16_OPENSAFETY_A => "CRC-16/OPENSAFETY-A", 16, 0x5935, 0x0000, false, false, 0x0000, 0x5D38;
  CRC_16_OPENSAFETY_B => "CRC-16/OPENSAFETY-B", 16, 0x755B, 0x0000, false, false, 0x0000, 0x20FE;
  CRC_16_PROFIBUS => "CRC-16/PROFIBUS", 16, 0x1DCF, 0xFFFF, false, false, 0xFFFF, 0xA819;
  CRC_16_RIELLO => "CRC-16/RIELLO", 16, 0x1021, 0xB2AA, true, true, 0x0000, 0x63D0;
  CRC_16_SPI_FUJITSU => "CRC-16/SPI-FUJITSU", 16, 0x1021, 0x1D0F, false, false, 0x0000, 0xE5CC;
  CRC_16_T10_DIF => "CRC-16/T10-DIF", 16, 0x8BB7, 0x0000, false, false, 0x0000, 0xD0DB;
  CRC_16_TELEDISK => "CRC-16/TELEDISK", 16, 0xA097, 0x0000, false, false, 0x0000, 0x0FB3;
  CRC_16_TMS37157 => "CRC-16/TMS37157", 16, 0x1021, 0x89EC, true, true, 0x0000, 0x26B1;
  CRC_16_UMTS => "CRC-16/UMTS", 16, 0x8005, 0x0000, false, false, 0x0000, 0xFEE8;
  CRC_16_USB => "CRC-16/USB", 16, 0x8005, 0xFFFF, true, true, 0xFFFF, 0xB4C8;
  CRC_16_XMODEM => "CRC-16/XMODEM", 16, 0x1021, 0x0000, false, false, 0x0000, 0x31C3;

  // CRC-17
  CRC_17_CAN_FD => "CRC-17/CAN-FD", 17, 0x1_685B, 0x0_0000, false, false, 0x0_0000, 0x0_4F03;

  // CRC-21
  CRC_21_CAN_FD => "CRC-21/CAN-FD", 21, 0x10_2899, 0x00_0000, false, false, 0x00_0000, 0x0E_D841;

  // CRC-24
  CRC_24_BLE => "CRC-24/BLE", 24, 0x00_065B, 0x55_5555, true, true, 0x00_0000, 0xC2_5A56;
  CRC_24_FLEXRAY_A => "CRC-24/FLEXRAY-A", 24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0x00_0000, 0x79_79BD;
  CRC_24_FLEXRAY_B => "CRC-24/FLEXRAY-B", 24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0x00_0000, 0x1F_23B8;
  CRC_24_INTERLAKEN => "CRC-24/INTERLAKEN", 24, 0x32_8B63, 0xFF_FFFF, false, false, 0xFF_FFFF, 0xB4_F3E6;
  CRC_24_LTE_A => "CRC-24/LTE-A", 24, 0x86_4CFB, 0x00_0000, false, false, 0x00_0000, 0xCD_E703;
  CRC_24_LTE_B => "CRC-24/LTE-B", 24, 0x80_0063, 0x00_0000, false, false, 0x00_0000, 0x23_EF52;
  CRC_24_OPENPGP => "CRC-24/OPENPGP", 24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000, 0x21_CF02;
  CRC_24_OS_9 => "CRC-24/OS-9", 24, 0x80_0063, 0xFF_FFFF, false, false, 0xFF_FFFF, 0x20_0FA5;

  // CRC-30
  CRC_30_CDMA => "CRC-30/CDMA", 30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF, 0x04C3_4ABF;

  // CRC-31
  CRC_31_PHILIPS => "CRC-31/PHILIPS", 31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF, 0x0CE9_E46C;

  // CRC-32
  CRC_32_AIXM => "CRC-32/AIXM", 32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, 0x3010_BF7F;
  CRC_32_AUTOSAR => "CRC-32/AUTOSAR", 32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x1697_D06A;
  CRC_32_BASE91_D => "CRC-32/BASE91-D", 32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0x8731_5576;
  CRC_32_BZIP2 => "CRC-32/BZIP2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, 0xFC89_1918;
  CRC_32_CD_ROM_EDC => "CRC-32/CD-ROM-EDC", 32, 0x8001_801B, 0x0000_0000, true, true, 0x0000_0000, 0x6EC2_EDC4;
  CRC_32_CKSUM => "CRC-32/CKSUM", 32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, 0x765E_7680;
  CRC_32_ISCSI => "CRC-32/ISCSI", 32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xE306_9283;
  CRC_32_ISO_HDLC => "CRC-32/ISO-HDLC", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, 0xCBF4_3926;
  CRC_32_JAMCRC => "CRC-32/JAMCRC", 32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, 0x340B_C6D9;
  CRC_32_MPEG_2 => "CRC-32/MPEG-2", 32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, 0x0376_E6E7;
  CRC_32_XFER => "CRC-32/XFER", 32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, 0xBD0B_E338;

  // CRC-40
  CRC_40_GSM => "CRC-40/GSM", 40, 0x00_0482_0009, 0x00_0000_0000, false, false, 0xFF_FFFF_FFFF, 0xD4_164F_C646;

  // CRC-64
  CRC_64_ECMA_182 => "CRC-64/ECMA-182", 64, 0x42F0_E1EB_A9EA_3693, 0x0000_0000_0000_0000, false, false, 0x0000_0000_0000_0000, 0x6C40_DF5F_0B49_7347;
  CRC_64_GO_ISO => "CRC-64/GO-ISO", 64, 0x0000_0000_0000_001B, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0xB909_56C7_75A4_1001;
  CRC_64_WE => "CRC-64/WE", 64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, false, false, 0xFFFF_FFFF_FFFF_FFFF, 0x62EC_59E3_F1A4_F00A;
  CRC_64_XZ => "CRC-64/XZ", 64, 0x42F0_E1EB_A9EA_3693, 0xFFFF_FFFF_FFFF_FFFF, true, true, 0xFFFF_FFFF_FFFF_FFFF, 0x995D_C9BB_DF19_39FA;
}

// Every published check value holds under the bit-serial reference.
// SAFETY: `i` is bounded by `ALGORITHMS.len()`.
#[allow(clippy::indexing_slicing)]
const _: () = {
  let mut i = 0;
  while i < ALGORITHMS.len() {
    let def = &ALGORITHMS[i].definition;
    assert!(crate::common::reference::checksum(def, crate::params::CHECK_INPUT) == def.check());
    i += 1;
  }
};

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Find an algorithm by name, ASCII case-insensitively.
#[must_use]
pub fn find(name: &str) -> Option<&'static Algorithm> {
  let name = name.trim();
  ALGORITHMS.iter().find(|a| a.name.eq_ignore_ascii_case(name))
}

/// Engine for the named algorithm using the configured default strategy.
///
/// # Errors
///
/// [`CrcError::UnknownAlgorithm`] when no entry matches `name`.
pub fn engine(name: &str) -> Result<Engine, CrcError> {
  let algorithm = find(name).ok_or(CrcError::UnknownAlgorithm)?;
  let strategy = config::get().strategy;
  debug!("resolved {} with strategy {}", algorithm.name, strategy);
  Ok(algorithm.engine(strategy))
}

// ─────────────────────────────────────────────────────────────────────────────
// Enumeration
// ─────────────────────────────────────────────────────────────────────────────

/// An algorithm paired with one strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
  algorithm: &'static Algorithm,
  strategy: Strategy,
}

impl Entry {
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> &'static Algorithm {
    self.algorithm
  }

  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.strategy
  }

  #[inline]
  #[must_use]
  pub const fn engine(&self) -> Engine {
    self.algorithm.engine(self.strategy)
  }
}

/// Displays as `"<name>(<strategy>)"`, e.g. `CRC-64/XZ(Table8)`.
impl fmt::Display for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({})", self.algorithm.name, self.strategy.label())
  }
}

/// Every algorithm with every strategy: algorithms in registration order,
/// strategies in [`Strategy::ALL`] order.
pub fn entries() -> impl Iterator<Item = Entry> + Clone {
  ALGORITHMS
    .iter()
    .flat_map(|algorithm| Strategy::ALL.into_iter().map(move |strategy| Entry { algorithm, strategy }))
}

/// Number of distinct strategies each algorithm is offered with.
#[inline]
#[must_use]
pub const fn strategy_count() -> usize {
  Strategy::ALL.len()
}

/// Verify every entry against its published check value.
///
/// Returns the number of entries checked.
///
/// # Errors
///
/// The first [`CrcError::CheckMismatch`] encountered.
pub fn self_test() -> Result<usize, CrcError> {
  let mut checked = 0usize;
  for entry in entries() {
    if let Err(err) = entry.engine().verify() {
      error!("self-test failed: {err}");
      return Err(err);
    }
    checked += 1;
  }
  debug!("self-test passed for {checked} entries");
  Ok(checked)
}

#[cfg(test)]
mod tests {
  use std::{string::ToString, vec::Vec};

  use super::*;

  #[test]
  fn catalogue_size_and_order() {
    assert_eq!(ALGORITHMS.len(), 106);
    assert_eq!(ALGORITHMS.first().map(Algorithm::name), Some("CRC-3/GSM"));
    assert_eq!(ALGORITHMS.last().map(Algorithm::name), Some("CRC-64/XZ"));
    let widths: Vec<u8> = ALGORITHMS.iter().map(|a| a.definition().bits()).collect();
    assert!(widths.windows(2).all(|w| w[0] <= w[1]));
  }

  #[test]
  fn names_are_unique() {
    for (i, a) in ALGORITHMS.iter().enumerate() {
      for b in &ALGORITHMS[i + 1..] {
        assert!(!a.name().eq_ignore_ascii_case(b.name()), "{}", a.name());
      }
    }
  }

  #[test]
  fn find_is_case_insensitive() {
    assert_eq!(find("CRC-32/ISO-HDLC"), Some(&CRC_32_ISO_HDLC));
    assert_eq!(find("crc-64/xz"), Some(&CRC_64_XZ));
    assert_eq!(find(" crc-16/arc "), Some(&CRC_16_ARC));
    assert_eq!(find("CRC-32"), None);
    assert!(matches!("CRC-99/NOPE".parse::<Algorithm>(), Err(CrcError::UnknownAlgorithm)));
    assert_eq!("crc-32/bzip2".parse::<Algorithm>().unwrap(), CRC_32_BZIP2);
  }

  #[test]
  fn entries_enumerate_strategies_inner() {
    let names: Vec<_> = entries().take(4).map(|e| e.to_string()).collect();
    assert_eq!(
      names,
      ["CRC-3/GSM(Table8)", "CRC-3/GSM(Table4)", "CRC-3/GSM(Bits)", "CRC-3/ROHC(Table8)"]
    );
    assert_eq!(entries().count(), ALGORITHMS.len() * strategy_count());
    assert_eq!(strategy_count(), 3);
  }

  #[test]
  fn self_test_passes() {
    assert_eq!(self_test().unwrap(), 318);
  }

  #[test]
  fn engine_by_name() {
    let engine = engine("CRC-32/ISO-HDLC").unwrap();
    assert_eq!(engine.name(), Some("CRC-32/ISO-HDLC"));
    assert_eq!(engine.checksum(b"123456789"), 0xCBF4_3926);
    assert!(matches!(super::engine("nope"), Err(CrcError::UnknownAlgorithm)));
  }

  #[test]
  fn display_forms() {
    assert_eq!(
      CRC_16_ARC.to_string(),
      "CRC-16/ARC: width=16 poly=0x8005 init=0x0000 refin=true refout=true xorout=0x0000 check=0xbb3d"
    );
  }
}
