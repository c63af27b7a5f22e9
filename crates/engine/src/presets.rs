//! Typed CRC presets with compile-time tables.
//!
//! | Type | Algorithm | Output |
//! |------|-----------|--------|
//! | [`Crc8Smbus`] | CRC-8/SMBUS | `u8` |
//! | [`Crc16Arc`] | CRC-16/ARC | `u16` |
//! | [`Crc16IbmSdlc`] | CRC-16/IBM-SDLC (X.25) | `u16` |
//! | [`Crc32IsoHdlc`] | CRC-32/ISO-HDLC (zip, PNG, Ethernet) | `u32` |
//! | [`Crc32Iscsi`] | CRC-32/ISCSI (Castagnoli) | `u32` |
//! | [`Crc32Bzip2`] | CRC-32/BZIP2 | `u32` |
//! | [`Crc64Xz`] | CRC-64/XZ | `u64` |
//! | [`Crc64Ecma182`] | CRC-64/ECMA-182 | `u64` |
//! | [`Crc64We`] | CRC-64/WE | `u64` |
//!
//! [`Crc8`], [`Crc16`], [`Crc32`] and [`Crc64`] alias the default algorithm
//! of each width.
//!
//! # Example
//!
//! ```rust
//! use crc_engine::{Checksum, Crc32, FixedChecksum};
//!
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//!
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//! ```

define_crc_type! {
  /// CRC-8/SMBUS: polynomial 0x07, no reflection.
  pub struct Crc8Smbus {
    algorithm: crate::catalogue::CRC_8_SMBUS,
    output: u8,
  }
}

define_crc_type! {
  /// CRC-16/ARC (also known as CRC-16/IBM, CRC-16/LHA).
  pub struct Crc16Arc {
    algorithm: crate::catalogue::CRC_16_ARC,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-16/IBM-SDLC (X.25, HDLC, ISO-HDLC framing).
  pub struct Crc16IbmSdlc {
    algorithm: crate::catalogue::CRC_16_IBM_SDLC,
    output: u16,
  }
}

define_crc_type! {
  /// CRC-32/ISO-HDLC: Ethernet, gzip, zip, PNG.
  ///
  /// ```rust
  /// use crc_engine::{Crc32IsoHdlc, FixedChecksum};
  ///
  /// assert_eq!(Crc32IsoHdlc::checksum(b"123456789"), 0xCBF4_3926);
  /// ```
  pub struct Crc32IsoHdlc {
    algorithm: crate::catalogue::CRC_32_ISO_HDLC,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/ISCSI (Castagnoli): iSCSI, SCTP, ext4, Btrfs.
  pub struct Crc32Iscsi {
    algorithm: crate::catalogue::CRC_32_ISCSI,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-32/BZIP2: the MSB-first twin of CRC-32/ISO-HDLC.
  pub struct Crc32Bzip2 {
    algorithm: crate::catalogue::CRC_32_BZIP2,
    output: u32,
  }
}

define_crc_type! {
  /// CRC-64/XZ: XZ Utils, 7-Zip.
  pub struct Crc64Xz {
    algorithm: crate::catalogue::CRC_64_XZ,
    output: u64,
  }
}

define_crc_type! {
  /// CRC-64/ECMA-182.
  pub struct Crc64Ecma182 {
    algorithm: crate::catalogue::CRC_64_ECMA_182,
    output: u64,
  }
}

define_crc_type! {
  /// CRC-64/WE.
  pub struct Crc64We {
    algorithm: crate::catalogue::CRC_64_WE,
    output: u64,
  }
}

/// Default 8-bit CRC.
pub type Crc8 = Crc8Smbus;
/// Default 16-bit CRC.
pub type Crc16 = Crc16Arc;
/// Default 32-bit CRC.
pub type Crc32 = Crc32IsoHdlc;
/// Default 64-bit CRC.
pub type Crc64 = Crc64Xz;

#[cfg(test)]
mod tests {
  use traits::{Checksum, FixedChecksum};

  use super::*;
  use crate::{Strategy, params::CHECK_INPUT};

  #[test]
  fn check_values() {
    assert_eq!(Crc8Smbus::checksum(CHECK_INPUT), 0xF4);
    assert_eq!(Crc16Arc::checksum(CHECK_INPUT), 0xBB3D);
    assert_eq!(Crc16IbmSdlc::checksum(CHECK_INPUT), 0x906E);
    assert_eq!(Crc32IsoHdlc::checksum(CHECK_INPUT), 0xCBF4_3926);
    assert_eq!(Crc32Iscsi::checksum(CHECK_INPUT), 0xE306_9283);
    assert_eq!(Crc32Bzip2::checksum(CHECK_INPUT), 0xFC89_1918);
    assert_eq!(Crc64Xz::checksum(CHECK_INPUT), 0x995D_C9BB_DF19_39FA);
    assert_eq!(Crc64Ecma182::checksum(CHECK_INPUT), 0x6C40_DF5F_0B49_7347);
    assert_eq!(Crc64We::checksum(CHECK_INPUT), 0x62EC_59E3_F1A4_F00A);
  }

  #[test]
  fn aliases_and_sizes() {
    assert_eq!(Crc8::ALGORITHM.name(), "CRC-8/SMBUS");
    assert_eq!(Crc16::ALGORITHM.name(), "CRC-16/ARC");
    assert_eq!(Crc32::ALGORITHM.name(), "CRC-32/ISO-HDLC");
    assert_eq!(Crc64::ALGORITHM.name(), "CRC-64/XZ");
    assert_eq!(Crc8::OUTPUT_SIZE, 1);
    assert_eq!(Crc16::OUTPUT_SIZE, 2);
    assert_eq!(Crc32::OUTPUT_SIZE, 4);
    assert_eq!(Crc64::OUTPUT_SIZE, 8);
  }

  #[test]
  fn static_engine_uses_table8() {
    assert_eq!(Crc32Iscsi::engine().strategy(), Strategy::Table8);
    assert_eq!(Crc32Iscsi::engine().name(), Some("CRC-32/ISCSI"));
  }

  #[test]
  fn streaming_resume_and_reset() {
    let (a, b) = CHECK_INPUT.split_at(5);

    let mut hasher = Crc16IbmSdlc::new();
    hasher.update(a);
    hasher.update(b);
    assert_eq!(hasher.finalize(), 0x906E);

    let mut resumed = Crc16IbmSdlc::resume(Crc16IbmSdlc::checksum(a));
    resumed.update(b);
    assert_eq!(resumed.finalize(), 0x906E);

    hasher.reset();
    assert_eq!(hasher.finalize(), Crc16IbmSdlc::checksum(&[]));
    assert_eq!(Crc16IbmSdlc::default().finalize(), hasher.finalize());
  }

  #[test]
  fn vectored_one_shot() {
    assert_eq!(Crc32Bzip2::checksum_vectored(&[b"1234", b"56789"]), 0xFC89_1918);
  }
}
