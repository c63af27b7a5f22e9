//! Differential fuzzing against the `crc` crate.
//!
//! Compares our catalogue engines against a well-established crate under
//! every strategy to catch any discrepancies.

#![no_main]

use crc::Crc;
use crc_engine::{Strategy, catalogue};
use libfuzzer_sys::fuzz_target;

const CRC8_SMBUS: Crc<u8> = Crc::<u8>::new(&crc::CRC_8_SMBUS);
const CRC12_UMTS: Crc<u16> = Crc::<u16>::new(&crc::CRC_12_UMTS);
const CRC16_IBM_SDLC: Crc<u16> = Crc::<u16>::new(&crc::CRC_16_IBM_SDLC);
const CRC32_ISCSI: Crc<u32> = Crc::<u32>::new(&crc::CRC_32_ISCSI);
const CRC64_XZ: Crc<u64> = Crc::<u64>::new(&crc::CRC_64_XZ);

fuzz_target!(|data: &[u8]| {
  check(&catalogue::CRC_8_SMBUS, data, u64::from(CRC8_SMBUS.checksum(data)));
  check(&catalogue::CRC_12_UMTS, data, u64::from(CRC12_UMTS.checksum(data)));
  check(&catalogue::CRC_16_IBM_SDLC, data, u64::from(CRC16_IBM_SDLC.checksum(data)));
  check(&catalogue::CRC_32_ISCSI, data, u64::from(CRC32_ISCSI.checksum(data)));
  check(&catalogue::CRC_64_XZ, data, CRC64_XZ.checksum(data));
});

fn check(algorithm: &catalogue::Algorithm, data: &[u8], reference: u64) {
  for strategy in Strategy::ALL {
    let ours = algorithm.engine(strategy).checksum(data);
    assert_eq!(
      ours,
      reference,
      "{}({strategy}) differential mismatch: ours={ours:#x}, reference={reference:#x}, len={}",
      algorithm.name(),
      data.len()
    );
  }
}
