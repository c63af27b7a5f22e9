//! File and stream checksums against on-disk fixtures.

use std::io::{Read, Write};

use crc_engine::{CHECK_INPUT, Checksum, Crc32, CrcError, FixedChecksum, Strategy, catalogue};
use tempfile::NamedTempFile;

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = Vec::with_capacity(len);
  let mut s = seed;
  for _ in 0..len {
    s ^= s << 13;
    s ^= s >> 7;
    s ^= s << 17;
    out.push((s >> 24) as u8);
  }
  out
}

fn fixture(contents: &[u8]) -> NamedTempFile {
  let mut file = NamedTempFile::new().unwrap();
  file.write_all(contents).unwrap();
  file.flush().unwrap();
  file
}

#[test]
fn check_input_file_yields_check_value() {
  let file = fixture(CHECK_INPUT);
  let mut buf = [0u8; 4096];
  for algorithm in catalogue::ALGORITHMS {
    for strategy in Strategy::ALL {
      let engine = algorithm.engine(strategy);
      let crc = engine.checksum_file(file.path(), &mut buf).unwrap();
      assert_eq!(crc, algorithm.definition().check(), "{}({strategy})", algorithm.name());
    }
  }
}

#[test]
fn large_file_matches_buffer_compute() {
  let data = gen_bytes(1 << 18, 0x9E37_79B9_7F4A_7C15);
  let file = fixture(&data);
  for algorithm in [&catalogue::CRC_32_ISO_HDLC, &catalogue::CRC_12_UMTS, &catalogue::CRC_64_WE] {
    for strategy in Strategy::ALL {
      let engine = algorithm.engine(strategy);
      let expected = engine.checksum(&data);
      for size in [7usize, 4096, 65536, 1 << 20] {
        let mut buf = vec![0u8; size];
        let crc = engine.checksum_file(file.path(), &mut buf).unwrap();
        assert_eq!(crc, expected, "{}({strategy}) buffer={size}", algorithm.name());
      }
    }
  }
}

#[test]
fn checksum_path_uses_configured_buffer() {
  let data = gen_bytes(10_000, 7);
  let file = fixture(&data);
  let engine = catalogue::CRC_16_XMODEM.engine(Strategy::Table4);
  assert_eq!(engine.checksum_path(file.path()).unwrap(), engine.checksum(&data));
}

#[test]
fn empty_file_is_finalized_init() {
  let file = fixture(&[]);
  let mut buf = [0u8; 64];
  for algorithm in catalogue::ALGORITHMS {
    let engine = algorithm.engine(Strategy::Table8);
    let def = algorithm.definition();
    let crc = engine.checksum_file(file.path(), &mut buf).unwrap();
    assert_eq!(crc, def.finalize(def.crc_init()), "{}", algorithm.name());
  }
}

#[test]
fn empty_buffer_is_rejected() {
  let file = fixture(CHECK_INPUT);
  let engine = catalogue::CRC_32_ISO_HDLC.engine(Strategy::Table8);
  let mut buf = [0u8; 0];
  assert!(matches!(
    engine.checksum_file(file.path(), &mut buf),
    Err(CrcError::EmptyParameters)
  ));
}

#[test]
fn missing_file_reports_io_error() {
  let dir = tempfile::tempdir().unwrap();
  let engine = catalogue::CRC_32_ISO_HDLC.engine(Strategy::Table8);
  let err = engine.checksum_path(dir.path().join("absent.bin")).unwrap_err();
  assert!(matches!(err, CrcError::Io(_)), "{err}");
}

#[test]
fn reader_adapter_over_file() {
  let data = gen_bytes(50_000, 42);
  let file = fixture(&data);

  let mut reader = Crc32::reader(std::fs::File::open(file.path()).unwrap());
  let mut contents = Vec::new();
  reader.read_to_end(&mut contents).unwrap();
  assert_eq!(contents, data);
  assert_eq!(reader.crc(), Crc32::checksum(&data));

  let engine = catalogue::CRC_24_OPENPGP.engine(Strategy::Bits);
  let mut reader = engine.reader(std::fs::File::open(file.path()).unwrap());
  std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
  assert_eq!(reader.crc(), engine.checksum(&data));
}

#[test]
fn writer_adapter_into_file() {
  let data = gen_bytes(20_000, 3);
  let file = NamedTempFile::new().unwrap();

  let mut writer = Crc32::writer(file.reopen().unwrap());
  for chunk in data.chunks(333) {
    writer.write_all(chunk).unwrap();
  }
  writer.flush().unwrap();
  let (_, crc) = writer.into_parts();
  assert_eq!(crc, Crc32::checksum(&data));

  let mut buf = [0u8; 512];
  let engine = catalogue::CRC_32_ISO_HDLC.engine(Strategy::Table4);
  assert_eq!(engine.checksum_file(file.path(), &mut buf).unwrap(), u64::from(crc));

  let mut digest = engine.digest();
  digest.update(&data);
  assert_eq!(digest.finalize(), u64::from(crc));
}
