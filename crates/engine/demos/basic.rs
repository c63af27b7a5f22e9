//! Compute a few checksums three ways: preset type, catalogue engine and
//! raw parameters.
//!
//! Run: `cargo run -p crc-engine --example basic -- [FILE]`

use std::{env, error::Error};

use crc_engine::{Checksum, Crc32, Definition, Engine, FixedChecksum, Strategy, catalogue};

fn main() -> Result<(), Box<dyn Error>> {
  let data = b"The quick brown fox jumps over the lazy dog";

  println!("Crc32 preset:       {:08x}", Crc32::checksum(data));

  let xz = catalogue::CRC_64_XZ.engine(Strategy::Table4);
  println!("{}: {:016x}", xz.name().unwrap_or("?"), xz.checksum(data));

  let def = Definition::new(21, 0x10_2899, 0, false, false, 0)?;
  let engine = Engine::new(def, Strategy::Bits);
  let mut digest = engine.digest();
  for word in data.split(|&b| b == b' ') {
    digest.update(word);
  }
  println!("custom ({def}): {:06x}", digest.finalize());

  if let Some(path) = env::args().nth(1) {
    let crc = catalogue::engine("CRC-32/ISO-HDLC")?.checksum_path(&path)?;
    println!("{crc:08x}  {path}");
  }

  Ok(())
}
