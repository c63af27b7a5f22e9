//! Fuzz target for the streaming CRC API.
//!
//! Arbitrary parameters, strategy and update partition must agree with the
//! one-shot checksum and with the bitwise strategy, and resume must continue
//! a finished checksum.

#![no_main]

use arbitrary::Arbitrary;
use crc_engine::{Checksum, Definition, Engine, Strategy};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  bits: u8,
  poly: u64,
  init: u64,
  ref_in: bool,
  ref_out: bool,
  xor_out: u64,
  strategy: u8,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let bits = input.bits % 64 + 1;
  let Ok(def) = Definition::new(bits, input.poly, input.init, input.ref_in, input.ref_out, input.xor_out) else {
    return;
  };
  let strategy = Strategy::ALL[usize::from(input.strategy) % Strategy::ALL.len()];
  let engine = Engine::new(def, strategy);
  let data = &input.data;

  let expected = engine.checksum(data);
  assert_eq!(expected, Engine::new(def, Strategy::Bits).checksum(data), "{def} ({strategy})");
  assert!(expected <= def.mask(), "{def}: unmasked {expected:#x}");

  let mut digest = engine.digest();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    digest.update(&data[offset..end]);

    if chunk_idx % 3 == 2 {
      digest = engine.resume(digest.finalize());
    }

    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(digest.finalize(), expected, "{def} ({strategy}) streaming mismatch");
});
