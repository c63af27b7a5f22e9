//! Parametric CRC engine for any width from 1 to 64 bits.
//!
//! A CRC is described by a [`Definition`] (width, polynomial, initial value,
//! input/output reflection, final XOR and check value, following the Rocksoft
//! model used by the CRC RevEng catalogue). An [`Engine`] binds a definition
//! to one of three interchangeable [`Strategy`] variants that always produce
//! identical results:
//!
//! | Strategy | Table | Work per byte |
//! |----------|-------|---------------|
//! | [`Strategy::Table8`] | 256 × `u64` | one lookup |
//! | [`Strategy::Table4`] | 16 × `u64` | two lookups |
//! | [`Strategy::Bits`] | none | eight shift steps |
//!
//! Definitions come from the [`catalogue`] (106 named standard CRCs), from
//! raw parameters via [`Definition::new`], or as the typed presets
//! ([`Crc32`], [`Crc64Xz`], …) whose tables are built at compile time.
//!
//! # Example
//!
//! ```rust
//! use crc_engine::{Checksum, Definition, Engine, Strategy, catalogue};
//!
//! // Catalogue lookup.
//! let engine = catalogue::CRC_64_XZ.engine(Strategy::Table8);
//! assert_eq!(engine.checksum(b"123456789"), 0x995D_C9BB_DF19_39FA);
//!
//! // Raw parameters: a 12-bit CRC with reflected output only.
//! let def = Definition::new(12, 0x80F, 0, false, true, 0)?;
//! let engine = Engine::new(def, Strategy::Table4);
//! let mut digest = engine.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xDAF);
//! # Ok::<(), crc_engine::CrcError>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use;
//! file and reader helpers and env configuration need `std`.
//!
//! ```toml
//! [dependencies]
//! crc-engine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

pub mod catalogue;
pub mod config;
mod digest;
mod engine;
mod error;
#[cfg(feature = "std")]
pub mod io;
mod params;
mod presets;
mod reflect;
mod strategy;

pub use digest::Digest;
pub use engine::Engine;
pub use error::CrcError;
pub use params::{CHECK_INPUT, Definition};
pub use presets::{
  Crc8, Crc8Smbus, Crc16, Crc16Arc, Crc16IbmSdlc, Crc32, Crc32Bzip2, Crc32IsoHdlc, Crc32Iscsi, Crc64, Crc64Ecma182,
  Crc64We, Crc64Xz,
};
pub use reflect::{reflect, top_bit, width_mask};
pub use strategy::Strategy;
// Re-export traits for convenience
pub use traits::{Checksum, FixedChecksum};
