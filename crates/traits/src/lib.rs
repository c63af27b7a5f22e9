//! Core checksum traits for the CRC engine crates.
//!
//! This crate provides the traits every checksum implementation conforms to.
//! It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming state: `update`, `finalize`, `reset` |
//! | [`FixedChecksum`] | Compile-time parameter sets: `new`, one-shot `checksum`, I/O wrappers |
//!
//! With the `std` feature, [`io`] provides [`ChecksumReader`](io::ChecksumReader)
//! and [`ChecksumWriter`](io::ChecksumWriter).
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::{Checksum, FixedChecksum};
