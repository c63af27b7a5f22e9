//! Byte processors shared by the engine and the typed presets.
//!
//! - [`reference`]: const bit-serial processor, the source of truth
//! - [`tables`]: const-fn lookup table generation
//! - [`portable`]: table-driven update loops

pub mod portable;
pub mod reference;
pub mod tables;
