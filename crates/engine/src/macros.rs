//! Internal macros for typed CRC presets.
//!
//! Every preset shares the same shape: a raw `u64` register driven by a
//! `static` [`Engine`](crate::Engine) whose table is built at compile time.
//! Only the catalogue entry and the output container differ.

/// Generate a typed CRC preset with all trait implementations.
///
/// This macro creates:
/// - The struct definition with `state: u64`
/// - `ALGORITHM`, `engine()` and `resume()`
/// - `Checksum`, `FixedChecksum` and `Default` implementations
/// - Compile-time checks that the output type holds the width and that the
///   definition reproduces its check value
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc32IsoHdlc`)
/// - `$algorithm`: The catalogue constant (e.g., `crate::catalogue::CRC_32_ISO_HDLC`)
/// - `$out`: The narrowest unsigned integer holding the width
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      algorithm: $algorithm:path,
      output: $out:ty,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug)]
    $vis struct $name {
      state: u64,
    }

    impl $name {
      /// Catalogue entry computed by this type.
      pub const ALGORITHM: &'static $crate::catalogue::Algorithm = &$algorithm;

      /// The compile-time engine backing this type (8-bit table).
      #[inline]
      #[must_use]
      pub fn engine() -> &'static $crate::Engine {
        static ENGINE: $crate::Engine = $crate::Engine::for_algorithm(&$algorithm, $crate::Strategy::Table8);
        &ENGINE
      }

      /// Create a hasher to resume from a previous CRC value.
      #[inline]
      #[must_use]
      pub const fn resume(crc: $out) -> Self {
        Self {
          state: $algorithm.definition().unfinalize(crc as u64),
        }
      }
    }

    const _: () = {
      let def = *$algorithm.definition();
      assert!(def.bits() as u32 <= <$out>::BITS);
      assert!($crate::common::reference::checksum(&def, $crate::CHECK_INPUT) == def.check());
    };

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::FixedChecksum>::new()
      }
    }

    impl $crate::Checksum for $name {
      type Output = $out;

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = Self::engine().update_raw(self.state, data);
      }

      #[inline]
      fn finalize(&self) -> $out {
        // The engine masks to the width, which fits `$out`.
        Self::engine().finalize_raw(self.state) as $out
      }

      #[inline]
      fn reset(&mut self) {
        self.state = $algorithm.definition().crc_init();
      }
    }

    impl $crate::FixedChecksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<$out>();

      #[inline]
      fn new() -> Self {
        Self {
          state: $algorithm.definition().crc_init(),
        }
      }
    }
  };
}
