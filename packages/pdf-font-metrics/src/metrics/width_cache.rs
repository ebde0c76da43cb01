//! Precomputed advance widths for the first 256 character codes

use super::charmap;
use crate::constants::{FIRST_READABLE, PDF_UNITS_PER_EM, WIDTH_CACHE_SIZE};
use crate::engine::FontFace;

/// Advance in 1000 units per em
#[inline]
pub(super) fn normalize(advance: i32, units_per_em: u16) -> f64 {
    f64::from(advance) * PDF_UNITS_PER_EM / f64::from(units_per_em)
}

/// Fixed table of normalized widths indexed by raw character code
#[derive(Debug, Clone, PartialEq)]
pub struct WidthCache {
    widths: [f64; WIDTH_CACHE_SIZE],
}

impl WidthCache {
    /// Build the cache from `face`; without a face every entry is zero
    ///
    /// A code whose glyph fails to load repeats the width of the previous
    /// code instead of getting zero.
    pub(super) fn build<F: FontFace>(face: Option<&F>, symbol: bool) -> Self {
        let mut widths = [0.0; WIDTH_CACHE_SIZE];
        let Some(face) = face else {
            return Self { widths };
        };

        let units_per_em = face.units_per_em();
        for code in FIRST_READABLE..WIDTH_CACHE_SIZE {
            let index = charmap::symbol_code(code as u32, symbol);
            widths[code] = match face.load_char(index) {
                Ok(glyph) => normalize(glyph.hori_advance, units_per_em),
                Err(err) => {
                    log::trace!("Reusing previous width for code {:#x}: {}", index, err);
                    widths[code - 1]
                }
            };
        }

        Self { widths }
    }

    /// Cached width for `code`, if it lies inside the cache
    #[inline]
    pub fn get(&self, code: u32) -> Option<f64> {
        self.widths.get(code as usize).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.widths
    }

    #[inline]
    pub const fn len(&self) -> usize {
        WIDTH_CACHE_SIZE
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }
}
