//! Glyph width queries
//!
//! Codes inside the width cache are answered from it; everything else goes
//! to the engine. Lookup misses degrade to a zero width.

use super::core::FontMetrics;
use super::width_cache::{WidthCache, normalize};
use crate::engine::{FontFace, GlyphId};
use crate::FontResult;

impl<F: FontFace> FontMetrics<F> {
    /// The precomputed widths of codes `0..256`
    #[inline]
    pub fn width_cache(&self) -> &WidthCache {
        &self.widths
    }

    /// Normalized widths for every code in `first..=last`
    ///
    /// Codes past the cache are loaded by character code through the active
    /// map, without the symbol offset. An empty range yields an empty vector.
    pub fn width_array(&self, first: u32, last: u32) -> FontResult<Vec<f64>> {
        let face = self.face.face("get width array")?;

        Ok((first..=last)
            .map(|code| match self.widths.get(code) {
                Some(width) => width,
                None => self.load_char_width(face, code).unwrap_or(0.0),
            })
            .collect())
    }

    /// Normalized width of a glyph by index, 0.0 if it cannot be loaded
    pub fn glyph_width(&self, glyph_id: GlyphId) -> FontResult<f64> {
        let face = self.face.face("get glyph width")?;

        Ok(match face.load_glyph(glyph_id) {
            Ok(glyph) => normalize(glyph.hori_advance, self.units_per_em),
            Err(err) => {
                log::trace!("Glyph {} has no width: {}", glyph_id.0, err);
                0.0
            }
        })
    }

    /// Normalized width of a glyph by name, 0.0 if the name is unknown
    pub fn glyph_width_by_name(&self, name: &str) -> FontResult<f64> {
        let face = self.face.face("get glyph width")?;

        match face.name_index(name) {
            Some(glyph_id) => self.glyph_width(glyph_id),
            None => {
                log::trace!("Unknown glyph name {:?}", name);
                Ok(0.0)
            }
        }
    }

    /// Width of a single-byte code at the requested size, scale and spacing
    pub fn char_width(&self, code: u8) -> f64 {
        self.unicode_char_width(u32::from(code))
    }

    /// Width of a code point at the requested size, scale and spacing
    ///
    /// Returns 0.0, without the spacing term, when a code past the cache
    /// cannot be loaded.
    pub fn unicode_char_width(&self, code: u32) -> f64 {
        let width = match self.widths.get(code) {
            Some(width) => width,
            None => match self
                .face
                .face("get character width")
                .ok()
                .and_then(|face| self.load_char_width(face, code))
            {
                Some(width) => width,
                None => return 0.0,
            },
        };

        self.scale_width(width)
    }

    /// Sum of [`char_width`](Self::char_width) over single-byte codes
    pub fn string_width(&self, text: &[u8]) -> f64 {
        text.iter().map(|&code| self.char_width(code)).sum()
    }

    /// Sum of [`unicode_char_width`](Self::unicode_char_width) over `text`
    pub fn unicode_string_width(&self, text: &str) -> f64 {
        text.chars()
            .map(|c| self.unicode_char_width(u32::from(c)))
            .sum()
    }

    /// `size * scale` is formed in single precision before widening
    #[inline]
    fn scale_width(&self, width: f64) -> f64 {
        let em = f64::from(self.font_size * self.font_scale) / 100.0;
        width * em / 1000.0 + em * f64::from(self.char_space) / 100.0
    }

    fn load_char_width(&self, face: &F, code: u32) -> Option<f64> {
        match face.load_char(code) {
            Ok(glyph) => Some(normalize(glyph.hori_advance, self.units_per_em)),
            Err(err) => {
                log::trace!("Code {:#x} has no width: {}", code, err);
                None
            }
        }
    }
}
