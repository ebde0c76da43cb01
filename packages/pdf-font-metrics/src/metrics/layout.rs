//! Requested rendering parameters and size-scaled metrics
//!
//! Every accessor here multiplies an em-relative value by the current font
//! size. Changing the size never touches the width cache or the
//! document-space ascent/descent.

use super::core::FontMetrics;
use crate::engine::FontFace;

impl<F: FontFace> FontMetrics<F> {
    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[inline]
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Horizontal scaling in percent
    #[inline]
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    #[inline]
    pub fn set_font_scale(&mut self, scale: f32) {
        self.font_scale = scale;
    }

    /// Character spacing in percent of the font size
    #[inline]
    pub fn char_space(&self) -> f32 {
        self.char_space
    }

    #[inline]
    pub fn set_char_space(&mut self, char_space: f32) {
        self.char_space = char_space;
    }

    #[inline]
    fn scaled(&self, value: f64) -> f64 {
        value * f64::from(self.font_size)
    }

    #[inline]
    pub fn ascent(&self) -> f64 {
        self.scaled(self.em.ascent)
    }

    #[inline]
    pub fn descent(&self) -> f64 {
        self.scaled(self.em.descent)
    }

    #[inline]
    pub fn line_spacing(&self) -> f64 {
        self.scaled(self.em.line_spacing)
    }

    #[inline]
    pub fn underline_position(&self) -> f64 {
        self.scaled(self.em.underline_position)
    }

    #[inline]
    pub fn underline_thickness(&self) -> f64 {
        self.scaled(self.em.underline_thickness)
    }

    #[inline]
    pub fn strikeout_position(&self) -> f64 {
        self.scaled(self.em.strikeout_position)
    }

    #[inline]
    pub fn strikeout_thickness(&self) -> f64 {
        self.scaled(self.em.strikeout_thickness)
    }
}
