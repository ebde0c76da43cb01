//! Values a document writer needs for a PDF font descriptor

use serde::Serialize;

use super::core::FontMetrics;
use crate::engine::FontFace;
use crate::FontResult;

/// Descriptor flag for fonts using a custom (symbol) character set
pub const FLAG_SYMBOLIC: u32 = 1 << 2;
/// Descriptor flag for fonts using the standard Latin character set
pub const FLAG_NONSYMBOLIC: u32 = 1 << 5;

/// Font descriptor entries, serialized with their PDF key names
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FontDescriptor {
    pub font_name: String,
    pub flags: u32,
    #[serde(rename = "FontBBox")]
    pub font_bbox: [f64; 4],
    pub italic_angle: i32,
    pub ascent: f64,
    pub descent: f64,
    pub cap_height: f64,
    pub stem_v: u32,
}

impl<F: FontFace> FontMetrics<F> {
    /// Collect the descriptor entries for this font
    ///
    /// The font has no cap height of its own here, so the ascent stands in.
    pub fn descriptor(&self) -> FontResult<FontDescriptor> {
        Ok(FontDescriptor {
            font_name: self.subset_font_name(),
            flags: if self.symbol {
                FLAG_SYMBOLIC
            } else {
                FLAG_NONSYMBOLIC
            },
            font_bbox: self.bounding_box()?,
            italic_angle: self.italic_angle,
            ascent: self.pdf_ascent,
            descent: self.pdf_descent,
            cap_height: self.pdf_ascent,
            stem_v: 1,
        })
    }
}
