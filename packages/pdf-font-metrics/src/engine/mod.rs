//! Font engine seam
//!
//! The metrics core only talks to a font through the [`FontEngine`] and
//! [`FontFace`] traits. A face behaves like a FreeType face: it has an active
//! character map, glyphs are loaded unscaled, and it is released when dropped.
//! The default backend is [`TtfLibrary`], built on `ttf-parser`.

mod ttf;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use ttf::{TtfFace, TtfLibrary};

/// Glyph index inside a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GlyphId(pub u32);

/// Encoding of a character map, classified the way FreeType reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharmapEncoding {
    Unicode,
    MsSymbol,
    AppleRoman,
    Sjis,
    Prc,
    Big5,
    Wansung,
    Johab,
    Other,
}

impl CharmapEncoding {
    /// Classify an sfnt `cmap` encoding record
    pub fn from_platform(platform_id: u16, encoding_id: u16) -> Self {
        match (platform_id, encoding_id) {
            (0, _) => CharmapEncoding::Unicode,
            (1, 0) => CharmapEncoding::AppleRoman,
            (3, 0) => CharmapEncoding::MsSymbol,
            (3, 1) | (3, 10) => CharmapEncoding::Unicode,
            (3, 2) => CharmapEncoding::Sjis,
            (3, 3) => CharmapEncoding::Prc,
            (3, 4) => CharmapEncoding::Big5,
            (3, 5) => CharmapEncoding::Wansung,
            (3, 6) => CharmapEncoding::Johab,
            _ => CharmapEncoding::Other,
        }
    }
}

/// One character map exposed by a face, in engine order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charmap {
    pub index: usize,
    pub platform_id: u16,
    pub encoding_id: u16,
    pub encoding: CharmapEncoding,
}

/// Unscaled metrics of a loaded glyph, in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub glyph_id: GlyphId,
    pub hori_advance: i32,
}

/// Position and thickness of a decoration line, in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMetrics {
    pub position: i16,
    pub thickness: i16,
}

/// Font-wide bounding box, in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

/// Optional typographic hints (the OS/2 table of sfnt fonts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographicHints {
    pub strikeout_position: i16,
    pub strikeout_size: i16,
}

/// Error reported by a font engine, carrying its native error code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub code: i32,
    pub message: String,
}

impl EngineError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "engine error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

/// Top-level engine library instance, shared by the caller
///
/// Engines are commonly not safe for unsynchronized use from several faces at
/// once; callers serialize access to a shared library themselves.
pub trait FontEngine {
    type Face: FontFace;

    /// Open face `face_index` of the font file at `path`
    fn open_path(&self, path: &Path, face_index: u32) -> Result<Self::Face, EngineError>;

    /// Open face `face_index` of a font held in memory
    fn open_memory(&self, data: Arc<[u8]>, face_index: u32) -> Result<Self::Face, EngineError>;
}

/// An open font face
///
/// Dropping the value releases the face.
pub trait FontFace {
    fn units_per_em(&self) -> u16;

    fn ascender(&self) -> i16;

    fn descender(&self) -> i16;

    /// Baseline-to-baseline distance (ascender - descender + line gap)
    fn height(&self) -> i32;

    /// Underline geometry, zero when the font does not provide it
    fn underline(&self) -> LineMetrics;

    fn bounding_box(&self) -> BoundingBox;

    /// PostScript name of the face
    fn postscript_name(&self) -> Option<String>;

    /// Character maps in engine order
    fn charmaps(&self) -> Vec<Charmap>;

    /// Activate the first suitable map with `encoding`; `false` if there is none
    fn select_charmap(&mut self, encoding: CharmapEncoding) -> bool;

    /// Activate the map at `index` as returned by [`FontFace::charmaps`]
    fn set_charmap(&mut self, index: usize) -> bool;

    /// Look up `code` in the active character map
    fn char_index(&self, code: u32) -> Option<GlyphId>;

    /// Load the glyph mapped to `code` through the active map, unscaled
    fn load_char(&self, code: u32) -> Result<GlyphMetrics, EngineError>;

    /// Load a glyph by index, unscaled
    fn load_glyph(&self, glyph_id: GlyphId) -> Result<GlyphMetrics, EngineError>;

    /// Resolve a glyph name to its index
    fn name_index(&self, name: &str) -> Option<GlyphId>;

    /// Set the nominal character size in points at `dpi`
    fn set_char_size(&mut self, points: f32, dpi: u32) -> Result<(), EngineError>;

    fn hints(&self) -> Option<TypographicHints>;

    /// Path the face was opened from, if the engine recorded one
    fn source_path(&self) -> Option<PathBuf>;
}
