//! Construction and font-level metrics
//!
//! A [`FontMetrics`] is either fully initialized or never exists: every
//! constructor loads the face, derives the font-wide metrics, selects the
//! character map, builds the width cache and populates the em-relative
//! metrics before returning.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::charmap;
use super::width_cache::WidthCache;
use crate::constants::{DEFAULT_WEIGHT, PDF_UNITS_PER_EM};
use crate::engine::{FontEngine, FontFace, GlyphId, TtfFace};
use crate::handle::FaceHandle;
use crate::{FontError, FontOrigin, FontResult, FontType, MetricsConfig};

/// Metrics of one loaded font, ready for glyph sizing queries
pub struct FontMetrics<F: FontFace = TtfFace> {
    pub(super) face: FaceHandle<F>,
    pub(super) font_type: FontType,
    pub(super) filename: PathBuf,
    pub(super) subset_prefix: Option<String>,
    pub(super) font_data: Arc<[u8]>,
    pub(super) units_per_em: u16,
    pub(super) weight: u32,
    pub(super) italic_angle: i32,
    pub(super) pdf_ascent: f64,
    pub(super) pdf_descent: f64,
    pub(super) symbol: bool,
    pub(super) widths: WidthCache,
    pub(super) em: EmMetrics,
    pub(super) font_size: f32,
    pub(super) font_scale: f32,
    pub(super) char_space: f32,
}

/// Metrics as fractions of the em, multiplied by the font size on access
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct EmMetrics {
    pub line_spacing: f64,
    pub underline_thickness: f64,
    pub underline_position: f64,
    pub ascent: f64,
    pub descent: f64,
    pub strikeout_position: f64,
    pub strikeout_thickness: f64,
}

impl EmMetrics {
    /// Derive the em-relative metrics of a usable face
    fn from_face<F: FontFace>(handle: &mut FaceHandle<F>) -> FontResult<Self> {
        let face = handle.face_mut("set font size")?;

        // Only forces the engine to populate its size-dependent tables
        if let Err(err) = face.set_char_size(1.0, 72) {
            log::trace!("Nominal character size rejected: {}", err);
        }

        let units_per_em = f64::from(face.units_per_em());
        let underline = face.underline();
        let ascent = f64::from(face.ascender()) / units_per_em;
        let underline_thickness = f64::from(underline.thickness) / units_per_em;

        let mut metrics = Self {
            line_spacing: f64::from(face.height()) / units_per_em,
            underline_thickness,
            underline_position: f64::from(underline.position) / units_per_em,
            ascent,
            descent: f64::from(face.descender()) / units_per_em,
            strikeout_position: ascent / 2.0,
            strikeout_thickness: underline_thickness,
        };

        if let Some(hints) = face.hints() {
            metrics.strikeout_position = f64::from(hints.strikeout_position) / units_per_em;
            metrics.strikeout_thickness = f64::from(hints.strikeout_size) / units_per_em;
        }

        Ok(metrics)
    }
}

impl<F: FontFace> FontMetrics<F> {
    /// Load the font file at `path`
    ///
    /// The font type is taken from the file extension; fonts with an
    /// unrecognized extension fail with [`FontError::UnsupportedFormat`].
    pub fn from_path<E>(engine: &E, path: impl AsRef<Path>, config: MetricsConfig) -> FontResult<Self>
    where
        E: FontEngine<Face = F>,
    {
        config.validate()?;
        let path = path.as_ref();
        let font_type = FontType::from_filename(path);
        let handle = FaceHandle::open_path(engine, path, config.face_index)?;

        Self::init_from_face(handle, font_type, path.to_path_buf(), Arc::from([]), config)
    }

    /// Load a font from memory
    ///
    /// `data` is copied, so the caller may drop its buffer afterward. Fonts
    /// loaded this way are always treated as TrueType: the bytes are not
    /// sniffed, so a Type 1 program would be mislabelled.
    pub fn from_buffer<E>(engine: &E, data: &[u8], config: MetricsConfig) -> FontResult<Self>
    where
        E: FontEngine<Face = F>,
    {
        config.validate()?;
        let font_data: Arc<[u8]> = Arc::from(data);
        let handle = FaceHandle::open_buffer(engine, Arc::clone(&font_data), config.face_index)?;

        Self::init_from_face(handle, FontType::TrueType, PathBuf::new(), font_data, config)
    }

    /// Take ownership of an already open face
    ///
    /// The face is moved in and released together with the metrics. Its
    /// source path, when the engine recorded one, is kept for embedding.
    pub fn from_face(face: F, config: MetricsConfig) -> FontResult<Self> {
        config.validate()?;
        let filename = face.source_path().unwrap_or_default();
        let handle = FaceHandle::adopt(face);

        Self::init_from_face(handle, FontType::TrueType, filename, Arc::from([]), config)
    }

    fn init_from_face(
        mut handle: FaceHandle<F>,
        font_type: FontType,
        filename: PathBuf,
        font_data: Arc<[u8]>,
        config: MetricsConfig,
    ) -> FontResult<Self> {
        if !font_type.is_known() {
            return Err(FontError::unsupported_format(filename.display().to_string()));
        }

        let units_per_em = handle.raw().units_per_em();
        let (pdf_ascent, pdf_descent) = match handle.face("compute ascent") {
            Ok(face) => (
                f64::from(face.ascender()) * PDF_UNITS_PER_EM / f64::from(units_per_em),
                f64::from(face.descender()) * PDF_UNITS_PER_EM / f64::from(units_per_em),
            ),
            Err(_) => (0.0, 0.0),
        };

        charmap::select_unicode(handle.raw_mut());
        let symbol = charmap::detect_symbol(handle.raw_mut());

        let widths = WidthCache::build(handle.face("build width cache").ok(), symbol);
        let em = EmMetrics::from_face(&mut handle)?;

        log::debug!(
            "Loaded {} font from {} ({} units/em, symbol: {})",
            font_type,
            handle.origin(),
            units_per_em,
            symbol
        );

        Ok(Self {
            face: handle,
            font_type,
            filename,
            subset_prefix: config.subset_prefix,
            font_data,
            units_per_em,
            weight: DEFAULT_WEIGHT,
            italic_angle: 0,
            pdf_ascent,
            pdf_descent,
            symbol,
            widths,
            em,
            font_size: config.font_size,
            font_scale: config.font_scale,
            char_space: config.char_space,
        })
    }

    /// PostScript name of the font, empty if the font has none
    pub fn font_name(&self) -> String {
        self.face.raw().postscript_name().unwrap_or_default()
    }

    pub fn subset_prefix(&self) -> Option<&str> {
        self.subset_prefix.as_deref()
    }

    /// Font name with the subset prefix prepended, if any
    pub fn subset_font_name(&self) -> String {
        match &self.subset_prefix {
            Some(prefix) => format!("{}{}", prefix, self.font_name()),
            None => self.font_name(),
        }
    }

    /// `[x_min, y_min, x_max, y_max]` in 1000 units per em
    pub fn bounding_box(&self) -> FontResult<[f64; 4]> {
        let face = self.face.face("get bounding box")?;
        let bbox = face.bounding_box();
        let units_per_em = f64::from(self.units_per_em);
        let scale = |value: i16| f64::from(value) * PDF_UNITS_PER_EM / units_per_em;

        Ok([
            scale(bbox.x_min),
            scale(bbox.y_min),
            scale(bbox.x_max),
            scale(bbox.y_max),
        ])
    }

    /// Glyph for a Unicode code point, honoring the symbol convention
    pub fn glyph_id(&self, unicode: u32) -> Option<GlyphId> {
        self.face
            .raw()
            .char_index(charmap::symbol_code(unicode, self.symbol))
    }

    /// Ascent in 1000 units per em, independent of the font size
    #[inline]
    pub fn pdf_ascent(&self) -> f64 {
        self.pdf_ascent
    }

    /// Descent in 1000 units per em, independent of the font size
    #[inline]
    pub fn pdf_descent(&self) -> f64 {
        self.pdf_descent
    }

    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[inline]
    pub fn italic_angle(&self) -> i32 {
        self.italic_angle
    }

    /// Whether the font uses the Microsoft symbol encoding
    #[inline]
    pub fn is_symbol(&self) -> bool {
        self.symbol
    }

    #[inline]
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    #[inline]
    pub fn font_type(&self) -> FontType {
        self.font_type
    }

    /// File the font was loaded from; empty for buffered fonts and adopted
    /// faces without stream metadata
    #[inline]
    pub fn filename(&self) -> &Path {
        &self.filename
    }

    #[inline]
    pub fn origin(&self) -> FontOrigin {
        self.face.origin()
    }

    /// Raw font program for embedding; empty unless loaded from a buffer
    #[inline]
    pub fn font_data(&self) -> &[u8] {
        &self.font_data
    }

    #[inline]
    pub fn font_data_len(&self) -> usize {
        self.font_data.len()
    }

    /// The owned face, for engine queries not covered here
    pub fn face(&self) -> &F {
        self.face.raw()
    }
}

impl<F: FontFace> std::fmt::Debug for FontMetrics<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontMetrics")
            .field("font_type", &self.font_type)
            .field("filename", &self.filename)
            .field("origin", &self.face.origin())
            .field("units_per_em", &self.units_per_em)
            .field("symbol", &self.symbol)
            .field("font_data_len", &self.font_data.len())
            .field("font_size", &self.font_size)
            .finish()
    }
}
