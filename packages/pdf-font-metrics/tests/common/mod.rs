//! Shared helpers for the integration suites
//!
//! `MockFace` is a scripted engine face with a release counter; `sfnt` writes
//! small but real TrueType files for the `ttf-parser` backend.

#![allow(dead_code)]

pub mod sfnt;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pdf_font_metrics::{
    BoundingBox, Charmap, CharmapEncoding, EngineError, FontEngine, FontFace, GlyphId,
    GlyphMetrics, LineMetrics, TypographicHints,
};

/// Initialize logging (optional, for development)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Advance of every mock glyph, in font units
pub fn mock_advance(glyph: u32) -> i32 {
    400 + (glyph as i32 % 10) * 25
}

/// Scripted face; glyph ids equal the code points they are mapped from
pub struct MockFace {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub height: i32,
    pub underline: LineMetrics,
    pub bbox: BoundingBox,
    pub name: Option<String>,
    pub charmaps: Vec<(CharmapEncoding, HashMap<u32, u32>)>,
    pub active: Option<usize>,
    pub num_glyphs: u32,
    pub failing_glyphs: HashSet<u32>,
    pub glyph_names: HashMap<String, u32>,
    pub hints: Option<TypographicHints>,
    pub path: Option<PathBuf>,
    pub char_size: Option<(f32, u32)>,
    pub releases: Arc<AtomicUsize>,
}

impl MockFace {
    /// 1000 units/em face with a Unicode map for codes `32..=0x2FF`
    pub fn standard(releases: Arc<AtomicUsize>) -> Self {
        let unicode = (32..=0x2FF).map(|code| (code, code)).collect();
        Self {
            units_per_em: 1000,
            ascender: 800,
            descender: -200,
            height: 1200,
            underline: LineMetrics {
                position: -100,
                thickness: 50,
            },
            bbox: BoundingBox {
                x_min: -100,
                y_min: -200,
                x_max: 1000,
                y_max: 900,
            },
            name: Some("MockSans-Regular".to_string()),
            charmaps: vec![(CharmapEncoding::Unicode, unicode)],
            active: None,
            num_glyphs: 0x300,
            failing_glyphs: HashSet::new(),
            glyph_names: HashMap::from([
                ("A".to_string(), 0x41),
                ("space".to_string(), 0x20),
            ]),
            hints: None,
            path: None,
            char_size: None,
            releases,
        }
    }

    pub fn with_units_per_em(mut self, units_per_em: u16) -> Self {
        self.units_per_em = units_per_em;
        self
    }

    pub fn with_failing_glyphs(mut self, glyphs: impl IntoIterator<Item = u32>) -> Self {
        self.failing_glyphs.extend(glyphs);
        self
    }

    /// Append a charmap; glyph ids are `code & 0xFF` for symbol maps
    pub fn with_charmap(mut self, encoding: CharmapEncoding, codes: impl IntoIterator<Item = u32>) -> Self {
        let map = codes
            .into_iter()
            .map(|code| {
                let glyph = if encoding == CharmapEncoding::MsSymbol {
                    code & 0xFF
                } else {
                    code
                };
                (code, glyph)
            })
            .collect();
        self.charmaps.push((encoding, map));
        self
    }

    pub fn without_charmaps(mut self) -> Self {
        self.charmaps.clear();
        self
    }

    pub fn with_hints(mut self, strikeout_position: i16, strikeout_size: i16) -> Self {
        self.hints = Some(TypographicHints {
            strikeout_position,
            strikeout_size,
        });
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn ids(encoding: CharmapEncoding) -> (u16, u16) {
        match encoding {
            CharmapEncoding::Unicode => (3, 1),
            CharmapEncoding::MsSymbol => (3, 0),
            CharmapEncoding::AppleRoman => (1, 0),
            CharmapEncoding::Sjis => (3, 2),
            CharmapEncoding::Prc => (3, 3),
            CharmapEncoding::Big5 => (3, 4),
            CharmapEncoding::Wansung => (3, 5),
            CharmapEncoding::Johab => (3, 6),
            CharmapEncoding::Other => (4, 0),
        }
    }
}

impl Drop for MockFace {
    fn drop(&mut self) {
        self.releases.fetch_add(1, Ordering::SeqCst);
    }
}

impl FontFace for MockFace {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn ascender(&self) -> i16 {
        self.ascender
    }

    fn descender(&self) -> i16 {
        self.descender
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn underline(&self) -> LineMetrics {
        self.underline
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn postscript_name(&self) -> Option<String> {
        self.name.clone()
    }

    fn charmaps(&self) -> Vec<Charmap> {
        self.charmaps
            .iter()
            .enumerate()
            .map(|(index, (encoding, _))| {
                let (platform_id, encoding_id) = Self::ids(*encoding);
                Charmap {
                    index,
                    platform_id,
                    encoding_id,
                    encoding: *encoding,
                }
            })
            .collect()
    }

    fn select_charmap(&mut self, encoding: CharmapEncoding) -> bool {
        match self.charmaps.iter().position(|(e, _)| *e == encoding) {
            Some(index) => self.set_charmap(index),
            None => false,
        }
    }

    fn set_charmap(&mut self, index: usize) -> bool {
        if index < self.charmaps.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    fn char_index(&self, code: u32) -> Option<GlyphId> {
        let (_, map) = self.charmaps.get(self.active?)?;
        map.get(&code).copied().map(GlyphId)
    }

    fn load_char(&self, code: u32) -> Result<GlyphMetrics, EngineError> {
        self.load_glyph(self.char_index(code).unwrap_or_default())
    }

    fn load_glyph(&self, glyph_id: GlyphId) -> Result<GlyphMetrics, EngineError> {
        if glyph_id.0 >= self.num_glyphs || self.failing_glyphs.contains(&glyph_id.0) {
            return Err(EngineError::new(0x10, format!("glyph {} unavailable", glyph_id.0)));
        }
        Ok(GlyphMetrics {
            glyph_id,
            hori_advance: mock_advance(glyph_id.0),
        })
    }

    fn name_index(&self, name: &str) -> Option<GlyphId> {
        self.glyph_names.get(name).copied().map(GlyphId)
    }

    fn set_char_size(&mut self, points: f32, dpi: u32) -> Result<(), EngineError> {
        self.char_size = Some((points, dpi));
        Ok(())
    }

    fn hints(&self) -> Option<TypographicHints> {
        self.hints
    }

    fn source_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}

/// Engine handing out standard mock faces
///
/// Paths whose file name contains `missing` fail with code 1; memory fonts
/// must start with `MOCK` or fail with code 2.
#[derive(Default)]
pub struct MockLibrary {
    pub releases: Arc<AtomicUsize>,
}

impl MockLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn released(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

impl FontEngine for MockLibrary {
    type Face = MockFace;

    fn open_path(&self, path: &Path, _face_index: u32) -> Result<MockFace, EngineError> {
        let missing = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains("missing"));
        if missing {
            return Err(EngineError::new(1, "cannot open resource"));
        }
        Ok(MockFace::standard(Arc::clone(&self.releases)).with_path(path))
    }

    fn open_memory(&self, data: Arc<[u8]>, _face_index: u32) -> Result<MockFace, EngineError> {
        if !data.starts_with(b"MOCK") {
            return Err(EngineError::new(2, "unknown file format"));
        }
        Ok(MockFace::standard(Arc::clone(&self.releases)))
    }
}
