//! `ttf-parser` backed engine
//!
//! `ttf_parser::Face` borrows its bytes, so the owned buffer and the parsed
//! face are kept together in a self-referencing cell.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ttf_parser::PlatformId;

use super::{
    BoundingBox, Charmap, CharmapEncoding, EngineError, FontEngine, FontFace, GlyphId,
    GlyphMetrics, LineMetrics, TypographicHints,
};

/// FreeType-compatible codes for errors raised by the backend itself
const ERR_INVALID_ARGUMENT: i32 = 0x06;
const ERR_INVALID_GLYPH_INDEX: i32 = 0x10;

#[ouroboros::self_referencing]
struct ParsedFace {
    data: Arc<[u8]>,
    #[borrows(data)]
    #[covariant]
    face: ttf_parser::Face<'this>,
}

/// Engine library for TrueType/OpenType fonts
#[derive(Debug, Default, Clone, Copy)]
pub struct TtfLibrary;

impl TtfLibrary {
    pub fn new() -> Self {
        Self
    }

    fn parse(
        &self,
        data: Arc<[u8]>,
        face_index: u32,
        path: Option<PathBuf>,
    ) -> Result<TtfFace, EngineError> {
        let parsed = ParsedFaceTryBuilder {
            data,
            face_builder: |data: &Arc<[u8]>| ttf_parser::Face::parse(data, face_index),
        }
        .try_build()?;

        let mut face = TtfFace {
            parsed,
            path,
            active_charmap: None,
            ppem: None,
        };
        // FreeType activates a Unicode map when opening a face
        face.select_charmap(CharmapEncoding::Unicode);
        Ok(face)
    }
}

impl FontEngine for TtfLibrary {
    type Face = TtfFace;

    fn open_path(&self, path: &Path, face_index: u32) -> Result<TtfFace, EngineError> {
        let data: Arc<[u8]> = std::fs::read(path)?.into();
        log::trace!("Read {} bytes from {}", data.len(), path.display());
        self.parse(data, face_index, Some(path.to_path_buf()))
    }

    fn open_memory(&self, data: Arc<[u8]>, face_index: u32) -> Result<TtfFace, EngineError> {
        self.parse(data, face_index, None)
    }
}

/// A face opened by [`TtfLibrary`]
pub struct TtfFace {
    parsed: ParsedFace,
    path: Option<PathBuf>,
    active_charmap: Option<u16>,
    ppem: Option<f32>,
}

impl std::fmt::Debug for TtfFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFace")
            .field("data_len", &self.parsed.borrow_data().len())
            .field("path", &self.path)
            .field("active_charmap", &self.active_charmap)
            .finish()
    }
}

impl TtfFace {
    fn face(&self) -> &ttf_parser::Face<'_> {
        self.parsed.borrow_face()
    }

    /// Nominal pixels per em set by the last [`FontFace::set_char_size`] call
    pub fn ppem(&self) -> Option<f32> {
        self.ppem
    }

    fn subtables(&self) -> Option<ttf_parser::cmap::Subtables<'_>> {
        self.face().tables().cmap.as_ref().map(|cmap| cmap.subtables)
    }

    fn platform_number(platform_id: PlatformId) -> u16 {
        match platform_id {
            PlatformId::Unicode => 0,
            PlatformId::Macintosh => 1,
            PlatformId::Iso => 2,
            PlatformId::Windows => 3,
            PlatformId::Custom => 4,
        }
    }

    /// Maps covering the whole Unicode range (UCS-4) are preferred
    fn is_full_repertoire(charmap: &Charmap) -> bool {
        matches!(
            (charmap.platform_id, charmap.encoding_id),
            (0, 4) | (0, 6) | (3, 10)
        )
    }
}

impl FontFace for TtfFace {
    fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    fn ascender(&self) -> i16 {
        self.face().ascender()
    }

    fn descender(&self) -> i16 {
        self.face().descender()
    }

    fn height(&self) -> i32 {
        let face = self.face();
        i32::from(face.ascender()) - i32::from(face.descender()) + i32::from(face.line_gap())
    }

    /// `post` places the top of the line; FreeType reports its center
    fn underline(&self) -> LineMetrics {
        self.face()
            .underline_metrics()
            .map(|m| LineMetrics {
                position: m.position.saturating_sub(m.thickness / 2),
                thickness: m.thickness,
            })
            .unwrap_or_default()
    }

    fn bounding_box(&self) -> BoundingBox {
        let rect = self.face().global_bounding_box();
        BoundingBox {
            x_min: rect.x_min,
            y_min: rect.y_min,
            x_max: rect.x_max,
            y_max: rect.y_max,
        }
    }

    fn postscript_name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|name| {
                name.to_string().or_else(|| {
                    // Mac Roman records; PostScript names are printable ASCII
                    (name.platform_id == PlatformId::Macintosh && name.name.is_ascii())
                        .then(|| String::from_utf8_lossy(name.name).into_owned())
                })
            })
    }

    fn charmaps(&self) -> Vec<Charmap> {
        let Some(subtables) = self.subtables() else {
            return Vec::new();
        };

        subtables
            .into_iter()
            .enumerate()
            .map(|(index, subtable)| {
                let platform_id = Self::platform_number(subtable.platform_id);
                Charmap {
                    index,
                    platform_id,
                    encoding_id: subtable.encoding_id,
                    encoding: CharmapEncoding::from_platform(platform_id, subtable.encoding_id),
                }
            })
            .collect()
    }

    fn select_charmap(&mut self, encoding: CharmapEncoding) -> bool {
        let charmaps = self.charmaps();
        let mut candidates = charmaps.iter().filter(|c| c.encoding == encoding);

        let selected = if encoding == CharmapEncoding::Unicode {
            charmaps
                .iter()
                .rev()
                .find(|c| c.encoding == encoding && Self::is_full_repertoire(c))
                .or_else(|| candidates.next())
        } else {
            candidates.next()
        };

        match selected {
            Some(charmap) => self.set_charmap(charmap.index),
            None => false,
        }
    }

    fn set_charmap(&mut self, index: usize) -> bool {
        let Ok(index) = u16::try_from(index) else {
            return false;
        };
        let exists = self
            .subtables()
            .is_some_and(|subtables| subtables.get(index).is_some());
        if exists {
            self.active_charmap = Some(index);
        }
        exists
    }

    fn char_index(&self, code: u32) -> Option<GlyphId> {
        let subtable = self.subtables()?.get(self.active_charmap?)?;
        subtable
            .glyph_index(code)
            .filter(|glyph| glyph.0 != 0)
            .map(|glyph| GlyphId(u32::from(glyph.0)))
    }

    fn load_char(&self, code: u32) -> Result<GlyphMetrics, EngineError> {
        // Unmapped codes load the .notdef glyph, as FreeType does
        let glyph_id = self.char_index(code).unwrap_or_default();
        self.load_glyph(glyph_id)
    }

    fn load_glyph(&self, glyph_id: GlyphId) -> Result<GlyphMetrics, EngineError> {
        let glyph = u16::try_from(glyph_id.0)
            .ok()
            .filter(|&id| id < self.face().number_of_glyphs())
            .ok_or_else(|| {
                EngineError::new(
                    ERR_INVALID_GLYPH_INDEX,
                    format!("glyph {} out of range", glyph_id.0),
                )
            })?;

        let advance = self
            .face()
            .glyph_hor_advance(ttf_parser::GlyphId(glyph))
            .ok_or_else(|| {
                EngineError::new(
                    ERR_INVALID_GLYPH_INDEX,
                    format!("glyph {} has no horizontal metrics", glyph),
                )
            })?;

        Ok(GlyphMetrics {
            glyph_id,
            hori_advance: i32::from(advance),
        })
    }

    fn name_index(&self, name: &str) -> Option<GlyphId> {
        self.face()
            .glyph_index_by_name(name)
            .map(|glyph| GlyphId(u32::from(glyph.0)))
    }

    fn set_char_size(&mut self, points: f32, dpi: u32) -> Result<(), EngineError> {
        if !(points > 0.0) || dpi == 0 {
            return Err(EngineError::new(
                ERR_INVALID_ARGUMENT,
                format!("invalid character size {points}pt at {dpi}dpi"),
            ));
        }
        self.ppem = Some(points * dpi as f32 / 72.0);
        Ok(())
    }

    fn hints(&self) -> Option<TypographicHints> {
        self.face().tables().os2.as_ref().map(|os2| {
            let strikeout = os2.strikeout_metrics();
            TypographicHints {
                strikeout_position: strikeout.position,
                strikeout_size: strikeout.thickness,
            }
        })
    }

    fn source_path(&self) -> Option<PathBuf> {
        self.path.clone()
    }
}
