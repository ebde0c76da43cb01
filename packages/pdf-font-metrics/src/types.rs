use std::path::Path;

use serde::{Deserialize, Serialize};

/// Font program type as the output document embeds it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontType {
    /// Embeddable TrueType font program (also used for `otf` and `ttc` files)
    TrueType,
    /// Type 1 font in ASCII form
    Type1Pfa,
    /// Type 1 font in binary form
    Type1Pfb,
    #[default]
    Unknown,
}

impl FontType {
    /// Determine the font type from a file extension
    ///
    /// This only looks at the extension, not the file contents.
    pub fn from_filename(path: &Path) -> Self {
        let font_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| match ext.to_lowercase().as_str() {
                "ttf" | "ttc" | "otf" => FontType::TrueType,
                "pfa" => FontType::Type1Pfa,
                "pfb" => FontType::Type1Pfb,
                _ => FontType::Unknown,
            })
            .unwrap_or(FontType::Unknown);

        if font_type == FontType::Unknown {
            log::warn!("Unrecognized font format: {}", path.display());
        }
        font_type
    }

    pub fn is_known(&self) -> bool {
        *self != FontType::Unknown
    }
}

impl std::fmt::Display for FontType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontType::TrueType => write!(f, "TrueType"),
            FontType::Type1Pfa => write!(f, "Type1 (pfa)"),
            FontType::Type1Pfb => write!(f, "Type1 (pfb)"),
            FontType::Unknown => write!(f, "Unknown"),
        }
    }
}

/// How the face of a metrics object was acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontOrigin {
    /// Opened by the engine from a file path
    Path,
    /// Parsed from an owned copy of caller-supplied bytes
    Buffer,
    /// Already open face handed over by the caller
    Adopted,
}

impl std::fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontOrigin::Path => write!(f, "path"),
            FontOrigin::Buffer => write!(f, "buffer"),
            FontOrigin::Adopted => write!(f, "adopted handle"),
        }
    }
}
