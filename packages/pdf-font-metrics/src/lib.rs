//! Font metrics extraction and glyph width caching for PDF generation
//!
//! This crate bridges a font engine to the glyph-sizing needs of a document
//! writer. It handles:
//! - Loading a face from a file, from memory, or by adopting an open face
//! - Document-space (1000 units per em) ascent, descent and bounding box
//! - Line spacing, underline and strikeout geometry scaled to a font size
//! - A precomputed width cache for the first 256 character codes
//! - Legacy Microsoft Symbol fonts, whose glyphs live at `0xF000..=0xF0FF`
//!
//! # Architecture
//!
//! The engine is reached through the [`FontEngine`] and [`FontFace`] traits.
//! [`TtfLibrary`] implements them on top of `ttf-parser`; any other engine can
//! be plugged in the same way. A [`FontMetrics`] is single-threaded and owns
//! its face exclusively.
//!
//! # Example
//!
//! ```rust,no_run
//! use pdf_font_metrics::{FontMetrics, MetricsConfig, TtfLibrary};
//!
//! # fn example() -> Result<(), pdf_font_metrics::FontError> {
//! let library = TtfLibrary::new();
//! let mut metrics = FontMetrics::from_path(
//!     &library,
//!     "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
//!     MetricsConfig::default(),
//! )?;
//!
//! metrics.set_font_size(12.0);
//! let widths = metrics.width_array(32, 126)?;
//! log::info!(
//!     "{}: ascent {} descent {}, {} widths",
//!     metrics.font_name(),
//!     metrics.pdf_ascent(),
//!     metrics.pdf_descent(),
//!     widths.len()
//! );
//! log::info!("'Hello' at 12pt is {}pt wide", metrics.string_width(b"Hello"));
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod handle;
mod metrics;
mod types;

pub mod engine;

pub use config::MetricsConfig;
pub use engine::{
    BoundingBox, Charmap, CharmapEncoding, EngineError, FontEngine, FontFace, GlyphId,
    GlyphMetrics, LineMetrics, TtfFace, TtfLibrary, TypographicHints,
};
pub use error::{FontError, FontErrorSeverity, FontResult};
pub use handle::FaceHandle;
pub use metrics::{FLAG_NONSYMBOLIC, FLAG_SYMBOLIC, FontDescriptor, FontMetrics, WidthCache};
pub use types::{FontOrigin, FontType};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        FontEngine, FontError, FontFace, FontMetrics, FontResult, FontType, GlyphId,
        MetricsConfig, TtfLibrary,
    };
}

/// Metric constants shared by the cache and the normalizing accessors
pub mod constants {
    /// Codes below this are control characters and get a zero cached width
    pub const FIRST_READABLE: usize = 31;

    /// Number of character codes held in the width cache
    pub const WIDTH_CACHE_SIZE: usize = 256;

    /// Symbol fonts map their glyphs at this offset in the private use area
    pub const SYMBOL_CHARMAP_OFFSET: u32 = 0xF000;

    /// Document-space resolution
    pub const PDF_UNITS_PER_EM: f64 = 1000.0;

    /// Weight reported for every font
    pub const DEFAULT_WEIGHT: u32 = 500;
}
