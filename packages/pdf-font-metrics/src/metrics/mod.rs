//! Font metrics for document generation
//!
//! [`FontMetrics`] owns one engine face and answers the sizing questions a
//! PDF writer asks: ascent and descent, decoration geometry, bounding box and
//! glyph widths in 1000 units per em or scaled to the requested font size.

mod charmap;
mod core;
mod descriptor;
mod layout;
mod width_cache;
mod widths;

pub use self::core::FontMetrics;
pub use descriptor::{FLAG_NONSYMBOLIC, FLAG_SYMBOLIC, FontDescriptor};
pub use width_cache::WidthCache;
