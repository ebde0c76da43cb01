pub mod conversions;
pub mod types;

pub use types::{FontError, FontErrorSeverity, FontResult};
