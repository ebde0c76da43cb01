use thiserror::Error;

/// Font metrics errors with comprehensive categorization
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    /// The font engine could not open or parse the font data
    #[error("Font load failed: engine returned error {code} for {origin}")]
    LoadFailed { code: i32, origin: String },

    /// The font type could not be determined before metrics initialization
    #[error("Unsupported font format: {0}")]
    UnsupportedFormat(String),

    /// An operation that needs a loaded face was invoked without one
    #[error("Invalid font handle: {0}")]
    InvalidHandle(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Font error severity levels for categorizing error impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FontErrorSeverity {
    /// Warning - non-fatal issue, defaults can be used instead
    Warning,
    /// Error - operation failed but the caller can continue
    Error,
    /// Critical - the font cannot be used at all
    Critical,
}

impl std::fmt::Display for FontErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontErrorSeverity::Warning => write!(f, "WARN"),
            FontErrorSeverity::Error => write!(f, "ERROR"),
            FontErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FontError {
    /// Get the severity level of this error
    pub fn severity(&self) -> FontErrorSeverity {
        match self {
            FontError::ConfigError(_) => FontErrorSeverity::Warning,
            FontError::UnsupportedFormat(_) => FontErrorSeverity::Error,
            FontError::LoadFailed { .. } => FontErrorSeverity::Critical,
            FontError::InvalidHandle(_) => FontErrorSeverity::Critical,
        }
    }

    /// Check if this error is recoverable
    ///
    /// Only configuration problems are; every other variant means the font
    /// itself is unusable and retrying with the same input gives the same result.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FontError::ConfigError(_))
    }

    /// Get error category as string
    pub fn category(&self) -> &'static str {
        match self {
            FontError::LoadFailed { .. } => "load",
            FontError::UnsupportedFormat(_) => "unsupported_format",
            FontError::InvalidHandle(_) => "invalid_handle",
            FontError::ConfigError(_) => "config",
        }
    }
}
