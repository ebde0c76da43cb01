use crate::engine::EngineError;
use crate::error::types::FontError;

/// FreeType's "cannot open resource"
const ERR_CANNOT_OPEN_RESOURCE: i32 = 0x01;

/// From implementations for converting various error types to EngineError
impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::new(
            error.raw_os_error().unwrap_or(ERR_CANNOT_OPEN_RESOURCE),
            error.to_string(),
        )
    }
}

impl From<ttf_parser::FaceParsingError> for EngineError {
    fn from(error: ttf_parser::FaceParsingError) -> Self {
        use ttf_parser::FaceParsingError;

        // Numbered after the closest FreeType error codes
        let code = match error {
            FaceParsingError::UnknownMagic => 0x02,
            FaceParsingError::MalformedFont => 0x03,
            FaceParsingError::FaceIndexOutOfBounds => 0x06,
            FaceParsingError::NoHeadTable
            | FaceParsingError::NoHheaTable
            | FaceParsingError::NoMaxpTable => 0x8E,
        };
        EngineError::new(code, format!("TTF parsing failed: {:?}", error))
    }
}

impl From<serde_json::Error> for FontError {
    fn from(error: serde_json::Error) -> Self {
        FontError::ConfigError(format!("JSON parsing failed: {}", error))
    }
}

/// Conversion utilities for error handling
impl FontError {
    /// Create a LoadFailed error for the font identified by `origin`
    pub fn load_failed(error: &EngineError, origin: impl Into<String>) -> Self {
        FontError::LoadFailed {
            code: error.code,
            origin: origin.into(),
        }
    }

    /// Create an UnsupportedFormat error naming the font source
    pub fn unsupported_format(origin: impl Into<String>) -> Self {
        FontError::UnsupportedFormat(origin.into())
    }

    /// Create an InvalidHandle error describing the attempted operation
    pub fn invalid_handle(operation: &str) -> Self {
        FontError::InvalidHandle(format!("cannot {} on invalid font", operation))
    }

    /// Create a ConfigError with configuration context
    pub fn config_error_with_field(field: &str, message: impl Into<String>) -> Self {
        FontError::ConfigError(format!(
            "Configuration error in '{}': {}",
            field,
            message.into()
        ))
    }
}
