use serde::{Deserialize, Serialize};

use crate::{FontError, FontResult};

/// Construction options for [`FontMetrics`](crate::FontMetrics) with fluent API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Face to open inside a font collection
    pub face_index: u32,
    /// Prefix marking a subset-embedded font, e.g. `"ABCDEF+"`
    pub subset_prefix: Option<String>,
    /// Requested font size in points
    pub font_size: f32,
    /// Horizontal scaling in percent
    pub font_scale: f32,
    /// Character spacing in percent of the font size
    pub char_space: f32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsConfig {
    pub fn new() -> Self {
        Self {
            face_index: 0,
            subset_prefix: None,
            font_size: 0.0,
            font_scale: 100.0,
            char_space: 0.0,
        }
    }

    #[inline]
    pub fn with_face_index(mut self, face_index: u32) -> Self {
        self.face_index = face_index;
        self
    }

    #[inline]
    pub fn with_subset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.subset_prefix = Some(prefix.into());
        self
    }

    #[inline]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[inline]
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    #[inline]
    pub fn with_char_space(mut self, char_space: f32) -> Self {
        self.char_space = char_space;
        self
    }

    /// Parse a configuration from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> FontResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every scaled width meaningless
    pub fn validate(&self) -> FontResult<()> {
        if !self.font_size.is_finite() || self.font_size < 0.0 {
            return Err(FontError::config_error_with_field(
                "font_size",
                format!("expected a non-negative size, got {}", self.font_size),
            ));
        }
        if !self.font_scale.is_finite() {
            return Err(FontError::config_error_with_field(
                "font_scale",
                "scale must be finite",
            ));
        }
        if !self.char_space.is_finite() {
            return Err(FontError::config_error_with_field(
                "char_space",
                "character spacing must be finite",
            ));
        }
        Ok(())
    }
}
