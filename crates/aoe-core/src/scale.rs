//! Millimetre-to-pixel scale model.
//!
//! Only the millimetre inputs and the scale factor are stored. Every pixel
//! value is computed on read, so a caller can never observe a pixel size
//! that disagrees with the current inputs.

use crate::constants::{
    DEFAULT_BASE_SIZE_MM, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SCALE_FACTOR,
    DEFAULT_TEMPLATE_SIZE_MM,
};
use crate::error::ParseError;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    pub base_size: f32,
    pub rows: u32,
    pub columns: u32,
    pub template_size: f32,
    pub scale_factor: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE_MM,
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            template_size: DEFAULT_TEMPLATE_SIZE_MM,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl ScaleConfig {
    #[inline]
    pub fn base_size_px(&self) -> f32 {
        self.base_size * self.scale_factor
    }

    #[inline]
    pub fn regiment_width_px(&self) -> f32 {
        self.columns as f32 * self.base_size_px()
    }

    #[inline]
    pub fn regiment_height_px(&self) -> f32 {
        self.rows as f32 * self.base_size_px()
    }

    #[inline]
    pub fn template_size_px(&self) -> f32 {
        self.template_size * self.scale_factor
    }

    /// Classification radius: half the template diameter.
    #[inline]
    pub fn template_radius_px(&self) -> f32 {
        self.template_size_px() * 0.5
    }

    #[inline]
    pub fn half_base_px(&self) -> f32 {
        self.base_size_px() * 0.5
    }

    pub fn regiment_size_px(&self) -> Vec2 {
        Vec2::new(self.regiment_width_px(), self.regiment_height_px())
    }

    pub fn get(&self, field: ScaleField) -> f32 {
        match field {
            ScaleField::BaseSize => self.base_size,
            ScaleField::Rows => self.rows as f32,
            ScaleField::Columns => self.columns as f32,
            ScaleField::TemplateSize => self.template_size,
            ScaleField::ScaleFactor => self.scale_factor,
        }
    }

    /// Set one input. Counts are truncated toward zero; negative counts
    /// saturate to zero. Sizes are taken as given.
    pub fn set(&mut self, field: ScaleField, value: f32) {
        match field {
            ScaleField::BaseSize => self.base_size = value,
            ScaleField::Rows => self.rows = value as u32,
            ScaleField::Columns => self.columns = value as u32,
            ScaleField::TemplateSize => self.template_size = value,
            ScaleField::ScaleFactor => self.scale_factor = value,
        }
    }

    /// Parse text typed into a control and apply it.
    pub fn set_from_str(&mut self, field: ScaleField, text: &str) -> Result<(), ParseError> {
        let value = text
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                field: field.as_str(),
                value: text.to_string(),
            })?;
        self.set(field, value);
        Ok(())
    }
}

/// The five user-tunable inputs, named as the page's controls name them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleField {
    BaseSize,
    Rows,
    Columns,
    TemplateSize,
    ScaleFactor,
}

impl ScaleField {
    pub const ALL: [ScaleField; 5] = [
        ScaleField::BaseSize,
        ScaleField::Rows,
        ScaleField::Columns,
        ScaleField::TemplateSize,
        ScaleField::ScaleFactor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleField::BaseSize => "baseSize",
            ScaleField::Rows => "rows",
            ScaleField::Columns => "columns",
            ScaleField::TemplateSize => "templateSize",
            ScaleField::ScaleFactor => "scaleFactor",
        }
    }

    /// True when a change to this field moves or resizes the bases.
    pub fn affects_layout(self) -> bool {
        !matches!(self, ScaleField::TemplateSize)
    }
}

impl fmt::Display for ScaleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}
