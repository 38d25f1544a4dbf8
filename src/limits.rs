//! Source and target dimension limits
//!
//! Dimension validation runs BEFORE the full decode so that a small file
//! claiming huge dimensions cannot force an enormous allocation.

use serde::{Deserialize, Serialize};

use crate::error::ResizeError;

/// Safety limits applied to resize requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResizeLimits {
    /// Maximum allowed source image width
    #[serde(default = "default_max_source_width")]
    pub max_source_width: u32,

    /// Maximum allowed source image height
    #[serde(default = "default_max_source_height")]
    pub max_source_height: u32,

    /// Maximum allowed total source pixels (width * height)
    #[serde(default = "default_max_source_pixels")]
    pub max_source_pixels: u64,

    /// Maximum allowed target width
    #[serde(default = "default_max_target_width")]
    pub max_target_width: u32,

    /// Maximum allowed target height
    #[serde(default = "default_max_target_height")]
    pub max_target_height: u32,
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self {
            max_source_width: 10000,
            max_source_height: 10000,
            max_source_pixels: 100_000_000, // 100 megapixels
            max_target_width: 4096,
            max_target_height: 4096,
        }
    }
}

fn default_max_source_width() -> u32 {
    10000
}

fn default_max_source_height() -> u32 {
    10000
}

fn default_max_source_pixels() -> u64 {
    100_000_000
}

fn default_max_target_width() -> u32 {
    4096
}

fn default_max_target_height() -> u32 {
    4096
}

/// Validate source image dimensions against the configured limits
pub fn validate_source_dimensions(
    width: u32,
    height: u32,
    limits: &ResizeLimits,
) -> Result<(), ResizeError> {
    if width > limits.max_source_width || height > limits.max_source_height {
        return Err(ResizeError::source_too_large(
            width,
            height,
            limits.max_source_pixels,
        ));
    }

    let pixels = width as u64 * height as u64;
    if pixels > limits.max_source_pixels {
        return Err(ResizeError::source_too_large(
            width,
            height,
            limits.max_source_pixels,
        ));
    }

    Ok(())
}

/// Validate requested target dimensions against the configured limits
pub fn validate_target_dimensions(
    width: u32,
    height: u32,
    limits: &ResizeLimits,
) -> Result<(), ResizeError> {
    if width > limits.max_target_width || height > limits.max_target_height {
        return Err(ResizeError::invalid_dimensions(
            width,
            height,
            format!(
                "exceeds maximum target size {}x{}",
                limits.max_target_width, limits.max_target_height
            ),
        ));
    }
    Ok(())
}
