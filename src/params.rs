//! Resize request parameters
//!
//! `ResizeMode` selects the fitting policy; `ResampleFilter` selects the
//! convolution filter handed to the resampling backend.

use std::str::FromStr;

use crate::error::ResizeError;

/// How to fit the source image into the target dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeMode {
    /// Crop to fill the target exactly, preserving aspect ratio (default)
    #[default]
    Cover,
    /// Scale to fit within the target, preserving aspect ratio; the result
    /// may be smaller than requested on one axis
    Contain,
    /// Stretch to the exact target dimensions (may distort)
    Stretch,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Stretch => "stretch",
        }
    }
}

impl FromStr for ResizeMode {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cover" => Ok(ResizeMode::Cover),
            "contain" => Ok(ResizeMode::Contain),
            "stretch" => Ok(ResizeMode::Stretch),
            _ => Err(ResizeError::invalid_param(
                "mode",
                format!("unknown resize mode: {}", s),
            )),
        }
    }
}

/// Convolution filter used by the resampling backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    /// Bilinear interpolation, fastest
    Bilinear,
    /// Catmull-Rom (bicubic) interpolation, high quality (default)
    #[default]
    CatmullRom,
    /// Lanczos3 windowed sinc, sharpest
    Lanczos3,
}

impl ResampleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::CatmullRom => "catmullrom",
            Self::Lanczos3 => "lanczos3",
        }
    }
}

impl FromStr for ResampleFilter {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bilinear" => Ok(ResampleFilter::Bilinear),
            "catmullrom" | "bicubic" => Ok(ResampleFilter::CatmullRom),
            "lanczos3" | "lanczos" => Ok(ResampleFilter::Lanczos3),
            _ => Err(ResizeError::invalid_param(
                "filter",
                format!("unknown resample filter: {}", s),
            )),
        }
    }
}
