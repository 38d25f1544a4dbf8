//! Public resize entry points
//!
//! Composes decode → limit validation → planning → resampling. Two entry
//! shapes are exposed, mirroring the classic static-utility call: one taking
//! a file path and one taking an already-decoded image, each with a `_with`
//! variant accepting explicit options.

use std::path::Path;

use image::io::Reader as ImageReader;
use image::DynamicImage;

use crate::error::ResizeError;
use crate::executor;
use crate::limits::{validate_source_dimensions, validate_target_dimensions, ResizeLimits};
use crate::params::{ResampleFilter, ResizeMode};
use crate::planner;

/// Options accepted by the `_with` entry points
#[derive(Debug, Clone, Default)]
pub struct ResizeOptions {
    /// Convolution filter for the resampling backend
    pub filter: ResampleFilter,
    /// Safety limits applied before decode and planning
    pub limits: ResizeLimits,
}

/// Resize the image at `path` to the target dimensions under `mode`,
/// with default options
pub fn resize_file(
    path: impl AsRef<Path>,
    target_width: u32,
    target_height: u32,
    mode: ResizeMode,
) -> Result<DynamicImage, ResizeError> {
    resize_file_with(path, target_width, target_height, mode, &ResizeOptions::default())
}

/// Resize the image at `path` to the target dimensions under `mode`
pub fn resize_file_with(
    path: impl AsRef<Path>,
    target_width: u32,
    target_height: u32,
    mode: ResizeMode,
    options: &ResizeOptions,
) -> Result<DynamicImage, ResizeError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ResizeError::invalid_param("path", "path must not be empty"));
    }

    let source = decode_file(path, &options.limits)?;
    resize_image_with(&source, target_width, target_height, mode, options)
}

/// Resize an already-decoded image to the target dimensions under `mode`,
/// with default options
pub fn resize_image(
    source: &DynamicImage,
    target_width: u32,
    target_height: u32,
    mode: ResizeMode,
) -> Result<DynamicImage, ResizeError> {
    resize_image_with(source, target_width, target_height, mode, &ResizeOptions::default())
}

/// Resize an already-decoded image to the target dimensions under `mode`
///
/// Always allocates a fresh output image; the source is never mutated.
pub fn resize_image_with(
    source: &DynamicImage,
    target_width: u32,
    target_height: u32,
    mode: ResizeMode,
    options: &ResizeOptions,
) -> Result<DynamicImage, ResizeError> {
    validate_source_dimensions(source.width(), source.height(), &options.limits)?;
    validate_target_dimensions(target_width, target_height, &options.limits)?;

    let plan = planner::plan(
        source.width(),
        source.height(),
        target_width,
        target_height,
        mode,
    )?;

    tracing::debug!(
        source_width = source.width(),
        source_height = source.height(),
        dest_width = plan.dest_width,
        dest_height = plan.dest_height,
        mode = mode.as_str(),
        "planned resize"
    );

    // Nothing to resample when the plan is the identity
    if plan.dest_width == source.width()
        && plan.dest_height == source.height()
        && plan.is_full_source(source.width(), source.height())
    {
        return Ok(source.clone());
    }

    executor::execute(source, &plan, options.filter)
}

/// Decode an image file, running the dimension limits check on the header
/// before committing to the full decode
fn decode_file(path: &Path, limits: &ResizeLimits) -> Result<DynamicImage, ResizeError> {
    // Header-only probe: catches oversized sources before allocation
    let (width, height) = open_reader(path)?
        .into_dimensions()
        .map_err(|e| ResizeError::decode_failed(e.to_string()))?;
    validate_source_dimensions(width, height, limits)?;

    open_reader(path)?
        .decode()
        .map_err(|e| ResizeError::decode_failed(e.to_string()))
}

fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, ResizeError> {
    let reader = ImageReader::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ResizeError::not_found(path.display().to_string())
        } else {
            ResizeError::decode_failed(e.to_string())
        }
    })?;
    reader
        .with_guessed_format()
        .map_err(|e| ResizeError::decode_failed(e.to_string()))
}
