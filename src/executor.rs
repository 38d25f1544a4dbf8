//! Pixel resampling into the planned destination
//!
//! Mechanical half of the pipeline: builds fast_image_resize views for the
//! plan's crop rectangle and destination canvas and runs the convolution
//! resampler. All fitting policy lives in [`crate::planner`].

use std::num::NonZeroU32;

use fast_image_resize::{CropBox, FilterType, Image, PixelType, ResizeAlg, Resizer};
use image::DynamicImage;

use crate::error::ResizeError;
use crate::params::ResampleFilter;
use crate::planner::ResizePlan;

fn filter_type(filter: ResampleFilter) -> FilterType {
    match filter {
        ResampleFilter::Bilinear => FilterType::Bilinear,
        ResampleFilter::CatmullRom => FilterType::CatmullRom,
        ResampleFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

/// Clamp the plan's crop rectangle into the source bounds
///
/// The planner reports the raw centering arithmetic, which can step outside
/// the frame for extreme aspect-ratio mismatches. The resampling backend
/// rejects out-of-range crop boxes, so the excess is trimmed here.
fn clamp_crop(plan: &ResizePlan, source_width: u32, source_height: u32) -> CropBox {
    let max_w = source_width as i64;
    let max_h = source_height as i64;
    let left = plan.crop_x.max(0).min(max_w - 1);
    let top = plan.crop_y.max(0).min(max_h - 1);
    let width = plan.crop_width.max(1).min(max_w - left);
    let height = plan.crop_height.max(1).min(max_h - top);
    CropBox {
        left: left as u32,
        top: top as u32,
        width: NonZeroU32::new(width as u32).expect("clamped crop width is at least 1"),
        height: NonZeroU32::new(height as u32).expect("clamped crop height is at least 1"),
    }
}

/// Resample the plan's crop rectangle of `source` into a freshly allocated
/// destination image
///
/// The source is converted to RGBA8 and never mutated. Failures from the
/// resampling backend are surfaced unchanged as [`ResizeError::ResizeFailed`].
pub fn execute(
    source: &DynamicImage,
    plan: &ResizePlan,
    filter: ResampleFilter,
) -> Result<DynamicImage, ResizeError> {
    let src_width = NonZeroU32::new(source.width())
        .ok_or_else(|| ResizeError::resize_failed("source width is 0"))?;
    let src_height = NonZeroU32::new(source.height())
        .ok_or_else(|| ResizeError::resize_failed("source height is 0"))?;
    let dst_width = NonZeroU32::new(plan.dest_width)
        .ok_or_else(|| ResizeError::resize_failed("destination width is 0"))?;
    let dst_height = NonZeroU32::new(plan.dest_height)
        .ok_or_else(|| ResizeError::resize_failed("destination height is 0"))?;

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        source.to_rgba8().into_raw(),
        PixelType::U8x4,
    )
    .map_err(|e| ResizeError::resize_failed(format!("failed to create source view: {:?}", e)))?;

    let crop = clamp_crop(plan, source.width(), source.height());
    if (
        crop.left as i64,
        crop.top as i64,
        crop.width.get() as i64,
        crop.height.get() as i64,
    ) != (
        plan.crop_x,
        plan.crop_y,
        plan.crop_width,
        plan.crop_height,
    ) {
        tracing::warn!(
            crop_x = plan.crop_x,
            crop_y = plan.crop_y,
            crop_width = plan.crop_width,
            crop_height = plan.crop_height,
            "crop rectangle clamped to source bounds"
        );
    }

    let mut src_view = src_image.view();
    src_view
        .set_crop_box(crop)
        .map_err(|e| ResizeError::resize_failed(format!("invalid crop box: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(filter_type(filter)));
    resizer
        .resize(&src_view, &mut dst_image.view_mut())
        .map_err(|e| ResizeError::resize_failed(format!("resample failed: {:?}", e)))?;

    let result_buf = dst_image.into_vec();
    let rgba_image = image::RgbaImage::from_raw(plan.dest_width, plan.dest_height, result_buf)
        .ok_or_else(|| ResizeError::resize_failed("failed to create output buffer"))?;

    Ok(DynamicImage::ImageRgba8(rgba_image))
}
