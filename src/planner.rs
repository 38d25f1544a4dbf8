//! Resize geometry planning
//!
//! Pure arithmetic: derives the destination canvas and the source crop
//! rectangle for a resize request. No pixel work happens here, which keeps
//! the branching logic testable without touching a decoder or resampler.

use crate::error::ResizeError;
use crate::params::ResizeMode;

/// Geometry for a single resize request
///
/// `dest_width`/`dest_height` is the canvas to allocate; the `crop_*`
/// fields are the source sub-rectangle to resample from. Cover-mode crops
/// come straight out of the centering arithmetic and are not clamped to
/// the source bounds; clamping happens at the resampling boundary in
/// [`crate::executor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub dest_width: u32,
    pub dest_height: u32,
    pub crop_x: i64,
    pub crop_y: i64,
    pub crop_width: i64,
    pub crop_height: i64,
}

impl ResizePlan {
    /// True when the crop covers the whole source frame
    pub fn is_full_source(&self, source_width: u32, source_height: u32) -> bool {
        self.crop_x == 0
            && self.crop_y == 0
            && self.crop_width == source_width as i64
            && self.crop_height == source_height as i64
    }

    fn full_source(dest_width: u32, dest_height: u32, source_width: u32, source_height: u32) -> Self {
        Self {
            dest_width,
            dest_height,
            crop_x: 0,
            crop_y: 0,
            crop_width: source_width as i64,
            crop_height: source_height as i64,
        }
    }
}

/// Compute the resize geometry for the given source size, target size, and mode
///
/// Fails with [`ResizeError::InvalidDimensions`] when any dimension is zero.
///
/// Ratio arithmetic is f64 throughout. Contain destinations truncate toward
/// zero; Cover scaled dimensions and crop sizes round to nearest (ties away
/// from zero) while the crop offsets truncate. Downstream dimension parity
/// depends on this exact mix of roundings.
pub fn plan(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
    mode: ResizeMode,
) -> Result<ResizePlan, ResizeError> {
    if source_width == 0 || source_height == 0 {
        return Err(ResizeError::invalid_dimensions(
            source_width,
            source_height,
            "source dimensions must be greater than zero",
        ));
    }
    if target_width == 0 || target_height == 0 {
        return Err(ResizeError::invalid_dimensions(
            target_width,
            target_height,
            "target dimensions must be greater than zero",
        ));
    }

    let width_ratio = target_width as f64 / source_width as f64;
    let height_ratio = target_height as f64 / source_height as f64;

    let plan = match mode {
        // Exact target dimensions, no regard for aspect ratio
        ResizeMode::Stretch => {
            ResizePlan::full_source(target_width, target_height, source_width, source_height)
        }

        // As large as possible within the target box, aspect ratio kept
        ResizeMode::Contain => {
            let ratio = width_ratio.min(height_ratio);
            ResizePlan::full_source(
                (source_width as f64 * ratio) as u32,
                (source_height as f64 * ratio) as u32,
                source_width,
                source_height,
            )
        }

        // Fill the target box exactly, cropping the overflow symmetrically
        ResizeMode::Cover => {
            let ratio = width_ratio.max(height_ratio);

            // Source scaled by `ratio` covers the target on both axes
            let scaled_x = (source_width as f64 * ratio).round() as i64;
            let scaled_y = (source_height as f64 * ratio).round() as i64;

            let overshoot_x = (scaled_x - target_width as i64) as f64;
            let overshoot_y = (scaled_y - target_height as i64) as f64;

            ResizePlan {
                dest_width: target_width,
                dest_height: target_height,
                // Half the overshoot, mapped back into source pixels
                crop_x: (overshoot_x / 2.0 / ratio) as i64,
                crop_y: (overshoot_y / 2.0 / ratio) as i64,
                crop_width: source_width as i64 - (overshoot_x / ratio).round() as i64,
                crop_height: source_height as i64 - (overshoot_y / ratio).round() as i64,
            }
        }
    };

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stretch_honors_exact_target() {
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Stretch).unwrap();
        assert_eq!(plan.dest_width, 250);
        assert_eq!(plan.dest_height, 200);
        assert!(plan.is_full_source(4000, 3000));
    }

    #[test]
    fn test_stretch_enlarge() {
        let plan = plan(120, 80, 1920, 1080, ResizeMode::Stretch).unwrap();
        assert_eq!((plan.dest_width, plan.dest_height), (1920, 1080));
    }

    #[test]
    fn test_contain_shrink_is_ratio_limited() {
        // 4000x3000 into 250x200: width ratio 0.0625 wins, height floors to 187
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Contain).unwrap();
        assert_eq!((plan.dest_width, plan.dest_height), (250, 187));
        assert!(plan.is_full_source(4000, 3000));
    }

    #[test]
    fn test_contain_enlarge_is_ratio_limited() {
        // 4:3 source into 1920x1080: height ratio wins
        let plan = plan(400, 300, 1920, 1080, ResizeMode::Contain).unwrap();
        assert_eq!((plan.dest_width, plan.dest_height), (1440, 1080));
    }

    #[test]
    fn test_contain_never_exceeds_target_box() {
        for (sw, sh) in [(4000, 3000), (3000, 4000), (100, 100), (1, 999)] {
            let plan = plan(sw, sh, 250, 200, ResizeMode::Contain).unwrap();
            assert!(plan.dest_width <= 250);
            assert!(plan.dest_height <= 200);
        }
    }

    #[test]
    fn test_contain_preserves_aspect_ratio() {
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Contain).unwrap();
        let dest_aspect = plan.dest_width as f64 / plan.dest_height as f64;
        let src_aspect = 4000.0 / 3000.0;
        assert!((dest_aspect - src_aspect).abs() < 0.01);
    }

    #[test]
    fn test_cover_honors_exact_target() {
        for (sw, sh) in [(4000, 3000), (3000, 4000), (251, 199), (10, 10)] {
            let plan = plan(sw, sh, 250, 200, ResizeMode::Cover).unwrap();
            assert_eq!((plan.dest_width, plan.dest_height), (250, 200));
        }
    }

    #[test]
    fn test_cover_shrink_known_geometry() {
        // 4000x3000 into 250x200: height ratio 1/15 dominates, the width
        // overflow is cropped symmetrically
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Cover).unwrap();
        assert_eq!((plan.dest_width, plan.dest_height), (250, 200));
        assert_eq!(plan.crop_x, 127);
        assert_eq!(plan.crop_y, 0);
        assert_eq!(plan.crop_width, 3745);
        assert_eq!(plan.crop_height, 3000);
    }

    #[test]
    fn test_cover_crop_is_centered() {
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Cover).unwrap();
        let left_margin = plan.crop_x;
        let right_margin = 4000 - (plan.crop_x + plan.crop_width);
        assert!((left_margin - right_margin).abs() <= 1);
    }

    #[test]
    fn test_cover_crop_matches_target_aspect() {
        let plan = plan(4000, 3000, 250, 200, ResizeMode::Cover).unwrap();
        let crop_aspect = plan.crop_width as f64 / plan.crop_height as f64;
        let target_aspect = 250.0 / 200.0;
        assert!((crop_aspect - target_aspect).abs() < 0.01);
    }

    #[test]
    fn test_cover_same_aspect_needs_no_crop() {
        let plan = plan(1000, 800, 250, 200, ResizeMode::Cover).unwrap();
        assert!(plan.is_full_source(1000, 800));
    }

    #[test]
    fn test_planning_is_deterministic() {
        let a = plan(1920, 1080, 300, 300, ResizeMode::Cover).unwrap();
        let b = plan(1920, 1080, 300, 300, ResizeMode::Cover).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_source_dimension_is_rejected() {
        for (sw, sh) in [(0, 100), (100, 0), (0, 0)] {
            let result = plan(sw, sh, 100, 100, ResizeMode::Stretch);
            assert!(matches!(
                result,
                Err(ResizeError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_zero_target_dimension_is_rejected() {
        for mode in [ResizeMode::Stretch, ResizeMode::Contain, ResizeMode::Cover] {
            let result = plan(100, 100, 0, 100, mode);
            assert!(matches!(
                result,
                Err(ResizeError::InvalidDimensions { .. })
            ));
            let result = plan(100, 100, 100, 0, mode);
            assert!(matches!(
                result,
                Err(ResizeError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_contain_extreme_shrink_can_floor_to_zero() {
        // The truncating arithmetic reports a zero-height destination for a
        // degenerate shrink; allocation rejects it downstream
        let plan = plan(10000, 10, 5, 5, ResizeMode::Contain).unwrap();
        assert_eq!(plan.dest_width, 5);
        assert_eq!(plan.dest_height, 0);
    }

    #[test]
    fn test_cover_extreme_aspect_mismatch_collapses_crop() {
        // 1000x1 into 2x5: the centering arithmetic runs off the frame and
        // the crop width collapses to zero; the plan reports the raw values
        let plan = plan(1000, 1, 2, 5, ResizeMode::Cover).unwrap();
        assert_eq!((plan.dest_width, plan.dest_height), (2, 5));
        assert_eq!(plan.crop_width, 0);
        assert_eq!(plan.crop_x, 499);
    }
}
