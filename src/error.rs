//! Resize error types
//!
//! Structured error handling for the planning and resampling pipeline,
//! with helper constructors for the common failure paths.

use std::fmt;

/// Errors that can occur while planning or executing a resize
#[derive(Debug, Clone)]
pub enum ResizeError {
    // === Input Errors ===
    /// Invalid caller-supplied parameter (empty path, unknown mode name, etc.)
    InvalidParameter { param: String, message: String },
    /// Source or target dimensions are unusable
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },
    /// Source dimensions exceed the configured safety limits
    SourceTooLarge {
        width: u32,
        height: u32,
        pixels: u64,
        max_pixels: u64,
    },

    // === Decode Errors ===
    /// Path does not reference an existing file
    NotFound { path: String },
    /// File exists but its content cannot be decoded as a known image format
    DecodeFailed { message: String },

    // === Resample Errors ===
    /// The resampling backend reported a failure
    ResizeFailed { message: String },
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Input errors
            ResizeError::InvalidParameter { param, message } => {
                write!(f, "Invalid parameter '{}': {}", param, message)
            }
            ResizeError::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid dimensions {}x{}: {}", width, height, reason)
            }
            ResizeError::SourceTooLarge {
                width,
                height,
                pixels,
                max_pixels,
            } => {
                write!(
                    f,
                    "Source dimensions {}x{} ({} pixels) exceed limit of {} pixels",
                    width, height, pixels, max_pixels
                )
            }

            // Decode errors
            ResizeError::NotFound { path } => {
                write!(f, "File not found: {}", path)
            }
            ResizeError::DecodeFailed { message } => {
                write!(f, "Failed to decode image: {}", message)
            }

            // Resample errors
            ResizeError::ResizeFailed { message } => {
                write!(f, "Resize failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ResizeError {}

impl ResizeError {
    /// Helper constructors for common error patterns
    pub fn invalid_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        ResizeError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        ResizeError::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    pub fn source_too_large(width: u32, height: u32, max_pixels: u64) -> Self {
        ResizeError::SourceTooLarge {
            width,
            height,
            pixels: width as u64 * height as u64,
            max_pixels,
        }
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        ResizeError::NotFound { path: path.into() }
    }

    pub fn decode_failed(message: impl Into<String>) -> Self {
        ResizeError::DecodeFailed {
            message: message.into(),
        }
    }

    pub fn resize_failed(message: impl Into<String>) -> Self {
        ResizeError::ResizeFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_display() {
        let err = ResizeError::invalid_param("path", "path must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'path': path must not be empty"
        );
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = ResizeError::invalid_dimensions(0, 200, "width must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0x200: width must be greater than zero"
        );
    }

    #[test]
    fn test_source_too_large_display() {
        let err = ResizeError::source_too_large(10000, 10000, 50_000_000);
        assert!(err.to_string().contains("100000000 pixels"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ResizeError::not_found("/tmp/missing.jpg");
        assert_eq!(err.to_string(), "File not found: /tmp/missing.jpg");
    }

    #[test]
    fn test_decode_failed_display() {
        let err = ResizeError::decode_failed("invalid header");
        assert_eq!(err.to_string(), "Failed to decode image: invalid header");
    }

    #[test]
    fn test_resize_failed_display() {
        let err = ResizeError::resize_failed("out of memory");
        assert_eq!(err.to_string(), "Resize failed: out of memory");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResizeError>();
    }
}
