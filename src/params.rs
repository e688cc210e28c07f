//! Parameter types for the optimize operation.
//!
//! [`OptimizeParams`] describes *what* to do — source, destination, bounding
//! box, quality — and is the interface between callers (the CLI, tests,
//! library users) and the [`optimize`](crate::optimize) pipeline.

use std::path::PathBuf;

/// Bounding box applied when the caller does not choose one.
pub const DEFAULT_MAX_SIZE: (u32, u32) = (1200, 1200);

/// Quality setting for lossy image encoding (1-100).
///
/// Lossless encoders ignore it without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Full specification for one optimize call.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeParams {
    pub source: PathBuf,
    /// Destination path; its extension selects the output format.
    pub output: PathBuf,
    /// Maximum output dimensions. `None` disables resizing entirely;
    /// the image is never enlarged either way.
    pub max_size: Option<(u32, u32)>,
    pub quality: Quality,
}

impl OptimizeParams {
    /// Params with the stock bounding box and quality.
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            max_size: Some(DEFAULT_MAX_SIZE),
            quality: Quality::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(50).value(), 50);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_80() {
        assert_eq!(Quality::default().value(), 80);
    }

    #[test]
    fn new_params_carry_stock_defaults() {
        let params = OptimizeParams::new("in.jpg", "out.webp");
        assert_eq!(params.max_size, Some((1200, 1200)));
        assert_eq!(params.quality.value(), 80);
    }
}
