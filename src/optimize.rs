//! The optimize pipeline: decode → normalize → fit → encode → report.
//!
//! Execution is strictly linear: one conditional branch for color-mode
//! handling, one optional branch for resizing. No loops, no retries, no
//! intermediate state. The decoded image is an owned value dropped when the
//! call returns, success or failure.

use crate::calculations::calculate_fit_dimensions;
use crate::codec::{self, CodecError};
use crate::formats::{FormatError, OutputFormat};
use crate::normalize::normalize_for_format;
use crate::params::OptimizeParams;
use image::imageops::FilterType;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Before/after statistics for one optimize call.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeReport {
    pub format: OutputFormat,
    /// Output dimensions after any resize.
    pub width: u32,
    pub height: u32,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl OptimizeReport {
    pub fn original_kb(&self) -> f64 {
        self.original_bytes as f64 / 1024.0
    }

    pub fn compressed_kb(&self) -> f64 {
        self.compressed_bytes as f64 / 1024.0
    }

    /// Size reduction relative to the source file, in percent.
    /// Negative when the output came out larger than the source.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.compressed_bytes as f64 / self.original_bytes as f64) * 100.0
    }
}

/// Resize and re-encode one image for web delivery.
///
/// 1. Resolve the output format from the destination extension.
/// 2. Decode the source.
/// 3. Normalize color mode for the target format (alpha flattening for
///    JPEG, alpha strip for AVIF, encoder-compatibility conversions).
/// 4. Downsample to fit the bounding box, if one is set and the image
///    exceeds it. Never enlarges.
/// 5. Encode with format-specific parameters and stat both files.
///
/// The format check and decode both run before the destination is touched,
/// so no output file appears for an unsupported extension or a bad source.
/// A failure mid-encode may leave a partial file behind; nothing cleans it
/// up.
pub fn optimize(params: &OptimizeParams) -> Result<OptimizeReport, OptimizeError> {
    let format = OutputFormat::from_path(&params.output)?;
    let img = codec::load_image(&params.source)?;
    let img = normalize_for_format(img, format);

    let img = match params
        .max_size
        .and_then(|bounds| calculate_fit_dimensions((img.width(), img.height()), bounds))
    {
        Some((w, h)) => img.resize_exact(w, h, FilterType::Lanczos3),
        None => img,
    };

    codec::save_image(&img, &params.output, format, params.quality)?;

    let original_bytes = std::fs::metadata(&params.source)?.len();
    let compressed_bytes = std::fs::metadata(&params.output)?.len();

    Ok(OptimizeReport {
        format,
        width: img.width(),
        height: img.height(),
        original_bytes,
        compressed_bytes,
    })
}
