//! Output format resolution.
//!
//! The output path's extension is the sole source of truth for the target
//! format. It is resolved through an explicit table rather than handed to an
//! encoder blind, so an extension without a compiled-in encoder is a defined
//! error instead of a late encode failure.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("output path has no file extension: {}", .0.display())]
    MissingExtension(PathBuf),
    #[error("unsupported output extension: .{0}")]
    UnsupportedExtension(String),
}

/// Extensions whose encoders are compiled in.
///
/// AVIF encoding comes from the `image` crate's `"avif"` feature (rav1e).
/// The matching decoder is not compiled in, so AVIF is output-only here.
const OUTPUT_CANDIDATES: &[(&str, OutputFormat)] = &[
    ("jpg", OutputFormat::Jpeg),
    ("jpeg", OutputFormat::Jpeg),
    ("png", OutputFormat::Png),
    ("tif", OutputFormat::Tiff),
    ("tiff", OutputFormat::Tiff),
    ("webp", OutputFormat::WebP),
    ("avif", OutputFormat::Avif),
];

/// Target encoding format, resolved from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Jpeg,
    Png,
    Tiff,
    WebP,
    Avif,
}

impl OutputFormat {
    /// Resolve the format for a path, matching the extension case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| FormatError::MissingExtension(path.to_path_buf()))?;

        OUTPUT_CANDIDATES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
            .map(|(_, format)| *format)
            .ok_or_else(|| FormatError::UnsupportedExtension(ext.to_ascii_lowercase()))
    }

    /// Whether the encoder carries an alpha channel through.
    ///
    /// AVIF output is written without alpha, so sources with transparency
    /// are normalized to opaque RGB first (see [`crate::normalize`]).
    pub fn supports_alpha(self) -> bool {
        matches!(self, Self::Png | Self::Tiff | Self::WebP)
    }

    /// Whether the encoder consumes the quality parameter.
    ///
    /// The `image` crate's `"webp"` feature encodes lossless only, so WebP
    /// sits with the lossless formats and ignores quality.
    pub fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg | Self::Avif)
    }

    /// Canonical name as reported in console output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Tiff => "TIFF",
            Self::WebP => "WebP",
            Self::Avif => "AVIF",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
