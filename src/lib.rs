//! # webshrink
//!
//! Resize and re-encode a single image for web delivery. One call decodes
//! the source, normalizes its color mode for the target format, downsamples
//! it to fit a bounding box (never enlarging), and writes it back out with
//! format-specific compression parameters, reporting the size reduction.
//!
//! ```text
//! decode  →  normalize mode  →  fit bounding box  →  encode  →  report
//! ```
//!
//! The output format is chosen by the destination extension through an
//! explicit table — jpg/jpeg, png, tif/tiff, webp, avif — and anything else
//! is a typed error, not a pass-through.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`formats`] | Output format enum + extension mapping table |
//! | [`params`] | [`OptimizeParams`] and the clamped [`Quality`] newtype |
//! | [`calculations`] | Pure fit-within-bounding-box dimension math |
//! | [`normalize`] | Color-mode policy: alpha flattening, alpha strip, encoder compatibility |
//! | [`codec`] | Decode from disk, per-format encode, on-disk error taxonomy |
//! | [`optimize`] | The linear pipeline producing an [`OptimizeReport`] |
//! | [`output`] | Console report formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging
//!
//! Everything runs on the `image` crate's pure-Rust codecs (Lanczos3
//! resampling, rav1e for AVIF encoding). No ImageMagick, no libvips, no
//! system dependencies: the binary is fully self-contained.
//!
//! ## Transparency Policy
//!
//! JPEG output composites transparent sources over an opaque white canvas,
//! so regions that were see-through land on the usual page background.
//! AVIF output converts straight to RGB and discards alpha without
//! compositing. PNG, TIFF, and WebP keep the alpha channel.
//!
//! ## AVIF Is Output-Only
//!
//! The `image` crate's `"avif"` feature enables the rav1e **encoder** only;
//! decoding AVIF would pull in a native library. Sources must be in a
//! format with a compiled-in decoder (JPEG, PNG, TIFF, WebP, and friends).

pub mod calculations;
pub mod codec;
pub mod formats;
pub mod normalize;
pub mod optimize;
pub mod output;
pub mod params;

pub use codec::CodecError;
pub use formats::{FormatError, OutputFormat};
pub use optimize::{OptimizeError, OptimizeReport, optimize};
pub use params::{DEFAULT_MAX_SIZE, OptimizeParams, Quality};
