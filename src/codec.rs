//! Decode and encode against the filesystem.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality passthrough) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (`CompressionType::Best`) |
//! | Encode → TIFF | `image::codecs::tiff::TiffEncoder` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless) |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |
//!
//! Failures carry the path and cause, split by kind so callers can branch:
//! a missing source, an undecodable source, an unwritable destination, and
//! an encoder failure are distinct variants.

use crate::formats::OutputFormat;
use crate::params::Quality;
use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageReader};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to decode {}: {source}", .path.display())]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{format} encode failed for {}: {source}", .path.display())]
    EncodeFailed {
        format: OutputFormat,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load and decode an image from disk.
///
/// The content is sniffed rather than trusted from the extension, so a
/// mislabeled source still decodes. Input formats are whatever decoders the
/// `image` features compile in.
pub fn load_image(path: &Path) -> Result<DynamicImage, CodecError> {
    let reader = ImageReader::open(path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CodecError::SourceNotFound(path.to_path_buf()),
            _ => CodecError::Io(e),
        })?
        .with_guessed_format()
        .map_err(CodecError::Io)?;

    reader.decode().map_err(|e| CodecError::DecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode and write an image with format-specific parameters.
///
/// Quality feeds the lossy encoders (JPEG, AVIF); PNG recompresses at the
/// `Best` level; WebP and TIFF ignore quality. The image must already be
/// normalized to a layout the encoder accepts (see [`crate::normalize`]).
pub fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: OutputFormat,
    quality: Quality,
) -> Result<(), CodecError> {
    let file = std::fs::File::create(path).map_err(|e| CodecError::DestinationUnwritable {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let q = quality.value() as u8;

    let encoded = match format {
        OutputFormat::Jpeg => {
            img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, q))
        }
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new_with_quality(
            &mut writer,
            CompressionType::Best,
            FilterType::Adaptive,
        )),
        OutputFormat::Tiff => img.write_with_encoder(TiffEncoder::new(&mut writer)),
        OutputFormat::WebP => img.write_with_encoder(WebPEncoder::new_lossless(&mut writer)),
        OutputFormat::Avif => {
            img.write_with_encoder(AvifEncoder::new_with_speed_quality(&mut writer, 6, q))
        }
    };
    encoded.map_err(|e| CodecError::EncodeFailed {
        format,
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(CodecError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    #[test]
    fn load_nonexistent_file_is_source_not_found() {
        let err = load_image(Path::new("/nonexistent/image.jpg")).unwrap_err();
        assert!(matches!(err, CodecError::SourceNotFound(_)));
    }

    #[test]
    fn load_non_image_data_is_decode_failed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("not-an-image.jpg");
        std::fs::write(&path, b"definitely not pixels").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, CodecError::DecodeFailed { .. }));
    }

    #[test]
    fn save_to_missing_directory_is_destination_unwritable() {
        let err = save_image(
            &gradient(4, 4),
            Path::new("/nonexistent/dir/out.png"),
            OutputFormat::Png,
            Quality::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::DestinationUnwritable { .. }));
    }

    #[test]
    fn every_output_format_produces_a_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        for (ext, format) in [
            ("jpg", OutputFormat::Jpeg),
            ("png", OutputFormat::Png),
            ("tif", OutputFormat::Tiff),
            ("webp", OutputFormat::WebP),
            ("avif", OutputFormat::Avif),
        ] {
            let path = tmp.path().join(format!("out.{ext}"));
            save_image(&gradient(32, 24), &path, format, Quality::new(85)).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{ext} empty");
        }
    }

    #[test]
    fn jpeg_roundtrip_keeps_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        save_image(&gradient(200, 150), &path, OutputFormat::Jpeg, Quality::new(85)).unwrap();

        let reloaded = load_image(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (200, 150));
    }

    #[test]
    fn png_roundtrip_is_lossless() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let original = gradient(50, 40);
        save_image(&original, &path, OutputFormat::Png, Quality::new(85)).unwrap();

        let reloaded = load_image(&path).unwrap();
        assert_eq!(original.to_rgb8(), reloaded.to_rgb8());
    }

    #[test]
    fn load_sniffs_content_over_extension() {
        // PNG bytes behind a .jpg name still decode
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("mislabeled.jpg");
        save_image(&gradient(10, 10), &path, OutputFormat::Png, Quality::default()).unwrap();

        let reloaded = load_image(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (10, 10));
    }
}
