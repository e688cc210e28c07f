//! Color-mode normalization ahead of encoding.
//!
//! Runs before any resizing. Sources with transparency headed for an
//! alpha-incompatible format are flattened (JPEG) or stripped (AVIF); other
//! sources are converted only when the target encoder cannot take their
//! sample layout. CMYK never reaches this module — the `image` crate's
//! decoders hand print-color sources over as RGB.

use crate::formats::OutputFormat;
use image::{ColorType, DynamicImage, Rgb, RgbImage, RgbaImage};

/// Normalize an image so the target encoder accepts it.
///
/// The input value is consumed; when no conversion is needed it is returned
/// untouched, otherwise a new image replaces it. Plain 8-bit RGB input
/// passes through unchanged for every format.
pub fn normalize_for_format(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    if img.color().has_alpha() && !format.supports_alpha() {
        return match format {
            // White matte: web pages default to white, so transparent
            // regions flatten to the page background.
            OutputFormat::Jpeg => DynamicImage::ImageRgb8(flatten_onto_white(&img.to_rgba8())),
            // AVIF output drops the alpha channel without compositing.
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        };
    }
    convert_for_encoder(img, format)
}

/// Composite an RGBA image over an opaque white canvas, using the alpha
/// channel as the blend mask. Fully transparent pixels become pure white.
pub fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let a = src[3] as u32;
        let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
        *dst = Rgb([blend(src[0]), blend(src[1]), blend(src[2])]);
    }
    out
}

/// Convert sample layouts the target encoder cannot take.
fn convert_for_encoder(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    match format {
        // JPEG encodes L8 and Rgb8 only
        OutputFormat::Jpeg => match img.color() {
            ColorType::L8 | ColorType::Rgb8 => img,
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        // Alpha was stripped above, so 8-bit RGB is always valid input
        OutputFormat::Avif => match img.color() {
            ColorType::Rgb8 => img,
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        // The lossless WebP encoder takes Rgb8 and Rgba8 only
        OutputFormat::WebP => match img.color() {
            ColorType::Rgb8 | ColorType::Rgba8 => img,
            _ if img.color().has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        },
        // PNG takes every integer layout; only float buffers need converting
        OutputFormat::Png => match img.color() {
            ColorType::Rgb32F => DynamicImage::ImageRgb16(img.to_rgb16()),
            ColorType::Rgba32F => DynamicImage::ImageRgba16(img.to_rgba16()),
            _ => img,
        },
        // TIFF takes L8/Rgb8/Rgba8 and their 16-bit forms, but not La
        OutputFormat::Tiff => match img.color() {
            ColorType::La8 => DynamicImage::ImageRgba8(img.to_rgba8()),
            ColorType::La16 => DynamicImage::ImageRgba16(img.to_rgba16()),
            ColorType::Rgb32F => DynamicImage::ImageRgb16(img.to_rgb16()),
            ColorType::Rgba32F => DynamicImage::ImageRgba16(img.to_rgba16()),
            _ => img,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 2x1 RGBA test image: fully transparent red, then opaque green.
    fn transparent_and_opaque() -> RgbaImage {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([200, 30, 30, 0]));
        img.put_pixel(1, 0, Rgba([10, 220, 10, 255]));
        img
    }

    #[test]
    fn flatten_turns_transparent_pixels_white() {
        let flat = flatten_onto_white(&transparent_and_opaque());
        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn flatten_keeps_opaque_pixels() {
        let flat = flatten_onto_white(&transparent_and_opaque());
        assert_eq!(flat.get_pixel(1, 0), &Rgb([10, 220, 10]));
    }

    #[test]
    fn flatten_blends_partial_alpha() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 128]));
        let flat = flatten_onto_white(&img);
        // black at ~50% over white lands mid-gray
        let px = flat.get_pixel(0, 0);
        assert!(px[0] > 120 && px[0] < 135, "got {px:?}");
    }

    #[test]
    fn jpeg_target_composites_alpha_over_white() {
        let img = DynamicImage::ImageRgba8(transparent_and_opaque());
        let normalized = normalize_for_format(img, OutputFormat::Jpeg);
        let rgb = normalized.as_rgb8().expect("flattened to Rgb8");
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn avif_target_strips_alpha_without_compositing() {
        let img = DynamicImage::ImageRgba8(transparent_and_opaque());
        let normalized = normalize_for_format(img, OutputFormat::Avif);
        let rgb = normalized.as_rgb8().expect("converted to Rgb8");
        // raw color survives where the JPEG branch would have painted white
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([200, 30, 30]));
    }

    #[test]
    fn opaque_rgb_passes_through_for_every_format() {
        for format in [
            OutputFormat::Jpeg,
            OutputFormat::Png,
            OutputFormat::Tiff,
            OutputFormat::WebP,
            OutputFormat::Avif,
        ] {
            let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([12, 34, 56])));
            let normalized = normalize_for_format(img, format);
            let rgb = normalized.as_rgb8().expect("still Rgb8");
            assert_eq!(rgb.get_pixel(1, 1), &Rgb([12, 34, 56]));
        }
    }

    #[test]
    fn alpha_survives_for_png_target() {
        let img = DynamicImage::ImageRgba8(transparent_and_opaque());
        let normalized = normalize_for_format(img, OutputFormat::Png);
        assert!(normalized.color().has_alpha());
    }

    #[test]
    fn grayscale_is_kept_for_jpeg() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([90])));
        let normalized = normalize_for_format(img, OutputFormat::Jpeg);
        assert_eq!(normalized.color(), ColorType::L8);
    }

    #[test]
    fn grayscale_is_expanded_for_webp() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([90])));
        let normalized = normalize_for_format(img, OutputFormat::WebP);
        assert_eq!(normalized.color(), ColorType::Rgb8);
    }
}
