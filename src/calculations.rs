//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions needed to fit inside a bounding box.
///
/// Returns `None` when the source already fits — the caller skips the resize
/// entirely, so images are never enlarged. Otherwise returns the largest
/// dimensions that fit within the box while preserving the source aspect
/// ratio (to integer rounding).
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Maximum allowed dimensions (width, height)
///
/// # Examples
/// ```
/// # use webshrink::calculations::calculate_fit_dimensions;
/// // 2400x1800 into a 1200x1200 box → 1200x900
/// assert_eq!(calculate_fit_dimensions((2400, 1800), (1200, 1200)), Some((1200, 900)));
///
/// // Already fits → no resize
/// assert_eq!(calculate_fit_dimensions((800, 600), (1200, 1200)), None);
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> Option<(u32, u32)> {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w <= max_w && src_h <= max_h {
        return None;
    }

    let scale = (max_w as f64 / src_w as f64).min(max_h as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    Some((w, h))
}
