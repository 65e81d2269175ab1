use crate::error::AnalysisError;
use crate::types::WcagPasses;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
/// (0.03928 is the WCAG 2.x published constant.)
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.1.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
///
/// Result is in [0, 1]: 0 for #000000, 1 for #ffffff.
pub fn relative_luminance(hex: &str) -> Result<f64, AnalysisError> {
    let (r, g, b) = super::hex::parse_hex_rgb(hex)?;
    Ok(0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b))
}

/// Calculate WCAG 2.1 contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// Symmetric in its arguments; range [1, 21]. A malformed color is an
/// error, not a silent ratio of 1 (which would be indistinguishable from
/// two identical colors).
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Result<f64, AnalysisError> {
    let l1 = relative_luminance(hex1)?;
    let l2 = relative_luminance(hex2)?;
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    Ok((lighter + 0.05) / (darker + 0.05))
}

/// Determine pass/fail for all four WCAG thresholds.
///
/// Each is an independent inclusive lower bound. AA-normal and AAA-large
/// share the same 4.5 bound in WCAG 2.1.
pub fn check_wcag_thresholds(ratio: f64) -> WcagPasses {
    WcagPasses {
        aa: ratio >= 4.5,
        aa_large: ratio >= 3.0,
        aaa: ratio >= 7.0,
        aaa_large: ratio >= 4.5,
    }
}
