use crate::error::AnalysisError;

/// Parse the canonical color encoding to RGB channels (0-255).
///
/// Canonical form: exactly 6 hex digits, case-insensitive, optional `#`
/// prefix. Anything else (3-digit shorthand, 8-digit alpha, non-hex
/// characters) is rejected as `MalformedColor`, never coerced to black
/// or a default ratio downstream.
pub fn parse_hex_rgb(hex: &str) -> Result<(u8, u8, u8), AnalysisError> {
    let raw = hex.strip_prefix('#').unwrap_or(hex);
    // from_str_radix alone would admit sign characters like "+f"
    if raw.len() != 6 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AnalysisError::MalformedColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&raw[range], 16)
            .map_err(|_| AnalysisError::MalformedColor(hex.to_string()))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Ok((r, g, b))
}
