#[macro_use]
extern crate napi_derive;

pub mod engine;
pub mod error;
pub mod math;
pub mod source;
pub mod types;

use source::{FixtureProbe, FixtureSource};
use types::{AnalysisResult, ColorPair, PairCandidate, WcagPasses};

#[napi]
pub fn health_check() -> String {
    "contrast-scan-native ok".to_string()
}

/// WCAG 2.1 contrast ratio between two canonical hex colors.
/// Rejects malformed encodings instead of defaulting the ratio.
#[napi]
pub fn contrast_ratio(foreground: String, background: String) -> napi::Result<f64> {
    Ok(math::wcag::contrast_ratio(&foreground, &background)?)
}

/// Relative luminance of a canonical hex color, in [0, 1].
#[napi]
pub fn relative_luminance(color: String) -> napi::Result<f64> {
    Ok(math::wcag::relative_luminance(&color)?)
}

/// Pass/fail verdicts for a precomputed ratio against all four thresholds.
#[napi]
pub fn classify_ratio(ratio: f64) -> WcagPasses {
    math::wcag::check_wcag_thresholds(ratio)
}

/// Heatmap overlay color for a ratio (CSS rgba string).
#[napi]
pub fn heatmap_color(ratio: f64) -> String {
    math::heatmap::heatmap_color(ratio).to_string()
}

#[napi]
pub fn is_valid_url(url: String) -> bool {
    source::is_valid_url(&url)
}

/// Classify extraction candidates the JS side already holds.
#[napi]
pub fn classify_pairs(candidates: Vec<PairCandidate>) -> napi::Result<Vec<ColorPair>> {
    Ok(engine::classify_candidates(&candidates)?)
}

/// Demo path: run a full analysis against the fixture collaborators.
/// Production deployments inject real capture/extraction adapters through
/// `engine::analyze` instead.
#[napi]
pub fn analyze_with_fixtures(url: String) -> napi::Result<AnalysisResult> {
    Ok(engine::analyze(&url, &FixtureProbe, &FixtureSource)?)
}
