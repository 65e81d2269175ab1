use napi_derive::napi;
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle in screenshot space.
/// Width/height are expected > 0 from the extraction collaborator.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// What the extraction collaborator hands over per measured region:
/// two canonical hex colors plus where in the screenshot they were sampled.
/// Unclassified; ratio and passes are derived by the engine.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCandidate {
    pub foreground: String,
    pub background: String,
    pub location: Region,
}

/// Pass/fail against the four WCAG 2.1 thresholds.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagPasses {
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AALarge")]
    pub aa_large: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AAALarge")]
    pub aaa_large: bool,
}

/// One classified region: candidate colors plus the derived contrast
/// ratio (rounded to 2 decimals for the wire) and threshold verdicts.
/// Immutable once produced: ratio is never set independently of the
/// colors it was derived from.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub passes: WcagPasses,
    pub location: Region,
}

/// Per-threshold pair counts.
#[napi(object)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    #[serde(rename = "AA")]
    pub aa: u32,
    #[serde(rename = "AALarge")]
    pub aa_large: u32,
    #[serde(rename = "AAA")]
    pub aaa: u32,
    #[serde(rename = "AAALarge")]
    pub aaa_large: u32,
}

/// Aggregate pass/fail counts over one analysis run.
/// Invariant: passing.L + failing.L == total for every level L.
#[napi(object)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u32,
    pub passing: LevelCounts,
    pub failing: LevelCounts,
}

/// Complete result of one analysis run. Built once, atomically, from a
/// finished list of classified pairs, never partially populated.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    /// Opaque image handle/URI supplied by the screenshot collaborator.
    pub screenshot: String,
    /// RFC 3339 UTC, generated when the result is assembled.
    pub timestamp: String,
    pub color_pairs: Vec<ColorPair>,
    pub summary: Summary,
}
