//! Collaborator seams for an analysis run.
//!
//! The engine never talks to a browser or an image segmenter directly:
//! it takes one injectable `PairSource` (screenshot capture + color-pair
//! extraction) and one `ReachabilityProbe`. Production adapters (headless
//! Chrome, real region clustering) live outside this crate; the fixture
//! adapters below back the demo frontend and the tests.

use crate::error::AnalysisError;
use crate::types::{AnalysisResult, PairCandidate, Region};

/// Reports whether a target URL answers at all. Consulted before any
/// extraction is attempted.
pub trait ReachabilityProbe {
    fn is_reachable(&self, url: &str) -> Result<bool, AnalysisError>;
}

/// Supplies a screenshot handle and the per-region color-pair candidates
/// extracted from it. A failure here surfaces as `ExtractionFailed`.
pub trait PairSource {
    fn capture_screenshot(&self, url: &str) -> Result<String, AnalysisError>;
    fn color_pairs(&self, url: &str, screenshot: &str) -> Result<Vec<PairCandidate>, AnalysisError>;
}

/// Write-once persistence seam. The engine stores a finished result and
/// never reads it back.
pub trait ResultSink {
    fn store(&self, result: &AnalysisResult) -> Result<(), AnalysisError>;
}

/// Syntactic URL check: http/https scheme with a non-empty host part.
pub fn is_valid_url(url: &str) -> bool {
    let rest = if let Some(r) = url.strip_prefix("https://") {
        r
    } else if let Some(r) = url.strip_prefix("http://") {
        r
    } else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty()
}

/// Demo/test probe: every URL answers unless it mentions `notfound` or
/// `error` (the frontend's canned failure cases).
pub struct FixtureProbe;

impl ReachabilityProbe for FixtureProbe {
    fn is_reachable(&self, url: &str) -> Result<bool, AnalysisError> {
        Ok(!url.contains("notfound") && !url.contains("error"))
    }
}

/// Demo/test source: a fixed candidate table standing in for headless
/// browser capture plus region extraction. URL-independent.
pub struct FixtureSource;

impl FixtureSource {
    fn candidate(fg: &str, bg: &str, x: u32, y: u32, width: u32, height: u32) -> PairCandidate {
        PairCandidate {
            foreground: fg.to_string(),
            background: bg.to_string(),
            location: Region {
                x,
                y,
                width,
                height,
            },
        }
    }
}

impl PairSource for FixtureSource {
    fn capture_screenshot(&self, url: &str) -> Result<String, AnalysisError> {
        Ok(format!(
            "https://placehold.co/800x600/18181b/f8fafc?text=Screenshot+of+{url}"
        ))
    }

    fn color_pairs(
        &self,
        _url: &str,
        _screenshot: &str,
    ) -> Result<Vec<PairCandidate>, AnalysisError> {
        Ok(vec![
            Self::candidate("#FFFFFF", "#121212", 20, 30, 100, 50),
            Self::candidate("#FFD700", "#000000", 150, 80, 120, 40),
            Self::candidate("#CCCCCC", "#767676", 40, 150, 200, 30),
            Self::candidate("#336699", "#FFFFFF", 300, 220, 150, 60),
            Self::candidate("#FF0000", "#FFFFFF", 100, 300, 80, 40),
        ])
    }
}
