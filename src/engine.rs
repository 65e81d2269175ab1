use chrono::Utc;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::math::wcag;
use crate::source::{PairSource, ReachabilityProbe};
use crate::types::{AnalysisResult, ColorPair, PairCandidate, Summary};

/// Classify extraction candidates into finished color pairs.
///
/// Uses Rayon's `par_iter()` — each pair is independent pure work, no
/// shared mutable state. Classification runs on the raw ratio; the stored
/// ratio is rounded to 2 decimals for the wire. A malformed color in any
/// candidate aborts the whole run: no partial results.
pub fn classify_candidates(
    candidates: &[PairCandidate],
) -> Result<Vec<ColorPair>, AnalysisError> {
    candidates
        .par_iter()
        .map(|candidate| {
            let ratio_raw = wcag::contrast_ratio(&candidate.foreground, &candidate.background)?;
            Ok(ColorPair {
                foreground: candidate.foreground.clone(),
                background: candidate.background.clone(),
                ratio: (ratio_raw * 100.0).round() / 100.0,
                passes: wcag::check_wcag_thresholds(ratio_raw),
                location: candidate.location,
            })
        })
        .collect()
}

/// Fold classified pairs into pass/fail counts per threshold.
///
/// A pure reduction: single pass, order-independent, `total` bumped once
/// per pair. Empty input yields the all-zero summary.
pub fn summarize(pairs: &[ColorPair]) -> Summary {
    let mut summary = Summary::default();
    for pair in pairs {
        summary.total += 1;
        if pair.passes.aa {
            summary.passing.aa += 1;
        } else {
            summary.failing.aa += 1;
        }
        if pair.passes.aa_large {
            summary.passing.aa_large += 1;
        } else {
            summary.failing.aa_large += 1;
        }
        if pair.passes.aaa {
            summary.passing.aaa += 1;
        } else {
            summary.failing.aaa += 1;
        }
        if pair.passes.aaa_large {
            summary.passing.aaa_large += 1;
        } else {
            summary.failing.aaa_large += 1;
        }
    }
    summary
}

/// Run one full analysis: probe reachability, capture + extract via the
/// injected collaborator, classify, summarize.
///
/// Every failure is terminal for this call: no partial `AnalysisResult`
/// is ever returned, and nothing is retried here (retry/backoff belongs
/// to the collaborator). Each invocation's working set is local, so
/// concurrent analyses of different URLs share no state.
pub fn analyze(
    url: &str,
    probe: &dyn ReachabilityProbe,
    source: &dyn PairSource,
) -> Result<AnalysisResult, AnalysisError> {
    if !crate::source::is_valid_url(url) {
        warn!(url, "rejecting syntactically invalid url");
        return Err(AnalysisError::UnreachableTarget(url.to_string()));
    }
    if !probe.is_reachable(url)? {
        warn!(url, "target not reachable, skipping extraction");
        return Err(AnalysisError::UnreachableTarget(url.to_string()));
    }

    let screenshot = source.capture_screenshot(url)?;
    let candidates = source.color_pairs(url, &screenshot)?;
    if candidates.is_empty() {
        return Err(AnalysisError::ExtractionFailed(format!(
            "no color-pair candidates for {url}"
        )));
    }
    debug!(url, candidates = candidates.len(), "classifying color pairs");

    let color_pairs = classify_candidates(&candidates)?;
    let summary = summarize(&color_pairs);
    debug!(
        url,
        total = summary.total,
        failing_aa = summary.failing.aa,
        "analysis complete"
    );

    Ok(AnalysisResult {
        url: url.to_string(),
        screenshot,
        timestamp: Utc::now().to_rfc3339(),
        color_pairs,
        summary,
    })
}
