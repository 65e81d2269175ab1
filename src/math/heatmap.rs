/// Map a contrast ratio to a heatmap overlay color.
///
/// Four fixed buckets, first match wins. Break points are the same as the
/// WCAG thresholds in `wcag::check_wcag_thresholds`; this is a pure
/// presentation hint, not an independent classification.
pub fn heatmap_color(ratio: f64) -> &'static str {
    if ratio >= 7.0 {
        "rgba(74, 222, 128, 0.8)" // strong pass (AAA) - green
    } else if ratio >= 4.5 {
        "rgba(74, 222, 128, 0.5)" // pass (AA) - lighter green
    } else if ratio >= 3.0 {
        "rgba(250, 204, 21, 0.7)" // pass large text (AA) - yellow
    } else {
        "rgba(248, 113, 113, 0.7)" // fail - red
    }
}
