//! Canonical stylesheet merging
//!
//! Moved rules are appended inside a marker-delimited region of the shared
//! stylesheet. Text outside the region is never touched.

use rustc_hash::FxHashSet;

/// Opening marker of the extracted region
pub const MARKER_START: &str = "/* [CANONICAL_EXTRACTED_SHARED_CSS_START] */";
/// Closing marker of the extracted region
pub const MARKER_END: &str = "/* [CANONICAL_EXTRACTED_SHARED_CSS_END] */";

/// Collapse whitespace runs to a single space and trim
pub fn normalize_rule(rule: &str) -> String {
    rule.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Merge moved CSS blocks into the stylesheet text.
///
/// A block is skipped when its normalized form already occurs anywhere in
/// the normalized stylesheet, or equals a block accepted earlier in the same
/// call. The containment test is textual, so a block can be skipped because
/// it happens to be contained in a longer unrelated rule. When nothing new
/// remains, or when the markers are present but do not form a start/end
/// pair, the input is returned unchanged.
pub fn merge_into_stylesheet<S: AsRef<str>>(stylesheet: &str, blocks: &[S]) -> String {
    let existing = normalize_rule(stylesheet);
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut accepted: Vec<&str> = Vec::new();

    for block in blocks {
        let block = block.as_ref();
        let normalized = normalize_rule(block);
        if normalized.is_empty() || existing.contains(&normalized) {
            continue;
        }
        if seen.insert(normalized) {
            accepted.push(block.trim());
        }
    }

    if accepted.is_empty() {
        return stylesheet.to_string();
    }
    log::debug!("Merging {} new block(s) into stylesheet", accepted.len());

    let addition = accepted.join("\n\n");
    match split_region(stylesheet) {
        Some((before, region, after)) => {
            let region = region.trim_end();
            let region = if region.is_empty() {
                format!("\n{}\n", addition)
            } else {
                format!("{}\n\n{}\n", region, addition)
            };
            format!("{}{}{}{}{}", before, MARKER_START, region, MARKER_END, after)
        }
        None if stylesheet.contains(MARKER_START) || stylesheet.contains(MARKER_END) => {
            log::warn!("Stylesheet markers are out of order, leaving stylesheet unchanged");
            stylesheet.to_string()
        }
        None => format!(
            "{}\n\n{}\n\n{}\n\n{}\n",
            stylesheet.trim_end(),
            MARKER_START,
            addition,
            MARKER_END
        ),
    }
}

/// Split the stylesheet around the first marker region: text before the
/// start marker, text between the markers, text after the end marker.
fn split_region(stylesheet: &str) -> Option<(&str, &str, &str)> {
    let start = stylesheet.find(MARKER_START)?;
    let before = &stylesheet[..start];
    let rest = &stylesheet[start + MARKER_START.len()..];
    let end = rest.find(MARKER_END)?;
    Some((before, &rest[..end], &rest[end + MARKER_END.len()..]))
}
