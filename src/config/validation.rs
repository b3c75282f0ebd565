use crate::config::types::TargetTag;

/// Collapses a tag selection to unique entries, preserving first-occurrence order
///
/// The text extractor treats its tag list as an ordered set: asking for
/// `p, h1, p` must not emit the paragraph blocks twice.
pub fn normalize_tags(tags: &[TargetTag]) -> Vec<TargetTag> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(tag) {
            seen.push(*tag);
        }
    }
    seen
}
