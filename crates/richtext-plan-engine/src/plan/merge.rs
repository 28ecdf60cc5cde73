use super::types::Segment;

/// Coalesces consecutive segments whose formatting matches.
///
/// Order is preserved and the result never has more entries than the input.
/// Running it on its own output changes nothing.
pub fn merge_segments<I>(segments: I) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut merged: Vec<Segment> = Vec::new();
    for segment in segments {
        if let Some(last) = merged.last_mut()
            && last.same_format(&segment)
        {
            last.text.push_str(&segment.text);
            continue;
        }
        merged.push(segment);
    }
    merged
}
