use crate::model::{Inline, InlineKind, NodeData};

use super::{
    context::FormattingContext,
    marks::{MarkFlags, resolve_marks},
    options::PlanOptions,
    types::Segment,
};

/// Resolves an inline node into segments.
///
/// Hyperlink variants put their resolved URL on every text child and force
/// underline; a link with no resolvable target degrades to plain text. An
/// embedded entry appends one italic `[title]` segment after any children.
pub fn resolve_inline(
    inline: &Inline,
    ctx: FormattingContext,
    options: &PlanOptions,
) -> Vec<Segment> {
    let hyperlink = if inline.kind.is_hyperlink() {
        resolve_hyperlink(&inline.data, options)
    } else {
        None
    };
    if inline.kind.is_hyperlink() && hyperlink.is_none() {
        log::debug!("{:?} has no target; keeping plain text", inline.kind);
    }

    let mut segments: Vec<Segment> = inline
        .texts()
        .map(|text| {
            let mut segment = Segment::styled(text.value.as_str(), resolve_marks(text), ctx);
            if let Some(url) = &hyperlink {
                segment.underline = true;
                segment.hyperlink = Some(url.clone());
            }
            segment
        })
        .collect();

    if inline.kind == InlineKind::EmbeddedEntry {
        let title = inline.data.entry_title(&options.locale);
        segments.push(Segment::styled(format!("[{title}]"), MarkFlags::italic(), ctx));
    }

    segments
}

/// Link target: the direct `uri`, else the referenced file URL.
pub fn resolve_hyperlink(data: &NodeData, options: &PlanOptions) -> Option<String> {
    data.uri
        .as_deref()
        .or_else(|| data.file_url(&options.locale))
        .map(str::to_string)
}
