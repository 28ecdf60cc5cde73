use crate::model::{MarkKind, Text};

/// The four styled marks as independent flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
}

impl MarkFlags {
    pub const fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
            underline: false,
            code: false,
        }
    }
}

/// Reads the marks of a text leaf. Unknown marks are ignored.
pub fn resolve_marks(text: &Text) -> MarkFlags {
    text.marks
        .iter()
        .fold(MarkFlags::default(), |mut flags, mark| {
            match mark.kind {
                MarkKind::Bold => flags.bold = true,
                MarkKind::Italic => flags.italic = true,
                MarkKind::Underline => flags.underline = true,
                MarkKind::Code => flags.code = true,
                MarkKind::Other(_) => {}
            }
            flags
        })
}
