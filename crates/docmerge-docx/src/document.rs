#![deny(unsafe_code)]

/// Paragraph style, mapped to a style definition in the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    /// Heading with outline level 1..=9.
    Heading(u8),
}

impl ParagraphStyle {
    /// Style identifier referenced from paragraph properties.
    #[must_use]
    pub fn style_id(&self) -> Option<String> {
        match self {
            Self::Normal => None,
            Self::Heading(level) => Some(format!("Heading{level}")),
        }
    }
}

/// One paragraph of body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxParagraph {
    pub style: ParagraphStyle,
    pub text: String,
}

impl DocxParagraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            style: ParagraphStyle::Normal,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self {
            style: ParagraphStyle::Heading(level.clamp(1, 9)),
            text: text.into(),
        }
    }
}

/// An in-memory document: an ordered list of paragraphs.
///
/// Mirrors the shape of the generated files: a heading followed by one
/// `column: value` line per rendered cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxDocument {
    paragraphs: Vec<DocxParagraph>,
}

impl DocxDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        self.paragraphs.push(DocxParagraph::heading(text, level));
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(DocxParagraph::text(text));
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[DocxParagraph] {
        &self.paragraphs
    }

    /// Heading levels used by this document, deduplicated and ordered.
    pub(crate) fn heading_levels(&self) -> Vec<u8> {
        let mut levels: Vec<u8> = self
            .paragraphs
            .iter()
            .filter_map(|p| match p.style {
                ParagraphStyle::Heading(level) => Some(level),
                ParagraphStyle::Normal => None,
            })
            .collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
}
