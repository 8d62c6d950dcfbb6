//! Rich instruction renderings.
//!
//! A [`RenderedInstruction`] is an ordered run of text and inline
//! attachments (road shields, exit badges). Formatters emit shields as
//! unresolved references; [`RenderedInstruction::canonicalize`] resolves
//! them into their final renderable form before the record is handed to a
//! display surface.

use serde::Serialize;

/// An inline, non-text element of a rendered instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attachment {
    /// Shield as emitted by a formatter; not yet resolved to artwork.
    ShieldRef {
        base_url: Option<String>,
        text: String,
        height: f64,
    },

    /// Shield artwork resolved to a concrete asset URI.
    Image { uri: String, alt: String, height: f64 },

    /// Text drawn inside a badge outline.
    Badge { text: String, height: f64 },
}

impl Attachment {
    /// Resolve to final renderable form. Already-resolved attachments are
    /// returned unchanged.
    pub fn canonical(self, scale: u8) -> Self {
        match self {
            Attachment::ShieldRef {
                base_url: Some(base),
                text,
                height,
            } if !base.is_empty() => Attachment::Image {
                uri: format!("{}@{}x.png", base.trim_end_matches('/'), scale.max(1)),
                alt: text,
                height,
            },
            Attachment::ShieldRef { text, height, .. } => Attachment::Badge { text, height },
            resolved => resolved,
        }
    }

    /// Whether the attachment still needs canonicalization.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Attachment::ShieldRef { .. })
    }

    /// Text stand-in used when flattening to plain text.
    pub fn alt_text(&self) -> &str {
        match self {
            Attachment::ShieldRef { text, .. } => text,
            Attachment::Image { alt, .. } => alt,
            Attachment::Badge { text, .. } => text,
        }
    }
}

/// One run of a rendered instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "span", rename_all = "snake_case")]
pub enum RenderedSpan {
    Text { text: String },
    Attachment { attachment: Attachment },
}

/// Rich rendering of one or more instruction blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderedInstruction {
    spans: Vec<RenderedSpan>,
}

impl RenderedInstruction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text run, merging with a trailing text run.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(RenderedSpan::Text { text: last }) = self.spans.last_mut() {
            last.push_str(text);
        } else {
            self.spans.push(RenderedSpan::Text {
                text: text.to_string(),
            });
        }
    }

    /// Append an inline attachment.
    pub fn push_attachment(&mut self, attachment: Attachment) {
        self.spans.push(RenderedSpan::Attachment { attachment });
    }

    /// Append another rendering on a new line.
    pub fn append_line(&mut self, other: RenderedInstruction) {
        self.push_text("\n");
        for span in other.spans {
            match span {
                RenderedSpan::Text { text } => self.push_text(&text),
                RenderedSpan::Attachment { attachment } => self.push_attachment(attachment),
            }
        }
    }

    /// Resolve every attachment to its final form.
    pub fn canonicalize(&mut self, scale: u8) {
        for span in &mut self.spans {
            if let RenderedSpan::Attachment { attachment } = span {
                if !attachment.is_resolved() {
                    let pending = std::mem::replace(
                        attachment,
                        Attachment::Badge {
                            text: String::new(),
                            height: 0.0,
                        },
                    );
                    *attachment = pending.canonical(scale);
                }
            }
        }
    }

    /// Whether every attachment has been resolved.
    pub fn is_canonical(&self) -> bool {
        self.attachments().all(Attachment::is_resolved)
    }

    pub fn spans(&self) -> &[RenderedSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over inline attachments.
    pub fn attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.spans.iter().filter_map(|span| match span {
            RenderedSpan::Attachment { attachment } => Some(attachment),
            RenderedSpan::Text { .. } => None,
        })
    }

    /// Flatten to plain text, substituting attachment alt text.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                RenderedSpan::Text { text } => text.as_str(),
                RenderedSpan::Attachment { attachment } => attachment.alt_text(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shield(base: Option<&str>) -> Attachment {
        Attachment::ShieldRef {
            base_url: base.map(str::to_string),
            text: "I-280".to_string(),
            height: 16.0,
        }
    }

    #[test]
    fn test_shield_with_artwork_becomes_image() {
        let resolved = shield(Some("https://shields.example/i280/")).canonical(2);
        assert_eq!(
            resolved,
            Attachment::Image {
                uri: "https://shields.example/i280@2x.png".to_string(),
                alt: "I-280".to_string(),
                height: 16.0,
            }
        );
    }

    #[test]
    fn test_shield_without_artwork_becomes_badge() {
        let resolved = shield(None).canonical(3);
        assert!(matches!(resolved, Attachment::Badge { ref text, .. } if text == "I-280"));

        let empty_url = shield(Some("")).canonical(3);
        assert!(matches!(empty_url, Attachment::Badge { .. }));
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let mut rendered = RenderedInstruction::new();
        rendered.push_text("Take ");
        rendered.push_attachment(shield(Some("https://shields.example/i280")));
        rendered.canonicalize(2);
        let once = rendered.clone();
        rendered.canonicalize(2);
        assert_eq!(rendered, once);
        assert!(rendered.is_canonical());
    }

    #[test]
    fn test_append_line_merges_text() {
        let mut first = RenderedInstruction::new();
        first.push_text("Turn right");
        let mut second = RenderedInstruction::new();
        second.push_text("Destination on the right");

        first.append_line(second);
        assert_eq!(first.spans().len(), 1);
        assert_eq!(first.plain_text(), "Turn right\nDestination on the right");
    }

    #[test]
    fn test_plain_text_uses_alt_text() {
        let mut rendered = RenderedInstruction::new();
        rendered.push_text("Merge onto ");
        rendered.push_attachment(shield(None));
        assert_eq!(rendered.plain_text(), "Merge onto I-280");
        assert!(!rendered.is_canonical());
    }

    #[test]
    fn test_push_empty_text_is_ignored() {
        let mut rendered = RenderedInstruction::new();
        rendered.push_text("");
        assert!(rendered.is_empty());
    }
}
