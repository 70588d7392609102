//! Export functionality for notes
//!
//! Notes are exported one at a time, as plain text or PDF. Both renderings
//! start from the same de-tagged view of the note's HTML content.

use crate::error::{Error, Result};
use crate::models::Note;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use regex::Regex;

/// Format for exporting a note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Pdf,
}

impl ExportFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }
}

/// Entities decoded after tag removal; `&amp;` is handled last so encoded
/// entities decode exactly once
const HTML_ENTITIES: [(&str, &str); 6] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// Remove HTML tags and decode the common entities
///
/// Tags are dropped outright, mirroring the plain-text rendering notes get
/// on export and share.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    let re = Regex::new(r"<[^>]+>").expect("Invalid regex");
    let mut text = re.replace_all(html, "").into_owned();
    for (entity, replacement) in HTML_ENTITIES {
        text = text.replace(entity, replacement);
    }
    text
}

/// Render a note as plain text: title, blank line, de-tagged content
///
/// This is also the payload handed to the share handler.
#[must_use]
pub fn render_text_export(note: &Note) -> String {
    format!("{}\n\n{}", note.title, strip_html_tags(&note.content))
}

/// Render a note as a single-column PDF
///
/// A4 pages, builtin Helvetica, naive line wrapping and page breaks. No
/// attempt is made to reproduce the note's rich-text layout.
pub fn render_pdf_export(note: &Note) -> Result<Vec<u8>> {
    let text = strip_html_tags(&note.content);
    let (doc, first_page, first_layer) =
        PdfDocument::new(note.title.clone(), Mm(210.0), Mm(297.0), "Layer 1");
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Export(e.to_string()))?;
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Export(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = 270.0;
    layer.use_text(note.title.clone(), 16.0, Mm(20.0), Mm(y), &title_font);
    y -= 12.0;

    for line in wrapped_lines(&text, 90) {
        if y < 20.0 {
            let (page, page_layer) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = 277.0;
        }
        if !line.is_empty() {
            layer.use_text(line, 11.0, Mm(20.0), Mm(y), &font);
        }
        y -= 6.0;
    }

    doc.save_to_bytes().map_err(|e| Error::Export(e.to_string()))
}

/// File name for an exported note, derived from its title
///
/// Path separators and other file-system-hostile characters are replaced
/// with underscores; an empty title falls back to "note".
#[must_use]
pub fn export_file_name(title: &str, format: ExportFormat) -> String {
    let mut stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() {
        stem = "note".to_string();
    }
    format!("{stem}.{}", format.extension())
}

/// Wrap text at a character budget, keeping words intact where possible
fn wrapped_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.chars().count() <= max_chars {
            lines.push(raw_line.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + word.chars().count() + 1 > max_chars
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
