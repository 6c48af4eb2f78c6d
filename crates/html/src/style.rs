//! Inline `<style>` block extraction

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use stylelift_css::{partition_css, Whitelist};

/// Opening tag (attributes kept verbatim), CSS text, closing tag.
/// Case-insensitive; the body is matched lazily across lines.
static STYLE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)(<style\b[^>]*>)(.*?)(</style>)").expect("style block pattern is valid")
});

/// One inline style block found in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StyleBlock<'a> {
    /// `<style ...>` exactly as written
    opening: &'a str,
    /// Raw CSS between the tags
    css: &'a str,
    /// `</style>` exactly as written
    closing: &'a str,
}

impl<'a> StyleBlock<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        Self {
            opening: caps.get(1).map_or("", |m| m.as_str()),
            css: caps.get(2).map_or("", |m| m.as_str()),
            closing: caps.get(3).map_or("", |m| m.as_str()),
        }
    }
}

/// A document after its shared rules have been taken out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExtraction {
    /// Rewritten HTML
    pub html: String,
    /// Moved CSS, one entry per style block that had shared rules
    pub moved: Vec<String>,
    changed: bool,
}

impl DocumentExtraction {
    /// True if the rewritten HTML differs from the input
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Partition every inline style block of `html` against the whitelist.
///
/// Blocks keep their opening tag; a block left with no CSS is removed along
/// with its tags.
pub fn extract_from_document(html: &str, whitelist: &Whitelist) -> DocumentExtraction {
    let mut moved = Vec::new();

    let rewritten = STYLE_BLOCK.replace_all(html, |caps: &Captures<'_>| {
        let block = StyleBlock::from_captures(caps);
        let partition = partition_css(block.css, whitelist);

        if !partition.moved.is_empty() {
            moved.push(partition.moved);
        }
        if partition.kept.is_empty() {
            log::debug!("Removing emptied block {}", block.opening);
            String::new()
        } else {
            format!("{}\n{}\n{}", block.opening, partition.kept, block.closing)
        }
    });

    let html_out = rewritten.into_owned();
    let changed = html_out != html;
    DocumentExtraction {
        html: html_out,
        moved,
        changed,
    }
}
