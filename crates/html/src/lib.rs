//! Stylelift HTML
//!
//! Finds inline `<style>` blocks in HTML text and rewrites them after their
//! shared rules have been moved out. The document is treated as text; only
//! the style tags are recognized.

mod style;

pub use style::{extract_from_document, DocumentExtraction};
