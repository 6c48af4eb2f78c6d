//! Stylelift CSS
//!
//! CSS-aware text processing for moving shared rules out of inline styles:
//! statement and selector splitting, whitelist matching, partitioning and
//! merging into the canonical stylesheet.
//!
//! Nothing here builds a syntax tree. Statements are slices of the input,
//! found by tracking brace depth, strings and comments.

mod matcher;
mod merge;
mod partition;
mod scanner;
mod split;
mod whitelist;

pub use matcher::selector_matches;
pub use merge::{merge_into_stylesheet, normalize_rule, MARKER_END, MARKER_START};
pub use partition::{partition_css, Partition};
pub use split::{split_selector_group, split_top_level_statements};
pub use whitelist::{Whitelist, DEFAULT_SELECTORS};
