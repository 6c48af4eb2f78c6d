//! Shared/local partitioning of CSS text

use crate::split::split_top_level_statements;
use crate::whitelist::Whitelist;

const STATEMENT_SEPARATOR: &str = "\n\n";

/// Result of partitioning one CSS text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Statements that stay where they were
    pub kept: String,
    /// Statements covered by the whitelist
    pub moved: String,
}

/// Split `css` into statements that stay and statements that move to the
/// shared stylesheet.
///
/// Block at-rules are partitioned recursively; when their body holds both
/// kinds of rules the at-rule header is repeated on each side. Bodiless
/// at-rules and fragments without a block always stay.
pub fn partition_css(css: &str, whitelist: &Whitelist) -> Partition {
    let mut kept: Vec<String> = Vec::new();
    let mut moved: Vec<String> = Vec::new();

    for statement in split_top_level_statements(css) {
        if statement.starts_with('@') {
            match split_block(statement) {
                Some((header, body)) if statement.ends_with('}') => {
                    let inner = partition_css(body, whitelist);
                    if !inner.kept.is_empty() {
                        kept.push(wrap_block(header, &inner.kept));
                    }
                    if !inner.moved.is_empty() {
                        log::debug!("Splitting at-rule '{}'", header.trim_end_matches('{').trim());
                        moved.push(wrap_block(header, &inner.moved));
                    }
                }
                _ => kept.push(statement.to_string()),
            }
            continue;
        }

        let Some((header, _)) = split_block(statement) else {
            kept.push(statement.to_string());
            continue;
        };

        let selector_group = header.trim_end_matches('{').trim();
        if whitelist.should_extract(selector_group) {
            log::debug!("Moving rule '{}'", selector_group);
            moved.push(statement.to_string());
        } else {
            kept.push(statement.to_string());
        }
    }

    Partition {
        kept: kept.join(STATEMENT_SEPARATOR).trim().to_string(),
        moved: moved.join(STATEMENT_SEPARATOR).trim().to_string(),
    }
}

/// Split a statement at its first `{` into the header (brace included) and
/// everything after it, minus the final character.
fn split_block(statement: &str) -> Option<(&str, &str)> {
    let open = statement.find('{')?;
    let header = &statement[..=open];
    let rest = &statement[open + 1..];
    let body = match rest.char_indices().last() {
        Some((last, _)) => &rest[..last],
        None => rest,
    };
    Some((header, body))
}

fn wrap_block(header: &str, inner: &str) -> String {
    format!("{}\n{}\n}}", header, inner)
}
