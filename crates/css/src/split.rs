//! CSS splitters
//!
//! Splits CSS text into top-level statements and selector groups into
//! individual selectors. Both work on slices of the input; nothing is
//! re-serialized.

use crate::scanner::Scanner;

/// Split a comma-separated selector list into trimmed, non-empty selectors.
///
/// Commas only split at paren and bracket depth zero and never inside quoted
/// strings, so `a[title="x,y"], :is(b, c)` yields two selectors.
pub fn split_selector_group(group: &str) -> Vec<&str> {
    let mut selectors = Vec::new();
    let mut scanner = Scanner::new(group);
    let mut start = 0;
    let mut parens = 0usize;
    let mut brackets = 0usize;

    while let Some(c) = scanner.peek() {
        match c {
            '"' | '\'' => {
                scanner.skip_string();
                continue;
            }
            '(' => parens += 1,
            ')' => parens = parens.saturating_sub(1),
            '[' => brackets += 1,
            ']' => brackets = brackets.saturating_sub(1),
            ',' if parens == 0 && brackets == 0 => {
                push_trimmed(&mut selectors, &group[start..scanner.position()]);
                scanner.advance();
                start = scanner.position();
                continue;
            }
            _ => {}
        }
        scanner.advance();
    }

    push_trimmed(&mut selectors, &group[start..]);
    selectors
}

/// Split CSS text into top-level statements.
///
/// A statement ends at the `}` that closes its outermost block, or at a `;`
/// outside any block. Comments are skipped wherever they appear but stay in
/// the text of the statement that contains them. Trailing text without a
/// terminator becomes the last statement.
pub fn split_top_level_statements(css: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut scanner = Scanner::new(css);
    let mut start = 0;
    let mut depth = 0usize;

    while let Some(c) = scanner.peek() {
        match c {
            '"' | '\'' => {
                scanner.skip_string();
                continue;
            }
            '/' if scanner.peek_second() == Some('*') => {
                if !scanner.skip_comment() {
                    break;
                }
                continue;
            }
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                scanner.advance();
                if depth == 0 {
                    push_trimmed(&mut statements, &css[start..scanner.position()]);
                    start = scanner.position();
                }
                continue;
            }
            ';' if depth == 0 => {
                scanner.advance();
                push_trimmed(&mut statements, &css[start..scanner.position()]);
                start = scanner.position();
                continue;
            }
            _ => {}
        }
        scanner.advance();
    }

    push_trimmed(&mut statements, &css[start..]);
    statements
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, chunk: &'a str) {
    let chunk = chunk.trim();
    if !chunk.is_empty() {
        out.push(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_group() {
        assert_eq!(split_selector_group("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_group_comma_in_bracketed_string() {
        assert_eq!(
            split_selector_group("a, b[c=\",\"], d"),
            vec!["a", "b[c=\",\"]", "d"]
        );
    }

    #[test]
    fn test_split_group_comma_in_parens() {
        assert_eq!(
            split_selector_group(":is(.a, .b) span, .c"),
            vec![":is(.a, .b) span", ".c"]
        );
    }

    #[test]
    fn test_split_group_comma_in_brackets_without_quotes() {
        assert_eq!(split_selector_group("[data-x=a,b], p"), vec!["[data-x=a,b]", "p"]);
    }

    #[test]
    fn test_split_group_escaped_quote() {
        assert_eq!(
            split_selector_group(r#"[title='it\'s, ok'], p"#),
            vec![r#"[title='it\'s, ok']"#, "p"]
        );
    }

    #[test]
    fn test_split_group_drops_empty_parts() {
        assert_eq!(split_selector_group(" , a,, "), vec!["a"]);
        assert!(split_selector_group("   ").is_empty());
    }

    #[test]
    fn test_split_group_unbalanced_closer_is_clamped() {
        assert_eq!(split_selector_group("a), b"), vec!["a)", "b"]);
    }

    #[test]
    fn test_split_group_unterminated_string() {
        assert_eq!(split_selector_group("a, [x=\"b, c"), vec!["a", "[x=\"b, c"]);
    }

    #[test]
    fn test_split_group_unclosed_paren() {
        assert_eq!(split_selector_group(":not(a, b"), vec![":not(a, b"]);
    }

    #[test]
    fn test_statements_simple() {
        let css = ".a { color: red; }\n.b{color:blue}";
        assert_eq!(
            split_top_level_statements(css),
            vec![".a { color: red; }", ".b{color:blue}"]
        );
    }

    #[test]
    fn test_statements_at_rules() {
        let css = "@charset \"utf-8\";\n@import url(a.css);\n@media (max-width:600px){.a{x:y} .b{x:z}}\np{}";
        assert_eq!(
            split_top_level_statements(css),
            vec![
                "@charset \"utf-8\";",
                "@import url(a.css);",
                "@media (max-width:600px){.a{x:y} .b{x:z}}",
                "p{}",
            ]
        );
    }

    #[test]
    fn test_statements_brace_in_string() {
        let css = ".a::after { content: \"}\"; } .b { content: '{'; }";
        assert_eq!(
            split_top_level_statements(css),
            vec![".a::after { content: \"}\"; }", ".b { content: '{'; }"]
        );
    }

    #[test]
    fn test_statements_semicolon_inside_block() {
        let css = ".a { x: 1; y: 2; }";
        assert_eq!(split_top_level_statements(css), vec![".a { x: 1; y: 2; }"]);
    }

    #[test]
    fn test_statements_comment_with_braces_is_skipped() {
        let css = ".a { /* } */ color: red; }";
        assert_eq!(split_top_level_statements(css), vec![css]);
    }

    #[test]
    fn test_statements_leading_comment_stays_attached() {
        let css = "/* header */\n.a{x:y}";
        assert_eq!(split_top_level_statements(css), vec![css]);
    }

    #[test]
    fn test_statements_unterminated_comment_keeps_tail() {
        let css = ".a{x:y} .b{x:z} /* open {";
        assert_eq!(
            split_top_level_statements(css),
            vec![".a{x:y}", ".b{x:z}", "/* open {"]
        );
    }

    #[test]
    fn test_statements_trailing_text() {
        assert_eq!(
            split_top_level_statements(".a{x:y} stray"),
            vec![".a{x:y}", "stray"]
        );
    }

    #[test]
    fn test_statements_unbalanced_close_brace() {
        assert_eq!(split_top_level_statements("} .a{x:y}"), vec!["}", ".a{x:y}"]);
    }

    #[test]
    fn test_statements_unclosed_block() {
        assert_eq!(
            split_top_level_statements(".a{x:y} .b{x:z"),
            vec![".a{x:y}", ".b{x:z"]
        );
    }

    #[test]
    fn test_statements_empty_input() {
        assert!(split_top_level_statements("  \n\t ").is_empty());
    }

    #[test]
    fn test_statements_reconstruct_input() {
        let css = ".a { x: 1 }\n\n@media print {\n  .b { y: 2 }\n}\n@import 'c.css';";
        let joined: String = split_top_level_statements(css).join("");
        let stripped: String = css.split_whitespace().collect();
        assert_eq!(joined.split_whitespace().collect::<String>(), stripped);
    }
}
