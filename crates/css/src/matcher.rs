//! Selector coverage check

/// What may follow a base selector for it to still count as the same
/// component: a combinator, or a further qualifier on the same element.
const QUALIFIER_DELIMITERS: &[&str] = &[" ", ":", "::", ".", "#", "[", ">", "+", "~"];

/// True if `selector` is `base` itself or `base` further qualified or
/// combined, e.g. `.btn:hover`, `.btn.active`, `.btn > span`.
///
/// A plain identifier continuation is not a match: `.btn-extra` is not
/// covered by `.btn`.
pub fn selector_matches(selector: &str, base: &str) -> bool {
    let selector = selector.trim();
    let base = base.trim();
    if selector.is_empty() || base.is_empty() {
        return false;
    }
    if selector == base {
        return true;
    }

    match selector.strip_prefix(base) {
        Some(rest) => QUALIFIER_DELIMITERS
            .iter()
            .any(|delim| rest.starts_with(delim)),
        None => false,
    }
}
