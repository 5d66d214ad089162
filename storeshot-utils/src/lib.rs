pub const MISSING_CELL: &str = "NONE";
pub const ELLIPSIS: &str = "...";

pub fn trimmed_or_none<'a>(input: Option<&'a str>) -> Option<&'a str> {
    input.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

/// Trims every entry and drops the blank ones, keeping the original order.
pub fn non_empty_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filtered = Vec::new();

    for item in items {
        let trimmed = item.as_ref().trim();
        if !trimmed.is_empty() {
            filtered.push(trimmed.to_string());
        }
    }

    filtered
}

pub fn cell_or_missing(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_CELL)
}

/// Shortens `text` to `keep` characters plus an ellipsis once it exceeds `limit` characters.
pub fn ellipsize(text: &str, limit: usize, keep: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}

/// Width of a table column: the longest cell plus two characters of padding, never below `min`.
pub fn column_width<I, S>(min: usize, cells: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|cell| cell.as_ref().chars().count() + 2)
        .fold(min, usize::max)
}

pub fn pad_cell(value: &str, width: usize) -> String {
    format!("{value:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_or_none_discards_blank_input() {
        assert_eq!(trimmed_or_none(Some("  Navy, Gold ")), Some("Navy, Gold"));
        assert_eq!(trimmed_or_none(Some("   ")), None);
        assert_eq!(trimmed_or_none(None), None);
    }

    #[test]
    fn non_empty_items_keeps_order() {
        let items = non_empty_items(["Track habits ", "", "  ", "Share wins"]);
        assert_eq!(items, vec!["Track habits", "Share wins"]);
    }

    #[test]
    fn ellipsize_leaves_short_text_alone() {
        assert_eq!(ellipsize("Home dashboard", 60, 58), "Home dashboard");
    }

    #[test]
    fn ellipsize_cuts_long_text() {
        let text = "x".repeat(61);
        let shortened = ellipsize(&text, 60, 58);
        assert_eq!(shortened.len(), 61);
        assert!(shortened.ends_with(ELLIPSIS));
    }

    #[test]
    fn column_width_respects_minimum() {
        assert_eq!(column_width(5, ["1", "2"]), 5);
        assert_eq!(column_width(5, ["a-longer-cell"]), 15);
    }

    #[test]
    fn cell_or_missing_substitutes_placeholder() {
        assert_eq!(cell_or_missing(None), MISSING_CELL);
        assert_eq!(cell_or_missing(Some("a.png")), "a.png");
    }
}
