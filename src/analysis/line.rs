//! What the cursor is doing on its own line: typing a field name, or a value after `=`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A field name, a comparison operator, and a partially typed value at the end of the text.
static FIELD_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w.:@-]+)\s*(?:[<>!?]?=|[<>])\s*([^\s{}#=<>]*)$").unwrap()
});

/// A partially typed field name at the end of the text.
static PARTIAL_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w.:@-]*$").unwrap());

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LineContext {
    /// The cursor is in a comment.
    pub in_comment: bool,
    /// The cursor is in the value position of a field.
    pub after_equals: bool,
    /// The field whose value is being typed.
    pub field_name: Option<String>,
    /// What has been typed of the value so far.
    pub partial_value: Option<String>,
    /// What has been typed of a field name so far. Empty in value position.
    pub partial_field: String,
}

/// Examine the text of the cursor's line, up to the cursor.
pub fn parse_line_context(prefix: &str) -> LineContext {
    let mut in_quotes = false;
    let mut segment_start = 0;
    for (i, c) in prefix.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => (),
            '#' => return LineContext { in_comment: true, ..LineContext::default() },
            '{' | '}' => segment_start = i + 1,
            _ => (),
        }
    }
    let segment = &prefix[segment_start..];

    if let Some(cap) = FIELD_VALUE.captures(segment) {
        let partial = cap.get(2).map_or("", |m| m.as_str());
        return LineContext {
            in_comment: false,
            after_equals: true,
            field_name: cap.get(1).map(|m| m.as_str().to_owned()),
            partial_value: (!partial.is_empty()).then(|| partial.to_owned()),
            partial_field: String::new(),
        };
    }

    let partial_field = PARTIAL_FIELD.find(segment).map_or("", |m| m.as_str());
    LineContext { partial_field: partial_field.to_owned(), ..LineContext::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_position() {
        let lc = parse_line_context("\t\tadd_g");
        assert!(!lc.after_equals);
        assert_eq!(lc.partial_field, "add_g");
        assert_eq!(parse_line_context("\t\t").partial_field, "");
        assert_eq!(parse_line_context("\tis_adult = yes is_f").partial_field, "is_f");
    }

    #[test]
    fn test_value_position() {
        let lc = parse_line_context("\tadd_opinion = ");
        assert!(lc.after_equals);
        assert_eq!(lc.field_name.as_deref(), Some("add_opinion"));
        assert_eq!(lc.partial_value, None);

        let lc = parse_line_context("\tcategory = pers");
        assert_eq!(lc.field_name.as_deref(), Some("category"));
        assert_eq!(lc.partial_value.as_deref(), Some("pers"));

        let lc = parse_line_context("\tage >= 1");
        assert_eq!(lc.field_name.as_deref(), Some("age"));
        assert_eq!(lc.partial_value.as_deref(), Some("1"));
    }

    #[test]
    fn test_after_brace() {
        let lc = parse_line_context("limit = { is_adult = ");
        assert_eq!(lc.field_name.as_deref(), Some("is_adult"));
        let lc = parse_line_context("limit = { ");
        assert!(!lc.after_equals);
        let lc = parse_line_context("limit = { is_adult = yes } is_al");
        assert_eq!(lc.partial_field, "is_al");
    }

    #[test]
    fn test_comment_and_quotes() {
        assert!(parse_line_context("\t# add_gold = ").in_comment);
        let lc = parse_line_context("\tdesc = \"a # b\" flag = ");
        assert!(!lc.in_comment);
        assert_eq!(lc.field_name.as_deref(), Some("flag"));
    }
}
