//! Finding out which blocks are open at the cursor, without parsing the file.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A field name followed by `= {` or `?= {`. Names can be numbers (stages of a trait track),
/// dotted (event ids), or prefixed (`scope:target`).
static FIELD_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_.@-]+(?::[A-Za-z0-9_.@-]+)?)\s*\??=\s*\{").unwrap());

/// A field name followed by `=` or `?=` at the end of a line, so that its `{` is on the next
/// line.
static FIELD_EQUALS_EOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_.@-]+(?::[A-Za-z0-9_.@-]+)?)\s*\??=\s*$").unwrap());

/// The blocks that are open at a position in a file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BlockPath {
    /// How many braces are open.
    pub depth: usize,
    /// The field names of the open blocks, outermost first, not counting the top-level
    /// definition. Blocks without a name are represented by an empty string.
    pub path: Vec<String>,
}

impl BlockPath {
    pub fn innermost(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }
}

/// Compute the open blocks at a cursor position, by scanning all lines up to the cursor.
///
/// `line` and `column` are zero-based, and `column` counts characters. A cursor past the end of
/// the buffer is treated as being at the end of the buffer.
pub fn compute_block_path<S: AsRef<str>>(lines: &[S], line: usize, column: usize) -> BlockPath {
    let mut depth: usize = 0;
    let mut stack = Vec::new();
    let mut pending_name: Option<String> = None;

    for (nr, text) in lines.iter().take(line.saturating_add(1)).enumerate() {
        let text = text.as_ref();
        let chars: Vec<char> = text.chars().collect();
        let end = if nr < line { chars.len() } else { column.min(chars.len()) };

        // (character column of the brace, field name)
        let matches: Vec<(usize, &str)> = FIELD_BRACE
            .captures_iter(text)
            .filter_map(|cap| {
                let whole = cap.get(0)?;
                let name = cap.get(1)?.as_str();
                let brace = text[..whole.end() - 1].chars().count();
                (brace < end).then_some((brace, name))
            })
            .collect();
        let mut next_match = 0;

        let mut in_quotes = false;
        let mut scanned = end;
        for (col, &c) in chars[..end].iter().enumerate() {
            match c {
                '"' => in_quotes = !in_quotes,
                _ if in_quotes => (),
                '#' => {
                    scanned = col;
                    break;
                }
                '{' => {
                    depth += 1;
                    while next_match < matches.len() && matches[next_match].0 < col {
                        next_match += 1;
                    }
                    let name = if next_match < matches.len() && matches[next_match].0 == col {
                        next_match += 1;
                        pending_name = None;
                        Some(matches[next_match - 1].1.to_owned())
                    } else {
                        pending_name.take()
                    };
                    if depth > 1 {
                        stack.push(name.unwrap_or_default());
                    }
                }
                '}' => {
                    depth = depth.saturating_sub(1);
                    if !stack.is_empty() && depth >= 1 {
                        stack.pop();
                    }
                }
                _ => (),
            }
            if !c.is_whitespace() && c != '{' {
                pending_name = None;
            }
        }

        if !in_quotes && nr < line {
            let scanned: String = chars[..scanned].iter().collect();
            if let Some(cap) = FIELD_EQUALS_EOL.captures(&scanned) {
                pending_name = cap.get(1).map(|m| m.as_str().to_owned());
            }
        }
    }

    BlockPath { depth, path: stack }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Block path with the cursor at the end of `text`.
    fn at_end(text: &str) -> BlockPath {
        let lines: Vec<&str> = text.split('\n').collect();
        let line = lines.len() - 1;
        let column = lines[line].chars().count();
        compute_block_path(&lines, line, column)
    }

    fn path(text: &str) -> Vec<String> {
        at_end(text).path
    }

    #[test]
    fn test_simple() {
        let bp = at_end("trait_name = {\n\tmodifier = {\n\t\t");
        assert_eq!(bp.depth, 2);
        assert_eq!(bp.path, vec!["modifier"]);
        assert_eq!(bp.innermost(), Some("modifier"));
        assert!(!bp.is_top_level());
    }

    #[test]
    fn test_top_level() {
        let bp = at_end("a = {\n}\n");
        assert_eq!(bp.depth, 0);
        assert!(bp.path.is_empty());
        assert!(bp.is_top_level());
        assert_eq!(bp.innermost(), None);
        assert_eq!(at_end("").depth, 0);
    }

    #[test]
    fn test_same_line() {
        assert_eq!(path("a = { b = { c = { "), vec!["b", "c"]);
        assert_eq!(path("a = { b = { } c = { "), vec!["c"]);
    }

    #[test]
    fn test_closed_blocks() {
        let text = "e = {\n\timmediate = {\n\t\tevery_vassal = {\n\t\t}\n\t}\n\toption = {\n\t\t";
        assert_eq!(path(text), vec!["option"]);
    }

    #[test]
    fn test_special_names() {
        assert_eq!(path("t = {\n\ttrack = {\n\t\t50 = {\n"), vec!["track", "50"]);
        assert_eq!(path("e = {\n\tscope:target = {\n\t\t"), vec!["scope:target"]);
        assert_eq!(path("on = {\n\tevents.0001 = {"), vec!["events.0001"]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(path("a = {\n\t# b = {\n\t"), Vec::<String>::new());
        assert_eq!(at_end("a = {\n\t# b = {\n\t").depth, 1);
        assert_eq!(path("a = { # }\n\tb = {"), vec!["b"]);
    }

    #[test]
    fn test_quotes() {
        let bp = at_end("a = {\n\tdesc = \"# { not a block\"\n\tb = {\n");
        assert_eq!(bp.depth, 2);
        assert_eq!(bp.path, vec!["b"]);
        let bp = at_end("a = {\n\tdesc = \"x = {\" c = {");
        assert_eq!(bp.path, vec!["c"]);
    }

    #[test]
    fn test_cursor_in_line() {
        let lines = ["a = {", "\tb = { c = { } }", "}"];
        assert_eq!(compute_block_path(&lines, 1, 0).path, Vec::<String>::new());
        assert_eq!(compute_block_path(&lines, 1, 7).path, vec!["b"]);
        assert_eq!(compute_block_path(&lines, 1, 13).path, vec!["b", "c"]);
        assert_eq!(compute_block_path(&lines, 1, 14).path, vec!["b"]);
        assert_eq!(compute_block_path(&lines, 2, 1).depth, 0);
        // Past the end of the line and past the end of the buffer
        assert_eq!(compute_block_path(&lines, 1, 99).depth, 1);
        assert_eq!(compute_block_path(&lines, 99, 0).depth, 0);
    }

    #[test]
    fn test_stray_close() {
        let bp = at_end("}\n}\na = {\n\tb = {");
        assert_eq!(bp.depth, 2);
        assert_eq!(bp.path, vec!["b"]);
    }

    #[test]
    fn test_unnamed_blocks() {
        let bp = at_end("a = {\n\tlist = {\n\t\t{ ");
        assert_eq!(bp.depth, 3);
        assert_eq!(bp.path, vec!["list", ""]);
    }

    #[test]
    fn test_brace_on_next_line() {
        let bp = at_end("a =\n{\n\tb =\n\t{\n\t\t");
        assert_eq!(bp.depth, 2);
        assert_eq!(bp.path, vec!["b"]);
        // Something between the = and the { breaks the association
        assert_eq!(path("a = {\n\tb = x\n\t{ "), vec![""]);
    }

    #[test]
    fn test_conditional_equals() {
        let bp = at_end("a = {
	scope:target ?= {
		");
        assert_eq!(bp.depth, 2);
        assert_eq!(bp.path, vec!["scope:target"]);

        let bp = at_end("a = {
	scope:target ?=
	{
		");
        assert_eq!(bp.path, vec!["scope:target"]);

        let lines = ["a = {", "	liege?={ b = {"];
        assert_eq!(compute_block_path(&lines, 1, 10).path, vec!["liege"]);
    }

    #[test]
    fn test_unicode_columns() {
        let lines = ["a = {", "\tdesc = \"é\" b = {"];
        assert_eq!(compute_block_path(&lines, 1, 17).path, vec!["b"]);
        assert_eq!(compute_block_path(&lines, 1, 16).path, Vec::<String>::new());
    }

    #[test]
    fn test_path_length_matches_depth() {
        let text = "a = {\n\tb = {\n\t\t{ c = {\n\t\t}\n\t\td = {\n\t\t\te = { x = 1 }\n\t\t\t";
        let bp = at_end(text);
        let opened = text.matches('{').count() - text.matches('}').count();
        assert_eq!(bp.depth, opened);
        assert_eq!(bp.path.len(), bp.depth - 1);
        assert_eq!(bp.path, vec!["b", "", "d"]);
    }

    #[test]
    fn test_idempotent() {
        let lines = ["a = {", "\tb = {", "\t\tc = { d = {"];
        assert_eq!(compute_block_path(&lines, 2, 10), compute_block_path(&lines, 2, 10));
    }
}
