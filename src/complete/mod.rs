//! Turn an analyzed cursor position into completion candidates.

use serde::Serialize;

pub use crate::complete::candidate::{Candidate, CandidateKind, InsertFormat};
pub use crate::complete::fields::{field_candidates, insert_template};
pub use crate::complete::values::value_candidates;

use crate::analysis::{
    classify, compute_block_path, fields_for_context, parse_line_context, AnalysisContext,
    BlockPath,
};
use crate::schema::{EntitySchema, Registry};

mod candidate;
mod fields;
mod values;

/// Knobs for how candidates are rendered. Loaded from the settings file by the command line tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompletionOptions {
    /// How many enum values to put in a choice placeholder.
    pub max_enum_choices: usize,
    /// Whether insert texts may contain tab stops and placeholders.
    pub snippets: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        CompletionOptions { max_enum_choices: 20, snippets: true }
    }
}

/// Everything the synthesizer needs to know about one cursor position.
#[derive(Clone, Debug)]
pub struct CompletionRequest<'a> {
    /// The text of the cursor's line, up to the cursor.
    pub line_prefix: &'a str,
    /// The blocks enclosing the cursor.
    pub block_path: BlockPath,
    /// The snake-case entity kind of the file, like `trait` or `scripted_effect`.
    pub entity: &'a str,
}

/// Produce the completion candidates for a request.
///
/// This never fails: an unknown entity, a cursor in a comment, or a field without a schema all
/// just give no candidates.
pub fn synthesize(
    registry: &Registry,
    request: &CompletionRequest,
    options: &CompletionOptions,
) -> Vec<Candidate> {
    let Some(entity) = registry.entity_by_name(request.entity) else {
        return Vec::new();
    };
    let line = parse_line_context(request.line_prefix);
    if line.in_comment {
        return Vec::new();
    }

    if request.block_path.depth == 0 {
        if request.line_prefix.trim().is_empty() {
            return vec![definition_snippet(entity)];
        }
        return Vec::new();
    }

    let fields = fields_for_context(registry, entity, &request.block_path.path);
    if line.after_equals {
        let Some(name) = &line.field_name else {
            return Vec::new();
        };
        let partial = line.partial_value.as_deref().unwrap_or("");
        fields
            .iter()
            .find(|f| &f.field.name == name)
            .map(|f| value_candidates(f.field, partial, options))
            .unwrap_or_default()
    } else {
        field_candidates(&fields, &line.partial_field, options)
    }
}

fn definition_snippet(entity: &EntitySchema) -> Candidate {
    Candidate {
        label: entity.kind.to_string(),
        kind: CandidateKind::Snippet,
        detail: format!("new {} definition", entity.kind),
        documentation: format!("Insert the skeleton of a new {} definition.", entity.kind),
        insert_text: entity.snippet.clone(),
        insert_format: InsertFormat::Snippet,
        sort_text: "0".to_owned(),
    }
}

/// The text of line `line` up to character column `column`.
fn line_prefix<S: AsRef<str>>(lines: &[S], line: usize, column: usize) -> &str {
    let Some(text) = lines.get(line).map(AsRef::as_ref) else {
        return "";
    };
    match text.char_indices().nth(column) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Split the text of a buffer into lines. A leading byte order mark is dropped, so that it does
/// not count as a column of the first line.
pub fn buffer_lines(contents: &str) -> Vec<&str> {
    contents.strip_prefix('\u{feff}').unwrap_or(contents).lines().collect()
}

/// Complete at a cursor position in a buffer. Lines and columns are 0-based, and columns count
/// characters.
pub fn complete<S: AsRef<str>>(
    registry: &Registry,
    lines: &[S],
    line: usize,
    column: usize,
    entity: &str,
    options: &CompletionOptions,
) -> Vec<Candidate> {
    let request = CompletionRequest {
        line_prefix: line_prefix(lines, line, column),
        block_path: compute_block_path(lines, line, column),
        entity,
    };
    synthesize(registry, &request, options)
}

/// Describe a cursor position without making candidates. Returns `None` for an unknown entity.
pub fn analyze_at<S: AsRef<str>>(
    registry: &Registry,
    lines: &[S],
    line: usize,
    column: usize,
    entity: &str,
) -> Option<AnalysisContext> {
    let entity = registry.entity_by_name(entity)?;
    let block_path = compute_block_path(lines, line, column);
    let line_context = parse_line_context(line_prefix(lines, line, column));
    Some(classify(registry, entity, &block_path, &line_context))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(lines: &[&str], line: usize, column: usize, entity: &str) -> Vec<String> {
        complete(Registry::builtin(), lines, line, column, entity, &CompletionOptions::default())
            .into_iter()
            .map(|c| c.label)
            .collect()
    }

    #[test]
    fn test_line_prefix() {
        let lines = ["\tlevel = 5", "ünïcode = x"];
        assert_eq!(line_prefix(&lines, 0, 3), "\tle");
        assert_eq!(line_prefix(&lines, 0, 100), "\tlevel = 5");
        assert_eq!(line_prefix(&lines, 1, 3), "ünï");
        assert_eq!(line_prefix(&lines, 5, 0), "");
    }

    #[test]
    fn test_top_level() {
        let candidates =
            complete(Registry::builtin(), &[""], 0, 0, "trait", &CompletionOptions::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, CandidateKind::Snippet);
        assert_eq!(candidates[0].insert_format, InsertFormat::Snippet);
        assert!(labels(&["my_tr"], 0, 5, "trait").is_empty());
    }

    #[test]
    fn test_unknown_entity() {
        assert!(labels(&[""], 0, 0, "no_such_entity").is_empty());
        assert!(labels(&["x = {", "\t"], 1, 1, "no_such_entity").is_empty());
        assert!(analyze_at(Registry::builtin(), &[""], 0, 0, "no_such_entity").is_none());
    }

    #[test]
    fn test_comment() {
        assert!(labels(&["x = {", "\t# add_"], 1, 7, "scripted_effect").is_empty());
    }

    #[test]
    fn test_value_position() {
        let lines = ["brave = {", "\tcategory = "];
        let values = labels(&lines, 1, 12, "trait");
        assert!(values.contains(&"personality".to_owned()));
        let lines = ["brave = {", "\tnot_a_field = "];
        assert!(labels(&lines, 1, 15, "trait").is_empty());
    }

    #[test]
    fn test_buffer_lines() {
        let contents = "\u{feff}brave = {\r\n\tcateg\n}";
        let lines = buffer_lines(contents);
        assert_eq!(lines, vec!["brave = {", "\tcateg", "}"]);
        assert_eq!(compute_block_path(&lines, 1, 0).depth, 1);
        assert_eq!(labels(&lines, 1, 6, "trait"), vec!["category"]);
        assert!(buffer_lines("\u{feff}").is_empty());
    }

    #[test]
    fn test_conditional_scope() {
        let lines = ["my_effect = {", "	scope:target ?= {", "		"];
        let context = analyze_at(Registry::builtin(), &lines, 2, 2, "scripted_effect").unwrap();
        assert_eq!(context.block_path, vec!["scope:target"]);
        assert!(context.unknown_scope);
        let all = labels(&lines, 2, 2, "scripted_effect");
        assert_eq!(all.len(), Registry::builtin().effects().len());
    }

    #[test]
    fn test_plain_inserts() {
        let options = CompletionOptions { snippets: false, ..CompletionOptions::default() };
        let lines = ["brave = {", "\tcateg"];
        let candidates = complete(Registry::builtin(), &lines, 1, 6, "trait", &options);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].insert_text, "category = ");
        assert_eq!(candidates[0].insert_format, InsertFormat::Plain);
    }
}
