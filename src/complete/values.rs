//! Candidates for the value of a field, after its `=`.

use crate::complete::candidate::{Candidate, CandidateKind, InsertFormat};
use crate::complete::fields::documentation;
use crate::complete::CompletionOptions;
use crate::helpers::starts_with_ignore_case;
use crate::schema::{FieldDescriptor, FieldKind};

const INTEGER_SAMPLES: &[&str] = &["0", "1", "5", "10", "100"];
const FLOAT_SAMPLES: &[&str] = &["0.0", "0.5", "1.0", "-1.0"];

/// Make literal suggestions for the value of `field`, filtered by what was typed so far.
pub fn value_candidates(
    field: &FieldDescriptor,
    partial: &str,
    options: &CompletionOptions,
) -> Vec<Candidate> {
    let literals: Vec<&str> = match field.kind {
        FieldKind::Block | FieldKind::Trigger | FieldKind::Effect | FieldKind::List => {
            return vec![block_candidate(field, options)];
        }
        FieldKind::String => return vec![placeholder_candidate(field, options)],
        FieldKind::Enum => field.allowed_values.iter().map(String::as_str).collect(),
        FieldKind::Boolean => vec!["yes", "no"],
        FieldKind::Integer => INTEGER_SAMPLES.to_vec(),
        FieldKind::Float => FLOAT_SAMPLES.to_vec(),
    };

    let mut values = Vec::new();
    // The default goes first.
    if let Some(default) = &field.default {
        if literals.contains(&default.as_str()) || field.kind != FieldKind::Enum {
            values.push(default.as_str());
        }
    }
    for literal in literals {
        if !values.contains(&literal) {
            values.push(literal);
        }
    }

    values
        .into_iter()
        .filter(|value| starts_with_ignore_case(value, partial))
        .enumerate()
        .map(|(i, value)| Candidate {
            label: value.to_owned(),
            kind: CandidateKind::Value,
            detail: if field.default.as_deref() == Some(value) {
                format!("{} (default)", field.kind)
            } else {
                field.kind.to_string()
            },
            documentation: documentation(field),
            insert_text: value.to_owned(),
            insert_format: InsertFormat::Plain,
            sort_text: format!("{i:04}"),
        })
        .collect()
}

fn block_candidate(field: &FieldDescriptor, options: &CompletionOptions) -> Candidate {
    let (insert_text, insert_format) = if options.snippets {
        ("{\n\t$0\n}".to_owned(), InsertFormat::Snippet)
    } else {
        ("{  }".to_owned(), InsertFormat::Plain)
    };
    Candidate {
        label: "{ }".to_owned(),
        kind: CandidateKind::Snippet,
        detail: format!("open a {} block", field.kind),
        documentation: documentation(field),
        insert_text,
        insert_format,
        sort_text: "0000".to_owned(),
    }
}

fn placeholder_candidate(field: &FieldDescriptor, options: &CompletionOptions) -> Candidate {
    let value = field.default.as_deref().unwrap_or("value");
    let (insert_text, insert_format) = if options.snippets {
        (format!("${{1:{value}}}"), InsertFormat::Snippet)
    } else {
        (value.to_owned(), InsertFormat::Plain)
    };
    Candidate {
        label: value.to_owned(),
        kind: CandidateKind::Snippet,
        detail: field.kind.to_string(),
        documentation: documentation(field),
        insert_text,
        insert_format,
        sort_text: "0000".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(field: &FieldDescriptor, partial: &str) -> Vec<String> {
        value_candidates(field, partial, &CompletionOptions::default())
            .into_iter()
            .map(|c| c.label)
            .collect()
    }

    #[test]
    fn test_enum() {
        let mut field = FieldDescriptor::new("category", FieldKind::Enum, "");
        field.allowed_values = vec!["personality".into(), "education".into(), "Physical".into()];
        assert_eq!(labels(&field, ""), vec!["personality", "education", "Physical"]);
        assert_eq!(labels(&field, "p"), vec!["personality", "Physical"]);
        assert!(labels(&field, "x").is_empty());
        field.default = Some("education".into());
        assert_eq!(labels(&field, ""), vec!["education", "personality", "Physical"]);
    }

    #[test]
    fn test_samples() {
        let field = FieldDescriptor::new("hidden", FieldKind::Boolean, "");
        assert_eq!(labels(&field, ""), vec!["yes", "no"]);
        assert_eq!(labels(&field, "n"), vec!["no"]);
        let field = FieldDescriptor::new("level", FieldKind::Integer, "");
        assert_eq!(labels(&field, ""), vec!["0", "1", "5", "10", "100"]);
        assert_eq!(labels(&field, "1"), vec!["1", "10", "100"]);
        let mut field = FieldDescriptor::new("health", FieldKind::Float, "");
        assert_eq!(labels(&field, ""), vec!["0.0", "0.5", "1.0", "-1.0"]);
        field.default = Some("0.25".into());
        assert_eq!(labels(&field, "")[0], "0.25");
    }

    #[test]
    fn test_block() {
        let field = FieldDescriptor::new("add_opinion", FieldKind::Effect, "");
        let candidates = value_candidates(&field, "", &CompletionOptions::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label, "{ }");
        assert_eq!(candidates[0].insert_text, "{\n\t$0\n}");
        assert_eq!(candidates[0].insert_format, InsertFormat::Snippet);
    }

    #[test]
    fn test_string() {
        let field = FieldDescriptor::new("icon", FieldKind::String, "");
        let candidates = value_candidates(&field, "", &CompletionOptions::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].insert_text, "${1:value}");
        let plain = CompletionOptions { snippets: false, ..CompletionOptions::default() };
        assert_eq!(value_candidates(&field, "", &plain)[0].insert_text, "value");
    }
}
