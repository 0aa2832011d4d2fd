//! Candidates for field names.

use crate::analysis::ResolvedField;
use crate::complete::candidate::{Candidate, InsertFormat};
use crate::complete::CompletionOptions;
use crate::helpers::starts_with_ignore_case;
use crate::schema::{FieldDescriptor, FieldKind};

/// Make candidates for the fields whose name starts with `partial`, required fields first.
pub fn field_candidates(
    fields: &[ResolvedField],
    partial: &str,
    options: &CompletionOptions,
) -> Vec<Candidate> {
    let mut fields: Vec<&ResolvedField> =
        fields.iter().filter(|f| starts_with_ignore_case(&f.field.name, partial)).collect();
    fields.sort_by_cached_key(|f| (!f.field.required, f.field.name.to_lowercase()));
    fields
        .into_iter()
        .map(|resolved| {
            let field = resolved.field;
            let (insert_text, insert_format) = if options.snippets {
                (insert_template(field, options.max_enum_choices), InsertFormat::Snippet)
            } else {
                (format!("{} = ", field.name), InsertFormat::Plain)
            };
            Candidate {
                label: field.name.clone(),
                kind: resolved.origin.into(),
                detail: detail(field),
                documentation: documentation(field),
                insert_text,
                insert_format,
                sort_text: format!(
                    "{}_{}",
                    if field.required { 0 } else { 1 },
                    field.name.to_lowercase()
                ),
            }
        })
        .collect()
}

/// The snippet inserted for a field, with its value as a placeholder.
pub fn insert_template(field: &FieldDescriptor, max_choices: usize) -> String {
    let name = &field.name;
    if field.kind.opens_block() {
        return format!("{name} = {{\n\t$0\n}}");
    }
    if let Some(default) = &field.default {
        return format!("{name} = ${{1:{}}}", escape_placeholder(default));
    }
    match field.kind {
        FieldKind::Boolean => format!("{name} = ${{1|yes,no|}}"),
        FieldKind::Enum if !field.allowed_values.is_empty() => {
            let choices: Vec<String> = field
                .allowed_values
                .iter()
                .take(max_choices.max(1))
                .map(|v| escape_choice(v))
                .collect();
            format!("{name} = ${{1|{}|}}", choices.join(","))
        }
        FieldKind::Integer => format!("{name} = ${{1:0}}"),
        FieldKind::Float => format!("{name} = ${{1:0.0}}"),
        _ => format!("{name} = ${{1:value}}"),
    }
}

/// A short summary like `integer (required)` or `boolean, default yes`.
pub fn detail(field: &FieldDescriptor) -> String {
    let mut detail = field.kind.to_string();
    if field.required {
        detail.push_str(" (required)");
    }
    if let Some(default) = &field.default {
        detail.push_str(", default ");
        detail.push_str(default);
    }
    detail
}

/// The description, allowed values, default, and example, separated by blank lines.
pub fn documentation(field: &FieldDescriptor) -> String {
    let mut parts = Vec::new();
    if !field.description.is_empty() {
        parts.push(field.description.clone());
    }
    if !field.allowed_values.is_empty() {
        parts.push(format!("Allowed values: {}", field.allowed_values.join(", ")));
    }
    if let Some(default) = &field.default {
        parts.push(format!("Default: {default}"));
    }
    if let Some(example) = &field.example {
        parts.push(format!("Example: `{example}`"));
    }
    parts.join("\n\n")
}

fn escape_placeholder(s: &str) -> String {
    s.replace('\\', "\\\\").replace('$', "\\$").replace('}', "\\}")
}

fn escape_choice(s: &str) -> String {
    s.replace('\\', "\\\\").replace(',', "\\,").replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FieldOrigin;
    use crate::complete::candidate::CandidateKind;

    fn descriptor(name: &str, kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor::new(name, kind, "A field.")
    }

    #[test]
    fn test_templates() {
        let template = |name, kind| insert_template(&descriptor(name, kind), 20);
        assert_eq!(template("hidden", FieldKind::Boolean), "hidden = ${1|yes,no|}");
        assert_eq!(template("level", FieldKind::Integer), "level = ${1:0}");
        assert_eq!(template("health", FieldKind::Float), "health = ${1:0.0}");
        assert_eq!(template("icon", FieldKind::String), "icon = ${1:value}");
        assert_eq!(template("limit", FieldKind::Trigger), "limit = {\n\t$0\n}");
        assert_eq!(template("events", FieldKind::List), "events = {\n\t$0\n}");

        let mut field = descriptor("stacking", FieldKind::Boolean);
        field.default = Some("no".to_owned());
        assert_eq!(insert_template(&field, 20), "stacking = ${1:no}");
    }

    #[test]
    fn test_enum_template() {
        let mut field = descriptor("skill", FieldKind::Enum);
        field.allowed_values = (0..30).map(|i| format!("v{i}")).collect();
        let template = insert_template(&field, 20);
        assert!(template.contains("v19|"));
        assert!(!template.contains("v20"));
        assert_eq!(insert_template(&field, 2), "skill = ${1|v0,v1|}");

        field.allowed_values = vec!["a,b".to_owned()];
        assert_eq!(insert_template(&field, 20), "skill = ${1|a\\,b|}");
    }

    #[test]
    fn test_documentation() {
        let mut field = descriptor("type", FieldKind::Enum);
        field.allowed_values = vec!["a".to_owned(), "b".to_owned()];
        field.default = Some("a".to_owned());
        field.example = Some("type = b".to_owned());
        assert_eq!(
            documentation(&field),
            "A field.\n\nAllowed values: a, b\n\nDefault: a\n\nExample: `type = b`"
        );
        field.required = true;
        assert_eq!(detail(&field), "enum (required), default a");
    }

    #[test]
    fn test_sorting_and_filter() {
        let mut required = descriptor("Zeta", FieldKind::String);
        required.required = true;
        let alpha = descriptor("alpha", FieldKind::String);
        let beta = descriptor("beta", FieldKind::String);
        let fields = [
            ResolvedField { origin: FieldOrigin::Field, field: &beta },
            ResolvedField { origin: FieldOrigin::Field, field: &alpha },
            ResolvedField { origin: FieldOrigin::Trigger, field: &required },
        ];
        let options = CompletionOptions::default();
        let labels: Vec<_> =
            field_candidates(&fields, "", &options).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Zeta", "alpha", "beta"]);

        let candidates = field_candidates(&fields, "Z", &options);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].kind, CandidateKind::Trigger);
        assert_eq!(candidates[0].sort_text, "0_zeta");

        let plain = CompletionOptions { snippets: false, ..CompletionOptions::default() };
        let candidates = field_candidates(&fields, "al", &plain);
        assert_eq!(candidates[0].insert_text, "alpha = ");
        assert_eq!(candidates[0].insert_format, InsertFormat::Plain);
    }
}
