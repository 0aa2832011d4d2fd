//! Loading extra schema data from JSON files, for mods that add their own definitions.
//!
//! The file format mirrors the built-in tables:
//!
//! ```json
//! {
//!     "entities": {
//!         "trait": { "fields": [ { "name": "my_field", "kind": "boolean" } ] }
//!     },
//!     "triggers": [ { "name": "my_trigger", "value_type": "boolean", "input_scopes": ["character"] } ],
//!     "effects": []
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::entity::EntityKind;
use crate::loc::Loc;
use crate::report::{err, untidy, warn, ErrorKey};
use crate::schema::catalog::{CatalogKind, KeywordDef, ValueType};
use crate::schema::field::{FieldDescriptor, FieldKind};
use crate::schema::registry::Registry;
use crate::scopes::{scope_from_snake_case, Scopes};

/// Problems with individual entries of an otherwise well-formed extension file.
/// The entries concerned are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown entity type `{0}`")]
    UnknownEntity(String),
    #[error("unknown scope type `{0}`")]
    UnknownScope(String),
    #[error("enum field `{0}` has no allowed values")]
    MissingValues(String),
}

impl SchemaError {
    pub fn key(&self) -> ErrorKey {
        match self {
            SchemaError::UnknownEntity(_) => ErrorKey::UnknownEntity,
            SchemaError::UnknownScope(_) => ErrorKey::UnknownScope,
            SchemaError::MissingValues(_) => ErrorKey::MissingValues,
        }
    }

    fn name(&self) -> &str {
        match self {
            SchemaError::UnknownEntity(name)
            | SchemaError::UnknownScope(name)
            | SchemaError::MissingValues(name) => name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaExtension {
    #[serde(default)]
    entities: BTreeMap<String, EntityExtension>,
    #[serde(default)]
    triggers: Vec<KeywordExtension>,
    #[serde(default)]
    effects: Vec<KeywordExtension>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityExtension {
    initial_scope: Option<String>,
    snippet: Option<String>,
    #[serde(default)]
    fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordExtension {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    syntax: String,
    #[serde(default)]
    is_iterator: bool,
    /// Missing means the keyword can be used in any scope.
    input_scopes: Option<Vec<String>>,
    output_scope: Option<String>,
    value_type: Option<ValueType>,
}

impl KeywordExtension {
    fn into_def(self) -> Result<KeywordDef, SchemaError> {
        let input_scopes = match self.input_scopes {
            None => Scopes::all(),
            Some(names) => {
                let mut scopes = Scopes::empty();
                for name in names {
                    scopes |= parse_scope(&name)?;
                }
                scopes
            }
        };
        let output_scope = self.output_scope.as_deref().map(parse_scope).transpose()?;
        Ok(KeywordDef {
            name: self.name,
            description: self.description,
            syntax: self.syntax,
            is_iterator: self.is_iterator,
            input_scopes,
            output_scope,
            value_type: self.value_type,
        })
    }
}

fn parse_scope(name: &str) -> Result<Scopes, SchemaError> {
    scope_from_snake_case(name).ok_or_else(|| SchemaError::UnknownScope(name.to_owned()))
}

fn check_field(field: &FieldDescriptor) -> Result<(), SchemaError> {
    if field.kind == FieldKind::Enum && field.allowed_values.is_empty() {
        return Err(SchemaError::MissingValues(field.name.clone()));
    }
    Ok(())
}

/// Find the first place where `name` occurs as a JSON string, to point reports at.
fn locate(path: &Path, contents: &str, name: &str) -> Loc {
    let needle = format!("\"{name}\"");
    for (nr, line) in contents.lines().enumerate() {
        if let Some(pos) = line.find(&needle) {
            return Loc::new(path, nr + 1, line[..pos].chars().count() + 2);
        }
    }
    Loc::for_file(path)
}

impl Registry {
    /// Read a schema extension file and merge it into this registry.
    ///
    /// Only failure to read the file is returned as an error. Problems with its contents are
    /// reported, and the affected entries are skipped.
    pub fn load_extension(&mut self, path: &Path) -> Result<()> {
        let contents = read_to_string(path)
            .with_context(|| format!("could not read schema extension {}", path.display()))?;
        self.load_extension_from_str(path, &contents);
        Ok(())
    }

    /// Merge the schema extension `contents` into this registry. `path` is used for reports.
    /// Returns how many entries were added or replaced.
    pub fn load_extension_from_str(&mut self, path: &Path, contents: &str) -> usize {
        let extension: SchemaExtension = match serde_json::from_str(contents) {
            Ok(extension) => extension,
            Err(e) => {
                let loc = Loc::new(path, e.line(), e.column());
                err(ErrorKey::ParseError)
                    .msg("could not parse schema extension")
                    .info(e.to_string())
                    .loc(loc)
                    .push();
                return 0;
            }
        };

        let mut count = 0;
        for (name, entity) in extension.entities {
            count += self.merge_entity(path, contents, &name, entity);
        }
        for (kind, keywords) in
            [(CatalogKind::Trigger, extension.triggers), (CatalogKind::Effect, extension.effects)]
        {
            for keyword in keywords {
                let name = keyword.name.clone();
                match keyword.into_def() {
                    Ok(def) => {
                        if self.catalog_mut(kind).insert(def) {
                            let msg = format!("{kind} `{name}` replaces the built-in definition");
                            let loc = locate(path, contents, &name);
                            untidy(ErrorKey::Override).weak().msg(msg).loc(loc).push();
                        }
                        count += 1;
                    }
                    Err(e) => report_schema_error(path, contents, &e),
                }
            }
        }
        count
    }

    fn merge_entity(
        &mut self,
        path: &Path,
        contents: &str,
        name: &str,
        entity: EntityExtension,
    ) -> usize {
        let Some(schema) = EntityKind::from_name(name).and_then(|kind| self.entity_mut(kind))
        else {
            let e = SchemaError::UnknownEntity(name.to_owned());
            warn(e.key())
                .msg(e.to_string())
                .info("entries for this entity type are ignored")
                .loc(locate(path, contents, name))
                .push();
            return 0;
        };

        let mut count = 0;
        if let Some(scope) = entity.initial_scope {
            match parse_scope(&scope) {
                Ok(scope) => schema.initial_scope = scope,
                Err(e) => report_schema_error(path, contents, &e),
            }
        }
        if let Some(snippet) = entity.snippet {
            schema.snippet = snippet;
        }
        for field in entity.fields {
            if let Err(e) = check_field(&field) {
                report_schema_error(path, contents, &e);
                continue;
            }
            let field_name = field.name.clone();
            if schema.fields.insert(field) {
                let msg = format!("field `{field_name}` of {name} replaces the built-in definition");
                let loc = locate(path, contents, &field_name);
                untidy(ErrorKey::Override).weak().msg(msg).loc(loc).push();
            }
            count += 1;
        }
        count
    }
}

fn report_schema_error(path: &Path, contents: &str, e: &SchemaError) {
    err(e.key())
        .msg(e.to_string())
        .info("this entry is skipped")
        .loc((locate(path, contents, e.name()), e.name().chars().count()))
        .push();
}
