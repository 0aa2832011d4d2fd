//! Descriptors for the fields that may appear inside a script block.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// What kind of value a field takes.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    /// One of a fixed list of values
    Enum,
    /// A block of fields specific to this field
    Block,
    /// A block of triggers
    Trigger,
    /// A block of effects
    Effect,
    /// A block of bare values
    List,
}

impl FieldKind {
    /// Fields of these kinds take `= { ... }` as their value.
    pub fn opens_block(self) -> bool {
        matches!(self, FieldKind::Block | FieldKind::Trigger | FieldKind::Effect | FieldKind::List)
    }
}

/// A description of one field that may appear in a block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub description: String,
    /// Only for `FieldKind::Enum`, where it must not be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, kind: FieldKind, description: &str) -> Self {
        FieldDescriptor {
            name: name.to_owned(),
            kind,
            description: description.to_owned(),
            allowed_values: Vec::new(),
            example: None,
            required: false,
            default: None,
        }
    }

    pub(crate) fn from_raw(raw: &RawField) -> Self {
        FieldDescriptor {
            name: raw.name.to_owned(),
            kind: raw.kind,
            description: raw.description.to_owned(),
            allowed_values: raw.values.iter().map(|s| (*s).to_owned()).collect(),
            example: raw.example.map(str::to_owned),
            required: raw.required,
            default: raw.default.map(str::to_owned),
        }
    }
}

/// A version of [`FieldDescriptor`] that can be built in a const table.
#[derive(Copy, Clone, Debug)]
pub(crate) struct RawField {
    name: &'static str,
    kind: FieldKind,
    description: &'static str,
    values: &'static [&'static str],
    example: Option<&'static str>,
    required: bool,
    default: Option<&'static str>,
}

/// Start a [`RawField`] for one of the const tables.
pub(crate) const fn field(name: &'static str, kind: FieldKind, description: &'static str) -> RawField {
    RawField { name, kind, description, values: &[], example: None, required: false, default: None }
}

impl RawField {
    pub(crate) const fn values(mut self, values: &'static [&'static str]) -> Self {
        self.values = values;
        self
    }

    pub(crate) const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    pub(crate) const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub(crate) const fn default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// An ordered list of field descriptors, with a lookup map by name.
#[derive(Clone, Debug, Default)]
pub struct FieldList {
    list: Vec<FieldDescriptor>,
    map: crate::helpers::TigerHashMap<String, usize>,
}

impl FieldList {
    pub(crate) fn from_raw(raw: &[RawField]) -> Self {
        let mut fields = FieldList::default();
        for field in raw {
            fields.insert(FieldDescriptor::from_raw(field));
        }
        fields
    }

    /// Add a field, replacing any field of the same name while keeping its position.
    /// Returns true iff a field was replaced.
    pub fn insert(&mut self, field: FieldDescriptor) -> bool {
        if let Some(&idx) = self.map.get(&field.name) {
            self.list[idx] = field;
            true
        } else {
            self.map.insert(field.name.clone(), self.list.len());
            self.list.push(field);
            false
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.map.get(name).map(|&idx| &self.list[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
