//! The trigger and effect catalogs.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::helpers::TigerHashMap;
use crate::schema::field::{FieldDescriptor, FieldKind};
use crate::scopes::Scopes;

/// Which of the two catalogs a keyword lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogKind {
    Trigger,
    Effect,
}

impl CatalogKind {
    /// The field kind of a block that holds keywords from this catalog.
    pub fn block_kind(self) -> FieldKind {
        match self {
            CatalogKind::Trigger => FieldKind::Trigger,
            CatalogKind::Effect => FieldKind::Effect,
        }
    }
}

/// The kind of value a trigger or effect takes on the right of its `=`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Block,
    Boolean,
    Number,
    Scope,
    Text,
}

/// One trigger or effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordDef {
    pub name: String,
    pub description: String,
    /// An example of how it's used, like `add_gold = 100`
    pub syntax: String,
    /// True for the list iterators, like `every_vassal`
    pub is_iterator: bool,
    /// The scopes in which it can be used. `Scopes::None` means it doesn't care.
    pub input_scopes: Scopes,
    /// The scope of the block it opens, if it changes scope.
    pub output_scope: Option<Scopes>,
    pub value_type: Option<ValueType>,
}

impl KeywordDef {
    /// The descriptor used when offering this keyword as a field in a block of `kind`.
    fn field_for(&self, kind: CatalogKind) -> FieldDescriptor {
        let field_kind = match self.value_type {
            Some(ValueType::Block) => kind.block_kind(),
            Some(ValueType::Boolean) => FieldKind::Boolean,
            Some(ValueType::Number) => FieldKind::Float,
            Some(ValueType::Scope | ValueType::Text) | None => FieldKind::String,
        };
        let mut field = FieldDescriptor::new(&self.name, field_kind, &self.description);
        if !self.syntax.is_empty() {
            field.example = Some(self.syntax.clone());
        }
        field
    }
}

/// All the known triggers, or all the known effects.
///
/// Each keyword is stored together with the field descriptor that the completion engine offers
/// for it, so that catalog entries and schema fields can be treated alike.
#[derive(Clone, Debug)]
pub struct Catalog {
    kind: CatalogKind,
    list: Vec<(KeywordDef, FieldDescriptor)>,
    map: TigerHashMap<String, usize>,
}

impl Catalog {
    pub fn new(kind: CatalogKind) -> Self {
        Catalog { kind, list: Vec::new(), map: TigerHashMap::default() }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Add a keyword, replacing any previous definition of the same name.
    /// Returns true iff one was replaced.
    pub fn insert(&mut self, def: KeywordDef) -> bool {
        let field = def.field_for(self.kind);
        if let Some(&idx) = self.map.get(&def.name) {
            self.list[idx] = (def, field);
            true
        } else {
            self.map.insert(def.name.clone(), self.list.len());
            self.list.push((def, field));
            false
        }
    }

    pub fn get(&self, name: &str) -> Option<&KeywordDef> {
        self.map.get(name).map(|&idx| &self.list[idx].0)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.map.get(name).map(|&idx| &self.list[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordDef> {
        self.list.iter().map(|(def, _)| def)
    }

    /// The field descriptors of the keywords that can be used in scope `scope`.
    /// If the scope is not known, all of them are returned.
    pub fn fields_for_scope(
        &self,
        scope: Scopes,
        unknown_scope: bool,
    ) -> impl Iterator<Item = &FieldDescriptor> {
        self.list
            .iter()
            .filter(move |(def, _)| unknown_scope || def.input_scopes.accepts(scope))
            .map(|(_, field)| field)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
