//! The schema registry: everything the completion engine knows about CK3 script.

use std::sync::LazyLock;

use strum::IntoEnumIterator;

use crate::entity::EntityKind;
use crate::helpers::TigerHashMap;
use crate::schema::catalog::{Catalog, CatalogKind, KeywordDef, ValueType};
use crate::schema::field::{FieldList, RawField};
use crate::schema::modif::{modif_fields, ModifierCategory};
use crate::schema::tables::effects::EFFECT;
use crate::schema::tables::entities::{ExtraMode, BLOCK_EXTRAS, ENTITIES};
use crate::schema::tables::extras::{EFFECT_EXTRAS, ITERATOR_EXTRAS, TRIGGER_EXTRAS};
use crate::schema::tables::internal::{EFFECT_INTERNAL, TRIGGER_INTERNAL};
use crate::schema::tables::iterators::{ITERATOR_PREFIXES, SCOPE_ITERATOR};
use crate::schema::tables::targets::SCOPE_TO_SCOPE;
use crate::schema::tables::triggers::TRIGGER;
use crate::scopes::Scopes;

/// What the body of a definition holds when it is not just a list of fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityBody {
    /// Like scripted triggers
    Triggers,
    /// Like scripted effects
    Effects,
    /// Like static modifiers
    Modifiers(ModifierCategory),
}

/// The schema of one entity kind's top-level definitions.
#[derive(Clone, Debug)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// The scope of the definition's body.
    pub initial_scope: Scopes,
    /// An editor snippet for a new definition.
    pub snippet: String,
    pub fields: FieldList,
    pub body: Option<EntityBody>,
}

/// The fields of one named block in one kind of definition.
#[derive(Clone, Debug)]
pub struct BlockExtra {
    pub mode: ExtraMode,
    pub fields: FieldList,
}

impl BlockExtra {
    fn from_raw(mode: ExtraMode, raw: &[RawField]) -> Self {
        BlockExtra { mode, fields: FieldList::from_raw(raw) }
    }
}

#[derive(Clone, Debug)]
pub struct Registry {
    entities: TigerHashMap<EntityKind, EntitySchema>,
    triggers: Catalog,
    effects: Catalog,
    trigger_internal: TigerHashMap<String, FieldList>,
    effect_internal: TigerHashMap<String, FieldList>,
    trigger_extras: TigerHashMap<String, FieldList>,
    effect_extras: TigerHashMap<String, FieldList>,
    modifiers: TigerHashMap<ModifierCategory, FieldList>,
    block_extras: TigerHashMap<(EntityKind, String), BlockExtra>,
}

static BUILTIN: LazyLock<Registry> = LazyLock::new(Registry::new_builtin);

impl Registry {
    /// The shared registry holding only the built-in data.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Build a new registry from the built-in data. Use this when schema extensions will be
    /// loaded into it.
    pub fn new_builtin() -> Self {
        let mut registry = Registry {
            entities: TigerHashMap::default(),
            triggers: Catalog::new(CatalogKind::Trigger),
            effects: Catalog::new(CatalogKind::Effect),
            trigger_internal: TigerHashMap::default(),
            effect_internal: TigerHashMap::default(),
            trigger_extras: TigerHashMap::default(),
            effect_extras: TigerHashMap::default(),
            modifiers: TigerHashMap::default(),
            block_extras: TigerHashMap::default(),
        };

        for (kind, scope, snippet, fields, body) in ENTITIES.iter().copied() {
            registry.entities.insert(
                kind,
                EntitySchema {
                    kind,
                    initial_scope: scope,
                    snippet: snippet.to_owned(),
                    fields: FieldList::from_raw(fields),
                    body,
                },
            );
        }

        for (from, name, to) in SCOPE_ITERATOR.iter().copied() {
            for (prefix, is_trigger) in ITERATOR_PREFIXES.iter().copied() {
                let def = iterator_def(from, prefix, name, to);
                if is_trigger {
                    registry.triggers.insert(def);
                } else {
                    registry.effects.insert(def);
                }
            }
        }

        for (from, name, to) in SCOPE_TO_SCOPE.iter().copied() {
            registry.triggers.insert(link_def(from, name, to, "triggers"));
            registry.effects.insert(link_def(from, name, to, "effects"));
        }

        for (input, name, value_type, description, syntax) in TRIGGER.iter().copied() {
            registry.triggers.insert(plain_def(input, name, value_type, description, syntax));
        }
        for (input, name, value_type, description, syntax) in EFFECT.iter().copied() {
            registry.effects.insert(plain_def(input, name, value_type, description, syntax));
        }

        for (name, fields) in TRIGGER_INTERNAL.iter().copied() {
            registry.trigger_internal.insert(name.to_owned(), FieldList::from_raw(fields));
        }
        for (name, fields) in EFFECT_INTERNAL.iter().copied() {
            registry.effect_internal.insert(name.to_owned(), FieldList::from_raw(fields));
        }
        for (name, fields) in TRIGGER_EXTRAS.iter().copied() {
            registry.trigger_extras.insert(name.to_owned(), FieldList::from_raw(fields));
        }
        for (name, fields) in EFFECT_EXTRAS.iter().copied() {
            registry.effect_extras.insert(name.to_owned(), FieldList::from_raw(fields));
        }
        for (_, name, _) in SCOPE_ITERATOR.iter().copied() {
            for (prefix, fields) in ITERATOR_EXTRAS.iter().copied() {
                let extras = FieldList::from_raw(fields);
                let key = format!("{prefix}{name}");
                if prefix == "any_" {
                    registry.trigger_extras.insert(key, extras);
                } else {
                    registry.effect_extras.insert(key, extras);
                }
            }
        }

        for category in ModifierCategory::iter() {
            let mut fields = FieldList::default();
            for field in modif_fields(category) {
                fields.insert(field);
            }
            registry.modifiers.insert(category, fields);
        }

        for (kind, block, mode, fields) in BLOCK_EXTRAS.iter().copied() {
            registry
                .block_extras
                .insert((kind, block.to_owned()), BlockExtra::from_raw(mode, fields));
        }

        registry
    }

    pub fn entity(&self, kind: EntityKind) -> Option<&EntitySchema> {
        self.entities.get(&kind)
    }

    /// Look up an entity schema by the name editors use for it, like `"scripted_effect"`.
    pub fn entity_by_name(&self, name: &str) -> Option<&EntitySchema> {
        EntityKind::from_name(name).and_then(|kind| self.entity(kind))
    }

    pub(crate) fn entity_mut(&mut self, kind: EntityKind) -> Option<&mut EntitySchema> {
        self.entities.get_mut(&kind)
    }

    /// All entity schemas, in the order of [`EntityKind`].
    pub fn entities(&self) -> impl Iterator<Item = &EntitySchema> {
        EntityKind::iter().filter_map(|kind| self.entities.get(&kind))
    }

    pub fn triggers(&self) -> &Catalog {
        &self.triggers
    }

    pub fn effects(&self) -> &Catalog {
        &self.effects
    }

    pub fn catalog(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Trigger => &self.triggers,
            CatalogKind::Effect => &self.effects,
        }
    }

    pub(crate) fn catalog_mut(&mut self, kind: CatalogKind) -> &mut Catalog {
        match kind {
            CatalogKind::Trigger => &mut self.triggers,
            CatalogKind::Effect => &mut self.effects,
        }
    }

    /// Look up a trigger by name, and if there is none then an effect.
    pub fn keyword(&self, name: &str) -> Option<&KeywordDef> {
        self.triggers.get(name).or_else(|| self.effects.get(name))
    }

    /// The fixed fields of the trigger or effect `name`, if it has any. Nothing else is valid
    /// inside its block.
    pub fn internal(&self, kind: CatalogKind, name: &str) -> Option<&FieldList> {
        match kind {
            CatalogKind::Trigger => self.trigger_internal.get(name),
            CatalogKind::Effect => self.effect_internal.get(name),
        }
    }

    /// The fields that the block of trigger or effect `name` takes besides the usual triggers
    /// or effects.
    pub fn keyword_extra(&self, kind: CatalogKind, name: &str) -> Option<&FieldList> {
        match kind {
            CatalogKind::Trigger => self.trigger_extras.get(name),
            CatalogKind::Effect => self.effect_extras.get(name),
        }
    }

    /// The values that can be changed in a modifier block of this category.
    pub fn modifier_fields(&self, category: ModifierCategory) -> Option<&FieldList> {
        self.modifiers.get(&category)
    }

    /// The fields specific to block `name` in definitions of entity kind `kind`.
    pub fn block_extra(&self, kind: EntityKind, name: &str) -> Option<&BlockExtra> {
        self.block_extras.get(&(kind, name.to_owned()))
    }
}

fn iterator_def(from: Scopes, prefix: &str, name: &str, to: Scopes) -> KeywordDef {
    let items = name.replace('_', " ");
    let from_name = if from == Scopes::None { "world".to_owned() } else { from.to_string() };
    let (description, syntax) = match prefix {
        "any_" => (
            format!("True if any {items} of the {from_name} matches the triggers inside."),
            format!("any_{name} = {{ count >= 1 ... }}"),
        ),
        "every_" => (
            format!("Executes the effects inside for every {items} of the {from_name}."),
            format!("every_{name} = {{ limit = {{ ... }} ... }}"),
        ),
        "random_" => (
            format!("Executes the effects inside for one random {items} of the {from_name}."),
            format!("random_{name} = {{ limit = {{ ... }} ... }}"),
        ),
        _ => (
            format!("Executes the effects inside for the {items} of the {from_name} that sorts first."),
            format!("ordered_{name} = {{ order_by = ... ... }}"),
        ),
    };
    KeywordDef {
        name: format!("{prefix}{name}"),
        description,
        syntax,
        is_iterator: true,
        input_scopes: from,
        output_scope: Some(to),
        value_type: Some(ValueType::Block),
    }
}

fn link_def(from: Scopes, name: &str, to: Scopes, what: &str) -> KeywordDef {
    KeywordDef {
        name: name.to_owned(),
        description: format!("Evaluates the {what} inside in the scope of the {from}'s {to}."),
        syntax: format!("{name} = {{ ... }}"),
        is_iterator: false,
        input_scopes: from,
        output_scope: Some(to),
        value_type: Some(ValueType::Block),
    }
}

fn plain_def(
    input: Scopes,
    name: &str,
    value_type: ValueType,
    description: &str,
    syntax: &str,
) -> KeywordDef {
    KeywordDef {
        name: name.to_owned(),
        description: description.to_owned(),
        syntax: syntax.to_owned(),
        is_iterator: false,
        input_scopes: input,
        output_scope: None,
        value_type: Some(value_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::field::FieldKind;

    #[test]
    fn test_iterators_expand() {
        let registry = Registry::builtin();
        let any = registry.triggers().get("any_vassal").unwrap();
        assert!(any.is_iterator);
        assert_eq!(any.output_scope, Some(Scopes::Character));
        for name in ["every_vassal", "random_vassal", "ordered_vassal"] {
            let def = registry.effects().get(name).unwrap();
            assert!(def.is_iterator);
            assert_eq!(def.input_scopes, Scopes::Character);
        }
        assert!(registry.effects().get("any_vassal").is_none());
        assert!(registry.triggers().get("every_vassal").is_none());
    }

    #[test]
    fn test_scope_links() {
        let registry = Registry::builtin();
        let liege = registry.triggers().get("liege").unwrap();
        assert!(!liege.is_iterator);
        assert_eq!(liege.output_scope, Some(Scopes::Character));
        assert_eq!(
            registry.effects().get("primary_title").unwrap().output_scope,
            Some(Scopes::LandedTitle)
        );
    }

    #[test]
    fn test_internal() {
        let registry = Registry::builtin();
        let opinion = registry.internal(CatalogKind::Trigger, "opinion").unwrap();
        let names: Vec<_> = opinion.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["target", "value"]);
        assert!(registry.keyword_extra(CatalogKind::Trigger, "opinion").is_none());

        // Control flow and iterators take the usual triggers or effects too
        for name in ["if", "every_vassal", "random_child"] {
            assert!(registry.internal(CatalogKind::Effect, name).is_none());
        }
        assert!(registry.internal(CatalogKind::Trigger, "any_child").is_none());
    }

    #[test]
    fn test_keyword_extras() {
        let registry = Registry::builtin();
        let every = registry.keyword_extra(CatalogKind::Effect, "every_vassal").unwrap();
        assert!(every.get("limit").is_some());
        let ordered = registry.keyword_extra(CatalogKind::Effect, "ordered_child").unwrap();
        assert!(ordered.get("order_by").is_some());
        let any = registry.keyword_extra(CatalogKind::Trigger, "any_child").unwrap();
        assert!(any.get("count").is_some());
        assert!(any.get("limit").is_none());
        let names: Vec<_> = registry
            .keyword_extra(CatalogKind::Effect, "if")
            .unwrap()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["limit"]);
    }

    #[test]
    fn test_entities() {
        let registry = Registry::builtin();
        assert_eq!(registry.entities().count(), EntityKind::iter().count());
        let event = registry.entity_by_name("event").unwrap();
        assert_eq!(event.initial_scope, Scopes::Character);
        assert_eq!(event.fields.get("immediate").unwrap().kind, FieldKind::Effect);
        let scripted = registry.entity(EntityKind::ScriptedEffect).unwrap();
        assert_eq!(scripted.body, Some(EntityBody::Effects));
        assert!(registry.entity_by_name("no_such_thing").is_none());
    }

    #[test]
    fn test_block_extras() {
        let registry = Registry::builtin();
        let option = registry.block_extra(EntityKind::Event, "option").unwrap();
        assert_eq!(option.mode, ExtraMode::Extending);
        assert!(option.fields.get("ai_chance").is_some());
        assert!(registry.block_extra(EntityKind::Trait, "option").is_none());
    }

    #[test]
    fn test_modifiers() {
        let registry = Registry::builtin();
        let fields = registry.modifier_fields(ModifierCategory::Character).unwrap();
        assert!(fields.get("monthly_prestige").is_some());
    }
}
