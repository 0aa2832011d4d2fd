//! Classifying the cursor's position: what kind of block it is in, in which scope, and which
//! fields are valid there.

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::analysis::blockpath::BlockPath;
use crate::analysis::blocks::BlockRole;
use crate::analysis::line::LineContext;
use crate::helpers::{is_numeric, TigerHashSet};
use crate::schema::{
    CatalogKind, EntityBody, EntitySchema, ExtraMode, FieldDescriptor, FieldList,
    ModifierCategory, Registry,
};
use crate::scopes::Scopes;

/// Whether the cursor is among triggers, among effects, or neither.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    Trigger,
    Effect,
    Unknown,
}

impl ContextType {
    pub fn catalog(self) -> Option<CatalogKind> {
        match self {
            ContextType::Trigger => Some(CatalogKind::Trigger),
            ContextType::Effect => Some(CatalogKind::Effect),
            ContextType::Unknown => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockContext {
    pub context_type: ContextType,
    pub scope: Scopes,
    /// A `scope:` reference was entered and its type is not known.
    pub unknown_scope: bool,
}

/// Replay the block path to find the context type and current scope.
///
/// Each element can change the context type (if it is a trigger or effect block) and the scope
/// (if it is a known trigger or effect with an output scope). Later elements override earlier
/// ones.
pub fn analyze_block_context(registry: &Registry, path: &[String], initial_scope: Scopes) -> BlockContext {
    analyze_block_context_from(registry, path, initial_scope, ContextType::Unknown)
}

/// Like [`analyze_block_context`], for definitions whose body already has a context type, such
/// as scripted effects.
pub fn analyze_block_context_from(
    registry: &Registry,
    path: &[String],
    initial_scope: Scopes,
    initial_type: ContextType,
) -> BlockContext {
    let mut context =
        BlockContext { context_type: initial_type, scope: initial_scope, unknown_scope: false };
    for (i, name) in path.iter().enumerate() {
        let parent = i.checked_sub(1).map(|i| path[i].as_str());
        match BlockRole::of(name, parent) {
            BlockRole::Trigger | BlockRole::Ambiguous => context.context_type = ContextType::Trigger,
            BlockRole::Effect => context.context_type = ContextType::Effect,
            BlockRole::Modifier(_) | BlockRole::Other => (),
        }
        if name.strip_prefix("scope:").is_some_and(|s| !s.is_empty()) {
            context.unknown_scope = true;
            continue;
        }
        if let Some(scope) = registry.keyword(name).and_then(|def| def.output_scope) {
            context.scope = scope;
            context.unknown_scope = false;
        }
    }
    context
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ModifierContext {
    pub category: Option<ModifierCategory>,
}

impl ModifierContext {
    pub fn in_modifier_block(&self) -> bool {
        self.category.is_some()
    }
}

/// Replay the block path to find out if the cursor is in a modifier block.
pub fn analyze_modifier_context(path: &[String]) -> ModifierContext {
    analyze_modifier_context_from(path, None)
}

/// Like [`analyze_modifier_context`], for definitions whose body is already a modifier block.
pub fn analyze_modifier_context_from(
    path: &[String],
    initial: Option<ModifierCategory>,
) -> ModifierContext {
    let mut category = initial;
    // Inside `tracks = { track_name = { 50 = { ... } } }` of traits with several tracks.
    let mut in_multi_track = false;
    let mut multi_track_depth = 0;

    for (i, name) in path.iter().enumerate() {
        if name == "tracks" {
            in_multi_track = true;
            multi_track_depth = 0;
            continue;
        }
        if in_multi_track {
            multi_track_depth += 1;
            if multi_track_depth >= 2 && is_numeric(name) {
                category = Some(ModifierCategory::Character);
                continue;
            }
        }
        let parent = i.checked_sub(1).map(|i| path[i].as_str());
        match BlockRole::of(name, parent) {
            BlockRole::Modifier(c) => category = Some(c),
            BlockRole::Ambiguous => category = Some(ModifierCategory::Character),
            BlockRole::Trigger | BlockRole::Effect => category = None,
            // Numbered stage blocks and unknown names keep the category.
            BlockRole::Other => (),
        }
    }
    ModifierContext { category }
}

/// The fixed fields of the innermost block, if it is a trigger or effect that has them.
///
/// The trigger table is consulted in trigger context, the effect table in effect context, and
/// both (triggers first) when the context is unknown.
pub fn internal_field_schema<'a>(
    registry: &'a Registry,
    innermost: &str,
    context_type: ContextType,
) -> Option<&'a FieldList> {
    lookup_by_context(context_type, |kind| registry.internal(kind, innermost))
}

/// The fields the innermost trigger or effect block takes on top of the usual catalog, like
/// `limit` in an iterator. Consulted the same way as [`internal_field_schema`].
pub fn keyword_extra_fields<'a>(
    registry: &'a Registry,
    innermost: &str,
    context_type: ContextType,
) -> Option<&'a FieldList> {
    lookup_by_context(context_type, |kind| registry.keyword_extra(kind, innermost))
}

fn lookup_by_context<'a, F>(context_type: ContextType, lookup: F) -> Option<&'a FieldList>
where
    F: Fn(CatalogKind) -> Option<&'a FieldList>,
{
    if matches!(context_type, ContextType::Trigger | ContextType::Unknown) {
        if let Some(fields) = lookup(CatalogKind::Trigger) {
            return Some(fields);
        }
    }
    if matches!(context_type, ContextType::Effect | ContextType::Unknown) {
        return lookup(CatalogKind::Effect);
    }
    None
}

/// Where a field offered at the cursor comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// A field of a definition or of a block with fixed fields
    Field,
    Trigger,
    Effect,
    Modifier,
}

impl From<CatalogKind> for FieldOrigin {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Trigger => FieldOrigin::Trigger,
            CatalogKind::Effect => FieldOrigin::Effect,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedField<'a> {
    pub origin: FieldOrigin,
    pub field: &'a FieldDescriptor,
}

/// Collects fields in order, keeping only the first field of each name.
struct FieldCollector<'a> {
    fields: Vec<ResolvedField<'a>>,
    seen: TigerHashSet<&'a str>,
}

impl<'a> FieldCollector<'a> {
    fn new() -> Self {
        FieldCollector { fields: Vec::new(), seen: TigerHashSet::default() }
    }

    fn extend<I: IntoIterator<Item = &'a FieldDescriptor>>(&mut self, origin: FieldOrigin, iter: I) {
        for field in iter {
            if self.seen.insert(field.name.as_str()) {
                self.fields.push(ResolvedField { origin, field });
            }
        }
    }
}

/// The initial context type and modifier category of a definition's body.
fn body_seeds(entity: &EntitySchema) -> (ContextType, Option<ModifierCategory>) {
    match entity.body {
        Some(EntityBody::Triggers) => (ContextType::Trigger, None),
        Some(EntityBody::Effects) => (ContextType::Effect, None),
        Some(EntityBody::Modifiers(category)) => (ContextType::Unknown, Some(category)),
        None => (ContextType::Unknown, None),
    }
}

/// Determine which fields are valid inside the block at the end of `path`, in a definition of
/// the given entity.
///
/// The sources are tried in order:
/// 1. The modifier values, if in a modifier block.
/// 2. The fixed fields of the innermost trigger or effect. Nothing else is offered. The same
///    goes for a block of this kind of definition whose fields are exclusive.
/// 3. The triggers or effects valid in the current scope, preceded by the extra fields of the
///    innermost block in this kind of definition and those of the innermost trigger or effect.
/// 4. The fields of the definition itself.
pub fn fields_for_context<'a>(
    registry: &'a Registry,
    entity: &'a EntitySchema,
    path: &[String],
) -> Vec<ResolvedField<'a>> {
    let (initial_type, initial_category) = body_seeds(entity);
    let mut collector = FieldCollector::new();

    if let Some(category) = analyze_modifier_context_from(path, initial_category).category {
        if path.is_empty() {
            collector.extend(FieldOrigin::Field, entity.fields.iter());
        }
        if let Some(fields) = registry.modifier_fields(category) {
            collector.extend(FieldOrigin::Modifier, fields.iter());
        }
        return collector.fields;
    }

    let context = analyze_block_context_from(registry, path, entity.initial_scope, initial_type);

    if let Some(innermost) = path.last() {
        if let Some(internal) = internal_field_schema(registry, innermost, context.context_type) {
            collector.extend(FieldOrigin::Field, internal.iter());
            return collector.fields;
        }
        if let Some(extra) = registry.block_extra(entity.kind, innermost) {
            collector.extend(FieldOrigin::Field, extra.fields.iter());
            if extra.mode == ExtraMode::Exclusive {
                return collector.fields;
            }
        }
        if let Some(extra) = keyword_extra_fields(registry, innermost, context.context_type) {
            collector.extend(FieldOrigin::Field, extra.iter());
        }
    }

    if let Some(kind) = context.context_type.catalog() {
        let catalog = registry.catalog(kind);
        collector.extend(kind.into(), catalog.fields_for_scope(context.scope, context.unknown_scope));
    } else if collector.fields.is_empty() {
        collector.extend(FieldOrigin::Field, entity.fields.iter());
    }
    collector.fields
}

/// Everything known about the cursor position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisContext {
    pub context_type: ContextType,
    #[serde(serialize_with = "serialize_scopes")]
    pub scope: Scopes,
    pub unknown_scope: bool,
    pub modifier_category: Option<ModifierCategory>,
    pub inside_block: bool,
    pub after_equals: bool,
    pub field_name: Option<String>,
    pub partial_value: Option<String>,
    pub block_path: Vec<String>,
}

fn serialize_scopes<S: serde::Serializer>(scopes: &Scopes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(scopes)
}

/// Combine the block path, the line context, and the entity's definition into one summary.
pub fn classify(
    registry: &Registry,
    entity: &EntitySchema,
    block_path: &BlockPath,
    line: &LineContext,
) -> AnalysisContext {
    let (initial_type, initial_category) = body_seeds(entity);
    let context =
        analyze_block_context_from(registry, &block_path.path, entity.initial_scope, initial_type);
    let modifier = analyze_modifier_context_from(&block_path.path, initial_category);
    AnalysisContext {
        context_type: context.context_type,
        scope: context.scope,
        unknown_scope: context.unknown_scope,
        modifier_category: if block_path.is_top_level() { None } else { modifier.category },
        inside_block: !block_path.is_top_level(),
        after_equals: line.after_equals,
        field_name: line.field_name.clone(),
        partial_value: line.partial_value.clone(),
        block_path: block_path.path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    fn path(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    fn names<'a>(fields: &[ResolvedField<'a>]) -> Vec<&'a str> {
        fields.iter().map(|f| f.field.name.as_str()).collect()
    }

    #[test]
    fn test_scope_propagation() {
        let registry = Registry::builtin();
        let bc = analyze_block_context(registry, &path(&["every_vassal"]), Scopes::Character);
        assert_eq!(bc.scope, Scopes::Character);
        assert!(!bc.unknown_scope);

        let bc = analyze_block_context(
            registry,
            &path(&["immediate", "primary_title", "every_de_jure_county_holder"]),
            Scopes::Character,
        );
        assert_eq!(bc.context_type, ContextType::Effect);
        assert_eq!(bc.scope, Scopes::Character);

        let bc = analyze_block_context(
            registry,
            &path(&["immediate", "capital_county"]),
            Scopes::Character,
        );
        assert_eq!(bc.scope, Scopes::LandedTitle);
    }

    #[test]
    fn test_context_type() {
        let registry = Registry::builtin();
        let bc = analyze_block_context(registry, &path(&["option"]), Scopes::Character);
        assert_eq!(bc.context_type, ContextType::Effect);
        let bc = analyze_block_context(registry, &path(&["option", "trigger"]), Scopes::Character);
        assert_eq!(bc.context_type, ContextType::Trigger);
        let bc = analyze_block_context(registry, &path(&["track"]), Scopes::Character);
        assert_eq!(bc.context_type, ContextType::Unknown);
        let bc = analyze_block_context(registry, &path(&[]), Scopes::Province);
        assert_eq!(bc.context_type, ContextType::Unknown);
        assert_eq!(bc.scope, Scopes::Province);
    }

    #[test]
    fn test_unknown_scope() {
        let registry = Registry::builtin();
        let bc = analyze_block_context(
            registry,
            &path(&["immediate", "scope:some_unknown_thing"]),
            Scopes::Character,
        );
        assert!(bc.unknown_scope);
        assert_eq!(bc.scope, Scopes::Character);

        // An inner block without an output scope doesn't clear it
        let bc = analyze_block_context(
            registry,
            &path(&["immediate", "scope:x", "if"]),
            Scopes::Character,
        );
        assert!(bc.unknown_scope);

        // A later scope change does
        let bc = analyze_block_context(
            registry,
            &path(&["immediate", "scope:x", "capital_province"]),
            Scopes::Character,
        );
        assert!(!bc.unknown_scope);
        assert_eq!(bc.scope, Scopes::Province);
    }

    #[test]
    fn test_modifier_context() {
        let mc = analyze_modifier_context(&path(&["character_modifier"]));
        assert!(mc.in_modifier_block());
        assert_eq!(mc.category, Some(ModifierCategory::Character));

        let mc = analyze_modifier_context(&path(&["tracks", "some_track", "50"]));
        assert_eq!(mc.category, Some(ModifierCategory::Character));
        assert!(!analyze_modifier_context(&path(&["tracks", "some_track"])).in_modifier_block());

        let mc = analyze_modifier_context(&path(&["character_modifier", "trigger"]));
        assert!(!mc.in_modifier_block());

        let mc = analyze_modifier_context(&path(&["track", "50"]));
        assert_eq!(mc.category, Some(ModifierCategory::Character));

        let mc = analyze_modifier_context(&path(&["county_modifier"]));
        assert_eq!(mc.category, Some(ModifierCategory::County));
        let mc = analyze_modifier_context(&path(&["character_modifier", "province_modifier"]));
        assert_eq!(mc.category, Some(ModifierCategory::Province));

        assert!(!analyze_modifier_context(&path(&["50"])).in_modifier_block());
        assert!(!analyze_modifier_context(&path(&[])).in_modifier_block());
    }

    #[test]
    fn test_modifier_keyword() {
        // `modifier` keeps or starts a modifier context, except as a weight modifier
        let mc = analyze_modifier_context(&path(&["modifier"]));
        assert_eq!(mc.category, Some(ModifierCategory::Character));
        let mc = analyze_modifier_context(&path(&["county_modifier", "modifier"]));
        assert_eq!(mc.category, Some(ModifierCategory::Character));
        let mc = analyze_modifier_context(&path(&["ai_will_do", "modifier"]));
        assert!(!mc.in_modifier_block());
    }

    #[test]
    fn test_internal_schema() {
        let registry = Registry::builtin();
        let internal = internal_field_schema(registry, "opinion", ContextType::Trigger).unwrap();
        assert_eq!(internal.len(), 2);
        let internal = internal_field_schema(registry, "add_opinion", ContextType::Effect).unwrap();
        assert!(internal.get("modifier").is_some());
        assert!(internal_field_schema(registry, "add_opinion", ContextType::Trigger).is_none());
        assert!(internal_field_schema(registry, "add_opinion", ContextType::Unknown).is_some());
        assert!(internal_field_schema(registry, "every_vassal", ContextType::Effect).is_none());
        assert!(internal_field_schema(registry, "if", ContextType::Effect).is_none());
        assert!(internal_field_schema(registry, "no_such_thing", ContextType::Unknown).is_none());

        assert!(keyword_extra_fields(registry, "every_vassal", ContextType::Effect).is_some());
        assert!(keyword_extra_fields(registry, "every_vassal", ContextType::Trigger).is_none());
        assert!(keyword_extra_fields(registry, "any_vassal", ContextType::Unknown).is_some());
    }

    #[test]
    fn test_fields_for_opinion() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let fields = fields_for_context(registry, event, &path(&["trigger", "opinion"]));
        assert_eq!(names(&fields), vec!["target", "value"]);

        let fields = fields_for_context(registry, event, &path(&["immediate", "opinion"]));
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Field));
        assert!(names(&fields).contains(&"target"));
        assert!(!names(&fields).contains(&"add_gold"));
    }

    #[test]
    fn test_fields_for_internal_stops() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let fields = fields_for_context(registry, event, &path(&["immediate", "opinion"]));
        let expected = vec!["target", "modifier", "opinion", "days", "months", "years"];
        assert_eq!(names(&fields), expected);

        let fields = fields_for_context(registry, event, &path(&["immediate", "set_variable"]));
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Field));
        assert!(!names(&fields).contains(&"add_gold"));
    }

    #[test]
    fn test_fields_for_if() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let fields = fields_for_context(registry, event, &path(&["immediate", "if"]));
        assert_eq!(fields[0].field.name, "limit");
        assert_eq!(fields[0].origin, FieldOrigin::Field);
        assert!(fields[1..].iter().all(|f| f.origin == FieldOrigin::Effect));
        assert!(names(&fields).contains(&"add_gold"));

        let fields = fields_for_context(registry, event, &path(&["trigger", "trigger_if"]));
        assert_eq!(fields[0].field.name, "limit");
        assert!(names(&fields).contains(&"has_trait"));
    }

    #[test]
    fn test_fields_for_modifier() {
        let registry = Registry::builtin();
        let trait_schema = registry.entity(EntityKind::Trait).unwrap();
        let fields = fields_for_context(registry, trait_schema, &path(&["modifier"]));
        assert!(!fields.is_empty());
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Modifier));
        assert!(names(&fields).contains(&"monthly_prestige"));

        let building = registry.entity(EntityKind::Building).unwrap();
        let fields = fields_for_context(registry, building, &path(&["county_modifier"]));
        assert!(names(&fields).contains(&"development_growth"));
        assert!(!names(&fields).contains(&"diplomacy"));
    }

    #[test]
    fn test_fields_for_extending() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let fields = fields_for_context(registry, event, &path(&["immediate", "every_vassal"]));
        assert_eq!(fields[0].field.name, "limit");
        assert_eq!(fields[1].field.name, "alternative_limit");
        assert!(names(&fields).contains(&"add_gold"));
        assert!(fields[2..].iter().all(|f| f.origin == FieldOrigin::Effect));

        let fields = fields_for_context(registry, event, &path(&["option"]));
        assert_eq!(fields[0].field.name, "name");
        assert!(names(&fields).contains(&"ai_chance"));
        assert!(names(&fields).contains(&"add_prestige"));
        // Not valid in character scope
        assert!(!names(&fields).contains(&"change_development_level"));

        let fields = fields_for_context(registry, event, &path(&["option", "ai_chance"]));
        assert_eq!(names(&fields), vec!["base", "add", "factor", "modifier"]);
    }

    #[test]
    fn test_fields_for_scope() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let fields = fields_for_context(registry, event, &path(&["immediate", "capital_county"]));
        assert!(names(&fields).contains(&"change_development_level"));
        assert!(!names(&fields).contains(&"add_gold"));
        // Iterators in the world scope work anywhere
        assert!(names(&fields).contains(&"every_county"));

        let fields =
            fields_for_context(registry, event, &path(&["immediate", "scope:some_unknown_thing"]));
        assert!(names(&fields).contains(&"change_development_level"));
        assert!(names(&fields).contains(&"add_gold"));
        assert_eq!(fields.len(), registry.effects().len());
    }

    #[test]
    fn test_fields_for_top_level() {
        let registry = Registry::builtin();
        let decision = registry.entity(EntityKind::Decision).unwrap();
        let fields = fields_for_context(registry, decision, &[]);
        assert_eq!(fields.len(), decision.fields.len());
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Field));

        let scripted = registry.entity(EntityKind::ScriptedEffect).unwrap();
        let fields = fields_for_context(registry, scripted, &[]);
        assert!(names(&fields).contains(&"add_opinion"));
        assert!(fields.iter().all(|f| f.origin == FieldOrigin::Effect));

        let modifier = registry.entity(EntityKind::Modifier).unwrap();
        let fields = fields_for_context(registry, modifier, &[]);
        assert_eq!(fields[0].field.name, "icon");
        assert!(names(&fields).contains(&"monthly_prestige"));
    }

    #[test]
    fn test_classify() {
        let registry = Registry::builtin();
        let event = registry.entity(EntityKind::Event).unwrap();
        let block_path = BlockPath { depth: 3, path: path(&["immediate", "every_realm_province"]) };
        let line = LineContext {
            after_equals: true,
            field_name: Some("add_building".to_owned()),
            ..LineContext::default()
        };
        let ac = classify(registry, event, &block_path, &line);
        assert_eq!(ac.context_type, ContextType::Effect);
        assert_eq!(ac.scope, Scopes::Province);
        assert!(ac.inside_block);
        assert!(ac.after_equals);
        assert_eq!(ac.field_name.as_deref(), Some("add_building"));
        assert_eq!(ac.modifier_category, None);
    }
}
