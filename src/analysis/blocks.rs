//! The block names that decide what kind of content a block holds.

use std::sync::LazyLock;

use crate::helpers::{TigerHashMap, TigerHashSet};
use crate::schema::ModifierCategory;

/// The role a named block plays for the content inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockRole {
    /// The block holds triggers.
    Trigger,
    /// The block holds effects.
    Effect,
    /// The block holds modifier values of this category.
    Modifier(ModifierCategory),
    /// `modifier` is both a trigger block (in weights) and a character modifier block.
    Ambiguous,
    /// The block's name says nothing about its content.
    Other,
}

impl BlockRole {
    /// Determine the role of block `name` when it is directly inside block `parent`.
    /// `parent` is `None` for blocks directly inside a top-level definition.
    pub fn of(name: &str, parent: Option<&str>) -> Self {
        if name == "modifier" {
            if parent.is_some_and(|p| WEIGHT_BLOCKS.contains(&p)) {
                BlockRole::Trigger
            } else {
                BlockRole::Ambiguous
            }
        } else if TRIGGER_BLOCKS_SET.contains(name) {
            BlockRole::Trigger
        } else if EFFECT_BLOCKS_SET.contains(name) {
            BlockRole::Effect
        } else if let Some(&category) = MODIFIER_BLOCKS_MAP.get(name) {
            BlockRole::Modifier(category)
        } else {
            BlockRole::Other
        }
    }
}

static TRIGGER_BLOCKS_SET: LazyLock<TigerHashSet<&'static str>> =
    LazyLock::new(|| TRIGGER_BLOCKS.iter().copied().collect());

static EFFECT_BLOCKS_SET: LazyLock<TigerHashSet<&'static str>> =
    LazyLock::new(|| EFFECT_BLOCKS.iter().copied().collect());

static MODIFIER_BLOCKS_MAP: LazyLock<TigerHashMap<&'static str, ModifierCategory>> =
    LazyLock::new(|| MODIFIER_BLOCKS.iter().copied().collect());

/// Fields whose block holds triggers. `modifier` is handled separately.
const TRIGGER_BLOCKS: &[&str] = &[
    "ai_potential",
    "allow",
    "alternative_limit",
    "can_be_changed",
    "can_be_picked",
    "can_construct",
    "can_construct_potential",
    "can_pick",
    "can_pick_for_hybridization",
    "can_send",
    "can_start",
    "can_start_showing_failures_only",
    "is_available_on_create",
    "is_enabled",
    "is_shown",
    "is_valid",
    "is_valid_showing_failures_only",
    "limit",
    "potential",
    "show_as_unavailable",
    "starts_enabled",
    "trigger",
    "valid",
];

/// Fields whose block holds effects.
const EFFECT_BLOCKS: &[&str] = &[
    "after",
    "after_creation",
    "effect",
    "hidden_effect",
    "immediate",
    "on_accept",
    "on_auto_accept",
    "on_complete",
    "on_decline",
    "on_end",
    "on_enter_passive_state",
    "on_failure",
    "on_invalidated",
    "on_monthly",
    "on_phase_completed",
    "on_send",
    "on_start",
    "on_success",
    "option",
];

/// Fields whose block holds modifier values. `modifier` is handled separately.
const MODIFIER_BLOCKS: &[(&str, ModifierCategory)] = &[
    ("character_modifier", ModifierCategory::Character),
    ("county_modifier", ModifierCategory::County),
    ("culture_modifier", ModifierCategory::Character),
    ("duchy_capital_county_modifier", ModifierCategory::County),
    ("province_modifier", ModifierCategory::Province),
    ("track", ModifierCategory::Character),
];

/// Blocks that compute a weight or chance. A `modifier` in these adjusts the weight and holds
/// triggers.
const WEIGHT_BLOCKS: &[&str] =
    &["ai_accept", "ai_chance", "ai_will_do", "random", "weight", "weight_multiplier"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(BlockRole::of("limit", None), BlockRole::Trigger);
        assert_eq!(BlockRole::of("immediate", None), BlockRole::Effect);
        assert_eq!(
            BlockRole::of("county_modifier", Some("x")),
            BlockRole::Modifier(ModifierCategory::County)
        );
        assert_eq!(BlockRole::of("every_vassal", None), BlockRole::Other);
        assert_eq!(BlockRole::of("50", Some("track")), BlockRole::Other);
    }

    #[test]
    fn test_modifier_ambiguity() {
        assert_eq!(BlockRole::of("modifier", None), BlockRole::Ambiguous);
        assert_eq!(BlockRole::of("modifier", Some("trigger")), BlockRole::Ambiguous);
        assert_eq!(BlockRole::of("modifier", Some("ai_will_do")), BlockRole::Trigger);
        assert_eq!(BlockRole::of("modifier", Some("random")), BlockRole::Trigger);
    }

    #[test]
    fn test_disjoint() {
        for name in TRIGGER_BLOCKS {
            assert!(!EFFECT_BLOCKS.contains(name), "{name}");
            assert!(!MODIFIER_BLOCKS.iter().any(|(n, _)| n == name), "{name}");
        }
        for name in EFFECT_BLOCKS {
            assert!(!MODIFIER_BLOCKS.iter().any(|(n, _)| n == name), "{name}");
        }
    }
}
