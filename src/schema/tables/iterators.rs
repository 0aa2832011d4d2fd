use crate::scopes::Scopes;

/// LAST UPDATED CK3 VERSION 1.12.4
/// See `event_scopes.log` from the game data dumps.
/// Each list `x` here gives rise to the trigger `any_x` and the effects `every_x`, `random_x`
/// and `ordered_x`. The first scope is where the iterator can be used, the second is the scope
/// of the items iterated over.
pub(crate) const SCOPE_ITERATOR: &[(Scopes, &str, Scopes)] = &[
    (Scopes::Character, "acclaimed_knight", Scopes::Character),
    (Scopes::Character, "ally", Scopes::Character),
    (Scopes::Character, "ancestor", Scopes::Character),
    (Scopes::Character, "child", Scopes::Character),
    (Scopes::Character, "claim", Scopes::LandedTitle),
    (Scopes::Character, "close_family_member", Scopes::Character),
    (Scopes::Character, "concubine", Scopes::Character),
    (Scopes::Character, "councillor", Scopes::Character),
    (Scopes::None, "county", Scopes::LandedTitle),
    (Scopes::None, "county_in_region", Scopes::LandedTitle),
    (Scopes::LandedTitle, "county_province", Scopes::Province),
    (Scopes::Character, "courtier", Scopes::Character),
    (Scopes::Character, "courtier_or_guest", Scopes::Character),
    (Scopes::LandedTitle, "de_jure_county", Scopes::LandedTitle),
    (Scopes::LandedTitle, "de_jure_county_holder", Scopes::Character),
    (Scopes::Character, "directly_owned_province", Scopes::Province),
    (Scopes::Dynasty, "dynasty_member", Scopes::Character),
    (Scopes::Character, "equipped_character_artifact", Scopes::Artifact),
    (Scopes::Faith, "faith_holy_order", Scopes::HolyOrder),
    (Scopes::Character, "heir", Scopes::Character),
    (Scopes::Character, "held_title", Scopes::LandedTitle),
    (Scopes::DynastyHouse, "house_member", Scopes::Character),
    (Scopes::LandedTitle, "in_de_facto_hierarchy", Scopes::LandedTitle),
    (Scopes::LandedTitle, "in_de_jure_hierarchy", Scopes::LandedTitle),
    (Scopes::None, "independent_ruler", Scopes::Character),
    (Scopes::Character, "knight", Scopes::Character),
    (Scopes::None, "living_character", Scopes::Character),
    (Scopes::Character, "memory", Scopes::CharacterMemory),
    (Scopes::Character, "neighboring_top_liege_realm_owner", Scopes::Character),
    (Scopes::Character, "opposite_sex_spouse_candidate", Scopes::Character),
    (Scopes::Character, "owned_story", Scopes::StoryCycle),
    (Scopes::Character, "parent", Scopes::Character),
    (Scopes::Character, "pool_guest", Scopes::Character),
    (Scopes::Character, "powerful_vassal", Scopes::Character),
    (Scopes::Character, "prisoner", Scopes::Character),
    (Scopes::Character, "realm_county", Scopes::LandedTitle),
    (Scopes::Character, "realm_de_jure_duchy", Scopes::LandedTitle),
    (Scopes::Character, "realm_province", Scopes::Province),
    (Scopes::Character, "relation", Scopes::Character),
    (Scopes::None, "ruler", Scopes::Character),
    (Scopes::Character, "scheme", Scopes::Scheme),
    (Scopes::Character, "secret", Scopes::Secret),
    (Scopes::Character, "sibling", Scopes::Character),
    (Scopes::Character, "spouse", Scopes::Character),
    (Scopes::Character, "spouse_candidate", Scopes::Character),
    (Scopes::Character, "sub_realm_county", Scopes::LandedTitle),
    (Scopes::Character, "targeting_faction", Scopes::Faction),
    (Scopes::Character, "targeting_scheme", Scopes::Scheme),
    (Scopes::Character, "traveling_family_member", Scopes::Character),
    (Scopes::Character, "vassal", Scopes::Character),
    (Scopes::Character, "vassal_or_below", Scopes::Character),
    (Scopes::Character, "war_ally", Scopes::Character),
    (Scopes::Character, "war_enemy", Scopes::Character),
];

/// The prefixes that make iterators out of the lists in `SCOPE_ITERATOR`,
/// and whether the result is a trigger (`true`) or an effect.
pub(crate) const ITERATOR_PREFIXES: &[(&str, bool)] =
    &[("any_", true), ("every_", false), ("random_", false), ("ordered_", false)];
