use crate::scopes::Scopes;

/// LAST UPDATED CK3 VERSION 1.12.4
/// See `event_targets.log` from the game data dumps.
/// These are the scope links that can open a block in their target scope, like
/// `liege = { add_gold = 10 }`. They work as triggers and as effects.
pub(crate) const SCOPE_TO_SCOPE: &[(Scopes, &str, Scopes)] = &[
    (Scopes::Artifact, "artifact_owner", Scopes::Character),
    (Scopes::Character, "betrothed", Scopes::Character),
    (Scopes::Character, "capital_county", Scopes::LandedTitle),
    (Scopes::Character, "capital_province", Scopes::Province),
    (Scopes::Character, "council_task", Scopes::CouncilTask),
    (Scopes::LandedTitle.union(Scopes::Province), "county", Scopes::LandedTitle),
    (Scopes::Character.union(Scopes::LandedTitle).union(Scopes::Province), "culture", Scopes::Culture),
    (Scopes::LandedTitle, "de_jure_liege", Scopes::LandedTitle),
    (Scopes::Character, "dynasty", Scopes::Dynasty),
    (Scopes::Character, "employer", Scopes::Character),
    (Scopes::Character.union(Scopes::LandedTitle).union(Scopes::Province), "faith", Scopes::Faith),
    (Scopes::Character, "father", Scopes::Character),
    (Scopes::Faith, "great_holy_war", Scopes::GreatHolyWar),
    (Scopes::LandedTitle, "holder", Scopes::Character),
    (Scopes::Character, "host", Scopes::Character),
    (Scopes::Character, "house", Scopes::DynastyHouse),
    (Scopes::DynastyHouse, "house_head", Scopes::Character),
    (Scopes::Character, "imprisoner", Scopes::Character),
    (Scopes::Character, "killer", Scopes::Character),
    (Scopes::Character, "liege", Scopes::Character),
    (Scopes::Character.union(Scopes::Army), "location", Scopes::Province),
    (Scopes::Character, "mother", Scopes::Character),
    (Scopes::Character, "player_heir", Scopes::Character),
    (Scopes::Character, "primary_heir", Scopes::Character),
    (Scopes::Character, "primary_spouse", Scopes::Character),
    (Scopes::Character, "primary_title", Scopes::LandedTitle),
    (Scopes::Faith, "religion", Scopes::Religion),
    (Scopes::Faith, "religious_head", Scopes::Character),
    (Scopes::Scheme, "scheme_owner", Scopes::Character),
    (Scopes::Scheme, "scheme_target_character", Scopes::Character),
    (Scopes::Secret, "secret_owner", Scopes::Character),
    (Scopes::Secret, "secret_target", Scopes::Character),
    (Scopes::LandedTitle, "title_province", Scopes::Province),
    (Scopes::Character, "top_liege", Scopes::Character),
];
