//! The kinds of game-script definitions a file can hold, and how to tell them apart by path.

use std::path::Path;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// "entities" are the top-level database definitions that a script file holds, such as traits
/// or events. Every script file holds one kind of entity, which is determined by where it lives
/// in the game directory.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Activity,
    Building,
    CharacterInteraction,
    CultureTradition,
    Decision,
    Doctrine,
    Event,
    Modifier,
    OnAction,
    OpinionModifier,
    Scheme,
    ScriptedEffect,
    ScriptedTrigger,
    Trait,
}

impl EntityKind {
    /// Parse the snake-case entity name used by editors and the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Determine the entity kind of a script file from its path.
    ///
    /// The path may be absolute or relative to the mod root. All path fragments are tried and the
    /// longest one that occurs in the path wins, so that more specific directories take
    /// precedence over their parents.
    pub fn from_path(path: &Path) -> Option<Self> {
        if path.extension().is_none_or(|ext| ext != "txt") {
            return None;
        }
        let pathname = path.to_string_lossy().replace('\\', "/");
        let pathname = format!("/{pathname}");
        let mut best: Option<(usize, EntityKind)> = None;
        for kind in EntityKind::iter() {
            for fragment in kind.paths() {
                let fragment = format!("/{fragment}");
                if pathname.contains(&fragment)
                    && best.is_none_or(|(len, _)| fragment.len() > len)
                {
                    best = Some((fragment.len(), kind));
                }
            }
        }
        best.map(|(_, kind)| kind)
    }

    /// The directories (relative to the game or mod root) where files of this kind live.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            EntityKind::Event => &["events/"],
            EntityKind::Activity => &["common/activities/activity_types/"],
            EntityKind::Scheme => &["common/schemes/scheme_types/", "common/schemes/"],
            EntityKind::CultureTradition => &["common/culture/traditions/"],
            EntityKind::Doctrine => &["common/religion/doctrines/"],
            EntityKind::Building => &["common/buildings/"],
            EntityKind::CharacterInteraction => &["common/character_interactions/"],
            EntityKind::Decision => &["common/decisions/"],
            EntityKind::Modifier => &["common/modifiers/"],
            EntityKind::OnAction => &["common/on_action/"],
            EntityKind::OpinionModifier => &["common/opinion_modifiers/"],
            EntityKind::ScriptedEffect => &["common/scripted_effects/"],
            EntityKind::ScriptedTrigger => &["common/scripted_triggers/"],
            EntityKind::Trait => &["common/traits/"],
        }
    }
}
