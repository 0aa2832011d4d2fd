//! Scope types of the CK3 script language.
//!
//! A scope is the "subject" of a script block: the character, title, province, etc. that
//! triggers and effects in that block apply to. Iterators and scope links change the scope for
//! the block they open.

#![allow(non_upper_case_globals)]

use std::fmt::{Display, Formatter};

use bitflags::bitflags;

use crate::helpers::display_choices;

bitflags! {
    /// LAST UPDATED CK3 VERSION 1.12.4
    /// See `event_scopes.log` from the game data dumps.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Scopes: u64 {
        const None = 0x0000_0001;
        const Value = 0x0000_0002;
        const Bool = 0x0000_0004;
        const Flag = 0x0000_0008;
        const Character = 0x0000_0010;
        const LandedTitle = 0x0000_0020;
        const Activity = 0x0000_0040;
        const Secret = 0x0000_0080;
        const Province = 0x0000_0100;
        const Scheme = 0x0000_0200;
        const Combat = 0x0000_0400;
        const CombatSide = 0x0000_0800;
        const Faith = 0x0000_2000;
        const GreatHolyWar = 0x0000_4000;
        const Religion = 0x0000_8000;
        const War = 0x0001_0000;
        const StoryCycle = 0x0002_0000;
        const CasusBelli = 0x0004_0000;
        const Dynasty = 0x0008_0000;
        const DynastyHouse = 0x0010_0000;
        const Faction = 0x0020_0000;
        const Culture = 0x0040_0000;
        const Army = 0x0080_0000;
        const HolyOrder = 0x0100_0000;
        const CouncilTask = 0x0200_0000;
        const MercenaryCompany = 0x0400_0000;
        const Artifact = 0x0800_0000;
        const Inspiration = 0x1000_0000;
        const Struggle = 0x2000_0000;
        const CharacterMemory = 0x4000_0000;
        const TravelPlan = 0x8000_0000;
        const Accolade = 0x0000_0001_0000_0000;
        const Trait = 0x0000_0100_0000_0000;
    }
}

impl Scopes {
    pub fn non_primitive() -> Scopes {
        Scopes::all() ^ (Scopes::None | Scopes::Value | Scopes::Bool | Scopes::Flag)
    }

    pub fn primitive() -> Scopes {
        Scopes::Value | Scopes::Bool | Scopes::Flag
    }

    pub fn all_but_none() -> Scopes {
        Scopes::all() ^ Scopes::None
    }

    /// Whether a trigger or effect with these input scopes can be used in scope `current`.
    ///
    /// Input scopes of `None` mean the keyword doesn't look at its scope at all, like
    /// `every_county`, so it's accepted everywhere.
    pub fn accepts(self, current: Scopes) -> bool {
        self == Scopes::None || self.intersects(current)
    }
}

pub fn scope_from_snake_case(s: &str) -> Option<Scopes> {
    Some(match s {
        "none" => Scopes::None,
        "value" => Scopes::Value,
        "bool" => Scopes::Bool,
        "flag" => Scopes::Flag,
        "character" => Scopes::Character,
        "landed_title" => Scopes::LandedTitle,
        "activity" => Scopes::Activity,
        "secret" => Scopes::Secret,
        "province" => Scopes::Province,
        "scheme" => Scopes::Scheme,
        "combat" => Scopes::Combat,
        "combat_side" => Scopes::CombatSide,
        "faith" => Scopes::Faith,
        "ghw" => Scopes::GreatHolyWar, // Warning, this is an exception to the general rule
        "religion" => Scopes::Religion,
        "war" => Scopes::War,
        "story" => Scopes::StoryCycle, // Another exception
        "casus_belli" => Scopes::CasusBelli,
        "dynasty" => Scopes::Dynasty,
        "dynasty_house" => Scopes::DynastyHouse,
        "faction" => Scopes::Faction,
        "culture" => Scopes::Culture,
        "army" => Scopes::Army,
        "holy_order" => Scopes::HolyOrder,
        "council_task" => Scopes::CouncilTask,
        "mercenary_company" => Scopes::MercenaryCompany,
        "artifact" => Scopes::Artifact,
        "inspiration" => Scopes::Inspiration,
        "struggle" => Scopes::Struggle,
        "character_memory" => Scopes::CharacterMemory,
        "travel_plan" => Scopes::TravelPlan,
        "accolade" => Scopes::Accolade,
        "trait" => Scopes::Trait,
        _ => return std::option::Option::None,
    })
}

impl Display for Scopes {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        if *self == Scopes::all() {
            write!(f, "any scope")
        } else if *self == Scopes::primitive() {
            write!(f, "any primitive scope")
        } else if *self == Scopes::non_primitive() {
            write!(f, "non-primitive scope")
        } else if *self == Scopes::all_but_none() {
            write!(f, "any except none scope")
        } else {
            let names: Vec<&str> = SCOPE_NAMES
                .iter()
                .filter(|(s, _)| self.contains(*s))
                .map(|(_, name)| *name)
                .collect();
            display_choices(f, &names, "or")
        }
    }
}

/// Human-readable names, in bit order.
const SCOPE_NAMES: &[(Scopes, &str)] = &[
    (Scopes::None, "none"),
    (Scopes::Value, "value"),
    (Scopes::Bool, "bool"),
    (Scopes::Flag, "flag"),
    (Scopes::Character, "character"),
    (Scopes::LandedTitle, "landed title"),
    (Scopes::Activity, "activity"),
    (Scopes::Secret, "secret"),
    (Scopes::Province, "province"),
    (Scopes::Scheme, "scheme"),
    (Scopes::Combat, "combat"),
    (Scopes::CombatSide, "combat side"),
    (Scopes::Faith, "faith"),
    (Scopes::GreatHolyWar, "great holy war"),
    (Scopes::Religion, "religion"),
    (Scopes::War, "war"),
    (Scopes::StoryCycle, "story cycle"),
    (Scopes::CasusBelli, "casus belli"),
    (Scopes::Dynasty, "dynasty"),
    (Scopes::DynastyHouse, "dynasty house"),
    (Scopes::Faction, "faction"),
    (Scopes::Culture, "culture"),
    (Scopes::Army, "army"),
    (Scopes::HolyOrder, "holy order"),
    (Scopes::CouncilTask, "council task"),
    (Scopes::MercenaryCompany, "mercenary company"),
    (Scopes::Artifact, "artifact"),
    (Scopes::Inspiration, "inspiration"),
    (Scopes::Struggle, "struggle"),
    (Scopes::CharacterMemory, "character memory"),
    (Scopes::TravelPlan, "travel plan"),
    (Scopes::Accolade, "accolade"),
    (Scopes::Trait, "trait"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Scopes::Character.to_string(), "character");
        assert_eq!((Scopes::Character | Scopes::Province).to_string(), "character or province");
        assert_eq!(Scopes::all().to_string(), "any scope");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(scope_from_snake_case("landed_title"), Some(Scopes::LandedTitle));
        assert_eq!(scope_from_snake_case("story"), Some(Scopes::StoryCycle));
        assert_eq!(scope_from_snake_case("bogus"), None);
    }

    #[test]
    fn test_accepts() {
        assert!(Scopes::None.accepts(Scopes::Province));
        assert!(Scopes::Character.accepts(Scopes::Character));
        assert!(!Scopes::Character.accepts(Scopes::LandedTitle));
        assert!(Scopes::all().accepts(Scopes::Faith));
    }
}
