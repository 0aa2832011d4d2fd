//! Modifier categories and the values that can be modified.

use std::fmt::{Display, Formatter};

use bitflags::bitflags;
use serde::Serialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::schema::field::{FieldDescriptor, FieldKind};
use crate::schema::tables::modifs::MODIF_TABLE;

/// The kind of thing a modifier block applies to.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModifierCategory {
    Character,
    County,
    Province,
}

impl Display for ModifierCategory {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", <&str>::from(self))
    }
}

impl ModifierCategory {
    fn kinds(self) -> ModifKinds {
        match self {
            ModifierCategory::Character => ModifKinds::Character,
            ModifierCategory::County => ModifKinds::County,
            ModifierCategory::Province => ModifKinds::Province,
        }
    }
}

bitflags! {
    /// The categories of modifier block a modif may appear in.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ModifKinds: u8 {
        const Character = 0x01;
        const Province = 0x02;
        const County = 0x04;
    }
}

/// The skills are whole numbers; everything else can be fractional.
const INTEGER_MODIFS: &[&str] =
    &["diplomacy", "martial", "stewardship", "intrigue", "learning", "prowess"];

/// Build the field list for a modifier block of the given category.
pub(crate) fn modif_fields(category: ModifierCategory) -> Vec<FieldDescriptor> {
    let mut vec = Vec::new();
    for (name, kinds) in MODIF_TABLE.iter().copied() {
        if !kinds.contains(category.kinds()) {
            continue;
        }
        let (kind, description, example) = if INTEGER_MODIFS.contains(&name) {
            (FieldKind::Integer, format!("Adds to {}.", name.replace('_', " ")), format!("{name} = 2"))
        } else if let Some(base) = name.strip_suffix("_mult") {
            (
                FieldKind::Float,
                format!("Multiplies {} by 1 plus this value.", base.replace('_', " ")),
                format!("{name} = 0.1"),
            )
        } else {
            (FieldKind::Float, format!("Adds to {}.", name.replace('_', " ")), format!("{name} = 1"))
        };
        let mut field = FieldDescriptor::new(name, kind, &description);
        field.example = Some(example);
        vec.push(field);
    }
    vec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modif_fields() {
        let character = modif_fields(ModifierCategory::Character);
        let diplomacy = character.iter().find(|f| f.name == "diplomacy").unwrap();
        assert_eq!(diplomacy.kind, FieldKind::Integer);
        let tax = character.iter().find(|f| f.name == "domain_tax_mult").unwrap();
        assert_eq!(tax.kind, FieldKind::Float);
        assert!(!character.iter().any(|f| f.name == "development_growth"));

        let county = modif_fields(ModifierCategory::County);
        assert!(county.iter().any(|f| f.name == "development_growth"));
        assert!(!county.iter().any(|f| f.name == "diplomacy"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ModifierCategory::Province.to_string(), "province");
        assert_eq!("county".parse::<ModifierCategory>().ok(), Some(ModifierCategory::County));
    }
}
