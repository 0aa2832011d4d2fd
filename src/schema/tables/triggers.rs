use crate::schema::catalog::ValueType;
use crate::scopes::Scopes;

/// LAST UPDATED CK3 VERSION 1.12.4
/// See `triggers.log` from the game data dumps.
/// The triggers that are not generated from iterators or scope links.
/// Fields are: input scopes, name, value type, description, usage example.
pub(crate) const TRIGGER: &[(Scopes, &str, ValueType, &str, &str)] = &[
    // control
    (Scopes::all(), "AND", ValueType::Block, "True if all of the triggers inside are true.", "AND = { ... }"),
    (Scopes::all(), "OR", ValueType::Block, "True if any of the triggers inside is true.", "OR = { ... }"),
    (Scopes::all(), "NOT", ValueType::Block, "True if all of the triggers inside are false.", "NOT = { ... }"),
    (Scopes::all(), "NOR", ValueType::Block, "True if none of the triggers inside is true.", "NOR = { ... }"),
    (Scopes::all(), "NAND", ValueType::Block, "True if at least one of the triggers inside is false.", "NAND = { ... }"),
    (Scopes::None, "always", ValueType::Boolean, "Always true or always false.", "always = yes"),
    (Scopes::all(), "calc_true_if", ValueType::Block, "True if at least `amount` of the triggers inside are true.", "calc_true_if = { amount = 2 ... }"),
    (Scopes::all(), "custom_description", ValueType::Block, "Shows the given text instead of the tooltips of the triggers inside.", "custom_description = { text = my_desc ... }"),
    (Scopes::all(), "custom_tooltip", ValueType::Block, "Shows the given text instead of the tooltips of the triggers inside.", "custom_tooltip = { text = my_tooltip ... }"),
    (Scopes::all(), "exists", ValueType::Scope, "True if the scope target exists.", "exists = scope:target"),
    (Scopes::all(), "has_variable", ValueType::Text, "True if the scope has this variable set.", "has_variable = my_var"),
    (Scopes::all(), "trigger_if", ValueType::Block, "Evaluates the triggers inside only if `limit` is true.", "trigger_if = { limit = { ... } ... }"),
    (Scopes::all(), "trigger_else_if", ValueType::Block, "Like `trigger_if`, after a `trigger_if` that failed.", "trigger_else_if = { limit = { ... } ... }"),
    (Scopes::all(), "trigger_else", ValueType::Block, "Evaluates the triggers inside if the preceding `trigger_if` failed.", "trigger_else = { ... }"),
    // character
    (Scopes::Character, "age", ValueType::Number, "The character's age in years.", "age >= 16"),
    (Scopes::Character, "diplomacy", ValueType::Number, "The character's diplomacy skill.", "diplomacy >= 10"),
    (Scopes::Character, "gold", ValueType::Number, "The character's gold.", "gold > 100"),
    (Scopes::Character, "has_character_flag", ValueType::Text, "True if the character has this flag.", "has_character_flag = my_flag"),
    (Scopes::Character, "has_character_modifier", ValueType::Text, "True if the character has this modifier.", "has_character_modifier = my_modifier"),
    (Scopes::Character, "has_culture", ValueType::Scope, "True if the character has this culture.", "has_culture = culture:norse"),
    (Scopes::Character, "has_faith", ValueType::Scope, "True if the character has this faith.", "has_faith = faith:catholic"),
    (Scopes::Character, "has_opinion_modifier", ValueType::Block, "True if the character has the opinion modifier towards the target.", "has_opinion_modifier = { target = scope:actor modifier = my_opinion }"),
    (Scopes::Character, "has_relation_rival", ValueType::Scope, "True if the character is a rival of the target.", "has_relation_rival = scope:recipient"),
    (Scopes::Character, "has_title", ValueType::Scope, "True if the character holds the title.", "has_title = title:k_france"),
    (Scopes::Character, "has_trait", ValueType::Text, "True if the character has the trait.", "has_trait = brave"),
    (Scopes::Character, "highest_held_title_tier", ValueType::Number, "The tier of the character's highest title.", "highest_held_title_tier >= tier_kingdom"),
    (Scopes::Character, "intrigue", ValueType::Number, "The character's intrigue skill.", "intrigue >= 10"),
    (Scopes::Character, "is_adult", ValueType::Boolean, "True if the character is an adult.", "is_adult = yes"),
    (Scopes::Character, "is_alive", ValueType::Boolean, "True if the character is alive.", "is_alive = yes"),
    (Scopes::Character, "is_at_war", ValueType::Boolean, "True if the character is at war.", "is_at_war = yes"),
    (Scopes::Character, "is_close_family_of", ValueType::Scope, "True if the character is close family of the target.", "is_close_family_of = root"),
    (Scopes::Character, "is_female", ValueType::Boolean, "True if the character is female.", "is_female = yes"),
    (Scopes::Character, "is_imprisoned", ValueType::Boolean, "True if the character is imprisoned.", "is_imprisoned = no"),
    (Scopes::Character, "is_landed", ValueType::Boolean, "True if the character holds a landed title.", "is_landed = yes"),
    (Scopes::Character, "is_male", ValueType::Boolean, "True if the character is male.", "is_male = yes"),
    (Scopes::Character, "is_ruler", ValueType::Boolean, "True if the character holds any title.", "is_ruler = yes"),
    (Scopes::Character, "is_vassal_of", ValueType::Scope, "True if the character is a direct vassal of the target.", "is_vassal_of = root"),
    (Scopes::Character, "learning", ValueType::Number, "The character's learning skill.", "learning >= 10"),
    (Scopes::Character, "martial", ValueType::Number, "The character's martial skill.", "martial >= 10"),
    (Scopes::Character, "opinion", ValueType::Block, "Compares the character's opinion of the target.", "opinion = { target = scope:actor value >= 20 }"),
    (Scopes::Character, "piety", ValueType::Number, "The character's piety.", "piety > 500"),
    (Scopes::Character, "prestige", ValueType::Number, "The character's prestige.", "prestige > 500"),
    (Scopes::Character, "prowess", ValueType::Number, "The character's prowess.", "prowess >= 10"),
    (Scopes::Character, "reverse_opinion", ValueType::Block, "Compares the target's opinion of the character.", "reverse_opinion = { target = scope:actor value >= 20 }"),
    (Scopes::Character, "stewardship", ValueType::Number, "The character's stewardship skill.", "stewardship >= 10"),
    // landed title
    (Scopes::LandedTitle, "development_level", ValueType::Number, "The development level of the county.", "development_level >= 20"),
    (Scopes::LandedTitle, "has_county_modifier", ValueType::Text, "True if the county has this modifier.", "has_county_modifier = my_modifier"),
    (Scopes::LandedTitle, "is_title_created", ValueType::Boolean, "True if the title currently has a holder.", "is_title_created = yes"),
    (Scopes::LandedTitle, "tier", ValueType::Number, "The tier of the title.", "tier = tier_duchy"),
    // province
    (Scopes::Province, "fort_level", ValueType::Number, "The fort level of the province.", "fort_level >= 2"),
    (Scopes::Province, "has_building", ValueType::Text, "True if the province has this building.", "has_building = castle_01"),
    (Scopes::Province, "has_holding", ValueType::Boolean, "True if the province has a holding.", "has_holding = yes"),
    (Scopes::Province, "is_coastal", ValueType::Boolean, "True if the province is next to the sea.", "is_coastal = yes"),
    (Scopes::Province, "terrain", ValueType::Text, "True if the province has this terrain.", "terrain = mountains"),
    // other
    (Scopes::Culture, "has_cultural_pillar", ValueType::Text, "True if the culture has this pillar.", "has_cultural_pillar = heritage_north_germanic"),
    (Scopes::Culture, "has_cultural_tradition", ValueType::Text, "True if the culture has this tradition.", "has_cultural_tradition = tradition_hill_dwellers"),
    (Scopes::Faith, "has_doctrine", ValueType::Text, "True if the faith has this doctrine.", "has_doctrine = doctrine_pluralism_righteous"),
    (Scopes::Faith, "religion_tag", ValueType::Text, "True if the faith's religion has this tag.", "religion_tag = christianity_religion"),
    (Scopes::Scheme, "scheme_progress", ValueType::Number, "The progress of the scheme.", "scheme_progress >= 5"),
    (Scopes::Scheme, "scheme_type", ValueType::Text, "True if the scheme is of this type.", "scheme_type = murder"),
];
