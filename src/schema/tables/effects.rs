use crate::schema::catalog::ValueType;
use crate::scopes::Scopes;

/// LAST UPDATED CK3 VERSION 1.12.4
/// See `effects.log` from the game data dumps.
/// The effects that are not generated from iterators or scope links.
/// Fields are: input scopes, name, value type, description, usage example.
pub(crate) const EFFECT: &[(Scopes, &str, ValueType, &str, &str)] = &[
    // control
    (Scopes::all(), "custom_description", ValueType::Block, "Shows the given text instead of the tooltips of the effects inside.", "custom_description = { text = my_desc ... }"),
    (Scopes::all(), "custom_tooltip", ValueType::Block, "Shows the given text instead of the tooltips of the effects inside.", "custom_tooltip = { text = my_tooltip ... }"),
    (Scopes::all(), "debug_log", ValueType::Text, "Writes the text to the game's debug log.", "debug_log = \"reached here\""),
    (Scopes::all(), "else", ValueType::Block, "Executes the effects inside if the preceding `if` failed.", "else = { ... }"),
    (Scopes::all(), "else_if", ValueType::Block, "Like `if`, after an `if` that failed.", "else_if = { limit = { ... } ... }"),
    (Scopes::all(), "hidden_effect", ValueType::Block, "Executes the effects inside without showing them in tooltips.", "hidden_effect = { ... }"),
    (Scopes::all(), "if", ValueType::Block, "Executes the effects inside only if `limit` is true.", "if = { limit = { ... } ... }"),
    (Scopes::all(), "random", ValueType::Block, "Executes the effects inside with a percentage chance.", "random = { chance = 50 ... }"),
    (Scopes::all(), "random_list", ValueType::Block, "Executes one of the weighted blocks inside.", "random_list = { 50 = { ... } 50 = { ... } }"),
    (Scopes::all(), "remove_variable", ValueType::Text, "Removes a variable from the scope.", "remove_variable = my_var"),
    (Scopes::all(), "save_scope_as", ValueType::Text, "Saves the current scope under a name.", "save_scope_as = target"),
    (Scopes::all(), "save_temporary_scope_as", ValueType::Text, "Saves the current scope under a name, for the current effect only.", "save_temporary_scope_as = target"),
    (Scopes::all(), "change_variable", ValueType::Block, "Changes the numeric value of a variable.", "change_variable = { name = my_var add = 1 }"),
    (Scopes::all(), "set_variable", ValueType::Block, "Sets a variable on the scope.", "set_variable = { name = my_var value = 1 }"),
    (Scopes::all(), "show_as_tooltip", ValueType::Block, "Shows the effects inside in tooltips without executing them.", "show_as_tooltip = { ... }"),
    (Scopes::all(), "switch", ValueType::Block, "Executes the block whose key matches the trigger value.", "switch = { trigger = has_trait brave = { ... } }"),
    (Scopes::all(), "while", ValueType::Block, "Repeats the effects inside while `limit` is true, or `count` times.", "while = { count = 3 ... }"),
    // character
    (Scopes::Character, "add_character_flag", ValueType::Text, "Adds a flag to the character.", "add_character_flag = my_flag"),
    (Scopes::Character, "add_character_modifier", ValueType::Block, "Adds a modifier to the character.", "add_character_modifier = { modifier = my_modifier years = 5 }"),
    (Scopes::Character, "add_diplomacy_skill", ValueType::Number, "Adds to the character's diplomacy skill.", "add_diplomacy_skill = 2"),
    (Scopes::Character, "add_dread", ValueType::Number, "Adds dread to the character.", "add_dread = 10"),
    (Scopes::Character, "add_gold", ValueType::Number, "Adds gold to the character.", "add_gold = 100"),
    (Scopes::Character, "add_intrigue_skill", ValueType::Number, "Adds to the character's intrigue skill.", "add_intrigue_skill = 2"),
    (Scopes::Character, "add_learning_skill", ValueType::Number, "Adds to the character's learning skill.", "add_learning_skill = 2"),
    (Scopes::Character, "add_martial_skill", ValueType::Number, "Adds to the character's martial skill.", "add_martial_skill = 2"),
    (Scopes::Character, "add_opinion", ValueType::Block, "Adds an opinion modifier towards the target.", "add_opinion = { target = scope:actor modifier = respect_opinion opinion = 20 }"),
    (Scopes::Character, "add_piety", ValueType::Number, "Adds piety to the character.", "add_piety = 50"),
    (Scopes::Character, "add_prestige", ValueType::Number, "Adds prestige to the character.", "add_prestige = 50"),
    (Scopes::Character, "add_prowess_skill", ValueType::Number, "Adds to the character's prowess.", "add_prowess_skill = 2"),
    (Scopes::Character, "add_secret", ValueType::Block, "Gives the character a secret.", "add_secret = { type = secret_murder target = scope:victim }"),
    (Scopes::Character, "add_stewardship_skill", ValueType::Number, "Adds to the character's stewardship skill.", "add_stewardship_skill = 2"),
    (Scopes::Character, "add_stress", ValueType::Number, "Adds stress to the character.", "add_stress = 20"),
    (Scopes::Character, "add_trait", ValueType::Text, "Gives the character a trait.", "add_trait = brave"),
    (Scopes::None, "create_character", ValueType::Block, "Creates a new character.", "create_character = { age = 20 gender = male ... }"),
    (Scopes::Character, "death", ValueType::Block, "Kills the character.", "death = { death_reason = death_murder killer = scope:actor }"),
    (Scopes::Character, "give_nickname", ValueType::Text, "Gives the character a nickname.", "give_nickname = nick_the_great"),
    (Scopes::Character, "imprison", ValueType::Block, "Imprisons the target.", "imprison = { target = scope:recipient type = dungeon }"),
    (Scopes::Character, "marry", ValueType::Scope, "Marries the character to the target.", "marry = scope:recipient"),
    (Scopes::Character, "remove_character_modifier", ValueType::Text, "Removes a modifier from the character.", "remove_character_modifier = my_modifier"),
    (Scopes::Character, "remove_opinion", ValueType::Block, "Removes an opinion modifier towards the target.", "remove_opinion = { target = scope:actor modifier = respect_opinion }"),
    (Scopes::Character, "remove_short_term_gold", ValueType::Number, "Removes gold from the character.", "remove_short_term_gold = 50"),
    (Scopes::Character, "remove_trait", ValueType::Text, "Removes a trait from the character.", "remove_trait = brave"),
    (Scopes::Character, "reverse_add_opinion", ValueType::Block, "Gives the target an opinion modifier towards the character.", "reverse_add_opinion = { target = scope:actor modifier = respect_opinion }"),
    (Scopes::Character, "set_character_faith", ValueType::Scope, "Changes the character's faith.", "set_character_faith = faith:catholic"),
    (Scopes::Character, "set_culture", ValueType::Scope, "Changes the character's culture.", "set_culture = culture:norse"),
    (Scopes::Character, "set_relation_friend", ValueType::Scope, "Makes the character a friend of the target.", "set_relation_friend = scope:recipient"),
    (Scopes::Character, "set_relation_rival", ValueType::Scope, "Makes the character a rival of the target.", "set_relation_rival = scope:recipient"),
    (Scopes::Character, "start_war", ValueType::Block, "Declares war on the target.", "start_war = { casus_belli = de_jure_cb target = scope:recipient }"),
    (Scopes::Character.union(Scopes::LandedTitle), "trigger_event", ValueType::Block, "Fires an event for the scope.", "trigger_event = { id = my_events.0001 days = 5 }"),
    // landed title
    (Scopes::LandedTitle, "add_county_modifier", ValueType::Block, "Adds a modifier to the county.", "add_county_modifier = { modifier = my_modifier years = 5 }"),
    (Scopes::LandedTitle, "change_development_level", ValueType::Number, "Changes the development level of the county.", "change_development_level = 5"),
    (Scopes::LandedTitle, "set_county_culture", ValueType::Scope, "Changes the culture of the county.", "set_county_culture = culture:norse"),
    (Scopes::LandedTitle, "set_county_faith", ValueType::Scope, "Changes the faith of the county.", "set_county_faith = faith:catholic"),
    (Scopes::LandedTitle, "set_de_jure_liege_title", ValueType::Scope, "Moves the title under another de jure liege.", "set_de_jure_liege_title = title:k_france"),
    // province
    (Scopes::Province, "add_building", ValueType::Text, "Adds a building to the province.", "add_building = castle_02"),
    (Scopes::Province, "add_province_modifier", ValueType::Block, "Adds a modifier to the province.", "add_province_modifier = { modifier = my_modifier years = 5 }"),
    (Scopes::Province, "add_special_building", ValueType::Text, "Adds a special building to the province.", "add_special_building = hagia_sophia_01"),
    (Scopes::Province, "set_holding_type", ValueType::Text, "Changes the holding type of the province.", "set_holding_type = castle_holding"),
    // other
    (Scopes::Scheme, "add_scheme_progress", ValueType::Number, "Adds progress to the scheme.", "add_scheme_progress = 2"),
    (Scopes::Scheme, "end_scheme", ValueType::Boolean, "Ends the scheme.", "end_scheme = yes"),
];
