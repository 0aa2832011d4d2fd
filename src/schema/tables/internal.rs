use crate::schema::field::{field, FieldKind, RawField};

const DAYS: RawField = field("days", FieldKind::Integer, "How many days it lasts.");
const MONTHS: RawField = field("months", FieldKind::Integer, "How many months it lasts.");
const YEARS: RawField = field("years", FieldKind::Integer, "How many years it lasts.");

const OPINION_TARGET: RawField =
    field("target", FieldKind::String, "The character the opinion is about.").required().example("target = scope:actor");
const OPINION_MODIFIER: RawField =
    field("modifier", FieldKind::String, "The opinion modifier to use.").required().example("modifier = respect_opinion");
const OPINION_VALUE: RawField = field("opinion", FieldKind::Integer, "Overrides the opinion value of the modifier.");

/// LAST UPDATED CK3 VERSION 1.12.4
/// Triggers whose block holds its own fields and nothing else.
pub(crate) const TRIGGER_INTERNAL: &[(&str, &[RawField])] = &[
    (
        "opinion",
        &[OPINION_TARGET, field("value", FieldKind::Integer, "The opinion to compare to.").required()],
    ),
    (
        "reverse_opinion",
        &[OPINION_TARGET, field("value", FieldKind::Integer, "The opinion to compare to.").required()],
    ),
    (
        "has_opinion_modifier",
        &[
            OPINION_TARGET,
            OPINION_MODIFIER,
            field("value", FieldKind::Integer, "Compares the current value of the modifier."),
        ],
    ),
];

/// LAST UPDATED CK3 VERSION 1.12.4
/// Effects whose block holds its own fields and nothing else.
pub(crate) const EFFECT_INTERNAL: &[(&str, &[RawField])] = &[
    ("add_opinion", &[OPINION_TARGET, OPINION_MODIFIER, OPINION_VALUE, DAYS, MONTHS, YEARS]),
    (
        "reverse_add_opinion",
        &[OPINION_TARGET, OPINION_MODIFIER, OPINION_VALUE, DAYS, MONTHS, YEARS],
    ),
    // Opinion blocks as they appear inside effects, like in interaction acceptance
    ("opinion", &[OPINION_TARGET, OPINION_MODIFIER, OPINION_VALUE, DAYS, MONTHS, YEARS]),
    ("remove_opinion", &[OPINION_TARGET, OPINION_MODIFIER]),
    (
        "set_variable",
        &[
            field("name", FieldKind::String, "The name of the variable.").required(),
            field("value", FieldKind::String, "The value to store, a number or a scope.").default("yes"),
            DAYS,
            MONTHS,
            YEARS,
        ],
    ),
    (
        "change_variable",
        &[
            field("name", FieldKind::String, "The name of the variable.").required(),
            field("add", FieldKind::Float, "Adds to the variable."),
            field("subtract", FieldKind::Float, "Subtracts from the variable."),
            field("multiply", FieldKind::Float, "Multiplies the variable."),
            field("divide", FieldKind::Float, "Divides the variable."),
            field("min", FieldKind::Float, "The lowest value the variable can get."),
            field("max", FieldKind::Float, "The highest value the variable can get."),
        ],
    ),
    (
        "create_character",
        &[
            field("name", FieldKind::String, "The character's first name."),
            field("age", FieldKind::Integer, "The character's age."),
            field("gender", FieldKind::Enum, "The character's gender.").values(&["male", "female"]),
            field("gender_female_chance", FieldKind::Integer, "Percentage chance to be female."),
            field("trait", FieldKind::String, "A trait to give the character. Can be repeated."),
            field("random_traits", FieldKind::Boolean, "Whether to add random traits.").default("yes"),
            field("culture", FieldKind::String, "The character's culture."),
            field("faith", FieldKind::String, "The character's faith."),
            field("dynasty", FieldKind::Enum, "How to pick the dynasty.").values(&["generate", "none", "inherit"]),
            field("dynasty_house", FieldKind::String, "The house to put the character in."),
            field("employer", FieldKind::String, "The character's employer."),
            field("location", FieldKind::String, "The province where the character is created."),
            field("save_scope_as", FieldKind::String, "Saves the new character under this name."),
            field("after_creation", FieldKind::Effect, "Effects executed in the new character's scope."),
        ],
    ),
    (
        "trigger_event",
        &[
            field("id", FieldKind::String, "The event to fire.").example("id = my_events.0001"),
            field("on_action", FieldKind::String, "The on-action to fire instead of an event."),
            DAYS,
            MONTHS,
            YEARS,
        ],
    ),
    (
        "add_character_modifier",
        &[
            field("modifier", FieldKind::String, "The modifier to add.").required(),
            DAYS,
            MONTHS,
            YEARS,
        ],
    ),
    (
        "add_county_modifier",
        &[
            field("modifier", FieldKind::String, "The modifier to add.").required(),
            DAYS,
            MONTHS,
            YEARS,
        ],
    ),
    (
        "add_province_modifier",
        &[
            field("modifier", FieldKind::String, "The modifier to add.").required(),
            DAYS,
            MONTHS,
            YEARS,
        ],
    ),
    (
        "add_secret",
        &[
            field("type", FieldKind::String, "The secret type.").required(),
            field("target", FieldKind::String, "The character the secret is about."),
        ],
    ),
    (
        "death",
        &[
            field("death_reason", FieldKind::String, "The cause of death.").required(),
            field("killer", FieldKind::String, "The character responsible."),
        ],
    ),
    (
        "imprison",
        &[
            field("target", FieldKind::String, "The character to imprison.").required(),
            field("type", FieldKind::Enum, "The kind of prison.").values(&["dungeon", "house_arrest"]),
        ],
    ),
    (
        "start_war",
        &[
            field("casus_belli", FieldKind::String, "The casus belli of the war.").required(),
            field("target", FieldKind::String, "The defender.").required(),
            field("claimant", FieldKind::String, "The character who would get the titles."),
            field("target_title", FieldKind::String, "A title fought over. Can be repeated."),
        ],
    ),
];
