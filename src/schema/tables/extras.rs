use crate::schema::field::{field, FieldKind, RawField};

const LIMIT: RawField = field("limit", FieldKind::Trigger, "The triggers that must be true.");
const ALTERNATIVE_LIMIT: RawField =
    field("alternative_limit", FieldKind::Trigger, "Used if nothing matches `limit`.");
const TOOLTIP_TEXT: RawField =
    field("text", FieldKind::String, "The localization key of the text to show.").required();

/// LAST UPDATED CK3 VERSION 1.12.4
/// Triggers whose block takes a few fields of its own on top of the usual triggers.
pub(crate) const TRIGGER_EXTRAS: &[(&str, &[RawField])] = &[
    ("calc_true_if", &[field("amount", FieldKind::Integer, "How many triggers must be true.").required()]),
    (
        "custom_description",
        &[
            TOOLTIP_TEXT,
            field("subject", FieldKind::String, "The scope used as the subject of the text."),
            field("object", FieldKind::String, "The scope used as the object of the text."),
            field("value", FieldKind::Float, "A value to show in the text."),
        ],
    ),
    ("custom_tooltip", &[TOOLTIP_TEXT]),
    ("trigger_if", &[LIMIT]),
    ("trigger_else_if", &[LIMIT]),
    // The weight modifiers inside ai_will_do, ai_chance and similar
    (
        "modifier",
        &[
            field("add", FieldKind::Float, "Adds to the weight if the triggers are true."),
            field("factor", FieldKind::Float, "Multiplies the weight if the triggers are true."),
            field("desc", FieldKind::String, "Explains the modifier in the tooltip."),
        ],
    ),
];

/// LAST UPDATED CK3 VERSION 1.12.4
/// Effects whose block takes a few fields of its own on top of the usual effects.
pub(crate) const EFFECT_EXTRAS: &[(&str, &[RawField])] = &[
    ("if", &[LIMIT]),
    ("else_if", &[LIMIT]),
    ("while", &[LIMIT, field("count", FieldKind::Integer, "How many times to repeat.")]),
    (
        "random",
        &[
            field("chance", FieldKind::Float, "The percentage chance to execute the effects.").required(),
            field("modifier", FieldKind::Block, "Changes the chance if its triggers are true."),
        ],
    ),
    ("switch", &[field("trigger", FieldKind::String, "The trigger whose value selects the block.").required()]),
    ("custom_tooltip", &[TOOLTIP_TEXT]),
    ("custom_description", &[TOOLTIP_TEXT]),
];

/// Extra fields for the list iterators, by prefix.
pub(crate) const ITERATOR_EXTRAS: &[(&str, &[RawField])] = &[
    (
        "any_",
        &[
            field("count", FieldKind::String, "How many items must match, a number or `all`.").example("count >= 2"),
            field("percent", FieldKind::Float, "What fraction of the items must match."),
        ],
    ),
    ("every_", &[LIMIT, ALTERNATIVE_LIMIT]),
    ("random_", &[LIMIT, ALTERNATIVE_LIMIT, field("weight", FieldKind::Block, "Weights the random choice.")]),
    (
        "ordered_",
        &[
            LIMIT,
            ALTERNATIVE_LIMIT,
            field("order_by", FieldKind::Float, "The script value to sort the items by."),
            field("position", FieldKind::Integer, "Which item in the sorted list to pick.").default("0"),
            field("min", FieldKind::Integer, "The first position to pick."),
            field("max", FieldKind::Integer, "The last position to pick."),
            field("check_range_bounds", FieldKind::Boolean, "Whether to complain if there are too few items.")
                .default("yes"),
        ],
    ),
];
