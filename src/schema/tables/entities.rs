use crate::entity::EntityKind;
use crate::schema::field::{field, FieldKind, RawField};
use crate::schema::modif::ModifierCategory;
use crate::schema::registry::EntityBody;
use crate::scopes::Scopes;

use FieldKind::{Block, Boolean, Effect, Enum, Float, Integer, List, Trigger};

const TRAIT_CATEGORIES: &[&str] = &[
    "childhood",
    "commander",
    "court_type",
    "education",
    "fame",
    "health",
    "lifestyle",
    "personality",
    "winter_commander",
];

const SKILLS: &[&str] = &["diplomacy", "martial", "stewardship", "intrigue", "learning", "prowess"];

const AI_WILL_DO: RawField = field("ai_will_do", Block, "How much the AI wants to do this.");
const COOLDOWN: RawField = field("cooldown", Block, "How long before this can happen again.");
const STRING: FieldKind = FieldKind::String;

/// LAST UPDATED CK3 VERSION 1.12.4
/// The top-level definitions of each entity kind.
/// Fields are: kind, scope of the definition's body, new-definition snippet, fields, what the
/// body itself holds if it is not a list of fields.
pub(crate) const ENTITIES: &[(EntityKind, Scopes, &str, &[RawField], Option<EntityBody>)] = &[
    (
        EntityKind::Activity,
        Scopes::Activity,
        "${1:activity_name} = {\n\tis_shown = {\n\t\t$2\n\t}\n\tcan_start = {\n\t\t$3\n\t}\n\ton_start = {\n\t\t$0\n\t}\n}",
        &[
            field("is_shown", Trigger, "Whether the activity shows up for the character."),
            field("can_start", Trigger, "Whether the character can start the activity."),
            field("can_start_showing_failures_only", Trigger, "Like can_start, but only failures are shown."),
            field("is_valid", Trigger, "The activity ends if this becomes false."),
            field("on_start", Effect, "Executed when the activity starts."),
            field("on_enter_passive_state", Effect, "Executed when the activity goes passive."),
            field("on_complete", Effect, "Executed when the activity ends."),
            field("cost", Block, "The cost of starting the activity."),
            field("planner_type", Enum, "Where the activity is planned.").values(&["province", "holding"]),
            field("max_province_icons", Integer, "How many province icons to show."),
            field("open_invite", Boolean, "Whether anyone can join."),
            field("is_grand_activity", Boolean, "Whether it is a grand activity."),
            field("guest_invite_rules", Block, "Which characters get invited."),
            field("phases", Block, "The phases of the activity."),
            field("options", Block, "The options the planner can choose."),
            field("special_guests", Block, "Special roles for guests."),
            field("locales", Block, "The locales the activity uses."),
            AI_WILL_DO,
        ],
        None,
    ),
    (
        EntityKind::Building,
        Scopes::Province,
        "${1:building_name}_01 = {\n\tconstruction_time = ${2:730}\n\tcost_gold = ${3:100}\n\t$0\n}",
        &[
            field("type", Enum, "The type of building.").values(&["regular", "duchy_capital", "special"]),
            field("construction_time", Integer, "Days to construct.").required(),
            field("cost_gold", Integer, "Gold cost to construct."),
            field("cost_prestige", Integer, "Prestige cost to construct."),
            field("cost_piety", Integer, "Piety cost to construct."),
            field("levy", Integer, "Levies added by the building."),
            field("max_garrison", Integer, "Garrison added by the building."),
            field("garrison_reinforcement_factor", Float, "Garrison reinforcement added by the building."),
            field("province_modifier", Block, "Modifiers for the province."),
            field("county_modifier", Block, "Modifiers for the county."),
            field("character_modifier", Block, "Modifiers for the holder."),
            field("duchy_capital_county_modifier", Block, "Modifiers for the county if it is a duchy capital."),
            field("can_construct_potential", Trigger, "Whether the building shows up."),
            field("can_construct", Trigger, "Whether the building can be constructed."),
            field("is_enabled", Trigger, "Whether the building's effects are active."),
            field("show_disabled", Boolean, "Whether to show the building when it cannot be built."),
            field("next_building", STRING, "The next level of the building."),
            field("asset", Block, "Graphics for the building. Can be repeated."),
            field("flag", STRING, "A flag for checking the building in script."),
            field("on_complete", Effect, "Executed when construction is done."),
        ],
        None,
    ),
    (
        EntityKind::CharacterInteraction,
        Scopes::Character,
        "${1:interaction_name} = {\n\tcategory = ${2:interaction_category_friendly}\n\tis_shown = {\n\t\t$3\n\t}\n\ton_accept = {\n\t\t$0\n\t}\n}",
        &[
            field("category", STRING, "The interaction menu category.").required(),
            field("icon", STRING, "The icon to show."),
            field("desc", STRING, "The description of the interaction."),
            field("is_shown", Trigger, "Whether the interaction shows up."),
            field("is_valid", Trigger, "Whether the interaction can be used."),
            field("is_valid_showing_failures_only", Trigger, "Like is_valid, but only failures are shown."),
            field("can_send", Trigger, "Whether the actor can send it."),
            field("can_be_picked", Trigger, "Whether a target can be picked."),
            field("auto_accept", Boolean, "Whether the recipient always accepts.").default("no"),
            field("on_accept", Effect, "Executed when accepted."),
            field("on_decline", Effect, "Executed when declined."),
            field("on_send", Effect, "Executed when sent."),
            field("on_auto_accept", Effect, "Executed when automatically accepted."),
            field("ai_accept", Block, "How much the AI recipient wants to accept."),
            field("ai_potential", Trigger, "Whether the AI considers sending this."),
            field("ai_targets", Block, "Which characters the AI considers as targets."),
            field("ai_frequency", Integer, "How many months between AI checks."),
            AI_WILL_DO,
            COOLDOWN,
            field("cooldown_against_recipient", Block, "How long before this can be sent to the same recipient."),
            field("common_interaction", Boolean, "Whether it is a commonly used interaction."),
            field("send_option", Block, "An optional choice when sending. Can be repeated."),
            field("popup_on_receive", Boolean, "Whether to pop up a window for the recipient."),
            field("pause_on_receive", Boolean, "Whether to pause the game for the recipient."),
            field("use_diplomatic_range", Boolean, "Whether the target must be in diplomatic range.")
                .default("yes"),
        ],
        None,
    ),
    (
        EntityKind::CultureTradition,
        Scopes::Culture,
        "${1:tradition_name} = {\n\tcategory = ${2|realm,combat,societal,regional,ritual|}\n\tcan_pick = {\n\t\t$3\n\t}\n\t$0\n}",
        &[
            field("category", Enum, "The tradition category.")
                .values(&["realm", "combat", "societal", "regional", "ritual"])
                .required(),
            field("layers", Block, "Graphics for the tradition icon."),
            field("is_shown", Trigger, "Whether the tradition shows up."),
            field("can_pick", Trigger, "Whether the tradition can be picked."),
            field("can_pick_for_hybridization", Trigger, "Whether the tradition can be picked for a hybrid."),
            field("parameters", Block, "Parameters that script can check."),
            field("character_modifier", Block, "Modifiers for characters of this culture."),
            field("county_modifier", Block, "Modifiers for counties of this culture."),
            field("province_modifier", Block, "Modifiers for provinces of this culture."),
            field("culture_modifier", Block, "Modifiers for the culture itself."),
            field("cost", Block, "The prestige cost of adopting it."),
            AI_WILL_DO,
        ],
        None,
    ),
    (
        EntityKind::Decision,
        Scopes::Character,
        "${1:decision_name} = {\n\tpicture = {\n\t\treference = ${2:gfx/interface/illustrations/decisions/decision_misc.dds}\n\t}\n\tis_shown = {\n\t\t$3\n\t}\n\teffect = {\n\t\t$0\n\t}\n\tai_check_interval = ${4:120}\n}",
        &[
            field("picture", Block, "The illustration of the decision."),
            field("desc", STRING, "The description of the decision."),
            field("selection_tooltip", STRING, "The tooltip in the decision list."),
            field("confirm_text", STRING, "The text of the confirm button."),
            field("decision_group_type", STRING, "The group the decision is listed under."),
            field("sort_order", Integer, "The position in the decision list."),
            field("major", Boolean, "Whether it is a major decision.").default("no"),
            field("is_shown", Trigger, "Whether the decision shows up."),
            field("is_valid", Trigger, "Whether the decision can be taken."),
            field("is_valid_showing_failures_only", Trigger, "Like is_valid, but only failures are shown."),
            field("cost", Block, "The cost of taking the decision."),
            field("effect", Effect, "Executed when the decision is taken."),
            field("ai_check_interval", Integer, "How many months between AI checks.").required(),
            field("ai_potential", Trigger, "Whether the AI considers this decision."),
            AI_WILL_DO,
            COOLDOWN,
        ],
        None,
    ),
    (
        EntityKind::Doctrine,
        Scopes::Faith,
        "${1:doctrine_group} = {\n\tgroup = ${2:main_group}\n\t${3:doctrine_name} = {\n\t\t$0\n\t}\n}",
        &[
            field("group", STRING, "The category this doctrine group is shown in."),
            field("number_of_picks", Integer, "How many doctrines of the group can be picked.").default("1"),
            field("is_available_on_create", Trigger, "Whether it can be picked when creating a faith."),
            field("can_pick", Trigger, "Whether it can be picked."),
            field("piety_cost", Block, "The piety cost of picking it."),
            field("parameters", Block, "Parameters that script can check."),
            field("character_modifier", Block, "Modifiers for characters of this faith."),
            field("traits", Block, "Traits that this doctrine makes virtues or sins."),
            field("visible", Boolean, "Whether it shows up in the faith view.").default("yes"),
        ],
        None,
    ),
    (
        EntityKind::Event,
        Scopes::Character,
        "${1:namespace}.${2:0001} = {\n\ttype = character_event\n\ttitle = ${1}.${2}.t\n\tdesc = ${1}.${2}.desc\n\ttheme = ${3:default}\n\n\timmediate = {\n\t\t$0\n\t}\n\n\toption = {\n\t\tname = ${1}.${2}.a\n\t}\n}",
        &[
            field("type", Enum, "The kind of event window.")
                .values(&[
                    "character_event",
                    "letter_event",
                    "court_event",
                    "activity_event",
                    "duel_event",
                    "empty",
                ])
                .default("character_event"),
            field("title", STRING, "The localization key of the title."),
            field("desc", STRING, "The localization key of the text."),
            field("theme", STRING, "The theme of the event window."),
            field("left_portrait", STRING, "The character shown on the left."),
            field("right_portrait", STRING, "The character shown on the right."),
            field("lower_left_portrait", STRING, "The character shown on the lower left."),
            field("override_background", Block, "A different background to use."),
            field("hidden", Boolean, "Whether the event has no window.").default("no"),
            field("orphan", Boolean, "Whether the event is fired from outside script."),
            field("trigger", Trigger, "Whether the event can fire."),
            field("immediate", Effect, "Executed when the event fires."),
            field("after", Effect, "Executed after an option is picked."),
            field("option", Block, "An option the player can pick. Can be repeated."),
            field("weight_multiplier", Block, "Weights the event in random on-actions."),
            COOLDOWN,
        ],
        None,
    ),
    (
        EntityKind::Modifier,
        Scopes::Character,
        "${1:modifier_name} = {\n\ticon = ${2:prestige_positive}\n\t$0\n}",
        &[
            field("icon", STRING, "The icon of the modifier."),
            field("stacking", Boolean, "Whether the modifier can be added more than once.").default("no"),
            field("decaying", Boolean, "Whether the modifier wears off over time."),
            field("hide_effects", Boolean, "Whether to hide the effects in the tooltip."),
            field("scale", Block, "Scales the modifier by a script value."),
        ],
        Some(EntityBody::Modifiers(ModifierCategory::Character)),
    ),
    (
        EntityKind::OnAction,
        Scopes::Character,
        "${1:on_action_name} = {\n\ttrigger = {\n\t\t$2\n\t}\n\teffect = {\n\t\t$0\n\t}\n}",
        &[
            field("trigger", Trigger, "Whether the on-action runs."),
            field("effect", Effect, "Executed when the on-action runs."),
            field("events", List, "Events to fire."),
            field("random_events", List, "Weighted events to pick one from."),
            field("first_valid", List, "Events to try in order."),
            field("on_actions", List, "Other on-actions to run."),
            field("random_on_action", List, "Weighted on-actions to pick one from."),
            field("weight_multiplier", Block, "Weights this on-action when picked randomly."),
            field("fallback", STRING, "The on-action to run if no event fires."),
        ],
        None,
    ),
    (
        EntityKind::OpinionModifier,
        Scopes::Character,
        "${1:opinion_name} = {\n\topinion = ${2:10}\n\t$0\n}",
        &[
            field("opinion", Integer, "The opinion value.").required(),
            field("decaying", Boolean, "Whether the opinion goes to zero over time."),
            field("growing", Boolean, "Whether the opinion goes up over time."),
            field("monthly_change", Float, "How much the opinion changes each month."),
            field("min", Integer, "The lowest value the opinion can get."),
            field("max", Integer, "The highest value the opinion can get."),
            field("stacking", Boolean, "Whether it can be added more than once.").default("no"),
            field("imprisonment_reason", Boolean, "Whether it allows imprisonment."),
            field("revoke_title_reason", Boolean, "Whether it allows title revocation."),
            field("days", Integer, "How many days it lasts."),
            field("months", Integer, "How many months it lasts."),
            field("years", Integer, "How many years it lasts."),
        ],
        None,
    ),
    (
        EntityKind::Scheme,
        Scopes::Character,
        "${1:scheme_name} = {\n\tskill = ${2|diplomacy,martial,stewardship,intrigue,learning,prowess|}\n\tcategory = ${3|hostile,personal,political,contract|}\n\tallow = {\n\t\t$4\n\t}\n\tvalid = {\n\t\t$0\n\t}\n}",
        &[
            field("skill", Enum, "The skill the scheme uses.").values(SKILLS).required(),
            field("category", Enum, "The kind of scheme.")
                .values(&["hostile", "personal", "political", "contract"])
                .required(),
            field("target_type", Enum, "What the scheme targets.")
                .values(&["character", "title", "culture", "faith", "nothing"])
                .default("character"),
            field("is_secret", Boolean, "Whether the scheme is hidden from the target."),
            field("base_secrecy", Integer, "The base secrecy of the scheme."),
            field("icon", STRING, "The icon of the scheme."),
            field("allow", Trigger, "Whether the scheme can be started."),
            field("valid", Trigger, "The scheme ends if this becomes false."),
            field("on_start", Effect, "Executed when the scheme starts."),
            field("on_monthly", Effect, "Executed every month."),
            field("on_phase_completed", Effect, "Executed when a phase is done."),
            field("on_invalidated", Effect, "Executed when the scheme becomes invalid."),
            COOLDOWN,
        ],
        None,
    ),
    (
        EntityKind::ScriptedEffect,
        Scopes::Character,
        "${1:scripted_effect_name} = {\n\t$0\n}",
        &[],
        Some(EntityBody::Effects),
    ),
    (
        EntityKind::ScriptedTrigger,
        Scopes::Character,
        "${1:scripted_trigger_name} = {\n\t$0\n}",
        &[],
        Some(EntityBody::Triggers),
    ),
    (
        EntityKind::Trait,
        Scopes::Character,
        "${1:trait_name} = {\n\tcategory = ${2|childhood,commander,court_type,education,fame,health,lifestyle,personality,winter_commander|}\n\t$0\n}",
        &[
            field("category", Enum, "The trait category.").values(TRAIT_CATEGORIES).required(),
            field("group", STRING, "The group of leveled traits it belongs to."),
            field("level", Integer, "The level within its group."),
            field("name", STRING, "Overrides the localization key of the name."),
            field("desc", STRING, "Overrides the localization key of the description."),
            field("icon", STRING, "Overrides the icon."),
            field("opposites", List, "Traits that cannot be combined with this one."),
            field("minimum_age", Integer, "The youngest age at which it can be had."),
            field("maximum_age", Integer, "The oldest age at which it can be had."),
            field("genetic", Boolean, "Whether it is inherited.").default("no"),
            field("physical", Boolean, "Whether it is a physical trait.").default("no"),
            field("good", Boolean, "Whether it is a positive trait."),
            field("shown_in_ruler_designer", Boolean, "Whether it can be picked in the ruler designer.")
                .default("yes"),
            field("inherit_chance", Integer, "Percentage chance of passing it on."),
            field("birth", Float, "Percentage chance of being born with it."),
            field("random_creation", Float, "Percentage chance for generated characters."),
            field("same_opinion", Integer, "Opinion of others with the same trait."),
            field("opposite_opinion", Integer, "Opinion of others with an opposite trait."),
            field("compatibility", Block, "Opinion changes towards characters with other traits."),
            field("potential", Trigger, "Whether a character can get this trait."),
            field("track", Block, "Experience levels of a leveled trait."),
            field("tracks", Block, "Several named experience tracks."),
            field("culture_modifier", Block, "Modifiers depending on culture parameters."),
            field("health", Float, "Adds to health."),
            field("fertility", Float, "Adds to fertility."),
            field("diplomacy", Integer, "Adds to diplomacy."),
            field("martial", Integer, "Adds to martial."),
            field("stewardship", Integer, "Adds to stewardship."),
            field("intrigue", Integer, "Adds to intrigue."),
            field("learning", Integer, "Adds to learning."),
            field("prowess", Integer, "Adds to prowess."),
            field("flag", STRING, "A flag for checking the trait in script. Can be repeated."),
        ],
        None,
    ),
];

const WEIGHT: &[RawField] = &[
    field("base", Float, "The starting weight."),
    field("add", Float, "Adds to the weight."),
    field("factor", Float, "Multiplies the weight."),
    field("modifier", Block, "Changes the weight if its triggers are true. Can be repeated."),
];

const DURATION: &[RawField] = &[
    field("days", Integer, "How many days."),
    field("months", Integer, "How many months."),
    field("years", Integer, "How many years."),
];

const COST: &[RawField] = &[
    field("gold", Float, "The gold cost."),
    field("prestige", Float, "The prestige cost."),
    field("piety", Float, "The piety cost."),
];

/// How the fields of a block extra combine with the rest of the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExtraMode {
    /// Only the listed fields are valid inside the block.
    Exclusive,
    /// The listed fields are valid in addition to the usual triggers or effects.
    Extending,
}

/// LAST UPDATED CK3 VERSION 1.12.4
/// Fields that are valid in a named block only within a particular kind of definition.
pub(crate) const BLOCK_EXTRAS: &[(EntityKind, &str, ExtraMode, &[RawField])] = &[
    (
        EntityKind::Event,
        "option",
        ExtraMode::Extending,
        &[
            field("name", STRING, "The localization key of the option text.").example("name = my_events.0001.a"),
            field("trigger", Trigger, "Whether the option is available."),
            field("show_as_unavailable", Trigger, "Whether to show the option greyed out when unavailable."),
            field("ai_chance", Block, "How likely the AI is to pick this option."),
            field("fallback", Boolean, "Whether to show this option if no other is available."),
            field("exclusive", Boolean, "Whether to hide other options when this one is available."),
            field("flavor", STRING, "Extra text shown with the option."),
            field("highlight_portrait", STRING, "The character to highlight when hovering."),
            field("add_internal_flag", Enum, "Marks the option for the player.").values(&["special", "dangerous"]),
        ],
    ),
    (EntityKind::Event, "ai_chance", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::Event, "cooldown", ExtraMode::Exclusive, DURATION),
    (EntityKind::Activity, "ai_will_do", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::Activity, "cost", ExtraMode::Exclusive, COST),
    (EntityKind::Decision, "ai_will_do", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::Decision, "cost", ExtraMode::Exclusive, COST),
    (EntityKind::Decision, "cooldown", ExtraMode::Exclusive, DURATION),
    (
        EntityKind::Decision,
        "picture",
        ExtraMode::Exclusive,
        &[
            field("reference", STRING, "The path of the illustration.").required(),
            field("trigger", Trigger, "Whether to use this picture."),
            field("soundeffect", STRING, "A sound to play."),
        ],
    ),
    (EntityKind::CharacterInteraction, "ai_accept", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::CharacterInteraction, "ai_will_do", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::CharacterInteraction, "cooldown", ExtraMode::Exclusive, DURATION),
    (EntityKind::CharacterInteraction, "cooldown_against_recipient", ExtraMode::Exclusive, DURATION),
    (
        EntityKind::CharacterInteraction,
        "send_option",
        ExtraMode::Exclusive,
        &[
            field("flag", STRING, "The flag the option sets.").required(),
            field("localization", STRING, "The text of the option."),
            field("current_description", STRING, "The tooltip of the option."),
            field("is_shown", Trigger, "Whether the option shows up."),
            field("is_valid", Trigger, "Whether the option can be picked."),
            field("starts_enabled", Trigger, "Whether the option is checked by default."),
            field("can_be_changed", Trigger, "Whether the option can be changed."),
        ],
    ),
    (
        EntityKind::Building,
        "asset",
        ExtraMode::Exclusive,
        &[
            field("type", Enum, "The kind of graphics.").values(&["pdxmesh", "entity"]).required(),
            field("name", STRING, "The mesh or entity to show."),
            field("names", List, "Several meshes or entities to pick from."),
            field("illustration", STRING, "The illustration to show."),
            field("requires_dlc_flag", STRING, "The DLC needed for this asset."),
        ],
    ),
    (EntityKind::CultureTradition, "ai_will_do", ExtraMode::Exclusive, WEIGHT),
    (EntityKind::Scheme, "cooldown", ExtraMode::Exclusive, DURATION),
];
