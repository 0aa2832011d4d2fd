use crate::schema::modif::ModifKinds;

const ALL: ModifKinds = ModifKinds::all();
const PROVINCE_COUNTY: ModifKinds = ModifKinds::Province.union(ModifKinds::County);

/// LAST UPDATED CK3 VERSION 1.12.4
/// See `modifiers.log` from the game data dumps.
/// A `modif` is one of the values a modifier block can change.
pub(crate) const MODIF_TABLE: &[(&str, ModifKinds)] = &[
    ("additional_fort_level", ALL),
    ("ai_boldness", ModifKinds::Character),
    ("ai_compassion", ModifKinds::Character),
    ("ai_greed", ModifKinds::Character),
    ("ai_honor", ModifKinds::Character),
    ("ai_rationality", ModifKinds::Character),
    ("ai_sociability", ModifKinds::Character),
    ("ai_vengefulness", ModifKinds::Character),
    ("ai_zeal", ModifKinds::Character),
    ("army_maintenance_mult", ModifKinds::Character),
    ("attraction_opinion", ModifKinds::Character),
    ("build_gold_cost", ALL),
    ("build_speed", ALL),
    ("county_opinion_add", ModifKinds::Character.union(ModifKinds::County)),
    ("defender_holding_advantage", ALL),
    ("development_growth", PROVINCE_COUNTY),
    ("development_growth_factor", PROVINCE_COUNTY),
    ("diplomacy", ModifKinds::Character),
    ("diplomacy_per_prestige_level", ModifKinds::Character),
    ("domain_limit", ModifKinds::Character),
    ("domain_tax_mult", ModifKinds::Character),
    ("dread_baseline_add", ModifKinds::Character),
    ("dread_gain_mult", ModifKinds::Character),
    ("fertility", ModifKinds::Character),
    ("fort_level", ALL),
    ("garrison_size", ALL),
    ("general_opinion", ModifKinds::Character),
    ("health", ModifKinds::Character),
    ("hostile_scheme_power_mult", ModifKinds::Character),
    ("hostile_scheme_resistance_add", ModifKinds::Character),
    ("intrigue", ModifKinds::Character),
    ("knight_effectiveness_mult", ModifKinds::Character),
    ("learning", ModifKinds::Character),
    ("levy_reinforcement_rate", ALL),
    ("levy_size", ALL),
    ("life_expectancy", ModifKinds::Character),
    ("martial", ModifKinds::Character),
    ("monthly_county_control_change_add", PROVINCE_COUNTY),
    ("monthly_income", ModifKinds::Character),
    ("monthly_piety", ModifKinds::Character),
    ("monthly_piety_gain_mult", ModifKinds::Character),
    ("monthly_prestige", ModifKinds::Character),
    ("monthly_prestige_gain_mult", ModifKinds::Character),
    ("negate_health_penalty_add", ModifKinds::Character),
    ("prowess", ModifKinds::Character),
    ("siege_phase_time", ALL),
    ("stewardship", ModifKinds::Character),
    ("stress_gain_mult", ModifKinds::Character),
    ("stress_loss_mult", ModifKinds::Character),
    ("supply_limit", ALL),
    ("supply_limit_mult", ALL),
    ("tax_mult", ALL),
    ("tax_slot_add", ModifKinds::Character),
    ("travel_danger", PROVINCE_COUNTY),
    ("vassal_limit", ModifKinds::Character),
    ("vassal_opinion", ModifKinds::Character),
];
