use crate::error::{Result, TokenGuardError};

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["elements", "gems", "ice", "homing"];

/// One-line description of each preset, in `AVAILABLE_PRESETS` order.
pub const PRESET_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "elements",
        "Five-element audit: gems, status effects, effect integration, tower coverage",
    ),
    ("gems", "Gem definitions per element, passes at 90% overall"),
    (
        "ice",
        "Ice element deep audit with gem and effect record extraction",
    ),
    ("homing", "Homing projectile files, functions and turret wiring"),
];

/// TOML source of a built-in preset.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn preset_source(name: &str) -> Result<&'static str> {
    match name {
        "elements" => Ok(PRESET_ELEMENTS),
        "gems" => Ok(PRESET_GEMS),
        "ice" => Ok(PRESET_ICE),
        "homing" => Ok(PRESET_HOMING),
        _ => Err(TokenGuardError::Config(format!(
            "Unknown preset: '{}'. Available presets: {}",
            name,
            AVAILABLE_PRESETS.join(", ")
        ))),
    }
}

const PRESET_ELEMENTS: &str = r#"
version = "1"

[audit]
name = "Complete Elemental System"
complete_threshold = 80.0
partial_threshold = 60.0

# ---------------------------------------------------------------- ice
[[entity]]
name = "ice"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["ice_basic", "ice_intermediate", "ice_advanced"]

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["frost_debuff", "freeze"]

[[entity.check]]
name = "integration"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_frost", "apply_freeze"]
pass = { ratio = 0.8 }

[[entity.proximity]]
name = "tower coverage"
file = "Scenes/main/Data.gd"
anchors = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
needles = ["ice_basic", "ice_intermediate", "ice_advanced"]
pass = { at_least = 7 }

# ---------------------------------------------------------------- earth
[[entity]]
name = "earth"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["earth_basic", "earth_intermediate", "earth_advanced"]

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["weight_debuff", "armor_break_debuff", "petrify"]

[[entity.check]]
name = "integration"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_weight", "apply_armor_break", "apply_petrify"]
pass = { ratio = 0.8 }

[[entity.proximity]]
name = "tower coverage"
file = "Scenes/main/Data.gd"
anchors = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
needles = ["earth_basic", "earth_intermediate", "earth_advanced"]
pass = { at_least = 7 }

# ---------------------------------------------------------------- wind
[[entity]]
name = "wind"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["wind_basic", "wind_intermediate", "wind_advanced"]

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["imbalance_debuff", "knockback", "silence"]

[[entity.check]]
name = "integration"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_imbalance", "apply_knockback", "apply_silence"]
pass = { ratio = 0.8 }

[[entity.proximity]]
name = "tower coverage"
file = "Scenes/main/Data.gd"
anchors = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
needles = ["wind_basic", "wind_intermediate", "wind_advanced"]
pass = { at_least = 7 }

# ---------------------------------------------------------------- light
[[entity]]
name = "light"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["light_basic", "light_intermediate", "light_advanced"]

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["blind", "purify", "judgment"]

[[entity.check]]
name = "integration"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_blind", "apply_purify", "apply_judgment"]
pass = { ratio = 0.8 }

[[entity.proximity]]
name = "tower coverage"
file = "Scenes/main/Data.gd"
anchors = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
needles = ["light_basic", "light_intermediate", "light_advanced"]
pass = { at_least = 7 }

# ---------------------------------------------------------------- shadow
[[entity]]
name = "shadow"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["shadow_basic", "shadow_intermediate", "shadow_advanced"]

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["corrosion", "fear", "life_drain"]

[[entity.check]]
name = "integration"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_corrosion", "apply_fear", "apply_life_drain"]
pass = { ratio = 0.8 }

[[entity.proximity]]
name = "tower coverage"
file = "Scenes/main/Data.gd"
anchors = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
needles = ["shadow_basic", "shadow_intermediate", "shadow_advanced"]
pass = { at_least = 7 }
"#;

const PRESET_GEMS: &str = r#"
version = "1"

[audit]
name = "Elemental Gem Definitions"
require_all_complete = false
min_overall = 90.0

[[entity]]
name = "ice"
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["ice_basic", "ice_intermediate", "ice_advanced"]

[[entity]]
name = "earth"
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["earth_basic", "earth_intermediate", "earth_advanced"]

[[entity]]
name = "wind"
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["wind_basic", "wind_intermediate", "wind_advanced"]

[[entity]]
name = "light"
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["light_basic", "light_intermediate", "light_advanced"]

[[entity]]
name = "shadow"
[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["暗影宝石 1级", "暗影之心 2级", "暗影之魂 3级"]
"#;

const PRESET_ICE: &str = r#"
version = "1"

[audit]
name = "Ice Element Gem System"
complete_threshold = 100.0

[[entity]]
name = "data definitions"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["ice_basic", "ice_intermediate", "ice_advanced"]
template = '"{}"'

[[entity.check]]
name = "effects"
file = "Scenes/main/Data.gd"
tokens = [
    "frost_debuff_1", "frost_debuff_2", "frost_debuff_3",
    "freeze_chance_15_1s", "freeze_chance_20_0.5s",
    "freeze_main_2s", "freeze_on_end_1.5s",
]
template = '"{}"'

[[entity.check]]
name = "tower types"
file = "Scenes/main/Data.gd"
tokens = ["arrow_tower", "capture_tower", "mage_tower", "感应塔", "末日塔", "pulse_tower", "弹射塔", "aura_tower", "weakness_tower"]
# listed for reference only
pass = { at_least = 0 }

[[entity]]
name = "status effects"

[[entity.check]]
name = "frost and freeze handling"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["frost", "freeze"]
template = '"{}"'

[[entity]]
name = "gem effect system"

[[entity.check]]
name = "ice methods"
file = "Scenes/systems/GemEffectSystem.gd"
tokens = ["apply_frost_area", "apply_chance_freeze", "is_target_frozen", "get_frost_stacks", "apply_frozen_damage_bonus"]

[[entity]]
name = "turret integration"

[[entity.check]]
name = "ice handlers"
file = "Scenes/turrets/turretBase/turret_base.gd"
tokens = ["_setup_frost_area_effect", "_setup_chance_freeze_effect", "_setup_freeze_main_target_effect", "_setup_frost_aura_effect"]

[[entity]]
name = "test files"
files = ["Tests/IceGemSystemTest.gd", "Tests/IceElementValidation.gd", "IceElementDemo.gd", "ValidateIceElement.gd"]

[[entity]]
name = "effect pool"
files = ["Scenes/systems/EffectPool.gd"]

[[extract]]
name = "ice gems"
file = "Scenes/main/Data.gd"
anchor = '"(ice_\w+)":\s*\{'
marker_regex = '"element":\s*"ice"'

[[extract]]
name = "ice effects"
file = "Scenes/main/Data.gd"
anchor = '"(frost_\w+|freeze_\w+)"'
"#;

const PRESET_HOMING: &str = r#"
version = "1"

[audit]
name = "Homing Projectile System"
complete_threshold = 100.0

[[entity]]
name = "files"
files = [
    "Scenes/turrets/projectileTurret/bullet/homingBullet.gd",
    "Scenes/turrets/projectileTurret/bullet/homingBullet.tscn",
    "Scenes/turrets/projectileTurret/projectileTurret.gd",
    "Tests/ValidateHomingSystem.gd",
]

[[entity]]
name = "homing bullet"

[[entity.check]]
name = "functions"
file = "Scenes/turrets/projectileTurret/bullet/homingBullet.gd"
tokens = ["homing_movement", "update_tracking_target", "find_new_target", "setup_homing_properties", "get_tracking_status"]
template = "func {}"

[[entity]]
name = "turret integration"

[[entity.check]]
name = "projectile turret"
file = "Scenes/turrets/projectileTurret/projectileTurret.gd"
tokens = ["should_use_homing_bullets", "homingBullet.tscn"]
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
