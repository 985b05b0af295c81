mod loader;
mod model;
mod presets;
mod validation;

pub use loader::{
    ConfigLoader, ConfigSource, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult, parse_config,
};
pub use model::{
    AuditSettings, CONFIG_VERSION, CheckConfig, Config, EntityConfig, ExtractConfig,
    ProximityConfig,
};
pub use presets::{AVAILABLE_PRESETS, PRESET_DESCRIPTIONS, preset_source};
pub use validation::validate_config_semantics;
