pub mod check;
pub mod config;
mod context;
pub mod extract;
pub mod init;
pub mod presets;

pub use check::run_check;
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use extract::{run_extract, run_extract_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use presets::{format_presets, run_presets};
