#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the token-guard binary.
#[macro_export]
macro_rules! token_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("token-guard"))
    };
}

pub const HOMING_BULLET: &str = "Scenes/turrets/projectileTurret/bullet/homingBullet.gd";
pub const HOMING_SCENE: &str = "Scenes/turrets/projectileTurret/bullet/homingBullet.tscn";
pub const PROJECTILE_TURRET: &str = "Scenes/turrets/projectileTurret/projectileTurret.gd";
pub const HOMING_TEST: &str = "Tests/ValidateHomingSystem.gd";

/// A small ice audit: one entity, two token checks, one extraction.
pub const ICE_DEFINITION: &str = r#"
[audit]
name = "Ice audit"

[[entity]]
name = "ice"

[[entity.check]]
name = "gems"
file = "Scenes/main/Data.gd"
tokens = ["ice_basic", "ice_advanced"]
template = "\"{}\""

[[entity.check]]
name = "status effects"
file = "Scenes/systems/StatusEffect.gd"
tokens = ["frozen", "slow"]

[[extract]]
name = "ice gems"
file = "Scenes/main/Data.gd"
anchor = '"(ice_\w+)":\s*\{'
marker = '"element": "ice"'
"#;

pub const ICE_DATA: &str = r#"var gems = {
    "ice_basic": {"element": "ice", "damage": 10},
    "ice_advanced": {"element": "ice", "damage": 30},
    "fire_basic": {"element": "fire", "damage": 12},
}
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the temp directory as a string argument.
    pub fn path_arg(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Writes `.token-guard.toml` in the project root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".token-guard.toml", content);
    }

    /// Ice project; `complete` controls whether the `slow` effect exists.
    pub fn create_ice_project(&self, complete: bool) {
        self.create_config(ICE_DEFINITION);
        self.create_file("Scenes/main/Data.gd", ICE_DATA);
        let effects = if complete {
            "enum Effect { frozen, slow }\n"
        } else {
            "enum Effect { frozen }\n"
        };
        self.create_file("Scenes/systems/StatusEffect.gd", effects);
    }

    /// Project satisfying the built-in `homing` preset.
    pub fn create_homing_project(&self) {
        self.create_file(
            HOMING_BULLET,
            "extends Bullet\n\n\
             func homing_movement(delta):\n\tpass\n\
             func update_tracking_target():\n\tpass\n\
             func find_new_target():\n\tpass\n\
             func setup_homing_properties():\n\tpass\n\
             func get_tracking_status():\n\tpass\n",
        );
        self.create_file(HOMING_SCENE, "[gd_scene format=3]\n");
        self.create_file(
            PROJECTILE_TURRET,
            "func should_use_homing_bullets():\n\
             \treturn true\n\
             var scene = preload(\"res://bullet/homingBullet.tscn\")\n",
        );
        self.create_file(HOMING_TEST, "extends SceneTree\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
