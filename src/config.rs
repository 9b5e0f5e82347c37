//! Configuration management for arm11-emu.
//!
//! Configuration is loaded from multiple sources in priority order:
//! 1. Environment variables (ARM11_EMU_VARIANT, ARM11_EMU_STACK_TOP)
//! 2. Project-local config file (`./arm11-emu.toml`)
//! 3. User config file (`~/.config/arm11-emu/config.toml`)
//! 4. Built-in defaults
//!
//! # Config File Format
//!
//! ```toml
//! # arm11-emu.toml
//!
//! # Processor variant to model
//! variant = "arm11"
//!
//! # Initial stack pointer handed to cores built via from_config
//! stack_top = 268435456
//! ```
//!
//! Cores built through the plain constructors ignore configuration
//! entirely; only [`Arm11Core::from_config`](crate::cpu::core::Arm11Core::from_config)
//! consults it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::cpu::model::{CpuModel, ARM11};

/// Global cached configuration.
static CONFIG: OnceLock<EmuConfig> = OnceLock::new();

/// arm11-emu configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmuConfig {
    /// Processor variant name ("arm11").
    pub variant: Option<String>,

    /// Initial stack-pointer value for cores built from config.
    /// Overrides the architectural top-of-stack sentinel.
    pub stack_top: Option<u32>,
}

impl EmuConfig {
    /// Load configuration from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Project-local `arm11-emu.toml`
    /// 3. User config `~/.config/arm11-emu/config.toml`
    /// 4. Defaults
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load user config first (lowest priority of file configs)
        if let Some(user_config) = Self::load_user_config() {
            config.merge(user_config);
        }

        // Load project-local config (higher priority)
        if let Some(local_config) = Self::load_local_config() {
            config.merge(local_config);
        }

        // Environment variables override everything
        config.apply_env_overrides();

        config
    }

    /// Get the cached global configuration.
    ///
    /// Loads configuration on first call and caches it.
    pub fn get() -> &'static EmuConfig {
        CONFIG.get_or_init(|| {
            let config = Self::load();
            log::debug!("Loaded configuration: {:?}", config);
            config
        })
    }

    /// Resolve the configured variant to a model descriptor.
    ///
    /// Unknown variant names fall back to ARM11 with a warning.
    pub fn model(&self) -> &'static CpuModel {
        match self.variant.as_deref() {
            None => &ARM11,
            Some(name) => CpuModel::by_name(name).unwrap_or_else(|| {
                log::warn!("Unknown variant '{}', using arm11", name);
                &ARM11
            }),
        }
    }

    /// Load user configuration from ~/.config/arm11-emu/config.toml
    fn load_user_config() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let config_path = config_dir.join("arm11-emu").join("config.toml");
        Self::load_from_file(&config_path)
    }

    /// Load project-local configuration from ./arm11-emu.toml
    fn load_local_config() -> Option<Self> {
        // Try current directory
        let local_path = Path::new("arm11-emu.toml");
        if let Some(config) = Self::load_from_file(local_path) {
            return Some(config);
        }

        // Try to find project root by looking for Cargo.toml
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let project_path = Path::new(&manifest_dir).join("arm11-emu.toml");
            if let Some(config) = Self::load_from_file(&project_path) {
                return Some(config);
            }
        }

        None
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge another config into this one.
    /// Only overrides fields that are Some in the other config.
    fn merge(&mut self, other: Self) {
        if other.variant.is_some() {
            self.variant = other.variant;
        }
        if other.stack_top.is_some() {
            self.stack_top = other.stack_top;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(variant) = std::env::var("ARM11_EMU_VARIANT") {
            log::info!("Using ARM11_EMU_VARIANT from environment: {}", variant);
            self.variant = Some(variant);
        }
        if let Ok(value) = std::env::var("ARM11_EMU_STACK_TOP") {
            match parse_u32(&value) {
                Some(addr) => {
                    log::info!(
                        "Using ARM11_EMU_STACK_TOP from environment: 0x{:08X}",
                        addr
                    );
                    self.stack_top = Some(addr);
                }
                None => {
                    log::warn!("Ignoring unparsable ARM11_EMU_STACK_TOP: {}", value);
                }
            }
        }
    }

    /// Get the path to the user config file (for display/creation).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("arm11-emu").join("config.toml"))
    }

    /// Generate a sample config file content.
    pub fn sample_config() -> String {
        r#"# arm11-emu configuration
# Place this file at ~/.config/arm11-emu/config.toml or ./arm11-emu.toml

# Processor variant to model (currently only "arm11")
variant = "arm11"

# Initial stack pointer for cores built via from_config (optional)
# stack_top = 268435456
"#
        .to_string()
    }
}

/// Parse a u32 from a decimal or 0x-prefixed hex string.
fn parse_u32(s: &str) -> Option<u32> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}
