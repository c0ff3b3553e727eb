//! Configuration file management
//!
//! Loads TOML configuration files and provides FreeType settings.
//! Default config path: ~/.config/ftinit/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_PROBE_TEXT};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// FreeType library settings
    pub freetype: FreetypeConfig,
    /// Font probe settings
    pub probe: ProbeConfig,
}

/// FreeType library settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreetypeConfig {
    /// Request subpixel (LCD) rendering
    /// Falls back to grayscale when FreeType was built without it
    pub subpixel_rendering: bool,
    /// LCD filter: "none" | "default" | "light" | "legacy" | "custom"
    pub lcd_filter: String,
    /// LCD custom weights (5-tap FIR filter)
    /// Only used when lcd_filter = "custom"
    /// Example: [0x10, 0x40, 0x60, 0x40, 0x10]
    pub lcd_weights: Option<[u8; 5]>,
    /// LCD subpixel order: "rgb" | "bgr" | "vrgb" | "vbgr"
    pub lcd_subpixel: String,
    /// Hinting mode: "normal" | "light" | "none"
    pub hinting: String,
}

/// Font probe settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Font family name or file path (monospace fallback if empty)
    pub font: String,
    /// Pixel size
    pub size: u32,
    /// Characters to rasterize
    pub text: String,
}

impl Default for FreetypeConfig {
    fn default() -> Self {
        Self {
            subpixel_rendering: cfg!(feature = "subpixel"),
            lcd_filter: "light".to_string(),
            lcd_weights: None,
            lcd_subpixel: "rgb".to_string(),
            hinting: "light".to_string(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            font: String::new(),
            size: DEFAULT_FONT_SIZE,
            text: DEFAULT_PROBE_TEXT.to_string(),
        }
    }
}

impl Config {
    /// System-wide config path
    const SYSTEM_CONFIG_PATH: &'static str = "/etc/ftinit/config.toml";

    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. FTINIT_CONFIG environment variable
        if let Ok(path) = std::env::var("FTINIT_CONFIG") {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 2. User config: ~/.config/ftinit/config.toml
        if let Some(path) = default_config_path() {
            if path.exists() {
                return Some(path);
            }
        }

        // 3. System config
        let system_config = Path::new(Self::SYSTEM_CONFIG_PATH);
        if system_config.exists() {
            return Some(system_config.to_path_buf());
        }

        None
    }

    /// Load configuration with priority:
    /// 1. FTINIT_CONFIG environment variable
    /// 2. ~/.config/ftinit/config.toml (user config)
    /// 3. /etc/ftinit/config.toml (system config)
    /// 4. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {:#}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Commented config template
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# ftinit configuration
# Path: ~/.config/ftinit/config.toml (override with FTINIT_CONFIG)

[freetype]
# Request subpixel (LCD) rendering. If the FreeType library was built
# without it, ftinit logs a warning and renders grayscale.
subpixel_rendering = {subpixel}

# LCD filter: "none" | "default" | "light" | "legacy" | "custom"
lcd_filter = "{filter}"

# Custom 5-tap filter weights (only with lcd_filter = "custom")
# lcd_weights = [0x10, 0x40, 0x60, 0x40, 0x10]

# Panel subpixel order: "rgb" | "bgr" | "vrgb" | "vbgr"
lcd_subpixel = "{subpixel_order}"

# Hinting: "normal" | "light" | "none"
hinting = "{hinting}"

[probe]
# Font family or file path (empty = first monospace font found)
font = ""
size = {size}
text = "{text}"
"#,
            subpixel = defaults.freetype.subpixel_rendering,
            filter = defaults.freetype.lcd_filter,
            subpixel_order = defaults.freetype.lcd_subpixel,
            hinting = defaults.freetype.hinting,
            size = defaults.probe.size,
            text = defaults.probe.text,
        )
    }

    /// Write the template to the user config path
    pub fn write_default_config() -> Result<PathBuf> {
        let config_path = default_config_path()
            .ok_or_else(|| anyhow::anyhow!("Config directory not found"))?;
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        std::fs::write(&config_path, Self::template())
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        Ok(config_path)
    }
}

/// Get default config file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ftinit").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.freetype.subpixel_rendering, cfg!(feature = "subpixel"));
        assert_eq!(cfg.freetype.lcd_filter, "light");
        assert_eq!(cfg.freetype.lcd_weights, None);
        assert_eq!(cfg.probe.size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = Config::from_toml(
            r#"
[freetype]
lcd_filter = "custom"
lcd_weights = [16, 64, 96, 64, 16]
"#,
        )
        .unwrap();
        assert_eq!(cfg.freetype.lcd_filter, "custom");
        assert_eq!(cfg.freetype.lcd_weights, Some([16, 64, 96, 64, 16]));
        assert_eq!(cfg.freetype.hinting, "light");
        assert_eq!(cfg.probe, ProbeConfig::default());
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let cfg = Config::from_toml(&Config::template()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("[freetype]\nsubpixel_rendering = \"yes\"").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from_file(Path::new("/nonexistent/ftinit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
