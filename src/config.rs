//! Configuration management for BillyPad.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML settings file (`width`, `height`, `icon`)
//!
//! Precedence is built-in defaults, then the settings file, then the CLI.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default window width
pub const DEFAULT_WIDTH: u32 = 500;

/// Default window height
pub const DEFAULT_HEIGHT: u32 = 700;

/// Command-line arguments for BillyPad
#[derive(Debug, Default, Parser)]
#[command(name = "billypad")]
#[command(about = "A small plain-text editor")]
#[command(version)]
pub struct Args {
    /// Window width
    #[arg(long, help = "Window width in pixels")]
    pub width: Option<u32>,

    /// Window height
    #[arg(long, help = "Window height in pixels")]
    pub height: Option<u32>,

    /// Settings file to read instead of the default location
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Raw contents of the settings file. Width and height stay untyped so a bad
/// value only costs that key.
#[derive(Debug, Default, Deserialize)]
pub struct SettingsFile {
    pub width: Option<toml::Value>,
    pub height: Option<toml::Value>,
    pub icon: Option<PathBuf>,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings TOML")
    }

    /// Apply valid `width`/`height` entries onto `size`
    pub fn apply_to(&self, size: &mut WindowSize) {
        if let Some(width) = dimension("width", self.width.as_ref()) {
            size.width = width;
        }
        if let Some(height) = dimension("height", self.height.as_ref()) {
            size.height = height;
        }
    }
}

fn dimension(key: &str, value: Option<&toml::Value>) -> Option<u32> {
    let value = value?;
    match value.as_integer().and_then(|v| u32::try_from(v).ok()) {
        Some(v) if v > 0 => Some(v),
        _ => {
            log::warn!("Ignoring invalid window {}: {}", key, value);
            None
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub window: WindowSize,
    /// Window icon, if one was configured
    pub icon: Option<PathBuf>,
    /// Settings file that was read, if any
    pub settings_path: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut window = WindowSize::default();
        let mut icon = None;

        let settings_path = match args.config {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
                Some((path, content))
            }
            None => default_settings_path()
                .and_then(|path| std::fs::read_to_string(&path).ok().map(|c| (path, c))),
        };

        let settings_path = settings_path.map(|(path, content)| {
            match SettingsFile::parse(&content) {
                Ok(settings) => {
                    settings.apply_to(&mut window);
                    icon = settings.icon.map(|p| resolve_relative(&path, p));
                }
                Err(e) => log::warn!("Ignoring settings file {}: {:#}", path.display(), e),
            }
            path
        });

        if let Some(width) = args.width {
            window.width = width;
        }
        if let Some(height) = args.height {
            window.height = height;
        }

        Ok(Config {
            window,
            icon,
            settings_path,
            log_level: args.log_level,
        })
    }
}

/// `<config dir>/billypad/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("billypad").join("config.toml"))
}

/// Relative icon paths are taken relative to the settings file
fn resolve_relative(settings_path: &Path, icon: PathBuf) -> PathBuf {
    if icon.is_absolute() {
        return icon;
    }
    match settings_path.parent() {
        Some(dir) => dir.join(icon),
        None => icon,
    }
}
