use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use usage_pie_core::render::DEFAULT_ICON_SIZE;
use usage_pie_core::sprite::DEFAULT_STEP;
use usage_pie_core::usage::USAGE_API_URL;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Claude usage pie chart for Waybar")]
#[command(group(ArgGroup::new("mode").args(["generate_sprites", "generate_css"])))]
pub struct Config {
    /// Enable debug logging (stderr)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the Claude credentials file
    #[arg(long)]
    pub credentials: Option<PathBuf>,

    /// Generate the sprite sheet PNG
    #[arg(long)]
    pub generate_sprites: bool,

    /// Print CSS rules for the sprite sheet
    #[arg(long)]
    pub generate_css: bool,
}

/// What a single invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Fetch usage and print one JSON record
    Status,
    /// Render and write the sprite sheet
    GenerateSprites,
    /// Print the sprite stylesheet
    GenerateCss,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Selected run mode
    pub fn mode(&self) -> Mode {
        if self.generate_sprites {
            Mode::GenerateSprites
        } else if self.generate_css {
            Mode::GenerateCss
        } else {
            Mode::Status
        }
    }
}

/// Application settings (from config file)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Claude Code OAuth credentials file
    #[serde(default = "default_credentials_path")]
    pub credentials_path: PathBuf,

    /// Usage endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sprite sheet settings
    #[serde(default)]
    pub sprite: SpriteSettings,
}

fn default_credentials_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".claude")
        .join(".credentials.json")
}

fn default_api_url() -> String {
    USAGE_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Sprite sheet settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSettings {
    /// Where the sheet PNG is written and where the CSS points
    #[serde(default = "default_sprite_path")]
    pub path: PathBuf,

    /// Edge length of one icon in pixels
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,

    /// Percentage distance between icons
    #[serde(default = "default_step")]
    pub step: u32,

    /// Waybar module selector used in the generated CSS
    #[serde(default = "default_css_selector")]
    pub css_selector: String,
}

fn default_sprite_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("usage-pie")
        .join("sprites.png")
}

fn default_icon_size() -> u32 {
    DEFAULT_ICON_SIZE
}

fn default_step() -> u32 {
    DEFAULT_STEP
}

fn default_css_selector() -> String {
    "#custom-claude".to_string()
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            path: default_sprite_path(),
            icon_size: default_icon_size(),
            step: default_step(),
            css_selector: default_css_selector(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            sprite: SpriteSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // Try custom path first
        if let Some(p) = path {
            return Self::read_file(p);
        }

        // Try default config locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("usage-pie/config.toml")),
            dirs::home_dir().map(|p| p.join(".config/usage-pie/config.toml")),
            dirs::home_dir().map(|p| p.join(".usage-pie.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read_file(path);
            }
        }

        // Return defaults if no config file found
        Ok(Self::default())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Merge CLI config into settings (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: &Config) {
        if let Some(credentials) = &cli.credentials {
            self.credentials_path = credentials.clone();
        }
    }

    /// Validate and normalize settings values
    ///
    /// Expands a leading `~/` in paths and clamps numeric values into
    /// ranges the renderer and the HTTP client accept.
    pub fn validate(&mut self) {
        const MIN_ICON_SIZE: u32 = 2;
        const MAX_ICON_SIZE: u32 = 1024;
        const MIN_TIMEOUT_SECS: u64 = 1;

        self.credentials_path = expand_tilde(&self.credentials_path);
        self.sprite.path = expand_tilde(&self.sprite.path);

        self.sprite.step = self.sprite.step.clamp(1, 100);
        self.sprite.icon_size = self.sprite.icon_size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE);
        if self.timeout_secs < MIN_TIMEOUT_SECS {
            self.timeout_secs = MIN_TIMEOUT_SECS;
        }
    }
}

/// Replace a leading `~` component with the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
