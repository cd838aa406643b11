//! Run modes wired to settings.

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use usage_pie_core::sprite::{build_sprite_sheet, SheetComposer, SpriteSheet};
use usage_pie_core::status::{self, StatusRecord};
use usage_pie_core::usage::{HttpUsageClient, UsageClient};

use crate::compose::verify_dimensions;
use crate::config::{Config, Settings};

/// Load the config file, apply CLI overrides and normalize
pub fn load_settings(cli: &Config) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_ref())?;
    settings.merge_cli(cli);
    settings.validate();
    Ok(settings)
}

/// Status mode end to end. A settings failure still yields a record.
pub fn status_or_degraded(cli: &Config) -> StatusRecord {
    match App::from_cli(cli) {
        Ok(app) => app.status(&app.http_client()),
        Err(e) => {
            warn!("Falling back to degraded output: {:#}", e);
            StatusRecord::degraded(&format!("{e:#}"))
        }
    }
}

/// One invocation of the tool
pub struct App {
    settings: Settings,
}

impl App {
    /// Create an app from validated settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Create an app from the settings `cli` points at
    pub fn from_cli(cli: &Config) -> Result<Self> {
        load_settings(cli).map(Self::new)
    }

    /// HTTP client configured from settings
    pub fn http_client(&self) -> HttpUsageClient {
        HttpUsageClient::new(
            self.settings.api_url.clone(),
            Duration::from_secs(self.settings.timeout_secs),
        )
    }

    /// Fetch usage through `client` and build the record. Never fails.
    pub fn status(&self, client: &dyn UsageClient) -> StatusRecord {
        status::emit(
            &self.settings.credentials_path,
            client,
            self.settings.sprite.step,
        )
    }

    /// Render and write the sprite sheet, returning a human-readable summary
    pub fn generate_sprites(&self, composer: &dyn SheetComposer) -> Result<String> {
        let sprite = &self.settings.sprite;
        let sheet = build_sprite_sheet(sprite.step, sprite.icon_size, composer, &sprite.path)?;
        verify_dimensions(&sprite.path, sheet.width(), sheet.height())?;
        info!("Verified sprite sheet {}", sprite.path.display());

        Ok(format!(
            "Generated sprite sheet: {}\n  {} icons at {}x{}px each\n  Total size: {}x{}px\n",
            sprite.path.display(),
            sheet.icons.len(),
            sheet.icon_size,
            sheet.icon_size,
            sheet.width(),
            sheet.height()
        ))
    }

    /// Stylesheet rules for the configured sheet
    pub fn css(&self) -> String {
        let sprite = &self.settings.sprite;
        SpriteSheet::new(sprite.step, sprite.icon_size).css(&sprite.css_selector, &sprite.path)
    }
}
