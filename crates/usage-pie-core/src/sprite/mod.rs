//! Sprite sheet generation.
//!
//! The sheet is a horizontal strip of pre-rendered icons, one per
//! percentage step, plus stylesheet rules that select an icon by class.
//! Rasterization is delegated to a [`SheetComposer`] so that layout and CSS
//! can be exercised without an image toolchain.

pub mod layout;

use std::path::Path;

use tracing::info;

use crate::error::RenderError;

pub use layout::{class_name, sprite_percentage, sprite_steps, SpriteIcon, SpriteSheet, DEFAULT_STEP};

/// Turns rendered SVG icons into a single raster sheet on disk.
pub trait SheetComposer {
    /// Concatenate `icons` left to right, on a transparent background, into
    /// an image at `output`.
    fn compose(&self, icons: &[SpriteIcon], output: &Path) -> Result<(), RenderError>;
}

/// Render every step and hand the icons to `composer`.
///
/// This is always a full rebuild; any existing file at `output` is replaced.
pub fn build_sprite_sheet(
    step: u32,
    icon_size: u32,
    composer: &dyn SheetComposer,
    output: &Path,
) -> Result<SpriteSheet, RenderError> {
    let sheet = SpriteSheet::new(step, icon_size);
    composer.compose(&sheet.icons, output)?;
    info!(
        "Sprite sheet written to {} ({} icons, {}x{}px)",
        output.display(),
        sheet.icons.len(),
        sheet.width(),
        sheet.height()
    );
    Ok(sheet)
}
