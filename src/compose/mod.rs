//! ImageMagick-backed sprite sheet composition.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::debug;

use usage_pie_core::sprite::{SheetComposer, SpriteIcon};
use usage_pie_core::RenderError;

/// Binaries tried in order: ImageMagick 7, then the legacy 6.x name
const DEFAULT_PROGRAMS: [&str; 2] = ["magick", "convert"];

/// Composes icons with `<program> -background none <svgs...> +append <out>`
pub struct MagickComposer {
    programs: Vec<String>,
}

impl MagickComposer {
    /// Composer trying `programs` in order until one can be spawned
    pub fn with_programs<I, S>(programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            programs: programs.into_iter().map(Into::into).collect(),
        }
    }

    fn run(&self, inputs: &[PathBuf], output: &Path) -> Result<(), RenderError> {
        for program in &self.programs {
            let result = Command::new(program)
                .args(["-background", "none"])
                .args(inputs)
                .arg("+append")
                .arg(output)
                .output();

            match result {
                Ok(out) if out.status.success() => {
                    debug!("{} composed {} icons", program, inputs.len());
                    return Ok(());
                }
                Ok(out) => {
                    return Err(RenderError::RasterizerFailed {
                        program: program.clone(),
                        status: out.status.to_string(),
                        stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("{} not found, trying next rasterizer", program);
                }
                Err(e) => return Err(RenderError::Io(e)),
            }
        }
        Err(RenderError::RasterizerMissing {
            tried: self.programs.clone(),
        })
    }
}

impl Default for MagickComposer {
    fn default() -> Self {
        Self::with_programs(DEFAULT_PROGRAMS)
    }
}

impl SheetComposer for MagickComposer {
    fn compose(&self, icons: &[SpriteIcon], output: &Path) -> Result<(), RenderError> {
        let scratch = tempfile::tempdir()?;
        let mut inputs = Vec::with_capacity(icons.len());
        for (i, icon) in icons.iter().enumerate() {
            let path = scratch.path().join(format!("icon_{i:02}.svg"));
            fs::write(&path, &icon.svg)?;
            inputs.push(path);
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        self.run(&inputs, output)
    }
}

/// Check that the written sheet has the layout the stylesheet assumes
pub fn verify_dimensions(path: &Path, width: u32, height: u32) -> Result<()> {
    let (actual_width, actual_height) = image::image_dimensions(path)
        .with_context(|| format!("Failed to read sprite sheet: {:?}", path))?;
    if (actual_width, actual_height) != (width, height) {
        return Err(RenderError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width,
            actual_height,
        }
        .into());
    }
    Ok(())
}
