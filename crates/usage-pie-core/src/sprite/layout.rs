//! Sprite sheet layout and the stylesheet that indexes into it.

use std::fmt::Write as _;
use std::path::Path;

use crate::render::render_svg;

/// Percentage distance between adjacent icons
pub const DEFAULT_STEP: u32 = 5;

/// One rendered icon in the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteIcon {
    /// Percentage the icon was rendered for
    pub percentage: u32,
    /// SVG markup
    pub svg: String,
}

impl SpriteIcon {
    /// CSS class selecting this icon (e.g. `p40`)
    pub fn class_name(&self) -> String {
        class_name(self.percentage)
    }
}

/// Class name for a sprite percentage
pub fn class_name(percentage: u32) -> String {
    format!("p{percentage}")
}

/// Percentages covered by the sheet: `0, step, 2*step, ...` and always 100.
///
/// A zero step is treated as 1.
pub fn sprite_steps(step: u32) -> Vec<u32> {
    let step = step.max(1);
    let mut steps: Vec<u32> = (0..=100).step_by(step as usize).collect();
    if steps.last() != Some(&100) {
        steps.push(100);
    }
    steps
}

/// Snap a usage percentage to the icon that represents it.
///
/// Rounds to the nearest multiple of `step` (ties to even) and clamps to
/// `0..=100`. Anything at or above 100 selects the full icon even when 100
/// is not a multiple of `step`.
pub fn sprite_percentage(pct: f64, step: u32) -> u32 {
    if pct >= 100.0 {
        return 100;
    }
    let step = f64::from(step.max(1));
    let snapped = (pct / step).round_ties_even() * step;
    // f64::max maps NaN to 0.0
    snapped.max(0.0).min(100.0) as u32
}

/// The full set of icons plus their geometry
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Edge length of each square icon in pixels
    pub icon_size: u32,
    /// Icons in ascending percentage order
    pub icons: Vec<SpriteIcon>,
}

impl SpriteSheet {
    /// Render all icons for `step` at `icon_size`
    pub fn new(step: u32, icon_size: u32) -> Self {
        let icons = sprite_steps(step)
            .into_iter()
            .map(|percentage| SpriteIcon {
                percentage,
                svg: render_svg(f64::from(percentage), icon_size),
            })
            .collect();
        Self { icon_size, icons }
    }

    /// Sheet width in pixels, saturating at `u32::MAX`
    pub fn width(&self) -> u32 {
        u32::try_from(self.icons.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.icon_size)
    }

    /// Sheet height in pixels
    pub fn height(&self) -> u32 {
        self.icon_size
    }

    /// Horizontal background offset of the icon at `index`
    pub fn offset(&self, index: usize) -> i64 {
        -(index as i64 * i64::from(self.icon_size))
    }

    /// Stylesheet rules for `selector`, referencing the sheet at `image`.
    ///
    /// ```text
    /// #custom-claude {
    ///     background-image: url("/path/sprites.png");
    ///     ...
    /// }
    ///
    /// #custom-claude.p0 { background-position: 0px 0; }
    /// #custom-claude.p5 { background-position: -16px 0; }
    /// ```
    pub fn css(&self, selector: &str, image: &Path) -> String {
        let size = self.icon_size;
        let mut css = String::new();
        let _ = writeln!(css, "{selector} {{");
        let _ = writeln!(css, "    background-image: url(\"{}\");", image.display());
        let _ = writeln!(css, "    background-repeat: no-repeat;");
        let _ = writeln!(css, "    background-size: {}px {size}px;", self.width());
        let _ = writeln!(css, "    min-width: {}px;", size.saturating_add(4));
        let _ = writeln!(css, "    min-height: {size}px;");
        let _ = writeln!(css, "}}");
        css.push('\n');
        for (index, icon) in self.icons.iter().enumerate() {
            let _ = writeln!(
                css,
                "{selector}.{} {{ background-position: {}px 0; }}",
                icon.class_name(),
                self.offset(index)
            );
        }
        css
    }
}
