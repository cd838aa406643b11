//! Pie-chart SVG rendering.
//!
//! The icon is a circle inscribed in a `size`x`size` square with a 1px
//! margin. Partial usage is drawn as a wedge starting at 12 o'clock and
//! sweeping clockwise.

use std::f64::consts::TAU;
use std::fmt::Write as _;

use super::tier::{classify, ColorTier, BG_COLOR, STROKE_COLOR};

/// Icon edge length used for the sprite sheet and stylesheet
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// Digits kept after the decimal point in emitted coordinates
const PRECISION: usize = 3;

/// Render the icon for `pct` as SVG markup.
///
/// Output is byte-identical for identical input.
pub fn render_svg(pct: f64, size: u32) -> String {
    let half = f64::from(size) / 2.0;
    let (cx, cy) = (half, half);
    let r = (half - 1.0).max(0.0);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">"#
    );

    if pct >= 100.0 {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(cx),
            num(cy),
            num(r),
            ColorTier::Red.color()
        );
    } else if pct <= 0.0 || pct.is_nan() {
        // Zero usage is always an empty green ring, independent of the tier table.
        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
            num(cx),
            num(cy),
            num(r),
            ColorTier::Green.color()
        );
    } else {
        let angle = pct / 100.0 * TAU;
        let (start_x, start_y) = (cx, cy - r);
        let end_x = cx + r * angle.sin();
        let end_y = cy - r * angle.cos();
        let large_arc = u8::from(pct > 50.0);

        let _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{BG_COLOR}" stroke="{STROKE_COLOR}" stroke-width="0.5"/>"#,
            num(cx),
            num(cy),
            num(r)
        );
        let _ = writeln!(
            svg,
            r#"  <path d="M {},{} L {},{} A {},{} 0 {large_arc},1 {},{} Z" fill="{}"/>"#,
            num(cx),
            num(cy),
            num(start_x),
            num(start_y),
            num(r),
            num(r),
            num(end_x),
            num(end_y),
            classify(pct).color()
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Fixed-precision number formatting with trailing zeros trimmed.
fn num(value: f64) -> String {
    let mut s = format!("{:.*}", PRECISION, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Extract the large-arc flag from a wedge path (`A r,r 0 <flag>,1 ...`)
    fn large_arc_flag(svg: &str) -> Option<char> {
        let idx = svg.find(" A ")?;
        let rest = &svg[idx + 3..];
        let mut parts = rest.split_whitespace();
        parts.next()?; // radii
        parts.next()?; // rotation
        parts.next()?.chars().next()
    }

    #[test]
    fn test_render_empty_ring() {
        let expected = "<svg width=\"16\" height=\"16\" viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\">\n  <circle cx=\"8\" cy=\"8\" r=\"7\" fill=\"none\" stroke=\"#77dd77\" stroke-width=\"1\"/>\n</svg>";
        assert_eq!(render_svg(0.0, 16), expected);
    }

    #[test]
    fn test_render_full_circle() {
        let expected = "<svg width=\"16\" height=\"16\" viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\">\n  <circle cx=\"8\" cy=\"8\" r=\"7\" fill=\"#ff6961\"/>\n</svg>";
        assert_eq!(render_svg(100.0, 16), expected);
    }

    #[test]
    fn test_render_quarter_wedge() {
        let expected = "<svg width=\"16\" height=\"16\" viewBox=\"0 0 16 16\" xmlns=\"http://www.w3.org/2000/svg\">\n  <circle cx=\"8\" cy=\"8\" r=\"7\" fill=\"#444\" stroke=\"#666\" stroke-width=\"0.5\"/>\n  <path d=\"M 8,8 L 8,1 A 7,7 0 0,1 15,8 Z\" fill=\"#77dd77\"/>\n</svg>";
        assert_eq!(render_svg(25.0, 16), expected);
    }

    #[test]
    fn test_render_half_uses_minor_arc() {
        let svg = render_svg(50.0, 16);
        assert!(svg.contains("A 7,7 0 0,1 8,15 Z"));
        assert!(svg.contains(ColorTier::Yellow.color()));
    }

    #[test]
    fn test_negative_matches_zero() {
        assert_eq!(render_svg(-5.0, 16), render_svg(0.0, 16));
        assert_eq!(render_svg(-0.001, 32), render_svg(0.0, 32));
    }

    #[test]
    fn test_overflow_matches_full() {
        assert_eq!(render_svg(150.0, 16), render_svg(100.0, 16));
        assert_eq!(render_svg(f64::INFINITY, 24), render_svg(100.0, 24));
    }

    #[test]
    fn test_large_arc_flag() {
        for i in 1..1000 {
            let pct = f64::from(i) / 10.0;
            let svg = render_svg(pct, 16);
            let flag = large_arc_flag(&svg).expect("partial icon has a wedge");
            let expected = if pct > 50.0 { '1' } else { '0' };
            assert_eq!(flag, expected, "wrong large-arc flag at {pct}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for pct in [0.1, 33.3, 66.6, 87.5, 99.9] {
            assert_eq!(render_svg(pct, 16), render_svg(pct, 16));
        }
    }

    #[test]
    fn test_wedge_color_follows_tier() {
        assert!(render_svg(60.0, 16).contains(ColorTier::Yellow.color()));
        assert!(render_svg(90.0, 16).contains(ColorTier::Orange.color()));
        assert!(render_svg(10.0, 16).contains(ColorTier::Green.color()));
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(8.0), "8");
        assert_eq!(num(7.5), "7.5");
        assert_eq!(num(1.23456), "1.235");
        assert_eq!(num(-0.0001), "0");
    }
}
