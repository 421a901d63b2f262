use circuit_svg_core::element::TextAnchor;
use circuit_svg_core::geom::{self, Point};
use unicode_width::UnicodeWidthStr;

/// Font parameters used when estimating label extents. Sizes are in the caller's unit system
/// (real-world units for bounds, pixels for layout on screen).
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 0.18,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub line_count: usize,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Width is `display columns * font_size * char_width_factor`, so output never depends on
/// installed fonts. Zero factors fall back to 0.6 and 1.2.
#[derive(Debug, Clone, Default)]
pub struct DeterministicTextMeasurer {
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl DeterministicTextMeasurer {
    pub fn normalized_text_lines(text: &str) -> Vec<&str> {
        text.split('\n').map(|l| l.trim_end_matches('\r')).collect()
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let char_width_factor = if self.char_width_factor == 0.0 {
            0.6
        } else {
            self.char_width_factor
        };
        let line_height_factor = if self.line_height_factor == 0.0 {
            1.2
        } else {
            self.line_height_factor
        };

        let lines = Self::normalized_text_lines(text);
        let font_size = if style.font_size.is_finite() {
            style.font_size.max(0.0)
        } else {
            0.0
        };
        let max_cols = lines.iter().map(|l| l.width()).max().unwrap_or(0);

        TextMetrics {
            width: max_cols as f64 * font_size * char_width_factor,
            height: lines.len() as f64 * font_size * line_height_factor,
            line_count: lines.len(),
        }
    }
}

/// Real-world corners (Y up) of `text` drawn at `at`, aligned the way `<text>` nodes align for
/// `anchor`, then rotated counter-clockwise about `at`.
pub fn anchored_text_box(
    measurer: &dyn TextMeasurer,
    text: &str,
    font_size: f64,
    at: Point,
    anchor: TextAnchor,
    ccw_degrees: f64,
) -> [Point; 4] {
    let metrics = measurer.measure(text, &TextStyle::sized(font_size));
    let (w, h) = (metrics.width, metrics.height.max(font_size));

    let ox = match anchor {
        TextAnchor::Left | TextAnchor::TopLeft | TextAnchor::BottomLeft => 0.0,
        TextAnchor::Right | TextAnchor::TopRight | TextAnchor::BottomRight => -w,
        TextAnchor::Center | TextAnchor::Top | TextAnchor::Bottom => -w / 2.0,
    };
    let oy = match anchor {
        TextAnchor::Top | TextAnchor::TopLeft | TextAnchor::TopRight => -h,
        TextAnchor::Bottom | TextAnchor::BottomLeft | TextAnchor::BottomRight => 0.0,
        TextAnchor::Center | TextAnchor::Left | TextAnchor::Right => -h / 2.0,
    };

    [(ox, oy), (ox + w, oy), (ox + w, oy + h), (ox, oy + h)]
        .map(|(x, y)| geom::rotate_about(geom::point(at.x + x, at.y + y), at, ccw_degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_measurer_scales_with_font_size() {
        let m = DeterministicTextMeasurer::default();
        let a = m.measure("GND", &TextStyle::sized(1.0));
        assert!((a.width - 1.8).abs() < 1e-9);
        assert!((a.height - 1.2).abs() < 1e-9);
        let b = m.measure("GND", &TextStyle::sized(2.0));
        assert!((b.width - 3.6).abs() < 1e-9);
    }

    #[test]
    fn multi_line_uses_widest_line() {
        let m = DeterministicTextMeasurer::default();
        let metrics = m.measure("a\nabcd\r\nab", &TextStyle::sized(1.0));
        assert_eq!(metrics.line_count, 3);
        assert!((metrics.width - 2.4).abs() < 1e-9);
    }

    #[test]
    fn wide_characters_count_double() {
        let m = DeterministicTextMeasurer::default();
        let metrics = m.measure("電源", &TextStyle::sized(1.0));
        assert!((metrics.width - 2.4).abs() < 1e-9);
    }

    #[test]
    fn anchored_box_follows_alignment() {
        let m = DeterministicTextMeasurer::default();
        let at = geom::point(10.0, 0.0);

        // "AB" at size 1: 1.2 wide, 1.2 tall.
        let left = anchored_text_box(&m, "AB", 1.0, at, TextAnchor::Left, 0.0);
        assert!((left[0].x - 10.0).abs() < 1e-9 && (left[1].x - 11.2).abs() < 1e-9);
        assert!((left[0].y + 0.6).abs() < 1e-9 && (left[2].y - 0.6).abs() < 1e-9);

        let top_right = anchored_text_box(&m, "AB", 1.0, at, TextAnchor::TopRight, 0.0);
        assert!((top_right[0].x - 8.8).abs() < 1e-9 && (top_right[1].x - 10.0).abs() < 1e-9);
        assert!((top_right[0].y + 1.2).abs() < 1e-9 && top_right[2].y.abs() < 1e-9);
    }

    #[test]
    fn anchored_box_rotates_about_the_anchor() {
        let m = DeterministicTextMeasurer::default();
        let origin = geom::point(0.0, 0.0);
        let b = anchored_text_box(&m, "AB", 1.0, origin, TextAnchor::BottomLeft, 90.0);
        // The far bottom corner swings from (1.2, 0) up to (0, 1.2).
        assert!(b[1].x.abs() < 1e-9 && (b[1].y - 1.2).abs() < 1e-9);
    }
}
