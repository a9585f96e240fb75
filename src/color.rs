use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting from `start_hue` degrees.
pub fn generate_palette(n: usize, start_hue: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (start_hue + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Chart series colours
// ---------------------------------------------------------------------------

/// One colour per chart element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    /// Measured points and the line joining them.
    pub data: Color32,
    /// Least-count error bars.
    pub error_bars: Color32,
    /// Vertical marker at the Brewster angle.
    pub brewster_marker: Color32,
}

impl Default for SeriesColors {
    fn default() -> Self {
        // Blue data, with the other two spread around the wheel from it.
        let palette = generate_palette(3, 220.0);
        Self {
            data: palette[0],
            error_bars: palette[1],
            brewster_marker: palette[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_and_distinctness() {
        assert!(generate_palette(0, 0.0).is_empty());
        let p = generate_palette(5, 0.0);
        assert_eq!(p.len(), 5);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_series_colours_differ() {
        let c = SeriesColors::default();
        assert_ne!(c.data, c.error_bars);
        assert_ne!(c.data, c.brewster_marker);
        assert_ne!(c.error_bars, c.brewster_marker);
        // hue 220° is a blue
        assert!(c.data.b() > c.data.r() && c.data.b() > c.data.g());
    }
}
