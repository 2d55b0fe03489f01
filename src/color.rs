use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
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
// Color mapping: local authority → Color32
// ---------------------------------------------------------------------------

/// Maps each local authority to a stable marker colour. Rebuilt whenever a
/// new dataset is loaded, from its sorted distinct authorities.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the given local authorities.
    pub fn new(local_authorities: &[String]) -> Self {
        let palette = generate_palette(local_authorities.len());
        let mapping: BTreeMap<String, Color32> = local_authorities
            .iter()
            .cloned()
            .zip(palette)
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a local authority.
    pub fn color_for(&self, local_authority: &str) -> Color32 {
        self.mapping
            .get(local_authority)
            .copied()
            .unwrap_or(self.default_color)
    }
}
