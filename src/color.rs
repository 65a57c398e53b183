use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::BrandCount;

// ---------------------------------------------------------------------------
// Bar colours: one per charted brand
// ---------------------------------------------------------------------------

/// Listings whose title had no first word.
const NO_BRAND: Color32 = Color32::GRAY;

/// Degrees between consecutive hues; neighbouring bars never share a hue band.
const GOLDEN_ANGLE: f32 = 137.508;

/// Colour for each entry of `counts`, in the same order.
///
/// Hues advance by the golden angle so adjacent bars contrast however many
/// brands are charted; lightness alternates to separate bars whose hues land
/// close after wrapping. The empty brand is always gray.
pub fn brand_colors(counts: &[BrandCount]) -> Vec<Color32> {
    let mut rank = 0;
    counts
        .iter()
        .map(|bc| {
            if bc.brand.is_empty() {
                return NO_BRAND;
            }
            let color = rank_color(rank);
            rank += 1;
            color
        })
        .collect()
}

fn rank_color(rank: usize) -> Color32 {
    let hue = (rank as f32 * GOLDEN_ANGLE) % 360.0;
    let lightness = if rank % 2 == 0 { 0.50 } else { 0.62 };
    let rgb: Srgb = Hsl::new(hue, 0.65, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
