use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Diverging colormap for correlation values
// ---------------------------------------------------------------------------

const BLUE: LinSrgb = LinSrgb::new(0.016, 0.120, 0.500);
const WHITE: LinSrgb = LinSrgb::new(0.930, 0.930, 0.930);
const RED: LinSrgb = LinSrgb::new(0.550, 0.030, 0.060);

/// Map a correlation coefficient in [-1, 1] to a blue–white–red gradient.
/// NaN (undefined correlation) renders gray.
pub fn diverging(r: f64) -> Color32 {
    if !r.is_finite() {
        return Color32::GRAY;
    }
    let t = r.clamp(-1.0, 1.0) as f32;
    let color = if t < 0.0 {
        WHITE.mix(BLUE, -t)
    } else {
        WHITE.mix(RED, t)
    };
    let srgb: Srgb = Srgb::from_linear(color);
    Color32::from_rgb(
        (srgb.red * 255.0) as u8,
        (srgb.green * 255.0) as u8,
        (srgb.blue * 255.0) as u8,
    )
}

/// Annotation color that stays readable on top of [`diverging`] cells.
pub fn annotation_color(r: f64) -> Color32 {
    if r.is_finite() && r.abs() > 0.6 {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_are_saturated_and_center_is_light() {
        let lo = diverging(-1.0);
        let mid = diverging(0.0);
        let hi = diverging(1.0);

        assert!(lo.b() > lo.r());
        assert!(hi.r() > hi.b());
        assert!(mid.r() > 200 && mid.g() > 200 && mid.b() > 200);
    }

    #[test]
    fn nan_renders_gray() {
        assert_eq!(diverging(f64::NAN), Color32::GRAY);
    }

    #[test]
    fn strong_correlations_get_white_annotations() {
        assert_eq!(annotation_color(0.9), Color32::WHITE);
        assert_eq!(annotation_color(0.2), Color32::BLACK);
        assert_eq!(annotation_color(f64::NAN), Color32::BLACK);
    }
}
