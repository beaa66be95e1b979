use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::data::model::TitleType;

// ---------------------------------------------------------------------------
// Dashboard palette
// ---------------------------------------------------------------------------

pub const PRIMARY_RED: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
pub const RED1: Color32 = Color32::from_rgb(0xae, 0x12, 0x3a);
pub const RED2: Color32 = Color32::from_rgb(0xfb, 0x99, 0x84);
pub const DARK_RED: Color32 = Color32::from_rgb(0x8b, 0x00, 0x00);
pub const MAP_BACKGROUND: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);

/// Fixed colour of a title type, shared by every chart.
pub fn type_color(kind: TitleType) -> Color32 {
    match kind {
        TitleType::Movie => RED1,
        TitleType::TvShow => RED2,
    }
}

// ---------------------------------------------------------------------------
// Continuous colour scale: value → Color32
// ---------------------------------------------------------------------------

/// Two-stop colour scale, interpolated in linear sRGB.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    low: LinSrgb,
    high: LinSrgb,
}

impl ColorScale {
    pub fn new(low: Color32, high: Color32) -> Self {
        Self {
            low: to_linear(low),
            high: to_linear(high),
        }
    }

    /// Scale used for country counts.
    pub fn countries() -> Self {
        Self::new(DARK_RED, RED2)
    }

    /// Colour at position `t`, clamped to `[0, 1]`.
    pub fn at(&self, t: f32) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        from_linear(self.low.mix(self.high, t))
    }

    /// Colour for `value` within `[min, max]`. A degenerate range maps to the
    /// high end.
    pub fn for_value(&self, value: f64, min: f64, max: f64) -> Color32 {
        let range = max - min;
        if range.abs() < f64::EPSILON {
            return self.at(1.0);
        }
        self.at(((value - min) / range) as f32)
    }
}

fn to_linear(c: Color32) -> LinSrgb {
    Srgb::new(
        c.r() as f32 / 255.0,
        c.g() as f32 / 255.0,
        c.b() as f32 / 255.0,
    )
    .into_linear()
}

fn from_linear(c: LinSrgb) -> Color32 {
    let rgb: Srgb<u8> = Srgb::<f32>::from_linear(c).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}
