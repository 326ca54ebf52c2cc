use crate::geometry::DialGeometry;
use std::f64::consts::PI;

/// Pixel box of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBounds {
    pub width: i32,
    pub height: i32,
}

/// Measures strings in the face font.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> GlyphBounds;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumeralGlyph {
    pub number: u8,
    pub text: String,
    pub bounds: GlyphBounds,
    pub angle: f64,
    /// Left edge of the text.
    pub x: f64,
    /// Baseline of the text.
    pub y: f64,
}

/// Places "1" through "12" on the dial radius, each centered on its hour
/// position. Three o'clock is angle 0.
pub fn numeral_positions(
    geometry: &DialGeometry,
    measurer: &impl TextMeasurer,
    font_size: f32,
) -> Vec<NumeralGlyph> {
    let radius = geometry.dial_radius as f64;
    (1..=12u8)
        .map(|number| {
            let text = number.to_string();
            let bounds = measurer.measure(&text, font_size);
            let angle = PI / 6.0 * (number as f64 - 3.0);
            let (ideal_x, ideal_y) = geometry.polar(angle, radius);
            NumeralGlyph {
                number,
                x: ideal_x - (bounds.width / 2) as f64,
                y: ideal_y + (bounds.height / 2) as f64,
                text,
                bounds,
                angle,
            }
        })
        .collect()
}
