// ============================================================================
// SOFTWARE RASTERIZER
// ============================================================================

use crate::config::{Color, INK};
use crate::error::ClockError;
use crate::numerals::{GlyphBounds, TextMeasurer};
use crate::scene::{DrawCommand, Rasterizer};
use log::warn;
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::Path;

pub fn load_font(path: &Path) -> Result<Font<'static>, ClockError> {
    let data = std::fs::read(path).map_err(|source| ClockError::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(data).ok_or_else(|| ClockError::InvalidFont {
        path: path.to_path_buf(),
    })
}

impl TextMeasurer for Font<'_> {
    fn measure(&self, text: &str, font_size: f32) -> GlyphBounds {
        let glyphs: Vec<PositionedGlyph> = self
            .layout(text, Scale::uniform(font_size), point(0.0, 0.0))
            .collect();
        let (min_x, max_x, min_y, max_y) = glyphs
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .fold(
                (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
                |(min_x, max_x, min_y, max_y), bb| {
                    (
                        min_x.min(bb.min.x),
                        max_x.max(bb.max.x),
                        min_y.min(bb.min.y),
                        max_y.max(bb.max.y),
                    )
                },
            );
        GlyphBounds {
            width: if min_x < max_x { max_x - min_x } else { 0 },
            height: if min_y < max_y { max_y - min_y } else { 0 },
        }
    }
}

// ============================================================================
// CANVAS
// ============================================================================

/// RGBA frame buffer that draw commands are rasterized into.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    font: Option<&'a Font<'static>>,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
            font: None,
        }
    }

    /// Font for text commands. Without one, text is skipped.
    pub fn with_font(mut self, font: &'a Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        self.frame.get(idx..idx + 3).map(|px| (px[0], px[1], px[2]))
    }

    fn set_pixel(&mut self, x: i32, y: i32, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let Some(dst) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let (r, g, b) = INK.as_tuple();
        let src = [r as f32, g as f32, b as f32];
        for (channel, s) in dst.iter_mut().zip(src) {
            *channel = (s * alpha + *channel as f32 * (1.0 - alpha)).round() as u8;
        }
        dst[3] = 0xff;
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, stroke_width: f32) {
        let half = stroke_width as f64 / 2.0;
        let reach = (radius + half).ceil() as i32 + 1;
        let (cx_i, cy_i) = (cx.round() as i32, cy.round() as i32);
        for y in cy_i - reach..=cy_i + reach {
            for x in cx_i - reach..=cx_i + reach {
                let dist = (x as f64 - cx).hypot(y as f64 - cy);
                let aa = 1.0 - ((dist - radius).abs() - half).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, aa as f32);
                }
            }
        }
    }

    fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64) {
        let reach = radius.ceil() as i32 + 1;
        let (cx_i, cy_i) = (cx.round() as i32, cy.round() as i32);
        for y in cy_i - reach..=cy_i + reach {
            for x in cx_i - reach..=cx_i + reach {
                let dist = (x as f64 - cx).hypot(y as f64 - cy);
                let aa = 1.0 - (dist - radius).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.set_pixel(x, y, aa as f32);
                }
            }
        }
    }

    fn draw_thick_line_aa(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, thickness: f32) {
        let (x0, y0, x1, y1) = (
            x0.round() as i32,
            y0.round() as i32,
            x1.round() as i32,
            y1.round() as i32,
        );
        let dx = (x1 - x0) as f32;
        let dy = (y1 - y0) as f32;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            self.fill_disc(x0 as f64, y0 as f64, thickness as f64 / 2.0);
            return;
        }
        let min_x = x0.min(x1) - thickness.ceil() as i32 - 1;
        let max_x = x0.max(x1) + thickness.ceil() as i32 + 1;
        let min_y = y0.min(y1) - thickness.ceil() as i32 - 1;
        let max_y = y0.max(y1) + thickness.ceil() as i32 + 1;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = (x - x0) as f32;
                let py = (y - y0) as f32;
                let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
                let lx = x0 as f32 + t * dx;
                let ly = y0 as f32 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.set_pixel(x, y, aa);
                }
            }
        }
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, font_size: f32) {
        let Some(font) = self.font else {
            warn!("no font loaded, skipping text {:?}", text);
            return;
        };
        let glyphs: Vec<PositionedGlyph> = font
            .layout(text, Scale::uniform(font_size), point(x as f32, y as f32))
            .collect();
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    self.set_pixel(bb.min.x + gx as i32, bb.min.y + gy as i32, v);
                });
            }
        }
    }
}

impl Rasterizer for Canvas<'_> {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Circle {
                cx,
                cy,
                radius,
                stroke_width,
            } => self.stroke_circle(*cx, *cy, *radius, *stroke_width),
            DrawCommand::Line {
                x0,
                y0,
                x1,
                y1,
                stroke_width,
            } => self.draw_thick_line_aa(*x0, *y0, *x1, *y1, *stroke_width),
            DrawCommand::Point { x, y, stroke_width } => {
                self.fill_disc(*x, *y, *stroke_width as f64 / 2.0)
            }
            DrawCommand::Text {
                x,
                y,
                text,
                font_size,
            } => self.draw_text(*x, *y, text, *font_size),
        }
    }
}
