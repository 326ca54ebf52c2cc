//! Dial geometry derived from the size of the drawing area.

use crate::config::ClockConfig;
use crate::error::ClockError;
use log::debug;

/// Pixel measurements of the dial for one drawing-area size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialGeometry {
    pub width: u32,
    pub height: u32,
    pub padding: i32,
    pub outer_margin: i32,
    pub center_x: i32,
    pub center_y: i32,
    pub min_dimension: i32,
    /// Radius of the outline circle.
    pub face_radius: i32,
    /// Radius the numerals sit on. Ticks sit `padding` further out.
    pub dial_radius: i32,
    pub hour_hand_length: i32,
    pub minute_hand_length: i32,
}

impl DialGeometry {
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the geometry if it is worth drawing.
    pub fn drawable(self) -> Result<Self, ClockError> {
        if self.is_degenerate() {
            return Err(ClockError::DegenerateGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Radius of the tick ring.
    pub fn tick_radius(&self) -> i32 {
        self.dial_radius + self.padding
    }

    /// Point at `radius` from the center along `angle`.
    pub fn polar(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.center_x as f64 + angle.cos() * radius,
            self.center_y as f64 + angle.sin() * radius,
        )
    }
}

pub fn compute_geometry(width: u32, height: u32, config: &ClockConfig) -> DialGeometry {
    let padding = config.padding;
    let outer_margin = config.outer_margin;
    let clamp_dim = |d: u32| i32::try_from(d).unwrap_or(i32::MAX);

    let center_x = clamp_dim(width) / 2;
    let center_y = clamp_dim(height) / 2;
    let min_dimension = clamp_dim(width.min(height));

    let face_radius = (min_dimension / 2 - outer_margin).max(0);
    let dial_radius = (min_dimension / 2 - padding - outer_margin * 2).max(0);

    DialGeometry {
        width,
        height,
        padding,
        outer_margin,
        center_x,
        center_y,
        min_dimension,
        face_radius,
        dial_radius,
        hour_hand_length: dial_radius / 2,
        minute_hand_length: dial_radius - dial_radius / 4,
    }
}

/// Holds the geometry for the last seen area size.
///
/// The cached value is replaced whole on a size change, so a reader never
/// sees a new width paired with a stale height.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    config: ClockConfig,
    current: Option<DialGeometry>,
    generation: u64,
}

impl GeometryCache {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            config: config.clone(),
            current: None,
            generation: 0,
        }
    }

    pub fn resolve(&mut self, width: u32, height: u32) -> DialGeometry {
        match self.current {
            Some(geometry) if geometry.width == width && geometry.height == height => geometry,
            _ => {
                let geometry = compute_geometry(width, height, &self.config);
                self.generation += 1;
                debug!(
                    "dial geometry recomputed for {}x{}: face {} dial {} (generation {})",
                    width, height, geometry.face_radius, geometry.dial_radius, self.generation
                );
                self.current = Some(geometry);
                geometry
            }
        }
    }

    /// Number of times the geometry has been computed.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
