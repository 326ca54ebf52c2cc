use crate::geometry::DialGeometry;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPoint {
    pub index: usize,
    pub angle: f64,
    pub x: f64,
    pub y: f64,
    pub is_major: bool,
}

/// Minute marks, indices 0..=60. The first and last coincide.
pub fn minor_ticks(geometry: &DialGeometry) -> Vec<TickPoint> {
    ring(geometry, 60, PI / 30.0, false)
}

/// Hour marks, indices 0..=30. The ring is walked two and a half times, so
/// every hour position is emitted more than once.
pub fn major_ticks(geometry: &DialGeometry) -> Vec<TickPoint> {
    ring(geometry, 30, PI / 6.0, true)
}

fn ring(geometry: &DialGeometry, last: usize, step: f64, is_major: bool) -> Vec<TickPoint> {
    let radius = geometry.tick_radius() as f64;
    (0..=last)
        .map(|index| {
            let angle = step * index as f64;
            let (x, y) = geometry.polar(angle, radius);
            TickPoint {
                index,
                angle,
                x,
                y,
                is_major,
            }
        })
        .collect()
}
