//! Retained draw commands for one frame.

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::geometry::DialGeometry;
use crate::hands::{compute_hands, TimeSample};
use crate::numerals::{numeral_positions, TextMeasurer};
use crate::ticks::{major_ticks, minor_ticks, TickPoint};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Stroked, unfilled circle.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f32,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stroke_width: f32,
    },
    Point {
        x: f64,
        y: f64,
        stroke_width: f32,
    },
    /// Text anchored at its left edge and baseline.
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f32,
    },
}

/// Consumes draw commands.
pub trait Rasterizer {
    fn draw(&mut self, command: &DrawCommand);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn render(&self, rasterizer: &mut impl Rasterizer) {
        for command in &self.commands {
            rasterizer.draw(command);
        }
    }
}

/// Lays out the whole face for one time sample.
///
/// Draw order is outline, hour/minute/second hands, numerals, hour marks,
/// then minute marks. Fails only when the area has a zero dimension.
pub fn render(
    geometry: &DialGeometry,
    time: TimeSample,
    measurer: &impl TextMeasurer,
    config: &ClockConfig,
) -> Result<Scene, ClockError> {
    let geometry = geometry.drawable()?;
    let mut scene = Scene::new();

    scene.add_command(DrawCommand::Circle {
        cx: geometry.center_x as f64,
        cy: geometry.center_y as f64,
        radius: geometry.face_radius as f64,
        stroke_width: config.face_stroke,
    });

    let hands = compute_hands(&geometry, time);
    let strokes = [
        config.hour_hand_stroke,
        config.minute_hand_stroke,
        config.second_hand_stroke,
    ];
    let tips = hands.tips(&geometry, config.hand_scale);
    for ((x1, y1), stroke_width) in tips.into_iter().zip(strokes) {
        scene.add_command(DrawCommand::Line {
            x0: geometry.center_x as f64,
            y0: geometry.center_y as f64,
            x1,
            y1,
            stroke_width,
        });
    }

    for numeral in numeral_positions(&geometry, measurer, config.font_size) {
        scene.add_command(DrawCommand::Text {
            x: numeral.x,
            y: numeral.y,
            text: numeral.text,
            font_size: config.font_size,
        });
    }

    add_ticks(&mut scene, &major_ticks(&geometry), config.major_tick_stroke);
    add_ticks(&mut scene, &minor_ticks(&geometry), config.minor_tick_stroke);

    Ok(scene)
}

fn add_ticks(scene: &mut Scene, ticks: &[TickPoint], stroke_width: f32) {
    for tick in ticks {
        scene.add_command(DrawCommand::Point {
            x: tick.x,
            y: tick.y,
            stroke_width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_geometry;
    use crate::numerals::GlyphBounds;

    struct FixedBox;

    impl TextMeasurer for FixedBox {
        fn measure(&self, _text: &str, _font_size: f32) -> GlyphBounds {
            GlyphBounds {
                width: 20,
                height: 30,
            }
        }
    }

    #[derive(Default)]
    struct Tally {
        circles: usize,
        lines: usize,
        points: usize,
        texts: usize,
    }

    impl Rasterizer for Tally {
        fn draw(&mut self, command: &DrawCommand) {
            match command {
                DrawCommand::Circle { .. } => self.circles += 1,
                DrawCommand::Line { .. } => self.lines += 1,
                DrawCommand::Point { .. } => self.points += 1,
                DrawCommand::Text { .. } => self.texts += 1,
            }
        }
    }

    fn scene_at(h: u8, m: u8, s: u8) -> Scene {
        let config = ClockConfig::default();
        let geometry = compute_geometry(500, 500, &config);
        let time = TimeSample::new(h, m, s).unwrap();
        render(&geometry, time, &FixedBox, &config).unwrap()
    }

    #[test]
    fn frame_contains_every_primitive() {
        let mut tally = Tally::default();
        scene_at(10, 10, 30).render(&mut tally);
        assert_eq!(tally.circles, 1);
        assert_eq!(tally.lines, 3);
        assert_eq!(tally.texts, 12);
        assert_eq!(tally.points, 31 + 61);
    }

    #[test]
    fn outline_comes_first_with_face_radius() {
        let scene = scene_at(3, 0, 0);
        assert_eq!(
            scene.commands()[0],
            DrawCommand::Circle {
                cx: 250.0,
                cy: 250.0,
                radius: 218.0,
                stroke_width: 32.0,
            }
        );
    }

    #[test]
    fn hands_follow_outline_with_decreasing_strokes() {
        let scene = scene_at(3, 0, 0);
        let strokes: Vec<f32> = scene.commands()[1..4]
            .iter()
            .map(|c| match c {
                DrawCommand::Line { stroke_width, .. } => *stroke_width,
                other => panic!("expected a hand, got {other:?}"),
            })
            .collect();
        assert_eq!(strokes, vec![16.0, 8.0, 4.0]);
        match &scene.commands()[1] {
            DrawCommand::Line { x0, y0, x1, y1, .. } => {
                assert_eq!((*x0, *y0), (250.0, 250.0));
                assert!((x1 - 318.0).abs() < 1e-9);
                assert!((y1 - 250.0).abs() < 1e-9);
            }
            other => panic!("expected the hour hand, got {other:?}"),
        }
    }

    #[test]
    fn major_ticks_are_drawn_before_minor_ticks() {
        let scene = scene_at(3, 0, 0);
        let points: Vec<f32> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Point { stroke_width, .. } => Some(*stroke_width),
                _ => None,
            })
            .collect();
        assert!(points[..31].iter().all(|w| *w == 10.0));
        assert!(points[31..].iter().all(|w| *w == 4.0));
    }

    #[test]
    fn zero_area_is_rejected() {
        let config = ClockConfig::default();
        let geometry = compute_geometry(0, 0, &config);
        let result = render(&geometry, TimeSample::new(0, 0, 0).unwrap(), &FixedBox, &config);
        assert!(matches!(result, Err(ClockError::DegenerateGeometry { .. })));
    }
}
