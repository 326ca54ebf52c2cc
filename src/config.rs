use bon::Builder;
use std::time::Duration;

/// Color representation for clock elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

/// Everything on the face is drawn in this color.
pub const INK: Color = Color::new(0x00, 0x00, 0x00);
/// Background the frame is cleared to.
pub const PAPER: Color = Color::new(0xff, 0xff, 0xff);

/// How the minute and second hand endpoints are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum HandScale {
    /// The y offset of the minute and second hands uses the hour hand length,
    /// so those hands trace an ellipse.
    #[default]
    HourVertical,
    /// Both offsets use the hand's own length.
    Uniform,
}

#[derive(Debug, Clone, Builder)]
pub struct ClockConfig {
    // Window configuration
    #[builder(default = "Clock".to_string())]
    pub title: String,
    #[builder(default = 500)]
    pub window_width: u32,
    #[builder(default = 500)]
    pub window_height: u32,
    #[builder(default = Duration::from_millis(1000))]
    pub redraw_interval: Duration,

    // Dial layout
    #[builder(default = 50)]
    pub padding: i32,
    #[builder(default = 32)]
    pub outer_margin: i32,
    #[builder(default = 64.0)]
    pub font_size: f32,

    // Stroke widths
    #[builder(default = 32.0)]
    pub face_stroke: f32,
    #[builder(default = 16.0)]
    pub hour_hand_stroke: f32,
    #[builder(default = 8.0)]
    pub minute_hand_stroke: f32,
    #[builder(default = 4.0)]
    pub second_hand_stroke: f32,
    #[builder(default = 10.0)]
    pub major_tick_stroke: f32,
    #[builder(default = 4.0)]
    pub minor_tick_stroke: f32,

    #[builder(default)]
    pub hand_scale: HandScale,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
