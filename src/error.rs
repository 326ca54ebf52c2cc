use std::path::PathBuf;

/// Everything that can go wrong between sampling the time and putting pixels on screen.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// The drawing area has a zero dimension; the frame should be skipped.
    #[error("drawing area {width}x{height} has no room for a dial")]
    DegenerateGeometry { width: u32, height: u32 },

    #[error("time {hour:02}:{minute:02}:{second:02} is outside a 24-hour day")]
    TimeOutOfRange { hour: u8, minute: u8, second: u8 },

    #[error("failed to read font {}: {source}", .path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a usable TrueType/OpenType font", .path.display())]
    InvalidFont { path: PathBuf },

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

impl ClockError {
    /// Errors after which the host should skip the frame and keep running.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
