// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod error;
pub mod geometry;
pub mod hands;
pub mod numerals;
pub mod raster;
pub mod scene;
pub mod scheduler;
pub mod source;
pub mod ticks;

pub use config::{ClockConfig, Color, HandScale, INK, PAPER};
pub use error::ClockError;
pub use geometry::{compute_geometry, DialGeometry, GeometryCache};
pub use hands::{compute_hands, HandVector, Hands, TimeSample};
pub use numerals::{numeral_positions, GlyphBounds, NumeralGlyph, TextMeasurer};
pub use raster::{load_font, Canvas};
pub use scene::{render, DrawCommand, Rasterizer, Scene};
pub use scheduler::RedrawScheduler;
pub use source::{ClockSource, FixedClock, SystemClock};
pub use ticks::{major_ticks, minor_ticks, TickPoint};

// External crate imports
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use rusttype::Font;

// Standard library imports
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// An analog clock face bound to a time source and a text measurer.
pub struct Clock<S: ClockSource = SystemClock, M: TextMeasurer = Font<'static>> {
    config: ClockConfig,
    measurer: M,
    source: S,
    geometry: GeometryCache,
}

impl Clock {
    pub fn new(config: ClockConfig, font: Font<'static>) -> Self {
        Self::with_source(config, font, SystemClock)
    }
}

impl<S: ClockSource, M: TextMeasurer> Clock<S, M> {
    pub fn with_source(config: ClockConfig, measurer: M, source: S) -> Self {
        let geometry = GeometryCache::new(&config);
        Self {
            config,
            measurer,
            source,
            geometry,
        }
    }

    /// Lays out one frame for a `width` x `height` surface at the source's current time.
    pub fn frame(&mut self, width: u32, height: u32) -> Result<Scene, ClockError> {
        let geometry = self.geometry.resolve(width, height);
        let time = self.source.now();
        render(&geometry, time, &self.measurer, &self.config)
    }
}

impl<S: ClockSource> Clock<S, Font<'static>> {
    /// Rasterizes one frame into an RGBA buffer of `width` x `height` pixels.
    pub fn draw_into(
        &mut self,
        frame: &mut [u8],
        width: u32,
        height: u32,
    ) -> Result<(), ClockError> {
        let scene = self.frame(width, height)?;
        let mut canvas =
            Canvas::new(frame, width as usize, height as usize).with_font(&self.measurer);
        canvas.clear(PAPER);
        scene.render(&mut canvas);
        Ok(())
    }

    /// Opens a window and keeps the face current until it is closed.
    pub fn show(mut self) -> Result<(), ClockError> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();
        let size = window.inner_size();
        let mut fb_width = size.width;
        let mut fb_height = size.height;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut scheduler = RedrawScheduler::new(self.config.redraw_interval, Instant::now());
        info!(
            "clock window opened at {}x{}, redrawing every {:?}",
            fb_width,
            fb_height,
            scheduler.interval()
        );

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    fb_width = new_size.width;
                    fb_height = new_size.height;
                    if fb_width > 0 && fb_height > 0 {
                        let resized = pixels
                            .resize_buffer(fb_width, fb_height)
                            .and_then(|()| pixels.resize_surface(fb_width, fb_height));
                        if let Err(err) = resized {
                            error!("failed to resize pixel surface: {}", err);
                            window_target.exit();
                            return;
                        }
                    }
                    info!("surface resized to {}x{}", fb_width, fb_height);
                    scheduler.expedite(Instant::now());
                }
                WindowEvent::RedrawRequested => {
                    match self.draw_into(pixels.frame_mut(), fb_width, fb_height) {
                        Ok(()) => {
                            if let Err(err) = pixels.render() {
                                error!("failed to present frame: {}", err);
                                window_target.exit();
                            }
                        }
                        Err(err) if err.is_skippable() => debug!("skipping frame: {}", err),
                        Err(err) => {
                            error!("{}", err);
                            window_target.exit();
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if scheduler.due(Instant::now()) {
                    window_clone.request_redraw();
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(scheduler.deadline()));
            }
            _ => {}
        })?;

        Ok(())
    }
}
