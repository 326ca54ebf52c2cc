use clap::Parser;
use clockface::{load_font, Clock, ClockConfig, HandScale};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Analog wall clock in a window.
#[derive(Debug, Parser)]
#[command(name = "clockface", version)]
struct Args {
    /// TrueType/OpenType font used for the numerals
    #[arg(long)]
    font: PathBuf,

    #[arg(long, default_value = "Clock")]
    title: String,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Milliseconds between redraws
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,

    #[arg(long, value_enum, default_value_t = HandScale::HourVertical)]
    hand_scale: HandScale,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let font = load_font(&args.font)?;
    info!("loaded font {}", args.font.display());

    let config = ClockConfig::builder()
        .title(args.title)
        .window_width(args.width)
        .window_height(args.height)
        .redraw_interval(Duration::from_millis(args.interval_ms))
        .hand_scale(args.hand_scale)
        .build();

    Clock::new(config, font).show()?;
    Ok(())
}
