use clockface::{load_font, Clock, ClockConfig, FixedClock, HandScale, TimeSample};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let font_path: PathBuf = std::env::args()
        .nth(1)
        .ok_or("usage: frozen_clock <font.ttf>")?
        .into();
    let font = load_font(&font_path)?;

    // Build a config with the bon-generated builder
    let config = ClockConfig::builder()
        .title("10:10:30".to_string())
        .window_width(400)
        .window_height(400)
        .hand_scale(HandScale::Uniform)
        .build();

    // The classic showroom pose, held still
    let source = FixedClock(TimeSample::new(10, 10, 30)?);
    let mut clock = Clock::with_source(config, font, source);

    let scene = clock.frame(400, 400)?;
    println!("Displaying a frozen clock face:");
    println!("- {} draw commands per frame", scene.len());
    println!("- hands scaled uniformly");
    println!("Close the window to exit");

    clock.show()?;
    Ok(())
}
