//! Renders a sample calendar for both board presets and writes PNG previews.
//!
//! ```text
//! cargo run --bin preview_calendar -- [output-dir]
//! ```
#![cfg(feature = "host")]

#[path = "sample_source.rs"]
mod sample_source;

use std::error::Error;
use std::path::PathBuf;

use contrib_glow::config::BoardProfile;
use contrib_glow::render::{Trace, render};
use contrib_glow::to_png::{write_frame_png, write_strip_png};
use sample_source::sample_calendar;

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/preview"), PathBuf::from);
    let calendar = sample_calendar(2025)?;
    println!(
        "sample calendar: {} weeks, {} contributions",
        calendar.week_count(),
        calendar.total_contributions()
    );

    let bling = BoardProfile::bling()?;
    let frame = render(
        &bling.topology,
        &calendar,
        &bling.color_scale,
        bling.brightness.level(),
        Trace::Off,
    )?;
    // The strip runs at 2%; brighten the preview so it is visible on screen.
    let strip_path = output_dir.join("bling.png");
    write_strip_png(&frame, bling.topology.row_count(), &strip_path, 1200, 50.0)?;
    println!("wrote {}", strip_path.display());

    let unicorn = BoardProfile::galactic_unicorn()?;
    let frame = render(
        &unicorn.topology,
        &calendar,
        &unicorn.color_scale,
        unicorn.brightness.level(),
        Trace::Off,
    )?;
    let panel_path = output_dir.join("galactic_unicorn.png");
    write_frame_png(&frame, &panel_path, 1200, 2.0)?;
    println!("wrote {}", panel_path.display());

    Ok(())
}
