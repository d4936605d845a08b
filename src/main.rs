//! Headless flight trace.
//!
//! Scrolls the reference driver from the top of the page to the bottom at
//! a simulated 60 Hz and writes one JSON object per frame to stdout. Pass a
//! TOML preset path as the first argument to override the defaults (a
//! rejected file falls back to them with a warning); set
//! `FLIGHTPATH_FRAMES` to change the number of simulated frames.

use std::{
    error::Error,
    io::{self, BufWriter, Write},
    path::Path,
};

use flightpath::{
    input::ScrollDriver, options::Options, util::frame_timing::FrameTiming,
    Flight, FlightState, FrameInput,
};
use serde_json::json;

const DEFAULT_FRAMES: u32 = 600;
const FRAME_DELTA: f32 = 1.0 / 60.0;

fn frame_count() -> u32 {
    let Ok(raw) = std::env::var("FLIGHTPATH_FRAMES") else {
        return DEFAULT_FRAMES;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("Ignoring FLIGHTPATH_FRAMES={raw:?}, using {DEFAULT_FRAMES}");
        DEFAULT_FRAMES
    })
}

fn load_options() -> Options {
    let Some(path) = std::env::args().nth(1) else {
        log::info!("No preset given, flying the reference route");
        return Options::default();
    };
    Options::load(Path::new(&path)).unwrap_or_else(|e| {
        log::warn!("Rejected options file {path}: {e}; using defaults");
        Options::default()
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let flight = Flight::new(load_options())?;
    let frames = frame_count();

    let mut scroll = ScrollDriver::new(&flight.options().scroll);
    scroll.set_target(1.0);

    let mut state = FlightState::default();
    let mut timing = FrameTiming::new();
    let mut max_bank = 0.0_f32;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for frame in 0..frames {
        scroll.tick(FRAME_DELTA);
        flight.update(&mut state, FrameInput::new(scroll.offset(), FRAME_DELTA));

        let bank = state.vehicle.bank().to_degrees();
        max_bank = max_bank.max(bank.abs());

        let record = json!({
            "frame": frame,
            "scroll": scroll.offset(),
            "position": state.rig.position().to_array(),
            "look": state.rig.look_direction().to_array(),
            "vehicle": state.vehicle.orientation().to_array(),
            "bank_degrees": bank,
        });
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
        let _ = timing.end_frame();
    }
    out.flush()?;

    log::info!(
        "Traced {} frames: max |bank| {max_bank:.2}°, {:.0} fps, {:?} per frame",
        timing.frames(),
        timing.fps(),
        timing.average_frame_time()
    );
    Ok(())
}
