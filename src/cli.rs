use std::path::PathBuf;
use clap::Parser;
use crate::constants::FPS;

/// Flies a small window from one screen edge to another, forever.
#[derive(Parser, Debug)]
#[command(name = "edge-glider", version, about)]
pub struct Args {
    /// Image to carry across the screen (png, jpg, bmp, gif); a rocket is drawn when omitted
    #[arg(long)]
    pub sprite: Option<PathBuf>,

    /// Do not play the short tone at the start of every cycle
    #[arg(long)]
    pub no_beep: bool,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Seed the random generator to replay the same flights
    #[arg(long)]
    pub seed: Option<u64>,
}
