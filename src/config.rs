// Copyright (c) 2026 rezky_nightky

use std::time::Duration;

use clap::Parser;
use crossterm::style::Color;

// Ground noise. ALPHA divides each octave's amplitude, BETA scales its
// frequency.
pub const NOISE_SEED: i32 = 123;
pub const NOISE_ALPHA: f32 = 2.0;
pub const NOISE_BETA: f32 = 1.1;
pub const NOISE_OCTAVES: i32 = 3;

pub const PEBBLE_BELOW: f32 = 0.0;
pub const FLAT_BELOW: f32 = 0.2;
pub const LEAF_BELOW: f32 = 0.4;

pub const GROUND_COLOR: Color = Color::Magenta;
pub const RAIN_COLOR: Color = Color::Blue;
pub const TITLE: &str = "R a i n";

/// Droplets at or past this age are culled.
pub const MAX_AGE: u32 = 30;
/// Exclusive upper bound on droplets spawned per tick.
pub const MAX_SPAWN: usize = 7;
/// Odds (numerator, denominator) that a droplet ages during `advance`.
pub const AGE_ODDS: (u32, u32) = (1, 3);
pub const RAIN_SEED: u64 = 0x1234567;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

pub const DEBUG_LOG_PATH: &str = "./debug.log";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "drizzle",
    about = "Rain falling on a procedurally textured ground. Press any key to leave.",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(short = 'v', long = "version", help = "Print version and exit")]
    pub version: bool,

    #[arg(long = "info", help = "Print build information and exit")]
    pub info: bool,

    #[arg(
        long = "debug-log",
        help = "Append a per-frame dump of the droplets to ./debug.log"
    )]
    pub debug_log: bool,
}
