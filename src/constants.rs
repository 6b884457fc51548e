pub const FPS: u32 = 60;                      // Default target frames per second

pub const SPEED: f32 = 1100.0;                // Travel speed (screen pixels per second)
pub const FADE_IN_DURATION: f32 = 0.2;        // Opacity 0 -> 1 (seconds)
pub const FADE_OUT_DURATION: f32 = 0.2;       // Opacity 1 -> 0 (seconds)
pub const PAUSE_DURATION: f32 = 2.0;          // Wait between two flights (seconds)

pub const EDGE_DIVISIONS: usize = 10;         // Segments per edge, so 11 candidate points
pub const EDGE_POINT_COUNT: usize = EDGE_DIVISIONS + 1;

pub const REFERENCE_X: f32 = 30.0;            // Reference vector (30, 0) the rotation is measured against
pub const REFERENCE_Y: f32 = 0.0;

pub const BEEP_FREQUENCY: u32 = 2000;         // Hz
pub const BEEP_DURATION: f32 = 0.1;           // seconds
pub const BEEP_SAMPLE_RATE: u32 = 44100;

pub const ROCKET_LENGTH: i32 = 120;           // Built-in sprite size (pixels)
pub const ROCKET_WIDTH: i32 = 40;
