pub mod animation;
pub mod beep;
pub mod cli;
pub mod constants;
pub mod controller;
pub mod envelope;
pub mod error;
pub mod geometry;
pub mod plan;
pub mod sprite;
pub mod state;
pub mod texture_loader;

pub use controller::{CycleEvent, MotionCycleController};
pub use envelope::AnimationEnvelope;
pub use error::{GliderError, GliderResult};
pub use geometry::{Edge, ScreenBounds};
pub use plan::MotionPlan;
