use crate::constants::*;

/// Opacity timing of one flight: fade in, hold, fade out so that the window
/// is transparent again when the motion ends.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct AnimationEnvelope {
    pub fade_in: f32,
    pub fade_out: f32,
    /// Delay before the fade-out starts, counted from fade-in completion.
    pub fade_out_delay: f32,
}

impl AnimationEnvelope {
    pub fn for_duration(total_duration: f32) -> Self {
        let fades = FADE_IN_DURATION + FADE_OUT_DURATION;
        let fade_out_delay = if total_duration >= fades {
            total_duration - fades
        } else {
            0.0
        };

        Self {
            fade_in: FADE_IN_DURATION,
            fade_out: FADE_OUT_DURATION,
            fade_out_delay,
        }
    }

    /// Time from cycle start at which the window is fully transparent again.
    pub fn end(&self) -> f32 {
        self.fade_in + self.fade_out_delay + self.fade_out
    }
}
