use log::{debug, info};
use rand::Rng;
use crate::animation::{AnimatedProperty, DelayTimer, PropertyAnimation};
use crate::constants::*;
use crate::envelope::AnimationEnvelope;
use crate::geometry::ScreenBounds;
use crate::plan::MotionPlan;
use crate::state::{CyclePhase, FadePhase};

// Rounding slack when comparing the fade envelope with the flight time
const ENVELOPE_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
pub enum CycleEvent {
    CycleStarted(MotionPlan),
    FadeInCompleted,
    FadeOutCompleted,
    MotionCompleted,
    PauseElapsed,
}

/// Owns the window's animated properties and flies it from edge to edge,
/// one cycle after another.
pub struct MotionCycleController<R: Rng> {
    bounds: ScreenBounds,
    window_size: f32,
    rng: R,

    left: AnimatedProperty,
    top: AnimatedProperty,
    opacity: AnimatedProperty,
    rotation: f32,

    phase: CyclePhase,
    fade: FadePhase,
    pause: Option<DelayTimer>,

    plan: Option<MotionPlan>,
    envelope: Option<AnimationEnvelope>,
    cycles: u64,
}

impl<R: Rng> MotionCycleController<R> {
    /// The window starts transparent, centred on the screen origin.
    pub fn new(bounds: ScreenBounds, window_size: f32, rng: R) -> Self {
        let half = window_size * 0.5;
        Self {
            bounds,
            window_size,
            rng,

            left: AnimatedProperty::new(bounds.min_x - half),
            top: AnimatedProperty::new(bounds.min_y - half),
            opacity: AnimatedProperty::new(0.0),
            rotation: 0.0,

            phase: CyclePhase::Idle,
            fade: FadePhase::Hidden,
            pause: None,

            plan: None,
            envelope: None,
            cycles: 0,
        }
    }

    /// Starts a new flight. Every running animation is replaced, so there is
    /// never more than one cycle in progress.
    pub fn run_cycle(&mut self) {
        let plan = MotionPlan::random(&self.bounds, &mut self.rng);
        self.start(plan);
    }

    /// Starts a flight along an explicit plan.
    pub fn start(&mut self, plan: MotionPlan) {
        let envelope = AnimationEnvelope::for_duration(plan.duration_seconds);
        let half = self.window_size * 0.5;

        self.rotation = plan.angle_degrees;

        self.left.begin(PropertyAnimation::linear(plan.from.x - half, plan.to.x - half, plan.duration_seconds));
        self.top.begin(PropertyAnimation::linear(plan.from.y - half, plan.to.y - half, plan.duration_seconds));
        self.opacity.begin(PropertyAnimation::linear(0.0, 1.0, envelope.fade_in));

        self.phase = CyclePhase::Moving;
        self.fade = FadePhase::FadingIn;
        self.pause = None;
        self.cycles += 1;

        info!(
            "cycle {}: {:?} ({:.0}, {:.0}) -> {:?} ({:.0}, {:.0}), {:.3}s, {:.1} deg",
            self.cycles,
            plan.from_edge, plan.from.x, plan.from.y,
            plan.to_edge, plan.to.x, plan.to.y,
            plan.duration_seconds,
            plan.angle_degrees,
        );

        self.plan = Some(plan);
        self.envelope = Some(envelope);
    }

    /// Advances every animation and the pause timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Vec<CycleEvent> {
        let mut events = Vec::new();

        self.update_opacity(dt, &mut events);

        match self.phase {
            CyclePhase::Idle => {}
            CyclePhase::Moving => {
                // Left and top share their duration and complete on the same step
                let left_done = self.left.advance(dt);
                let top_done = self.top.advance(dt);
                if let Some(remainder) = left_done.or(top_done) {
                    self.finish_motion(remainder, &mut events);
                }
            }
            CyclePhase::Paused => {
                let overshoot = match self.pause.as_mut() {
                    Some(timer) => timer.tick(dt),
                    None => Some(0.0),
                };
                if let Some(overshoot) = overshoot {
                    events.push(CycleEvent::PauseElapsed);
                    self.run_cycle();
                    if let Some(plan) = self.plan {
                        events.push(CycleEvent::CycleStarted(plan));
                    }
                    if overshoot > 0.0 {
                        events.extend(self.update(overshoot));
                    }
                }
            }
        }

        events
    }

    fn finish_motion(&mut self, remainder: f32, events: &mut Vec<CycleEvent>) {
        debug!("cycle {}: motion completed", self.cycles);

        // The fade-out ends with the motion whenever the flight is long enough
        // for both fades; rounding must not leave the window visible at its
        // base position.
        let envelope_fits = match (self.plan, self.envelope) {
            (Some(plan), Some(envelope)) => envelope.end() <= plan.duration_seconds + ENVELOPE_TOLERANCE,
            _ => false,
        };
        if envelope_fits && self.fade != FadePhase::Hidden {
            self.hide(events);
        }

        events.push(CycleEvent::MotionCompleted);
        self.phase = CyclePhase::Paused;
        let mut pause = DelayTimer::new(PAUSE_DURATION);
        pause.tick(remainder);
        self.pause = Some(pause);
    }

    fn update_opacity(&mut self, dt: f32, events: &mut Vec<CycleEvent>) {
        let completed = self.opacity.advance(dt);

        match self.fade {
            FadePhase::Hidden => {}
            FadePhase::FadingIn => {
                if let Some(remainder) = completed {
                    // Only now may the fade-out drive opacity, never both at once
                    self.opacity.set(1.0);
                    let envelope = self.envelope.unwrap_or_else(|| AnimationEnvelope::for_duration(0.0));
                    self.opacity.begin(
                        PropertyAnimation::linear(1.0, 0.0, envelope.fade_out).with_delay(envelope.fade_out_delay),
                    );
                    self.fade = FadePhase::Holding;
                    debug!("cycle {}: fade-in completed", self.cycles);
                    events.push(CycleEvent::FadeInCompleted);

                    // The fade-out is timed from the instant the fade-in ended
                    let completed = self.opacity.advance(remainder);
                    self.follow_fade_out(completed, events);
                }
            }
            FadePhase::Holding | FadePhase::FadingOut => self.follow_fade_out(completed, events),
        }
    }

    fn follow_fade_out(&mut self, completed: Option<f32>, events: &mut Vec<CycleEvent>) {
        if completed.is_some() {
            self.hide(events);
        } else if self.opacity.animation().is_some_and(|a| !a.is_delayed()) {
            self.fade = FadePhase::FadingOut;
        }
    }

    fn hide(&mut self, events: &mut Vec<CycleEvent>) {
        self.opacity.stop();
        self.opacity.set(0.0);
        self.fade = FadePhase::Hidden;
        debug!("cycle {}: fade-out completed", self.cycles);
        events.push(CycleEvent::FadeOutCompleted);
    }

    pub fn left(&self) -> f32 {
        self.left.value()
    }

    pub fn top(&self) -> f32 {
        self.top.value()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn fade(&self) -> FadePhase {
        self.fade
    }

    pub fn plan(&self) -> Option<&MotionPlan> {
        self.plan.as_ref()
    }

    pub fn envelope(&self) -> Option<&AnimationEnvelope> {
        self.envelope.as_ref()
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn bounds(&self) -> &ScreenBounds {
        &self.bounds
    }

}
