use raylib::prelude::*;

/// A time-based interpolation of one scalar property, optionally starting
/// after a delay.
pub struct PropertyAnimation {
    tween: ease::Tween,
    to: f32,
    duration: f32,
    delay: f32,
    elapsed: f32,
    value: f32,
}

impl PropertyAnimation {
    pub fn linear(from: f32, to: f32, duration: f32) -> Self {
        Self {
            tween: ease::Tween::new(ease::linear_none, from, to, duration),
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            elapsed: 0.0,
            value: from,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Still waiting for its begin time; it does not drive the property yet.
    pub fn is_delayed(&self) -> bool {
        self.elapsed < self.delay
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    /// Current interpolated value, or `None` while delayed.
    pub fn current(&self) -> Option<f32> {
        if self.is_delayed() {
            None
        } else {
            Some(self.value)
        }
    }

    /// Returns the part of `dt` left over past the end once complete.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        let before = self.elapsed;
        self.elapsed += dt.max(0.0);
        if self.is_delayed() {
            return None;
        }

        let end = self.delay + self.duration;
        if self.elapsed >= end {
            // A zero-length tween would divide by its duration
            self.value = self.to;
            return Some(self.elapsed - end);
        }

        let active_dt = self.elapsed - before.max(self.delay);
        self.value = self.tween.apply(active_dt);
        None
    }
}

/// A property with an explicitly set base value that an animation may
/// temporarily override. Once the animation completes it is removed and the
/// property shows its base value again.
pub struct AnimatedProperty {
    base: f32,
    animation: Option<PropertyAnimation>,
}

impl AnimatedProperty {
    pub fn new(base: f32) -> Self {
        Self { base, animation: None }
    }

    pub fn value(&self) -> f32 {
        self.animation
            .as_ref()
            .and_then(PropertyAnimation::current)
            .unwrap_or(self.base)
    }

    pub fn set(&mut self, value: f32) {
        self.base = value;
    }

    /// Replaces any running animation.
    pub fn begin(&mut self, animation: PropertyAnimation) {
        self.animation = Some(animation);
    }

    pub fn stop(&mut self) {
        self.animation = None;
    }

    pub fn animation(&self) -> Option<&PropertyAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// On the step the running animation completes, returns the unused
    /// remainder of `dt`.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        let remainder = self.animation.as_mut()?.advance(dt);
        if remainder.is_some() {
            self.animation = None;
        }
        remainder
    }
}

/// One-shot countdown.
pub struct DelayTimer {
    remaining: f32,
}

impl DelayTimer {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    /// Once the delay has run out, returns how far `dt` overshot it.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.remaining -= dt;
        (self.remaining <= 0.0).then(|| -self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_animation_interpolates() {
        let mut anim = PropertyAnimation::linear(0.0, 10.0, 1.0);
        anim.advance(0.25);
        assert!((anim.current().unwrap() - 2.5).abs() < 1e-4);
        anim.advance(0.5);
        assert!((anim.current().unwrap() - 7.5).abs() < 1e-4);
        assert!(!anim.is_complete());
        anim.advance(0.5);
        assert!(anim.is_complete());
        assert_eq!(anim.current(), Some(10.0));
    }

    #[test]
    fn delayed_animation_waits_before_driving() {
        let mut anim = PropertyAnimation::linear(1.0, 0.0, 0.2).with_delay(0.5);
        anim.advance(0.3);
        assert!(anim.is_delayed());
        assert_eq!(anim.current(), None);

        // Crosses the begin time: only the part after it counts.
        anim.advance(0.3);
        assert!(!anim.is_delayed());
        assert!((anim.current().unwrap() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn zero_duration_completes_on_first_step() {
        let mut anim = PropertyAnimation::linear(3.0, 3.0, 0.0);
        assert_eq!(anim.advance(0.016), Some(0.016));
        assert!(anim.is_complete());
        assert_eq!(anim.current(), Some(3.0));
    }

    #[test]
    fn property_falls_back_to_base_after_completion() {
        let mut prop = AnimatedProperty::new(-50.0);
        prop.begin(PropertyAnimation::linear(100.0, 200.0, 1.0));
        assert_eq!(prop.value(), 100.0);

        assert_eq!(prop.advance(0.5), None);
        assert!((prop.value() - 150.0).abs() < 1e-3);

        let remainder = prop.advance(0.6).unwrap();
        assert!((remainder - 0.1).abs() < 1e-5);
        assert!(!prop.is_animating());
        assert_eq!(prop.value(), -50.0);
    }

    #[test]
    fn property_shows_base_while_animation_is_delayed() {
        let mut prop = AnimatedProperty::new(1.0);
        prop.begin(PropertyAnimation::linear(1.0, 0.0, 0.2).with_delay(1.0));
        prop.advance(0.5);
        assert_eq!(prop.value(), 1.0);
        prop.set(0.7);
        assert_eq!(prop.value(), 0.7);
    }

    #[test]
    fn delay_timer_fires_once_time_is_up() {
        let mut timer = DelayTimer::new(2.0);
        assert_eq!(timer.tick(1.0), None);
        assert_eq!(timer.tick(0.9), None);
        let overshoot = timer.tick(0.15).unwrap();
        assert!((overshoot - 0.05).abs() < 1e-5);
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn remainder_carries_into_a_following_animation() {
        // Fade-in ends 0.01s into a 0.03s step; the rest belongs to the fade-out
        let mut fade_in = PropertyAnimation::linear(0.0, 1.0, 0.2);
        for _ in 0..6 {
            assert_eq!(fade_in.advance(0.03), None);
        }
        let remainder = fade_in.advance(0.03).unwrap();
        assert!((remainder - 0.01).abs() < 1e-5);

        let mut fade_out = PropertyAnimation::linear(1.0, 0.0, 0.2).with_delay(0.1);
        assert_eq!(fade_out.advance(remainder), None);
        for _ in 0..9 {
            assert_eq!(fade_out.advance(0.03), None);
        }
        // 0.01 + 0.27 = 0.28, fade-out 0.18 in
        assert!((fade_out.current().unwrap() - 0.1).abs() < 1e-3);
        assert!(fade_out.advance(0.03).is_some());
    }
}
