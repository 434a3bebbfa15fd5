// File: crates/scrub-core/src/animate.rs
// Summary: Tick-driven interpolation primitive for scale and color transitions.

use crate::types::Rgb;

/// Accelerate-decelerate easing: slow start, fast middle, slow end.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * std::f32::consts::PI).cos() / 2.0 + 0.5
}

/// A single timed interpolation between two values, advanced by external
/// `tick` calls (one per frame). No timers, no threads.
#[derive(Clone, Copy, Debug)]
pub struct Animation {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Animation {
    /// An already-settled animation resting at `value`.
    pub fn settled_at(value: f32) -> Self {
        Self { from: value, to: value, duration: 0.0, elapsed: 0.0, active: false }
    }

    /// Begin a new interpolation. Restarting an in-flight animation starts
    /// from the current interpolated value, never the original `from`, so a
    /// retarget cannot snap visually.
    pub fn start(&mut self, to: f32, duration: f32) {
        let from = self.value();
        self.from = from;
        self.to = to;
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
        self.active = self.duration > 0.0 && (to - from).abs() > f32::EPSILON;
        if !self.active {
            self.from = to;
        }
    }

    /// Advance by `dt` elapsed units.
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.active = false;
            self.from = self.to;
        }
    }

    /// The eased value at the current elapsed time; exactly `to` once settled.
    pub fn value(&self) -> f32 {
        if !self.active {
            return self.to;
        }
        let t = ease_in_out(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        !self.active
    }
}

/// A color pair driven by a shared [`Animation`] progress value.
#[derive(Clone, Copy, Debug)]
pub struct ColorFade {
    pub from: Rgb,
    pub to: Rgb,
}

impl ColorFade {
    pub fn hold(color: Rgb) -> Self {
        Self { from: color, to: color }
    }

    pub fn at(&self, progress: f32) -> Rgb {
        self.from.lerp(self.to, progress)
    }
}
