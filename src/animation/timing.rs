//! Timing functions (easing curves) for phase interpolation.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::Custom`] - User-defined curve
//!
//! Every curve is clamped to `[0, 1]` on the way out, so an interpolated
//! position never leaves the segment between its two endpoints.
//!
//! ## Example
//!
//! ```ignore
//! AnimationConfig::draft()
//!     .enter_duration_ms(250)
//!     .timing(TimingFunction::EaseOut)
//! ```

use std::rc::Rc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    #[default]
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Custom timing function
    Custom(Rc<dyn Fn(f32) -> f32>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0).
    /// The result is always within [0, 1].
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let eased = match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::Custom(f) => f(t),
        };
        if eased.is_nan() {
            return t;
        }
        eased.clamp(0.0, 1.0)
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + 'static,
    {
        TimingFunction::Custom(Rc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}
