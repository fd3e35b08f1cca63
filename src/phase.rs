//! Single-shot timed segments of a telegraph animation.
//!
//! A [`Phase`] advances one property from `from` to `to` over a fixed duration.
//! It never reads a clock itself: the owner feeds it elapsed time through
//! [`Phase::advance`] on every scheduler tick, and writes the returned value
//! wherever the property lives.
//!
//! ```text
//! Idle --start--> Running <--suspend/resume--> Suspended
//!                    |
//!                    +--elapsed >= duration--> Done
//! ```

use std::fmt;
use std::time::Duration;

use crate::animation::{Animatable, TimingFunction};
use crate::error::PhaseError;

/// The three segments every telegraph plays through, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// The surface slides onto the screen
    Enter,
    /// The surface stays in place
    Hold,
    /// The surface slides off the screen
    Exit,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseKind::Enter => write!(f, "enter"),
            PhaseKind::Hold => write!(f, "hold"),
            PhaseKind::Exit => write!(f, "exit"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseState {
    Idle,
    Running,
    Suspended,
    Done,
}

/// Callback fired once when a phase reaches [`PhaseState::Done`].
pub type PhaseCallback<T> = Box<dyn FnOnce(&Phase<T>)>;

/// Start and end values of an interpolated property
#[derive(Clone, Debug)]
struct Track<T> {
    from: T,
    to: T,
    timing: TimingFunction,
}

/// Result of advancing a phase by one tick
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T> {
    /// Value to write to the bound property, if any
    pub value: Option<T>,
    /// Set on the tick the phase completes: the part of the tick that
    /// extended past the phase's duration
    pub overflow: Option<Duration>,
}

impl<T> Frame<T> {
    fn idle() -> Self {
        Self {
            value: None,
            overflow: None,
        }
    }

    /// Returns true if the phase completed on this tick
    pub fn is_completed(&self) -> bool {
        self.overflow.is_some()
    }
}

pub struct Phase<T: Animatable> {
    kind: PhaseKind,
    track: Option<Track<T>>,
    duration: Duration,
    elapsed: Duration,
    state: PhaseState,
    callbacks: Vec<PhaseCallback<T>>,
}

impl<T: Animatable> Phase<T> {
    /// A phase that moves a property from `from` to `to` over `duration`.
    pub fn interpolate(kind: PhaseKind, from: T, to: T, duration: Duration) -> Self {
        Self {
            kind,
            track: Some(Track {
                from,
                to,
                timing: TimingFunction::Linear,
            }),
            duration,
            elapsed: Duration::ZERO,
            state: PhaseState::Idle,
            callbacks: Vec::new(),
        }
    }

    /// A phase that only lets time pass, without writing any property.
    pub fn wait(kind: PhaseKind, duration: Duration) -> Self {
        Self {
            kind,
            track: None,
            duration,
            elapsed: Duration::ZERO,
            state: PhaseState::Idle,
            callbacks: Vec::new(),
        }
    }

    /// Set the easing curve of an interpolating phase
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        if let Some(track) = self.track.as_mut() {
            track.timing = timing;
        }
        self
    }

    /// Register a completion callback.
    ///
    /// Callbacks run exactly once, in registration order, on the tick that
    /// completes the phase.
    pub fn on_done<F>(&mut self, callback: F)
    where
        F: FnOnce(&Phase<T>) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    pub fn start(&mut self) -> Result<(), PhaseError> {
        if self.state != PhaseState::Idle {
            return Err(PhaseError::AlreadyStarted(self.kind));
        }
        log::debug!("{} phase started ({:?})", self.kind, self.duration);
        self.state = PhaseState::Running;
        Ok(())
    }

    /// Freeze progress. Only affects a running phase.
    pub fn suspend(&mut self) {
        if self.state == PhaseState::Running {
            log::debug!("{} phase suspended at {:?}", self.kind, self.elapsed);
            self.state = PhaseState::Suspended;
        }
    }

    /// Continue from the frozen progress. Only affects a suspended phase.
    pub fn resume(&mut self) {
        if self.state == PhaseState::Suspended {
            log::debug!("{} phase resumed at {:?}", self.kind, self.elapsed);
            self.state = PhaseState::Running;
        }
    }

    /// Advance a running phase by `dt`.
    ///
    /// Idle, suspended and finished phases ignore the tick. When the elapsed
    /// time reaches the duration the phase becomes [`PhaseState::Done`], its
    /// callbacks fire, and the returned frame carries the unused part of `dt`.
    pub fn advance(&mut self, dt: Duration) -> Frame<T> {
        if self.state != PhaseState::Running {
            return Frame::idle();
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.duration {
            return Frame {
                value: self.value(),
                overflow: None,
            };
        }

        let overflow = self.elapsed - self.duration;
        self.elapsed = self.duration;
        self.state = PhaseState::Done;
        log::debug!("{} phase done", self.kind);

        let frame = Frame {
            value: self.value(),
            overflow: Some(overflow),
        };
        for callback in std::mem::take(&mut self.callbacks) {
            callback(self);
        }
        frame
    }

    /// Value of the bound property at the current progress
    pub fn value(&self) -> Option<T> {
        let track = self.track.as_ref()?;
        let t = track.timing.evaluate(self.progress());
        Some(T::lerp(&track.from, &track.to, t))
    }

    /// Fraction of the duration that has elapsed, from 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return if self.state == PhaseState::Done { 1.0 } else { 0.0 };
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    pub fn state(&self) -> PhaseState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_done(&self) -> bool {
        self.state == PhaseState::Done
    }
}

impl<T: Animatable> fmt::Debug for Phase<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phase")
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
