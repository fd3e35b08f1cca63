use thiserror::Error;

use crate::phase::PhaseKind;

/// Errors raised by a single [`Phase`](crate::phase::Phase).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhaseError {
    /// Phases are single-shot; a second start would corrupt elapsed time.
    #[error("{0} phase already started")]
    AlreadyStarted(PhaseKind),
}

/// Errors raised while validating an animation configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{phase} duration must not be negative, got {millis} ms")]
    NegativeDuration { phase: PhaseKind, millis: i64 },
}

/// Errors raised by a [`Telegraph`](crate::telegraph::Telegraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelegraphError {
    #[error("telegraph already shown")]
    AlreadyShown(#[source] PhaseError),
    #[error("telegraph already dismissed")]
    AlreadyDismissed,
    #[error("telegraph has no dismiss control, it leaves on its own")]
    DismissDisabled,
    #[error("telegraph surface has been disposed")]
    Disposed,
}

/// Errors reported by a [`Chime`](crate::chime::Chime) collaborator.
#[derive(Error, Debug)]
pub enum ChimeError {
    #[error("ring tone unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the [`FrameDriver`](crate::driver::FrameDriver) event loop.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] calloop::Error),
}
