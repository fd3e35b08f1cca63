//! Frame-rate ticking of telegraphs on a `calloop` event loop.
//!
//! Inside a GUI application the toolkit's own frame clock should call
//! [`Telegraph::tick`] instead. This driver is for hosts without one, such as
//! command line tools and tests.

use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;

use crate::error::DriverError;
use crate::surface::Surface;
use crate::telegraph::Telegraph;

/// Roughly 60 frames per second
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Ticks a set of telegraphs with wall-clock time until none is running.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    frame_interval: Duration,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl FrameDriver {
    pub fn new(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Run the event loop until no telegraph needs ticks.
    ///
    /// Telegraphs are ticked independently. Those never shown or already
    /// disposed are skipped. Blocks the calling thread.
    pub fn run<S: Surface>(&self, telegraphs: &mut Vec<Telegraph<S>>) -> Result<(), DriverError> {
        if !telegraphs.iter().any(Telegraph::needs_ticks) {
            return Ok(());
        }

        let mut event_loop: EventLoop<Vec<Telegraph<S>>> = EventLoop::try_new()?;
        let signal = event_loop.get_signal();
        let frame_interval = self.frame_interval;
        let mut last_frame = Instant::now();

        event_loop
            .handle()
            .insert_source(
                Timer::from_duration(frame_interval),
                move |_deadline, _, telegraphs| {
                    let now = Instant::now();
                    let dt = now.saturating_duration_since(last_frame);
                    last_frame = now;

                    for telegraph in telegraphs.iter_mut().filter(|t| t.needs_ticks()) {
                        telegraph.tick(dt);
                    }

                    if telegraphs.iter().any(Telegraph::needs_ticks) {
                        TimeoutAction::ToDuration(frame_interval)
                    } else {
                        log::debug!("All telegraphs finished, stopping frame driver");
                        signal.stop();
                        TimeoutAction::Drop
                    }
                },
            )
            .map_err(|e| DriverError::EventLoop(e.error))?;

        log::debug!(
            "Driving {} telegraph(s) every {:?}",
            telegraphs.len(),
            frame_interval
        );
        event_loop.run(None, telegraphs, |_| {})?;
        Ok(())
    }
}
