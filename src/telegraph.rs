//! The enter → hold → exit chain of a single telegraph.
//!
//! A [`Telegraph`] owns three [`Phase`]s and moves its [`Surface`] along
//! them as the scheduler ticks:
//!
//! ```text
//! show() ─▶ Enter ─▶ Hold ─▶ Exit ─▶ surface.dispose()
//!                     ▲
//!                     └─ suspended while hovered (HoverGate)
//! ```
//!
//! What follows each phase is decided by [`Transition::after`], not by
//! callbacks stored inside the phases, so the shape of the chain can be
//! inspected and tested without a scheduler. Phase callbacks are only used
//! for side effects such as the chime.
//!
//! With `button_enabled` the hold phase is not timed. The telegraph stays on
//! screen after entering until [`Telegraph::dismiss`] is called, then leaves
//! through the same exit phase.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::chime::{self, Chime};
use crate::config::AnimationConfig;
use crate::error::TelegraphError;
use crate::geometry::Point;
use crate::hover::HoverGate;
use crate::phase::{Phase, PhaseKind, PhaseState};
use crate::surface::Surface;

/// What happens once a phase is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Start the given phase
    Start(PhaseKind),
    /// Wait for [`Telegraph::dismiss`] before starting hold
    AwaitDismiss,
    /// The chain is over, release the surface
    DisposeSurface,
}

impl Transition {
    /// The chain's transition table.
    pub fn after(finished: PhaseKind, button_enabled: bool) -> Self {
        match (finished, button_enabled) {
            (PhaseKind::Enter, false) => Transition::Start(PhaseKind::Hold),
            (PhaseKind::Enter, true) => Transition::AwaitDismiss,
            (PhaseKind::Hold, _) => Transition::Start(PhaseKind::Exit),
            (PhaseKind::Exit, _) => Transition::DisposeSurface,
        }
    }
}

/// Outcome of one tick of the timeline
#[derive(Debug, Default, PartialEq)]
struct Tick {
    /// Last position written during the tick
    position: Option<Point>,
    /// The exit phase completed during the tick
    finished: bool,
}

/// The three phases of one telegraph and the state that links them.
///
/// Shared between the [`Telegraph`] and its [`HoverGate`].
pub(crate) struct Timeline {
    enter: Phase<Point>,
    hold: Phase<Point>,
    exit: Phase<Point>,
    button_enabled: bool,
    dismiss_requested: bool,
}

impl Timeline {
    fn new(config: &AnimationConfig) -> Self {
        let enter = Phase::interpolate(
            PhaseKind::Enter,
            config.initial_position(),
            config.final_position(),
            config.enter_duration(),
        )
        .timing(config.timing().clone());

        // Hold only waits for the dismissal when a button is present.
        let hold_duration = if config.button_enabled() {
            Duration::ZERO
        } else {
            config.hold_duration()
        };
        let hold = Phase::wait(PhaseKind::Hold, hold_duration);

        let exit = Phase::interpolate(
            PhaseKind::Exit,
            config.final_position(),
            config.initial_position(),
            config.exit_duration(),
        )
        .timing(config.timing().clone());

        Self {
            enter,
            hold,
            exit,
            button_enabled: config.button_enabled(),
            dismiss_requested: false,
        }
    }

    fn phase(&self, kind: PhaseKind) -> &Phase<Point> {
        match kind {
            PhaseKind::Enter => &self.enter,
            PhaseKind::Hold => &self.hold,
            PhaseKind::Exit => &self.exit,
        }
    }

    fn phase_mut(&mut self, kind: PhaseKind) -> &mut Phase<Point> {
        match kind {
            PhaseKind::Enter => &mut self.enter,
            PhaseKind::Hold => &mut self.hold,
            PhaseKind::Exit => &mut self.exit,
        }
    }

    /// The phase currently playing or suspended. Phases never overlap.
    fn active(&self) -> Option<PhaseKind> {
        [PhaseKind::Enter, PhaseKind::Hold, PhaseKind::Exit]
            .into_iter()
            .find(|kind| {
                matches!(
                    self.phase(*kind).state(),
                    PhaseState::Running | PhaseState::Suspended
                )
            })
    }

    fn all_done(&self) -> bool {
        self.enter.is_done() && self.hold.is_done() && self.exit.is_done()
    }

    /// Returns true if `kind` was started
    fn start(&mut self, kind: PhaseKind) -> bool {
        match self.phase_mut(kind).start() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Telegraph chain could not continue: {}", e);
                false
            }
        }
    }

    /// Advance the active phase by `dt`.
    ///
    /// Time left over when a phase completes is handed to the phase that
    /// follows it, so a tick spanning a phase boundary loses nothing.
    fn advance(&mut self, dt: Duration) -> Tick {
        let mut tick = Tick::default();
        let mut budget = Some(dt);

        while let Some(dt) = budget.take() {
            let Some(kind) = self.active() else {
                break;
            };
            let frame = self.phase_mut(kind).advance(dt);
            if frame.value.is_some() {
                tick.position = frame.value;
            }
            let Some(overflow) = frame.overflow else {
                break;
            };

            match Transition::after(kind, self.button_enabled) {
                Transition::Start(next) => {
                    if self.start(next) {
                        budget = Some(overflow);
                    }
                }
                Transition::AwaitDismiss => {
                    if self.dismiss_requested && self.start(PhaseKind::Hold) {
                        budget = Some(overflow);
                    }
                }
                Transition::DisposeSurface => tick.finished = true,
            }
        }

        tick
    }

    fn dismiss(&mut self) -> Result<(), TelegraphError> {
        if !self.button_enabled {
            return Err(TelegraphError::DismissDisabled);
        }
        if self.dismiss_requested {
            return Err(TelegraphError::AlreadyDismissed);
        }
        self.dismiss_requested = true;
        // Otherwise hold starts as soon as enter completes.
        if self.enter.is_done() {
            self.hold
                .start()
                .map_err(|_| TelegraphError::AlreadyDismissed)?;
        }
        Ok(())
    }

    fn in_position(&self) -> bool {
        self.enter.is_done() && !self.hold.is_done()
    }

    pub(crate) fn pointer_entered(&mut self) {
        if self.in_position() {
            self.hold.suspend();
        }
    }

    pub(crate) fn pointer_left(&mut self) {
        if self.in_position() {
            self.hold.resume();
        }
    }
}

/// A notification popup and the animation that carries it across the screen.
///
/// The telegraph holds only a weak reference to its surface: the windowing
/// layer owns the surface, the telegraph merely moves it and, at the end of
/// the exit phase, disposes it.
pub struct Telegraph<S: Surface> {
    title: String,
    description: String,
    config: AnimationConfig,
    surface: Weak<RefCell<S>>,
    timeline: Rc<RefCell<Timeline>>,
    disposed: bool,
    dispose_pending: bool,
}

impl<S: Surface> Telegraph<S> {
    /// Wire the chain for a realized surface. Nothing moves until [`show`](Self::show).
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        config: AnimationConfig,
        surface: &Rc<RefCell<S>>,
    ) -> Self {
        Self::build(title.into(), description.into(), config, surface, None)
    }

    /// Like [`new`](Self::new), using the default configuration resolved
    /// against the surface's size.
    pub fn with_default_config(
        title: impl Into<String>,
        description: impl Into<String>,
        surface: &Rc<RefCell<S>>,
    ) -> Self {
        let config = AnimationConfig::default_for(surface.borrow().size());
        Self::new(title, description, config, surface)
    }

    /// Like [`new`](Self::new), ringing `chime` once the telegraph is in place
    /// if the configuration enables audio.
    pub fn with_chime<C: Chime + 'static>(
        title: impl Into<String>,
        description: impl Into<String>,
        config: AnimationConfig,
        surface: &Rc<RefCell<S>>,
        chime: C,
    ) -> Self {
        Self::build(
            title.into(),
            description.into(),
            config,
            surface,
            Some(Box::new(chime)),
        )
    }

    fn build(
        title: String,
        description: String,
        config: AnimationConfig,
        surface: &Rc<RefCell<S>>,
        chime: Option<Box<dyn Chime>>,
    ) -> Self {
        let mut timeline = Timeline::new(&config);

        match chime {
            Some(mut cue) if config.audio_enabled() => {
                timeline.enter.on_done(move |_| chime::ring(&mut *cue));
            }
            Some(_) => log::debug!("Chime supplied but audio is disabled for \"{}\"", title),
            None => {}
        }

        let timeline = Rc::new(RefCell::new(timeline));

        if config.hover_gated() {
            surface
                .borrow_mut()
                .attach_hover_gate(HoverGate::new(Rc::downgrade(&timeline)));
        }

        Self {
            title,
            description,
            config,
            surface: Rc::downgrade(surface),
            timeline,
            disposed: false,
            dispose_pending: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Start sliding the telegraph in.
    pub fn show(&mut self) -> Result<(), TelegraphError> {
        {
            let mut timeline = self.timeline.borrow_mut();
            if self.disposed && timeline.enter.state() == PhaseState::Idle {
                return Err(TelegraphError::Disposed);
            }
            timeline
                .enter
                .start()
                .map_err(TelegraphError::AlreadyShown)?;
        }

        log::info!("Showing telegraph \"{}\"", self.title);
        if let Some(surface) = self.surface.upgrade() {
            surface
                .borrow_mut()
                .set_position(self.config.initial_position());
        }
        Ok(())
    }

    /// Send a button-enabled telegraph away.
    ///
    /// If the telegraph is still entering, it leaves right after arriving.
    pub fn dismiss(&mut self) -> Result<(), TelegraphError> {
        if self.disposed {
            return Err(TelegraphError::Disposed);
        }
        self.timeline.borrow_mut().dismiss()?;
        log::debug!("Telegraph \"{}\" dismissed", self.title);
        Ok(())
    }

    /// Advance the animation by `dt` of scheduler time.
    ///
    /// A disposal that found the surface busy is retried here instead.
    pub fn tick(&mut self, dt: Duration) {
        if self.disposed {
            return;
        }
        if self.dispose_pending {
            self.dispose();
            return;
        }

        let tick = self.timeline.borrow_mut().advance(dt);

        if let Some(position) = tick.position {
            if let Some(surface) = self.surface.upgrade() {
                surface.borrow_mut().set_position(position);
            }
        }

        if tick.finished {
            log::debug!("Telegraph \"{}\" finished", self.title);
            self.dispose();
        }
    }

    /// Whether the telegraph still needs ticks.
    ///
    /// A surface discarded by the user stops the telegraph regardless of its
    /// phases. Otherwise it runs until all three phases are done.
    pub fn is_running(&self) -> bool {
        let discarded = self.surface.upgrade().is_some_and(|surface| {
            surface
                .try_borrow()
                .is_ok_and(|surface| surface.is_discarded())
        });
        if discarded {
            return false;
        }
        !self.timeline.borrow().all_done()
    }

    /// Dispose the surface now, whatever the phases are doing.
    ///
    /// Safe to call any number of times; the surface is disposed at most once.
    /// Phases keep their state. If the surface is borrowed elsewhere the
    /// disposal is left pending and the next [`tick`](Self::tick) retries it.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let Some(surface) = self.surface.upgrade() else {
            log::debug!("Surface of \"{}\" already released", self.title);
            self.disposed = true;
            self.dispose_pending = false;
            return;
        };
        let Ok(mut cell) = surface.try_borrow_mut() else {
            log::warn!("Surface of \"{}\" is busy, dispose deferred", self.title);
            self.dispose_pending = true;
            return;
        };
        cell.dispose();
        self.disposed = true;
        self.dispose_pending = false;
        log::info!("Disposed telegraph \"{}\"", self.title);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether a scheduler should keep ticking this telegraph.
    ///
    /// Unlike [`is_running`](Self::is_running) this is false for a telegraph
    /// that was never shown or is already disposed, and true while a disposal
    /// waits for its surface.
    pub fn needs_ticks(&self) -> bool {
        if self.disposed {
            return false;
        }
        if self.dispose_pending {
            return true;
        }
        self.phase_state(PhaseKind::Enter) != PhaseState::Idle && self.is_running()
    }

    pub fn phase_state(&self, kind: PhaseKind) -> PhaseState {
        self.timeline.borrow().phase(kind).state()
    }

    /// Time spent in `kind` so far, excluding suspensions
    pub fn phase_elapsed(&self, kind: PhaseKind) -> Duration {
        self.timeline.borrow().phase(kind).elapsed()
    }
}

impl<S: Surface> std::fmt::Debug for Telegraph<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timeline = self.timeline.borrow();
        f.debug_struct("Telegraph")
            .field("title", &self.title)
            .field("enter", &timeline.enter)
            .field("hold", &timeline.hold)
            .field("exit", &timeline.exit)
            .field("disposed", &self.disposed)
            .field("dispose_pending", &self.dispose_pending)
            .finish()
    }
}
