use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use telegraph::prelude::*;

const POPUP: Size = Size {
    width: 320.0,
    height: 90.0,
};

#[derive(Default)]
struct MockSurface {
    position: Point,
    writes: usize,
    disposals: u32,
    discarded: bool,
    gate: Option<HoverGate>,
}

impl MockSurface {
    fn hover(&self, event: PointerEvent) -> EventResponse {
        self.gate
            .as_ref()
            .map_or(EventResponse::Ignored, |gate| gate.handle(&event))
    }
}

impl Surface for MockSurface {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        self.writes += 1;
    }

    fn size(&self) -> Size {
        POPUP
    }

    fn attach_hover_gate(&mut self, gate: HoverGate) {
        self.gate = Some(gate);
    }

    fn dispose(&mut self) {
        self.disposals += 1;
    }

    fn is_discarded(&self) -> bool {
        self.discarded
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn build(draft: DraftConfig) -> (Telegraph<MockSurface>, Rc<RefCell<MockSurface>>) {
    let surface = Rc::new(RefCell::new(MockSurface::default()));
    let config = draft.finalize(surface.borrow().size()).unwrap();
    let telegraph = Telegraph::new("Upload complete", "report.pdf", config, &surface);
    (telegraph, surface)
}

#[test]
fn hover_scenario() {
    init_logging();
    let (mut telegraph, surface) = build(
        AnimationConfig::draft()
            .enter_duration_ms(300)
            .hold_duration_ms(3000)
            .exit_duration_ms(300)
            .button_enabled(false)
            .stop_on_hover(true),
    );
    let final_position = telegraph.config().final_position();
    let initial_position = telegraph.config().initial_position();

    telegraph.show().unwrap();
    assert_eq!(surface.borrow().position, initial_position);

    // t = 300: in place, hold begins
    telegraph.tick(ms(300));
    assert_eq!(telegraph.phase_state(PhaseKind::Enter), PhaseState::Done);
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Running);
    assert_eq!(surface.borrow().position, final_position);

    // t = 301: pointer enters
    telegraph.tick(ms(1));
    assert_eq!(
        surface.borrow().hover(PointerEvent::Enter),
        EventResponse::Handled
    );
    assert_eq!(
        telegraph.phase_state(PhaseKind::Hold),
        PhaseState::Suspended
    );

    // t = 1000: pointer leaves, hold has not moved
    telegraph.tick(ms(699));
    assert_eq!(telegraph.phase_elapsed(PhaseKind::Hold), ms(1));
    surface.borrow().hover(PointerEvent::Leave);
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Running);

    // 2999 more unsuspended units finish hold
    telegraph.tick(ms(2998));
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Running);
    telegraph.tick(ms(1));
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Done);
    assert_eq!(telegraph.phase_state(PhaseKind::Exit), PhaseState::Running);
    assert!(telegraph.is_running());

    telegraph.tick(ms(300));
    assert_eq!(surface.borrow().position, initial_position);
    assert_eq!(surface.borrow().disposals, 1);
    assert!(!telegraph.is_running());
}

#[test]
fn chain_finishes_after_total_duration() {
    init_logging();
    for (enter, hold, exit) in [
        (300, 3000, 300),
        (17, 5, 33),
        (1000, 0, 1),
        (0, 250, 0),
        (0, 0, 0),
    ] {
        let (mut telegraph, surface) = build(
            AnimationConfig::draft()
                .enter_duration_ms(enter)
                .hold_duration_ms(hold)
                .exit_duration_ms(exit),
        );
        telegraph.show().unwrap();

        let total = ms((enter + hold + exit) as u64);
        let frame = ms(16);
        let mut elapsed = Duration::ZERO;
        while elapsed + frame < total {
            telegraph.tick(frame);
            elapsed += frame;
            assert!(telegraph.is_running(), "stopped early at {:?}", elapsed);
        }
        telegraph.tick(total - elapsed);

        assert!(
            !telegraph.is_running(),
            "still running after {:?}",
            total
        );
        assert_eq!(surface.borrow().disposals, 1);

        // The scheduler may keep ticking a little longer.
        telegraph.tick(frame);
        assert_eq!(surface.borrow().disposals, 1);
    }
}

#[test]
fn hover_outside_hold_is_ignored() {
    init_logging();
    let (mut telegraph, surface) = build(
        AnimationConfig::draft()
            .enter_duration_ms(100)
            .hold_duration_ms(100)
            .exit_duration_ms(100),
    );
    telegraph.show().unwrap();

    // Still entering
    telegraph.tick(ms(50));
    surface.borrow().hover(PointerEvent::Enter);
    telegraph.tick(ms(100));
    assert_eq!(telegraph.phase_elapsed(PhaseKind::Hold), ms(50));
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Running);

    // Already leaving
    telegraph.tick(ms(60));
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Done);
    surface.borrow().hover(PointerEvent::Enter);
    surface.borrow().hover(PointerEvent::Leave);
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Done);
    telegraph.tick(ms(90));
    assert!(!telegraph.is_running());
}

#[test]
fn other_pointer_events_are_ignored() {
    let (mut telegraph, surface) = build(AnimationConfig::draft());
    telegraph.show().unwrap();
    telegraph.tick(ms(500));
    for event in [
        PointerEvent::Move { x: 4.0, y: 2.0 },
        PointerEvent::Down,
        PointerEvent::Up,
    ] {
        assert_eq!(surface.borrow().hover(event), EventResponse::Ignored);
    }
    assert_eq!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Running);
}

#[test]
fn show_twice_keeps_progress() {
    let (mut telegraph, surface) = build(AnimationConfig::draft());
    telegraph.show().unwrap();
    telegraph.tick(ms(250));
    let position = surface.borrow().position;

    let err = telegraph.show().unwrap_err();
    assert_eq!(
        err,
        TelegraphError::AlreadyShown(PhaseError::AlreadyStarted(PhaseKind::Enter))
    );
    assert_eq!(telegraph.phase_elapsed(PhaseKind::Enter), ms(250));
    assert_eq!(surface.borrow().position, position);
}

#[test]
fn negative_duration_rejected_before_telegraph_exists() {
    let surface = Rc::new(RefCell::new(MockSurface::default()));
    let result = AnimationConfig::draft()
        .exit_duration_ms(-300)
        .finalize(surface.borrow().size());
    assert_eq!(
        result.unwrap_err(),
        ConfigError::NegativeDuration {
            phase: PhaseKind::Exit,
            millis: -300
        }
    );
    assert!(surface.borrow().gate.is_none());
}

#[test]
fn dispose_twice_disposes_once() {
    let (mut telegraph, surface) = build(AnimationConfig::draft());
    telegraph.show().unwrap();
    telegraph.tick(ms(100));
    telegraph.dispose();
    telegraph.dispose();
    assert_eq!(surface.borrow().disposals, 1);

    let writes = surface.borrow().writes;
    telegraph.tick(ms(100));
    assert_eq!(surface.borrow().writes, writes);
}

#[test]
fn dispose_without_show() {
    let (mut telegraph, surface) = build(AnimationConfig::draft());
    telegraph.dispose();
    assert_eq!(surface.borrow().disposals, 1);
    assert_eq!(surface.borrow().writes, 0);
}

#[test]
fn discarded_surface_overrides_timeline() {
    let (mut telegraph, surface) = build(AnimationConfig::draft().button_enabled(true));
    telegraph.show().unwrap();
    telegraph.tick(ms(10_000));
    assert!(telegraph.is_running());

    surface.borrow_mut().discarded = true;
    assert!(!telegraph.is_running());
    assert_ne!(telegraph.phase_state(PhaseKind::Hold), PhaseState::Done);
}

#[test]
fn button_telegraph_leaves_on_dismiss() {
    let (mut telegraph, surface) = build(
        AnimationConfig::draft()
            .button_enabled(true)
            .enter_duration_ms(200)
            .exit_duration_ms(200),
    );
    assert!(surface.borrow().gate.is_none());
    telegraph.show().unwrap();
    telegraph.tick(ms(200));
    telegraph.tick(ms(30_000));
    assert!(telegraph.is_running());
    assert_eq!(surface.borrow().disposals, 0);

    telegraph.dismiss().unwrap();
    telegraph.tick(ms(100));
    assert_eq!(telegraph.phase_state(PhaseKind::Exit), PhaseState::Running);
    telegraph.tick(ms(100));
    assert_eq!(surface.borrow().disposals, 1);
    assert!(!telegraph.is_running());
}

#[test]
fn default_config_uses_surface_size() {
    let surface = Rc::new(RefCell::new(MockSurface::default()));
    let telegraph = Telegraph::with_default_config("Hello", "World", &surface);
    assert_eq!(telegraph.title(), "Hello");
    assert_eq!(telegraph.description(), "World");
    assert_eq!(telegraph.config().surface_size(), POPUP);
    assert_eq!(
        telegraph.config().final_position(),
        Point::new(1920.0 - 320.0 - 10.0, 10.0)
    );
    assert!(surface.borrow().gate.is_some());
}

#[test]
fn telegraphs_are_independent() {
    let (mut first, first_surface) = build(AnimationConfig::draft());
    let (mut second, second_surface) = build(AnimationConfig::draft());
    first.show().unwrap();
    second.show().unwrap();
    first.tick(ms(600));
    second.tick(ms(600));

    first_surface.borrow().hover(PointerEvent::Enter);
    first.tick(ms(5000));
    second.tick(ms(5000));

    assert!(first.is_running());
    assert!(!second.is_running());
    assert_eq!(first_surface.borrow().disposals, 0);
    assert_eq!(second_surface.borrow().disposals, 1);
}
