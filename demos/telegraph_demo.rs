//! Shows two telegraphs on a pretend screen and prints where they move.
//!
//! Run with `RUST_LOG=debug` to follow the phase transitions.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use telegraph::prelude::*;

/// A surface that only remembers where it is
struct ConsoleSurface {
    name: String,
    size: Size,
    position: Point,
    frames: u32,
    gate: Option<HoverGate>,
}

impl ConsoleSurface {
    fn new(name: &str, draft: &DraftConfig) -> Self {
        // A real toolkit would measure the text here.
        let width = 240.0 + if draft.icon.is_some() { 48.0 } else { 0.0 };
        Self {
            name: name.to_string(),
            size: Size::new(width, 72.0),
            position: Point::ORIGIN,
            frames: 0,
            gate: None,
        }
    }
}

impl Surface for ConsoleSurface {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
        self.frames += 1;
        if self.frames % 10 == 0 {
            println!(
                "{:>10}: ({:7.1}, {:7.1})",
                self.name, position.x, position.y
            );
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn attach_hover_gate(&mut self, gate: HoverGate) {
        self.gate = Some(gate);
    }

    fn dispose(&mut self) {
        println!("{:>10}: gone after {} frames", self.name, self.frames);
    }

    fn is_discarded(&self) -> bool {
        false
    }
}

fn main() {
    env_logger::init();

    let mut telegraphs = Vec::new();

    for (title, anchor, icon) in [
        ("Saved", Anchor::TOP | Anchor::RIGHT, Icon::DocumentAdd),
        ("New mail", Anchor::BOTTOM | Anchor::LEFT, Icon::MailReceive),
    ] {
        let draft = AnimationConfig::draft()
            .enter_duration_ms(300)
            .hold_duration_ms(1200)
            .exit_duration_ms(300)
            .anchor(anchor)
            .timing(TimingFunction::EaseOut)
            .icon(icon);
        let surface = Rc::new(RefCell::new(ConsoleSurface::new(title, &draft)));
        let config = draft
            .finalize(surface.borrow().size())
            .expect("demo durations are valid");
        println!("{:>10}: icon {}", title, icon.resource_path());

        let mut telegraph = Telegraph::new(title, "demo", config, &surface);
        telegraph.show().expect("fresh telegraph");
        telegraphs.push((telegraph, surface));
    }

    let (mut telegraphs, surfaces): (Vec<_>, Vec<_>) = telegraphs.into_iter().unzip();

    // Hover the first one for a moment once it has arrived.
    let gate = surfaces[0].borrow().gate.clone();
    if let Some(gate) = gate {
        for telegraph in telegraphs.iter_mut() {
            telegraph.tick(Duration::from_millis(400));
        }
        gate.handle(&PointerEvent::Enter);
        for telegraph in telegraphs.iter_mut() {
            telegraph.tick(Duration::from_millis(500));
        }
        gate.handle(&PointerEvent::Leave);
    }

    if let Err(e) = FrameDriver::default().run(&mut telegraphs) {
        eprintln!("frame driver failed: {}", e);
    }
}
