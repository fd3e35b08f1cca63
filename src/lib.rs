//! Telegraphs: transient notification popups.
//!
//! A telegraph slides its surface onto the screen, keeps it there for a while
//! and slides it away again, then disposes it. Rendering is left to the
//! windowing layer, which implements [`Surface`](surface::Surface) and calls
//! [`Telegraph::tick`](telegraph::Telegraph::tick) once per frame.
//!
//! ```ignore
//! use telegraph::prelude::*;
//!
//! let draft = AnimationConfig::draft().hold_duration_ms(4000);
//! let surface = Rc::new(RefCell::new(MyPopup::new("Build finished", &draft)));
//! let config = draft.finalize(surface.borrow().size())?;
//!
//! let mut telegraph = Telegraph::new("Build finished", "All 42 tests passed", config, &surface);
//! telegraph.show()?;
//!
//! // in the frame callback
//! telegraph.tick(frame_time);
//! ```

pub mod animation;
pub mod chime;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod icon;
pub mod phase;
pub mod surface;
pub mod telegraph;

pub mod prelude {
    pub use crate::animation::{Animatable, TimingFunction};
    pub use crate::chime::Chime;
    pub use crate::config::{Anchor, AnimationConfig, DraftConfig};
    pub use crate::driver::FrameDriver;
    pub use crate::error::{ChimeError, ConfigError, DriverError, PhaseError, TelegraphError};
    pub use crate::geometry::{Point, Size};
    pub use crate::hover::{EventResponse, HoverGate, PointerEvent};
    pub use crate::icon::Icon;
    pub use crate::phase::{Frame, Phase, PhaseKind, PhaseState};
    pub use crate::surface::Surface;
    pub use crate::telegraph::{Telegraph, Transition};
}
