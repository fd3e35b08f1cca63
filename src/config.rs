//! Animation configuration.
//!
//! Configuration is built in two steps because the final endpoints depend on
//! the size of the realized surface:
//!
//! ```ignore
//! let draft = AnimationConfig::draft()
//!     .hold_duration_ms(5000)
//!     .anchor(Anchor::BOTTOM | Anchor::RIGHT);
//! let surface = realize_surface(&draft);
//! let config = draft.finalize(surface.size())?;
//! let telegraph = Telegraph::new("Saved", "All changes written", config, &surface);
//! ```

use std::time::Duration;

use bitflags::bitflags;

use crate::animation::TimingFunction;
use crate::error::ConfigError;
use crate::geometry::{Point, Size};
use crate::icon::Icon;
use crate::phase::PhaseKind;

bitflags! {
    /// Screen edges a telegraph is placed against
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Anchor: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

/// Mutable configuration, filled in before the surface exists.
#[derive(Clone, Debug)]
pub struct DraftConfig {
    pub enter_duration_ms: i64,
    pub hold_duration_ms: i64,
    pub exit_duration_ms: i64,
    /// Keep the telegraph on screen until it is dismissed explicitly
    pub button_enabled: bool,
    /// Pause the hold phase while the pointer is over the surface
    pub stop_on_hover: bool,
    /// Ring the chime once the telegraph is in place
    pub audio_enabled: bool,
    pub anchor: Anchor,
    /// Size of the screen the telegraph is placed on
    pub screen: Size,
    /// Distance kept from the anchored screen edges
    pub margin: f32,
    /// Overrides the computed off-screen position
    pub initial_position: Option<Point>,
    /// Overrides the computed on-screen position
    pub final_position: Option<Point>,
    /// Easing of the enter and exit phases
    pub timing: TimingFunction,
    pub icon: Option<Icon>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            enter_duration_ms: 500,
            hold_duration_ms: 3000,
            exit_duration_ms: 500,
            button_enabled: false,
            stop_on_hover: true,
            audio_enabled: false,
            anchor: Anchor::TOP | Anchor::RIGHT,
            screen: Size::new(1920.0, 1080.0),
            margin: 10.0,
            initial_position: None,
            final_position: None,
            timing: TimingFunction::Linear,
            icon: None,
        }
    }
}

impl DraftConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_duration_ms(mut self, millis: i64) -> Self {
        self.enter_duration_ms = millis;
        self
    }

    pub fn hold_duration_ms(mut self, millis: i64) -> Self {
        self.hold_duration_ms = millis;
        self
    }

    pub fn exit_duration_ms(mut self, millis: i64) -> Self {
        self.exit_duration_ms = millis;
        self
    }

    pub fn button_enabled(mut self, enabled: bool) -> Self {
        self.button_enabled = enabled;
        self
    }

    pub fn stop_on_hover(mut self, enabled: bool) -> Self {
        self.stop_on_hover = enabled;
        self
    }

    pub fn audio_enabled(mut self, enabled: bool) -> Self {
        self.audio_enabled = enabled;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn initial_position(mut self, position: impl Into<Point>) -> Self {
        self.initial_position = Some(position.into());
        self
    }

    pub fn final_position(mut self, position: impl Into<Point>) -> Self {
        self.final_position = Some(position.into());
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Reject durations that cannot describe a phase.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (phase, millis) in [
            (PhaseKind::Enter, self.enter_duration_ms),
            (PhaseKind::Hold, self.hold_duration_ms),
            (PhaseKind::Exit, self.exit_duration_ms),
        ] {
            if millis < 0 {
                return Err(ConfigError::NegativeDuration { phase, millis });
            }
        }
        Ok(())
    }

    /// Validate and resolve endpoints against the realized surface size.
    pub fn finalize(self, surface_size: Size) -> Result<AnimationConfig, ConfigError> {
        self.validate()?;
        Ok(self.resolve(surface_size))
    }

    // Callers must have validated the durations.
    fn resolve(self, surface_size: Size) -> AnimationConfig {
        let (computed_initial, computed_final) = self.placement(surface_size);
        let config = AnimationConfig {
            initial_position: self.initial_position.unwrap_or(computed_initial),
            final_position: self.final_position.unwrap_or(computed_final),
            enter_duration: millis(self.enter_duration_ms),
            hold_duration: millis(self.hold_duration_ms),
            exit_duration: millis(self.exit_duration_ms),
            button_enabled: self.button_enabled,
            stop_on_hover: self.stop_on_hover,
            audio_enabled: self.audio_enabled,
            surface_size,
            timing: self.timing,
            icon: self.icon,
        };
        log::debug!(
            "Resolved telegraph path {:?} -> {:?} for surface {}x{}",
            config.initial_position,
            config.final_position,
            surface_size.width,
            surface_size.height
        );
        config
    }

    /// Off-screen and on-screen positions implied by the anchor.
    fn placement(&self, size: Size) -> (Point, Point) {
        let x = if self.anchor.contains(Anchor::RIGHT) && !self.anchor.contains(Anchor::LEFT) {
            self.screen.width - size.width - self.margin
        } else if self.anchor.contains(Anchor::LEFT) && !self.anchor.contains(Anchor::RIGHT) {
            self.margin
        } else {
            (self.screen.width - size.width) / 2.0
        };

        let (initial_y, final_y) =
            if self.anchor.contains(Anchor::BOTTOM) && !self.anchor.contains(Anchor::TOP) {
                (
                    self.screen.height,
                    self.screen.height - size.height - self.margin,
                )
            } else {
                (-size.height, self.margin)
            };

        (Point::new(x, initial_y), Point::new(x, final_y))
    }
}

fn millis(value: i64) -> Duration {
    Duration::from_millis(value.max(0) as u64)
}

/// Finalized, immutable configuration of one telegraph.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    initial_position: Point,
    final_position: Point,
    enter_duration: Duration,
    hold_duration: Duration,
    exit_duration: Duration,
    button_enabled: bool,
    stop_on_hover: bool,
    audio_enabled: bool,
    surface_size: Size,
    timing: TimingFunction,
    icon: Option<Icon>,
}

impl AnimationConfig {
    /// Start a new configuration from the defaults
    pub fn draft() -> DraftConfig {
        DraftConfig::default()
    }

    /// The default configuration, resolved for a surface of the given size
    pub fn default_for(surface_size: Size) -> Self {
        DraftConfig::default().resolve(surface_size)
    }

    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    pub fn final_position(&self) -> Point {
        self.final_position
    }

    pub fn enter_duration(&self) -> Duration {
        self.enter_duration
    }

    pub fn hold_duration(&self) -> Duration {
        self.hold_duration
    }

    pub fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    /// Sum of all three phase durations
    pub fn total_duration(&self) -> Duration {
        self.enter_duration + self.hold_duration + self.exit_duration
    }

    pub fn button_enabled(&self) -> bool {
        self.button_enabled
    }

    pub fn stop_on_hover(&self) -> bool {
        self.stop_on_hover
    }

    /// Whether the hover gate applies: only timed telegraphs pause on hover
    pub fn hover_gated(&self) -> bool {
        !self.button_enabled && self.stop_on_hover
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    pub fn timing(&self) -> &TimingFunction {
        &self.timing
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POPUP: Size = Size {
        width: 300.0,
        height: 80.0,
    };

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(DraftConfig::default().validate(), Ok(()));
        let config = AnimationConfig::default_for(POPUP);
        assert_eq!(config.enter_duration(), Duration::from_millis(500));
        assert_eq!(config.hold_duration(), Duration::from_millis(3000));
        assert_eq!(config.exit_duration(), Duration::from_millis(500));
        assert!(config.hover_gated());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = AnimationConfig::draft()
            .hold_duration_ms(-1)
            .finalize(POPUP)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NegativeDuration {
                phase: PhaseKind::Hold,
                millis: -1
            }
        );
    }

    #[test]
    fn test_first_negative_duration_reported() {
        let draft = AnimationConfig::draft()
            .enter_duration_ms(-5)
            .exit_duration_ms(-7);
        assert_eq!(
            draft.validate(),
            Err(ConfigError::NegativeDuration {
                phase: PhaseKind::Enter,
                millis: -5
            })
        );
    }

    #[test]
    fn test_zero_durations_allowed() {
        let config = AnimationConfig::draft()
            .enter_duration_ms(0)
            .hold_duration_ms(0)
            .exit_duration_ms(0)
            .finalize(POPUP)
            .unwrap();
        assert_eq!(config.total_duration(), Duration::ZERO);
    }

    #[test]
    fn test_top_right_placement() {
        let config = AnimationConfig::default_for(POPUP);
        assert_eq!(config.initial_position(), Point::new(1610.0, -80.0));
        assert_eq!(config.final_position(), Point::new(1610.0, 10.0));
    }

    #[test]
    fn test_bottom_left_placement() {
        let config = AnimationConfig::draft()
            .anchor(Anchor::BOTTOM | Anchor::LEFT)
            .screen(Size::new(800.0, 600.0))
            .margin(20.0)
            .finalize(POPUP)
            .unwrap();
        assert_eq!(config.initial_position(), Point::new(20.0, 600.0));
        assert_eq!(config.final_position(), Point::new(20.0, 500.0));
    }

    #[test]
    fn test_centered_when_no_horizontal_edge() {
        let config = AnimationConfig::draft()
            .anchor(Anchor::TOP)
            .screen(Size::new(800.0, 600.0))
            .finalize(POPUP)
            .unwrap();
        assert_eq!(config.final_position().x, 250.0);
    }

    #[test]
    fn test_explicit_positions_win() {
        let config = AnimationConfig::draft()
            .initial_position((0.0, 0.0))
            .final_position((100.0, 50.0))
            .finalize(POPUP)
            .unwrap();
        assert_eq!(config.initial_position(), Point::ORIGIN);
        assert_eq!(config.final_position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_button_disables_hover_gate() {
        let config = AnimationConfig::draft()
            .button_enabled(true)
            .stop_on_hover(true)
            .finalize(POPUP)
            .unwrap();
        assert!(!config.hover_gated());
    }
}
