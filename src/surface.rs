use crate::geometry::{Point, Size};
use crate::hover::HoverGate;

/// The window a telegraph is drawn in.
///
/// Implemented by the windowing layer. The surface owns no animation logic:
/// a [`Telegraph`](crate::telegraph::Telegraph) moves it around through
/// [`set_position`](Surface::set_position) and tears it down with
/// [`dispose`](Surface::dispose) once the exit phase is over.
pub trait Surface {
    /// Current position of the surface
    fn position(&self) -> Point;

    /// Move the surface. Called once per tick while a phase interpolates.
    fn set_position(&mut self, position: Point);

    /// Realized size, known once the surface has been laid out
    fn size(&self) -> Size;

    /// Deliver pointer enter/leave events to `gate` from now on.
    fn attach_hover_gate(&mut self, gate: HoverGate);

    /// Release the surface. Called at most once per telegraph.
    fn dispose(&mut self);

    /// Whether the user dismissed the surface out of band, for example with
    /// a close control.
    fn is_discarded(&self) -> bool;
}
