use crate::error::ChimeError;

/// Audio cue played once a telegraph has slid into place.
///
/// Playback is fire-and-forget: implementations should hand the sound to an
/// audio backend and return immediately. A failure is logged by the caller
/// and never interrupts the animation.
pub trait Chime {
    fn ring(&mut self) -> Result<(), ChimeError>;
}

impl<F> Chime for F
where
    F: FnMut() -> Result<(), ChimeError>,
{
    fn ring(&mut self) -> Result<(), ChimeError> {
        self()
    }
}

/// Ring `chime`, swallowing errors.
pub(crate) fn ring(chime: &mut dyn Chime) {
    if let Err(e) = chime.ring() {
        log::warn!("Telegraph chime failed: {}", e);
    }
}
