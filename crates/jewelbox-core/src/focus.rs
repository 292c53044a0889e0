//! Global focus state: which ring is in the try-on pose and whether a
//! transition is running.

use crate::scene::RingId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusPhase {
    #[default]
    Idle,
    /// Ring and camera are animating towards the focus pose.
    Focusing,
    /// Ring is in the focus pose and accepts drag rotation.
    Focused,
    /// Ring and camera are animating back to the layout.
    Closing,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FocusError {
    #[error("already focusing a ring or animating")]
    Busy,
    #[error("no ring is focused")]
    NothingFocused,
    #[error("a transition is still running")]
    Animating,
    #[error("unknown ring {0}")]
    UnknownRing(RingId),
    #[error("no ring group with id {0:?}")]
    UnknownName(String),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FocusState {
    phase: FocusPhase,
    ring: Option<RingId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    #[inline]
    pub fn focused_ring(&self) -> Option<RingId> {
        self.ring
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FocusPhase::Focusing | FocusPhase::Closing)
    }

    /// A ring is focused or a transition is running.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.ring.is_some() || self.is_animating()
    }

    #[inline]
    pub fn can_interact(&self) -> bool {
        !self.is_busy()
    }

    pub fn begin_focus(&mut self, ring: RingId) -> Result<(), FocusError> {
        if self.is_busy() {
            return Err(FocusError::Busy);
        }
        self.phase = FocusPhase::Focusing;
        self.ring = Some(ring);
        Ok(())
    }

    pub fn finish_focus(&mut self) {
        if self.phase == FocusPhase::Focusing {
            self.phase = FocusPhase::Focused;
        }
    }

    /// Start closing. Returns the ring being returned to its layout.
    pub fn begin_close(&mut self) -> Result<RingId, FocusError> {
        if self.is_animating() {
            return Err(FocusError::Animating);
        }
        let ring = self.ring.ok_or(FocusError::NothingFocused)?;
        self.phase = FocusPhase::Closing;
        Ok(ring)
    }

    pub fn finish_close(&mut self) {
        if self.phase == FocusPhase::Closing {
            self.phase = FocusPhase::Idle;
            self.ring = None;
        }
    }
}
