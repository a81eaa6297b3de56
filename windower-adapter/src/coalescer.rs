use crate::{FrameScheduler, FrameToken};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoalescerState {
    #[default]
    Idle,
    Pending(FrameToken),
}

/// Collapses bursts of scroll/resize notifications into at most one pass per frame.
///
/// Each request cancels the frame scheduled by the previous one, so only the last request of a
/// burst fires, and the pass it triggers reads geometry at fire time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Coalescer {
    state: CoalescerState,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CoalescerState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, CoalescerState::Pending(_))
    }

    /// Schedules a frame, replacing any frame scheduled earlier.
    pub fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> FrameToken {
        if let CoalescerState::Pending(prev) = self.state {
            scheduler.cancel(prev);
        }
        let token = scheduler.schedule();
        vtrace!(token = token.0, "Coalescer::request");
        self.state = CoalescerState::Pending(token);
        token
    }

    /// Handles a fired frame.
    ///
    /// Returns `true` (and goes idle) only for the pending token; stale tokens are ignored.
    pub fn fire(&mut self, token: FrameToken) -> bool {
        match self.state {
            CoalescerState::Pending(pending) if pending == token => {
                self.state = CoalescerState::Idle;
                true
            }
            _ => {
                vtrace!(token = token.0, "Coalescer::fire: stale token");
                false
            }
        }
    }

    /// Cancels the pending frame, if any.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let CoalescerState::Pending(prev) = self.state {
            scheduler.cancel(prev);
        }
        self.state = CoalescerState::Idle;
    }
}
