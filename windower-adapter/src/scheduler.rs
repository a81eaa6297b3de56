use alloc::vec::Vec;

/// Identifies one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameToken(pub u64);

/// A `requestAnimationFrame`-style capability.
///
/// The host's event loop delivers every fired token to
/// [`crate::WindowEngine::on_frame`] before the next paint. A token fires at most once, and a
/// cancelled token never fires.
pub trait FrameScheduler {
    fn schedule(&mut self) -> FrameToken;

    fn cancel(&mut self, token: FrameToken);
}

/// A frame scheduler for hosts that drive frames from their own loop (terminal UIs, tests).
///
/// Each loop iteration calls [`FrameQueue::take_frame`] and hands the returned tokens to the
/// engine. Frames requested while those tokens are processed land in the next frame.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameToken>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_scheduled(&self, token: FrameToken) -> bool {
        self.pending.contains(&token)
    }

    /// Takes every token due in this frame.
    pub fn take_frame(&mut self) -> Vec<FrameToken> {
        core::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&mut self) -> FrameToken {
        self.next_id = self.next_id.wrapping_add(1);
        let token = FrameToken(self.next_id);
        self.pending.push(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        self.pending.retain(|&t| t != token);
    }
}
