/// Collapses any number of requests between two frames into a single callback.
///
/// `request` schedules only when nothing is pending; `take` consumes the pending flag when the
/// frame fires.
#[derive(Clone, Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
    requested: u64,
    coalesced: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this call scheduled a new frame, `false` if one was already pending.
    pub fn request(&mut self) -> bool {
        self.requested = self.requested.saturating_add(1);
        if self.pending {
            self.coalesced = self.coalesced.saturating_add(1);
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears and returns the pending flag.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Requests absorbed by an already pending frame.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/frame.rs"]
mod tests;
