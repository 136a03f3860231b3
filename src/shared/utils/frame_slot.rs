use std::cell::Cell;

/// The animation frame requested for the next scroll measurement.
///
/// Scroll events that arrive while a frame is pending are folded into it, so
/// the viewport is measured at most once per frame.
#[derive(Debug, Default)]
pub struct FrameSlot {
    id: Cell<Option<i32>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.id.get().is_some()
    }

    /// Request a frame through `request` unless one is already pending.
    /// Returns `Ok(true)` when a new frame was requested.
    pub fn request_with<E>(
        &self,
        request: impl FnOnce() -> std::result::Result<i32, E>,
    ) -> std::result::Result<bool, E> {
        if self.is_pending() {
            return Ok(false);
        }
        let id = request()?;
        self.id.set(Some(id));
        Ok(true)
    }

    /// Called when the pending frame runs
    pub fn complete(&self) {
        self.id.set(None);
    }

    /// Take the pending frame id so the caller can cancel it
    pub fn cancel(&self) -> Option<i32> {
        self.id.take()
    }
}
