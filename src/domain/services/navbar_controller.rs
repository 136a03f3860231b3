//! Hide-on-scroll navbar offset
//!
//! The navbar slides up while the user scrolls down (once past the
//! threshold) and slides back in on any upward scroll. One pixel of scroll
//! moves it by one percent of its height.

use crate::shared::constants::{NAVBAR_HIDDEN_OFFSET, NAVBAR_HIDE_THRESHOLD, NAVBAR_VISIBLE_OFFSET};

/// Clamp an offset into `[NAVBAR_HIDDEN_OFFSET, NAVBAR_VISIBLE_OFFSET]`
pub fn clamp_offset(offset: f64) -> f64 {
    if offset.is_nan() {
        return NAVBAR_VISIBLE_OFFSET;
    }
    offset.clamp(NAVBAR_HIDDEN_OFFSET, NAVBAR_VISIBLE_OFFSET)
}

/// Offset after a scroll of `delta` pixels that landed at `scroll_y`
pub fn next_offset(current: f64, scroll_y: f64, delta: f64) -> f64 {
    let next = if delta > 0.0 && scroll_y > NAVBAR_HIDE_THRESHOLD {
        current - delta
    } else if delta < 0.0 {
        current - delta
    } else {
        current
    };
    clamp_offset(next)
}
