use super::{SectionId, SectionSpan};
use crate::domain::services::{next_offset, resolve_active_section};
use crate::shared::constants::NAVBAR_VISIBLE_OFFSET;

/// One measurement of the viewport, taken after a scroll event
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Registered sections in document order, `None` if not attached yet
    pub spans: Vec<(SectionId, Option<SectionSpan>)>,
}

/// Navigation state driven by scrolling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub last_scroll_y: f64,
    /// translateY percentage applied to the navbar
    pub navbar_offset: f64,
    pub active_section: SectionId,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            navbar_offset: NAVBAR_VISIBLE_OFFSET,
            active_section: SectionId::About,
        }
    }
}

impl ScrollState {
    /// Fold a new sample into the state.
    /// The active section is kept when no section straddles the midpoint.
    pub fn on_scroll(&mut self, sample: &ScrollSample) {
        let delta = sample.scroll_y - self.last_scroll_y;

        self.navbar_offset = next_offset(self.navbar_offset, sample.scroll_y, delta);

        if let Some(section) = resolve_active_section(&sample.spans, sample.viewport_height) {
            self.active_section = section;
        }

        self.last_scroll_y = sample.scroll_y;
    }

    /// The state after `sample`, or `None` when the sample changes nothing
    pub fn after_scroll(&self, sample: &ScrollSample) -> Option<ScrollState> {
        let mut next = *self;
        next.on_scroll(sample);
        (next != *self).then_some(next)
    }

    pub fn navbar_transform(&self) -> String {
        format!("translateY({}%)", self.navbar_offset)
    }
}
