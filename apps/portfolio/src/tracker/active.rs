//! Scroll-driven section tracking. The server only renders the initial
//! state; `observe` and `FrameThrottle` mirror what `assets/site.js` runs on
//! every scroll in the browser, and are driven here by the tests.

use serde::{Deserialize, Serialize};

use crate::sections::{Section, SECTIONS};

/// Distance of the trigger line from the top of the viewport.
pub const DEFAULT_TRIGGER_OFFSET: f64 = 100.0;

/// On-screen bounding box of one section, relative to the viewport top.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

#[cfg_attr(not(test), allow(dead_code))]
impl SectionBounds {
    pub fn straddles(&self, trigger: f64) -> bool {
        self.top <= trigger && self.bottom >= trigger
    }
}

#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    active: Section,
    #[cfg_attr(not(test), allow(dead_code))]
    trigger_offset: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_OFFSET)
    }
}

impl ActiveSectionTracker {
    pub fn new(trigger_offset: f64) -> Self {
        Self {
            active: Section::first(),
            trigger_offset,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recomputes the active section from the current layout.
    ///
    /// Sections are tried in `SECTIONS` order regardless of the order of
    /// `bounds`; the first whose box straddles the trigger line wins. When none
    /// does, the previous section is kept. Returns true when the active
    /// section changed.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn observe(&mut self, bounds: &[SectionBounds]) -> bool {
        let hit = SECTIONS.iter().copied().find(|section| {
            bounds
                .iter()
                .any(|b| b.section == *section && b.straddles(self.trigger_offset))
        });

        match hit {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

/// Coalesces scroll bursts into one recomputation per display frame.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

#[cfg_attr(not(test), allow(dead_code))]
impl FrameThrottle {
    /// Registers a scroll event. Returns true when the caller must schedule a
    /// frame callback; false when one is already pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Consumes the pending request at frame time. Returns whether a
    /// recomputation is due.
    pub fn on_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
