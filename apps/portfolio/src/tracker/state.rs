//! Shared active-section state. Page renders construct it and read the
//! initial section through the two consumers; the scroll path
//! (`on_scroll`, `on_frame`, `Viewport`, `changed`) is the same protocol
//! `assets/site.js` runs in the browser.

use tokio::sync::watch;
use tracing::debug;

use crate::sections::{Section, SECTIONS};
use crate::tracker::active::{ActiveSectionTracker, FrameThrottle, SectionBounds};

/// Source of section layout. `None` means there is no viewport to measure
/// (e.g. rendering outside a browser); tracking is skipped, not failed.
#[cfg_attr(not(test), allow(dead_code))]
pub trait Viewport {
    fn section_bounds(&self) -> Option<Vec<SectionBounds>>;
}

/// The one shared "active section" value. Scroll events feed it, consumers
/// subscribe to it.
#[derive(Debug)]
pub struct ScrollState {
    tracker: ActiveSectionTracker,
    throttle: FrameThrottle,
    tx: watch::Sender<Section>,
}

impl ScrollState {
    pub fn new(trigger_offset: f64) -> Self {
        let tracker = ActiveSectionTracker::new(trigger_offset);
        let (tx, _) = watch::channel(tracker.active());
        Self {
            tracker,
            throttle: FrameThrottle::default(),
            tx,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn active(&self) -> Section {
        self.tracker.active()
    }

    pub fn subscribe(&self) -> watch::Receiver<Section> {
        self.tx.subscribe()
    }

    /// Scroll event. Returns true when a frame callback must be scheduled.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn on_scroll(&mut self) -> bool {
        self.throttle.request()
    }

    /// Frame callback. Recomputes at most once per pending scroll burst and
    /// publishes the new section if it changed.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn on_frame(&mut self, viewport: &dyn Viewport) -> Option<Section> {
        if !self.throttle.on_frame() {
            return None;
        }

        let Some(bounds) = viewport.section_bounds() else {
            debug!("No viewport available; active section left at {:?}", self.active());
            return None;
        };

        if !self.tracker.observe(&bounds) {
            return None;
        }

        let section = self.tracker.active();
        debug!("Active section -> {}", section.id());
        self.tx.send_replace(section);
        Some(section)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

/// Header navigation consumer.
#[derive(Debug, Clone)]
pub struct NavHighlighter {
    rx: watch::Receiver<Section>,
}

impl NavHighlighter {
    pub fn new(rx: watch::Receiver<Section>) -> Self {
        Self { rx }
    }

    pub fn active(&self) -> Section {
        *self.rx.borrow()
    }

    pub fn items(&self) -> Vec<NavItem> {
        let active = self.active();
        SECTIONS
            .iter()
            .map(|s| NavItem {
                section: *s,
                active: *s == active,
            })
            .collect()
    }

    /// Waits for the shared section to change. Errors once the state is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn changed(&mut self) -> Result<Section, watch::error::RecvError> {
        self.rx.changed().await?;
        Ok(*self.rx.borrow_and_update())
    }
}

/// Progress bar consumer; colours the bar after the active section.
#[derive(Debug, Clone)]
pub struct ProgressBar {
    rx: watch::Receiver<Section>,
}

impl ProgressBar {
    pub fn new(rx: watch::Receiver<Section>) -> Self {
        Self { rx }
    }

    pub fn color(&self) -> String {
        self.rx.borrow().color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedViewport(Option<Vec<SectionBounds>>);

    impl Viewport for FixedViewport {
        fn section_bounds(&self) -> Option<Vec<SectionBounds>> {
            self.0.clone()
        }
    }

    fn straddling(section: Section) -> FixedViewport {
        FixedViewport(Some(vec![SectionBounds {
            section,
            top: 0.0,
            bottom: 400.0,
        }]))
    }

    #[test]
    fn test_consumers_share_one_value() {
        let mut state = ScrollState::new(100.0);
        let nav = NavHighlighter::new(state.subscribe());
        let bar = ProgressBar::new(state.subscribe());

        assert_eq!(nav.active(), Section::Hero);
        assert_eq!(bar.color(), Section::Hero.color());

        state.on_scroll();
        assert_eq!(state.on_frame(&straddling(Section::Skills)), Some(Section::Skills));

        assert_eq!(nav.active(), Section::Skills);
        assert_eq!(bar.color(), Section::Skills.color());
    }

    #[test]
    fn test_nav_items_mark_only_active() {
        let state = ScrollState::new(100.0);
        let nav = NavHighlighter::new(state.subscribe());
        let active: Vec<Section> = nav
            .items()
            .into_iter()
            .filter(|i| i.active)
            .map(|i| i.section)
            .collect();
        assert_eq!(active, vec![Section::Hero]);
        assert_eq!(nav.items().len(), SECTIONS.len());
    }

    #[test]
    fn test_frame_without_scroll_does_nothing() {
        let mut state = ScrollState::new(100.0);
        assert_eq!(state.on_frame(&straddling(Section::About)), None);
        assert_eq!(state.active(), Section::Hero);
    }

    #[test]
    fn test_burst_recomputes_once() {
        let mut state = ScrollState::new(100.0);
        assert!(state.on_scroll());
        assert!(!state.on_scroll());
        assert!(!state.on_scroll());
        assert_eq!(state.on_frame(&straddling(Section::About)), Some(Section::About));
        assert_eq!(state.on_frame(&straddling(Section::Contact)), None);
        assert_eq!(state.active(), Section::About);
    }

    #[test]
    fn test_missing_viewport_is_a_no_op() {
        let mut state = ScrollState::new(100.0);
        state.on_scroll();
        assert_eq!(state.on_frame(&FixedViewport(None)), None);
        assert_eq!(state.active(), Section::Hero);
        // The throttle is re-armed even though nothing was measured.
        assert!(state.on_scroll());
    }

    #[tokio::test]
    async fn test_subscriber_is_notified_of_change() {
        let mut state = ScrollState::new(100.0);
        let mut nav = NavHighlighter::new(state.subscribe());

        state.on_scroll();
        state.on_frame(&straddling(Section::Projects));

        assert_eq!(nav.changed().await.unwrap(), Section::Projects);
    }

    #[tokio::test]
    async fn test_changed_errors_after_state_dropped() {
        let state = ScrollState::new(100.0);
        let mut nav = NavHighlighter::new(state.subscribe());
        drop(state);
        assert!(nav.changed().await.is_err());
    }
}
