//! Active-section tracking.
//!
//! `ActiveSectionTracker` is the pure state machine. `ScrollState` wraps it
//! with frame throttling and publishes the result once; the navigation
//! highlighter and progress bar subscribe to that single source.

pub mod active;
pub mod state;

pub use active::{ActiveSectionTracker, FrameThrottle, SectionBounds, DEFAULT_TRIGGER_OFFSET};
pub use state::{NavHighlighter, ProgressBar, ScrollState, Viewport};
