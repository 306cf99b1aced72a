//! scrollfx drives a scroll-linked hero animation: a headline that travels down the page, an image
//! that drifts and fades, and a message that rises into place.
//!
//! # Pipeline overview
//!
//! 1. **Attach**: resolve the configured selectors on a [`Page`]; missing elements leave the
//!    [`ParallaxEngine`] inert.
//! 2. **Measure**: `GeometrySnapshot -> AnimationMetrics` (animation distance plus one affine
//!    channel per animated property), recomputed wholesale on content-ready and after resizes.
//! 3. **Frame**: `(scroll offset, AnimationMetrics) -> FrameOutput`, a pure function whose values
//!    are written straight onto the elements' inline styles.
//!
//! [`ScrollSession`] wires host events to the engine: scrolls are coalesced to one frame per paint
//! and resize bursts are debounced into a single remeasure.
//!
//! Two parameterizations exist, selected by [`ParallaxVariant`]: `refined` (the headline stops
//! below the image) and `framed` (the headline lands inside the image frame).
#![forbid(unsafe_code)]

mod animation;
mod config;
mod engine;
mod eval;
mod foundation;
mod layout;
mod page;
mod schedule;
mod session;

pub use animation::channel::Channel;
pub use animation::progress::Progress;
pub use config::bindings::{ElementBindings, ElementRole};
pub use config::settings::{
    DEFAULT_DEBOUNCE_MS, FramedParams, ParallaxConfig, ParallaxVariant, RefinedParams,
};
pub use engine::parallax::ParallaxEngine;
pub use eval::frame::{FrameOutput, evaluate_frame};
pub use foundation::core::{ElementBox, Millis, Vec2};
pub use foundation::error::{ScrollFxError, ScrollFxResult};
pub use layout::fingerprint::{MetricsFingerprint, fingerprint_metrics};
pub use layout::geometry::{ElementTargets, GeometrySnapshot};
pub use layout::metrics::{AnimationMetrics, ElementTrack, StyleWrite, written_properties};
pub use page::memory::{InMemoryPage, PageLayout};
pub use page::style::{StyleProperty, StyleValue};
pub use page::surface::{ElementId, Page};
pub use schedule::debounce::Debouncer;
pub use schedule::frame::FrameCoalescer;
pub use session::scroll_session::{ScrollSession, SessionStats, ViewportEvent};
pub use session::timeline::{
    ReplayFrame, ReplayReport, TimedEvent, Timeline, TimelineEvent, replay,
};
