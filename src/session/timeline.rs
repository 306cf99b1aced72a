use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    config::settings::ParallaxConfig,
    eval::frame::FrameOutput,
    foundation::core::{ElementBox, Millis},
    foundation::error::{ScrollFxError, ScrollFxResult},
    layout::metrics::AnimationMetrics,
    page::memory::{InMemoryPage, PageLayout},
    session::scroll_session::{ScrollSession, SessionStats, ViewportEvent},
};

/// A recorded viewport event together with the page state change it carries.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEvent {
    ContentReady,
    Scroll {
        y: f64,
    },
    /// New base boxes for the listed selectors; unlisted elements keep their layout.
    Resize {
        #[serde(default)]
        elements: BTreeMap<String, ElementBox>,
    },
    AnimationFrame,
}

impl TimelineEvent {
    fn viewport_event(&self) -> ViewportEvent {
        match self {
            Self::ContentReady => ViewportEvent::ContentReady,
            Self::Scroll { .. } => ViewportEvent::Scroll,
            Self::Resize { .. } => ViewportEvent::Resize,
            Self::AnimationFrame => ViewportEvent::AnimationFrame,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    pub at: Millis,
    #[serde(flatten)]
    pub event: TimelineEvent,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub events: Vec<TimedEvent>,
}

impl Timeline {
    pub fn from_path(path: impl AsRef<Path>) -> ScrollFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollFxError::config(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> ScrollFxResult<Self> {
        let timeline: Self = serde_json::from_reader(r)?;
        timeline.validate()?;
        Ok(timeline)
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        if !self.events.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollFxError::validation(
                "timeline events must be sorted by time",
            ));
        }
        if let Some(e) = self.events.iter().find(|e| match &e.event {
            TimelineEvent::Scroll { y } => !y.is_finite(),
            _ => false,
        }) {
            return Err(ScrollFxError::validation(format!(
                "scroll offset at {}ms must be finite",
                e.at.0
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReplayFrame {
    pub at: Millis,
    pub frame: FrameOutput,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReplayReport {
    pub variant: &'static str,
    pub inert: bool,
    pub stats: SessionStats,
    pub frames: Vec<ReplayFrame>,
    pub metrics: Option<AnimationMetrics>,
    /// Final inline styles, `selector -> property -> css`.
    pub styles: BTreeMap<String, BTreeMap<String, String>>,
}

/// Replays `timeline` against a synthetic page built from `layout`.
///
/// A resize burst still open at the end of the timeline is flushed at its deadline.
#[tracing::instrument(skip_all, fields(events = timeline.events.len()))]
pub fn replay(
    config: &ParallaxConfig,
    layout: &PageLayout,
    timeline: &Timeline,
) -> ScrollFxResult<ReplayReport> {
    config.validate()?;
    timeline.validate()?;

    let mut session = ScrollSession::new(InMemoryPage::from_layout(layout), config);
    let mut frames = Vec::new();

    for e in &timeline.events {
        // A remeasure due before this event must see the layout as it was.
        if session.pending_remeasure().is_some_and(|d| d <= e.at) {
            if let Some(frame) = session.flush() {
                frames.push(ReplayFrame {
                    at: session.now(),
                    frame,
                });
            }
        }

        match &e.event {
            TimelineEvent::Scroll { y } => session.page_mut().set_scroll_y(*y),
            TimelineEvent::Resize { elements } => session.page_mut().relayout(elements),
            TimelineEvent::ContentReady | TimelineEvent::AnimationFrame => {}
        }
        if let Some(frame) = session.handle(e.at, e.event.viewport_event()) {
            frames.push(ReplayFrame {
                at: session.now(),
                frame,
            });
        }
    }
    if let Some(frame) = session.flush() {
        frames.push(ReplayFrame {
            at: session.now(),
            frame,
        });
    }

    let stats = session.stats();
    tracing::info!(
        frames = stats.frames_applied,
        recalculations = stats.recalculations,
        "timeline replayed"
    );

    Ok(ReplayReport {
        variant: config.variant.name(),
        inert: session.engine().is_inert(),
        stats,
        frames,
        metrics: session.engine().metrics().cloned(),
        styles: session.page().inline_styles(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/timeline.rs"]
mod tests;
