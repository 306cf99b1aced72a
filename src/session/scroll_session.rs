use crate::{
    config::settings::ParallaxConfig,
    engine::parallax::ParallaxEngine,
    eval::frame::FrameOutput,
    foundation::core::Millis,
    layout::fingerprint::MetricsFingerprint,
    page::surface::Page,
    schedule::debounce::Debouncer,
    schedule::frame::FrameCoalescer,
};

/// Host lifecycle signals the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportEvent {
    /// Images affecting hero layout have finished loading. Only the first one counts.
    ContentReady,
    Scroll,
    Resize,
    /// The host is about to paint.
    AnimationFrame,
}

/// Counters read from the session's schedulers plus its own frame and remeasure tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SessionStats {
    pub scroll_events: u64,
    /// Scroll events absorbed by an already scheduled frame.
    pub coalesced_scrolls: u64,
    pub frames_applied: u64,
    /// Resize events accepted after content-ready.
    pub resize_events: u64,
    /// Remeasures, including the one on content-ready.
    pub recalculations: u64,
}

/// Wires viewport events to a [`ParallaxEngine`]: scrolls are coalesced to one frame per paint,
/// resizes are debounced into a single remeasure, and nothing runs before content is ready.
pub struct ScrollSession<P: Page> {
    page: P,
    engine: ParallaxEngine,
    frames: FrameCoalescer,
    resize: Debouncer,
    ready: bool,
    now: Millis,
    last_fingerprint: Option<MetricsFingerprint>,
    frames_applied: u64,
    recalculations: u64,
}

impl<P: Page> ScrollSession<P> {
    pub fn new(page: P, config: &ParallaxConfig) -> Self {
        let engine = ParallaxEngine::attach(&page, config);
        Self {
            page,
            engine,
            frames: FrameCoalescer::new(),
            resize: Debouncer::from_millis(config.debounce_ms),
            ready: false,
            now: Millis::default(),
            last_fingerprint: None,
            frames_applied: 0,
            recalculations: 0,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    pub fn engine(&self) -> &ParallaxEngine {
        &self.engine
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            scroll_events: self.frames.requested(),
            coalesced_scrolls: self.frames.coalesced(),
            frames_applied: self.frames_applied,
            resize_events: self.resize.triggers(),
            recalculations: self.recalculations,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// Delivers one event at time `at`. Returns the frame written by this call, if any.
    ///
    /// A debounced remeasure that fell due before `at` runs first.
    pub fn handle(&mut self, at: Millis, event: ViewportEvent) -> Option<FrameOutput> {
        let mut out = self.advance(at);

        match event {
            ViewportEvent::ContentReady => {
                if self.ready {
                    tracing::debug!("duplicate content-ready ignored");
                } else {
                    self.ready = true;
                    out = self.remeasure().or(out);
                }
            }
            ViewportEvent::Scroll => {
                self.frames.request();
            }
            ViewportEvent::Resize => {
                if self.ready {
                    self.resize.trigger(self.now);
                } else {
                    tracing::debug!("resize before content-ready ignored");
                }
            }
            ViewportEvent::AnimationFrame => {
                if self.frames.take() && self.ready {
                    let scroll_y = self.page.scroll_y();
                    if let Some(frame) = self.engine.apply_frame(&mut self.page, scroll_y) {
                        self.frames_applied += 1;
                        out = Some(frame);
                    }
                }
            }
        }
        out
    }

    /// Moves the session clock to `now` and runs a remeasure if the resize window has closed.
    pub fn advance(&mut self, now: Millis) -> Option<FrameOutput> {
        if now < self.now {
            tracing::debug!(now = now.0, clock = self.now.0, "event timestamp went backwards");
        }
        self.now = self.now.max(now);
        if self.resize.poll(self.now) {
            return self.remeasure();
        }
        None
    }

    /// Deadline of the debounced remeasure, if a resize burst is open.
    pub fn pending_remeasure(&self) -> Option<Millis> {
        self.resize.deadline()
    }

    /// Runs any pending debounced remeasure at its deadline.
    pub fn flush(&mut self) -> Option<FrameOutput> {
        let deadline = self.resize.deadline()?;
        self.advance(deadline)
    }

    fn remeasure(&mut self) -> Option<FrameOutput> {
        if self.engine.is_inert() {
            return None;
        }
        self.recalculations += 1;

        let frame = self.engine.refresh(&mut self.page);
        let fingerprint = self.engine.fingerprint();
        if fingerprint.is_some() && fingerprint == self.last_fingerprint {
            tracing::debug!("remeasure left parallax metrics unchanged");
        }
        self.last_fingerprint = fingerprint;

        if frame.is_some() {
            self.frames_applied += 1;
        }
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scroll_session.rs"]
mod tests;
