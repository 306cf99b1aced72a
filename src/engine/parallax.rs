use crate::{
    config::settings::{ParallaxConfig, ParallaxVariant},
    eval::frame::{FrameOutput, evaluate_frame},
    layout::fingerprint::{MetricsFingerprint, fingerprint_metrics},
    layout::geometry::{ElementTargets, GeometrySnapshot},
    layout::metrics::{AnimationMetrics, written_properties},
    page::surface::Page,
};

/// Scroll-linked hero animation bound to one page.
///
/// The engine holds resolved element handles and the last measured metrics; the page itself is
/// passed into every call. An engine whose elements could not all be found is inert: every
/// operation is a no-op.
#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    variant: ParallaxVariant,
    targets: Option<ElementTargets>,
    metrics: Option<AnimationMetrics>,
}

impl ParallaxEngine {
    /// Resolves the configured selectors against `page`.
    pub fn attach<P: Page + ?Sized>(page: &P, config: &ParallaxConfig) -> Self {
        let bindings = config.bindings();
        let targets =
            match ElementTargets::resolve(page, &bindings, config.variant.required_roles()) {
                Ok(t) => Some(t),
                Err(role) => {
                    tracing::debug!(
                        ?role,
                        selector = bindings.selector(role),
                        "parallax element missing; engine stays inert"
                    );
                    None
                }
            };

        Self {
            variant: config.variant.clone(),
            targets,
            metrics: None,
        }
    }

    pub fn inert(config: &ParallaxConfig) -> Self {
        Self {
            variant: config.variant.clone(),
            targets: None,
            metrics: None,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.targets.is_none()
    }

    pub fn targets(&self) -> Option<&ElementTargets> {
        self.targets.as_ref()
    }

    pub fn metrics(&self) -> Option<&AnimationMetrics> {
        self.metrics.as_ref()
    }

    pub fn fingerprint(&self) -> Option<MetricsFingerprint> {
        self.metrics.as_ref().map(fingerprint_metrics)
    }

    /// Clears the engine's own inline styles, measures the bound elements and replaces the
    /// stored metrics. Settle writes are applied straight away.
    ///
    /// Unmeasurable geometry drops the stored metrics, which pauses frames until the next call.
    #[tracing::instrument(skip_all, fields(variant = self.variant.name()))]
    pub fn recalculate_geometry<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
    ) -> Option<&AnimationMetrics> {
        let targets = self.targets?;

        for &(role, property) in written_properties(&self.variant) {
            if let Some(id) = targets.id(role) {
                page.clear_style(id, property);
            }
        }

        let snapshot = GeometrySnapshot::capture(page, &targets);
        self.metrics = AnimationMetrics::derive(&self.variant, &snapshot);

        let Some(metrics) = &self.metrics else {
            tracing::warn!(?snapshot, "hero geometry is not measurable; parallax paused");
            return None;
        };
        for w in &metrics.settle {
            if let Some(id) = targets.id(w.role) {
                page.set_style(id, w.value);
            }
        }
        tracing::debug!(
            distance = metrics.animation_distance,
            tracks = metrics.tracks.len(),
            "parallax metrics recalculated"
        );
        Some(metrics)
    }

    /// Writes the frame for `scroll_y` onto the bound elements and returns it.
    ///
    /// No-op while inert or before a usable measurement exists.
    pub fn apply_frame<P: Page + ?Sized>(&self, page: &mut P, scroll_y: f64) -> Option<FrameOutput> {
        let targets = self.targets.as_ref()?;
        let frame = evaluate_frame(scroll_y, self.metrics.as_ref()?)?;
        for w in &frame.writes {
            if let Some(id) = targets.id(w.role) {
                page.set_style(id, w.value);
            }
        }
        tracing::trace!(scroll_y, progress = frame.progress.value(), "parallax frame");
        Some(frame)
    }

    /// Remeasures, then applies a frame at the page's current scroll offset.
    pub fn refresh<P: Page + ?Sized>(&mut self, page: &mut P) -> Option<FrameOutput> {
        self.recalculate_geometry(page)?;
        let scroll_y = page.scroll_y();
        self.apply_frame(page, scroll_y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/parallax.rs"]
mod tests;
