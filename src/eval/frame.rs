use smallvec::SmallVec;

use crate::{
    animation::progress::Progress,
    config::bindings::ElementRole,
    layout::metrics::{AnimationMetrics, StyleWrite},
    page::style::{StyleProperty, StyleValue},
};

/// Style values for one animation frame, in track order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    pub scroll_y: f64,
    pub progress: Progress,
    pub writes: SmallVec<[StyleWrite; 6]>,
}

impl FrameOutput {
    pub fn value(&self, role: ElementRole, property: StyleProperty) -> Option<StyleValue> {
        self.writes
            .iter()
            .find(|w| w.role == role && w.value.property() == property)
            .map(|w| w.value)
    }

    /// The scalar behind a value: the vertical offset for transforms, the number otherwise.
    pub fn scalar(&self, role: ElementRole, property: StyleProperty) -> Option<f64> {
        self.value(role, property).map(|v| match v {
            StyleValue::Transform(t) => t.y,
            StyleValue::Opacity(x) | StyleValue::MarginTop(x) | StyleValue::MarginBottom(x) => x,
        })
    }
}

/// Maps a scroll offset through `metrics`. Pure: the same inputs always give the same output.
///
/// Returns `None` while the metrics have no usable animation distance.
pub fn evaluate_frame(scroll_y: f64, metrics: &AnimationMetrics) -> Option<FrameOutput> {
    if !metrics.is_ready() {
        return None;
    }
    let progress = Progress::from_scroll(scroll_y, metrics.animation_distance)?;

    let writes = metrics
        .tracks
        .iter()
        .map(|t| StyleWrite {
            role: t.role,
            value: StyleValue::scalar(t.property, t.channel.sample(progress)),
        })
        .filter(|w| w.value.is_finite())
        .collect();

    Some(FrameOutput {
        scroll_y,
        progress,
        writes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
