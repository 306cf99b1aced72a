/// How far scrolling has advanced through the animation range, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamps `t` into range; NaN maps to the start.
    pub fn new(t: f64) -> Self {
        if t.is_nan() {
            return Self::START;
        }
        Self(t.clamp(0.0, 1.0))
    }

    /// `clamp(scroll / distance, 0, 1)`, or `None` while the distance is not a usable span
    /// (zero, negative or non-finite) or the offset is NaN.
    pub fn from_scroll(scroll_y: f64, distance: f64) -> Option<Self> {
        if !(distance.is_finite() && distance > 0.0) || scroll_y.is_nan() {
            return None;
        }
        Some(Self::new(scroll_y / distance))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
