use crate::animation::progress::Progress;

/// Affine map from progress to a style scalar: `base + slope * progress`.
///
/// The output is deliberately left unclamped; only the progress input is bounded.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    pub base: f64,
    pub slope: f64,
}

impl Channel {
    pub fn affine(base: f64, slope: f64) -> Self {
        Self { base, slope }
    }

    /// Starts at 0 and reaches `distance` at full progress.
    pub fn travel(distance: f64) -> Self {
        Self::affine(0.0, distance)
    }

    pub fn sample(self, p: Progress) -> f64 {
        self.base + self.slope * p.value()
    }

    pub fn start(self) -> f64 {
        self.sample(Progress::START)
    }

    pub fn end(self) -> f64 {
        self.sample(Progress::END)
    }

    pub fn is_finite(self) -> bool {
        self.base.is_finite() && self.slope.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
