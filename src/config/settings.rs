use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    config::bindings::{ElementBindings, ElementRole},
    foundation::error::{ScrollFxError, ScrollFxResult},
};

pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Parameters of the first hero iteration: the headline travels down to just below the image and
/// the animation spans the scroll distance to that point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RefinedParams {
    /// Extra scroll distance appended below the image bottom.
    pub animation_margin_px: f64,
    /// Signed fraction of the animation distance the image travels (negative moves up).
    pub image_parallax_speed: f64,
    pub message_parallax_speed: f64,
    /// Image opacity at full progress.
    pub min_opacity: f64,
}

impl Default for RefinedParams {
    fn default() -> Self {
        Self {
            animation_margin_px: 40.0,
            image_parallax_speed: -0.4,
            message_parallax_speed: -0.15,
            min_opacity: 0.2,
        }
    }
}

/// Parameters of the second hero iteration: the headline lands inside the image frame while the
/// frame fades and the container margin pulls following content up.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FramedParams {
    /// Animation distance as a fraction of the frame height.
    pub distance_fraction: f64,
    /// Gap kept between the landed headline and the frame bottom.
    pub headline_inset_px: f64,
    /// Frame translation at full progress; also used for the container's bottom margin.
    pub frame_travel_px: f64,
    /// Opacity lost per unit of progress. Values above 1 overshoot below zero.
    pub opacity_slope: f64,
    /// Initial downward offset of the message, which rises to 0 at full progress.
    pub message_rise_px: f64,
}

impl Default for FramedParams {
    fn default() -> Self {
        Self {
            distance_fraction: 0.8,
            headline_inset_px: 35.0,
            frame_travel_px: -75.0,
            opacity_slope: 1.2,
            message_rise_px: 150.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParallaxVariant {
    Refined(RefinedParams),
    Framed(FramedParams),
}

impl ParallaxVariant {
    pub fn required_roles(&self) -> &'static [ElementRole] {
        match self {
            Self::Refined(_) => &[
                ElementRole::Headline,
                ElementRole::Image,
                ElementRole::Message,
            ],
            Self::Framed(_) => &[
                ElementRole::Headline,
                ElementRole::Image,
                ElementRole::Message,
                ElementRole::Container,
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Refined(_) => "refined",
            Self::Framed(_) => "framed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxConfig {
    pub variant: ParallaxVariant,
    /// Quiet period before a burst of resize events triggers remeasurement.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Selector overrides; the variant's stock selectors are used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bindings: Option<ElementBindings>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl ParallaxConfig {
    pub fn refined() -> Self {
        Self {
            variant: ParallaxVariant::Refined(RefinedParams::default()),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            bindings: None,
        }
    }

    pub fn framed() -> Self {
        Self {
            variant: ParallaxVariant::Framed(FramedParams::default()),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            bindings: None,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> ScrollFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollFxError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parses and validates a config document.
    pub fn from_reader(r: impl Read) -> ScrollFxResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn bindings(&self) -> ElementBindings {
        match (&self.bindings, &self.variant) {
            (Some(b), _) => b.clone(),
            (None, ParallaxVariant::Refined(_)) => ElementBindings::refined(),
            (None, ParallaxVariant::Framed(_)) => ElementBindings::framed(),
        }
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        if self.debounce_ms == 0 {
            return Err(ScrollFxError::validation("debounce_ms must be > 0"));
        }

        match &self.variant {
            ParallaxVariant::Refined(p) => {
                finite("animation_margin_px", p.animation_margin_px)?;
                finite("image_parallax_speed", p.image_parallax_speed)?;
                finite("message_parallax_speed", p.message_parallax_speed)?;
                finite("min_opacity", p.min_opacity)?;
                if !(0.0..=1.0).contains(&p.min_opacity) {
                    return Err(ScrollFxError::validation("min_opacity must be in [0, 1]"));
                }
            }
            ParallaxVariant::Framed(p) => {
                finite("distance_fraction", p.distance_fraction)?;
                finite("headline_inset_px", p.headline_inset_px)?;
                finite("frame_travel_px", p.frame_travel_px)?;
                finite("opacity_slope", p.opacity_slope)?;
                finite("message_rise_px", p.message_rise_px)?;
                if p.distance_fraction <= 0.0 {
                    return Err(ScrollFxError::validation("distance_fraction must be > 0"));
                }
            }
        }

        let bindings = self.bindings();
        for &role in self.variant.required_roles() {
            match bindings.selector(role) {
                Some(s) if !s.trim().is_empty() => {}
                _ => {
                    return Err(ScrollFxError::validation(format!(
                        "{} variant needs a non-empty selector for {role:?}",
                        self.variant.name()
                    )));
                }
            }
        }
        Ok(())
    }
}

fn finite(field: &str, v: f64) -> ScrollFxResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ScrollFxError::validation(format!("{field} must be finite")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
