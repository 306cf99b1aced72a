use crate::foundation::core::Vec2;

/// Inline presentation properties the engine is allowed to touch.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    Transform,
    Opacity,
    MarginTop,
    MarginBottom,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Opacity => "opacity",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "snake_case")]
pub enum StyleValue {
    Transform(Vec2),
    Opacity(f64),
    MarginTop(f64),
    MarginBottom(f64),
}

impl StyleValue {
    /// Builds the value for a scalar channel. Transforms translate along the vertical axis.
    pub fn scalar(property: StyleProperty, v: f64) -> Self {
        match property {
            StyleProperty::Transform => Self::Transform(Vec2::new(0.0, v)),
            StyleProperty::Opacity => Self::Opacity(v),
            StyleProperty::MarginTop => Self::MarginTop(v),
            StyleProperty::MarginBottom => Self::MarginBottom(v),
        }
    }

    pub fn property(&self) -> StyleProperty {
        match self {
            Self::Transform(_) => StyleProperty::Transform,
            Self::Opacity(_) => StyleProperty::Opacity,
            Self::MarginTop(_) => StyleProperty::MarginTop,
            Self::MarginBottom(_) => StyleProperty::MarginBottom,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Transform(t) => t.x.is_finite() && t.y.is_finite(),
            Self::Opacity(v) | Self::MarginTop(v) | Self::MarginBottom(v) => v.is_finite(),
        }
    }

    /// Inline CSS text for this value, e.g. `translateY(12.5px)` or `0.6`.
    pub fn to_css(&self) -> String {
        match *self {
            Self::Transform(t) if t.x == 0.0 => format!("translateY({}px)", num(t.y)),
            Self::Transform(t) => format!("translate({}px, {}px)", num(t.x), num(t.y)),
            Self::Opacity(v) => num(v).to_string(),
            Self::MarginTop(v) | Self::MarginBottom(v) => format!("{}px", num(v)),
        }
    }
}

// Folds -0.0 into 0.0 so it never prints as "-0".
fn num(v: f64) -> f64 {
    v + 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/page/style.rs"]
mod tests;
