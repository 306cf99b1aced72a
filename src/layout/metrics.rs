use smallvec::SmallVec;

use crate::{
    animation::channel::Channel,
    config::bindings::ElementRole,
    config::settings::{FramedParams, ParallaxVariant, RefinedParams},
    layout::geometry::GeometrySnapshot,
    page::style::{StyleProperty, StyleValue},
};

/// One animated property of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementTrack {
    pub role: ElementRole,
    pub property: StyleProperty,
    pub channel: Channel,
}

/// A value destined for one element's inline style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StyleWrite {
    pub role: ElementRole,
    pub value: StyleValue,
}

/// Everything a frame needs, derived from one geometry snapshot. Never patched: each
/// remeasurement produces a fresh value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationMetrics {
    /// Scroll distance over which progress runs from 0 to 1.
    pub animation_distance: f64,
    pub tracks: SmallVec<[ElementTrack; 6]>,
    /// Written once per measurement and left in place between frames.
    pub settle: SmallVec<[StyleWrite; 1]>,
}

impl AnimationMetrics {
    /// Derives metrics for `variant`. Returns `None` when the snapshot holds non-finite values or
    /// lacks an element the variant animates.
    pub fn derive(variant: &ParallaxVariant, geometry: &GeometrySnapshot) -> Option<Self> {
        if !geometry.is_finite() {
            return None;
        }
        let m = match variant {
            ParallaxVariant::Refined(p) => refined(p, geometry),
            ParallaxVariant::Framed(p) => framed(p, geometry)?,
        };
        m.is_finite().then_some(m)
    }

    /// True once the distance is a positive span frames can be computed against.
    pub fn is_ready(&self) -> bool {
        self.animation_distance.is_finite() && self.animation_distance > 0.0
    }

    pub fn channel(&self, role: ElementRole, property: StyleProperty) -> Option<Channel> {
        self.tracks
            .iter()
            .find(|t| t.role == role && t.property == property)
            .map(|t| t.channel)
    }

    fn is_finite(&self) -> bool {
        self.animation_distance.is_finite()
            && self.tracks.iter().all(|t| t.channel.is_finite())
            && self.settle.iter().all(|s| s.value.is_finite())
    }
}

/// Every inline property a variant may write, so a remeasure can clear them first.
pub fn written_properties(variant: &ParallaxVariant) -> &'static [(ElementRole, StyleProperty)] {
    match variant {
        ParallaxVariant::Refined(_) => &[
            (ElementRole::Headline, StyleProperty::Transform),
            (ElementRole::Image, StyleProperty::Transform),
            (ElementRole::Image, StyleProperty::Opacity),
            (ElementRole::Message, StyleProperty::Transform),
            (ElementRole::Message, StyleProperty::MarginTop),
        ],
        ParallaxVariant::Framed(_) => &[
            (ElementRole::Headline, StyleProperty::Transform),
            (ElementRole::Image, StyleProperty::Transform),
            (ElementRole::Image, StyleProperty::Opacity),
            (ElementRole::Container, StyleProperty::MarginBottom),
            (ElementRole::Message, StyleProperty::Transform),
        ],
    }
}

fn track(role: ElementRole, property: StyleProperty, channel: Channel) -> ElementTrack {
    ElementTrack {
        role,
        property,
        channel,
    }
}

fn refined(p: &RefinedParams, g: &GeometrySnapshot) -> AnimationMetrics {
    // The headline stops just below the image; the whole animation spans the scroll up to there.
    let stop = g.image.bottom() + p.animation_margin_px;
    let distance = stop;

    let headline_travel = stop - g.headline.top;
    let image_travel = distance * p.image_parallax_speed;
    let message_travel = distance * p.message_parallax_speed;

    let mut tracks = SmallVec::new();
    tracks.push(track(
        ElementRole::Headline,
        StyleProperty::Transform,
        Channel::travel(headline_travel),
    ));
    tracks.push(track(
        ElementRole::Image,
        StyleProperty::Transform,
        Channel::travel(image_travel),
    ));
    tracks.push(track(
        ElementRole::Message,
        StyleProperty::Transform,
        Channel::travel(message_travel),
    ));
    tracks.push(track(
        ElementRole::Image,
        StyleProperty::Opacity,
        Channel::affine(1.0, -(1.0 - p.min_opacity)),
    ));

    // Push the message down far enough that the landed headline never overlaps it, accounting
    // for the message's own upward travel.
    let headline_final_bottom = stop + g.headline.height;
    let required_push = headline_final_bottom - g.message.top - message_travel;
    let mut settle = SmallVec::new();
    if required_push > 0.0 {
        settle.push(StyleWrite {
            role: ElementRole::Message,
            value: StyleValue::MarginTop(required_push),
        });
    }

    AnimationMetrics {
        animation_distance: distance,
        tracks,
        settle,
    }
}

fn framed(p: &FramedParams, g: &GeometrySnapshot) -> Option<AnimationMetrics> {
    // Only the container's presence matters; its box is not used.
    if g.container.is_none() {
        return None;
    }

    let distance = g.image.height * p.distance_fraction;
    let headline_end = g.image.bottom() - g.headline.height - p.headline_inset_px;

    let mut tracks = SmallVec::new();
    tracks.push(track(
        ElementRole::Headline,
        StyleProperty::Transform,
        Channel::travel(headline_end),
    ));
    tracks.push(track(
        ElementRole::Image,
        StyleProperty::Transform,
        Channel::travel(p.frame_travel_px),
    ));
    tracks.push(track(
        ElementRole::Image,
        StyleProperty::Opacity,
        Channel::affine(1.0, -p.opacity_slope),
    ));
    tracks.push(track(
        ElementRole::Container,
        StyleProperty::MarginBottom,
        Channel::travel(p.frame_travel_px),
    ));
    tracks.push(track(
        ElementRole::Message,
        StyleProperty::Transform,
        Channel::affine(p.message_rise_px, -p.message_rise_px),
    ));

    Some(AnimationMetrics {
        animation_distance: distance,
        tracks,
        settle: SmallVec::new(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/metrics.rs"]
mod tests;
