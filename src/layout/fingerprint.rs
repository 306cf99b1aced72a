use xxhash_rust::xxh3::Xxh3;

use crate::{
    config::bindings::ElementRole,
    layout::metrics::AnimationMetrics,
    page::style::{StyleProperty, StyleValue},
};

const XXH3_SEED: u64 = 0x5c01_1f3a_9e2d_47b1;

/// Stable 128-bit digest of a metrics value; equal metrics always hash equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct MetricsFingerprint {
    pub hi: u64,
    pub lo: u64,
}

pub fn fingerprint_metrics(m: &AnimationMetrics) -> MetricsFingerprint {
    let mut h = StableHasher::new();
    h.write_f64(m.animation_distance);
    h.write_u64(m.tracks.len() as u64);
    for t in &m.tracks {
        h.write_u8(role_tag(t.role));
        h.write_u8(property_tag(t.property));
        h.write_f64(t.channel.base);
        h.write_f64(t.channel.slope);
    }
    h.write_u64(m.settle.len() as u64);
    for s in &m.settle {
        h.write_u8(role_tag(s.role));
        write_style_value(&mut h, &s.value);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(self) -> MetricsFingerprint {
        let v = self.inner.digest128();
        MetricsFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn role_tag(r: ElementRole) -> u8 {
    match r {
        ElementRole::Headline => 0,
        ElementRole::Image => 1,
        ElementRole::Message => 2,
        ElementRole::Container => 3,
    }
}

fn property_tag(p: StyleProperty) -> u8 {
    match p {
        StyleProperty::Transform => 0,
        StyleProperty::Opacity => 1,
        StyleProperty::MarginTop => 2,
        StyleProperty::MarginBottom => 3,
    }
}

fn write_style_value(h: &mut StableHasher, v: &StyleValue) {
    h.write_u8(property_tag(v.property()));
    match *v {
        StyleValue::Transform(t) => {
            h.write_f64(t.x);
            h.write_f64(t.y);
        }
        StyleValue::Opacity(x) | StyleValue::MarginTop(x) | StyleValue::MarginBottom(x) => {
            h.write_f64(x);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fingerprint.rs"]
mod tests;
