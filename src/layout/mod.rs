pub(crate) mod fingerprint;
pub(crate) mod geometry;
pub(crate) mod metrics;
