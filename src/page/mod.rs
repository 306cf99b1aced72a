pub(crate) mod memory;
pub(crate) mod style;
pub(crate) mod surface;
