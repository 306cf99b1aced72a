use crate::{
    foundation::core::ElementBox,
    page::style::{StyleProperty, StyleValue},
};

/// Opaque handle to an element resolved from a selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ElementId(pub u32);

/// The host document as seen by the engine: element lookup, layout measurement, the current
/// scroll offset and inline style writes.
///
/// Implementations are expected to reflect style writes in later `measure` calls the same way a
/// browser would (margins move an element, transforms do not).
pub trait Page {
    fn query(&self, selector: &str) -> Option<ElementId>;

    fn measure(&self, id: ElementId) -> ElementBox;

    fn scroll_y(&self) -> f64;

    fn set_style(&mut self, id: ElementId, value: StyleValue);

    fn clear_style(&mut self, id: ElementId, property: StyleProperty);
}
