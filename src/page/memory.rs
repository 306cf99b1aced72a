use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    foundation::core::ElementBox,
    foundation::error::{ScrollFxError, ScrollFxResult},
    page::style::{StyleProperty, StyleValue},
    page::surface::{ElementId, Page},
};

/// Serialized page geometry: the scroll offset plus the base box of every element by selector.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub scroll_y: f64,
    pub elements: BTreeMap<String, ElementBox>,
}

impl PageLayout {
    pub fn from_path(path: impl AsRef<Path>) -> ScrollFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollFxError::config(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_reader(r: impl Read) -> ScrollFxResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }
}

#[derive(Clone, Debug)]
struct PageElement {
    selector: String,
    layout: ElementBox,
    styles: BTreeMap<StyleProperty, StyleValue>,
}

/// Synthetic document used for tests and offline replay.
///
/// Elements are addressed by their exact selector string. `measure` reports the base box shifted
/// by any inline `margin-top`, so a stale push-down shows up in the next measurement unless it is
/// cleared first.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPage {
    elements: Vec<PageElement>,
    scroll_y: f64,
    style_writes: u64,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &PageLayout) -> Self {
        let mut page = Self::new();
        page.scroll_y = layout.scroll_y;
        for (selector, b) in &layout.elements {
            page.insert(selector, *b);
        }
        page
    }

    pub fn with_element(mut self, selector: &str, layout: ElementBox) -> Self {
        self.insert(selector, layout);
        self
    }

    /// Adds an element, or replaces the base box of an existing one (keeping its styles).
    pub fn insert(&mut self, selector: &str, layout: ElementBox) -> ElementId {
        if let Some(id) = self.query(selector) {
            self.elements[id.0 as usize].layout = layout;
            return id;
        }
        self.elements.push(PageElement {
            selector: selector.to_string(),
            layout,
            styles: BTreeMap::new(),
        });
        ElementId((self.elements.len() - 1) as u32)
    }

    /// Replaces base boxes for every selector in `elements`; unknown selectors are added.
    pub fn relayout(&mut self, elements: &BTreeMap<String, ElementBox>) {
        for (selector, b) in elements {
            self.insert(selector, *b);
        }
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y;
    }

    pub fn style(&self, selector: &str, property: StyleProperty) -> Option<StyleValue> {
        let id = self.query(selector)?;
        self.elements[id.0 as usize].styles.get(&property).copied()
    }

    pub fn css(&self, selector: &str, property: StyleProperty) -> Option<String> {
        self.style(selector, property).map(|v| v.to_css())
    }

    /// Inline styles of every element that has any, as `selector -> css-name -> css-text`.
    pub fn inline_styles(&self) -> BTreeMap<String, BTreeMap<String, String>> {
        self.elements
            .iter()
            .filter(|e| !e.styles.is_empty())
            .map(|e| {
                let decls = e
                    .styles
                    .iter()
                    .map(|(p, v)| (p.css_name().to_string(), v.to_css()))
                    .collect();
                (e.selector.clone(), decls)
            })
            .collect()
    }

    /// Total number of `set_style` calls seen.
    pub fn style_writes(&self) -> u64 {
        self.style_writes
    }
}

impl Page for InMemoryPage {
    fn query(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.selector == selector)
            .map(|i| ElementId(i as u32))
    }

    fn measure(&self, id: ElementId) -> ElementBox {
        let Some(el) = self.elements.get(id.0 as usize) else {
            return ElementBox::default();
        };
        let margin_top = match el.styles.get(&StyleProperty::MarginTop) {
            Some(StyleValue::MarginTop(v)) => *v,
            _ => 0.0,
        };
        ElementBox::new(el.layout.top + margin_top, el.layout.height)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn set_style(&mut self, id: ElementId, value: StyleValue) {
        if let Some(el) = self.elements.get_mut(id.0 as usize) {
            el.styles.insert(value.property(), value);
            self.style_writes += 1;
        }
    }

    fn clear_style(&mut self, id: ElementId, property: StyleProperty) {
        if let Some(el) = self.elements.get_mut(id.0 as usize) {
            el.styles.remove(&property);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/memory.rs"]
mod tests;
