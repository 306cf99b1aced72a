use crate::{
    config::bindings::{ElementBindings, ElementRole},
    foundation::core::ElementBox,
    page::surface::{ElementId, Page},
};

/// Element handles resolved once from the configured selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementTargets {
    pub headline: ElementId,
    pub image: ElementId,
    pub message: ElementId,
    pub container: Option<ElementId>,
}

impl ElementTargets {
    /// Resolves the selectors of the `required` roles. Fails with the first one that has no
    /// element; headline, image and message are always required. The container is only looked
    /// up when required, so an unused binding is never measured.
    pub fn resolve<P: Page + ?Sized>(
        page: &P,
        bindings: &ElementBindings,
        required: &[ElementRole],
    ) -> Result<Self, ElementRole> {
        let lookup = |role: ElementRole| bindings.selector(role).and_then(|s| page.query(s));
        for &role in required {
            if lookup(role).is_none() {
                return Err(role);
            }
        }

        let core = |role: ElementRole| lookup(role).ok_or(role);
        Ok(Self {
            headline: core(ElementRole::Headline)?,
            image: core(ElementRole::Image)?,
            message: core(ElementRole::Message)?,
            container: required
                .contains(&ElementRole::Container)
                .then(|| lookup(ElementRole::Container))
                .flatten(),
        })
    }

    pub fn id(&self, role: ElementRole) -> Option<ElementId> {
        match role {
            ElementRole::Headline => Some(self.headline),
            ElementRole::Image => Some(self.image),
            ElementRole::Message => Some(self.message),
            ElementRole::Container => self.container,
        }
    }
}

/// Element boxes measured at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GeometrySnapshot {
    pub headline: ElementBox,
    pub image: ElementBox,
    pub message: ElementBox,
    pub container: Option<ElementBox>,
}

impl GeometrySnapshot {
    pub fn capture<P: Page + ?Sized>(page: &P, targets: &ElementTargets) -> Self {
        Self {
            headline: page.measure(targets.headline),
            image: page.measure(targets.image),
            message: page.measure(targets.message),
            container: targets.container.map(|id| page.measure(id)),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.headline.is_finite()
            && self.image.is_finite()
            && self.message.is_finite()
            && self.container.is_none_or(|b| b.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
