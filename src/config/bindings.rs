/// The fixed set of hero-section elements the engine animates.
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
pub enum ElementRole {
    Headline,
    Image,
    Message,
    Container,
}

impl ElementRole {
    pub const ALL: [ElementRole; 4] = [
        ElementRole::Headline,
        ElementRole::Image,
        ElementRole::Message,
        ElementRole::Container,
    ];
}

/// Selectors used to look up each role on the page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ElementBindings {
    pub headline: String,
    pub image: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

impl ElementBindings {
    pub fn refined() -> Self {
        Self {
            headline: ".hero-headline".to_string(),
            image: "#hero-image".to_string(),
            message: "#welcome-message".to_string(),
            container: None,
        }
    }

    pub fn framed() -> Self {
        Self {
            headline: ".hero-headline".to_string(),
            image: ".hero-image-container".to_string(),
            message: "#welcome-message".to_string(),
            container: Some("#hero-animation-container".to_string()),
        }
    }

    pub fn selector(&self, role: ElementRole) -> Option<&str> {
        match role {
            ElementRole::Headline => Some(&self.headline),
            ElementRole::Image => Some(&self.image),
            ElementRole::Message => Some(&self.message),
            ElementRole::Container => self.container.as_deref(),
        }
    }
}
