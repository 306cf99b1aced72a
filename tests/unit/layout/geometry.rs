use super::*;
use crate::page::{memory::InMemoryPage, surface::Page};

fn framed_page() -> InMemoryPage {
    InMemoryPage::new()
        .with_element(".hero-headline", ElementBox::new(0.0, 80.0))
        .with_element(".hero-image-container", ElementBox::new(100.0, 625.0))
        .with_element("#welcome-message", ElementBox::new(760.0, 200.0))
        .with_element("#hero-animation-container", ElementBox::new(0.0, 760.0))
}

#[test]
fn resolve_reports_first_missing_required_role() {
    let page = InMemoryPage::new()
        .with_element(".hero-headline", ElementBox::new(0.0, 80.0))
        .with_element("#hero-image", ElementBox::new(60.0, 400.0));
    let err = ElementTargets::resolve(
        &page,
        &ElementBindings::refined(),
        &[ElementRole::Headline, ElementRole::Image, ElementRole::Message],
    )
    .unwrap_err();
    assert_eq!(err, ElementRole::Message);
}

#[test]
fn resolve_and_capture_framed_layout() {
    let page = framed_page();
    let targets = ElementTargets::resolve(&page, &ElementBindings::framed(), &ElementRole::ALL)
        .unwrap();
    assert!(targets.container.is_some());
    assert_eq!(
        targets.id(ElementRole::Container),
        page.query("#hero-animation-container")
    );

    let snap = GeometrySnapshot::capture(&page, &targets);
    assert_eq!(snap.image, ElementBox::new(100.0, 625.0));
    assert_eq!(snap.container, Some(ElementBox::new(0.0, 760.0)));
    assert!(snap.is_finite());
}

#[test]
fn optional_container_is_skipped_when_unbound() {
    let page = framed_page();
    let targets = ElementTargets::resolve(
        &page,
        &ElementBindings {
            image: ".hero-image-container".to_string(),
            ..ElementBindings::refined()
        },
        &[ElementRole::Headline, ElementRole::Image, ElementRole::Message],
    )
    .unwrap();
    assert_eq!(targets.container, None);
    assert_eq!(targets.id(ElementRole::Container), None);
    assert_eq!(GeometrySnapshot::capture(&page, &targets).container, None);
}

#[test]
fn non_finite_geometry_is_flagged() {
    let mut page = framed_page();
    page.insert("#welcome-message", ElementBox::new(f64::NAN, 10.0));
    let targets = ElementTargets::resolve(&page, &ElementBindings::framed(), &ElementRole::ALL)
        .unwrap();
    assert!(!GeometrySnapshot::capture(&page, &targets).is_finite());
}

#[test]
fn bound_container_is_ignored_unless_required() {
    let mut page = framed_page();
    page.insert("#hero-animation-container", ElementBox::new(f64::NAN, 760.0));
    let targets = ElementTargets::resolve(
        &page,
        &ElementBindings::framed(),
        &[ElementRole::Headline, ElementRole::Image, ElementRole::Message],
    )
    .unwrap();
    assert_eq!(targets.container, None);

    let snap = GeometrySnapshot::capture(&page, &targets);
    assert_eq!(snap.container, None);
    assert!(snap.is_finite());
}
