use super::*;
use crate::{
    foundation::core::ElementBox,
    page::memory::InMemoryPage,
    page::style::StyleProperty,
};

fn refined_page() -> InMemoryPage {
    InMemoryPage::new()
        .with_element(".hero-headline", ElementBox::new(0.0, 80.0))
        .with_element("#hero-image", ElementBox::new(60.0, 400.0))
        .with_element("#welcome-message", ElementBox::new(480.0, 200.0))
}

fn ready_session() -> ScrollSession<InMemoryPage> {
    let mut s = ScrollSession::new(refined_page(), &ParallaxConfig::refined());
    let first = s.handle(Millis(0), ViewportEvent::ContentReady);
    assert!(first.is_some());
    s
}

#[test]
fn nothing_runs_before_content_ready() {
    let mut s = ScrollSession::new(refined_page(), &ParallaxConfig::refined());
    s.page_mut().set_scroll_y(200.0);
    assert!(s.handle(Millis(0), ViewportEvent::Scroll).is_none());
    assert!(s.handle(Millis(5), ViewportEvent::AnimationFrame).is_none());
    assert!(s.handle(Millis(10), ViewportEvent::Resize).is_none());
    assert!(s.advance(Millis(1_000)).is_none());

    assert_eq!(s.page().style_writes(), 0);
    assert_eq!(s.stats().recalculations, 0);
    assert!(s.pending_remeasure().is_none());
    assert!(!s.is_ready());
}

#[test]
fn content_ready_measures_and_applies_current_scroll() {
    let mut s = ScrollSession::new(refined_page(), &ParallaxConfig::refined());
    s.page_mut().set_scroll_y(125.0);
    let frame = s.handle(Millis(0), ViewportEvent::ContentReady).unwrap();
    assert_eq!(frame.progress.value(), 0.25);
    assert_eq!(s.stats().recalculations, 1);
    assert_eq!(s.stats().frames_applied, 1);

    // Only the first signal counts.
    assert!(s.handle(Millis(1), ViewportEvent::ContentReady).is_none());
    assert_eq!(s.stats().recalculations, 1);
}

#[test]
fn scroll_bursts_apply_one_frame_per_paint() {
    let mut s = ready_session();
    for (i, y) in [10.0, 40.0, 90.0, 160.0, 250.0].into_iter().enumerate() {
        s.page_mut().set_scroll_y(y);
        assert!(s.handle(Millis(10 + i as u64), ViewportEvent::Scroll).is_none());
    }
    let frame = s.handle(Millis(16), ViewportEvent::AnimationFrame).unwrap();
    assert_eq!(frame.scroll_y, 250.0);
    assert_eq!(frame.progress.value(), 0.5);

    // A paint with no scroll in between writes nothing.
    let writes = s.page().style_writes();
    assert!(s.handle(Millis(32), ViewportEvent::AnimationFrame).is_none());
    assert_eq!(s.page().style_writes(), writes);

    let stats = s.stats();
    assert_eq!(stats.scroll_events, 5);
    assert_eq!(stats.coalesced_scrolls, 4);
    assert_eq!(stats.frames_applied, 2);
}

#[test]
fn resize_burst_remeasures_once_with_last_layout() {
    let mut s = ready_session();
    for i in 0..10u64 {
        let height = 300.0 + (i as f64) * 10.0;
        s.page_mut()
            .insert("#hero-image", ElementBox::new(60.0, height));
        assert!(s.handle(Millis(1_000 + i * 10), ViewportEvent::Resize).is_none());
    }
    assert_eq!(s.stats().recalculations, 1);
    assert_eq!(s.pending_remeasure(), Some(Millis(1_240)));

    assert!(s.advance(Millis(1_239)).is_none());
    assert_eq!(s.stats().recalculations, 1);

    s.advance(Millis(1_240)).unwrap();
    assert_eq!(s.stats().recalculations, 2);
    assert_eq!(s.stats().resize_events, 10);
    // Last layout: 60 + 390 + 40.
    assert_eq!(s.engine().metrics().unwrap().animation_distance, 490.0);

    assert!(s.advance(Millis(5_000)).is_none());
    assert_eq!(s.stats().recalculations, 2);
}

#[test]
fn due_remeasure_runs_before_the_next_event() {
    let mut s = ready_session();
    s.handle(Millis(100), ViewportEvent::Resize);
    s.page_mut().set_scroll_y(50.0);
    let frame = s.handle(Millis(400), ViewportEvent::Scroll).unwrap();
    assert_eq!(frame.scroll_y, 50.0);
    assert_eq!(s.stats().recalculations, 2);
}

#[test]
fn flush_fires_open_burst_at_its_deadline() {
    let mut s = ready_session();
    s.handle(Millis(100), ViewportEvent::Resize);
    assert!(s.flush().is_some());
    assert_eq!(s.now(), Millis(250));
    assert!(s.flush().is_none());
}

#[test]
fn inert_session_never_remeasures() {
    let page = InMemoryPage::new().with_element(".hero-headline", ElementBox::new(0.0, 80.0));
    let mut s = ScrollSession::new(page, &ParallaxConfig::refined());
    assert!(s.engine().is_inert());
    assert!(s.handle(Millis(0), ViewportEvent::ContentReady).is_none());
    s.handle(Millis(10), ViewportEvent::Resize);
    assert!(s.flush().is_none());
    s.handle(Millis(500), ViewportEvent::Scroll);
    assert!(s.handle(Millis(516), ViewportEvent::AnimationFrame).is_none());
    assert_eq!(s.stats().recalculations, 0);
    assert_eq!(
        s.into_page().style(".hero-headline", StyleProperty::Transform),
        None
    );
}

#[test]
fn clock_never_moves_backwards() {
    let mut s = ready_session();
    s.advance(Millis(500));
    s.advance(Millis(100));
    assert_eq!(s.now(), Millis(500));
}

#[test]
fn stats_follow_the_schedulers() {
    let mut s = ScrollSession::new(refined_page(), &ParallaxConfig::refined());
    s.handle(Millis(0), ViewportEvent::Resize);
    s.handle(Millis(1), ViewportEvent::Scroll);
    s.handle(Millis(2), ViewportEvent::ContentReady);
    s.handle(Millis(3), ViewportEvent::Scroll);
    s.handle(Millis(4), ViewportEvent::Resize);
    s.handle(Millis(5), ViewportEvent::Resize);

    let stats = s.stats();
    assert_eq!(stats.scroll_events, s.frames.requested());
    assert_eq!(stats.scroll_events, 2);
    assert_eq!(stats.coalesced_scrolls, 1);
    // The resize before content-ready is dropped.
    assert_eq!(stats.resize_events, s.resize.triggers());
    assert_eq!(stats.resize_events, 2);
    assert_eq!(stats.recalculations, 1);
}
