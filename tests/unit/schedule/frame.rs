use super::*;

#[test]
fn bursts_collapse_into_one_frame() {
    let mut c = FrameCoalescer::new();
    assert!(c.request());
    for _ in 0..9 {
        assert!(!c.request());
    }
    assert!(c.is_pending());
    assert!(c.take());
    assert!(!c.take());
    assert_eq!(c.requested(), 10);
    assert_eq!(c.coalesced(), 9);
}

#[test]
fn request_after_fire_schedules_again() {
    let mut c = FrameCoalescer::new();
    assert!(c.request());
    assert!(c.take());
    assert!(!c.is_pending());
    assert!(c.request());
    assert_eq!(c.coalesced(), 0);
}

#[test]
fn take_without_request_is_false() {
    let mut c = FrameCoalescer::new();
    assert!(!c.take());
}
