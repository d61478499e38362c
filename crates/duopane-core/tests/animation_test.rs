//! Integration tests for interpolation and the resize animator.

use std::time::Duration;

use duopane_core::*;
use proptest::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn drive(anim: &mut SizeAnimator, q: &mut FrameQueue<ManualClock>) -> Vec<SizePair> {
    let mut published = Vec::new();
    for _ in 0..1000 {
        let due = q.take_due();
        if due.is_empty() {
            break;
        }
        q.clock_mut().advance(FRAME);
        for token in due {
            if let Some(outcome) = anim.on_frame(q, token) {
                published.push(outcome.sizes());
            }
        }
    }
    published
}

#[test]
fn superseding_job_wins() {
    let mut q = FrameQueue::new(ManualClock::new());
    let mut anim = SizeAnimator::default();
    anim.start(&mut q, SizePair::exact(60.0), SizePair::exact(5.0), DEFAULT_DURATION, false);

    // Let A run a few frames.
    for _ in 0..3 {
        q.clock_mut().advance(FRAME);
        for token in q.take_due() {
            anim.on_frame(&mut q, token);
        }
    }
    let a_token = q.take_due();
    assert_eq!(a_token.len(), 1);

    anim.start(&mut q, SizePair::exact(40.0), SizePair::exact(80.0), DEFAULT_DURATION, true);
    for token in a_token {
        assert_eq!(anim.on_frame(&mut q, token), None);
    }

    let published = drive(&mut anim, &mut q);
    // B moves left upward from 40; anything below 40 would come from A.
    assert!(published.iter().all(|p| p.left() >= 40.0));
    assert_eq!(published.last(), Some(&SizePair::exact(80.0)));
}

#[test]
fn frame_count_matches_duration() {
    let mut q = FrameQueue::new(ManualClock::new());
    let mut anim = SizeAnimator::default();
    anim.start(&mut q, SizePair::exact(5.0), SizePair::exact(60.0), DEFAULT_DURATION, true);
    let published = drive(&mut anim, &mut q);
    // 260ms at 16ms per frame finishes on the 17th frame.
    assert_eq!(published.len(), 17);
}

#[test]
fn out_of_range_target_finishes_in_range() {
    for target in [150.0, -3.0, f64::NAN] {
        let mut q = FrameQueue::new(ManualClock::new());
        let mut anim = SizeAnimator::default();
        anim.start(
            &mut q,
            SizePair::exact(30.0),
            SizePair::exact(target),
            DEFAULT_DURATION,
            true,
        );
        let published = drive(&mut anim, &mut q);
        assert!(!published.is_empty());
        for p in &published {
            assert!((0.0..=100.0).contains(&p.left()), "{target}: {p:?}");
            assert!((0.0..=100.0).contains(&p.right()), "{target}: {p:?}");
        }
        assert_eq!(published.last(), Some(&SizePair::exact(target)));
    }
}

#[test]
fn linear_easing_is_selectable() {
    let mid = interpolate_with(
        Easing::Linear,
        SizePair::exact(0.0),
        SizePair::exact(100.0),
        0.3,
    );
    assert!((mid.left() - 30.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn interpolation_stays_between_endpoints(
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
        t in -1.0f64..2.0,
    ) {
        let p = interpolate(SizePair::exact(a), SizePair::exact(b), t);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(p.left() >= lo - 1e-9 && p.left() <= hi + 1e-9);
        prop_assert!((p.left() + p.right() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sanitized_pairs_are_well_formed(
        left in prop::num::f64::ANY,
        right in prop::num::f64::ANY,
    ) {
        let p = SizePair::new(left, right).rounded();
        prop_assert!((0.0..=100.0).contains(&p.left()));
        prop_assert!((0.0..=100.0).contains(&p.right()));
        prop_assert_eq!(((p.left() + p.right()) * 100.0).round() / 100.0, 100.0);
    }

    #[test]
    fn published_frames_keep_sum(
        from in 0.0f64..=100.0,
        to in 0.0f64..=100.0,
        ms in 0u64..600,
    ) {
        let mut q = FrameQueue::new(ManualClock::new());
        let mut anim = SizeAnimator::default();
        anim.start(
            &mut q,
            SizePair::exact(from),
            SizePair::exact(to),
            Duration::from_millis(ms),
            false,
        );
        for p in drive(&mut anim, &mut q) {
            prop_assert_eq!(((p.left() + p.right()) * 100.0).round() / 100.0, 100.0);
        }
        prop_assert!(!anim.is_running());
    }

    #[test]
    fn unchecked_endpoints_stay_in_range(from in prop::num::f64::ANY, to in prop::num::f64::ANY) {
        let mut q = FrameQueue::new(ManualClock::new());
        let mut anim = SizeAnimator::default();
        anim.start(&mut q, SizePair::exact(from), SizePair::exact(to), DEFAULT_DURATION, false);
        for p in drive(&mut anim, &mut q) {
            prop_assert!((0.0..=100.0).contains(&p.left()));
            prop_assert!((0.0..=100.0).contains(&p.right()));
        }
        prop_assert!(!anim.is_running());
    }
}
