mod common;

use carousel::constants::{Millis, TRANSITION_DURATION};
use carousel::render::RenderCall;
use carousel::{ArrowSide, Direction, Effect, InputEvent, Key, SlideVisual, Transform};
use common::*;
use serde_json::json;

fn manual() -> serde_json::Value {
    json!({ "contentClass": ".banner", "autoPlay": false })
}

#[test]
fn first_display_activates_slide_zero_without_animation() {
    let (carousel, notes) = build(document(1024, &[3, 2]), manual());

    for id in [C0, C1] {
        assert_eq!(carousel.current_slide(id), Some(0));
        assert_eq!(carousel.sink().visual(id, 0), Some(&SlideVisual::SHOWN));
        assert_eq!(carousel.sink().visual(id, 1), Some(&SlideVisual::HIDDEN));
    }
    assert!(!carousel.is_transitioning());
    assert_single_active(&carousel);
    assert_eq!(
        *notes.borrow(),
        [
            Note::Before(0, None, 0),
            Note::After(0, 0),
            Note::Changed(0, 0),
            Note::Before(1, None, 0),
            Note::After(1, 0),
            Note::Changed(1, 0),
            Note::Init(2),
        ]
    );
}

#[test]
fn accepted_transition_updates_index_immediately_and_notifies_after_the_window() {
    let (mut carousel, notes) = build(document(1024, &[3]), manual());
    notes.borrow_mut().clear();

    carousel.next(C0);
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert!(carousel.is_transitioning());
    assert_eq!(*notes.borrow(), [Note::Before(0, Some(0), 1)]);

    carousel.advance(TRANSITION_DURATION - 1);
    assert!(carousel.is_transitioning());
    assert_eq!(notes.borrow().len(), 1);

    carousel.advance(1);
    assert!(!carousel.is_transitioning());
    assert_eq!(
        *notes.borrow(),
        [Note::Before(0, Some(0), 1), Note::After(0, 1), Note::Changed(0, 1)]
    );
    assert_single_active(&carousel);
}

#[test]
fn requests_during_a_transition_are_dropped() {
    let (mut carousel, notes) = build(document(1024, &[4]), manual());
    carousel.next(C0);
    notes.borrow_mut().clear();

    carousel.next(C0);
    carousel.previous(C0);
    assert!(!carousel.request_slide(C0, 3, Direction::Forward));
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert!(notes.borrow().is_empty());

    // Nothing was queued either
    carousel.advance(TRANSITION_DURATION * 3);
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert_eq!(*notes.borrow(), [Note::After(0, 1), Note::Changed(0, 1)]);
}

#[test]
fn a_transition_in_one_container_blocks_the_others() {
    let (mut carousel, _) = build(document(1024, &[3, 3]), manual());

    carousel.next(C0);
    carousel.next(C1);
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert_eq!(carousel.current_slide(C1), Some(0));
    assert_eq!(carousel.in_flight().map(|f| f.container), Some(C0));

    carousel.advance(TRANSITION_DURATION);
    carousel.next(C1);
    assert_eq!(carousel.current_slide(C1), Some(1));
}

#[test]
fn keyboard_moves_only_the_first_container_while_the_lock_is_held() {
    let (mut carousel, _) = build(document(1024, &[3, 3]), manual());

    carousel.dispatch(InputEvent::KeyDown(Key::ArrowRight));
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert_eq!(carousel.current_slide(C1), Some(0));

    carousel.advance(TRANSITION_DURATION);
    carousel.dispatch(InputEvent::KeyDown(Key::ArrowLeft));
    assert_eq!(carousel.current_slide(C0), Some(0));

    carousel.advance(TRANSITION_DURATION);
    carousel.dispatch(InputEvent::KeyDown(Key::from_name("Enter")));
    assert!(!carousel.is_transitioning());
}

#[test]
fn out_of_range_targets_are_ignored() {
    let (mut carousel, notes) = build(document(1024, &[3]), manual());
    notes.borrow_mut().clear();

    assert!(!carousel.request_slide(C0, 3, Direction::Forward));
    carousel.go_to(C0, 7);
    assert_eq!(carousel.current_slide(C0), Some(0));
    assert!(!carousel.is_transitioning());
    assert!(notes.borrow().is_empty());
}

#[test]
fn looping_wraps_at_both_ends() {
    let (mut carousel, _) = build(document(1024, &[3]), manual());

    carousel.previous(C0);
    assert_eq!(carousel.current_slide(C0), Some(2));
    carousel.advance(TRANSITION_DURATION);
    carousel.next(C0);
    assert_eq!(carousel.current_slide(C0), Some(0));
}

#[test]
fn without_loop_navigation_clamps() {
    let (mut carousel, _) = build(
        document(1024, &[3]),
        json!({ "contentClass": ".banner", "autoPlay": false, "loop": false }),
    );

    carousel.previous(C0);
    assert_eq!(carousel.current_slide(C0), Some(0));
    carousel.advance(TRANSITION_DURATION);

    carousel.go_to(C0, 2);
    carousel.advance(TRANSITION_DURATION);
    carousel.next(C0);
    assert_eq!(carousel.current_slide(C0), Some(2));
    carousel.advance(TRANSITION_DURATION);
    assert_single_active(&carousel);
}

#[test]
fn effects_resolve_per_target_slide() {
    let (mut carousel, _) = build(
        document(1024, &[4]),
        json!({ "contentClass": ".banner", "autoPlay": false, "effect": ["fade", "scale"] }),
    );

    let mut seen = Vec::new();
    for _ in 0..4 {
        carousel.next(C0);
        let current = carousel.current_slide(C0).unwrap();
        seen.push(carousel.sink().visual(C0, current).unwrap().animation);
        carousel.advance(TRANSITION_DURATION);
    }
    assert_eq!(
        seen,
        [Some(Effect::Scale), Some(Effect::Scale), Some(Effect::Scale), Some(Effect::Fade)]
    );
}

#[test]
fn direction_only_changes_directional_geometry() {
    let (mut carousel, _) = build(document(1024, &[3]), manual());

    carousel.go_to(C0, 2);
    assert_eq!(carousel.sink().visual(C0, 0).unwrap().transform, Transform::TranslateX(-100.0));
    carousel.advance(TRANSITION_DURATION);

    carousel.go_to(C0, 1);
    assert_eq!(carousel.sink().visual(C0, 2).unwrap().transform, Transform::TranslateX(100.0));
    assert_eq!(carousel.sink().visual(C0, 1).unwrap().transform, Transform::TranslateX(0.0));
    assert!(!carousel.sink().visual(C0, 2).unwrap().visible);
}

#[test]
fn controls_drive_navigation_and_track_the_active_dot() {
    let (mut carousel, _) = build(document(1024, &[3]), manual());

    carousel.dispatch(InputEvent::Arrow { container: C0, side: ArrowSide::Next });
    assert_eq!(carousel.current_slide(C0), Some(1));
    carousel.advance(TRANSITION_DURATION);

    carousel.dispatch(InputEvent::Dot { container: C0, index: 0 });
    assert_eq!(carousel.current_slide(C0), Some(0));
    carousel.advance(TRANSITION_DURATION);

    carousel.dispatch(InputEvent::Arrow { container: C0, side: ArrowSide::Prev });
    assert_eq!(carousel.current_slide(C0), Some(2));

    let dots: Vec<_> = carousel
        .sink()
        .calls
        .iter()
        .filter_map(|call| match call {
            RenderCall::ActiveDot { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(dots, [0, 1, 0, 2]);
}

#[test]
fn clicks_on_missing_controls_do_nothing() {
    let (mut carousel, _) = build(
        document(1024, &[3]),
        json!({
            "contentClass": ".banner",
            "autoPlay": false,
            "navigation": { "arrows": false, "dots": false },
        }),
    );

    carousel.dispatch(InputEvent::Arrow { container: C0, side: ArrowSide::Next });
    carousel.dispatch(InputEvent::Dot { container: C0, index: 2 });
    assert_eq!(carousel.current_slide(C0), Some(0));
    assert!(!carousel
        .sink()
        .calls
        .iter()
        .any(|call| matches!(call, RenderCall::CreateControls { .. })));
}

#[test]
fn unknown_containers_are_ignored() {
    let (mut carousel, _) = build(document(1024, &[3]), manual());
    carousel.next(C2);
    carousel.dispatch(InputEvent::TouchEnd { container: C2, x: 0.0 });
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.current_slide(C2), None);
}

#[test]
fn transitions_at_the_end_of_the_clock_saturate() {
    let (mut carousel, notes) = build(document(1024, &[3]), manual());
    carousel.advance(Millis::MAX);
    assert_eq!(carousel.now(), Millis::MAX);
    notes.borrow_mut().clear();

    carousel.next(C0);
    assert_eq!(carousel.current_slide(C0), Some(1));
    assert_eq!(carousel.in_flight().map(|f| f.until), Some(Millis::MAX));

    carousel.advance(0);
    assert!(!carousel.is_transitioning());
    assert_eq!(
        *notes.borrow(),
        [Note::Before(0, Some(0), 1), Note::After(0, 1), Note::Changed(0, 1)]
    );
}
