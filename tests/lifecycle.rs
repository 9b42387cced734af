mod common;

use carousel::constants::TRANSITION_DURATION;
use carousel::render::{RecordingSink, RenderCall};
use carousel::{
    Carousel, Config, ConfigError, ContainerHandle, Controls, Effect, EffectSetting, Hooks,
    InputEvent, Key, StaticDocument,
};
use common::*;
use serde_json::json;

#[test]
fn construction_requires_a_locator() {
    let result = Carousel::from_options(
        json!({ "effect": "fade" }),
        document(1024, &[3]),
        RecordingSink::new(),
        Hooks::new(),
    );
    assert!(matches!(result, Err(ConfigError::MissingLocator)));
}

#[test]
fn locates_by_id_and_by_element() {
    let (carousel, _) = build(document(1024, &[2, 3]), json!({ "contentId": "c1" }));
    assert_eq!(carousel.container_count(), 1);
    assert_eq!(carousel.container_handle(C0), Some(ContainerHandle(1)));
    assert_eq!(carousel.slide_count(C0), Some(3));

    let (carousel, _) = build(document(1024, &[2, 3]), json!({ "content": 0 }));
    assert_eq!(carousel.container_handle(C0), Some(ContainerHandle(0)));
}

#[test]
fn containers_without_slides_are_skipped() {
    let (carousel, notes) = build(document(1024, &[0, 2, 0, 4]), json!({ "contentClass": ".banner" }));

    assert_eq!(carousel.container_count(), 2);
    assert_eq!(carousel.container_handle(C0), Some(ContainerHandle(1)));
    assert_eq!(carousel.container_handle(C1), Some(ContainerHandle(3)));
    assert_eq!(notes.borrow().last(), Some(&Note::Init(2)));
    assert_single_active(&carousel);
}

#[test]
fn no_container_found_still_initializes() {
    let (carousel, notes) = build(document(1024, &[3]), json!({ "contentClass": ".missing" }));
    assert_eq!(carousel.container_count(), 0);
    assert_eq!(*notes.borrow(), [Note::Init(0)]);
}

#[test]
fn slide_count_caps_detected_slides() {
    let (carousel, _) = build(
        document(1024, &[5, 2]),
        json!({ "contentClass": ".banner", "slideCount": 3 }),
    );
    assert_eq!(carousel.slide_count(C0), Some(3));
    assert_eq!(carousel.slide_count(C1), Some(2));
}

#[test]
fn setup_hides_every_slide_and_builds_controls() {
    let (carousel, _) = build(document(1024, &[3]), json!({ "contentClass": ".banner", "autoPlay": false }));

    let calls = &carousel.sink().calls;
    assert_eq!(calls.len(), 6);
    assert!(matches!(calls[0], RenderCall::Slide { slide: 0, .. }));
    assert!(matches!(calls[2], RenderCall::Slide { slide: 2, .. }));
    assert!(matches!(calls[3], RenderCall::Slide { slide: 0, .. }));
    assert_eq!(
        calls[4],
        RenderCall::CreateControls { container: C0, controls: Controls { arrows: true, dots: Some(3) } }
    );
    assert_eq!(calls[5], RenderCall::ActiveDot { container: C0, index: 0 });
}

#[test]
fn number_formatting_is_delegated_per_slide() {
    let (carousel, _) = build(
        document(1024, &[2]),
        json!({ "contentClass": ".banner", "numberFormat": { "abbreviate": true } }),
    );
    let formatted: Vec<_> = carousel
        .sink()
        .calls
        .iter()
        .filter_map(|call| match call {
            RenderCall::FormatNumbers { slide, .. } => Some(*slide),
            _ => None,
        })
        .collect();
    assert_eq!(formatted, [0, 1]);
}

#[test]
fn destroy_releases_timers_controls_and_keyboard() {
    let (mut carousel, _) = build(document(1024, &[3, 3]), json!({ "contentClass": ".banner" }));
    assert!(carousel.keyboard_attached());
    carousel.sink_mut().clear();

    carousel.destroy();

    assert_eq!(carousel.pending_timers(), 0);
    assert!(!carousel.keyboard_attached());
    assert_eq!(carousel.container_count(), 0);
    assert_eq!(
        carousel.sink().calls,
        [RenderCall::RemoveControls { container: C0 }, RenderCall::RemoveControls { container: C1 }]
    );

    carousel.dispatch(InputEvent::KeyDown(Key::ArrowRight));
    carousel.advance(60_000);
    assert!(!carousel.is_transitioning());
    assert_eq!(carousel.sink().calls.len(), 2);
}

#[test]
fn destroy_lets_an_inflight_transition_finish() {
    let (mut carousel, notes) = build(document(1024, &[3]), json!({ "contentClass": ".banner" }));
    carousel.next(C0);
    carousel.destroy();
    notes.borrow_mut().clear();

    carousel.advance(TRANSITION_DURATION);
    assert!(!carousel.is_transitioning());
    assert_eq!(*notes.borrow(), [Note::After(0, 1), Note::Changed(0, 1)]);
}

#[test]
fn reconfigure_merges_and_restarts_from_scratch() {
    let (mut carousel, notes) = build(
        document(1024, &[3]),
        json!({ "contentClass": ".banner", "navigation": { "dots": false } }),
    );
    carousel.advance(TRANSITION_DURATION);
    carousel.next(C0);
    carousel.advance(TRANSITION_DURATION);
    notes.borrow_mut().clear();

    carousel
        .reconfigure(json!({ "effect": "cube", "autoPlay": false, "navigation": { "keyboard": false } }))
        .unwrap();

    let config = carousel.config();
    assert_eq!(config.effect, EffectSetting::One(Effect::Cube));
    assert!(!config.auto_play);
    assert!(!config.navigation.dots, "earlier options survive the merge");
    assert!(!config.navigation.keyboard);
    assert!(!carousel.keyboard_attached());

    assert_eq!(carousel.current_slide(C0), Some(0));
    assert_eq!(carousel.autoplay_due(C0), None);
    assert_eq!(
        *notes.borrow(),
        [Note::Before(0, None, 0), Note::After(0, 0), Note::Changed(0, 0), Note::Init(1)]
    );
}

#[test]
fn failed_reconfigure_keeps_the_running_carousel() {
    let (mut carousel, _) = build(document(1024, &[3]), json!({ "contentClass": ".banner" }));

    let err = carousel.reconfigure(json!({ "responsive": [{ "effect": "fade" }] })).unwrap_err();
    assert!(matches!(err, ConfigError::Breakpoint { index: 0, found: 0 }));
    assert_eq!(carousel.container_count(), 1);
    assert!(carousel.keyboard_attached());
    assert_eq!(carousel.autoplay_due(C0), Some(5000));
}

#[test]
fn reconfigure_reapplies_a_new_rule_set() {
    let (mut carousel, _) = build(
        document(500, &[3]),
        json!({ "contentClass": ".banner", "responsive": [{ "maxMedia": 768, "effect": "fade" }] }),
    );
    assert_eq!(carousel.active_breakpoint(), Some(0));

    carousel
        .reconfigure(json!({ "responsive": [{ "maxMedia": 600, "effect": "scale" }] }))
        .unwrap();
    assert_eq!(carousel.active_breakpoint(), Some(0));
    assert_eq!(carousel.config().effect, EffectSetting::One(Effect::Scale));
}

#[test]
fn construction_from_a_typed_config() {
    let config = Config::from_json_str(r#"{ "contentClass": "banner", "loop": false }"#).unwrap();
    let document = StaticDocument::new(800).with_container(None, "banner", 2);
    let carousel = Carousel::new(config, document, RecordingSink::new()).unwrap();
    assert_eq!(carousel.container_count(), 1);
    assert!(!carousel.config().looping);
}
