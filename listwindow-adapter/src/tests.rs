use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec;
use std::vec::Vec;

use listwindow::{EngineError, EngineEvent, ListWindow, ListWindowOptions};

fn token_engine(viewport_height: u32) -> ListWindow<u64> {
    let options = ListWindowOptions::<u64>::new()
        .with_viewport_height(viewport_height)
        .with_overscan(0)
        .with_estimated_height(100)
        .with_identity(Some(|payload: &u64| *payload));
    ListWindow::new(options)
}

fn plain_controller(viewport_height: u32) -> Controller<u64> {
    Controller::new(
        ListWindowOptions::<u64>::new()
            .with_viewport_height(viewport_height)
            .with_overscan(0)
            .with_estimated_height(100),
    )
}

#[test]
fn anchors_survive_a_prepend() {
    let mut engine = token_engine(400);
    engine.reset(1000u64..1100);
    engine.scroll_to_offset(250);

    let anchor = capture_first_visible_anchor(&engine).unwrap();
    assert_eq!(anchor.token, 1002);
    assert_eq!(anchor.offset_into_item, 50);

    // Ten older rows land on top: every old index shifts down by ten.
    let mut rows: Vec<u64> = (2000u64..2010).collect();
    rows.extend(1000u64..1100);
    engine.reset(rows);

    assert!(apply_anchor(&mut engine, &anchor));
    assert_eq!(engine.scroll_offset(), 1250);
    assert_eq!(engine.visible_window().start_index, 12);
    assert_eq!(engine.token_of(12), Some(1002));
}

#[test]
fn anchors_need_an_identity_and_a_visible_item() {
    let options = ListWindowOptions::<u64>::new()
        .with_viewport_height(400)
        .with_estimated_height(100);
    let mut engine = ListWindow::new(options);
    assert!(capture_first_visible_anchor(&engine).is_none());

    // Items without an identity fn cannot be anchored.
    engine.reset(vec![1u64, 2, 3, 4, 5]);
    assert!(capture_first_visible_anchor(&engine).is_none());
}

#[test]
fn a_vanished_token_leaves_the_offset_alone() {
    let mut engine = token_engine(400);
    engine.reset(1000u64..1010);
    engine.scroll_to_offset(300);
    let anchor = capture_first_visible_anchor(&engine).unwrap();
    assert_eq!(anchor.token, 1003);

    engine.reset(5000u64..5010);
    engine.scroll_to_offset(300);
    assert!(!apply_anchor(&mut engine, &anchor));
    assert_eq!(engine.scroll_offset(), 300);
}

#[test]
fn a_glide_walks_monotonically_to_its_target() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(0u64..200);

    let to = controller
        .glide_to_index(150, 0, 100, Easing::SmoothStep)
        .unwrap();
    assert_eq!(to, 15_000);
    assert!(controller.is_gliding());

    let mut last = 0u64;
    for now_ms in [0u64, 16, 32, 48, 80, 100] {
        let offset = controller.tick(now_ms).unwrap();
        assert!(offset >= last);
        last = offset;
    }
    assert!(!controller.is_gliding());
    assert_eq!(controller.engine().scroll_offset(), 15_000);
    assert_eq!(controller.engine().window().offset_y, 15_000);
    assert_eq!(controller.tick(116), None);
}

#[test]
fn a_host_scroll_interrupts_the_glide() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(0u64..100);

    controller.glide_to_offset(8000, 0, 200, Easing::Linear);
    controller.tick(16);
    assert!(controller.is_gliding());

    controller.on_scroll(1234, 20);
    assert!(!controller.is_gliding());
    assert_eq!(controller.engine().scroll_offset(), 1234);

    // The interrupted scroll still settles through the debounce.
    assert_eq!(controller.tick(40), None);
    assert_eq!(controller.engine().scroll_offset(), 1234);
    assert_eq!(controller.engine().window().start_index, 12);
}

#[test]
fn a_glide_settles_with_a_single_jump_update() {
    let emits = Arc::new(AtomicUsize::new(0));
    let options = ListWindowOptions::<u64>::new()
        .with_viewport_height(400)
        .with_overscan(0)
        .with_estimated_height(100)
        .with_on_update(Some({
            let emits = Arc::clone(&emits);
            move |event: EngineEvent<'_, u64>| {
                if matches!(event, EngineEvent::Window(_)) {
                    emits.fetch_add(1, Ordering::SeqCst);
                }
                Ok(())
            }
        }));
    let mut controller = Controller::new(options);
    controller.engine_mut().reset(0u64..100);
    assert_eq!(emits.load(Ordering::SeqCst), 1);

    controller.glide_to_offset(5000, 0, 80, Easing::EaseInOutCubic);
    let mut now = 0u64;
    while controller.is_gliding() {
        now += 16;
        controller.tick(now);
    }
    assert_eq!(emits.load(Ordering::SeqCst), 2);
    assert_eq!(controller.engine().scroll_offset(), 5000);
}

#[test]
fn idle_ticks_fire_the_debounced_recompute() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(0u64..50);

    controller.on_scroll(900, 0);
    assert!(controller.engine().update_pending());

    assert_eq!(controller.tick(8), None);
    assert!(controller.engine().update_pending());
    assert_eq!(controller.tick(16), None);
    assert!(!controller.engine().update_pending());
    assert_eq!(controller.engine().window().start_index, 9);
}

#[test]
fn glides_to_stale_indices_are_refused() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(vec![1u64, 2, 3]);

    let err = controller
        .glide_to_index(3, 0, 100, Easing::Linear)
        .unwrap_err();
    assert_eq!(err, EngineError::StaleIndex { index: 3, len: 3 });
    assert!(!controller.is_gliding());
}

#[test]
fn glide_targets_clamp_and_zero_durations_finish_at_once() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(0u64..10);

    let to = controller.glide_to_offset(u64::MAX, 0, 0, Easing::Linear);
    assert_eq!(to, 600);
    assert_eq!(controller.tick(16), Some(600));
    assert!(!controller.is_gliding());
}

#[test]
fn jumps_interrupt_glides() {
    let mut controller = plain_controller(400);
    controller.engine_mut().reset(0u64..100);

    controller.glide_to_offset(9000, 0, 500, Easing::Linear);
    assert_eq!(controller.scroll_to_index(30), Ok(3000));
    assert!(!controller.is_gliding());
    assert_eq!(controller.engine().window().start_index, 30);

    controller.glide_to_offset(9000, 0, 500, Easing::Linear);
    assert_eq!(controller.scroll_to_offset(150), 150);
    assert!(!controller.is_gliding());
}

#[test]
fn viewport_resizes_flow_through_the_controller() {
    let mut controller = plain_controller(200);
    controller.engine_mut().reset(0u64..40);
    assert_eq!(controller.engine().window().len(), 4);

    controller.set_viewport_height(800, 0);
    assert!(controller.engine().update_pending());
    controller.tick(16);
    assert_eq!(controller.engine().options().viewport_height, 800);
    assert_eq!(controller.engine().window().len(), 10);
}

#[test]
fn glide_samples_clamp_to_their_endpoints() {
    let glide = Glide::new(100, 300, 50, 100, Easing::Linear);
    assert_eq!(glide.sample(0), 100);
    assert_eq!(glide.sample(50), 100);
    assert_eq!(glide.sample(100), 200);
    assert_eq!(glide.sample(150), 300);
    assert_eq!(glide.sample(u64::MAX), 300);
    assert!(!glide.is_done(149));
    assert!(glide.is_done(150));

    // Glides can run backwards, toward the top.
    let up = Glide::new(300, 100, 0, 100, Easing::Linear);
    assert_eq!(up.sample(50), 200);
    assert_eq!(up.sample(400), 100);
}

#[test]
fn easing_curves_stay_in_the_unit_square() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(0.5), 0.5);
        assert_eq!(easing.sample(1.0), 1.0);

        let mut last = 0.0f64;
        for step in 0..=20 {
            let t = f64::from(step) / 20.0;
            let v = easing.sample(t);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= last);
            last = v;
        }
    }
}
