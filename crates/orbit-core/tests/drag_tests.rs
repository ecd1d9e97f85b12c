// Host-side tests for the pointer drag state machine and inertia.
// Pointer coordinates are synthesized around the centre of a 400×400 stage.

use orbit_core::*;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

const FRAME: f64 = 1.0 / 60.0;
const STAGE: StageRect = StageRect::sized(400.0, 400.0);

fn point_at(angle: f64) -> (f64, f64) {
    let (cx, cy) = STAGE.center();
    (cx + angle.cos() * 100.0, cy + angle.sin() * 100.0)
}

fn down(id: i32, angle: f64) -> PointerInput {
    let (x, y) = point_at(angle);
    PointerInput::Down { pointer_id: id, x, y }
}

fn mv(id: i32, angle: f64) -> PointerInput {
    let (x, y) = point_at(angle);
    PointerInput::Move { pointer_id: id, x, y }
}

fn running() -> (OrbitController<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0.0);
    let config = OrbitConfig::empty("outer").with_ring("outer", RingConfig::new(0.5, 0.2));
    let specs = vec![ItemSpec::on_ring("outer"), ItemSpec::on_ring("outer")];
    let mut c = OrbitController::new(config, &specs, STAGE, clock.clone()).expect("controller");
    assert!(c.start(false));
    (c, clock)
}

#[test]
fn quarter_turn_drag_adds_scaled_spin() {
    let (mut c, clock) = running();
    let sensitivity = c.config().drag_sensitivity;

    let r = c.handle_pointer(down(7, 0.0));
    assert_eq!(r.capture, Some(7));
    assert!(r.prevent_default);
    assert!(c.is_dragging());
    assert_eq!(c.velocity(), 0.0);

    clock.advance(0.2);
    let angle_before = c.angle_of(0).unwrap();
    let r = c.handle_pointer(mv(7, FRAC_PI_2));
    assert!(r.prevent_default);
    assert!((c.spin() - FRAC_PI_2 * sensitivity).abs() < 1e-9);
    assert!((c.angle_of(0).unwrap() - angle_before - FRAC_PI_2 * sensitivity).abs() < 1e-9);
    assert!((c.velocity() - FRAC_PI_2 * sensitivity / 0.2).abs() < 1e-9);

    let r = c.handle_pointer(PointerInput::Up { pointer_id: 7 });
    assert_eq!(r.release, Some(7));
    assert!(!c.is_dragging());
}

#[test]
fn inertia_keeps_direction_and_decays_to_rest() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.2);
    c.handle_pointer(mv(1, FRAC_PI_2));
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });

    let mut prev_velocity = c.velocity();
    let mut prev_spin = c.spin();
    let mut prev_step = f64::INFINITY;
    assert!(prev_velocity > 0.0);
    for _ in 0..600 {
        clock.advance(FRAME);
        c.frame();
        let v = c.velocity();
        assert!(v.abs() <= prev_velocity.abs(), "velocity grew: {v} > {prev_velocity}");
        assert!(v >= 0.0, "inertia flipped direction");
        let step = c.spin() - prev_spin;
        assert!(step >= 0.0);
        assert!(step <= prev_step);
        prev_step = step;
        prev_spin = c.spin();
        prev_velocity = v;
    }
    assert_eq!(c.velocity(), 0.0);

    // at rest, spin no longer moves
    let resting = c.spin();
    run_idle(&mut c, &clock, 10);
    assert_eq!(c.spin(), resting);
}

fn run_idle(c: &mut OrbitController<ManualClock>, clock: &ManualClock, n: usize) {
    for _ in 0..n {
        clock.advance(FRAME);
        c.frame();
    }
}

#[test]
fn backwards_drag_spins_backwards() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, FRAC_PI_2));
    clock.advance(0.1);
    c.handle_pointer(mv(1, FRAC_PI_4));
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });
    assert!(c.spin() < 0.0);
    assert!(c.velocity() < 0.0);
    let spin = c.spin();
    run_idle(&mut c, &clock, 5);
    assert!(c.spin() < spin);
}

#[test]
fn drag_across_wrap_boundary_is_a_small_step() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 3.13));
    clock.advance(0.05);
    c.handle_pointer(mv(1, -3.13));
    assert!(c.spin() > 0.0);
    assert!(c.spin() < 0.1, "spin {} looks like a full turn", c.spin());
}

#[test]
fn many_moves_per_frame_accumulate() {
    let (mut c, clock) = running();
    let sensitivity = c.config().drag_sensitivity;
    c.handle_pointer(down(1, 0.0));
    for k in 1..=8 {
        clock.advance(0.01);
        c.handle_pointer(mv(1, FRAC_PI_2 * k as f64 / 8.0));
    }
    assert!((c.spin() - FRAC_PI_2 * sensitivity).abs() < 1e-9);
}

#[test]
fn auto_spin_holds_while_dragging() {
    let (mut c, clock) = running();
    run_idle(&mut c, &clock, 10);
    let elapsed = c.elapsed();
    c.handle_pointer(down(1, 0.0));
    run_idle(&mut c, &clock, 30);
    assert_eq!(c.elapsed(), elapsed);
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });
    run_idle(&mut c, &clock, 1);
    assert!(c.elapsed() > elapsed);
}

#[test]
fn foreign_pointers_are_ignored() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.1);

    let r = c.handle_pointer(mv(2, FRAC_PI_2));
    assert_eq!(r, PointerResponse::default());
    assert_eq!(c.spin(), 0.0);

    let r = c.handle_pointer(down(2, 1.0));
    assert_eq!(r.capture, None);

    let r = c.handle_pointer(PointerInput::Up { pointer_id: 2 });
    assert_eq!(r.release, None);
    assert!(c.is_dragging());
}

#[test]
fn moves_without_drag_do_nothing() {
    let (mut c, _clock) = running();
    let r = c.handle_pointer(mv(1, FRAC_PI_2));
    assert_eq!(r, PointerResponse::default());
    assert_eq!(c.spin(), 0.0);
    assert!(!c.is_dragging());
}

#[test]
fn cancel_ends_drag_like_up() {
    let (mut c, clock) = running();
    c.handle_pointer(down(3, 0.0));
    clock.advance(0.1);
    c.handle_pointer(mv(3, 0.5));
    let r = c.handle_pointer(PointerInput::Cancel { pointer_id: 3 });
    assert_eq!(r.release, Some(3));
    assert!(!c.is_dragging());
    assert!(c.velocity() > 0.0);
}

#[test]
fn new_drag_stops_inertia() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.1);
    c.handle_pointer(mv(1, 1.0));
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });
    run_idle(&mut c, &clock, 3);
    assert!(c.velocity() > 0.0);

    c.handle_pointer(down(1, 0.0));
    assert_eq!(c.velocity(), 0.0);
}

#[test]
fn flick_velocity_is_capped() {
    let (mut c, clock) = running();
    let cap = c.config().max_drag_velocity;
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.001);
    c.handle_pointer(mv(1, 3.0));
    assert!((c.velocity() - cap).abs() < 1e-9);
}

#[test]
fn pausing_mid_drag_drops_the_gesture() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 0.0));
    assert_eq!(c.pause(), Some(1));
    assert!(!c.is_dragging());
    // already paused, nothing left to release
    assert_eq!(c.pause(), None);
    clock.advance(1.0);
    c.resume();
    assert!(c.frame().is_some());
}

#[test]
fn drag_multiplier_scales_ring_spin() {
    let clock = ManualClock::new(0.0);
    let config = OrbitConfig::empty("outer")
        .with_ring("outer", RingConfig::new(0.5, 0.0))
        .with_ring("inner", RingConfig::new(0.2, 0.0).with_drag_multiplier(0.5));
    let specs = vec![ItemSpec::at("outer", 0, 1), ItemSpec::at("inner", 0, 1)];
    let mut c = OrbitController::new(config, &specs, STAGE, clock.clone()).expect("controller");
    c.start(false);
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.1);
    c.handle_pointer(mv(1, 1.0));
    let outer = c.angle_of(0).unwrap();
    let inner = c.angle_of(1).unwrap();
    assert!((inner - outer * 0.5).abs() < 1e-9);
}

#[test]
fn tracker_reports_state_transitions() {
    let params = DragParams {
        sensitivity: 1.0,
        min_dt: 0.001,
        max_velocity: 100.0,
        release_hold: 0.1,
    };
    let mut tracker = DragTracker::default();
    assert_eq!(tracker.state(), DragState::Idle);

    let (_, effect) = tracker.apply(down(4, 0.0), 1.0, &STAGE, &params);
    assert_eq!(effect.velocity, Some(0.0));
    assert!(matches!(
        tracker.state(),
        DragState::Dragging { pointer_id: 4, .. }
    ));

    let (_, effect) = tracker.apply(mv(4, 0.5), 1.5, &STAGE, &params);
    assert!((effect.spin_delta - 0.5).abs() < 1e-9);
    assert!((effect.velocity.unwrap() - 1.0).abs() < 1e-9);

    assert_eq!(tracker.reset(), Some(4));
    assert_eq!(tracker.reset(), None);
}

#[test]
fn pausing_without_drag_releases_nothing() {
    let (mut c, _clock) = running();
    assert_eq!(c.pause(), None);
}

#[test]
fn moved_stage_is_remeasured_per_event() {
    // built while the stage sat at the viewport origin, then shifted right
    let (mut c, clock) = running();
    let sensitivity = c.config().drag_sensitivity;
    let moved = StageRect::new(300.0, 0.0, 400.0, 400.0);
    let (cx, cy) = moved.center();
    let at = |angle: f64| (cx + angle.cos() * 100.0, cy + angle.sin() * 100.0);

    let (x, y) = at(0.0);
    c.handle_pointer_at(moved, PointerInput::Down { pointer_id: 1, x, y });
    clock.advance(0.1);
    let (x, y) = at(FRAC_PI_2);
    c.handle_pointer_at(moved, PointerInput::Move { pointer_id: 1, x, y });

    assert!((c.spin() - FRAC_PI_2 * sensitivity).abs() < 1e-9, "spin {}", c.spin());
    assert_eq!(*c.stage(), moved);
}

#[test]
fn release_after_holding_still_does_not_fling() {
    let (mut c, clock) = running();
    let hold = c.config().release_hold;
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.05);
    c.handle_pointer(mv(1, 1.0));
    assert!(c.velocity() > 0.0);

    clock.advance(hold * 3.0);
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });
    assert_eq!(c.velocity(), 0.0);
    let spin = c.spin();
    for _ in 0..10 {
        clock.advance(FRAME);
        c.frame();
    }
    assert_eq!(c.spin(), spin);
}

#[test]
fn quick_release_keeps_fling() {
    let (mut c, clock) = running();
    c.handle_pointer(down(1, 0.0));
    clock.advance(0.05);
    c.handle_pointer(mv(1, 0.5));
    let velocity = c.velocity();
    clock.advance(0.01);
    c.handle_pointer(PointerInput::Up { pointer_id: 1 });
    assert_eq!(c.velocity(), velocity);
}
