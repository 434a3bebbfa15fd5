// File: crates/scrub-core/tests/animate.rs
// Purpose: Validate the tick-driven interpolation primitive.

use scrub_core::animate::{ease_in_out, Animation, ColorFade};
use scrub_core::types::Rgb;

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert!(ease_in_out(0.0).abs() < 1e-6);
    assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    // Slow start: the first quarter covers less than a quarter of the range.
    assert!(ease_in_out(0.25) < 0.25);
}

#[test]
fn settled_animation_reports_its_value() {
    let a = Animation::settled_at(42.0);
    assert!(a.is_settled());
    assert_eq!(a.value(), 42.0);
}

#[test]
fn animation_settles_exactly_on_target() {
    let mut a = Animation::settled_at(0.0);
    a.start(10.0, 100.0);
    a.tick(60.0);
    assert!(!a.is_settled());
    a.tick(60.0); // overshoots the duration
    assert!(a.is_settled());
    assert_eq!(a.value(), 10.0);
}

#[test]
fn untouched_animation_holds_its_last_value() {
    // An animation that stops receiving ticks just stays put.
    let mut a = Animation::settled_at(0.0);
    a.start(10.0, 100.0);
    a.tick(50.0);
    let held = a.value();
    assert_eq!(a.value(), held);
    assert_eq!(a.value(), held);
}

#[test]
fn zero_duration_start_settles_immediately() {
    let mut a = Animation::settled_at(1.0);
    a.start(5.0, 0.0);
    assert!(a.is_settled());
    assert_eq!(a.value(), 5.0);
}

#[test]
fn restart_carries_the_current_value_forward() {
    let mut a = Animation::settled_at(0.0);
    a.start(100.0, 100.0);
    a.tick(50.0);
    let current = a.value();
    a.start(-20.0, 100.0);
    assert!((a.value() - current).abs() < 1e-4, "retarget must not snap");
    a.tick(100.0);
    assert_eq!(a.value(), -20.0);
}

#[test]
fn color_fade_blends_channelwise() {
    let fade = ColorFade { from: Rgb::new(0, 0, 0), to: Rgb::new(200, 100, 50) };
    assert_eq!(fade.at(0.0), Rgb::new(0, 0, 0));
    assert_eq!(fade.at(1.0), Rgb::new(200, 100, 50));
    assert_eq!(fade.at(0.5), Rgb::new(100, 50, 25));
    // Progress is clamped.
    assert_eq!(fade.at(2.0), Rgb::new(200, 100, 50));
}
