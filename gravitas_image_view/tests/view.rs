// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `gravitas_image_view` crate.
//!
//! These exercise the view model end to end: configuration setters, the
//! no-image guard, recomputation on resize and image swap, and layout
//! direction behavior.

use gravitas_image_view::GravityImageView;
use gravitas_placement::{Gravity, LayoutDirection, ScaleMode};
use kurbo::{Rect, Size};

fn rect_near(actual: Rect, expected: Rect) -> bool {
    let eps = 1e-9;
    (actual.x0 - expected.x0).abs() < eps
        && (actual.y0 - expected.y0).abs() < eps
        && (actual.x1 - expected.x1).abs() < eps
        && (actual.y1 - expected.y1).abs() < eps
}

#[test]
fn resize_repositions_the_image() {
    let mut view = GravityImageView::new(Size::new(100.0, 100.0), LayoutDirection::Ltr);
    view.set_image_size(Some(Size::new(50.0, 50.0)));
    assert!(rect_near(
        view.image_rect().unwrap(),
        Rect::new(25.0, 25.0, 75.0, 75.0)
    ));

    view.set_view_size(Size::new(200.0, 100.0));
    assert!(rect_near(
        view.image_rect().unwrap(),
        Rect::new(75.0, 25.0, 125.0, 75.0)
    ));
}

#[test]
fn image_swap_recomputes_under_current_config() {
    let mut view = GravityImageView::new(Size::new(100.0, 50.0), LayoutDirection::Ltr);
    view.set_scale_mode(ScaleMode::Inside);

    view.set_image_size(Some(Size::new(200.0, 100.0)));
    assert!(rect_near(
        view.image_rect().unwrap(),
        Rect::new(0.0, 0.0, 100.0, 50.0)
    ));

    // A taller image letterboxes horizontally under the same config.
    view.set_image_size(Some(Size::new(100.0, 100.0)));
    let rect = view.image_rect().unwrap();
    assert!((rect.height() - 50.0).abs() < 1e-9);
    assert!(rect.width() <= 100.0 + 1e-9);
}

#[test]
fn gravity_and_scale_mode_setters_take_effect() {
    let mut view = GravityImageView::new(Size::new(100.0, 100.0), LayoutDirection::Ltr);
    view.set_image_size(Some(Size::new(50.0, 200.0)));

    view.set_scale_mode(ScaleMode::Crop);
    view.set_gravity(Gravity::TOP);
    let rect = view.image_rect().unwrap();
    // Crop scales to 100x400; TOP pins the overflow downward.
    assert!(rect_near(rect, Rect::new(0.0, 0.0, 100.0, 400.0)));

    view.set_gravity(Gravity::BOTTOM);
    let rect = view.image_rect().unwrap();
    assert!(rect_near(rect, Rect::new(0.0, -300.0, 100.0, 100.0)));
}

#[test]
fn rtl_view_resolves_start_and_end() {
    let image = Some(Size::new(40.0, 30.0));

    let mut rtl = GravityImageView::new(Size::new(200.0, 100.0), LayoutDirection::Rtl);
    rtl.set_image_size(image);
    rtl.set_gravity(Gravity::START);

    let mut ltr = GravityImageView::new(Size::new(200.0, 100.0), LayoutDirection::Ltr);
    ltr.set_image_size(image);
    ltr.set_gravity(Gravity::RIGHT);

    assert!(rect_near(
        rtl.image_rect().unwrap(),
        ltr.image_rect().unwrap()
    ));

    rtl.set_gravity(Gravity::END);
    ltr.set_gravity(Gravity::LEFT);
    assert!(rect_near(
        rtl.image_rect().unwrap(),
        ltr.image_rect().unwrap()
    ));
}

#[test]
fn recomputation_is_idempotent() {
    let mut a = GravityImageView::new(Size::new(123.0, 456.0), LayoutDirection::Rtl);
    a.set_scale_mode(ScaleMode::Crop);
    a.set_gravity(Gravity::BOTTOM | Gravity::END);
    a.set_image_size(Some(Size::new(78.0, 90.0)));

    let mut b = a.clone();
    // Re-apply the same configuration; the transform must not drift.
    b.set_gravity(Gravity::BOTTOM | Gravity::END);
    b.set_image_size(Some(Size::new(78.0, 90.0)));

    assert_eq!(
        a.image_transform().unwrap().as_coeffs(),
        b.image_transform().unwrap().as_coeffs()
    );
}

#[test]
fn keyword_configuration_round_trip() {
    // A host restoring configuration from a declarative style source hands
    // over resolved keyword strings.
    let gravity: Gravity = "top|end".parse().unwrap();
    let mode: ScaleMode = "crop".parse().unwrap();

    let mut view = GravityImageView::new(Size::new(200.0, 100.0), LayoutDirection::Rtl);
    view.set_gravity(gravity);
    view.set_scale_mode(mode);
    view.set_image_size(Some(Size::new(100.0, 100.0)));

    let rect = view.image_rect().unwrap();
    // END under RTL pins left; TOP pins up; crop covers the view.
    assert!((rect.x0 - 0.0).abs() < 1e-9);
    assert!((rect.y0 - 0.0).abs() < 1e-9);
    assert!(rect.width() >= 200.0 - 1e-9);
    assert!(rect.height() >= 100.0 - 1e-9);
}
