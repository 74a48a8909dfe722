// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cycles a grid of gravity image views through differently sized images.
//!
//! This is a headless rendition of the classic sample for this kind of
//! widget: a handful of views with mixed gravity/scale-mode configurations,
//! each "clicked" four times to swap in images of wildly different intrinsic
//! sizes, printing the placed rectangle after every swap.

use gravitas_demos::Widget;
use gravitas_image_view::GravityImageView;
use gravitas_placement::{Gravity, LayoutDirection, ScaleMode};
use kurbo::Size;

/// Intrinsic sizes of the demo images, from a tiny thumbnail to an
/// oversized hero shot.
const IMAGE_SIZES: [Size; 4] = [
    Size::new(160.0, 107.0),
    Size::new(2000.0, 1333.0),
    Size::new(120.0, 80.0),
    Size::new(700.0, 467.0),
];

fn view(gravity: Gravity, mode: ScaleMode) -> Widget {
    let mut v = GravityImageView::new(Size::new(320.0, 180.0), LayoutDirection::Ltr);
    v.set_gravity(gravity);
    v.set_scale_mode(mode);
    Widget::Image(v)
}

fn main() {
    let mut tree = Widget::Group(vec![
        Widget::Group(vec![
            view(Gravity::CENTER, ScaleMode::None),
            view(Gravity::TOP | Gravity::LEFT, ScaleMode::None),
        ]),
        Widget::Group(vec![
            view(Gravity::TOP, ScaleMode::Crop),
            view(Gravity::BOTTOM | Gravity::RIGHT, ScaleMode::Crop),
            view(Gravity::CENTER, ScaleMode::Inside),
        ]),
    ]);

    for (round, image) in IMAGE_SIZES.iter().enumerate() {
        println!(
            "round {round}: image {}x{}",
            image.width, image.height
        );
        for view in tree.collect_images() {
            view.set_image_size(Some(*image));
            let rect = view.image_rect().expect("image was just assigned");
            println!(
                "  gravity={:?} mode={:?} -> placed rect ({:.1}, {:.1}) .. ({:.1}, {:.1})",
                view.gravity(),
                view.scale_mode(),
                rect.x0,
                rect.y0,
                rect.x1,
                rect.y1
            );
        }
    }
}
