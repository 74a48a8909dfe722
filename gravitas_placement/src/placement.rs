// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::gravity::{Gravity, LayoutDirection};
use crate::scale_mode::ScaleMode;

/// Computes the transform placing an image of intrinsic size `image` within
/// a view of size `view`.
///
/// The result maps image-space coordinates (origin at the image's top-left
/// corner) into view-space coordinates. It is built in three stages, each
/// composed onto the previous one:
///
/// 1. Translate the image so its center coincides with the view center.
/// 2. For [`ScaleMode::Inside`] / [`ScaleMode::Crop`], apply a uniform scale
///    about the view center so the image fits inside, or covers, the view.
///    [`ScaleMode::None`] skips this stage.
/// 3. Shift the (now centered and scaled) image toward the edges named by
///    `gravity`. On each axis the first matching flag wins: `LEFT` (or `END`
///    under RTL), then `RIGHT` (or `START` under RTL); `TOP`, then `BOTTOM`.
///    Axes with no matching flag stay centered.
///
/// The computation is pure: identical inputs always produce an identical
/// transform. Degenerate sizes are tolerated; a zero-area view or image
/// yields a degenerate but finite transform (see [`ScaleMode`] ratio notes
/// below).
///
/// # Example
///
/// ```rust
/// use gravitas_placement::{placement_transform, Gravity, LayoutDirection, ScaleMode};
/// use kurbo::{Point, Size};
///
/// let transform = placement_transform(
///     Size::new(100.0, 100.0),
///     Size::new(50.0, 50.0),
///     ScaleMode::None,
///     Gravity::TOP | Gravity::LEFT,
///     LayoutDirection::Ltr,
/// );
/// // The image's top-left corner lands on the view origin.
/// assert_eq!(transform * Point::ORIGIN, Point::ORIGIN);
/// ```
#[must_use]
pub fn placement_transform(
    view: Size,
    image: Size,
    mode: ScaleMode,
    gravity: Gravity,
    direction: LayoutDirection,
) -> Affine {
    let view_center = Point::new(view.width / 2.0, view.height / 2.0);

    // Center the image in the middle of the view.
    let mut transform = Affine::translate((
        view_center.x - image.width / 2.0,
        view_center.y - image.height / 2.0,
    ));

    // Scale uniformly about the view center, if the mode calls for it.
    if let Some(ratio) = scale_ratio(view, image, mode) {
        transform = Affine::translate(view_center.to_vec2())
            * Affine::scale(ratio)
            * Affine::translate(-view_center.to_vec2())
            * transform;
    }

    // Shift off-center per gravity. The shift distances are derived from the
    // image rect as placed by the stages above.
    let placed = map_rect(transform, Rect::new(0.0, 0.0, image.width, image.height));
    let horizontal_shift = view.width / 2.0 - placed.width() / 2.0;
    let vertical_shift = view.height / 2.0 - placed.height() / 2.0;

    let rtl = direction.is_rtl();
    let dx = if gravity.intersects(Gravity::LEFT) || (rtl && gravity.intersects(Gravity::END)) {
        -horizontal_shift
    } else if gravity.intersects(Gravity::RIGHT) || (rtl && gravity.intersects(Gravity::START)) {
        horizontal_shift
    } else {
        0.0
    };
    let dy = if gravity.intersects(Gravity::TOP) {
        -vertical_shift
    } else if gravity.intersects(Gravity::BOTTOM) {
        vertical_shift
    } else {
        0.0
    };

    Affine::translate((dx, dy)) * transform
}

/// Computes the view-space rectangle the image occupies after placement.
///
/// This is the image rect `(0, 0, image.width, image.height)` mapped through
/// [`placement_transform`] with the same arguments.
#[must_use]
pub fn placed_rect(
    view: Size,
    image: Size,
    mode: ScaleMode,
    gravity: Gravity,
    direction: LayoutDirection,
) -> Rect {
    let transform = placement_transform(view, image, mode, gravity, direction);
    map_rect(transform, Rect::new(0.0, 0.0, image.width, image.height))
}

/// Uniform scale ratio for the given mode, or `None` when no scaling applies.
///
/// A zero image dimension makes that axis's ratio non-finite; such an axis
/// imposes no fitting constraint and is excluded from the min/max selection.
/// With both ratios non-finite the scale stage is skipped entirely, so the
/// returned transform stays finite for any non-negative inputs.
fn scale_ratio(view: Size, image: Size, mode: ScaleMode) -> Option<f64> {
    let prefer_min = match mode {
        ScaleMode::None => return None,
        ScaleMode::Inside => true,
        ScaleMode::Crop => false,
    };
    let width_ratio = view.width / image.width;
    let height_ratio = view.height / image.height;
    match (width_ratio.is_finite(), height_ratio.is_finite()) {
        (true, true) => Some(if prefer_min {
            width_ratio.min(height_ratio)
        } else {
            width_ratio.max(height_ratio)
        }),
        (true, false) => Some(width_ratio),
        (false, true) => Some(height_ratio),
        (false, false) => None,
    }
}

/// Maps `rect` through `transform` and returns the axis-aligned bounding box.
///
/// Corner mapping is sufficient for the translate+scale transforms built
/// here; no rotation or skew is ever involved.
fn map_rect(transform: Affine, rect: Rect) -> Rect {
    let p0 = transform * Point::new(rect.x0, rect.y0);
    let p1 = transform * Point::new(rect.x1, rect.y1);
    Rect::new(
        p0.x.min(p1.x),
        p0.y.min(p1.y),
        p0.x.max(p1.x),
        p0.y.max(p1.y),
    )
}
