// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};

use gravitas_placement::{
    placed_rect, placement_transform, Gravity, LayoutDirection, ScaleMode,
};

/// Headless model of an image view with per-image gravity and scale mode.
///
/// `GravityImageView` tracks a view size, an optionally assigned image, and
/// the placement configuration, and keeps the resulting image transform up
/// to date. It can be used to:
/// - Recompute the image transform whenever the view is resized, the image
///   is swapped, or gravity/scale-mode change.
/// - Expose the transform and the placed image rectangle for the host's
///   rendering pipeline.
///
/// The layout direction is resolved by the host once, when the view is
/// attached, and stays fixed for the view's lifetime.
#[derive(Clone, Debug)]
pub struct GravityImageView {
    view_size: Size,
    image_size: Option<Size>,
    gravity: Gravity,
    scale_mode: ScaleMode,
    direction: LayoutDirection,
    transform: Option<Affine>,
}

impl GravityImageView {
    /// Creates a view model of the given size with no image assigned.
    ///
    /// - Initial gravity is [`Gravity::CENTER`].
    /// - Initial scale mode is [`ScaleMode::None`].
    /// - With no image assigned, [`GravityImageView::image_transform`]
    ///   returns `None` and recomputation is deferred.
    #[must_use]
    pub fn new(view_size: Size, direction: LayoutDirection) -> Self {
        Self {
            view_size,
            image_size: None,
            gravity: Gravity::default(),
            scale_mode: ScaleMode::default(),
            direction,
            transform: None,
        }
    }

    /// Returns the current view content-area size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view content-area size, as produced by the host's layout
    /// pass, and recomputes the image transform.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.recompute();
    }

    /// Returns the intrinsic size of the assigned image, if any.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// Assigns or clears the image, identified by its intrinsic size, and
    /// recomputes the image transform.
    ///
    /// Passing `None` detaches the image; the cached transform is dropped
    /// and recomputation is deferred until an image is present again.
    pub fn set_image_size(&mut self, size: Option<Size>) {
        if self.image_size == size {
            return;
        }
        self.image_size = size;
        self.recompute();
    }

    /// Returns the current gravity mask.
    #[must_use]
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Sets the gravity mask and recomputes the image transform.
    pub fn set_gravity(&mut self, gravity: Gravity) {
        if self.gravity == gravity {
            return;
        }
        self.gravity = gravity;
        self.recompute();
    }

    /// Returns the current scale mode.
    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Sets the scale mode and recomputes the image transform.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        if self.scale_mode == mode {
            return;
        }
        self.scale_mode = mode;
        self.recompute();
    }

    /// Returns the layout direction the view was attached with.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Returns the transform mapping image coordinates into view coordinates,
    /// or `None` when no image is assigned.
    ///
    /// The host applies this to its rendering matrix when drawing the image.
    #[must_use]
    pub fn image_transform(&self) -> Option<Affine> {
        self.transform
    }

    /// Returns the view-space rectangle the image occupies, or `None` when
    /// no image is assigned.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rect> {
        let image = self.image_size?;
        Some(placed_rect(
            self.view_size,
            image,
            self.scale_mode,
            self.gravity,
            self.direction,
        ))
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GravityImageViewDebugInfo {
        GravityImageViewDebugInfo {
            view_size: self.view_size,
            image_size: self.image_size,
            image_rect: self.image_rect(),
            gravity: self.gravity,
            scale_mode: self.scale_mode,
            direction: self.direction,
        }
    }

    fn recompute(&mut self) {
        // No image: nothing to place. This is a deferred computation, not an
        // error; the next recompute with an image present fills it in.
        self.transform = self.image_size.map(|image| {
            placement_transform(
                self.view_size,
                image,
                self.scale_mode,
                self.gravity,
                self.direction,
            )
        });
    }
}

/// Debug snapshot of a [`GravityImageView`] state.
#[derive(Clone, Copy, Debug)]
pub struct GravityImageViewDebugInfo {
    /// Current view content-area size.
    pub view_size: Size,
    /// Intrinsic size of the assigned image, if any.
    pub image_size: Option<Size>,
    /// View-space rectangle the image occupies, if an image is assigned.
    pub image_rect: Option<Rect>,
    /// Current gravity mask.
    pub gravity: Gravity,
    /// Current scale mode.
    pub scale_mode: ScaleMode,
    /// Layout direction resolved at attachment.
    pub direction: LayoutDirection,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use gravitas_placement::{Gravity, LayoutDirection, ScaleMode};

    use super::GravityImageView;

    #[test]
    fn no_image_means_no_transform() {
        let mut view = GravityImageView::new(Size::new(100.0, 100.0), LayoutDirection::Ltr);
        assert_eq!(view.image_transform(), None);
        assert_eq!(view.image_rect(), None);

        // Configuration changes without an image stay deferred.
        view.set_gravity(Gravity::TOP | Gravity::LEFT);
        view.set_scale_mode(ScaleMode::Crop);
        assert_eq!(view.image_transform(), None);
    }

    #[test]
    fn assigning_an_image_computes_the_transform() {
        let mut view = GravityImageView::new(Size::new(100.0, 100.0), LayoutDirection::Ltr);
        view.set_gravity(Gravity::TOP | Gravity::LEFT);
        view.set_image_size(Some(Size::new(50.0, 50.0)));

        let transform = view.image_transform().unwrap();
        assert_eq!(transform * Point::ORIGIN, Point::ORIGIN);

        let rect = view.image_rect().unwrap();
        assert_eq!(rect, kurbo::Rect::new(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn clearing_the_image_drops_the_transform() {
        let mut view = GravityImageView::new(Size::new(100.0, 100.0), LayoutDirection::Ltr);
        view.set_image_size(Some(Size::new(50.0, 50.0)));
        assert!(view.image_transform().is_some());

        view.set_image_size(None);
        assert_eq!(view.image_transform(), None);
        assert_eq!(view.image_rect(), None);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut view = GravityImageView::new(Size::new(80.0, 60.0), LayoutDirection::Rtl);
        view.set_scale_mode(ScaleMode::Inside);
        view.set_image_size(Some(Size::new(40.0, 30.0)));

        let info = view.debug_info();
        assert_eq!(info.view_size, Size::new(80.0, 60.0));
        assert_eq!(info.image_size, Some(Size::new(40.0, 30.0)));
        assert_eq!(info.scale_mode, ScaleMode::Inside);
        assert_eq!(info.direction, LayoutDirection::Rtl);
        assert!(info.image_rect.is_some());
    }
}
