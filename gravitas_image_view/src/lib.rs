// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gravitas_image_view --heading-base-level=0

//! Gravitas Image View: a headless image-view model.
//!
//! This crate wraps [`gravitas_placement`] in a small stateful view model,
//! [`GravityImageView`], that mirrors how a real toolkit widget consumes the
//! placement computation:
//! - The host's layout pass feeds it the view content-area size.
//! - The host's image subsystem feeds it the intrinsic size of the current
//!   image (or `None` when no image is assigned).
//! - Gravity and scale mode are mutated via setters; every change
//!   recomputes the cached image transform.
//! - The host's rendering pipeline reads [`GravityImageView::image_transform`]
//!   when drawing.
//!
//! It does **not** own pixels or draw anything, and it performs no I/O.
//! With no image assigned the model is inert: the transform is `None` and
//! recomputation is deferred until an image arrives. That is a precondition
//! guard, not an error path; nothing here returns error values.
//!
//! ## Minimal example
//!
//! ```rust
//! use gravitas_image_view::GravityImageView;
//! use gravitas_placement::{Gravity, LayoutDirection, ScaleMode};
//! use kurbo::Size;
//!
//! let mut view = GravityImageView::new(Size::new(320.0, 180.0), LayoutDirection::Ltr);
//! view.set_scale_mode(ScaleMode::Crop);
//! view.set_gravity(Gravity::TOP);
//!
//! // Nothing to place yet.
//! assert!(view.image_transform().is_none());
//!
//! // The host assigns an image; the transform is now available.
//! view.set_image_size(Some(Size::new(600.0, 800.0)));
//! let rect = view.image_rect().unwrap();
//! assert!(rect.y0.abs() < 1e-9);
//! assert!(rect.width() >= 320.0 - 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod view;

pub use view::{GravityImageView, GravityImageViewDebugInfo};
