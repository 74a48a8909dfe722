// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=gravitas_placement --heading-base-level=0

//! Gravitas Placement: gravity and scale-mode driven image placement.
//!
//! This crate computes the affine transform that positions and scales an
//! image within a view's bounds, given the image's intrinsic size, the view
//! size, a [`ScaleMode`], and a [`Gravity`] mask. Gravity and scaling are
//! configured independently of each other and of whatever layout the view
//! itself participates in, which makes this useful for large "hero image"
//! content where the interesting part of the image should stay pinned to a
//! chosen edge while the image covers or fits the view.
//!
//! It does **not** decode, draw, or own images. Callers are expected to:
//! - Supply the view's content-area size from their layout pass.
//! - Supply the image's intrinsic size from their image subsystem.
//! - Apply the returned [`kurbo::Affine`] in their rendering pipeline.
//! - Resolve the view's layout direction once and pass it through as a
//!   [`LayoutDirection`] (this is what gives [`Gravity::START`] and
//!   [`Gravity::END`] their meaning).
//!
//! ## Minimal example
//!
//! ```rust
//! use gravitas_placement::{placed_rect, Gravity, LayoutDirection, ScaleMode};
//! use kurbo::Size;
//!
//! // A wide view showing a tall image, scaled to cover and pinned to the top.
//! let view = Size::new(320.0, 180.0);
//! let image = Size::new(600.0, 800.0);
//! let rect = placed_rect(
//!     view,
//!     image,
//!     ScaleMode::Crop,
//!     Gravity::TOP,
//!     LayoutDirection::Ltr,
//! );
//!
//! // The view is fully covered and the image's top edge stays visible.
//! assert!(rect.y0.abs() < 1e-9);
//! assert!(rect.width() >= view.width - 1e-9);
//! assert!(rect.height() >= view.height - 1e-9);
//! ```
//!
//! ## Declarative configuration
//!
//! [`Gravity`] and [`ScaleMode`] implement [`core::str::FromStr`] for the
//! keyword forms used by declarative style sources (`"top|start"`,
//! `"crop"`), so hosts that restore configuration from such a source only
//! need to hand over the resolved strings:
//!
//! ```rust
//! use gravitas_placement::{Gravity, ScaleMode};
//!
//! let gravity: Gravity = "bottom|end".parse().unwrap();
//! assert_eq!(gravity, Gravity::BOTTOM | Gravity::END);
//! let mode: ScaleMode = "inside".parse().unwrap();
//! assert_eq!(mode, ScaleMode::Inside);
//! ```
//!
//! ## Design notes
//!
//! - Scaling is always **uniform**; aspect ratio is never distorted.
//! - Transforms are plain values, rebuilt from scratch on every call. There
//!   is no hidden state and no caching at this layer.
//! - Conflicting gravity flags are not rejected; a fixed precedence order
//!   resolves them deterministically (see [`placement_transform`]).
//! - Degenerate (zero) view or image sizes produce degenerate but finite
//!   transforms rather than errors.
//!
//! This crate is `no_std`.

#![no_std]

mod gravity;
mod placement;
mod scale_mode;

pub use gravity::{Gravity, LayoutDirection, ParseGravityError};
pub use placement::{placed_rect, placement_transform};
pub use scale_mode::{ParseScaleModeError, ScaleMode};
