// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo glue for the Gravitas crates.
//!
//! This crate holds a minimal retained widget tree so the demos have
//! something resembling a real UI hierarchy to walk. It is intentionally
//! tiny: groups nest, leaves are [`GravityImageView`] models, and a
//! depth-first traversal collects the image views for batch updates (the
//! moral equivalent of wiring a click listener onto every image view in a
//! window).

use gravitas_image_view::GravityImageView;

/// A node in the demo widget tree.
#[derive(Clone, Debug)]
pub enum Widget {
    /// A container holding child widgets in order.
    Group(Vec<Widget>),
    /// A leaf image view.
    Image(GravityImageView),
}

impl Widget {
    /// Collects mutable references to every image view in the subtree,
    /// depth first, in document order.
    pub fn collect_images(&mut self) -> Vec<&mut GravityImageView> {
        let mut views = Vec::new();
        collect_into(self, &mut views);
        views
    }
}

fn collect_into<'t>(widget: &'t mut Widget, out: &mut Vec<&'t mut GravityImageView>) {
    match widget {
        Widget::Group(children) => {
            for child in children {
                collect_into(child, out);
            }
        }
        Widget::Image(view) => out.push(view),
    }
}
