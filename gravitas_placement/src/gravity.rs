// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

bitflags::bitflags! {
    /// Alignment intents for positioning an image within its view.
    ///
    /// Flags compose freely across axes (for example `TOP | RIGHT` pins the
    /// image to the top-right corner). When multiple flags on the same axis
    /// are set, the placement routine resolves them with a fixed precedence
    /// (see [`crate::placement_transform`]); no combination is rejected.
    ///
    /// [`Gravity::START`] and [`Gravity::END`] are layout-direction aware:
    /// under a right-to-left [`LayoutDirection`] they resolve to the right
    /// and left edges respectively, and they are inert under left-to-right
    /// layout (where `LEFT`/`RIGHT` should be used directly).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Gravity: u8 {
        /// Pin the image to the bottom edge of the view.
        const BOTTOM            = 0b0000_0001;
        /// Center the image vertically. This is the default vertical
        /// behavior, so the flag exists for readability and symmetry.
        const CENTER_VERTICAL   = 0b0000_0010;
        /// Pin the image to the top edge of the view.
        const TOP               = 0b0000_0100;
        /// Pin the image to the left edge of the view.
        const LEFT              = 0b0000_1000;
        /// Center the image horizontally. Like [`Gravity::CENTER_VERTICAL`],
        /// centering is the default, so this flag requires no handling.
        const CENTER_HORIZONTAL = 0b0001_0000;
        /// Pin the image to the right edge of the view.
        const RIGHT             = 0b0010_0000;
        /// Pin the image to the leading edge (left under LTR, right under RTL).
        const START             = 0b0100_0000;
        /// Pin the image to the trailing edge (right under LTR, left under RTL).
        const END               = 0b1000_0000;
        /// Center the image on both axes.
        const CENTER = Self::CENTER_HORIZONTAL.bits() | Self::CENTER_VERTICAL.bits();
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FromStr for Gravity {
    type Err = ParseGravityError;

    /// Parses a pipe-separated keyword list, for example `"top|start"`.
    ///
    /// Recognized keywords: `left`, `right`, `top`, `bottom`, `start`, `end`,
    /// `center`, `center_horizontal`, `center_vertical`. Whitespace around
    /// keywords is ignored; the list must be non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut gravity = Self::empty();
        for keyword in s.split('|') {
            gravity |= match keyword.trim() {
                "left" => Self::LEFT,
                "right" => Self::RIGHT,
                "top" => Self::TOP,
                "bottom" => Self::BOTTOM,
                "start" => Self::START,
                "end" => Self::END,
                "center" => Self::CENTER,
                "center_horizontal" => Self::CENTER_HORIZONTAL,
                "center_vertical" => Self::CENTER_VERTICAL,
                _ => return Err(ParseGravityError),
            };
        }
        Ok(gravity)
    }
}

/// Error returned when parsing a [`Gravity`] keyword list fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseGravityError;

impl fmt::Display for ParseGravityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized gravity keyword")
    }
}

impl core::error::Error for ParseGravityError {}

/// Resolved layout direction of the hosting view.
///
/// This only affects how [`Gravity::START`] and [`Gravity::END`] are
/// interpreted; all other flags are direction-independent. The hosting
/// toolkit is expected to resolve the direction once, when the view is
/// attached, and pass it through unchanged afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left-to-right layout; `START` means the left edge.
    #[default]
    Ltr,
    /// Right-to-left layout; `START` means the right edge.
    Rtl,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left layout.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }
}
