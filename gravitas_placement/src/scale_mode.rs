// Copyright 2026 the Gravitas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// Policy for resizing an image to its view, independent of gravity.
///
/// Scaling is always uniform (aspect ratio is preserved); the only choice is
/// whether to scale at all, and if so whether the image must fit inside the
/// view or cover it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    /// No scaling. The image is placed at its intrinsic size.
    ///
    /// ```text
    ///      ┏━━━━━━┓
    ///      ┃      ┃
    ///      ┃ ┌──┐ ┃
    ///      ┃ └──┘ ┃
    ///      ┃      ┃
    ///      ┗━━━━━━┛
    /// ```
    #[default]
    None,
    /// Scale so the whole image is visible and as large as possible within
    /// the view. The view is not necessarily fully covered (one axis may
    /// letterbox).
    ///
    /// ```text
    ///      ┏━━━━━━┓
    ///      ┌──────┐
    ///      │      │
    ///      │      │
    ///      └──────┘
    ///      ┗━━━━━━┛
    /// ```
    Inside,
    /// Scale so the view is fully covered by the image. The whole image is
    /// not necessarily visible (one axis may overflow and be clipped).
    ///
    /// ```text
    /// ┌────┏━━━━━━┓────┐
    /// │    ┃      ┃    │
    /// │    ┃      ┃    │
    /// └────┗━━━━━━┛────┘
    /// ```
    Crop,
}

impl FromStr for ScaleMode {
    type Err = ParseScaleModeError;

    /// Parses the keywords `none`, `inside`, and `crop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Self::None),
            "inside" => Ok(Self::Inside),
            "crop" => Ok(Self::Crop),
            _ => Err(ParseScaleModeError),
        }
    }
}

/// Error returned when parsing a [`ScaleMode`] keyword fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseScaleModeError;

impl fmt::Display for ParseScaleModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized scale mode keyword")
    }
}

impl core::error::Error for ParseScaleModeError {}
