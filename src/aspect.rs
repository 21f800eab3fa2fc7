//! Aspect ratio parsing and reconciliation.
//!
//! The reconciler forces the rectangle to a target width/height ratio by
//! moving exactly one side (or one symmetric pair of sides) per pass. Which
//! side moves is looked up in the side-to-resize table from the active
//! resizing function and whether the rectangle is too wide or too tall, then
//! filtered against the sides already pinned to the bounds and the minimum
//! size.
//!
//! ```text
//!     function      too wide                 too tall
//!     ───────────   ──────────────────────   ──────────────────────
//!     upper-left    left,  top,    bottom    top,    left,  right
//!     upper-right   right, top,    bottom    top,    right, left
//!     lower-left    left,  bottom, top       bottom, left,  right
//!     lower-right   right, bottom, top       bottom, right, left
//!     left          bottom, top, left        bottom, left,  right
//!     right         bottom, top, right       bottom, right, left
//!     top           right, top,    bottom    right, left, top
//!     bottom        right, bottom, top       right, left, bottom
//!
//!     fixed center: corners shrink the oversized axis symmetrically,
//!     edges resize the free axis symmetrically, each falling back to
//!     the other axis.
//! ```
//!
//! Every row holds one side that shrinks the oversized axis and both sides
//! that grow the other axis, so a ratio that fits the bounds and the minimum
//! size is always reachable.
//!
//! A side that would grow is skipped when it is pinned against the bounds;
//! a side whose result would drop under the minimum size is skipped too.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;
use whereat::{At, at};

use crate::clamp::ClampedSides;
use crate::config::ConfigError;
use crate::geometry::FrameRect;
use crate::handle::ResizeFunction;

/// Two aspect values closer than this are considered equal.
pub const ASPECT_TOLERANCE: f64 = 1e-4;

/// Slack for minimum-size comparisons on reconciled dimensions.
const SIZE_EPSILON: f64 = 1e-9;

/// Target width:height ratio. Both components are positive and finite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AspectRatio {
    numerator: f64,
    denominator: f64,
}

impl AspectRatio {
    /// Create a ratio. Returns `None` unless both components are positive
    /// and finite.
    pub fn new(numerator: f64, denominator: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(numerator) && valid(denominator) {
            Some(Self {
                numerator,
                denominator,
            })
        } else {
            None
        }
    }

    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    pub fn denominator(&self) -> f64 {
        self.denominator
    }

    /// Width divided by height.
    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }
}

impl FromStr for AspectRatio {
    type Err = At<ConfigError>;

    /// Parse `"<number>:<number>"`, e.g. `"16:9"` or `"1.5 : 1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((n, d)) = s.split_once(':') else {
            return Err(at!(ConfigError::MissingSeparator));
        };
        let parse = |v: &str| v.trim().parse::<f64>().map_err(|_| at!(ConfigError::InvalidNumber));
        let numerator = parse(n)?;
        let denominator = parse(d)?;
        Self::new(numerator, denominator).ok_or_else(|| at!(ConfigError::NonPositive))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// Which way the rectangle misses its target ratio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fit {
    /// Width is too large for the height.
    TooWide,
    /// Height is too large for the width.
    TooTall,
}

/// The side(s) that absorb an aspect correction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    None,
    Left,
    Right,
    Top,
    Bottom,
    /// Left and right, equidistant from the center.
    Horizontal,
    /// Top and bottom, equidistant from the center.
    Vertical,
}

impl Side {
    /// Whether moving this side changes the width (as opposed to the height).
    pub const fn resizes_width(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Horizontal)
    }

    /// Whether resolving this side for `fit` enlarges the rectangle.
    pub fn grows(self, fit: Fit) -> bool {
        match self {
            Self::None => false,
            s if s.resizes_width() => fit == Fit::TooTall,
            _ => fit == Fit::TooWide,
        }
    }

    /// Clamped sides that keep this side from growing.
    fn blockers(self) -> ClampedSides {
        match self {
            Self::None => ClampedSides::NONE,
            Self::Left => ClampedSides::LEFT,
            Self::Right => ClampedSides::RIGHT,
            Self::Top => ClampedSides::TOP,
            Self::Bottom => ClampedSides::BOTTOM,
            Self::Horizontal => ClampedSides::LEFT | ClampedSides::RIGHT,
            Self::Vertical => ClampedSides::TOP | ClampedSides::BOTTOM,
        }
    }
}

/// Candidate sides for a correction, most preferred first, padded with
/// [`Side::None`].
pub fn side_candidates(function: ResizeFunction, fit: Fit, fixed_center: bool) -> [Side; 3] {
    use Fit::*;
    use ResizeFunction as F;
    use Side::*;

    if fixed_center {
        return match (function, fit) {
            (F::UpperLeft | F::UpperRight | F::LowerLeft | F::LowerRight, TooWide) => {
                [Horizontal, Vertical, None]
            }
            (F::UpperLeft | F::UpperRight | F::LowerLeft | F::LowerRight, TooTall) => {
                [Vertical, Horizontal, None]
            }
            (F::Left | F::Right, _) => [Vertical, Horizontal, None],
            (F::Top | F::Bottom, _) => [Horizontal, Vertical, None],
            (F::None | F::Moving | F::Creating, _) => [None; 3],
        };
    }

    match (function, fit) {
        (F::UpperLeft, TooWide) => [Left, Top, Bottom],
        (F::UpperLeft, TooTall) => [Top, Left, Right],
        (F::UpperRight, TooWide) => [Right, Top, Bottom],
        (F::UpperRight, TooTall) => [Top, Right, Left],
        (F::LowerLeft, TooWide) => [Left, Bottom, Top],
        (F::LowerLeft, TooTall) => [Bottom, Left, Right],
        (F::LowerRight, TooWide) => [Right, Bottom, Top],
        (F::LowerRight, TooTall) => [Bottom, Right, Left],
        (F::Left, TooWide) => [Bottom, Top, Left],
        (F::Left, TooTall) => [Bottom, Left, Right],
        (F::Right, TooWide) => [Bottom, Top, Right],
        (F::Right, TooTall) => [Bottom, Right, Left],
        (F::Top, TooWide) => [Right, Top, Bottom],
        (F::Top, TooTall) => [Right, Left, Top],
        (F::Bottom, TooWide) => [Right, Bottom, Top],
        (F::Bottom, TooTall) => [Right, Left, Bottom],
        (F::None | F::Moving | F::Creating, _) => [None; 3],
    }
}

/// Move `side` so that the rectangle matches `aspect` (width / height).
///
/// Symmetric sides are placed equidistant from `center` on their axis.
pub fn resolve_side(rect: &mut FrameRect, side: Side, aspect: f64, center: (f64, f64)) {
    let w = rect.width();
    let h = rect.height();
    match side {
        Side::None => {}
        Side::Left => rect.x1 = rect.x2 - aspect * h,
        Side::Right => rect.x2 = rect.x1 + aspect * h,
        Side::Top => rect.y1 = rect.y2 - w / aspect,
        Side::Bottom => rect.y2 = rect.y1 + w / aspect,
        Side::Horizontal => {
            let half = aspect * h / 2.0;
            rect.x1 = center.0 - half;
            rect.x2 = center.0 + half;
        }
        Side::Vertical => {
            let half = w / aspect / 2.0;
            rect.y1 = center.1 - half;
            rect.y2 = center.1 + half;
        }
    }
}

/// Inputs for one aspect reconciliation of the frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectReconciler {
    pub aspect: AspectRatio,
    pub function: ResizeFunction,
    /// Pinned center when resizing around a fixed center.
    pub fixed_center: Option<(f64, f64)>,
    pub min_width: f64,
    pub min_height: f64,
}

impl AspectReconciler {
    /// How `rect` misses the target ratio, or `None` if it is within
    /// [`ASPECT_TOLERANCE`].
    pub fn fit(&self, rect: &FrameRect) -> Option<Fit> {
        let target = self.aspect.value();
        let w = rect.width();
        let h = rect.height();
        if h > 0.0 && Float::abs(w / h - target) < ASPECT_TOLERANCE {
            return None;
        }
        if w > target * h {
            Some(Fit::TooWide)
        } else {
            Some(Fit::TooTall)
        }
    }

    /// Pick the side to resize for `rect`, given the sides pinned so far in
    /// this update. [`Side::None`] when nothing needs to (or can) move.
    pub fn side_to_resize(&self, rect: &FrameRect, clamped: ClampedSides) -> Side {
        let Some(fit) = self.fit(rect) else {
            return Side::None;
        };
        let target = self.aspect.value();
        side_candidates(self.function, fit, self.fixed_center.is_some())
            .into_iter()
            .take_while(|side| *side != Side::None)
            .find(|side| {
                if side.grows(fit) && clamped.intersects(side.blockers()) {
                    return false;
                }
                if side.resizes_width() {
                    target * rect.height() >= self.min_width - SIZE_EPSILON
                } else {
                    rect.width() / target >= self.min_height - SIZE_EPSILON
                }
            })
            .unwrap_or(Side::None)
    }

    /// Run one reconciliation pass, returning the side that moved.
    pub fn reconcile(&self, rect: &mut FrameRect, clamped: ClampedSides) -> Side {
        let side = self.side_to_resize(rect, clamped);
        if side != Side::None {
            let center = self.fixed_center.unwrap_or_else(|| rect.center());
            resolve_side(rect, side, self.aspect.value(), center);
        }
        side
    }
}
