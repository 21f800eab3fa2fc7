//! Clamping utilities over a rectangle and a bounding box.
//!
//! Bounds with a zero or negative span on an axis collapse that axis to a
//! single point at the bound's low edge. That is not an error.

use crate::geometry::FrameRect;

bitflags::bitflags! {
    /// Which rectangle edges were pinned against the bounds during one update.
    ///
    /// Accumulated across the clamp passes of a single update and consumed by
    /// the aspect reconciler to decide which edges may still grow.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClampedSides: u8 {
        const NONE   = 0b0000;
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const TOP    = 0b0100;
        const BOTTOM = 0b1000;
    }
}

/// Restrict `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `max < min` the range is
/// treated as the single point `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    let max = if max < min { min } else { max };
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Pin the edges of `rect` that fall outside `bounds`, resizing the rect.
///
/// Per axis, a rect wider than the bounds has both edges pinned to them.
/// Otherwise each violating edge is pinned; with `symmetrically` set, the
/// opposite edge moves inward by the same amount so the center is preserved.
///
/// An edge lying exactly on the bound counts as pinned. Returns the pinned
/// sides; callers OR them into the bitmask for the current update.
pub fn clamp_to_bounds(
    rect: &mut FrameRect,
    bounds: &FrameRect,
    symmetrically: bool,
) -> ClampedSides {
    let mut sides = ClampedSides::NONE;
    let (lo, hi) = clamp_axis(&mut rect.x1, &mut rect.x2, bounds.x1, bounds.x2, symmetrically);
    if lo {
        sides |= ClampedSides::LEFT;
    }
    if hi {
        sides |= ClampedSides::RIGHT;
    }
    let (lo, hi) = clamp_axis(&mut rect.y1, &mut rect.y2, bounds.y1, bounds.y2, symmetrically);
    if lo {
        sides |= ClampedSides::TOP;
    }
    if hi {
        sides |= ClampedSides::BOTTOM;
    }
    sides
}

/// Translate `rect` so it lies fully inside `bounds` without resizing it.
///
/// An axis on which the rect is larger than the bounds snaps to exactly the
/// bounds' span; the overflow is dropped. Returns the sides that touched the
/// bounds.
pub fn keep_inside_bounds(rect: &mut FrameRect, bounds: &FrameRect) -> ClampedSides {
    let mut sides = ClampedSides::NONE;
    let (lo, hi) = shift_axis(&mut rect.x1, &mut rect.x2, bounds.x1, bounds.x2);
    if lo {
        sides |= ClampedSides::LEFT;
    }
    if hi {
        sides |= ClampedSides::RIGHT;
    }
    let (lo, hi) = shift_axis(&mut rect.y1, &mut rect.y2, bounds.y1, bounds.y2);
    if lo {
        sides |= ClampedSides::TOP;
    }
    if hi {
        sides |= ClampedSides::BOTTOM;
    }
    sides
}

fn clamp_axis(lo: &mut f64, hi: &mut f64, min: f64, max: f64, symmetrically: bool) -> (bool, bool) {
    let max = if max < min { min } else { max };
    if *hi - *lo > max - min {
        *lo = min;
        *hi = max;
        return (true, true);
    }

    let mut pinned = (false, false);
    if *lo <= min {
        let delta = min - *lo;
        *lo = min;
        if symmetrically {
            *hi -= delta;
        }
        pinned.0 = true;
    }
    if *hi >= max {
        let delta = *hi - max;
        *hi = max;
        if symmetrically {
            *lo += delta;
        }
        pinned.1 = true;
    }
    // A rect lying wholly outside the bounds collapses onto the nearest bound.
    *lo = clamp(*lo, min, max);
    *hi = clamp(*hi, min, max).max(*lo);
    pinned
}

fn shift_axis(lo: &mut f64, hi: &mut f64, min: f64, max: f64) -> (bool, bool) {
    let max = if max < min { min } else { max };
    if *hi - *lo > max - min {
        *lo = min;
        *hi = max;
        return (true, true);
    }
    if *lo < min {
        let delta = min - *lo;
        *lo += delta;
        *hi += delta;
    } else if *hi > max {
        let delta = *hi - max;
        *lo -= delta;
        *hi -= delta;
    }
    (*lo <= min, *hi >= max)
}
