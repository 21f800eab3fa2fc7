//! The crop frame's state machine and update pipeline.
//!
//! A [`CropFrame`] owns the single working rectangle and the active
//! [`ResizeFunction`]. Every pointer move runs the same pipeline:
//!
//! 1. apply the pointer (plus the handle-grab offset) to the dragged edges,
//! 2. resolve inversion by swapping edges and mirroring the function,
//! 3. enforce minimum or fixed dimensions,
//! 4. clamp to the bounds (translate-to-fit when moving),
//! 5. reconcile the aspect ratio, re-clamping after every pass,
//! 6. snap to the integer view that gets emitted.
//!
//! All coordinates are relative to the container interior.

use crate::aspect::{AspectRatio, AspectReconciler, Side};
use crate::clamp::{ClampedSides, clamp_to_bounds, keep_inside_bounds};
use crate::config::{FixedRule, FrameConfig};
use crate::geometry::{CropRegion, FrameRect, SnappedRect};
use crate::handle::{Edge, ResizeFunction};

/// Upper bound on reconcile/clamp rounds per update. Each round that needs a
/// successor pins a new side, and every candidate list holds a shrinking side
/// plus both growing sides of the other axis, so three rounds settle any edge
/// or corner drag.
const MAX_RECONCILE_PASSES: usize = 3;

/// Crop frame geometry plus the state of the gesture driving it.
#[derive(Clone, Debug)]
pub struct CropFrame {
    config: FrameConfig,
    rect: FrameRect,
    snapped: SnappedRect,
    function: ResizeFunction,
    interior: Option<FrameRect>,
    bounds: Option<FrameRect>,
    /// Dragged edge minus pointer, captured at gesture start.
    grab: (f64, f64),
    /// Center the frame resizes around in fixed-center mode.
    center: (f64, f64),
    /// Edges opposite the dragged ones.
    other_side: (f64, f64),
    last: (f64, f64),
    fixed_center: bool,
}

impl CropFrame {
    pub fn new(config: FrameConfig) -> Self {
        let rect = config.initial;
        Self {
            rect,
            snapped: rect.snap(),
            function: ResizeFunction::None,
            interior: None,
            bounds: config.bounds(None),
            grab: (0.0, 0.0),
            center: rect.center(),
            other_side: (rect.x1, rect.y1),
            last: (0.0, 0.0),
            fixed_center: config.fixed_center,
            config,
        }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Working geometry in double precision.
    pub fn rect(&self) -> FrameRect {
        self.rect
    }

    /// Integer view from the last update.
    pub fn snapped(&self) -> SnappedRect {
        self.snapped
    }

    pub fn function(&self) -> ResizeFunction {
        self.function
    }

    /// Region the frame is currently clamped to, if any.
    pub fn bounds(&self) -> Option<FrameRect> {
        self.bounds
    }

    pub fn is_fixed_center(&self) -> bool {
        self.fixed_center
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.function != ResizeFunction::None
    }

    /// Record the container interior captured for this gesture.
    ///
    /// `None` means the container is unknown; container-constrained frames
    /// then move freely.
    pub fn set_container(&mut self, interior: Option<FrameRect>) {
        self.interior = interior;
        self.bounds = self.config.bounds(interior);
    }

    /// Replace the geometry outside of a gesture. The rect is normalized and
    /// clamped to the current bounds.
    pub fn set_rect(&mut self, rect: FrameRect) {
        let mut rect = rect.normalized();
        if let Some(bounds) = self.bounds {
            clamp_to_bounds(&mut rect, &bounds, false);
        }
        self.rect = rect;
        self.snapped = rect.snap();
    }

    /// Start a gesture at pointer `(x, y)`.
    ///
    /// With `precise` set the handle-grab offset is captured so the dragged
    /// edge keeps its distance to the pointer; otherwise the edge jumps to
    /// the pointer on the first move.
    pub fn begin(&mut self, function: ResizeFunction, x: f64, y: f64, precise: bool) {
        self.function = function;
        self.last = (x, y);
        self.center = self.rect.center();
        self.other_side = self.opposite_edges();
        self.grab = if precise {
            self.grab_offset(x, y)
        } else {
            (0.0, 0.0)
        };
        log::debug!("begin {function:?} at ({x}, {y}), grab {:?}", self.grab);
    }

    /// Start drawing a new frame from pointer `(x, y)`. The corner to drag
    /// is picked from the direction of the first move.
    pub fn begin_draw(&mut self, x: f64, y: f64) {
        let mut start = FrameRect::point(x, y);
        if let Some(bounds) = self.bounds {
            clamp_to_bounds(&mut start, &bounds, false);
        }
        self.rect = start;
        self.snapped = start.snap();
        self.function = ResizeFunction::Creating;
        self.last = (x, y);
        self.grab = (start.x1 - x, start.y1 - y);
        self.center = (start.x1, start.y1);
        self.other_side = self.center;
        log::debug!("begin drawing at ({x}, {y})");
    }

    /// Finish the gesture. The last geometry stays.
    pub fn end(&mut self) {
        if self.function != ResizeFunction::None {
            log::debug!("end {:?} with {:?}", self.function, self.snapped);
        }
        self.function = ResizeFunction::None;
    }

    /// Feed a pointer position through the update pipeline and return the
    /// integer view to emit.
    pub fn update(&mut self, x: f64, y: f64) -> SnappedRect {
        if self.function == ResizeFunction::Creating {
            let (dx, dy) = (x - self.last.0, y - self.last.1);
            if dx == 0.0 && dy == 0.0 {
                return self.snapped;
            }
            self.function = ResizeFunction::from_direction(dx, dy);
            log::debug!("drawing resolved to {:?}", self.function);
        }
        if self.function == ResizeFunction::None {
            return self.snapped;
        }

        let mut rect = self.rect;
        self.apply_coordinates(&mut rect, x + self.grab.0, y + self.grab.1);
        if self.function == ResizeFunction::Moving {
            if let Some(bounds) = self.bounds {
                keep_inside_bounds(&mut rect, &bounds);
            }
        } else {
            self.check_resizing_function(&mut rect);
            self.enforce_dimensions(&mut rect);
            let mut clamped = ClampedSides::NONE;
            if let Some(bounds) = self.bounds {
                clamp_to_bounds(&mut rect, &bounds, self.fixed_center);
                self.regrow_within(&mut rect, &bounds);
                clamped |= clamp_to_bounds(&mut rect, &bounds, self.fixed_center);
            }
            if let Some(aspect) = self.config.aspect() {
                self.reconcile(&mut rect, aspect, clamped);
            }
        }

        self.rect = rect;
        if !self.fixed_center {
            self.other_side = self.opposite_edges();
        }
        self.last = (x, y);
        self.snapped = rect.snap();
        log::trace!("{:?} ({x}, {y}) -> {:?}", self.function, self.snapped);
        self.snapped
    }

    /// Toggle fixed-center resizing, mid-gesture if need be.
    ///
    /// Switching on pins the current center. Switching off puts the opposite
    /// edges back where they were before fixed-center resizing began. An
    /// active resize is re-run at the last pointer position and the new
    /// view returned.
    pub fn set_fixed_center(&mut self, on: bool) -> Option<SnappedRect> {
        if on == self.fixed_center {
            return None;
        }
        self.fixed_center = on;
        if on {
            self.center = self.rect.center();
        } else {
            self.restore_other_side();
        }
        if self.function.is_resize() {
            Some(self.update(self.last.0, self.last.1))
        } else {
            None
        }
    }

    /// The frame as fractions of the image box: the content box in
    /// content mode, otherwise the container interior.
    pub fn crop_region(&self) -> CropRegion {
        match self.bounds.or(self.interior) {
            Some(image) => CropRegion::from_frame(&self.rect, &image),
            None => CropRegion::FULL,
        }
    }

    // ── pipeline steps ──────────────────────────────────────────────────

    fn apply_coordinates(&self, rect: &mut FrameRect, px: f64, py: f64) {
        if self.function == ResizeFunction::Moving {
            rect.translate(px - rect.x1, py - rect.y1);
            return;
        }
        let (cx, cy) = self.center;
        match self.function.x_edge() {
            Some(Edge::Low) => {
                rect.x1 = px;
                if self.fixed_center {
                    rect.x2 = 2.0 * cx - px;
                }
            }
            Some(Edge::High) => {
                rect.x2 = px;
                if self.fixed_center {
                    rect.x1 = 2.0 * cx - px;
                }
            }
            None => {}
        }
        match self.function.y_edge() {
            Some(Edge::Low) => {
                rect.y1 = py;
                if self.fixed_center {
                    rect.y2 = 2.0 * cy - py;
                }
            }
            Some(Edge::High) => {
                rect.y2 = py;
                if self.fixed_center {
                    rect.y1 = 2.0 * cy - py;
                }
            }
            None => {}
        }
    }

    /// Swap inverted edges and mirror the function so the drag continues on
    /// the other side.
    fn check_resizing_function(&mut self, rect: &mut FrameRect) {
        if rect.x2 < rect.x1 {
            core::mem::swap(&mut rect.x1, &mut rect.x2);
            self.function = self.function.mirror_horizontal();
            log::debug!("horizontal inversion, now {:?}", self.function);
        }
        if rect.y2 < rect.y1 {
            core::mem::swap(&mut rect.y1, &mut rect.y2);
            self.function = self.function.mirror_vertical();
            log::debug!("vertical inversion, now {:?}", self.function);
        }
    }

    /// Fixed dimensions from the active rule, per axis.
    fn fixed_size(&self) -> (Option<f64>, Option<f64>) {
        match self.config.fixed_rule {
            Some(FixedRule::Size { width, height }) => (Some(width), Some(height)),
            Some(FixedRule::Width(width)) => (Some(width), None),
            Some(FixedRule::Height(height)) => (None, Some(height)),
            Some(FixedRule::Aspect(_)) | None => (None, None),
        }
    }

    /// Apply fixed dimensions, or grow to the minimum size.
    fn enforce_dimensions(&self, rect: &mut FrameRect) {
        let (fixed_w, fixed_h) = self.fixed_size();
        let min_w = self.config.min_width;
        let min_h = self.config.min_height;
        let width = fixed_w.or((rect.width() < min_w).then_some(min_w));
        let height = fixed_h.or((rect.height() < min_h).then_some(min_h));
        if let Some(width) = width {
            self.set_width(rect, width);
        }
        if let Some(height) = height {
            self.set_height(rect, height);
        }
    }

    /// Win back the size a clamp took below the minimum (or fixed) size,
    /// staying inside `bounds`.
    fn regrow_within(&self, rect: &mut FrameRect, bounds: &FrameRect) {
        let (fixed_w, fixed_h) = self.fixed_size();
        let need_w = fixed_w.unwrap_or(self.config.min_width);
        let need_h = fixed_h.unwrap_or(self.config.min_height);
        let edge_x = self.function.x_edge();
        let edge_y = self.function.y_edge();
        let (cx, cy) = if self.fixed_center {
            (Some(self.center.0), Some(self.center.1))
        } else {
            (None, None)
        };
        regrow_axis(&mut rect.x1, &mut rect.x2, need_w, (bounds.x1, bounds.x2), edge_x, cx);
        regrow_axis(&mut rect.y1, &mut rect.y2, need_h, (bounds.y1, bounds.y2), edge_y, cy);
    }

    fn set_width(&self, rect: &mut FrameRect, width: f64) {
        if self.fixed_center {
            rect.x1 = self.center.0 - width / 2.0;
            rect.x2 = self.center.0 + width / 2.0;
        } else if self.function.x_edge() == Some(Edge::Low) {
            rect.x1 = rect.x2 - width;
        } else {
            rect.x2 = rect.x1 + width;
        }
    }

    fn set_height(&self, rect: &mut FrameRect, height: f64) {
        if self.fixed_center {
            rect.y1 = self.center.1 - height / 2.0;
            rect.y2 = self.center.1 + height / 2.0;
        } else if self.function.y_edge() == Some(Edge::Low) {
            rect.y1 = rect.y2 - height;
        } else {
            rect.y2 = rect.y1 + height;
        }
    }

    /// Reconcile, then clamp again, until the ratio holds or no side can move.
    /// Always ends inside the bounds.
    fn reconcile(&self, rect: &mut FrameRect, aspect: AspectRatio, mut clamped: ClampedSides) {
        let reconciler = AspectReconciler {
            aspect,
            function: self.function,
            fixed_center: self.fixed_center.then_some(self.center),
            min_width: self.config.min_width,
            min_height: self.config.min_height,
        };
        for _ in 0..MAX_RECONCILE_PASSES {
            if reconciler.reconcile(rect, clamped) == Side::None {
                break;
            }
            let Some(bounds) = self.bounds else {
                break;
            };
            let before = *rect;
            clamped |= clamp_to_bounds(rect, &bounds, self.fixed_center);
            if *rect == before {
                break;
            }
        }
    }

    // ── bookkeeping ─────────────────────────────────────────────────────

    fn grab_offset(&self, x: f64, y: f64) -> (f64, f64) {
        let r = &self.rect;
        if self.function == ResizeFunction::Moving {
            return (r.x1 - x, r.y1 - y);
        }
        let ox = match self.function.x_edge() {
            Some(Edge::Low) => r.x1 - x,
            Some(Edge::High) => r.x2 - x,
            None => 0.0,
        };
        let oy = match self.function.y_edge() {
            Some(Edge::Low) => r.y1 - y,
            Some(Edge::High) => r.y2 - y,
            None => 0.0,
        };
        (ox, oy)
    }

    fn opposite_edges(&self) -> (f64, f64) {
        let r = &self.rect;
        let x = match self.function.x_edge() {
            Some(Edge::Low) => r.x2,
            _ => r.x1,
        };
        let y = match self.function.y_edge() {
            Some(Edge::Low) => r.y2,
            _ => r.y1,
        };
        (x, y)
    }

    fn restore_other_side(&mut self) {
        let (ox, oy) = self.other_side;
        match self.function.x_edge() {
            Some(Edge::Low) => self.rect.x2 = ox,
            Some(Edge::High) => self.rect.x1 = ox,
            None => {}
        }
        match self.function.y_edge() {
            Some(Edge::Low) => self.rect.y2 = oy,
            Some(Edge::High) => self.rect.y1 = oy,
            None => {}
        }
    }
}

/// Grow `[lo, hi]` to `need` inside `[min, max]`, or to the whole span when
/// it is narrower. The dragged edge moves first. Around `center` both edges
/// move, shifted back inside if needed.
fn regrow_axis(
    lo: &mut f64,
    hi: &mut f64,
    need: f64,
    (min, max): (f64, f64),
    dragged: Option<Edge>,
    center: Option<f64>,
) {
    let need = need.min(max - min);
    if *hi - *lo >= need {
        return;
    }
    match (center, dragged) {
        (Some(c), _) => {
            *lo = c - need / 2.0;
            *hi = c + need / 2.0;
            if *lo < min {
                *hi += min - *lo;
                *lo = min;
            } else if *hi > max {
                *lo -= *hi - max;
                *hi = max;
            }
        }
        (None, Some(Edge::Low)) => {
            *lo = (*hi - need).max(min);
            *hi = *lo + need;
        }
        (None, _) => {
            *hi = (*lo + need).min(max);
            *lo = *hi - need;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConstraintMode;

    const INTERIOR: FrameRect = FrameRect::new(0.0, 0.0, 200.0, 100.0);

    fn frame(config: FrameConfig) -> CropFrame {
        let mut f = CropFrame::new(config.initial(FrameRect::new(10.0, 10.0, 110.0, 60.0)));
        f.set_container(Some(INTERIOR));
        f
    }

    fn free() -> FrameConfig {
        FrameConfig::new().min_size(10.0, 10.0)
    }

    // ── apply coordinates ───────────────────────────────────────────────

    #[test]
    fn right_edge_follows_pointer() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(150.0, 80.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 150.0, 60.0));
    }

    #[test]
    fn grab_offset_prevents_jump() {
        let mut f = frame(free());
        // Grabbed 3px left of the edge.
        f.begin(ResizeFunction::Right, 107.0, 30.0, true);
        f.update(117.0, 30.0);
        assert_eq!(f.rect().x2, 120.0);
    }

    #[test]
    fn imprecise_grab_jumps_to_pointer() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Right, 107.0, 30.0, false);
        f.update(117.0, 30.0);
        assert_eq!(f.rect().x2, 117.0);
    }

    #[test]
    fn corner_moves_both_edges() {
        let mut f = frame(free());
        f.begin(ResizeFunction::UpperLeft, 10.0, 10.0, true);
        f.update(0.0, 5.0);
        assert_eq!(f.rect(), FrameRect::new(0.0, 5.0, 110.0, 60.0));
    }

    #[test]
    fn fixed_center_mirrors_opposite_edge() {
        let mut f = frame(free().fixed_center(true));
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(120.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(0.0, 10.0, 120.0, 60.0));
    }

    // ── inversion ───────────────────────────────────────────────────────

    #[test]
    fn dragging_left_past_right_remaps() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Left, 10.0, 30.0, true);
        f.update(150.0, 30.0);
        assert_eq!(f.function(), ResizeFunction::Right);
        assert_eq!(f.rect(), FrameRect::new(110.0, 10.0, 150.0, 60.0));
        // The drag continues on the new side.
        f.update(170.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(110.0, 10.0, 170.0, 60.0));
    }

    #[test]
    fn corner_inversion_remaps_both_axes() {
        let mut f = frame(free());
        f.begin(ResizeFunction::LowerRight, 110.0, 60.0, true);
        f.update(0.0, 0.0);
        assert_eq!(f.function(), ResizeFunction::UpperLeft);
        assert_eq!(f.rect(), FrameRect::new(0.0, 0.0, 10.0, 10.0));
    }

    // ── minimum and fixed sizes ─────────────────────────────────────────

    #[test]
    fn min_size_holds_dragged_edge() {
        let mut f = frame(FrameConfig::new().min_size(50.0, 20.0));
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(30.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 60.0, 60.0));
        assert_eq!(f.function(), ResizeFunction::Right);
    }

    #[test]
    fn min_size_after_inversion_grows_new_dragged_edge() {
        let mut f = frame(FrameConfig::new().min_size(50.0, 20.0).constraint(ConstraintMode::None));
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(0.0, 30.0);
        assert_eq!(f.function(), ResizeFunction::Left);
        assert_eq!(f.rect(), FrameRect::new(-40.0, 10.0, 10.0, 60.0));
    }

    #[test]
    fn min_size_survives_clamp_at_low_bound() {
        let mut f = frame(FrameConfig::new());
        f.begin(ResizeFunction::Right, 110.0, 35.0, true);
        f.update(0.0, 35.0);
        assert_eq!(f.function(), ResizeFunction::Left);
        assert_eq!(f.rect(), FrameRect::new(0.0, 10.0, 50.0, 60.0));
        assert_eq!(f.snapped().width, 50);
    }

    #[test]
    fn min_size_survives_clamp_at_high_bound() {
        let config = FrameConfig::new().initial(FrameRect::new(120.0, 10.0, 190.0, 60.0));
        let mut f = CropFrame::new(config);
        f.set_container(Some(INTERIOR));
        f.begin(ResizeFunction::Left, 120.0, 35.0, true);
        f.update(195.0, 35.0);
        assert_eq!(f.function(), ResizeFunction::Right);
        assert_eq!(f.rect(), FrameRect::new(150.0, 10.0, 200.0, 60.0));
    }

    #[test]
    fn min_size_fills_narrow_container() {
        let mut f = frame(FrameConfig::new());
        f.set_container(Some(FrameRect::new(0.0, 0.0, 30.0, 100.0)));
        f.begin(ResizeFunction::Right, 110.0, 35.0, true);
        f.update(0.0, 35.0);
        let r = f.rect();
        assert_eq!((r.x1, r.x2), (0.0, 30.0));
    }

    #[test]
    fn fixed_size_keeps_dimensions() {
        let mut f = frame(free().fixed_rule(FixedRule::Size {
            width: 80.0,
            height: 40.0,
        }));
        f.begin(ResizeFunction::LowerRight, 110.0, 60.0, true);
        f.update(190.0, 90.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 90.0, 50.0));
    }

    #[test]
    fn fixed_width_leaves_height_free() {
        let mut f = frame(free().fixed_rule(FixedRule::Width(60.0)));
        f.begin(ResizeFunction::UpperLeft, 10.0, 10.0, true);
        f.update(0.0, 0.0);
        assert_eq!(f.rect(), FrameRect::new(50.0, 0.0, 110.0, 60.0));
    }

    // ── clamping ────────────────────────────────────────────────────────

    #[test]
    fn resize_clamps_to_container() {
        let mut f = frame(free());
        f.begin(ResizeFunction::LowerRight, 110.0, 60.0, true);
        f.update(500.0, 500.0);
        // Both spans overshoot the container, so both axes pin to it.
        assert_eq!(f.rect(), FrameRect::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn unconstrained_ignores_container() {
        let mut f = frame(free().constraint(ConstraintMode::None));
        f.begin(ResizeFunction::LowerRight, 110.0, 60.0, true);
        f.update(500.0, 500.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 500.0, 500.0));
    }

    #[test]
    fn content_mode_clamps_to_content_box() {
        let content = FrameRect::new(20.0, 0.0, 180.0, 100.0);
        let mut f = frame(free().constraint(ConstraintMode::Content(content)));
        f.begin(ResizeFunction::Left, 10.0, 30.0, true);
        f.update(0.0, 30.0);
        assert_eq!(f.rect().x1, 20.0);
    }

    #[test]
    fn move_translates_and_stays_inside() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Moving, 50.0, 30.0, true);
        f.update(60.0, 35.0);
        assert_eq!(f.rect(), FrameRect::new(20.0, 15.0, 120.0, 65.0));
        f.update(400.0, 400.0);
        assert_eq!(f.rect(), FrameRect::new(100.0, 50.0, 200.0, 100.0));
    }

    // ── aspect ──────────────────────────────────────────────────────────

    #[test]
    fn aspect_holds_after_clamp_passes() {
        let mut f = frame(free().aspect_ratio("1:2"));
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(130.0, 30.0);
        let r = f.rect();
        assert!((r.width() / r.height() - 0.5).abs() < 1e-4, "{r:?}");
        assert!(INTERIOR.contains_rect(&r), "{r:?}");
        assert_eq!(r, FrameRect::new(10.0, 0.0, 60.0, 100.0));
    }

    #[test]
    fn aspect_top_drag_past_pinned_bottom_grows_upward() {
        let config = FrameConfig::new()
            .min_size(20.0, 20.0)
            .aspect_ratio("1:2")
            .initial(FrameRect::new(40.0, 20.0, 100.0, 80.0));
        let mut f = CropFrame::new(config);
        f.set_container(Some(INTERIOR));
        f.begin(ResizeFunction::Top, 70.0, 20.0, true);
        f.update(70.0, 130.0);
        let r = f.rect();
        assert_eq!(r, FrameRect::new(40.0, 0.0, 90.0, 100.0));
        assert!((r.width() / r.height() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn aspect_corner_inside_container() {
        let mut f = frame(free().aspect_ratio("1:1"));
        f.begin(ResizeFunction::LowerRight, 110.0, 60.0, true);
        f.update(190.0, 95.0);
        let r = f.rect();
        assert_eq!(r, FrameRect::new(10.0, 10.0, 95.0, 95.0));
    }

    #[test]
    fn move_skips_aspect() {
        let mut f = frame(free().aspect_ratio("1:1"));
        f.begin(ResizeFunction::Moving, 50.0, 30.0, true);
        f.update(55.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(15.0, 10.0, 115.0, 60.0));
    }

    // ── drawing ─────────────────────────────────────────────────────────

    #[test]
    fn drawing_picks_corner_from_direction() {
        let mut f = frame(free());
        f.begin_draw(100.0, 50.0);
        assert_eq!(f.function(), ResizeFunction::Creating);
        // No movement yet: nothing happens.
        f.update(100.0, 50.0);
        assert_eq!(f.function(), ResizeFunction::Creating);
        f.update(70.0, 80.0);
        assert_eq!(f.function(), ResizeFunction::LowerLeft);
        assert_eq!(f.rect(), FrameRect::new(70.0, 50.0, 100.0, 80.0));
    }

    // ── fixed-center toggle ─────────────────────────────────────────────

    #[test]
    fn toggling_fixed_center_mid_gesture() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Right, 110.0, 30.0, true);
        f.update(130.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 130.0, 60.0));

        let view = f.set_fixed_center(true).unwrap();
        assert_eq!(view, f.snapped());
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 130.0, 60.0));
        f.update(140.0, 30.0);
        assert_eq!(f.rect(), FrameRect::new(0.0, 10.0, 140.0, 60.0));

        f.set_fixed_center(false);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 140.0, 60.0));
    }

    #[test]
    fn end_keeps_geometry() {
        let mut f = frame(free());
        f.begin(ResizeFunction::Bottom, 50.0, 60.0, true);
        f.update(50.0, 80.0);
        f.end();
        assert!(!f.is_active());
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 110.0, 80.0));
        // Moves after the gesture are ignored.
        f.update(0.0, 0.0);
        assert_eq!(f.rect(), FrameRect::new(10.0, 10.0, 110.0, 80.0));
    }

    #[test]
    fn crop_region_relative_to_interior() {
        let f = frame(free());
        let region = f.crop_region();
        assert!((region.x - 0.05).abs() < 1e-12);
        assert!((region.y - 0.1).abs() < 1e-12);
        assert!((region.width - 0.5).abs() < 1e-12);
        assert!((region.height - 0.5).abs() < 1e-12);
    }
}
