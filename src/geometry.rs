//! Geometric primitives for the crop frame.
//!
//! Pure data. The working rectangle is kept in double precision and in
//! container-interior coordinates; the integer view and the normalized crop
//! region are derived from it on demand.

use num_traits::Float;

/// Working rectangle in double precision, stored as two corners.
///
/// `x1 <= x2` and `y1 <= y2` hold after every completed update of a
/// [`CropFrame`](crate::CropFrame), but intermediate pipeline steps may
/// observe an inverted rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl FrameRect {
    /// Create a rect from its two corners.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a rect from an origin and a size.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// A zero-sized rect at a single point.
    pub const fn point(x: f64, y: f64) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Midpoint of both axes.
    pub fn center(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Width over height. Infinite for a zero-height rect with positive width,
    /// NaN when both are zero.
    pub fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

    /// Whether neither axis is inverted.
    pub fn is_normalized(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Swap inverted coordinates so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Move the rect without changing its size.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.x2 += dx;
        self.y1 += dy;
        self.y2 += dy;
    }

    /// Whether `other` lies entirely inside this rect (edges may touch).
    pub fn contains_rect(&self, other: &FrameRect) -> bool {
        other.x1 >= self.x1 && other.x2 <= self.x2 && other.y1 >= self.y1 && other.y2 <= self.y2
    }

    /// Whether the point lies inside this rect (edges inclusive).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Rounded integer view used for public output.
    ///
    /// Origin and size are rounded independently (half away from zero), so
    /// the snapped size does not pick up rounding error from both edges.
    pub fn snap(&self) -> SnappedRect {
        SnappedRect {
            x: Float::round(self.x1) as i32,
            y: Float::round(self.y1) as i32,
            width: Float::round(self.width()) as i32,
            height: Float::round(self.height()) as i32,
        }
    }
}

/// Integer snapshot of a [`FrameRect`], relative to the container interior.
///
/// This is what gets emitted to the presentation layer after every
/// processed pointer move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnappedRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl SnappedRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Snapshot of the container element's bounding box and border insets,
/// in viewport (client) coordinates.
///
/// Captured once per gesture start. The interior (inside the borders) is the
/// coordinate space of the crop frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub border_top: f64,
    pub border_left: f64,
    pub border_right: f64,
    pub border_bottom: f64,
}

impl ContainerBox {
    /// Container without borders.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            border_top: 0.0,
            border_left: 0.0,
            border_right: 0.0,
            border_bottom: 0.0,
        }
    }

    /// Set border widths, CSS order (top, right, bottom, left).
    pub const fn borders(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.border_top = top;
        self.border_right = right;
        self.border_bottom = bottom;
        self.border_left = left;
        self
    }

    /// Outer width, borders included.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Outer height, borders included.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Interior width. Never negative.
    pub fn interior_width(&self) -> f64 {
        (self.width() - self.border_left - self.border_right).max(0.0)
    }

    /// Interior height. Never negative.
    pub fn interior_height(&self) -> f64 {
        (self.height() - self.border_top - self.border_bottom).max(0.0)
    }

    /// Interior box in its own coordinate space: `(0, 0)` to interior size.
    pub fn interior(&self) -> FrameRect {
        FrameRect::new(0.0, 0.0, self.interior_width(), self.interior_height())
    }

    /// Convert a client-space point to interior-relative coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - self.left - self.border_left,
            client_y - self.top - self.border_top,
        )
    }
}

/// Crop in source-image pixels: origin plus size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Fit inside a `source_w`×`source_h` image. The origin stays on a
    /// source pixel and the crop keeps at least one pixel per axis.
    pub fn clamp_to(self, source_w: u32, source_h: u32) -> Self {
        let x = self.x.min(source_w.saturating_sub(1));
        let y = self.y.min(source_h.saturating_sub(1));
        Self {
            x,
            y,
            width: self.width.clamp(1, source_w.saturating_sub(x).max(1)),
            height: self.height.clamp(1, source_h.saturating_sub(y).max(1)),
        }
    }
}

/// Crop region as fractions of the source image. All values in `0.0..=1.0`.
///
/// `x=0.1, y=0.1, width=0.8, height=0.8` crops 10% from each edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    /// The whole image.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Express `rect` as fractions of `image`, the box the source image is
    /// displayed in (same coordinate space as `rect`).
    ///
    /// Parts of `rect` outside `image` are cut off. A degenerate image box
    /// yields [`CropRegion::FULL`].
    pub fn from_frame(rect: &FrameRect, image: &FrameRect) -> Self {
        let iw = image.width();
        let ih = image.height();
        if !(iw > 0.0 && ih > 0.0) {
            return Self::FULL;
        }
        let x1 = ((rect.x1 - image.x1) / iw).clamp(0.0, 1.0);
        let x2 = ((rect.x2 - image.x1) / iw).clamp(0.0, 1.0);
        let y1 = ((rect.y1 - image.y1) / ih).clamp(0.0, 1.0);
        let y2 = ((rect.y2 - image.y1) / ih).clamp(0.0, 1.0);
        Self {
            x: x1,
            y: y1,
            width: (x2 - x1).max(0.0),
            height: (y2 - y1).max(0.0),
        }
    }

    /// Map onto source-image pixels, rounding each edge to the nearest pixel.
    /// The result always lies inside the source and is at least 1×1.
    pub fn to_pixels(&self, source_w: u32, source_h: u32) -> Rect {
        let sw = source_w as f64;
        let sh = source_h as f64;
        let x1 = Float::round(self.x * sw);
        let y1 = Float::round(self.y * sh);
        let x2 = Float::round((self.x + self.width) * sw);
        let y2 = Float::round((self.y + self.height) * sh);
        Rect {
            x: x1.max(0.0) as u32,
            y: y1.max(0.0) as u32,
            width: (x2 - x1).max(0.0) as u32,
            height: (y2 - y1).max(0.0) as u32,
        }
        .clamp_to(source_w, source_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── FrameRect ───────────────────────────────────────────────────────

    #[test]
    fn frame_rect_dimensions() {
        let r = FrameRect::new(10.0, 10.0, 110.0, 60.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.center(), (60.0, 35.0));
        assert_eq!(r.aspect(), 2.0);
    }

    #[test]
    fn frame_rect_normalized_swaps_both_axes() {
        let r = FrameRect::new(110.0, 60.0, 10.0, 10.0);
        assert!(!r.is_normalized());
        assert_eq!(r.normalized(), FrameRect::new(10.0, 10.0, 110.0, 60.0));
    }

    #[test]
    fn frame_rect_translate_keeps_size() {
        let mut r = FrameRect::from_xywh(5.0, 5.0, 20.0, 30.0);
        r.translate(-3.5, 7.25);
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 30.0);
        assert_eq!(r.x1, 1.5);
        assert_eq!(r.y1, 12.25);
    }

    #[test]
    fn snap_rounds_origin_and_size_independently() {
        // Edges 10.4 and 110.6 would give 101 if rounded separately.
        let r = FrameRect::new(10.4, 0.5, 110.6, 49.7);
        assert_eq!(r.snap(), SnappedRect::new(10, 1, 100, 49));
    }

    #[test]
    fn snap_negative_rounds_away_from_zero() {
        let r = FrameRect::new(-2.5, -0.4, 0.0, 0.0);
        assert_eq!(r.snap().x, -3);
        assert_eq!(r.snap().y, 0);
    }

    // ── ContainerBox ────────────────────────────────────────────────────

    #[test]
    fn container_interior_excludes_borders() {
        let c = ContainerBox::new(100.0, 50.0, 400.0, 250.0).borders(2.0, 3.0, 4.0, 5.0);
        assert_eq!(c.interior_width(), 292.0);
        assert_eq!(c.interior_height(), 194.0);
        assert_eq!(c.interior(), FrameRect::new(0.0, 0.0, 292.0, 194.0));
        assert_eq!(c.to_local(105.0, 52.0), (0.0, 0.0));
    }

    #[test]
    fn container_interior_never_negative() {
        let c = ContainerBox::new(0.0, 0.0, 4.0, 4.0).borders(3.0, 3.0, 3.0, 3.0);
        assert_eq!(c.interior_width(), 0.0);
        assert_eq!(c.interior_height(), 0.0);
    }

    // ── Rect ────────────────────────────────────────────────────────────

    #[test]
    fn rect_clamp_to_bounds() {
        let r = Rect::new(90, 90, 50, 50).clamp_to(100, 100);
        assert_eq!(r, Rect::new(90, 90, 10, 10));
    }

    #[test]
    fn rect_clamp_min_one_pixel() {
        let r = Rect::new(200, 0, 0, 0).clamp_to(100, 100);
        assert_eq!(r, Rect::new(99, 0, 1, 1));
    }

    // ── CropRegion ──────────────────────────────────────────────────────

    #[test]
    fn crop_region_fractions() {
        let image = FrameRect::new(0.0, 0.0, 200.0, 100.0);
        let rect = FrameRect::new(20.0, 10.0, 180.0, 90.0);
        let region = CropRegion::from_frame(&rect, &image);
        assert!((region.x - 0.1).abs() < 1e-12);
        assert!((region.y - 0.1).abs() < 1e-12);
        assert!((region.width - 0.8).abs() < 1e-12);
        assert!((region.height - 0.8).abs() < 1e-12);
    }

    #[test]
    fn crop_region_cuts_outside_parts() {
        let image = FrameRect::new(50.0, 0.0, 150.0, 100.0);
        let rect = FrameRect::new(0.0, 0.0, 100.0, 100.0);
        let region = CropRegion::from_frame(&rect, &image);
        assert_eq!(region.x, 0.0);
        assert_eq!(region.width, 0.5);
    }

    #[test]
    fn crop_region_degenerate_image_is_full() {
        let image = FrameRect::new(10.0, 10.0, 10.0, 50.0);
        let rect = FrameRect::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(CropRegion::from_frame(&rect, &image), CropRegion::FULL);
    }

    #[test]
    fn crop_region_to_pixels() {
        let region = CropRegion {
            x: 0.1,
            y: 0.25,
            width: 0.5,
            height: 0.5,
        };
        assert_eq!(region.to_pixels(1000, 400), Rect::new(100, 100, 500, 200));
        assert_eq!(CropRegion::FULL.to_pixels(640, 480), Rect::new(0, 0, 640, 480));
    }
}
