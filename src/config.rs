//! Frame configuration.
//!
//! # Example
//!
//! ```
//! use cropframe::{ConstraintMode, FixedRule, FrameConfig};
//!
//! let config = FrameConfig::new()
//!     .min_size(40.0, 40.0)
//!     .aspect_ratio("16:9")
//!     .constraint(ConstraintMode::Container);
//!
//! assert!(matches!(config.fixed_rule, Some(FixedRule::Aspect(_))));
//!
//! // Malformed ratios disable aspect locking instead of failing.
//! let config = FrameConfig::new().aspect_ratio("16x9");
//! assert_eq!(config.fixed_rule, None);
//! ```

use crate::aspect::AspectRatio;
use crate::geometry::FrameRect;

/// Default minimum frame width.
pub const DEFAULT_MIN_WIDTH: f64 = 50.0;
/// Default minimum frame height.
pub const DEFAULT_MIN_HEIGHT: f64 = 50.0;

/// What region clamps the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintMode {
    /// The frame may leave the container.
    None,
    /// The container's interior, inside its borders.
    #[default]
    Container,
    /// An explicit content box (e.g. the displayed image), relative to the
    /// container interior.
    Content(FrameRect),
}

/// A rule that pins the frame's shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixedRule {
    /// Lock width:height.
    Aspect(AspectRatio),
    /// Lock both dimensions.
    Size { width: f64, height: f64 },
    /// Lock the width only.
    Width(f64),
    /// Lock the height only.
    Height(f64),
}

/// Configuration error. Only surfaced by the explicit parsers; the builder
/// methods swallow it and leave the setting disabled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Aspect ratio has no `:` between its components.
    MissingSeparator,
    /// A ratio component is not a number.
    InvalidNumber,
    /// A ratio component is zero, negative or not finite.
    NonPositive,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingSeparator => f.write_str("aspect ratio must look like <number>:<number>"),
            Self::InvalidNumber => f.write_str("aspect ratio component is not a number"),
            Self::NonPositive => f.write_str("aspect ratio components must be positive"),
        }
    }
}

/// Frame configuration, fixed for the lifetime of a [`CropFrame`](crate::CropFrame).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    pub min_width: f64,
    pub min_height: f64,
    pub fixed_rule: Option<FixedRule>,
    pub constraint: ConstraintMode,
    /// Resize around the frame's center instead of the opposite edge.
    pub fixed_center: bool,
    /// Frame geometry before the first gesture, relative to the container
    /// interior.
    pub initial: FrameRect,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameConfig {
    pub fn new() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            fixed_rule: None,
            constraint: ConstraintMode::Container,
            fixed_center: false,
            initial: FrameRect::from_xywh(0.0, 0.0, DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
        }
    }

    /// Set the minimum frame size. Negative values are treated as zero.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.min_width = width.max(0.0);
        self.min_height = height.max(0.0);
        self
    }

    /// Lock the aspect ratio from a `"<number>:<number>"` string.
    ///
    /// An unparseable ratio, or one with a zero component, disables aspect
    /// locking; the error is logged, not returned.
    pub fn aspect_ratio(mut self, ratio: &str) -> Self {
        match ratio.parse::<AspectRatio>() {
            Ok(aspect) => self.fixed_rule = Some(FixedRule::Aspect(aspect)),
            Err(err) => {
                log::warn!("ignoring aspect ratio {ratio:?}: {err:?}");
                if matches!(self.fixed_rule, Some(FixedRule::Aspect(_))) {
                    self.fixed_rule = None;
                }
            }
        }
        self
    }

    pub fn fixed_rule(mut self, rule: FixedRule) -> Self {
        self.fixed_rule = Some(rule);
        self
    }

    pub fn constraint(mut self, mode: ConstraintMode) -> Self {
        self.constraint = mode;
        self
    }

    pub fn fixed_center(mut self, on: bool) -> Self {
        self.fixed_center = on;
        self
    }

    /// Set the starting frame. Inverted corners are swapped.
    pub fn initial(mut self, rect: FrameRect) -> Self {
        self.initial = rect.normalized();
        self
    }

    /// The locked aspect ratio, if the active rule is [`FixedRule::Aspect`].
    pub fn aspect(&self) -> Option<AspectRatio> {
        match self.fixed_rule {
            Some(FixedRule::Aspect(a)) => Some(a),
            _ => None,
        }
    }

    /// Region the frame is clamped to, given the container's interior size.
    ///
    /// `None` when unconstrained, or when the container is required but
    /// unknown.
    pub fn bounds(&self, interior: Option<FrameRect>) -> Option<FrameRect> {
        match self.constraint {
            ConstraintMode::None => None,
            ConstraintMode::Container => interior,
            ConstraintMode::Content(content) => Some(content.normalized()),
        }
    }
}
