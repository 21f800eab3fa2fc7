//! Interactive crop frame geometry: resize, move and draw a rectangle over an
//! image while honoring minimum size, fixed dimensions, aspect ratio and
//! container bounds.
//!
//! Pure geometry driven by pointer coordinates. No rendering, no pixel
//! operations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: working rect, integer view, container box, crop region
//! - [`clamp`]: clamping to bounds and reporting which sides were pinned
//! - [`aspect`]: aspect ratio parsing and the side-selection reconciler
//! - [`handle`]: handle roles and the resizing functions they select
//! - [`config`]: frame configuration
//! - [`frame`]: the crop frame state machine and update pipeline
//! - `interaction`: pointer gesture controller (requires `alloc`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

whereat::define_at_crate_info!();

pub mod aspect;
pub mod clamp;
pub mod config;
pub mod frame;
pub mod geometry;
pub mod handle;
#[cfg(feature = "alloc")]
pub mod interaction;

pub use aspect::{AspectRatio, Fit, Side};
pub use clamp::ClampedSides;
pub use config::{ConfigError, ConstraintMode, FixedRule, FrameConfig};
pub use frame::CropFrame;
pub use geometry::{ContainerBox, CropRegion, FrameRect, Rect, SnappedRect};
pub use handle::{Handle, ResizeFunction};
#[cfg(feature = "alloc")]
pub use interaction::{Controller, HandleDescriptor, HandleId, PointerEvent, Surface, Target};
