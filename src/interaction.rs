//! Pointer-driven gesture controller.
//!
//! Bridges raw pointer events to a [`CropFrame`]. The controller is an
//! explicit three-state machine:
//!
//! ```text
//!     Idle ──down on handle──▶ Armed ──move──▶ Dragging
//!      ▲                         │                │
//!      └────────────up / cancel──┴────────────────┘
//! ```
//!
//! Move and up sources are subscribed on arming and unsubscribed exactly
//! once when the gesture ends or is superseded.
//!
//! # Example
//!
//! ```
//! use cropframe::interaction::{Controller, HandleDescriptor, PointerEvent, Surface, Target};
//! use cropframe::{ContainerBox, FrameConfig, FrameRect, SnappedRect};
//!
//! #[derive(Default)]
//! struct Overlay {
//!     last: Option<SnappedRect>,
//! }
//!
//! impl Surface for Overlay {
//!     fn container(&self) -> Option<ContainerBox> {
//!         Some(ContainerBox::new(0.0, 0.0, 200.0, 100.0))
//!     }
//!     fn listen(&mut self) {}
//!     fn unlisten(&mut self) {}
//!     fn render(&mut self, rect: SnappedRect) {
//!         self.last = Some(rect);
//!     }
//! }
//!
//! let config = FrameConfig::new().initial(FrameRect::new(10.0, 10.0, 110.0, 60.0));
//! let mut ctl = Controller::new(config, Overlay::default());
//! let east = ctl.add_handle(HandleDescriptor::new("resize-e", None).unwrap());
//!
//! ctl.pointer_down(&PointerEvent::primary(110.0, 30.0), Target::Handle(east));
//! ctl.pointer_move(&PointerEvent::primary(160.0, 30.0));
//! ctl.pointer_up(&PointerEvent::primary(160.0, 30.0));
//!
//! assert_eq!(ctl.surface().last, Some(SnappedRect::new(10, 10, 150, 50)));
//! ```

use alloc::vec::Vec;

use crate::config::FrameConfig;
use crate::frame::CropFrame;
use crate::geometry::{ContainerBox, CropRegion, FrameRect, SnappedRect};
use crate::handle::Handle;

/// DOM `button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// A raw pointer event in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    pub button: i16,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub const fn new(button: i16, client_x: f64, client_y: f64) -> Self {
        Self {
            button,
            client_x,
            client_y,
        }
    }

    /// Event from the primary button.
    pub const fn primary(client_x: f64, client_y: f64) -> Self {
        Self::new(PRIMARY_BUTTON, client_x, client_y)
    }
}

/// Index of a registered handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandleId(usize);

/// A draggable affordance registered with the controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandleDescriptor {
    pub handle: Handle,
    /// Client-space box of the handle's element. Without one, hit testing
    /// skips the handle and gestures on it start without a grab offset.
    pub anchor: Option<FrameRect>,
}

impl HandleDescriptor {
    /// Describe a handle by role string. `None` for unknown roles.
    pub fn new(role: &str, anchor: Option<FrameRect>) -> Option<Self> {
        Handle::from_role(role).map(|handle| Self { handle, anchor })
    }
}

/// What a pointer-down landed on, as determined by the presentation layer
/// (or by [`Controller::hit_test`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A registered handle.
    Handle(HandleId),
    /// Empty container area: draws a new frame.
    Container,
    /// Anything else.
    None,
}

/// The presentation layer the controller drives.
pub trait Surface {
    /// Bounding box and borders of the container element, queried once per
    /// gesture start. `None` when the element is not available.
    fn container(&self) -> Option<ContainerBox>;

    /// Subscribe to pointer move and up events.
    fn listen(&mut self);

    /// Unsubscribe from pointer move and up events.
    fn unlisten(&mut self);

    /// Show the frame at its new position, relative to the container interior.
    fn render(&mut self, rect: SnappedRect);
}

/// Gesture state of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down on a handle, no movement yet.
    Armed,
    Dragging,
}

/// Owns the crop frame and runs one gesture at a time against a [`Surface`].
pub struct Controller<S> {
    surface: S,
    frame: CropFrame,
    handles: Vec<HandleDescriptor>,
    state: GestureState,
    container: Option<ContainerBox>,
}

impl<S: Surface> Controller<S> {
    pub fn new(config: FrameConfig, surface: S) -> Self {
        Self {
            surface,
            frame: CropFrame::new(config),
            handles: Vec::new(),
            state: GestureState::Idle,
            container: None,
        }
    }

    pub fn frame(&self) -> &CropFrame {
        &self.frame
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn handles(&self) -> &[HandleDescriptor] {
        &self.handles
    }

    /// Register one more handle.
    pub fn add_handle(&mut self, descriptor: HandleDescriptor) -> HandleId {
        self.handles.push(descriptor);
        HandleId(self.handles.len() - 1)
    }

    /// Replace the whole handle set. An active gesture is cancelled first,
    /// since its handle ids no longer mean anything.
    pub fn set_handles(&mut self, handles: impl IntoIterator<Item = HandleDescriptor>) {
        self.cancel();
        self.handles.clear();
        self.handles.extend(handles);
    }

    /// Find what a client-space point lands on. Later handles sit on top.
    pub fn hit_test(&self, client_x: f64, client_y: f64) -> Target {
        let hit = self.handles.iter().rposition(|d| {
            d.anchor
                .is_some_and(|anchor| anchor.normalized().contains_point(client_x, client_y))
        });
        if let Some(index) = hit {
            return Target::Handle(HandleId(index));
        }
        let in_container = self.surface.container().is_some_and(|c| {
            FrameRect::new(c.left, c.top, c.right, c.bottom).contains_point(client_x, client_y)
        });
        if in_container {
            Target::Container
        } else {
            Target::None
        }
    }

    /// Handle a pointer-down. Returns `true` when a gesture was armed; the
    /// caller should then suppress the browser's default drag behavior.
    ///
    /// Non-primary buttons and unknown targets are ignored. A gesture still
    /// in progress is cancelled before the new one arms.
    pub fn pointer_down(&mut self, event: &PointerEvent, target: Target) -> bool {
        if event.button != PRIMARY_BUTTON {
            return false;
        }
        let descriptor = match target {
            Target::Handle(HandleId(index)) => match self.handles.get(index) {
                Some(d) => Some(*d),
                None => return false,
            },
            Target::Container => None,
            Target::None => return false,
        };

        self.cancel();
        self.container = self.surface.container();
        if self.container.is_none() {
            log::debug!("container unavailable, gesture runs unconstrained");
        }
        self.frame.set_container(self.container.map(|c| c.interior()));

        let (x, y) = self.to_local(event);
        match descriptor {
            Some(d) => self.frame.begin(d.handle.function(), x, y, d.anchor.is_some()),
            None => self.frame.begin_draw(x, y),
        }
        self.surface.listen();
        self.state = GestureState::Armed;
        true
    }

    /// Handle a pointer-move. Runs the update pipeline and renders the
    /// result; `None` when no gesture is active.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<SnappedRect> {
        if self.state == GestureState::Idle {
            return None;
        }
        let (x, y) = self.to_local(event);
        let view = self.frame.update(x, y);
        self.surface.render(view);
        self.state = GestureState::Dragging;
        Some(view)
    }

    /// Handle a pointer-up: end the gesture without touching the geometry.
    /// Returns the final view, or `None` when no gesture was active.
    pub fn pointer_up(&mut self, _event: &PointerEvent) -> Option<SnappedRect> {
        if self.state == GestureState::Idle {
            return None;
        }
        self.finish();
        Some(self.frame.snapped())
    }

    /// Abandon the active gesture, if any. The geometry reached so far stays.
    pub fn cancel(&mut self) {
        if self.state != GestureState::Idle {
            log::debug!("cancelling gesture in state {:?}", self.state);
            self.finish();
        }
    }

    /// Toggle fixed-center resizing; re-renders when a resize is in progress.
    pub fn set_fixed_center(&mut self, on: bool) -> Option<SnappedRect> {
        let view = self.frame.set_fixed_center(on)?;
        self.surface.render(view);
        Some(view)
    }

    /// Replace the frame geometry (relative to the container interior) and
    /// render it. Cancels any gesture in progress.
    pub fn reset(&mut self, rect: FrameRect) -> SnappedRect {
        self.cancel();
        self.container = self.surface.container();
        self.frame.set_container(self.container.map(|c| c.interior()));
        self.frame.set_rect(rect);
        let view = self.frame.snapped();
        self.surface.render(view);
        view
    }

    /// Crop region as fractions of the image box, for mapping onto source
    /// pixels with [`CropRegion::to_pixels`].
    pub fn crop_region(&self) -> CropRegion {
        self.frame.crop_region()
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn finish(&mut self) {
        self.frame.end();
        self.surface.unlisten();
        self.state = GestureState::Idle;
    }

    fn to_local(&self, event: &PointerEvent) -> (f64, f64) {
        match &self.container {
            Some(c) => c.to_local(event.client_x, event.client_y),
            None => (event.client_x, event.client_y),
        }
    }
}
