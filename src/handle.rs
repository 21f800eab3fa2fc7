//! Drag handles and the resizing functions they select.

/// Semantic role of a draggable affordance.
///
/// Several handles may share a role; the role alone decides which
/// [`ResizeFunction`] a gesture runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    /// Drag the whole frame.
    Move,
    /// Top edge.
    N,
    /// Bottom edge.
    S,
    /// Right edge.
    E,
    /// Left edge.
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Handle {
    /// Every handle, in role-string order.
    pub const ALL: [Self; 9] = [
        Self::Move,
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    /// Parse a role string (`move`, `resize-n`, …, `resize-sw`).
    /// Returns `None` for unknown roles.
    pub fn from_role(role: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.role() == role.trim())
    }

    /// The role string this handle is registered under.
    pub const fn role(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::N => "resize-n",
            Self::S => "resize-s",
            Self::E => "resize-e",
            Self::W => "resize-w",
            Self::NE => "resize-ne",
            Self::NW => "resize-nw",
            Self::SE => "resize-se",
            Self::SW => "resize-sw",
        }
    }

    /// The resizing function a gesture on this handle starts with.
    pub const fn function(self) -> ResizeFunction {
        match self {
            Self::Move => ResizeFunction::Moving,
            Self::N => ResizeFunction::Top,
            Self::S => ResizeFunction::Bottom,
            Self::E => ResizeFunction::Right,
            Self::W => ResizeFunction::Left,
            Self::NE => ResizeFunction::UpperRight,
            Self::NW => ResizeFunction::UpperLeft,
            Self::SE => ResizeFunction::LowerRight,
            Self::SW => ResizeFunction::LowerLeft,
        }
    }
}

/// Which edge of an axis a function drags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `x1` or `y1`.
    Low,
    /// `x2` or `y2`.
    High,
}

/// The active interaction mode of the frame's state machine.
///
/// Fixed for the duration of a gesture, except for the mirror remap applied
/// when a drag inverts the rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeFunction {
    /// No gesture in progress.
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Moving,
    /// Drawing a new frame; resolves to a corner once the pointer moves.
    Creating,
}

impl ResizeFunction {
    /// Horizontal edge dragged by this function, if any.
    pub const fn x_edge(self) -> Option<Edge> {
        match self {
            Self::Left | Self::UpperLeft | Self::LowerLeft => Some(Edge::Low),
            Self::Right | Self::UpperRight | Self::LowerRight => Some(Edge::High),
            _ => None,
        }
    }

    /// Vertical edge dragged by this function, if any.
    pub const fn y_edge(self) -> Option<Edge> {
        match self {
            Self::Top | Self::UpperLeft | Self::UpperRight => Some(Edge::Low),
            Self::Bottom | Self::LowerLeft | Self::LowerRight => Some(Edge::High),
            _ => None,
        }
    }

    /// Rebuild a resize function from the edges it drags.
    pub const fn from_edges(x: Option<Edge>, y: Option<Edge>) -> Self {
        match (x, y) {
            (None, None) => Self::None,
            (Some(Edge::Low), None) => Self::Left,
            (Some(Edge::High), None) => Self::Right,
            (None, Some(Edge::Low)) => Self::Top,
            (None, Some(Edge::High)) => Self::Bottom,
            (Some(Edge::Low), Some(Edge::Low)) => Self::UpperLeft,
            (Some(Edge::High), Some(Edge::Low)) => Self::UpperRight,
            (Some(Edge::Low), Some(Edge::High)) => Self::LowerLeft,
            (Some(Edge::High), Some(Edge::High)) => Self::LowerRight,
        }
    }

    /// Corner picked from a drag direction: right/down for non-negative deltas.
    pub fn from_direction(dx: f64, dy: f64) -> Self {
        let x = if dx < 0.0 { Edge::Low } else { Edge::High };
        let y = if dy < 0.0 { Edge::Low } else { Edge::High };
        Self::from_edges(Some(x), Some(y))
    }

    /// Mirror across the vertical axis (left ↔ right).
    pub const fn mirror_horizontal(self) -> Self {
        match self.x_edge() {
            Some(edge) => Self::from_edges(Some(edge.opposite()), self.y_edge()),
            None => self,
        }
    }

    /// Mirror across the horizontal axis (top ↔ bottom).
    pub const fn mirror_vertical(self) -> Self {
        match self.y_edge() {
            Some(edge) => Self::from_edges(self.x_edge(), Some(edge.opposite())),
            None => self,
        }
    }

    /// Whether this function changes the size of the rectangle.
    pub const fn is_resize(self) -> bool {
        self.x_edge().is_some() || self.y_edge().is_some()
    }

    /// Whether this is one of the four diagonal functions.
    pub const fn is_corner(self) -> bool {
        self.x_edge().is_some() && self.y_edge().is_some()
    }
}

impl Edge {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}
