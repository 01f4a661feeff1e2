//! Geometry primitives: rectangles, line segments, the viewport, and the
//! per-axis accessors the snap engine is written against.
//!
//! Everything lives in viewport space (CSS pixels, origin top-left). Both
//! axes share one implementation: code that snaps "an axis" takes an [`Axis`]
//! and reads start/size/end through it instead of naming left/top directly.

use serde::{Deserialize, Serialize};

/// Minimum width/height (exclusive) for a rect to be snapped at all.
pub const MIN_VALID_EXTENT: f64 = 0.5;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// A rect the engine is willing to work with: finite, and larger than
    /// half a pixel on both axes.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.width > MIN_VALID_EXTENT && self.height > MIN_VALID_EXTENT
    }
}

/// A line segment in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::new(x, y1, x, y2)
    }

    pub fn horizontal(y: f64, x1: f64, x2: f64) -> Self {
        Self::new(x1, y, x2, y)
    }
}

/// The visible page area. Only its size matters; the origin is always (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp non-finite or non-positive dimensions to `1`.
    pub fn sanitized(self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
        }
    }

    /// Viewport extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

fn clamp_dimension(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v.max(1.0) } else { 1.0 }
}

/// One of the two screen axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Left on X, top on Y.
    pub fn start(self, rect: &Rect) -> f64 {
        match self {
            Axis::X => rect.left,
            Axis::Y => rect.top,
        }
    }

    /// Width on X, height on Y.
    pub fn size(self, rect: &Rect) -> f64 {
        match self {
            Axis::X => rect.width,
            Axis::Y => rect.height,
        }
    }

    pub fn end(self, rect: &Rect) -> f64 {
        self.start(rect) + self.size(rect)
    }

    pub fn center(self, rect: &Rect) -> f64 {
        self.start(rect) + self.size(rect) / 2.0
    }

    /// Copy of `rect` with this axis' start and size replaced.
    pub fn with_span(self, rect: &Rect, start: f64, size: f64) -> Rect {
        match self {
            Axis::X => Rect {
                left: start,
                width: size,
                ..*rect
            },
            Axis::Y => Rect {
                top: start,
                height: size,
                ..*rect
            },
        }
    }
}
