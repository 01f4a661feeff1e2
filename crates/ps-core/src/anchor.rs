//! Anchor model: snap targets, locks, and resize direction flags.
//!
//! Anchor types are tagged by the edge of the *resized* rect they align:
//! a `right` anchor at 140 means "put my right edge at x=140".

use crate::geometry::{Axis, Rect};
use serde::{Deserialize, Serialize};

/// Which edge (or center line) of a rect an anchor aligns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// Position of an anchor kind along its axis, independent of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Start,
    Center,
    End,
}

impl AnchorKind {
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Center | Self::Right => Axis::X,
            Self::Top | Self::Middle | Self::Bottom => Axis::Y,
        }
    }

    pub fn slot(self) -> Slot {
        match self {
            Self::Left | Self::Top => Slot::Start,
            Self::Center | Self::Middle => Slot::Center,
            Self::Right | Self::Bottom => Slot::End,
        }
    }

    pub fn from_slot(axis: Axis, slot: Slot) -> Self {
        match (axis, slot) {
            (Axis::X, Slot::Start) => Self::Left,
            (Axis::X, Slot::Center) => Self::Center,
            (Axis::X, Slot::End) => Self::Right,
            (Axis::Y, Slot::Start) => Self::Top,
            (Axis::Y, Slot::Center) => Self::Middle,
            (Axis::Y, Slot::End) => Self::Bottom,
        }
    }

    pub fn is_center(self) -> bool {
        self.slot() == Slot::Center
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Coordinate of `rect` that an anchor of `kind` is compared against.
pub fn get_axis_value(rect: &Rect, kind: AnchorKind) -> f64 {
    match kind {
        AnchorKind::Left => rect.left,
        AnchorKind::Center => rect.center_x(),
        AnchorKind::Right => rect.right(),
        AnchorKind::Top => rect.top,
        AnchorKind::Middle => rect.center_y(),
        AnchorKind::Bottom => rect.bottom(),
    }
}

/// Where an anchor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSource {
    /// Another element on the page.
    Sibling,
    /// The viewport edges or center.
    Viewport,
}

/// A candidate coordinate a dragged edge may snap to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: AnchorKind,
    pub source: AnchorSource,
    /// Rect of the sibling that produced this anchor; used for guide extent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_rect: Option<Rect>,
}

impl Anchor {
    pub fn viewport(kind: AnchorKind, value: f64) -> Self {
        Self {
            value,
            kind,
            source: AnchorSource::Viewport,
            source_rect: None,
        }
    }

    pub fn sibling(kind: AnchorKind, value: f64, source_rect: Rect) -> Self {
        Self {
            value,
            kind,
            source: AnchorSource::Sibling,
            source_rect: Some(source_rect),
        }
    }
}

/// The per-gesture anchor set, split by axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchors {
    #[serde(default)]
    pub x: Vec<Anchor>,
    #[serde(default)]
    pub y: Vec<Anchor>,
}

impl Anchors {
    pub fn for_axis(&self, axis: Axis) -> &[Anchor] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// The active snap decision for one axis, carried across frames.
///
/// Identity is `(kind, value, source)`; it does not reference a particular
/// anchor, so it survives changes to the anchor list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lock {
    #[serde(rename = "type")]
    pub kind: AnchorKind,
    pub value: f64,
    pub source: AnchorSource,
    #[serde(default)]
    pub source_rect: Option<Rect>,
}

impl Lock {
    pub fn same_target(&self, other: &Lock) -> bool {
        self.kind == other.kind && self.value == other.value && self.source == other.source
    }
}

impl From<&Anchor> for Lock {
    fn from(anchor: &Anchor) -> Self {
        Self {
            kind: anchor.kind,
            value: anchor.value,
            source: anchor.source,
            source_rect: anchor.source_rect,
        }
    }
}

/// Which screen edges the user is dragging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeDirection {
    #[serde(default)]
    pub has_west: bool,
    #[serde(default)]
    pub has_east: bool,
    #[serde(default)]
    pub has_north: bool,
    #[serde(default)]
    pub has_south: bool,
}

/// The edge that stays put while the opposite one is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedEdge {
    /// Left on X, top on Y.
    Start,
    /// Right on X, bottom on Y.
    End,
}

impl ResizeDirection {
    /// Fixed edge on `axis`, or `None` when that axis is not resized.
    ///
    /// Dragging west fixes the right edge, east fixes the left, north fixes
    /// the bottom, south fixes the top. Both flags on one axis is ambiguous
    /// and treated as no resize.
    pub fn fixed_edge(&self, axis: Axis) -> Option<FixedEdge> {
        let (towards_start, towards_end) = match axis {
            Axis::X => (self.has_west, self.has_east),
            Axis::Y => (self.has_north, self.has_south),
        };
        match (towards_start, towards_end) {
            (true, false) => Some(FixedEdge::End),
            (false, true) => Some(FixedEdge::Start),
            _ => None,
        }
    }
}

/// Anchor kinds a dragged edge may snap to while `fixed` stays put.
pub fn legal_kinds(axis: Axis, fixed: FixedEdge) -> [AnchorKind; 2] {
    let moving = match fixed {
        FixedEdge::Start => Slot::End,
        FixedEdge::End => Slot::Start,
    };
    [
        AnchorKind::from_slot(axis, moving),
        AnchorKind::from_slot(axis, Slot::Center),
    ]
}

pub fn is_legal(kind: AnchorKind, axis: Axis, fixed: FixedEdge) -> bool {
    legal_kinds(axis, fixed).contains(&kind)
}
