//! Snap application and best-candidate search for a single axis.
//!
//! `apply_axis_snap` is the inverse geometry: given the edge that stays put
//! and the coordinate the moving side should land on, it rebuilds the rect.
//! `find_best_axis_snap` scans an axis' anchors for the closest one that
//! both passes the distance threshold and yields a rect above the size floor.

use crate::anchor::{Anchor, AnchorKind, AnchorSource, FixedEdge, Slot, get_axis_value};
use crate::geometry::{Axis, Rect};

/// Snap the moving side of `rect` on `axis` so that its `kind` coordinate
/// lands on `value`.
///
/// | fixed   | kind   | result                                       |
/// |---------|--------|----------------------------------------------|
/// | start   | end    | `size = value - start`                       |
/// | start   | center | `size = (value - start) * 2`                 |
/// | end     | start  | `start = value`, `size = end - value`        |
/// | end     | center | `start = 2 * value - end`, `size = end - start` |
///
/// Snapping to the fixed edge's own kind, or with no fixed edge, leaves the
/// rect unchanged. Returns `None` when `kind` belongs to the other axis or
/// the new size is non-finite or below `min_size`.
pub fn apply_axis_snap(
    rect: &Rect,
    axis: Axis,
    fixed: Option<FixedEdge>,
    kind: AnchorKind,
    value: f64,
    min_size: f64,
) -> Option<Rect> {
    if kind.axis() != axis {
        return None;
    }
    let Some(fixed) = fixed else {
        return Some(*rect);
    };

    let start = axis.start(rect);
    let end = axis.end(rect);

    let (new_start, new_size) = match (fixed, kind.slot()) {
        (FixedEdge::Start, Slot::Start) | (FixedEdge::End, Slot::End) => return Some(*rect),
        (FixedEdge::Start, Slot::End) => (start, value - start),
        (FixedEdge::Start, Slot::Center) => (start, (value - start) * 2.0),
        (FixedEdge::End, Slot::Start) => (value, end - value),
        (FixedEdge::End, Slot::Center) => {
            let new_start = 2.0 * value - end;
            (new_start, end - new_start)
        }
    };

    if !new_size.is_finite() || !new_start.is_finite() || new_size < min_size {
        return None;
    }
    Some(axis.with_span(rect, new_start, new_size))
}

/// A qualifying anchor together with the rect it would produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapCandidate {
    pub anchor: Anchor,
    pub distance: f64,
    pub rect: Rect,
}

/// Closest legal anchor within `threshold` of the rect's matching coordinate.
///
/// Ties on distance go to sibling anchors over viewport anchors; otherwise
/// the first anchor found wins.
pub fn find_best_axis_snap(
    rect: &Rect,
    axis: Axis,
    fixed: FixedEdge,
    anchors: &[Anchor],
    legal: &[AnchorKind],
    threshold: f64,
    min_size: f64,
) -> Option<SnapCandidate> {
    let mut best: Option<SnapCandidate> = None;

    for anchor in anchors {
        if !legal.contains(&anchor.kind) || !anchor.value.is_finite() {
            continue;
        }
        let distance = (anchor.value - get_axis_value(rect, anchor.kind)).abs();
        if distance.is_nan() || distance > threshold {
            continue;
        }
        let Some(snapped) =
            apply_axis_snap(rect, axis, Some(fixed), anchor.kind, anchor.value, min_size)
        else {
            continue;
        };

        let replace = match &best {
            None => true,
            Some(current) => {
                distance < current.distance
                    || (distance == current.distance
                        && anchor.source == AnchorSource::Sibling
                        && current.anchor.source != AnchorSource::Sibling)
            }
        };
        if replace {
            best = Some(SnapCandidate {
                anchor: *anchor,
                distance,
                rect: snapped,
            });
        }
    }

    best
}
