//! Build the per-gesture anchor set from already-measured rects.
//!
//! Measuring the page (bounding client rects, window size) happens in the
//! host; this only turns those numbers into anchors.

use crate::anchor::{Anchor, AnchorKind, Anchors, Slot};
use crate::geometry::{Axis, Rect, Viewport};

/// Viewport edges and center on both axes, plus every valid sibling's edges
/// and center.
///
/// Each sibling edge is offered both as a start and as an end anchor, so the
/// resized element can align with it or abut it. Siblings that are
/// non-finite or have no area are skipped.
pub fn collect_anchors(siblings: &[Rect], viewport: Viewport) -> Anchors {
    let viewport = viewport.sanitized();
    let mut anchors = Anchors::default();

    for axis in [Axis::X, Axis::Y] {
        let extent = viewport.extent(axis);
        let list = axis_list(&mut anchors, axis);
        list.push(Anchor::viewport(AnchorKind::from_slot(axis, Slot::Start), 0.0));
        list.push(Anchor::viewport(
            AnchorKind::from_slot(axis, Slot::Center),
            extent / 2.0,
        ));
        list.push(Anchor::viewport(AnchorKind::from_slot(axis, Slot::End), extent));
    }

    let mut skipped = 0usize;
    for sibling in siblings {
        if !sibling.is_finite() || sibling.width <= 0.0 || sibling.height <= 0.0 {
            skipped += 1;
            continue;
        }
        for axis in [Axis::X, Axis::Y] {
            push_sibling_axis(axis_list(&mut anchors, axis), axis, sibling);
        }
    }

    log::debug!(
        "collected {} x / {} y anchors from {} siblings ({skipped} skipped)",
        anchors.x.len(),
        anchors.y.len(),
        siblings.len()
    );
    anchors
}

fn axis_list(anchors: &mut Anchors, axis: Axis) -> &mut Vec<Anchor> {
    match axis {
        Axis::X => &mut anchors.x,
        Axis::Y => &mut anchors.y,
    }
}

fn push_sibling_axis(list: &mut Vec<Anchor>, axis: Axis, sibling: &Rect) {
    let start = AnchorKind::from_slot(axis, Slot::Start);
    let end = AnchorKind::from_slot(axis, Slot::End);
    for edge in [axis.start(sibling), axis.end(sibling)] {
        list.push(Anchor::sibling(start, edge, *sibling));
        list.push(Anchor::sibling(end, edge, *sibling));
    }
    list.push(Anchor::sibling(
        AnchorKind::from_slot(axis, Slot::Center),
        axis.center(sibling),
        *sibling,
    ));
}
