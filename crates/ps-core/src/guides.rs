//! Alignment guide lines for active locks.

use crate::anchor::{AnchorSource, Lock};
use crate::geometry::{Axis, Line, Rect, Viewport};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// At most one guide per axis.
pub type GuideLines = SmallVec<[GuideLine; 2]>;

/// A guide to draw for one locked axis.
///
/// An X lock draws a vertical line at the lock's x; a Y lock a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: Axis,
    pub source: AnchorSource,
    #[serde(flatten)]
    pub line: Line,
}

/// Guide for a single lock.
///
/// Sibling locks span from the source element to the snapped rect along the
/// perpendicular axis. Viewport locks, or locks missing their source rect,
/// span the whole viewport.
pub fn guide_line(axis: Axis, lock: &Lock, snapped: &Rect, viewport: Viewport) -> GuideLine {
    let perp = axis.perpendicular();
    let (from, to) = match (lock.source, lock.source_rect) {
        (AnchorSource::Sibling, Some(source)) => (
            perp.start(&source).min(perp.start(snapped)),
            perp.end(&source).max(perp.end(snapped)),
        ),
        _ => (0.0, viewport.extent(perp)),
    };
    let line = match axis {
        Axis::X => Line::vertical(lock.value, from, to),
        Axis::Y => Line::horizontal(lock.value, from, to),
    };
    GuideLine {
        axis,
        source: lock.source,
        line,
    }
}

/// Guides for both axes, X first. `viewport` must already be sanitized.
pub fn build_guide_lines(
    snapped: &Rect,
    lock_x: Option<&Lock>,
    lock_y: Option<&Lock>,
    viewport: Viewport,
) -> GuideLines {
    let mut lines = GuideLines::new();
    if let Some(lock) = lock_x {
        lines.push(guide_line(Axis::X, lock, snapped, viewport));
    }
    if let Some(lock) = lock_y {
        lines.push(guide_line(Axis::Y, lock, snapped, viewport));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorKind;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 700.0);

    #[test]
    fn viewport_lock_spans_viewport() {
        let lock = Lock {
            kind: AnchorKind::Bottom,
            value: 700.0,
            source: AnchorSource::Viewport,
            source_rect: None,
        };
        let g = guide_line(Axis::Y, &lock, &Rect::new(10.0, 600.0, 50.0, 100.0), VIEWPORT);
        assert_eq!(g.line, Line::new(0.0, 700.0, 1000.0, 700.0));
    }

    #[test]
    fn sibling_lock_spans_union() {
        let lock = Lock {
            kind: AnchorKind::Left,
            value: 200.0,
            source: AnchorSource::Sibling,
            source_rect: Some(Rect::new(200.0, 10.0, 40.0, 30.0)),
        };
        let g = guide_line(Axis::X, &lock, &Rect::new(200.0, 100.0, 80.0, 50.0), VIEWPORT);
        assert_eq!(g.line, Line::new(200.0, 10.0, 200.0, 150.0));
    }

    #[test]
    fn sibling_without_rect_falls_back_to_viewport() {
        let lock = Lock {
            kind: AnchorKind::Center,
            value: 500.0,
            source: AnchorSource::Sibling,
            source_rect: None,
        };
        let g = guide_line(Axis::X, &lock, &Rect::new(400.0, 100.0, 200.0, 50.0), VIEWPORT);
        assert_eq!(g.line, Line::new(500.0, 0.0, 500.0, 700.0));
    }

    #[test]
    fn no_locks_no_lines() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(build_guide_lines(&rect, None, None, VIEWPORT).is_empty());
    }
}
