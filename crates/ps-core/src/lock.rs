//! Per-axis hysteresis lock state machine.
//!
//! A lock is acquired when an edge comes within `threshold_px` of an anchor
//! and only released once it drifts beyond `threshold_px + hysteresis_px`.
//! While held, the lock's exact coordinate is re-applied every frame so the
//! rect stays glued to the anchor even as the raw pointer wobbles.

use crate::anchor::{Anchor, FixedEdge, Lock, get_axis_value, is_legal, legal_kinds};
use crate::config::SnapConfig;
use crate::geometry::{Axis, Rect};
use crate::snap::{apply_axis_snap, find_best_axis_snap};

/// Outcome of one frame on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnap {
    pub rect: Rect,
    pub lock: Option<Lock>,
}

impl AxisSnap {
    fn unlocked(rect: Rect) -> Self {
        Self { rect, lock: None }
    }
}

/// Run the lock machine for `axis` on `rect`.
///
/// Order: clear when the axis is not resized; drop a lock whose kind is
/// illegal for `fixed`; drop a lock beyond the release band or whose
/// re-application violates the size floor; keep a surviving lock; otherwise
/// search for a new one.
pub fn resolve_axis(
    rect: &Rect,
    axis: Axis,
    fixed: Option<FixedEdge>,
    anchors: &[Anchor],
    previous: Option<Lock>,
    config: &SnapConfig,
) -> AxisSnap {
    let Some(fixed) = fixed else {
        return AxisSnap::unlocked(*rect);
    };

    if let Some(lock) = previous {
        match retain_lock(rect, axis, fixed, &lock, config) {
            Some(snapped) => {
                log::trace!("{axis:?} lock kept at {} ({})", lock.value, lock.kind.as_str());
                return AxisSnap {
                    rect: snapped,
                    lock: Some(lock),
                };
            }
            None => {
                log::debug!("{axis:?} lock released at {} ({})", lock.value, lock.kind.as_str());
            }
        }
    }

    let legal = legal_kinds(axis, fixed);
    match find_best_axis_snap(
        rect,
        axis,
        fixed,
        anchors,
        &legal,
        config.threshold_px,
        config.min_size_px,
    ) {
        Some(candidate) => {
            let lock = Lock::from(&candidate.anchor);
            log::debug!(
                "{axis:?} lock acquired at {} ({}, {:?}, distance {})",
                lock.value,
                lock.kind.as_str(),
                lock.source,
                candidate.distance
            );
            AxisSnap {
                rect: candidate.rect,
                lock: Some(lock),
            }
        }
        None => AxisSnap::unlocked(*rect),
    }
}

/// Re-apply `lock` if it is still legal and within the release band.
fn retain_lock(
    rect: &Rect,
    axis: Axis,
    fixed: FixedEdge,
    lock: &Lock,
    config: &SnapConfig,
) -> Option<Rect> {
    if !is_legal(lock.kind, axis, fixed) || !lock.value.is_finite() {
        return None;
    }
    let distance = (lock.value - get_axis_value(rect, lock.kind)).abs();
    if distance.is_nan() || distance > config.release_px() {
        return None;
    }
    apply_axis_snap(
        rect,
        axis,
        Some(fixed),
        lock.kind,
        lock.value,
        config.min_size_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{AnchorKind, AnchorSource};

    fn config() -> SnapConfig {
        SnapConfig {
            threshold_px: 5.0,
            hysteresis_px: 4.0,
            min_size_px: 1.0,
            ..Default::default()
        }
    }

    fn rect_with_right(right: f64) -> Rect {
        Rect::new(0.0, 0.0, right, 50.0)
    }

    fn lock_at(value: f64) -> Lock {
        Lock {
            kind: AnchorKind::Right,
            value,
            source: AnchorSource::Viewport,
            source_rect: None,
        }
    }

    #[test]
    fn no_fixed_edge_clears_lock() {
        let out = resolve_axis(
            &rect_with_right(100.0),
            Axis::X,
            None,
            &[Anchor::viewport(AnchorKind::Right, 100.0)],
            Some(lock_at(100.0)),
            &config(),
        );
        assert_eq!(out.lock, None);
        assert_eq!(out.rect, rect_with_right(100.0));
    }

    #[test]
    fn held_lock_skips_search() {
        // A closer anchor exists, but the existing lock wins while in band.
        let anchors = [Anchor::viewport(AnchorKind::Right, 93.0)];
        let out = resolve_axis(
            &rect_with_right(92.0),
            Axis::X,
            Some(FixedEdge::Start),
            &anchors,
            Some(lock_at(100.0)),
            &config(),
        );
        assert_eq!(out.lock.map(|l| l.value), Some(100.0));
        assert_eq!(out.rect.right(), 100.0);
    }

    #[test]
    fn released_lock_falls_through_to_search() {
        let anchors = [Anchor::viewport(AnchorKind::Right, 60.0)];
        let out = resolve_axis(
            &rect_with_right(58.0),
            Axis::X,
            Some(FixedEdge::Start),
            &anchors,
            Some(lock_at(100.0)),
            &config(),
        );
        assert_eq!(out.lock.map(|l| l.value), Some(60.0));
        assert_eq!(out.rect.width, 60.0);
    }

    #[test]
    fn illegal_lock_kind_is_dropped() {
        let lock = Lock {
            kind: AnchorKind::Left,
            ..lock_at(0.0)
        };
        let out = resolve_axis(
            &rect_with_right(100.0),
            Axis::X,
            Some(FixedEdge::Start),
            &[],
            Some(lock),
            &config(),
        );
        assert_eq!(out.lock, None);
    }

    #[test]
    fn lock_violating_size_floor_is_dropped() {
        let cfg = SnapConfig {
            min_size_px: 20.0,
            ..config()
        };
        let out = resolve_axis(
            &Rect::new(0.0, 0.0, 22.0, 50.0),
            Axis::X,
            Some(FixedEdge::Start),
            &[],
            Some(lock_at(15.0)),
            &cfg,
        );
        assert_eq!(out.lock, None);
        assert_eq!(out.rect.width, 22.0);
    }
}
