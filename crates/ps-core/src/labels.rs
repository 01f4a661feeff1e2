//! Distance labels implied by the active locks.
//!
//! Computed from the *final* snapped rect, independently of the snap search.
//! An X lock on a sibling produces a vertical gap measurement between the two
//! elements (the guide is vertical, so the interesting gap runs along it); an
//! X lock on the viewport produces left/right page margins. Y mirrors this.
//!
//! A gap is shown only when it is finite, strictly positive and at least
//! `min_gap_px`: overlapping or touching elements get no label.

use crate::anchor::{AnchorSource, Lock, Slot};
use crate::config::SnapConfig;
use crate::geometry::{Axis, Line, Rect, Viewport};
use serde::{Deserialize, Serialize};

/// What a distance label measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// Gap between the resized element and the sibling it is aligned to.
    Sibling,
    /// Margin between the resized element and a viewport edge.
    Viewport,
}

/// A gap measurement to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceLabel {
    pub kind: LabelKind,
    /// Direction the gap is measured in.
    pub axis: Axis,
    /// Rounded pixel value.
    pub value: f64,
    pub text: String,
    pub line: Line,
}

/// Inputs for [`compute_distance_labels`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceLabelParams {
    pub rect: Rect,
    #[serde(default)]
    pub lock_x: Option<Lock>,
    #[serde(default)]
    pub lock_y: Option<Lock>,
    pub viewport: Viewport,
    /// Omitted in JSON: `SnapConfig::default().min_gap_px`.
    #[serde(default = "default_min_gap")]
    pub min_gap_px: f64,
}

fn default_min_gap() -> f64 {
    SnapConfig::default().min_gap_px
}

/// Labels for both locks, X-derived first.
pub fn compute_distance_labels(params: &DistanceLabelParams) -> Vec<DistanceLabel> {
    let rect = params.rect;
    if !rect.is_finite() {
        return Vec::new();
    }
    let viewport = params.viewport.sanitized();
    let mut labels = Vec::new();

    for (axis, lock) in [(Axis::X, params.lock_x), (Axis::Y, params.lock_y)] {
        let Some(lock) = lock else { continue };
        match (lock.source, lock.source_rect) {
            (AnchorSource::Sibling, Some(source)) => {
                labels.extend(sibling_gap(axis, &rect, &source, params.min_gap_px));
            }
            (AnchorSource::Sibling, None) => {}
            (AnchorSource::Viewport, _) => {
                viewport_margins(axis, &lock, &rect, viewport, params.min_gap_px, &mut labels);
            }
        }
    }

    labels
}

/// Whether a gap gets a label.
pub fn is_gap_visible(gap: f64, min_gap_px: f64) -> bool {
    gap.is_finite() && gap > 0.0 && gap >= min_gap_px
}

/// `"{n}px"` with `n` rounded and `-0` shown as `0`.
pub fn format_px(gap: f64) -> (f64, String) {
    let mut rounded = gap.round();
    if rounded == 0.0 {
        rounded = 0.0;
    }
    (rounded, format!("{rounded}px"))
}

fn label(kind: LabelKind, axis: Axis, gap: f64, line: Line) -> DistanceLabel {
    let (value, text) = format_px(gap);
    DistanceLabel {
        kind,
        axis,
        value,
        text,
        line,
    }
}

/// A segment along `measure` from `from` to `to`, positioned at `at` on the
/// other axis.
fn measure_line(measure: Axis, at: f64, from: f64, to: f64) -> Line {
    match measure {
        Axis::X => Line::horizontal(at, from, to),
        Axis::Y => Line::vertical(at, from, to),
    }
}

/// Gap to the lock's source element, measured perpendicular to the guide.
///
/// Prefers the gap where the target sits after the source (below/right of
/// it), then the gap where it sits before.
fn sibling_gap(
    lock_axis: Axis,
    rect: &Rect,
    source: &Rect,
    min_gap_px: f64,
) -> Option<DistanceLabel> {
    let measure = lock_axis.perpendicular();
    let at = lock_axis.center(rect);

    let gap_after = measure.start(rect) - measure.end(source);
    if is_gap_visible(gap_after, min_gap_px) {
        let line = measure_line(measure, at, measure.end(source), measure.start(rect));
        return Some(label(LabelKind::Sibling, measure, gap_after, line));
    }

    let gap_before = measure.start(source) - measure.end(rect);
    if is_gap_visible(gap_before, min_gap_px) {
        let line = measure_line(measure, at, measure.end(rect), measure.start(source));
        return Some(label(LabelKind::Sibling, measure, gap_before, line));
    }

    None
}

/// Margins between `rect` and the viewport along the lock's axis.
///
/// Edge locks show their own side, or the opposite side when theirs is
/// hidden. Center locks show each side that is visible.
fn viewport_margins(
    axis: Axis,
    lock: &Lock,
    rect: &Rect,
    viewport: Viewport,
    min_gap_px: f64,
    out: &mut Vec<DistanceLabel>,
) {
    let extent = viewport.extent(axis);
    let perp = axis.perpendicular();
    let at = perp.center(rect).clamp(0.0, viewport.extent(perp));

    let start_gap = axis.start(rect);
    let end_gap = extent - axis.end(rect);
    let start_label = || {
        label(
            LabelKind::Viewport,
            axis,
            start_gap,
            measure_line(axis, at, 0.0, axis.start(rect)),
        )
    };
    let end_label = || {
        label(
            LabelKind::Viewport,
            axis,
            end_gap,
            measure_line(axis, at, axis.end(rect), extent),
        )
    };
    let start_visible = is_gap_visible(start_gap, min_gap_px);
    let end_visible = is_gap_visible(end_gap, min_gap_px);

    match lock.kind.slot() {
        Slot::Start => {
            if start_visible {
                out.push(start_label());
            } else if end_visible {
                out.push(end_label());
            }
        }
        Slot::End => {
            if end_visible {
                out.push(end_label());
            } else if start_visible {
                out.push(start_label());
            }
        }
        Slot::Center => {
            if start_visible {
                out.push(start_label());
            }
            if end_visible {
                out.push(end_label());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorKind;
    use pretty_assertions::assert_eq;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

    fn sibling_x_lock(source: Rect) -> Lock {
        Lock {
            kind: AnchorKind::Left,
            value: source.left,
            source: AnchorSource::Sibling,
            source_rect: Some(source),
        }
    }

    fn viewport_lock(kind: AnchorKind, value: f64) -> Lock {
        Lock {
            kind,
            value,
            source: AnchorSource::Viewport,
            source_rect: None,
        }
    }

    fn params(rect: Rect, lock_x: Option<Lock>, lock_y: Option<Lock>) -> DistanceLabelParams {
        DistanceLabelParams {
            rect,
            lock_x,
            lock_y,
            viewport: VIEWPORT,
            min_gap_px: 1.0,
        }
    }

    #[test]
    fn sibling_gap_below_source() {
        let source = Rect::new(100.0, 20.0, 50.0, 30.0);
        let rect = Rect::new(100.0, 74.0, 80.0, 40.0);
        let labels = compute_distance_labels(&params(rect, Some(sibling_x_lock(source)), None));
        assert_eq!(
            labels,
            vec![DistanceLabel {
                kind: LabelKind::Sibling,
                axis: Axis::Y,
                value: 24.0,
                text: "24px".into(),
                line: Line::new(140.0, 50.0, 140.0, 74.0),
            }]
        );
    }

    #[test]
    fn sibling_gap_above_source() {
        let source = Rect::new(100.0, 200.0, 50.0, 30.0);
        let rect = Rect::new(100.0, 100.0, 80.0, 40.0);
        let labels = compute_distance_labels(&params(rect, Some(sibling_x_lock(source)), None));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].value, 60.0);
        assert_eq!(labels[0].line, Line::new(140.0, 140.0, 140.0, 200.0));
    }

    #[test]
    fn overlapping_sibling_has_no_label() {
        let source = Rect::new(100.0, 100.0, 50.0, 30.0);
        let rect = Rect::new(100.0, 110.0, 80.0, 40.0);
        let labels = compute_distance_labels(&params(rect, Some(sibling_x_lock(source)), None));
        assert!(labels.is_empty());
    }

    #[test]
    fn edge_lock_falls_back_to_opposite_margin() {
        // Flush with the left edge: left margin is 0, so the right one shows.
        let rect = Rect::new(0.0, 100.0, 400.0, 100.0);
        let labels = compute_distance_labels(&params(
            rect,
            Some(viewport_lock(AnchorKind::Left, 0.0)),
            None,
        ));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].value, 600.0);
        assert_eq!(labels[0].line, Line::new(400.0, 150.0, 1000.0, 150.0));
    }

    #[test]
    fn center_lock_shows_both_margins() {
        let rect = Rect::new(300.0, 100.0, 400.0, 100.0);
        let labels = compute_distance_labels(&params(
            rect,
            Some(viewport_lock(AnchorKind::Center, 500.0)),
            None,
        ));
        let values: Vec<f64> = labels.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![300.0, 300.0]);
    }

    #[test]
    fn y_margin_line_clamped_into_viewport() {
        let rect = Rect::new(900.0, 500.0, 400.0, 250.0);
        let labels = compute_distance_labels(&params(
            rect,
            None,
            Some(viewport_lock(AnchorKind::Bottom, 800.0)),
        ));
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].axis, Axis::Y);
        assert_eq!(labels[0].value, 50.0);
        // center_x = 1100, clamped to the viewport width
        assert_eq!(labels[0].line, Line::new(1000.0, 750.0, 1000.0, 800.0));
    }

    #[test]
    fn negative_zero_formats_as_zero() {
        assert_eq!(format_px(-0.2), (0.0, "0px".to_string()));
        assert_eq!(format_px(12.5).1, "13px");
    }

    #[test]
    fn omitted_min_gap_uses_config_default() {
        let json = r#"{"rect":{"left":0,"top":0,"width":10,"height":10},
            "viewport":{"width":100,"height":100}}"#;
        let params: DistanceLabelParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.min_gap_px, SnapConfig::default().min_gap_px);
        assert_eq!(params.lock_x, None);
    }
}
