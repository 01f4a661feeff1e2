//! Per-frame resize snapping.
//!
//! The caller invokes [`compute_resize_snap`] once per animation frame with
//! the proposed rect and the locks returned by the previous frame. Nothing is
//! retained between calls.

use crate::anchor::{Anchors, Lock, ResizeDirection};
use crate::config::SnapConfig;
use crate::geometry::{Axis, Rect, Viewport};
use crate::guides::{GuideLines, build_guide_lines};
use crate::lock::resolve_axis;
use serde::{Deserialize, Serialize};

/// Inputs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSnapParams<'a> {
    /// Proposed rect from the raw pointer position.
    pub rect: Rect,
    pub resize: ResizeDirection,
    pub anchors: &'a Anchors,
    pub threshold_px: f64,
    pub hysteresis_px: f64,
    pub min_size_px: f64,
    pub lock_x: Option<Lock>,
    pub lock_y: Option<Lock>,
    pub viewport: Viewport,
}

impl<'a> ResizeSnapParams<'a> {
    /// Params with thresholds taken from `config` and no prior locks.
    pub fn new(
        rect: Rect,
        resize: ResizeDirection,
        anchors: &'a Anchors,
        viewport: Viewport,
        config: &SnapConfig,
    ) -> Self {
        Self {
            rect,
            resize,
            anchors,
            threshold_px: config.threshold_px,
            hysteresis_px: config.hysteresis_px,
            min_size_px: config.min_size_px,
            lock_x: None,
            lock_y: None,
            viewport,
        }
    }

    pub fn with_locks(mut self, lock_x: Option<Lock>, lock_y: Option<Lock>) -> Self {
        self.lock_x = lock_x;
        self.lock_y = lock_y;
        self
    }

    fn config(&self) -> SnapConfig {
        SnapConfig {
            threshold_px: self.threshold_px,
            hysteresis_px: self.hysteresis_px,
            min_size_px: self.min_size_px,
            ..Default::default()
        }
    }
}

/// Output of one frame. `lock_x`/`lock_y` must be fed back next frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapResult {
    pub snapped_rect: Rect,
    pub guide_lines: GuideLines,
    pub lock_x: Option<Lock>,
    pub lock_y: Option<Lock>,
}

impl SnapResult {
    /// `rect` untouched, no guides, no locks.
    pub fn unsnapped(rect: Rect) -> Self {
        Self {
            snapped_rect: rect,
            guide_lines: GuideLines::new(),
            lock_x: None,
            lock_y: None,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.lock_x.is_some() || self.lock_y.is_some()
    }
}

/// Snap both axes of a resize gesture.
///
/// X is resolved on the input rect, then Y on the X-adjusted rect, so corner
/// handles snap each axis independently. An invalid rect (non-finite, or not
/// larger than half a pixel on both axes) yields [`SnapResult::unsnapped`].
/// Non-finite or negative thresholds fall back to their `SnapConfig`
/// defaults.
pub fn compute_resize_snap(params: &ResizeSnapParams<'_>) -> SnapResult {
    let rect = params.rect;
    if !rect.is_valid() {
        log::warn!("resize snap skipped: degenerate rect {rect:?}");
        return SnapResult::unsnapped(rect);
    }

    let viewport = params.viewport.sanitized();
    let config = params.config().sanitized();

    let x = resolve_axis(
        &rect,
        Axis::X,
        params.resize.fixed_edge(Axis::X),
        params.anchors.for_axis(Axis::X),
        params.lock_x,
        &config,
    );
    let y = resolve_axis(
        &x.rect,
        Axis::Y,
        params.resize.fixed_edge(Axis::Y),
        params.anchors.for_axis(Axis::Y),
        params.lock_y,
        &config,
    );

    let guide_lines = build_guide_lines(&y.rect, x.lock.as_ref(), y.lock.as_ref(), viewport);

    SnapResult {
        snapped_rect: y.rect,
        guide_lines,
        lock_x: x.lock,
        lock_y: y.lock,
    }
}
