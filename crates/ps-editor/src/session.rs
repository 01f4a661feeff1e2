//! Resize gesture session.
//!
//! Owns everything that lives for exactly one drag of one handle: the
//! starting rect and pointer position, the anchor set collected at
//! pointer-down, and the two locks the snap engine hands back every frame.
//!
//! ## Modifier behaviors
//!
//! | Modifier | Effect |
//! |----------|--------|
//! | **Alt**  | Free resize: snapping bypassed, locks cleared |

use crate::commands::ResizeCommand;
use crate::handle::ResizeHandle;
use crate::input::{InputEvent, Modifiers};
use ps_core::labels::{DistanceLabel, DistanceLabelParams, compute_distance_labels};
use ps_core::{
    Anchors, Axis, FixedEdge, Lock, Rect, ResizeSnapParams, SnapConfig, SnapResult, Viewport,
    compute_resize_snap,
};
use serde::{Deserialize, Serialize};

/// What the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeFrame {
    pub snap: SnapResult,
    pub labels: Vec<DistanceLabel>,
}

/// Result of feeding an input event to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeOutcome {
    /// Event not relevant to the gesture.
    Ignored,
    /// Pointer moved: draw this frame.
    Frame(ResizeFrame),
    /// Pointer released: commit this command.
    Finished(ResizeCommand),
    /// Gesture abandoned: restore this rect.
    Cancelled { element: String, rect: Rect },
}

/// State for one in-progress resize gesture.
pub struct ResizeSession {
    element: String,
    handle: ResizeHandle,
    start_rect: Rect,
    origin: (f64, f64),
    anchors: Anchors,
    viewport: Viewport,
    config: SnapConfig,
    lock_x: Option<Lock>,
    lock_y: Option<Lock>,
    current: Rect,
    done: bool,
}

impl ResizeSession {
    /// Start a gesture at pointer position `origin`.
    pub fn begin(
        element: impl Into<String>,
        start_rect: Rect,
        handle: ResizeHandle,
        origin: (f64, f64),
        anchors: Anchors,
        viewport: Viewport,
        config: SnapConfig,
    ) -> Self {
        let element = element.into();
        log::debug!(
            "resize begin {element} via {} from {start_rect:?} ({} x / {} y anchors)",
            handle.as_str(),
            anchors.x.len(),
            anchors.y.len()
        );
        Self {
            element,
            handle,
            start_rect,
            origin,
            anchors,
            viewport,
            config: config.sanitized(),
            lock_x: None,
            lock_y: None,
            current: start_rect,
            done: false,
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Last snapped rect (the starting rect before any movement).
    pub fn current_rect(&self) -> Rect {
        self.current
    }

    pub fn locks(&self) -> (Option<Lock>, Option<Lock>) {
        (self.lock_x, self.lock_y)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Unsnapped rect for the pointer at `(x, y)`.
    ///
    /// Dragged edges follow the pointer delta; fixed edges stay put. A
    /// dragged edge never crosses the fixed one: the size stops at
    /// `min_size_px`.
    pub fn proposed_rect(&self, x: f64, y: f64) -> Rect {
        let direction = self.handle.direction();
        let delta = (x - self.origin.0, y - self.origin.1);
        let mut rect = self.start_rect;
        for (axis, d) in [(Axis::X, delta.0), (Axis::Y, delta.1)] {
            let Some(fixed) = direction.fixed_edge(axis) else {
                continue;
            };
            let start = axis.start(&self.start_rect);
            let end = axis.end(&self.start_rect);
            let floor = self.config.min_size_px;
            rect = match fixed {
                FixedEdge::Start => {
                    let size = (end + d - start).max(floor);
                    axis.with_span(&rect, start, size)
                }
                FixedEdge::End => {
                    let size = (end - (start + d)).max(floor);
                    axis.with_span(&rect, end - size, size)
                }
            };
        }
        rect
    }

    /// Advance one frame with the pointer at `(x, y)`.
    pub fn update(&mut self, x: f64, y: f64, modifiers: Modifiers) -> ResizeFrame {
        let proposed = self.proposed_rect(x, y);

        let snap = if modifiers.alt {
            SnapResult::unsnapped(proposed)
        } else {
            let params = ResizeSnapParams::new(
                proposed,
                self.handle.direction(),
                &self.anchors,
                self.viewport,
                &self.config,
            )
            .with_locks(self.lock_x, self.lock_y);
            compute_resize_snap(&params)
        };

        self.lock_x = snap.lock_x;
        self.lock_y = snap.lock_y;
        self.current = snap.snapped_rect;

        let labels = compute_distance_labels(&DistanceLabelParams {
            rect: snap.snapped_rect,
            lock_x: snap.lock_x,
            lock_y: snap.lock_y,
            viewport: self.viewport,
            min_gap_px: self.config.min_gap_px,
        });

        ResizeFrame { snap, labels }
    }

    /// End the gesture, producing the command to record.
    pub fn finish(&mut self) -> ResizeCommand {
        self.done = true;
        self.lock_x = None;
        self.lock_y = None;
        log::debug!("resize end {} at {:?}", self.element, self.current);
        ResizeCommand {
            element: self.element.clone(),
            before: self.start_rect,
            after: self.current,
            description: format!("Resize {}", self.element),
        }
    }

    /// Abandon the gesture; the element goes back to its starting rect.
    pub fn cancel(&mut self) -> Rect {
        self.done = true;
        self.lock_x = None;
        self.lock_y = None;
        self.current = self.start_rect;
        log::debug!("resize cancelled {}", self.element);
        self.start_rect
    }

    /// Route an input event through the gesture.
    pub fn handle(&mut self, event: &InputEvent) -> ResizeOutcome {
        if self.done {
            return ResizeOutcome::Ignored;
        }
        match event {
            InputEvent::PointerMove { x, y, modifiers } => {
                ResizeOutcome::Frame(self.update(*x, *y, *modifiers))
            }
            InputEvent::PointerUp { x, y, modifiers } => {
                self.update(*x, *y, *modifiers);
                ResizeOutcome::Finished(self.finish())
            }
            InputEvent::Key { key, .. } if key == "Escape" => {
                let rect = self.cancel();
                ResizeOutcome::Cancelled {
                    element: self.element.clone(),
                    rect,
                }
            }
            _ => ResizeOutcome::Ignored,
        }
    }
}
