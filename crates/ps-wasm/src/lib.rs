//! WASM bridge for PageSnap: exposes the snap engine and resize controller
//! to the injected page script.
//!
//! Compiled via `wasm-pack build --target web`. Everything crosses the
//! boundary as JSON strings: requests use the page script's camelCase shapes,
//! responses are `{"ok":true,"result":...}` or `{"ok":false,"error":"..."}`.

use ps_core::labels::DistanceLabelParams;
use ps_core::{
    Anchors, Lock, Rect, ResizeDirection, ResizeSnapParams, SnapConfig, Viewport,
    collect_anchors as collect_anchors_core, compute_distance_labels as labels_core,
    compute_resize_snap as snap_core,
};
use ps_editor::commands::CommandStack;
use ps_editor::handle::ResizeHandle;
use ps_editor::input::{InputEvent, Modifiers};
use ps_editor::session::{ResizeOutcome, ResizeSession};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ─── JSON envelope ───────────────────────────────────────────────────────

fn ok_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(result) => serde_json::json!({ "ok": true, "result": result }).to_string(),
        Err(e) => error_json(&format!("serialize: {e}")),
    }
}

fn error_json(message: &str) -> String {
    log::warn!("ps-wasm: {message}");
    serde_json::json!({ "ok": false, "error": message }).to_string()
}

fn parse<'a, T: Deserialize<'a>>(what: &str, json: &'a str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid {what}: {e}"))
}

// ─── Standalone engine functions ─────────────────────────────────────────

/// Request shape for [`compute_resize_snap`]. Omitted thresholds fall back
/// to `SnapConfig::default()`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResizeSnapRequest {
    rect: Rect,
    #[serde(default)]
    resize: ResizeDirection,
    #[serde(default)]
    anchors: Anchors,
    #[serde(default = "default_threshold")]
    threshold_px: f64,
    #[serde(default = "default_hysteresis")]
    hysteresis_px: f64,
    #[serde(default = "default_min_size")]
    min_size_px: f64,
    #[serde(default)]
    lock_x: Option<Lock>,
    #[serde(default)]
    lock_y: Option<Lock>,
    #[serde(default)]
    viewport: Viewport,
}

fn default_threshold() -> f64 {
    SnapConfig::default().threshold_px
}

fn default_hysteresis() -> f64 {
    SnapConfig::default().hysteresis_px
}

fn default_min_size() -> f64 {
    SnapConfig::default().min_size_px
}

/// Run one frame of resize snapping. Takes a `ResizeSnapRequest` JSON and
/// returns a `SnapResult`.
#[wasm_bindgen]
pub fn compute_resize_snap(request_json: &str) -> String {
    let req: ResizeSnapRequest = match parse("snap request", request_json) {
        Ok(r) => r,
        Err(e) => return error_json(&e),
    };
    let params = ResizeSnapParams {
        rect: req.rect,
        resize: req.resize,
        anchors: &req.anchors,
        threshold_px: req.threshold_px,
        hysteresis_px: req.hysteresis_px,
        min_size_px: req.min_size_px,
        lock_x: req.lock_x,
        lock_y: req.lock_y,
        viewport: req.viewport,
    };
    ok_json(&snap_core(&params))
}

/// Distance labels for a snapped rect. Takes `DistanceLabelParams` JSON.
#[wasm_bindgen]
pub fn compute_distance_labels(params_json: &str) -> String {
    match parse::<DistanceLabelParams>("label params", params_json) {
        Ok(params) => ok_json(&labels_core(&params)),
        Err(e) => error_json(&e),
    }
}

#[derive(Debug, Deserialize)]
struct CollectRequest {
    #[serde(default)]
    siblings: Vec<Rect>,
    viewport: Viewport,
}

/// Build anchors from measured sibling rects:
/// `{"siblings":[Rect...],"viewport":{"width":..,"height":..}}`.
#[wasm_bindgen]
pub fn collect_anchors(request_json: &str) -> String {
    match parse::<CollectRequest>("collect request", request_json) {
        Ok(req) => ok_json(&collect_anchors_core(&req.siblings, req.viewport)),
        Err(e) => error_json(&e),
    }
}

/// Default `SnapConfig` as JSON (unwrapped), for the page script's settings.
#[wasm_bindgen]
pub fn default_config() -> String {
    serde_json::to_string(&SnapConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

// ─── Resize controller ───────────────────────────────────────────────────

/// The WASM-facing resize controller.
///
/// Holds the active gesture (if any) and the undo/redo stack. The page script
/// measures the DOM at pointer-down, calls `begin`, forwards pointer moves
/// every animation frame, and writes the returned rects to element styles.
#[wasm_bindgen]
pub struct ResizeController {
    config: SnapConfig,
    session: Option<ResizeSession>,
    commands: CommandStack,
}

#[wasm_bindgen]
impl ResizeController {
    /// Create a controller. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Self {
        console_error_panic_hook_setup();

        let config = if config_json.trim().is_empty() {
            SnapConfig::default()
        } else {
            parse::<SnapConfig>("config", config_json)
                .and_then(|c| c.validate().map(|()| c))
                .unwrap_or_else(|e| {
                    log::warn!("ps-wasm: {e}; using default config");
                    SnapConfig::default()
                })
        };

        Self {
            config,
            session: None,
            commands: CommandStack::new(200),
        }
    }

    /// Start a resize gesture. `siblings_json` is an array of measured rects.
    /// Returns `{"ok":true,"result":null}` or an error envelope. An active
    /// gesture must be finished with `pointer_up` or `cancel` first.
    #[allow(clippy::too_many_arguments)]
    pub fn begin(
        &mut self,
        element: &str,
        rect_json: &str,
        handle: &str,
        pointer_x: f64,
        pointer_y: f64,
        siblings_json: &str,
        viewport_width: f64,
        viewport_height: f64,
    ) -> String {
        if let Some(active) = &self.session {
            return error_json(&format!("resize already active on {}", active.element()));
        }
        let rect: Rect = match parse("rect", rect_json) {
            Ok(r) => r,
            Err(e) => return error_json(&e),
        };
        let handle: ResizeHandle = match handle.parse() {
            Ok(h) => h,
            Err(e) => return error_json(&e),
        };
        let siblings: Vec<Rect> = match parse("siblings", siblings_json) {
            Ok(s) => s,
            Err(e) => return error_json(&e),
        };
        let viewport = Viewport::new(viewport_width, viewport_height);
        let anchors = collect_anchors_core(&siblings, viewport);

        self.session = Some(ResizeSession::begin(
            element,
            rect,
            handle,
            (pointer_x, pointer_y),
            anchors,
            viewport,
            self.config,
        ));
        ok_json(&())
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Forward a pointer move. Returns a `ResizeFrame` envelope.
    pub fn pointer_move(&mut self, x: f64, y: f64, alt: bool) -> String {
        let event = InputEvent::PointerMove {
            x,
            y,
            modifiers: modifiers(alt),
        };
        self.dispatch(&event)
    }

    /// Finish the gesture. Returns the committed `ResizeCommand` envelope.
    pub fn pointer_up(&mut self, x: f64, y: f64, alt: bool) -> String {
        let event = InputEvent::PointerUp {
            x,
            y,
            modifiers: modifiers(alt),
        };
        self.dispatch(&event)
    }

    /// Abandon the gesture. Returns `{element, rect}` to restore.
    pub fn cancel(&mut self) -> String {
        self.dispatch(&InputEvent::key("Escape"))
    }

    /// Returns a `StyleChange` envelope, or `result: null` if nothing to undo.
    pub fn undo(&mut self) -> String {
        ok_json(&self.commands.undo())
    }

    pub fn redo(&mut self) -> String {
        ok_json(&self.commands.redo())
    }

    pub fn can_undo(&self) -> bool {
        self.commands.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.commands.can_redo()
    }
}

#[derive(Serialize)]
struct Restore<'a> {
    element: &'a str,
    rect: Rect,
}

impl ResizeController {
    fn dispatch(&mut self, event: &InputEvent) -> String {
        let Some(session) = self.session.as_mut() else {
            return error_json("no active resize");
        };
        let response = match session.handle(event) {
            ResizeOutcome::Ignored => ok_json(&()),
            ResizeOutcome::Frame(frame) => ok_json(&frame),
            ResizeOutcome::Finished(cmd) => {
                let response = ok_json(&cmd);
                self.commands.push(cmd);
                response
            }
            ResizeOutcome::Cancelled { element, rect } => ok_json(&Restore {
                element: &element,
                rect,
            }),
        };
        if self.session.as_ref().is_some_and(ResizeSession::is_done) {
            self.session = None;
        }
        response
    }
}

fn modifiers(alt: bool) -> Modifiers {
    Modifiers {
        alt,
        ..Modifiers::NONE
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("PageSnap WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
