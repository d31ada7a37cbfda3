//! WASM bridge for the tablet canvas: exposes the Rust session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host forwards pointer
//! events in canvas coordinates, calls `tick` once per animation frame, and
//! renders from the JSON snapshots.

use serde_json::json;
use tablet_core::{ColorConfig, Point, TabletId, TabletStore};
use tablet_editor::{CanvasSession, PointerEvent, TabletMutation};
use wasm_bindgen::prelude::*;

/// The main WASM-facing canvas controller.
///
/// Every method that can change what is on screen returns `true` when the
/// host should redraw.
#[wasm_bindgen]
pub struct TabletCanvas {
    session: CanvasSession,
}

impl Default for TabletCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TabletCanvas {
    /// Create an empty canvas with randomly seeded colors.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        Self {
            session: CanvasSession::new(TabletStore::new()),
        }
    }

    /// Create an empty canvas with a reproducible color sequence.
    pub fn seeded(seed: u32) -> Self {
        console_error_panic_hook_setup();
        Self {
            session: CanvasSession::new(TabletStore::with_seed(u64::from(seed))),
        }
    }

    /// Seeded canvas with custom color-distinctness tuning.
    ///
    /// `max_attempts` is the number of random draws per new tablet;
    /// a draw is accepted once its similarity to every color on the canvas
    /// is below `min_similarity`.
    pub fn tuned(seed: u32, max_attempts: u32, min_similarity: f32) -> Self {
        console_error_panic_hook_setup();
        let config = ColorConfig {
            max_attempts,
            min_similarity_threshold: min_similarity,
        };
        let store = TabletStore::with_seed(u64::from(seed)).with_color_config(config);
        Self {
            session: CanvasSession::new(store),
        }
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    pub fn pointer_down(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        self.session.handle(&PointerEvent::start(x, y, time_ms))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        self.session.handle(&PointerEvent::moved(x, y, time_ms))
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        self.session.handle(&PointerEvent::end(x, y, time_ms))
    }

    pub fn pointer_cancel(&mut self, x: f32, y: f32, time_ms: f64) -> bool {
        self.session.handle(&PointerEvent::cancel(x, y, time_ms))
    }

    /// Advance deferred effects (split-line hide). Call once per frame.
    pub fn tick(&mut self, time_ms: f64) -> bool {
        self.session.tick(time_ms)
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Remove every tablet ("Clear All").
    pub fn clear(&mut self) -> bool {
        self.session.clear()
    }

    /// Remove a single tablet by id. Returns `false` for unknown ids.
    pub fn remove_tablet(&mut self, id: &str) -> bool {
        let Some(id) = TabletId::lookup(id) else {
            return false;
        };
        self.session.apply_mutation(TabletMutation::Remove { id })
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Whether the clear action has anything to do.
    pub fn has_tablets(&self) -> bool {
        !self.session.store().is_empty()
    }

    pub fn tablet_count(&self) -> usize {
        self.session.store().len()
    }

    /// Id of the topmost tablet at (x, y), if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<String> {
        self.session
            .store()
            .topmost_at(Point::new(x, y))
            .map(|t| t.id.as_str().to_string())
    }

    /// Id of the tablet under drag, for highlight rendering.
    pub fn dragged_id(&self) -> Option<String> {
        self.session.dragged_id().map(|id| id.as_str().to_string())
    }

    /// Tablets bottom-to-top as a JSON array.
    pub fn tablets_json(&self) -> String {
        serde_json::to_string(self.session.tablets()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Everything a frame needs:
    /// `{"tablets":[...],"preview":{...}|null,"splitLines":{...}|null,"draggedId":"..."|null}`
    pub fn snapshot_json(&self) -> String {
        let snapshot = json!({
            "tablets": self.session.tablets(),
            "preview": self.session.preview(),
            "splitLines": self.session.split_lines(),
            "draggedId": self.session.dragged_id(),
        });
        snapshot.to_string()
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Tablet WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
