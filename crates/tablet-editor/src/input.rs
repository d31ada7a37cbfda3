//! Input abstraction layer.
//!
//! Normalizes touch and mouse streams into a single `PointerEvent` type.
//! Coordinates are already in canvas units; `time_ms` is a monotonic clock
//! supplied by the host and only drives deferred visual effects.

use serde::{Deserialize, Serialize};
use tablet_core::Point;

/// Phase of a single-pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Finger down / mouse pressed.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released normally.
    End,
    /// The platform took the gesture away (system gesture, lost focus).
    Cancel,
}

/// A normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn start(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            phase: PointerPhase::Start,
            x,
            y,
            time_ms,
        }
    }

    pub fn moved(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
            time_ms,
        }
    }

    pub fn end(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            phase: PointerPhase::End,
            x,
            y,
            time_ms,
        }
    }

    pub fn cancel(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            phase: PointerPhase::Cancel,
            x,
            y,
            time_ms,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
