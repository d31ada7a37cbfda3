//! Replay recorded pointer logs through a canvas session.
//!
//! A log is JSON lines, one `PointerEvent` per line:
//!
//! ```text
//! {"phase":"start","x":10,"y":10,"time_ms":0}
//! {"phase":"move","x":120,"y":70,"time_ms":16}
//! {"phase":"end","x":120,"y":70,"time_ms":32}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Malformed lines are
//! reported and skipped so a partially corrupt recording still replays.

use serde::Serialize;
use tablet_core::{Tablet, TabletStore};
use tablet_editor::{CanvasSession, PointerEvent};

/// Seed used when the caller does not pick one, so replays are reproducible.
pub const DEFAULT_SEED: u64 = 0x7AB1E7;

/// Parsed log plus the lines that could not be read.
#[derive(Debug, Default)]
pub struct PointerLog {
    pub events: Vec<PointerEvent>,
    /// `(line number, message)` for every skipped line.
    pub skipped: Vec<(usize, String)>,
}

/// Parse one log line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<PointerEvent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| format!("Event parse error: {e}"))
}

pub fn parse_log(input: &str) -> PointerLog {
    let mut log = PointerLog::default();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(line) {
            Ok(Some(event)) => log.events.push(event),
            Ok(None) => {}
            Err(msg) => {
                log::warn!("line {line_no}: {msg}");
                log.skipped.push((line_no, msg));
            }
        }
    }
    log
}

/// Feed every event to a fresh session and settle deferred effects.
pub fn replay(events: &[PointerEvent], seed: u64) -> CanvasSession {
    let mut session = CanvasSession::new(TabletStore::with_seed(seed));
    for event in events {
        session.handle(event);
    }
    if let Some(last) = events.last() {
        session.tick(last.time_ms + tablet_core::constants::SPLIT_LINE_HIDE_DELAY_MS);
    }
    log::info!(
        "replayed {} events into {} tablets",
        events.len(),
        session.tablets().len()
    );
    session
}

#[derive(Serialize)]
struct Report<'a> {
    tablets: &'a [Tablet],
    events: usize,
    skipped: usize,
}

/// Render the replay outcome as pretty JSON.
pub fn render_report(session: &CanvasSession, log: &PointerLog) -> Result<String, String> {
    let report = Report {
        tablets: session.tablets(),
        events: log.events.len(),
        skipped: log.skipped.len(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("Report encode error: {e}"))
}
