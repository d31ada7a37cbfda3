//! Canvas session: pointer stream → tablet store.
//!
//! The session owns the authoritative `TabletStore` together with the
//! transient gesture state (preview rectangle, split-line indicator) that a
//! renderer needs for feedback. Events are handled one at a time and each
//! one finishes its read-modify-write on the store before the next begins.
//!
//! Because the store is only reachable through an owned session (or an
//! owned store), there is no way to touch tablets before one exists.

use crate::indicator::SplitIndicator;
use crate::input::{PointerEvent, PointerPhase};
use crate::tools::GestureTool;
use tablet_core::{
    NewTablet, Rect, SplitLines, Tablet, TabletId, TabletPatch, TabletStore,
};

/// A store edit produced by a tool or a host command.
#[derive(Debug, Clone, PartialEq)]
pub enum TabletMutation {
    Add(NewTablet),
    Move { id: TabletId, x: f32, y: f32 },
    BringToTop { id: TabletId },
    SplitAll(SplitLines),
    Remove { id: TabletId },
    Clear,
}

pub struct CanvasSession {
    store: TabletStore,
    tool: GestureTool,
    indicator: SplitIndicator,
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(TabletStore::new())
    }
}

impl CanvasSession {
    pub fn new(store: TabletStore) -> Self {
        Self {
            store,
            tool: GestureTool::new(),
            indicator: SplitIndicator::new(),
        }
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    pub fn store(&self) -> &TabletStore {
        &self.store
    }

    /// Committed tablets, bottom to top.
    pub fn tablets(&self) -> &[Tablet] {
        self.store.tablets()
    }

    pub fn preview(&self) -> Option<Rect> {
        self.tool.preview()
    }

    pub fn split_lines(&self) -> Option<SplitLines> {
        self.indicator.lines()
    }

    pub fn dragged_id(&self) -> Option<TabletId> {
        self.tool.dragged_id()
    }

    // ─── Events ──────────────────────────────────────────────────────────

    /// Route a pointer event. Returns `true` if anything visible changed
    /// (tablets, preview, or split lines).
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let revision = self.store.revision();
        let preview = self.tool.preview();
        let dragged = self.tool.dragged_id();

        let mutations = match event.phase {
            PointerPhase::Start => {
                let hit = self.store.topmost_at(event.position()).cloned();
                self.tool.handle(event, hit.as_ref())
            }
            _ => self.tool.handle(event, None),
        };

        let lines_changed = match event.phase {
            PointerPhase::Start | PointerPhase::Move => {
                self.indicator.show(SplitLines::at(event.position()))
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.indicator.schedule_hide(event.time_ms);
                false
            }
        };

        self.apply_mutations(mutations);

        self.store.revision() != revision
            || self.tool.preview() != preview
            || self.tool.dragged_id() != dragged
            || lines_changed
    }

    /// Advance the clock for deferred effects. Returns `true` if the split
    /// lines were hidden.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.indicator.tick(now_ms)
    }

    /// Remove every tablet. Returns `true` if there were any.
    pub fn clear(&mut self) -> bool {
        self.apply_mutation(TabletMutation::Clear)
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Apply a single mutation. Returns `true` if the store changed.
    pub fn apply_mutation(&mut self, mutation: TabletMutation) -> bool {
        match mutation {
            TabletMutation::Add(draft) => {
                self.store.add(draft);
                true
            }
            TabletMutation::Move { id, x, y } => {
                self.store.update(id, TabletPatch::position(x, y))
            }
            TabletMutation::BringToTop { id } => self.store.bring_to_top(id),
            TabletMutation::SplitAll(lines) => self.store.split_all(lines),
            TabletMutation::Remove { id } => self.store.remove(id),
            TabletMutation::Clear => self.store.clear(),
        }
    }

    pub fn apply_mutations(&mut self, mutations: Vec<TabletMutation>) -> bool {
        let mut changed = false;
        for mutation in mutations {
            changed |= self.apply_mutation(mutation);
        }
        changed
    }
}
