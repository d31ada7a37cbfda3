//! The tablet store: the single source of truth for tablets on the canvas.
//!
//! Tablets live in one ordered `Vec`; index order is paint order, so the
//! last element is on top. Every operation is a synchronous
//! read-modify-write over that vector with exactly one writer (the owner
//! of the store). Operations on an unknown id are no-ops.
//!
//! `revision()` advances only when the collection actually changes, which
//! lets callers skip redraws after no-op edits.

use crate::color::{ColorConfig, pick_distinct_color};
use crate::constants::DEFAULT_BORDER_RADIUS;
use crate::hit::find_topmost_at;
use crate::id::TabletId;
use crate::model::{Color, NewTablet, Point, SplitLines, Tablet, TabletPatch};
use crate::split::{intersects, split_tablet};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ordered tablet collection plus the state needed to create new tablets.
pub struct TabletStore {
    tablets: Vec<Tablet>,
    rng: StdRng,
    color_config: ColorConfig,
    revision: u64,
}

impl Default for TabletStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TabletStore {
    /// Empty store with an entropy-seeded color generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Empty store with a deterministic color sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            tablets: Vec::new(),
            rng,
            color_config: ColorConfig::default(),
            revision: 0,
        }
    }

    /// Replace the color-distinctness tuning.
    pub fn with_color_config(mut self, config: ColorConfig) -> Self {
        self.color_config = config;
        self
    }

    // ─── Reads ───────────────────────────────────────────────────────────

    /// All tablets, bottom to top.
    pub fn tablets(&self) -> &[Tablet] {
        &self.tablets
    }

    pub fn get(&self, id: TabletId) -> Option<&Tablet> {
        self.tablets.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tablets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tablets.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Topmost tablet under `p`.
    pub fn topmost_at(&self, p: Point) -> Option<&Tablet> {
        find_topmost_at(p, &self.tablets)
    }

    /// Colors of all live tablets, bottom to top.
    pub fn used_colors(&self) -> Vec<Color> {
        self.tablets.iter().map(|t| t.color).collect()
    }

    // ─── Writes ──────────────────────────────────────────────────────────

    /// Append a tablet on top with a fresh id and a color distinct from
    /// every live tablet.
    pub fn add(&mut self, draft: NewTablet) -> TabletId {
        let used = self.used_colors();
        let color = pick_distinct_color(&used, &self.color_config, &mut self.rng);
        let tablet = Tablet {
            id: TabletId::tablet(),
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            color,
            border_radius: draft.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
        };
        let id = tablet.id;
        log::debug!(
            "add {id} at ({}, {}) {}x{} {}",
            tablet.x,
            tablet.y,
            tablet.width,
            tablet.height,
            color.to_hex()
        );
        self.tablets.push(tablet);
        self.bump();
        id
    }

    /// Merge `patch` into the tablet with `id`. Returns whether it existed.
    pub fn update(&mut self, id: TabletId, patch: TabletPatch) -> bool {
        let Some(slot) = self.tablets.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        *slot = patch.apply_to(slot);
        self.bump();
        true
    }

    /// Delete the tablet with `id`. Returns whether it existed.
    pub fn remove(&mut self, id: TabletId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.tablets.remove(pos);
        log::debug!("remove {id}");
        self.bump();
        true
    }

    /// Move the tablet with `id` to the top of the paint order.
    pub fn bring_to_top(&mut self, id: TabletId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let tablet = self.tablets.remove(pos);
        self.tablets.push(tablet);
        log::debug!("bring {id} to top");
        self.bump();
        true
    }

    /// Split every tablet crossed by `lines`.
    ///
    /// Untouched tablets keep their relative order at the bottom; the
    /// results of each crossed tablet follow, in the crossed tablets'
    /// original order. A crossed tablet too small to cut comes back whole
    /// and still moves up with the results. Returns `false` (and leaves the
    /// revision alone) when the resulting collection equals the current one.
    pub fn split_all(&mut self, lines: SplitLines) -> bool {
        if lines.is_empty() {
            return false;
        }

        let (crossed, kept): (Vec<Tablet>, Vec<Tablet>) = self
            .tablets
            .iter()
            .cloned()
            .partition(|t| intersects(&t.rect(), &lines));

        if crossed.is_empty() {
            return false;
        }

        let mut next = kept;
        for tablet in &crossed {
            next.extend(split_tablet(tablet, &lines));
        }
        if next == self.tablets {
            log::trace!("split at {lines:?} left every tablet whole");
            return false;
        }
        log::debug!(
            "split {} tablet(s) at {lines:?}: {} -> {}",
            crossed.len(),
            self.tablets.len(),
            next.len()
        );
        self.tablets = next;
        self.bump();
        true
    }

    /// Remove every tablet.
    pub fn clear(&mut self) -> bool {
        if self.tablets.is_empty() {
            return false;
        }
        log::debug!("clear {} tablet(s)", self.tablets.len());
        self.tablets.clear();
        self.bump();
        true
    }

    fn position(&self, id: TabletId) -> Option<usize> {
        self.tablets.iter().position(|t| t.id == id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
