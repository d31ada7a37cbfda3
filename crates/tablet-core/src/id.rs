//! Tablet identity.
//!
//! Every tablet gets a fresh id when it is drawn (`tablet_N`) and every part
//! produced by a split gets its own (`split_N`). Ids are never reused, even
//! after the tablet they named is removed, so a stale id held by a host can
//! only miss.
//!
//! Names live in a process-wide interner that only grows. Ids are minted
//! here; strings coming back from a host go through [`TabletId::lookup`],
//! which never adds to the interner.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static NAMES: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Shared by both prefixes so `tablet_3` and `split_3` never coexist.
static NEXT: AtomicU64 = AtomicU64::new(0);

const DRAWN_PREFIX: &str = "tablet";
const PART_PREFIX: &str = "split";

/// Handle to a tablet name. `Copy`, 4 bytes, compared by index.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabletId(Spur);

impl TabletId {
    /// Id for a newly drawn tablet.
    pub fn tablet() -> Self {
        Self::mint(DRAWN_PREFIX)
    }

    /// Id for a part produced by a split.
    pub fn split_part() -> Self {
        Self::mint(PART_PREFIX)
    }

    /// Resolve a name to an existing id without interning it.
    /// Returns `None` for names no tablet has ever carried.
    pub fn lookup(name: &str) -> Option<Self> {
        NAMES.get(name).map(TabletId)
    }

    /// Intern `name` as an id. Used when loading saved tablets.
    pub fn intern(name: &str) -> Self {
        TabletId(NAMES.get_or_intern(name))
    }

    pub fn as_str(&self) -> &str {
        NAMES.resolve(&self.0)
    }

    fn mint(prefix: &str) -> Self {
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }
}

impl fmt::Debug for TabletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for TabletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TabletId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TabletId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(TabletId::intern(&name))
    }
}
