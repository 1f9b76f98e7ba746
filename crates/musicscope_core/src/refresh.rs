//! Refresh token and generation stamping for chart loads.
use crate::CanonicalKey;

/// Sequence number stamped on every issued load.
pub type Generation = u64;

/// Counter whose increment forces a reload independent of selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Everything a load depends on. A change in any field requires a new load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDeps {
    pub primary: CanonicalKey,
    pub comparison: CanonicalKey,
    pub refresh: RefreshToken,
}

/// Decides when to (re)issue a load and which results are still current.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadTracker {
    latest: Generation,
    last_deps: Option<LoadDeps>,
}

impl LoadTracker {
    /// Returns the generation for a new load, or `None` if `deps` were already
    /// issued by the latest load.
    pub fn plan(&mut self, deps: LoadDeps) -> Option<Generation> {
        if self.last_deps.as_ref() == Some(&deps) {
            return None;
        }
        self.latest += 1;
        self.last_deps = Some(deps);
        Some(self.latest)
    }

    /// Only the most recently issued generation may be applied.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest != 0 && generation == self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }
}
