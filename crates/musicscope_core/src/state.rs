use crate::etl::EtlTracker;
use crate::view_model::{self, AppViewModel, ComparisonView, SnapshotMeta};
use crate::{
    label_for, normalize, CanonicalKey, EtlJob, Failure, FetchSet, Generation, LoadDeps,
    LoadTracker, RefreshToken, StatusLine, DEFAULT_COMPARISON, DEFAULT_PRIMARY,
};

/// All dashboard state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    primary_selection: String,
    comparison_selection: String,
    refresh: RefreshToken,
    loads: LoadTracker,
    loading: bool,
    fetch_set: Option<FetchSet>,
    fetch_error: Option<Failure>,
    etl: EtlTracker,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_selections(DEFAULT_PRIMARY, DEFAULT_COMPARISON)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(primary: impl Into<String>, comparison: impl Into<String>) -> Self {
        Self {
            primary_selection: primary.into(),
            comparison_selection: comparison.into(),
            refresh: RefreshToken::default(),
            loads: LoadTracker::default(),
            loading: false,
            fetch_set: None,
            fetch_error: None,
            etl: EtlTracker::default(),
            dirty: false,
        }
    }

    pub fn primary_key(&self) -> CanonicalKey {
        normalize(&self.primary_selection)
    }

    pub fn comparison_key(&self) -> CanonicalKey {
        normalize(&self.comparison_selection)
    }

    pub fn refresh_token(&self) -> RefreshToken {
        self.refresh
    }

    pub fn latest_generation(&self) -> Generation {
        self.loads.latest()
    }

    pub fn fetch_set(&self) -> Option<&FetchSet> {
        self.fetch_set.as_ref()
    }

    pub fn fetch_error(&self) -> Option<&Failure> {
        self.fetch_error.as_ref()
    }

    pub fn is_etl_busy(&self, job: EtlJob) -> bool {
        self.etl.is_busy(job)
    }

    pub fn etl_status(&self) -> Option<&StatusLine> {
        self.etl.status()
    }

    pub fn view(&self) -> AppViewModel {
        let primary_key = self.primary_key();
        let comparison_key = self.comparison_key();
        let fetch_set = self.fetch_set.as_ref();

        let genre_slices = view_model::genre_slices(fetch_set.map(|set| &set.genre_distribution));
        let artist_bars = view_model::artist_bars(fetch_set.map(|set| &set.top_artists));
        let comparison_bars =
            view_model::comparison_bars(fetch_set.and_then(|set| set.comparison.as_ref()));

        let comparison = if primary_key == comparison_key {
            ComparisonView::SameCountry
        } else if comparison_bars.is_empty() {
            ComparisonView::NoData
        } else {
            ComparisonView::Bars
        };

        let snapshot = fetch_set.map(|set| SnapshotMeta {
            latest_fetched_at: set.genre_distribution.latest_fetched_at.clone(),
            total_tracks: set.genre_distribution.total_tracks,
            total_genre_tags_counted: set.genre_distribution.total_genre_tags_counted,
        });

        AppViewModel {
            primary_label: label_for(&self.primary_selection),
            comparison_label: label_for(&self.comparison_selection),
            primary_key,
            comparison_key,
            loading: self.loading,
            error: self.fetch_error.as_ref().map(|failure| failure.message.clone()),
            has_charts: fetch_set.is_some(),
            snapshot,
            genre_slices,
            artist_bars,
            comparison,
            comparison_bars,
            etl_busy: self.etl.busy_jobs(),
            etl_status: self.etl.status().cloned(),
            refresh_token: self.refresh.value(),
            generation: self.loads.latest(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns `true` when the stored selection actually changed.
    pub(crate) fn set_primary_selection(&mut self, raw: String) -> bool {
        if self.primary_selection == raw {
            return false;
        }
        self.primary_selection = raw;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_comparison_selection(&mut self, raw: String) -> bool {
        if self.comparison_selection == raw {
            return false;
        }
        self.comparison_selection = raw;
        self.mark_dirty();
        true
    }

    /// Issues a new generation if the load dependencies changed and resets the
    /// chart state to "loading". Returns the generation to stamp the load with.
    pub(crate) fn begin_load(&mut self) -> Option<Generation> {
        let deps = LoadDeps {
            primary: self.primary_key(),
            comparison: self.comparison_key(),
            refresh: self.refresh,
        };
        let generation = self.loads.plan(deps)?;
        self.loading = true;
        self.fetch_set = None;
        self.fetch_error = None;
        self.mark_dirty();
        Some(generation)
    }

    /// Applies a joined load result. Stale generations leave state untouched.
    pub(crate) fn apply_load(
        &mut self,
        generation: Generation,
        result: Result<FetchSet, Failure>,
    ) -> bool {
        if !self.loads.is_current(generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(set) => {
                self.fetch_set = Some(set);
                self.fetch_error = None;
            }
            Err(failure) => {
                self.fetch_set = None;
                self.fetch_error = Some(failure);
            }
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn bump_refresh(&mut self) {
        self.refresh.bump();
    }

    pub(crate) fn etl_mut(&mut self) -> &mut EtlTracker {
        &mut self.etl
    }

    pub(crate) fn primary_label(&self) -> String {
        label_for(&self.primary_selection)
    }
}
