use std::collections::HashSet;

use crate::{
    CanonicalKey, EtlJob, Generation, GenreComparison, GenreDistribution, StatusLine, TopArtists,
    TOP_N,
};

/// One labelled value of a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: String,
    pub value: u64,
}

/// One genre of the two-country comparison chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonBar {
    pub category: String,
    pub primary_count: u64,
    pub comparison_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonView {
    /// Both selections share a key; nothing was requested.
    #[default]
    SameCountry,
    NoData,
    Bars,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotMeta {
    pub latest_fetched_at: Option<String>,
    pub total_tracks: Option<u64>,
    pub total_genre_tags_counted: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub primary_label: String,
    pub comparison_label: String,
    pub primary_key: CanonicalKey,
    pub comparison_key: CanonicalKey,
    pub loading: bool,
    pub error: Option<String>,
    pub has_charts: bool,
    pub snapshot: Option<SnapshotMeta>,
    pub genre_slices: Vec<ChartSlice>,
    pub artist_bars: Vec<ChartSlice>,
    pub comparison: ComparisonView,
    pub comparison_bars: Vec<ComparisonBar>,
    pub etl_busy: Vec<EtlJob>,
    pub etl_status: Option<StatusLine>,
    pub refresh_token: u64,
    pub generation: Generation,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn is_etl_busy(&self, job: EtlJob) -> bool {
        self.etl_busy.contains(&job)
    }
}

/// Pie slices for the primary country's genre counts.
pub fn genre_slices(distribution: Option<&GenreDistribution>) -> Vec<ChartSlice> {
    let Some(distribution) = distribution else {
        return Vec::new();
    };
    first_distinct(&distribution.genres, |g| &g.genre)
        .map(|g| ChartSlice {
            label: g.genre.clone(),
            value: g.count,
        })
        .collect()
}

/// Bars for the primary country's top artists by track count.
pub fn artist_bars(artists: Option<&TopArtists>) -> Vec<ChartSlice> {
    let Some(artists) = artists else {
        return Vec::new();
    };
    first_distinct(&artists.artists, |a| &a.artist_name)
        .map(|a| ChartSlice {
            label: a.artist_name.clone(),
            value: a.track_count,
        })
        .collect()
}

/// Side-by-side genre counts for the two compared countries.
pub fn comparison_bars(comparison: Option<&GenreComparison>) -> Vec<ComparisonBar> {
    let Some(comparison) = comparison else {
        return Vec::new();
    };
    first_distinct(&comparison.genres, |row| &row.genre)
        .map(|row| ComparisonBar {
            category: row.genre.clone(),
            primary_count: row.c1_count,
            comparison_count: row.c2_count,
        })
        .collect()
}

// Keeps server order, drops repeated labels, caps at TOP_N.
fn first_distinct<'a, T>(
    items: &'a [T],
    label: impl Fn(&T) -> &String + 'a,
) -> impl Iterator<Item = &'a T> + 'a {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(move |item| seen.insert(label(item).clone()))
        .take(TOP_N as usize)
}
