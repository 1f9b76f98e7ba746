//! MusicScope core: pure dashboard state machine and view-model derivers.
mod country;
mod effect;
mod etl;
mod failure;
mod msg;
mod payload;
mod refresh;
mod state;
mod update;
mod view_model;

pub use country::{
    label_for, normalize, normalize_optional, CanonicalKey, CountryOption, COUNTRY_OPTIONS,
    DEFAULT_COMPARISON, DEFAULT_PRIMARY,
};
pub use effect::Effect;
pub use etl::{EtlJob, EtlRequest, Severity, StatusLine};
pub use failure::{Failure, FailureKind};
pub use msg::Msg;
pub use payload::{
    ArtistCount, ComparisonRow, FetchSet, GenreComparison, GenreCount, GenreDistribution,
    TopArtists, TOP_N,
};
pub use refresh::{Generation, LoadDeps, LoadTracker, RefreshToken};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    artist_bars, comparison_bars, genre_slices, AppViewModel, ChartSlice, ComparisonBar,
    ComparisonView, SnapshotMeta,
};
