//! Response payloads of the analytics service.
//!
//! Any body that is valid JSON decodes. Unreadable lists and metadata fall back
//! to their defaults and unreadable entries are skipped, so the derivers
//! degrade to empty output instead of failing the load.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number of genres/artists requested per chart.
pub const TOP_N: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GenreDistribution {
    #[serde(default, deserialize_with = "lenient_list")]
    pub genres: Vec<GenreCount>,
    #[serde(default, deserialize_with = "lenient_value")]
    pub latest_fetched_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_value")]
    pub total_tracks: Option<u64>,
    #[serde(default, deserialize_with = "lenient_value")]
    pub total_genre_tags_counted: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TopArtists {
    #[serde(default, deserialize_with = "lenient_list")]
    pub artists: Vec<ArtistCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ArtistCount {
    pub artist_name: String,
    pub track_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GenreComparison {
    #[serde(default, deserialize_with = "lenient_list")]
    pub genres: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ComparisonRow {
    pub genre: String,
    pub c1_count: u64,
    pub c2_count: u64,
}

/// Joined result of every remote call one dashboard view needs.
///
/// `comparison` is `None` exactly when the two selections share a key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchSet {
    pub genre_distribution: GenreDistribution,
    pub top_artists: TopArtists,
    pub comparison: Option<GenreComparison>,
}

// Keeps the entries that decode, in server order.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

fn lenient_value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
