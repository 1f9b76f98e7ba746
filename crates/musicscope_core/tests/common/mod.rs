#![allow(dead_code)]

use std::sync::Once;

use musicscope_core::{
    update, AppState, ArtistCount, ComparisonRow, Effect, FetchSet, Generation, GenreComparison,
    GenreCount, GenreDistribution, Msg, TopArtists,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(musicscope_logging::initialize_for_tests);
}

pub fn started(primary: &str, comparison: &str) -> (AppState, Vec<Effect>) {
    update(AppState::with_selections(primary, comparison), Msg::Started)
}

pub fn load_generation(effects: &[Effect]) -> Generation {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::LoadAll { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("load effect")
}

pub fn fetch_set(genres: &[(&str, u64)], with_comparison: bool) -> FetchSet {
    FetchSet {
        genre_distribution: GenreDistribution {
            genres: genres
                .iter()
                .map(|(genre, count)| GenreCount {
                    genre: genre.to_string(),
                    count: *count,
                })
                .collect(),
            latest_fetched_at: Some("2025-03-01T10:15:00".to_string()),
            total_tracks: Some(20),
            total_genre_tags_counted: Some(genres.iter().map(|(_, c)| c).sum()),
        },
        top_artists: TopArtists {
            artists: vec![ArtistCount {
                artist_name: "Rosalía".to_string(),
                track_count: 3,
            }],
        },
        comparison: with_comparison.then(|| GenreComparison {
            genres: vec![ComparisonRow {
                genre: "pop".to_string(),
                c1_count: 5,
                c2_count: 7,
            }],
        }),
    }
}
