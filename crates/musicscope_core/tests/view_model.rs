use musicscope_core::{
    artist_bars, comparison_bars, genre_slices, ChartSlice, ComparisonBar, GenreComparison,
    GenreDistribution, TopArtists, TOP_N,
};

#[test]
fn absent_payloads_derive_empty_sequences() {
    assert!(genre_slices(None).is_empty());
    assert!(artist_bars(None).is_empty());
    assert!(comparison_bars(None).is_empty());
}

#[test]
fn missing_list_fields_decode_to_empty_output() {
    let distribution: GenreDistribution = serde_json::from_str(
        r#"{"latest_fetched_at": null, "total_tracks": 0, "note": "Run Last.fm ETL first."}"#,
    )
    .unwrap();
    let artists: TopArtists = serde_json::from_str("{}").unwrap();
    let comparison: GenreComparison = serde_json::from_str(r#"{"country_1": "spain"}"#).unwrap();

    assert!(genre_slices(Some(&distribution)).is_empty());
    assert!(artist_bars(Some(&artists)).is_empty());
    assert!(comparison_bars(Some(&comparison)).is_empty());
}

#[test]
fn entries_keep_server_order() {
    let distribution: GenreDistribution = serde_json::from_str(
        r#"{"genres": [
            {"genre": "pop", "count": 12, "percentage": 40.0},
            {"genre": "rock", "count": 9, "percentage": 30.0},
            {"genre": "indie", "count": 9, "percentage": 30.0}
        ]}"#,
    )
    .unwrap();

    assert_eq!(
        genre_slices(Some(&distribution)),
        vec![
            ChartSlice {
                label: "pop".to_string(),
                value: 12
            },
            ChartSlice {
                label: "rock".to_string(),
                value: 9
            },
            ChartSlice {
                label: "indie".to_string(),
                value: 9
            },
        ]
    );
}

#[test]
fn artist_bars_use_track_counts() {
    let artists: TopArtists = serde_json::from_str(
        r#"{"artists": [
            {"artist_id": 4, "artist_name": "Bad Bunny", "track_count": 4, "genres": ["reggaeton"]},
            {"artist_name": "Quevedo", "track_count": 2}
        ]}"#,
    )
    .unwrap();

    let bars = artist_bars(Some(&artists));
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].label, "Bad Bunny");
    assert_eq!(bars[0].value, 4);
    assert_eq!(bars[1].value, 2);
}

#[test]
fn comparison_rows_align_by_genre() {
    let comparison: GenreComparison = serde_json::from_str(
        r#"{"genres": [
            {"genre": "latin", "c1_count": 8, "c1_percentage": 20.0, "c2_count": 1, "c2_percentage": 2.5},
            {"genre": "pop", "c1_count": 3, "c2_count": 11}
        ]}"#,
    )
    .unwrap();

    assert_eq!(
        comparison_bars(Some(&comparison)),
        vec![
            ComparisonBar {
                category: "latin".to_string(),
                primary_count: 8,
                comparison_count: 1,
            },
            ComparisonBar {
                category: "pop".to_string(),
                primary_count: 3,
                comparison_count: 11,
            },
        ]
    );
}

#[test]
fn entries_with_missing_fields_degrade_to_defaults() {
    let distribution: GenreDistribution =
        serde_json::from_str(r#"{"genres": [{"genre": "jazz"}, {"count": 3}]}"#).unwrap();

    let slices = genre_slices(Some(&distribution));
    assert_eq!(slices[0].value, 0);
    assert_eq!(slices[1].label, "");
}

#[test]
fn genre_slices_are_capped_at_top_n_distinct_labels() {
    let genres: Vec<String> = (0..15)
        .map(|i| format!(r#"{{"genre": "g{}", "count": {}}}"#, i % 12, 100 - i))
        .collect();
    let body = format!(r#"{{"genres": [{}]}}"#, genres.join(","));
    let distribution: GenreDistribution = serde_json::from_str(&body).unwrap();

    let slices = genre_slices(Some(&distribution));
    assert_eq!(slices.len(), TOP_N as usize);

    let few: GenreDistribution = serde_json::from_str(
        r#"{"genres": [{"genre": "pop", "count": 2}, {"genre": "pop", "count": 1}, {"genre": "rock", "count": 1}]}"#,
    )
    .unwrap();
    let slices = genre_slices(Some(&few));
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].value, 2);
}

#[test]
fn null_or_mistyped_lists_derive_empty_charts() {
    let distribution: GenreDistribution =
        serde_json::from_str(r#"{"genres": null, "total_tracks": "n/a"}"#).unwrap();
    let artists: TopArtists = serde_json::from_str(r#"{"artists": {"name": "x"}}"#).unwrap();
    let comparison: GenreComparison = serde_json::from_str(r#"{"genres": "none"}"#).unwrap();

    assert!(genre_slices(Some(&distribution)).is_empty());
    assert_eq!(distribution.total_tracks, None);
    assert!(artist_bars(Some(&artists)).is_empty());
    assert!(comparison_bars(Some(&comparison)).is_empty());
}

#[test]
fn unreadable_entries_are_skipped() {
    let artists: TopArtists = serde_json::from_str(
        r#"{"artists": [
            {"artist_name": null, "track_count": 2},
            {"artist_name": "Rosalía", "track_count": 3},
            {"artist_name": "Quevedo", "track_count": 1.5},
            null
        ]}"#,
    )
    .unwrap();
    let comparison: GenreComparison = serde_json::from_str(
        r#"{"genres": [{"genre": "pop", "c1_count": null, "c2_count": 1}, {"genre": "rock", "c1_count": 2, "c2_count": 4}]}"#,
    )
    .unwrap();

    assert_eq!(
        artist_bars(Some(&artists)),
        vec![ChartSlice {
            label: "Rosalía".to_string(),
            value: 3
        }]
    );
    let bars = comparison_bars(Some(&comparison));
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].category, "rock");
}
