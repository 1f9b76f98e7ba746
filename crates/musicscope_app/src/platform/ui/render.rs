use chrono::{DateTime, NaiveDateTime};
use musicscope_core::{
    AppViewModel, ChartSlice, ComparisonView, EtlJob, Severity, SnapshotMeta, TOP_N,
};

const BAR_WIDTH: u64 = 30;

/// Renders the whole dashboard as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== MusicScope: {} vs {} ===\n",
        view.primary_label, view.comparison_label
    ));
    if let Some(snapshot) = &view.snapshot {
        out.push_str(&format_snapshot(snapshot));
        out.push('\n');
    }
    out.push_str(&format_etl_controls(view));
    out.push('\n');

    if let Some(status) = &view.etl_status {
        let marker = match status.severity {
            Severity::Success => "[ok]",
            Severity::Error => "[error]",
        };
        out.push_str(&format!("{marker} {}\n", status.text));
    }
    if let Some(error) = &view.error {
        out.push_str(&format!("[error] {error}\n"));
    }
    if !view.has_charts && view.error.is_none() {
        out.push_str("Loading...\n");
    }
    if !view.has_charts {
        return out;
    }

    out.push_str("\nTop Genres (based on MusicBrainz tags)\n");
    if view.genre_slices.is_empty() {
        out.push_str("  No genre data. Run ETL for this country.\n");
    } else {
        out.push_str(&format_share_chart(&view.genre_slices));
    }

    out.push_str("\nTop Artists (count of tracks in top N)\n");
    if view.artist_bars.is_empty() {
        out.push_str("  No artist data. Run ETL for this country.\n");
    } else {
        out.push_str(&format_bar_chart(&view.artist_bars));
    }

    out.push_str(&format!(
        "\nCountry Comparison: {} vs {} (top {} genres)\n",
        view.primary_label, view.comparison_label, TOP_N
    ));
    match view.comparison {
        ComparisonView::SameCountry => {
            out.push_str("  Please choose a different country to compare.\n");
        }
        ComparisonView::NoData => {
            out.push_str("  No comparison data. Run ETL for both countries.\n");
        }
        ComparisonView::Bars => out.push_str(&format_comparison(view)),
    }

    out
}

fn format_snapshot(snapshot: &SnapshotMeta) -> String {
    let latest = snapshot
        .latest_fetched_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string());
    let tracks = snapshot
        .total_tracks
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let tags = snapshot
        .total_genre_tags_counted
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    format!("Latest: {latest} | Tracks: {tracks} | Tags: {tags}")
}

/// Server timestamps are ISO 8601, with or without offset and fraction.
fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

fn format_etl_controls(view: &AppViewModel) -> String {
    EtlJob::ALL
        .iter()
        .map(|job| {
            if view.is_etl_busy(*job) {
                format!("[{job} ETL: running...]")
            } else {
                format!("[{job} ETL: etl {}]", job_command(*job))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn job_command(job: EtlJob) -> &'static str {
    match job {
        EtlJob::Lastfm => "lastfm",
        EtlJob::Musicbrainz => "musicbrainz",
    }
}

fn format_share_chart(slices: &[ChartSlice]) -> String {
    let total = slices
        .iter()
        .fold(0u64, |acc, s| acc.saturating_add(s.value));
    let width = label_width(slices.iter().map(|s| s.label.as_str()));
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);
    slices
        .iter()
        .map(|slice| {
            let percent = if total > 0 {
                slice.value as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            format!(
                "  {:<width$} {} {} ({:.1}%)\n",
                slice.label,
                bar(slice.value, max),
                slice.value,
                percent,
            )
        })
        .collect()
}

fn format_bar_chart(bars: &[ChartSlice]) -> String {
    let width = label_width(bars.iter().map(|b| b.label.as_str()));
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    bars.iter()
        .map(|b| format!("  {:<width$} {} {}\n", b.label, bar(b.value, max), b.value))
        .collect()
}

fn format_comparison(view: &AppViewModel) -> String {
    let width = label_width(view.comparison_bars.iter().map(|b| b.category.as_str()));
    let max = view
        .comparison_bars
        .iter()
        .map(|b| b.primary_count.max(b.comparison_count))
        .max()
        .unwrap_or(0);
    let mut out = format!(
        "  {:<width$} {} / {}\n",
        "genre", view.primary_label, view.comparison_label
    );
    for row in &view.comparison_bars {
        out.push_str(&format!(
            "  {:<width$} {} {}\n  {:<width$} {} {}\n",
            row.category,
            bar(row.primary_count, max),
            row.primary_count,
            "",
            shade(row.comparison_count, max),
            row.comparison_count,
        ));
    }
    out
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(5)
}

fn bar(value: u64, max: u64) -> String {
    "#".repeat(bar_len(value, max))
}

fn shade(value: u64, max: u64) -> String {
    "=".repeat(bar_len(value, max))
}

// Any non-zero value gets at least one cell.
fn bar_len(value: u64, max: u64) -> usize {
    if value == 0 || max == 0 {
        return 0;
    }
    (u128::from(value) * u128::from(BAR_WIDTH)).div_ceil(u128::from(max)) as usize
}
