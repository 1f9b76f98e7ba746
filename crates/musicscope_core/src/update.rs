use musicscope_logging::{scope_debug, scope_info, scope_warn};

use crate::{AppState, Effect, EtlJob, EtlRequest, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => schedule_load(&mut state),
        Msg::PrimarySelected(raw) => {
            if state.set_primary_selection(raw) {
                schedule_load(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::ComparisonSelected(raw) => {
            if state.set_comparison_selection(raw) {
                schedule_load(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::FetchSetLoaded { generation, result } => {
            if let Err(failure) = &result {
                scope_warn!("Load generation={} failed: {}", generation, failure);
            }
            if !state.apply_load(generation, result) {
                scope_debug!(
                    "Discarding stale load generation={} latest={}",
                    generation,
                    state.latest_generation()
                );
            }
            Vec::new()
        }
        Msg::EtlRequested(job) => {
            if state.is_etl_busy(job) {
                return (state, Vec::new());
            }
            let request = etl_request(&state, job);
            let success_message = success_message(&state, job);
            state.etl_mut().start(job, success_message);
            state.mark_dirty();
            scope_info!("Triggering {} ETL ({:?})", job, request);
            vec![Effect::RunEtl { job, request }]
        }
        Msg::EtlFinished { job, result } => {
            let succeeded = result.is_ok();
            let outcome = result.map_err(|failure| failure.message);
            if !state.etl_mut().finish(job, outcome) {
                scope_warn!("Ignoring completion for {} ETL that was not running", job);
                return (state, Vec::new());
            }
            state.mark_dirty();
            if succeeded {
                state.bump_refresh();
                scope_info!(
                    "{} ETL finished; refresh token now {}",
                    job,
                    state.refresh_token().value()
                );
                schedule_load(&mut state)
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

fn schedule_load(state: &mut AppState) -> Vec<Effect> {
    let Some(generation) = state.begin_load() else {
        return Vec::new();
    };
    let primary = state.primary_key();
    let comparison = state.comparison_key();
    scope_debug!(
        "Issuing load generation={} primary={:?} comparison={:?}",
        generation,
        primary.as_str(),
        comparison.as_str()
    );
    vec![Effect::LoadAll {
        generation,
        primary,
        comparison,
    }]
}

fn etl_request(state: &AppState, job: EtlJob) -> EtlRequest {
    match job {
        EtlJob::Lastfm => EtlRequest {
            country: Some(state.primary_key()),
            limit: job.default_limit(),
        },
        EtlJob::Musicbrainz => EtlRequest {
            country: None,
            limit: job.default_limit(),
        },
    }
}

fn success_message(state: &AppState, job: EtlJob) -> String {
    match job {
        EtlJob::Lastfm => format!(
            "{} ETL done for {}. Refreshing charts...",
            job,
            state.primary_label()
        ),
        EtlJob::Musicbrainz => format!("{} ETL done. Refreshing charts...", job),
    }
}
