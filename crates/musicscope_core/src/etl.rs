use std::collections::BTreeMap;
use std::fmt;

use crate::CanonicalKey;

/// Server-side ingestion jobs the dashboard can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EtlJob {
    /// Chart snapshot ingestion for one country.
    Lastfm,
    /// Artist genre enrichment.
    Musicbrainz,
}

impl EtlJob {
    pub const ALL: [EtlJob; 2] = [EtlJob::Lastfm, EtlJob::Musicbrainz];

    pub fn display_name(self) -> &'static str {
        match self {
            EtlJob::Lastfm => "Last.fm",
            EtlJob::Musicbrainz => "MusicBrainz",
        }
    }

    pub fn default_limit(self) -> u32 {
        match self {
            EtlJob::Lastfm => 20,
            EtlJob::Musicbrainz => 50,
        }
    }
}

impl fmt::Display for EtlJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parameters sent with an ETL trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlRequest {
    /// Only set for per-country jobs.
    pub country: Option<CanonicalKey>,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

/// Busy flags (one per job kind) and the single shared ETL status line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct EtlTracker {
    // job -> message to show when it succeeds
    running: BTreeMap<EtlJob, String>,
    status: Option<StatusLine>,
}

impl EtlTracker {
    pub(crate) fn is_busy(&self, job: EtlJob) -> bool {
        self.running.contains_key(&job)
    }

    pub(crate) fn busy_jobs(&self) -> Vec<EtlJob> {
        self.running.keys().copied().collect()
    }

    pub(crate) fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub(crate) fn start(&mut self, job: EtlJob, success_message: String) {
        self.running.insert(job, success_message);
        self.status = None;
    }

    /// Clears the busy flag. Returns `false` if `job` was not running.
    pub(crate) fn finish(&mut self, job: EtlJob, outcome: Result<(), String>) -> bool {
        let Some(success_message) = self.running.remove(&job) else {
            return false;
        };
        self.status = Some(match outcome {
            Ok(()) => StatusLine {
                text: success_message,
                severity: Severity::Success,
            },
            Err(message) => StatusLine {
                text: message,
                severity: Severity::Error,
            },
        });
        true
    }
}
