use crate::{CanonicalKey, EtlJob, EtlRequest, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch every chart for the given keys; report back with `generation`.
    LoadAll {
        generation: Generation,
        primary: CanonicalKey,
        comparison: CanonicalKey,
    },
    /// Trigger a remote ETL job.
    RunEtl { job: EtlJob, request: EtlRequest },
}
