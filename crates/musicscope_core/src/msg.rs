#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Driver is ready; issues the first load.
    Started,
    /// User picked the primary country (raw display text).
    PrimarySelected(String),
    /// User picked the country to compare against (raw display text).
    ComparisonSelected(String),
    /// Engine finished a load. Results from superseded generations are dropped.
    FetchSetLoaded {
        generation: crate::Generation,
        result: Result<crate::FetchSet, crate::Failure>,
    },
    /// User clicked an ETL trigger.
    EtlRequested(crate::EtlJob),
    /// Engine finished an ETL trigger call.
    EtlFinished {
        job: crate::EtlJob,
        result: Result<(), crate::Failure>,
    },
}
