use futures_util::future::join3;
use musicscope_core::{CanonicalKey, EtlJob, EtlRequest, FetchSet, TOP_N};
use musicscope_logging::{scope_debug, scope_info};

use crate::{AnalyticsService, ServiceError};

/// Fetches every chart for one dashboard view.
///
/// The distribution, artist and comparison requests run concurrently and are
/// joined: the result is produced only after all of them settled. The first
/// failure (in that order) is returned. When both keys are equal no comparison
/// request is made and `comparison` is `None`.
pub async fn load_all(
    service: &dyn AnalyticsService,
    primary: &CanonicalKey,
    comparison: &CanonicalKey,
) -> Result<FetchSet, ServiceError> {
    let comparison_request = async {
        if primary == comparison {
            scope_debug!("Skipping comparison: both selections are {:?}", primary.as_str());
            Ok(None)
        } else {
            service
                .genre_comparison(primary, comparison, TOP_N)
                .await
                .map(Some)
        }
    };

    let (genre_distribution, top_artists, comparison) = join3(
        service.genre_distribution(primary, TOP_N),
        service.top_artists(primary, TOP_N),
        comparison_request,
    )
    .await;

    Ok(FetchSet {
        genre_distribution: genre_distribution?,
        top_artists: top_artists?,
        comparison: comparison?,
    })
}

pub async fn run_etl(
    service: &dyn AnalyticsService,
    job: EtlJob,
    request: &EtlRequest,
) -> Result<(), ServiceError> {
    scope_info!("Running {} ETL (limit {})", job, request.limit);
    let result = service.run_etl(job, request).await;
    match &result {
        Ok(()) => scope_info!("{} ETL finished", job),
        Err(err) => scope_info!("{} ETL failed: {}", job, err),
    }
    result
}
