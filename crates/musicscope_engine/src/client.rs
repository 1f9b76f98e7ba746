use std::time::Duration;

use musicscope_core::{
    CanonicalKey, EtlJob, EtlRequest, GenreComparison, GenreDistribution, TopArtists,
};
use musicscope_logging::{scope_debug, scope_warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::ServiceError;

pub const DEFAULT_BASE_URL: &str = "https://musicscope-production.up.railway.app";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(20),
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }
}

/// Strips surrounding whitespace and trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Remote analytics and ETL endpoints.
#[async_trait::async_trait]
pub trait AnalyticsService: Send + Sync {
    async fn genre_distribution(
        &self,
        country: &CanonicalKey,
        top_n: u32,
    ) -> Result<GenreDistribution, ServiceError>;

    async fn top_artists(
        &self,
        country: &CanonicalKey,
        top_n: u32,
    ) -> Result<TopArtists, ServiceError>;

    async fn genre_comparison(
        &self,
        primary: &CanonicalKey,
        comparison: &CanonicalKey,
        top_n: u32,
    ) -> Result<GenreComparison, ServiceError>;

    /// Mutating call; the response body is ignored on success.
    async fn run_etl(&self, job: EtlJob, request: &EtlRequest) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalyticsClient {
    settings: ClientSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestAnalyticsClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ServiceError> {
        let base = Url::parse(&settings.base_url).map_err(|err| {
            ServiceError::Transport(format!("invalid base url {}: {}", settings.base_url, err))
        })?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Url {
        let mut url = self.base.clone();
        // Keep any path prefix of the base URL (e.g. a reverse-proxy mount point).
        let full_path = format!("{}{}", url.path().trim_end_matches('/'), path);
        url.set_path(&full_path);
        url.set_query(None);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(path, query);
        scope_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;
        let body = self.success_body(path, response).await?;
        serde_json::from_slice(&body)
            .map_err(|err| ServiceError::Transport(format!("invalid response body: {err}")))
    }

    async fn post(&self, path: &str, query: &[(&str, String)]) -> Result<(), ServiceError> {
        let url = self.endpoint(path, query);
        scope_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;
        self.success_body(path, response).await?;
        Ok(())
    }

    async fn success_body(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<Vec<u8>, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = error_from_status(status.as_u16(), &body);
            scope_warn!("{} -> {}: {}", path, status, err);
            return Err(err);
        }
        let body = response
            .bytes()
            .await
            .map_err(|err| self.map_reqwest_error(err))?;
        Ok(body.to_vec())
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            return ServiceError::Transport(format!(
                "timeout of {}ms exceeded",
                self.settings.request_timeout.as_millis()
            ));
        }
        ServiceError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl AnalyticsService for ReqwestAnalyticsClient {
    async fn genre_distribution(
        &self,
        country: &CanonicalKey,
        top_n: u32,
    ) -> Result<GenreDistribution, ServiceError> {
        self.get_json(
            "/analytics/genre-distribution",
            &[("country", country.to_string()), ("top_n", top_n.to_string())],
        )
        .await
    }

    async fn top_artists(
        &self,
        country: &CanonicalKey,
        top_n: u32,
    ) -> Result<TopArtists, ServiceError> {
        self.get_json(
            "/analytics/top-artists-by-country",
            &[("country", country.to_string()), ("top_n", top_n.to_string())],
        )
        .await
    }

    async fn genre_comparison(
        &self,
        primary: &CanonicalKey,
        comparison: &CanonicalKey,
        top_n: u32,
    ) -> Result<GenreComparison, ServiceError> {
        self.get_json(
            "/analytics/country-genre-comparison",
            &[
                ("c1", primary.to_string()),
                ("c2", comparison.to_string()),
                ("top_n", top_n.to_string()),
            ],
        )
        .await
    }

    async fn run_etl(&self, job: EtlJob, request: &EtlRequest) -> Result<(), ServiceError> {
        let mut query = Vec::with_capacity(2);
        if let Some(country) = &request.country {
            query.push(("country", country.to_string()));
        }
        query.push(("limit", request.limit.to_string()));
        self.post(etl_path(job), &query).await
    }
}

fn etl_path(job: EtlJob) -> &'static str {
    match job {
        EtlJob::Lastfm => "/etl/lastfm/run",
        EtlJob::Musicbrainz => "/etl/musicbrainz/run",
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Prefers the server's string `detail`; anything else is a transport error.
pub(crate) fn error_from_status(status: u16, body: &[u8]) -> ServiceError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);
    match detail {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
            ServiceError::Service { status, detail }
        }
        _ => ServiceError::Transport(format!("Request failed with status code {status}")),
    }
}
