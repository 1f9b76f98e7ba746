use std::time::Duration;

use musicscope_core::{normalize, EtlJob, EtlRequest, TOP_N};
use musicscope_engine::{AnalyticsService, ClientSettings, ReqwestAnalyticsClient, ServiceError};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestAnalyticsClient {
    ReqwestAnalyticsClient::new(ClientSettings::with_base_url(&server.uri())).expect("client")
}

#[tokio::test]
async fn genre_distribution_sends_country_and_top_n() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/genre-distribution"))
        .and(query_param("country", "united states"))
        .and(query_param("top_n", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "country": "united states",
                "latest_fetched_at": "2025-03-01T10:15:00.123456",
                "total_tracks": 20,
                "top_n": 10,
                "total_genre_tags_counted": 31,
                "genres": [{"genre": "pop", "count": 12, "percentage": 38.71}]
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let distribution = client_for(&server)
        .genre_distribution(&normalize("United States"), TOP_N)
        .await
        .expect("distribution");

    assert_eq!(distribution.genres.len(), 1);
    assert_eq!(distribution.genres[0].genre, "pop");
    assert_eq!(distribution.genres[0].count, 12);
    assert_eq!(distribution.total_tracks, Some(20));
    assert_eq!(distribution.total_genre_tags_counted, Some(31));
    assert_eq!(
        distribution.latest_fetched_at.as_deref(),
        Some("2025-03-01T10:15:00.123456")
    );
}

#[tokio::test]
async fn comparison_sends_both_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/country-genre-comparison"))
        .and(query_param("c1", "spain"))
        .and(query_param("c2", "mexico"))
        .and(query_param("top_n", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"genres": [{"genre": "latin", "c1_count": 4, "c2_count": 9}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let comparison = client_for(&server)
        .genre_comparison(&normalize("spain"), &normalize("mexico"), TOP_N)
        .await
        .expect("comparison");
    assert_eq!(comparison.genres[0].c2_count, 9);
}

#[tokio::test]
async fn error_detail_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/top-artists-by-country"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"detail": "country not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .top_artists(&normalize("atlantis"), TOP_N)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Service {
            status: 404,
            detail: "country not found".to_string()
        }
    );
    assert_eq!(err.to_string(), "country not found");
}

#[tokio::test]
async fn status_without_detail_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/top-artists-by-country"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .top_artists(&normalize("spain"), TOP_N)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Transport("Request failed with status code 500".to_string())
    );
}

#[tokio::test]
async fn undecodable_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/genre-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .genre_distribution(&normalize("spain"), TOP_N)
        .await
        .unwrap_err();
    match err {
        ServiceError::Transport(message) => assert!(message.starts_with("invalid response body")),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/genre-distribution"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("{}"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::with_base_url(&server.uri())
    };
    let client = ReqwestAnalyticsClient::new(settings).expect("client");

    let err = client
        .genre_distribution(&normalize("spain"), TOP_N)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Transport("timeout of 50ms exceeded".to_string())
    );
}

#[tokio::test]
async fn lastfm_etl_posts_country_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/etl/lastfm/run"))
        .and(query_param("country", "south korea"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .run_etl(
            EtlJob::Lastfm,
            &EtlRequest {
                country: Some(normalize("South Korea")),
                limit: 20,
            },
        )
        .await
        .expect("etl ok");
}

#[tokio::test]
async fn musicbrainz_etl_failure_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/etl/musicbrainz/run"))
        .and(query_param("limit", "50"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(r#"{"detail": "rate limited by MusicBrainz"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .run_etl(
            EtlJob::Musicbrainz,
            &EtlRequest {
                country: None,
                limit: 50,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "rate limited by MusicBrainz");
}
