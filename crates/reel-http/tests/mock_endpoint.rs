//! Mock endpoint tests for the HTTP movie source.
//!
//! These tests use wiremock to simulate a collection endpoint and exercise
//! the source and a view mounted on it without network access.

use std::time::Duration;

use reel_core::{
    CollectionUrl, FetchStatus, MovieRecord, MovieSource, MovieView, NewMovie, PayloadShape,
    RenderState,
};
use reel_core::error::{Error, TransportError};
use reel_http::{HttpClientConfig, HttpMovieSource};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION_PATH: &str = "/movies.json";

/// Helper to create a collection URL on a mock server.
fn mock_endpoint(server: &MockServer) -> CollectionUrl {
    CollectionUrl::new(format!(
        "http://127.0.0.1:{}{}",
        server.address().port(),
        COLLECTION_PATH
    ))
    .unwrap()
}

fn mock_source(server: &MockServer) -> HttpMovieSource {
    HttpMovieSource::new(mock_endpoint(server)).unwrap()
}

async fn mount_get(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Fetching
// ============================================================================

#[tokio::test]
async fn test_fetch_list_shape() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            {"episode_id": 1, "title": "A", "opening_crawl": "x", "release_date": "2021-01-01"}
        ])),
    )
    .await;

    let view = MovieView::new(mock_source(&server));
    view.fetch_movies().await;

    let status = view.status();
    assert!(!status.is_loading);
    assert_eq!(
        status.movies,
        vec![MovieRecord::new(1u64, "A", "x", "2021-01-01")]
    );
    assert!(matches!(view.render_state(), RenderState::Populated(_)));
}

#[tokio::test]
async fn test_fetch_map_shape() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "k1": {"title": "B", "openingText": "y", "releaseDate": "2021-02-02"}
        })),
    )
    .await;

    let view = MovieView::new(mock_source(&server));
    view.fetch_movies().await;

    assert_eq!(
        view.status().movies,
        vec![MovieRecord::new("k1", "B", "y", "2021-02-02")]
    );
}

#[tokio::test]
async fn test_fetch_sample_api_envelope() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"episode_id": 4, "title": "A New Hope", "opening_crawl": "It is a period of civil war.", "release_date": "1977-05-25"},
                {"episode_id": 5, "title": "The Empire Strikes Back", "opening_crawl": "It is a dark time for the Rebellion.", "release_date": "1980-05-17"}
            ]
        })),
    )
    .await;

    let payload = mock_source(&server).fetch_payload().await.unwrap();
    assert_eq!(payload.shape(), PayloadShape::List);

    let titles: Vec<_> = payload.into_records().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, ["A New Hope", "The Empire Strikes Back"]);
}

#[tokio::test]
async fn test_fetch_server_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(500).set_body_string("internal failure details"),
    )
    .await;

    let view = MovieView::new(mock_source(&server));
    view.fetch_movies().await;

    let status = view.status();
    assert!(!status.is_loading);
    assert_eq!(status.error.as_deref(), Some("Something went wrong!"));
    assert!(status.movies.is_empty());
    assert_eq!(
        view.render_state(),
        RenderState::Error("Something went wrong!".to_string())
    );
}

#[tokio::test]
async fn test_failure_after_success_keeps_movies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "k1": {"title": "B", "openingText": "y", "releaseDate": "2021-02-02"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(&server, ResponseTemplate::new(503)).await;

    let view = MovieView::new(mock_source(&server));
    view.fetch_movies().await;
    let movies = view.status().movies;
    assert_eq!(movies.len(), 1);

    view.fetch_movies().await;
    let status = view.status();
    assert_eq!(status.error.as_deref(), Some("Something went wrong!"));
    assert_eq!(status.movies, movies);
}

#[tokio::test]
async fn test_fetch_empty_collections() {
    for body in [json!([]), json!({}), serde_json::Value::Null] {
        let server = MockServer::start().await;
        mount_get(&server, ResponseTemplate::new(200).set_body_json(body)).await;

        let view = MovieView::new(mock_source(&server));
        view.fetch_movies().await;

        assert_eq!(view.status().movies, Vec::new());
        assert_eq!(view.render_state(), RenderState::Empty);
    }
}

#[tokio::test]
async fn test_fetch_invalid_json() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    let err = mock_source(&server).fetch_payload().await.unwrap_err();
    assert!(err.is_decode());

    let view = MovieView::new(mock_source(&server));
    view.fetch_movies().await;
    let status = view.status();
    assert!(!status.is_loading);
    assert!(status.error.unwrap().starts_with("decode error"));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind and release a port so nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = CollectionUrl::new(format!("http://127.0.0.1:{}/movies.json", port)).unwrap();

    let source = HttpMovieSource::new(endpoint).unwrap();
    let err = source.fetch_payload().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Connection { .. })
    ));

    let view = MovieView::new(source);
    view.fetch_movies().await;
    let status = view.status();
    assert!(!status.is_loading);
    assert!(status.error.unwrap().starts_with("transport error"));
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = HttpClientConfig {
        timeout: Some(Duration::from_millis(200)),
    };
    let source = HttpMovieSource::with_config(mock_endpoint(&server), config).unwrap();

    let err = source.fetch_payload().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn test_mount_fetches_on_creation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let view = MovieView::mount(mock_source(&server));
    let status = view.settled().await;
    assert_eq!(status, FetchStatus::default());
}

#[test]
fn test_rejects_file_endpoint() {
    let endpoint = CollectionUrl::new("file:///tmp/movies.json").unwrap();
    assert!(HttpMovieSource::new(endpoint).is_err());
}

// ============================================================================
// Submitting
// ============================================================================

#[tokio::test]
async fn test_submit_posts_exact_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "C",
            "openingText": "z",
            "releaseDate": "2021-03-03"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "-Nabc123"})))
        .expect(1)
        .mount(&server)
        .await;

    let view = MovieView::new(mock_source(&server));
    view.submit_movie(&NewMovie::new("C", "z", "2021-03-03")).await;

    assert_eq!(view.status(), FetchStatus::default());
    server.verify().await;
}

#[tokio::test]
async fn test_submit_failure_is_swallowed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let view = MovieView::new(mock_source(&server));
    let movie = NewMovie::new("C", "z", "2021-03-03");

    view.submit_movie(&movie).await;
    assert_eq!(view.status(), FetchStatus::default());

    let err = view.try_submit_movie(&movie).await.unwrap_err();
    assert!(err.is_request_failed());
    assert_eq!(err.to_string(), "Something went wrong!");
}

#[tokio::test]
async fn test_submitted_movie_appears_after_refetch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "m1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "m1": {"title": "C", "openingText": "z", "releaseDate": "2021-03-03"}
        })))
        .mount(&server)
        .await;

    let view = MovieView::new(mock_source(&server));
    let movie = NewMovie::new("C", "z", "2021-03-03");
    view.submit_movie(&movie).await;
    assert!(view.status().movies.is_empty());

    view.fetch_movies().await;
    assert_eq!(view.status().movies, vec![movie.with_id("m1")]);
}
