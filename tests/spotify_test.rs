use playfetch::config::Config;
use playfetch::error::Error;
use playfetch::spotify::{auth, playlist};
use playfetch::types::Token;
use playfetch::utils::fetch_entire_playlist;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Config pointing the pipeline at a mock server
fn test_config(server: &MockServer) -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        api_url: format!("{}/v1", server.uri()),
        token_url: format!("{}/api/token", server.uri()),
        downloader: "true".to_string(),
    }
}

fn token() -> Token {
    Token {
        access_token: "test-token".to_string(),
    }
}

#[tokio::test]
async fn test_request_token_returns_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client-id"))
        .and(body_string_contains("client_secret=test-client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "BQC-fresh-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = auth::request_token(&test_config(&server)).await.unwrap();
    assert_eq!(token.access_token, "BQC-fresh-token");
}

#[tokio::test]
async fn test_request_token_surfaces_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid client"))
        .mount(&server)
        .await;

    let err = auth::request_token(&test_config(&server)).await.unwrap_err();
    match err {
        Error::Authentication { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid client");
        }
        other => panic!("expected Authentication error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_playlist_tracks_preserves_order_and_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/pl123/tracks"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "track": {
                        "name": "First",
                        "artists": [{"name": "A"}],
                        "album": {"name": "X", "images": [{"url": "https://img/x.jpg"}]},
                        "duration_ms": 200000,
                        "external_urls": {"spotify": "https://open.spotify.com/track/1"}
                    }
                },
                {"track": {"name": "Second Only Name"}},
                {"track": null}
            ],
            "next": null
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let (tracks, next) = playlist::get_playlist_tracks(&config, &token(), "pl123", None)
        .await
        .unwrap();

    assert!(next.is_none());
    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].track_name, "First");
    assert_eq!(tracks[0].artist_name, "A");
    assert_eq!(tracks[1].track_name, "Second Only Name");
    assert_eq!(tracks[1].duration_ms, 0);
    assert!(tracks[1].track_url.is_none());
    // The third item carries no track object but still occupies its row
    assert_eq!(tracks[2].track_name, "");
    assert_eq!(tracks[2].duration_ms, 0);
}

#[tokio::test]
async fn test_get_playlist_tracks_surfaces_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/missing/tracks"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = playlist::get_playlist_tracks(&config, &token(), "missing", None)
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::CatalogFetch(status) if status.as_u16() == 404),
        "expected CatalogFetch(404), got {:?}",
        err
    );
}

#[tokio::test]
async fn test_get_playlist_tracks_follows_continuation_url() {
    let server = MockServer::start().await;

    // More specific mock first: wiremock matches in mount order
    Mock::given(method("GET"))
        .and(path("/v1/playlists/pl123/tracks"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"track": {"name": "Page Two"}}],
            "next": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/pl123/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"track": {"name": "Page One"}}],
            "next": format!("{}/v1/playlists/pl123/tracks?offset=1", server.uri())
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let (first, next) = playlist::get_playlist_tracks(&config, &token(), "pl123", None)
        .await
        .unwrap();
    assert_eq!(first[0].track_name, "Page One");

    let next_url = next.expect("first page advertises a next page");
    let (second, done) =
        playlist::get_playlist_tracks(&config, &token(), "pl123", Some(&next_url))
            .await
            .unwrap();
    assert_eq!(second[0].track_name, "Page Two");
    assert!(done.is_none());
}

#[tokio::test]
async fn test_fetch_entire_playlist_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/37i9dQZF1DXcBWIGoYBM5M/tracks"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"track": {"name": "Third"}}],
            "next": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/37i9dQZF1DXcBWIGoYBM5M/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "track": {
                        "name": "Fully Populated",
                        "artists": [{"name": "A"}, {"name": "B"}],
                        "album": {"name": "X", "images": [{"url": "https://img/x.jpg"}]},
                        "duration_ms": 123000,
                        "external_urls": {"spotify": "https://open.spotify.com/track/full"}
                    }
                },
                {"track": {"name": "Name Only"}}
            ],
            "next": format!("{}/v1/playlists/37i9dQZF1DXcBWIGoYBM5M/tracks?offset=2", server.uri())
        })))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let tracks = fetch_entire_playlist(
        &config,
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc",
    )
    .await
    .unwrap();

    assert_eq!(tracks.len(), 3);
    assert_eq!(tracks[0].track_name, "Fully Populated");
    assert_eq!(tracks[0].artist_name, "A, B");
    assert_eq!(tracks[1].track_name, "Name Only");
    assert_eq!(tracks[1].artist_name, "");
    assert_eq!(tracks[1].album_name, "");
    assert_eq!(tracks[1].duration_ms, 0);
    assert!(tracks[1].cover_url.is_none());
    assert!(tracks[1].track_url.is_none());
    assert_eq!(tracks[2].track_name, "Third");
}

#[tokio::test]
async fn test_fetch_entire_playlist_validates_reference_before_network() {
    let server = MockServer::start().await;
    // No request of any kind may reach the server for a bad reference
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t"})))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = fetch_entire_playlist(&config, "https://open.spotify.com/album/nope")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidReference(_)));
}
