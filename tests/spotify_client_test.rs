//! Tests for the reqwest-backed Spotify client against a mock Web API.

use kworblist::{
    Error,
    spotify::{MusicService, SpotifyClient, playlist, search},
    types::CreatePlaylistRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(format!("{}/v1/", server.uri()), "tok")
}

#[tokio::test]
async fn test_search_tracks_maps_first_artist_and_uri() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Aphex Twin Windowlicker"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "1"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": {
                "items": [{
                    "id": "xyz",
                    "name": "Windowlicker",
                    "uri": "spotify:track:xyz",
                    "artists": [{"name": "Aphex Twin"}, {"name": "Someone Else"}]
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let track = search::search_track(&client(&server), "Aphex Twin Windowlicker")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(track.title, "Windowlicker");
    assert_eq!(track.artist_name, "Aphex Twin");
    assert_eq!(track.service_track_id, "spotify:track:xyz");
}

#[tokio::test]
async fn test_search_tracks_empty_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": []}})))
        .mount(&server)
        .await;

    let track = search::search_track(&client(&server), "nonexistent")
        .await
        .unwrap();

    assert!(track.is_none());
}

#[tokio::test]
async fn test_artist_search_uses_artist_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "artist:Aphex Twin"))
        .and(query_param("type", "artist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": {"items": [{"name": "Aphex Twin", "id": "abc123"}]}
        })))
        .mount(&server)
        .await;

    let id = search::get_artist_id(&client(&server), "Aphex Twin")
        .await
        .unwrap();

    assert_eq!(id, "abc123");
}

#[tokio::test]
async fn test_artist_search_empty_is_artist_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"artists": {"items": []}})))
        .mount(&server)
        .await;

    let result = search::get_artist_id(&client(&server), "Nobody").await;

    assert!(matches!(result, Err(Error::ArtistNotFound(_))));
}

#[tokio::test]
async fn test_current_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "user1", "display_name": "Test User"})),
        )
        .mount(&server)
        .await;

    let user = client(&server).current_user().await.unwrap();

    assert_eq!(user.id, "user1");
    assert_eq!(user.display_name.as_deref(), Some("Test User"));
}

#[tokio::test]
async fn test_create_playlist_posts_for_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/users/user1/playlists"))
        .and(body_json(json!({
            "name": "Test",
            "description": "desc",
            "public": false,
            "collaborative": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "pl1",
            "name": "Test",
            "public": false,
            "snapshot_id": "s0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreatePlaylistRequest {
        name: "Test".to_string(),
        description: "desc".to_string(),
        public: false,
        collaborative: false,
    };
    let created = client(&server)
        .create_playlist("user1", &request)
        .await
        .unwrap();

    assert_eq!(created.id, "pl1");
}

#[tokio::test]
async fn test_add_tracks_batches_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s1"})))
        .expect(3)
        .mount(&server)
        .await;

    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{}", i)).collect();
    playlist::add_tracks(&client(&server), "pl1", &uris)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: Vec<Vec<String>> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["uris"]
                .as_array()
                .unwrap()
                .iter()
                .map(|u| u.as_str().unwrap().to_string())
                .collect()
        })
        .collect();
    assert_eq!(sent.iter().map(Vec::len).collect::<Vec<_>>(), vec![100, 100, 50]);
    assert_eq!(sent.concat(), uris);
}

#[tokio::test]
async fn test_api_failure_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client(&server).current_user().await;

    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_add_tracks_stops_after_failed_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"snapshot_id": "s1"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{}", i)).collect();
    let result = playlist::add_tracks(&client(&server), "pl1", &uris).await;

    assert!(matches!(result, Err(Error::Network(_))));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
