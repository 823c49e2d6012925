#![allow(clippy::unwrap_used)]
// Integration tests for `GraniittiClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use frosmo_api::{Error, GraniittiClient, Segment, SegmentGroup, Site};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, GraniittiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/v0", server.uri())).unwrap();
    let token = SecretString::from("test-token".to_owned());
    let client = GraniittiClient::with_client(reqwest::Client::new(), &base_url, &token).unwrap();
    (server, client)
}

async fn respond_to_site(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v0/sites/7"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

// ── Success paths ───────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_site_returns_body_unchanged() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v0/sites/7"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 7, "url": "https://x" })))
        .mount(&server)
        .await;

    let site = client.fetch_site(7).await.unwrap();

    assert_eq!(
        site,
        Site {
            id: 7,
            url: "https://x".into()
        }
    );
}

#[tokio::test]
async fn test_fetch_sites_requests_id_and_url_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v0/sites"))
        .and(query_param("fields", "id,url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "url": "https://shop.example" },
            { "id": 2, "url": "https://blog.example" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let sites = client.fetch_sites().await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[1].id, 2);
    assert_eq!(sites[1].url, "https://blog.example");
}

#[tokio::test]
async fn test_fetch_segments_keeps_title_name_and_group() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v0/sites/7/segments"))
        .and(query_param("includes", "group"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 991,
                "segment_name": "returning_visitor",
                "title": "Returning visitor",
                "description": "Visited more than once",
                "group": { "id": 3, "name": "Behavior" }
            },
            {
                "segment_name": "newsletter",
                "title": "Newsletter subscriber",
                "group": null
            }
        ])))
        .mount(&server)
        .await;

    let segments = client.fetch_segments(7).await.unwrap();

    assert_eq!(
        segments,
        vec![
            Segment {
                segment_name: "returning_visitor".into(),
                title: "Returning visitor".into(),
                group: Some(SegmentGroup {
                    name: "Behavior".into()
                }),
            },
            Segment {
                segment_name: "newsletter".into(),
                title: "Newsletter subscriber".into(),
                group: None,
            },
        ]
    );
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_401_is_token_invalid_regardless_of_body() {
    let (server, client) = setup().await;
    respond_to_site(&server, 401, json!({ "message": "custom server text" })).await;

    let err = client.fetch_site(7).await.unwrap_err();

    assert!(matches!(err, Error::TokenInvalid), "got: {err:?}");
    assert!(!err.to_string().contains("custom server text"));
}

#[tokio::test]
async fn test_403_is_token_not_authorized_for_site() {
    let (server, client) = setup().await;
    respond_to_site(&server, 403, json!({})).await;

    let err = client.fetch_site(7).await.unwrap_err();

    assert!(matches!(err, Error::TokenNotAuthorizedForSite), "got: {err:?}");
}

#[tokio::test]
async fn test_404_is_site_not_found() {
    let (server, client) = setup().await;
    respond_to_site(&server, 404, json!({ "message": "Not Found" })).await;

    let err = client.fetch_site(7).await.unwrap_err();

    assert!(matches!(err, Error::SiteNotFound), "got: {err:?}");
}

#[tokio::test]
async fn test_other_status_carries_server_message() {
    let (server, client) = setup().await;
    respond_to_site(&server, 500, json!({ "message": "Upstream timeout" })).await;

    let err = client.fetch_site(7).await.unwrap_err();

    match err {
        Error::UnknownApi { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Upstream timeout");
        }
        other => panic!("expected UnknownApi error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_other_status_without_json_uses_generic_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client.fetch_sites().await.unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.to_string(), "The app encountered an unknown error.");
}

#[tokio::test]
async fn test_unexpected_success_body_is_deserialization_error() {
    let (server, client) = setup().await;
    respond_to_site(&server, 200, json!({ "unexpected": true })).await;

    let err = client.fetch_site(7).await.unwrap_err();

    assert!(matches!(err, Error::Deserialization { .. }), "got: {err:?}");
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn test_unreachable_server_is_connection_failed() {
    // Bind an ephemeral port, then release it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let base_url = Url::parse(&format!("http://{addr}/v0")).unwrap();

    let token = SecretString::from("test-token".to_owned());
    let client = GraniittiClient::with_client(reqwest::Client::new(), &base_url, &token).unwrap();

    let err = client.fetch_sites().await.unwrap_err();

    assert!(matches!(err, Error::ConnectionFailed(_)), "got: {err:?}");
    assert!(err.is_api_error());
}
