use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use deeplinks::http::{ErrorResponse, HttpServer, LinkResponse, PresetResponse};
use deeplinks::Endpoints;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn app() -> Router {
    HttpServer::new(Endpoints::default()).router()
}

async fn call<T: DeserializeOwned>(request: Request<Body>) -> (StatusCode, T) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/links")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_post_link() {
    let (status, body): (_, LinkResponse) = call(post_json(
        r#"{"action": "send-native", "recipient": "0x176211869cA2b568f2A7D4EE941E073a821EE1ff", "chainId": 59144, "value": "0.01"}"#,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.url.as_str(),
        "https://metamask.app.link/send/0x176211869cA2b568f2A7D4EE941E073a821EE1ff@59144?value=1e16"
    );
    assert!(body.qr.starts_with("data:image/bmp;base64,"));
}

#[tokio::test]
async fn test_post_link_validation_error() {
    let (status, body): (_, ErrorResponse) =
        call(post_json(r#"{"action": "browser", "url": ""}"#)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "missing_required_field");
    assert_eq!(body.field.as_deref(), Some("url"));
    assert_eq!(body.message, "url is required");
}

#[tokio::test]
async fn test_default_links() {
    let (status, body): (_, LinkResponse) = call(get("/api/v1/links/swap")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.url.as_str(), "https://link.metamask.io/swap");

    let (status, body): (_, LinkResponse) = call(get("/api/v1/links/home")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.url.as_str(), "https://link.metamask.io/home");

    let (status, body): (_, ErrorResponse) = call(get("/api/v1/links/browser")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "not_found");
}

#[tokio::test]
async fn test_presets() {
    let (status, body): (_, Vec<PresetResponse>) = call(get("/api/v1/presets")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.iter().any(|preset| preset.name == "sell-eth"
        && preset.url.as_str() == "https://link.metamask.io/sell?chainId=1&amount=0.1"));
}
