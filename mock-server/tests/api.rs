use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

#[tokio::test]
async fn widget_returns_json_payload() {
    let resp = app().oneshot(get_request("/widget")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["name"], "gear");
    assert_eq!(body["count"], 99);
}

#[tokio::test]
async fn query_echo_reflects_parameters() {
    let resp = app()
        .oneshot(get_request("/query-echo?kind=gear&limit=10"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["kind"], "gear");
    assert_eq!(body["limit"], "10");
}

#[tokio::test]
async fn echo_reflects_post_body() {
    let resp = app()
        .oneshot(json_request("POST", "/echo", r#"{"name":"gear"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["name"], "gear");
}

#[tokio::test]
async fn echo_accepts_put_and_patch() {
    for method in ["PUT", "PATCH"] {
        let resp = app()
            .oneshot(json_request(method, "/echo", r#"{"count":1}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{method}");
    }
}

#[tokio::test]
async fn no_content_is_204_without_body() {
    let resp = app().oneshot(get_request("/no-content")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let bytes = body_bytes(resp).await;
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn plain_is_text_not_json() {
    let resp = app().oneshot(get_request("/plain")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(!content_type.contains("application/json"), "{content_type}");
    let bytes = body_bytes(resp).await;
    assert_eq!(&bytes[..], b"pong");
}

#[tokio::test]
async fn delete_widget_is_204() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/widget")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn failure_is_500_with_body() {
    let resp = app().oneshot(get_request("/failure")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = body_bytes(resp).await;
    assert_eq!(&bytes[..], b"internal error");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = app().oneshot(get_request("/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
