//! Stateless mock API covering every response shape the client decodes:
//! JSON payloads, query echoes, body echoes, 204 No Content, plain text,
//! 404, and 500.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Debug, Serialize)]
pub struct Widget {
    pub name: String,
    pub count: i64,
}

pub fn app() -> Router {
    Router::new()
        .route("/widget", get(get_widget).delete(delete_widget))
        .route("/query-echo", get(query_echo))
        .route("/echo", post(echo).put(echo).patch(echo))
        .route("/no-content", get(no_content).post(no_content))
        .route("/plain", get(plain).post(plain))
        .route("/failure", get(failure))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_widget() -> Json<Widget> {
    Json(Widget {
        name: "gear".to_string(),
        count: 99,
    })
}

async fn query_echo(Query(params): Query<HashMap<String, String>>) -> Json<HashMap<String, String>> {
    Json(params)
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn plain() -> &'static str {
    "pong"
}

async fn failure() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn delete_widget() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_serializes_to_json() {
        let widget = Widget {
            name: "gear".to_string(),
            count: 99,
        };
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["name"], "gear");
        assert_eq!(json["count"], 99);
    }
}
