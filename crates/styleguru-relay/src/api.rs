use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use regex::Regex;
use styleguru_core::chat::{ChatReply, ChatRequest};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::inference::InferenceClient;
use crate::middleware::{request_id, RequestId};

/// Fixed reply sent when the upstream call could not be completed at all.
const PROCESS_FAILURE_REPLY: &str = "Sorry, I couldn't process your request.";

#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
    /// Pause after each simulated-stream token.
    pub stream_delay: Duration,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat-stream", post(chat_stream))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatReply {
                reply: "Missing prompt".to_string(),
            }),
        );
    };

    match state.inference.generate(&prompt).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply { reply })),
        Err(error) => {
            // The reply contract always succeeds; the failure stays
            // server-side in the log.
            tracing::error!(request_id = %req_id.0, error = %error, "chat upstream call failed");
            (
                StatusCode::OK,
                Json(ChatReply {
                    reply: PROCESS_FAILURE_REPLY.to_string(),
                }),
            )
        }
    }
}

async fn chat_stream(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let Some(prompt) = request.prompt.filter(|p| !p.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing prompt").into_response();
    };

    // The upstream answers in full before the first byte goes out; the
    // response body only simulates incremental generation.
    let reply = match state.inference.generate(&prompt).await {
        Ok(reply) => reply,
        Err(error) => {
            tracing::error!(request_id = %req_id.0, error = %error, "chat-stream upstream call failed");
            return (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                format!("{PROCESS_FAILURE_REPLY}\n"),
            )
                .into_response();
        }
    };

    let tokens = whitespace_tokens(&reply);
    let delay = state.stream_delay;
    let body = Body::from_stream(async_stream::stream! {
        for token in tokens {
            yield Ok::<Bytes, Infallible>(Bytes::from(token));
            tokio::time::sleep(delay).await;
        }
    });

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Split text into alternating word and whitespace-run tokens.
///
/// Whitespace runs survive as their own tokens, so concatenating the output
/// reproduces the input exactly.
fn whitespace_tokens(text: &str) -> Vec<String> {
    let re = Regex::new(r"\s+").expect("valid whitespace regex");
    let mut tokens = Vec::new();
    let mut last = 0;
    for run in re.find_iter(text) {
        if run.start() > last {
            tokens.push(text[last..run.start()].to_string());
        }
        tokens.push(run.as_str().to_string());
        last = run.end();
    }
    if last < text.len() {
        tokens.push(text[last..].to_string());
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(base_url: &str, api_key: Option<&str>) -> Router {
        let inference = InferenceClient::with_base_url(
            api_key.map(ToString::to_string),
            "test-org/test-model",
            Duration::from_secs(5),
            base_url,
        )
        .expect("client construction should not fail");
        build_app(AppState {
            inference,
            stream_delay: Duration::ZERO,
        })
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn mock_generation(server: &MockServer, text: &str) {
        Mock::given(method("POST"))
            .and(path("/models/test-org/test-model"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "generated_text": text }
            ])))
            .mount(server)
            .await;
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[test]
    fn whitespace_tokens_preserve_runs() {
        assert_eq!(whitespace_tokens("a b  c"), vec!["a", " ", "b", "  ", "c"]);
    }

    #[test]
    fn whitespace_tokens_keep_leading_and_trailing_whitespace() {
        assert_eq!(whitespace_tokens(" hi\n"), vec![" ", "hi", "\n"]);
    }

    #[test]
    fn whitespace_tokens_of_empty_text_are_empty() {
        assert!(whitespace_tokens("").is_empty());
    }

    #[test]
    fn whitespace_tokens_concatenate_back_to_the_input() {
        let text = "The  quick\tbrown\n\nfox ";
        assert_eq!(whitespace_tokens(text).concat(), text);
    }

    #[tokio::test]
    async fn chat_requires_a_prompt() {
        let response = test_app("http://localhost:9", Some("key"))
            .oneshot(json_post("/chat", "{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["reply"].as_str(), Some("Missing prompt"));
    }

    #[tokio::test]
    async fn chat_rejects_an_empty_prompt() {
        let response = test_app("http://localhost:9", Some("key"))
            .oneshot(json_post("/chat", r#"{"prompt":""}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_relays_the_upstream_reply() {
        let server = MockServer::start().await;
        mock_generation(&server, "hello world").await;

        let response = test_app(&server.uri(), Some("key"))
            .oneshot(json_post("/chat", r#"{"prompt":"hi"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["reply"].as_str(), Some("hello world"));
    }

    #[tokio::test]
    async fn chat_masks_upstream_failure_with_an_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let response = test_app(&server.uri(), Some("key"))
            .oneshot(json_post("/chat", r#"{"prompt":"hi"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["reply"].as_str(), Some(PROCESS_FAILURE_REPLY));
    }

    #[tokio::test]
    async fn chat_answers_the_apology_without_a_credential() {
        // No upstream is reachable at this address, so a success would prove
        // no request was needed to produce the reply.
        let response = test_app("http://localhost:9", None)
            .oneshot(json_post("/chat", r#"{"prompt":"hi"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");
        assert_eq!(json["reply"].as_str(), Some(PROCESS_FAILURE_REPLY));
    }

    #[tokio::test]
    async fn chat_stream_requires_a_prompt() {
        let response = test_app("http://localhost:9", Some("key"))
            .oneshot(json_post("/chat-stream", "{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "Missing prompt");
    }

    #[tokio::test]
    async fn chat_stream_reconstructs_the_reply_in_order() {
        let server = MockServer::start().await;
        mock_generation(&server, "a b  c").await;

        let response = test_app(&server.uri(), Some("key"))
            .oneshot(json_post("/chat-stream", r#"{"prompt":"hi"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(body_text(response).await, "a b  c");
    }

    #[tokio::test]
    async fn chat_stream_sends_the_apology_on_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = test_app(&server.uri(), Some("key"))
            .oneshot(json_post("/chat-stream", r#"{"prompt":"hi"}"#))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_text(response).await,
            "Sorry, I couldn't process your request.\n"
        );
    }
}
