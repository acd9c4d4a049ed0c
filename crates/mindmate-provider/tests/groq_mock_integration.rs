use mindmate_provider::{
    CompletionProvider, CompletionRequest, GroqProvider, RemoteError, RemoteErrorKind,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_completion_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5}
    })
}

fn mock_api_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": {
            "type": "api_error",
            "message": message
        }
    }))
}

fn request(prompt: &str) -> CompletionRequest {
    CompletionRequest::new(
        "llama-3.1-70b-versatile",
        Some("You are a healthcare assistant.".into()),
        prompt,
    )
}

#[tokio::test]
async fn basic_completion_with_header_verification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer gsk-test"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama-3.1-70b-versatile"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_completion_response("Try deep breathing.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-test", server.uri());
    let text = provider.complete(request("How do I deal with stress?")).await.unwrap();
    assert_eq!(text, "Try deep breathing.");
}

#[tokio::test]
async fn system_framing_is_sent_as_first_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                {"role": "system", "content": "You are a healthcare assistant."},
                {"role": "user", "content": "hello there"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion_response("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-test", server.uri());
    provider.complete(request("hello there")).await.unwrap();
}

#[tokio::test]
async fn auth_failure_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(mock_api_error(401, "invalid api key"))
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-bad", server.uri());
    let err = provider.complete(request("hi")).await.unwrap_err();
    assert_eq!(err.kind(), RemoteErrorKind::AuthError);
    assert!(err.to_string().contains("invalid api key"));
}

#[tokio::test]
async fn rate_limit_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(mock_api_error(429, "rate limited"))
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-test", server.uri());
    let err = provider.complete(request("hi")).await.unwrap_err();
    assert_eq!(err.kind(), RemoteErrorKind::RateLimit);
}

#[tokio::test]
async fn server_error_with_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-test", server.uri());
    let err = provider.complete(request("hi")).await.unwrap_err();
    assert_eq!(err.kind(), RemoteErrorKind::ServerError);
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn empty_choices_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": []
        })))
        .mount(&server)
        .await;

    let provider = GroqProvider::new("gsk-test", server.uri());
    let err = provider.complete(request("hi")).await.unwrap_err();
    assert_eq!(err.kind(), RemoteErrorKind::MalformedResponse);
}

#[tokio::test]
async fn connection_refused_maps_to_connect_error() {
    let provider = GroqProvider::new("gsk-test", "http://127.0.0.1:9");
    let err = provider.complete(request("ping")).await.unwrap_err();
    assert!(matches!(err, RemoteError::Connect(_)));
    assert_eq!(err.kind(), RemoteErrorKind::Network);
}
