use std::sync::atomic::Ordering;
use serde_json::json;
use warp::http::StatusCode;
use ai_code_reviewer::prompts::fallback_responses::review_fallback;
use ai_code_reviewer::ui::routes::routes;
use crate::support::{app_state, body_json, login_cookie, FakeProvider, REVIEW_JSON};

#[tokio::test]
async fn analysis_requires_login() {
    let state = app_state(FakeProvider::replying(REVIEW_JSON)).await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .json(&json!({ "code": "print(1)" }))
        .reply(&routes(state))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(&response);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Login required");
}

#[tokio::test]
async fn review_is_stored_and_can_be_fetched_back() {
    let provider = FakeProvider::replying(REVIEW_JSON);
    let calls = provider.calls.clone();
    let state = app_state(provider).await;
    let cookie = login_cookie(&state, "alice").await;
    let filter = routes(state);

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .header("cookie", &cookie)
        .json(&json!({ "code": "for i in range(len(xs) + 1): pass", "language": "python", "title": "Loop" }))
        .reply(&filter)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["review"], REVIEW_JSON);
    assert!(body["processing_time"].is_number());
    assert!(body["rendered"].as_str().unwrap().contains("<h3>Issues</h3>"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let id = body["review_id"].as_i64().unwrap();
    let response = warp::test::request()
        .path(&format!("/api/review/{}", id))
        .header("cookie", &cookie)
        .reply(&filter)
        .await;

    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["review"]["title"], "Loop");
    assert_eq!(body["review"]["language"], "python");
    assert_eq!(body["review"]["result"], REVIEW_JSON);
    assert!(body["rendered"].as_str().unwrap().contains("Decent"));

    let response = warp::test::request()
        .path("/api/reviews")
        .header("cookie", &cookie)
        .reply(&filter)
        .await;
    let body = body_json(&response);
    assert_eq!(body["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(body["reviews"][0]["id"], id);
}

#[tokio::test]
async fn debug_results_are_not_persisted() {
    let reply = r#"{"issue_explanation":"x is undefined","fixed_code":"x = 1\nprint(x)","prevention_tips":["declare first"]}"#;
    let state = app_state(FakeProvider::replying(reply)).await;
    let cookie = login_cookie(&state, "bob").await;
    let filter = routes(state);

    let response = warp::test::request()
        .method("POST")
        .path("/api/debug-code")
        .header("cookie", &cookie)
        .json(&json!({ "code": "print(x)", "error": "NameError: name 'x' is not defined" }))
        .reply(&filter)
        .await;

    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["debug_result"], reply);
    assert!(body.get("review_id").is_none());
    let rendered = body["rendered"].as_str().unwrap();
    assert!(rendered.contains("Fixed Code"));
    assert!(rendered.contains("data-highlight"));

    let response = warp::test::request()
        .path("/api/reviews")
        .header("cookie", &cookie)
        .reply(&filter)
        .await;
    assert!(body_json(&response)["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn analyze_code_applies_defaults() {
    let state = app_state(FakeProvider::replying("{\"error_detection\":{}}")).await;
    let cookie = login_cookie(&state, "carol").await;
    let filter = routes(state);

    let response = warp::test::request()
        .method("POST")
        .path("/api/analyze-code")
        .header("cookie", &cookie)
        .json(&json!({ "code": "x = 1" }))
        .reply(&filter)
        .await;

    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["analysis"], "{\"error_detection\":{}}");
    assert!(body.get("rendered").is_none());

    let id = body["review_id"].as_i64().unwrap();
    let response = warp::test::request()
        .path(&format!("/api/review/{}", id))
        .header("cookie", &cookie)
        .reply(&filter)
        .await;
    let body = body_json(&response);
    assert_eq!(body["review"]["language"], "python");
    assert_eq!(body["review"]["title"], "Code Analysis");
}

#[tokio::test]
async fn empty_code_is_rejected_without_calling_the_model() {
    let provider = FakeProvider::replying(REVIEW_JSON);
    let calls = provider.calls.clone();
    let state = app_state(provider).await;
    let cookie = login_cookie(&state, "dave").await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .header("cookie", &cookie)
        .json(&json!({ "code": "   " }))
        .reply(&routes(state))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["error"], "No code provided");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn model_failure_still_succeeds_with_fallback() {
    let state = app_state(FakeProvider::failing()).await;
    let cookie = login_cookie(&state, "erin").await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .header("cookie", &cookie)
        .json(&json!({ "code": "fn main() {}", "language": "rust" }))
        .reply(&routes(state))
        .await;

    let body = body_json(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["review"], review_fallback("rust"));
}

#[tokio::test]
async fn reviews_are_scoped_to_their_owner() {
    let state = app_state(FakeProvider::replying(REVIEW_JSON)).await;
    let owner = login_cookie(&state, "frank").await;
    let intruder = login_cookie(&state, "grace").await;
    let filter = routes(state);

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .header("cookie", &owner)
        .json(&json!({ "code": "x = 1" }))
        .reply(&filter)
        .await;
    let id = body_json(&response)["review_id"].as_i64().unwrap();

    let response = warp::test::request()
        .path(&format!("/api/review/{}", id))
        .header("cookie", &intruder)
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&response)["error"], "Review not found");

    let response = warp::test::request()
        .method("DELETE")
        .path(&format!("/api/review/{}", id))
        .header("cookie", &intruder)
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["success"], false);

    let response = warp::test::request()
        .method("DELETE")
        .path(&format!("/api/review/{}", id))
        .header("cookie", &owner)
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["success"], true);

    let response = warp::test::request()
        .path(&format!("/api/review/{}", id))
        .header("cookie", &owner)
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["error"], "Review not found");
}

#[tokio::test]
async fn registration_and_login_failures_use_fixed_messages() {
    let state = app_state(FakeProvider::replying(REVIEW_JSON)).await;
    login_cookie(&state, "heidi").await;
    let filter = routes(state);

    let response = warp::test::request()
        .method("POST")
        .path("/register")
        .json(&json!({ "username": "heidi", "email": "new@example.com", "password": "pw" }))
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["message"], "Username already exists");

    let response = warp::test::request()
        .method("POST")
        .path("/register")
        .json(&json!({ "username": "ivan", "email": "heidi@example.com", "password": "pw" }))
        .reply(&filter)
        .await;
    assert_eq!(body_json(&response)["message"], "Email already registered");

    let response = warp::test::request()
        .method("POST")
        .path("/login")
        .json(&json!({ "username": "heidi", "password": "wrong" }))
        .reply(&filter)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(&response);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid credentials");
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn forged_cookie_is_not_a_session() {
    let state = app_state(FakeProvider::replying(REVIEW_JSON)).await;

    let response = warp::test::request()
        .path("/api/reviews")
        .header("cookie", "session=1.1700000000.deadbeef")
        .reply(&routes(state))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let state = app_state(FakeProvider::replying(REVIEW_JSON)).await;
    let cookie = login_cookie(&state, "judy").await;

    let response = warp::test::request()
        .method("POST")
        .path("/api/review-code")
        .header("cookie", &cookie)
        .header("content-type", "application/json")
        .body("{not json")
        .reply(&routes(state))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(&response)["success"], false);
}
