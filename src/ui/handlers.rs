use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use crate::config::constants::{LOGIN_REQUIRED_MESSAGE, NO_CODE_MESSAGE, SESSION_COOKIE};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::render_mode::RenderMode;
use crate::errors::ReviewerError;
use crate::services::auth_service::{LOGIN_SUCCESSFUL, REGISTRATION_SUCCESSFUL};
use crate::services::result_renderer::render_html;
use crate::structs::api::auth_request::{LoginRequest, RegisterRequest};
use crate::structs::api::auth_response::AuthResponse;
use crate::structs::api::code_submission::CodeSubmission;
use crate::structs::review::NewReview;
use crate::structs::session_user::SessionUser;
use crate::ui::app_state::AppState;

pub(crate) fn json_response(status: StatusCode, body: &Value) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

pub(crate) fn failure(status: StatusCode, message: &str) -> Response {
    json_response(status, &json!({ "success": false, "error": message }))
}

fn error_status(error: &ReviewerError) -> StatusCode {
    match error {
        ReviewerError::NotFound { .. } => StatusCode::NOT_FOUND,
        ReviewerError::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
        ReviewerError::ValidationError { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(error: &ReviewerError) -> Response {
    log::error!("❌ {}", error.technical_details());
    failure(error_status(error), &error.public_message())
}

fn round_seconds(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 100.0).round() / 100.0
}

pub(crate) fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}", SESSION_COOKIE, token, max_age_secs)
}

pub(crate) fn expired_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

pub async fn review_code(user: Option<SessionUser>, body: CodeSubmission, state: Arc<AppState>) -> Result<Response, Infallible> {
    Ok(run_analysis(AnalysisKind::Review, user, body, state).await)
}

pub async fn debug_code(user: Option<SessionUser>, body: CodeSubmission, state: Arc<AppState>) -> Result<Response, Infallible> {
    Ok(run_analysis(AnalysisKind::Debug, user, body, state).await)
}

pub async fn analyze_code(user: Option<SessionUser>, body: CodeSubmission, state: Arc<AppState>) -> Result<Response, Infallible> {
    Ok(run_analysis(AnalysisKind::Comprehensive, user, body, state).await)
}

async fn run_analysis(kind: AnalysisKind, user: Option<SessionUser>, body: CodeSubmission, state: Arc<AppState>) -> Response {
    let Some(user) = user else {
        return failure(StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE);
    };
    let Some(code) = body.non_empty_code() else {
        return failure(StatusCode::BAD_REQUEST, NO_CODE_MESSAGE);
    };

    let started = Instant::now();
    let language = body.language_or_default();
    let error = body.error_text();
    let code = state.analyzer.prepare_code(kind, code);

    log::info!("🔍 {} requested by {} ({} chars of {})", kind.label(), user.username, code.len(), language);
    let outcome = state.analyzer.analyze(kind, &code, &language, error.as_deref()).await;

    let mut response = json!({ "success": true });
    response[kind.result_field()] = Value::String(outcome.text.clone());

    if kind.is_persisted() {
        let review = NewReview {
            user_id: user.id,
            title: body.title_or_default(),
            code,
            language: language.clone(),
            error_message: error,
            review_result: outcome.text.clone(),
        };
        match state.reviews.insert(&review).await {
            Ok(id) => {
                response["review_id"] = json!(id);
                response["processing_time"] = json!(round_seconds(started));
            }
            Err(e) => return error_response(&e),
        }
    }

    if kind != AnalysisKind::Comprehensive {
        response["rendered"] = Value::String(render_html(&outcome.text, RenderMode::from(kind), Some(&language)));
    }

    log::info!("✅ {} finished in {:.2}s", kind.label(), started.elapsed().as_secs_f64());
    json_response(StatusCode::OK, &response)
}

pub async fn get_review(id: i64, user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(failure(StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE));
    };

    let review = match state.reviews.find_for_user(id, user.id).await {
        Ok(Some(review)) => review,
        Ok(None) => return Ok(error_response(&ReviewerError::not_found("Review", &id.to_string()))),
        Err(e) => return Ok(error_response(&e)),
    };

    let result = review.review_result.clone().unwrap_or_default();
    let rendered = render_html(&result, RenderMode::Review, Some(&review.language));

    Ok(json_response(StatusCode::OK, &json!({
        "success": true,
        "review": {
            "id": review.id,
            "title": review.title,
            "code": review.code,
            "language": review.language,
            "result": result,
            "created_at": review.created_at.to_rfc3339(),
        },
        "rendered": rendered,
    })))
}

pub async fn delete_review(id: i64, user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(failure(StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE));
    };

    match state.reviews.delete_for_user(id, user.id).await {
        Ok(true) => {
            log::info!("🗑️ Review {} deleted by {}", id, user.username);
            Ok(json_response(StatusCode::OK, &json!({ "success": true })))
        }
        Ok(false) => Ok(error_response(&ReviewerError::not_found("Review", &id.to_string()))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn list_reviews(user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(failure(StatusCode::UNAUTHORIZED, LOGIN_REQUIRED_MESSAGE));
    };

    match state.reviews.list_for_user(user.id, None).await {
        Ok(reviews) => Ok(json_response(StatusCode::OK, &json!({ "success": true, "reviews": reviews }))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn register(body: RegisterRequest, state: Arc<AppState>) -> Result<Response, Infallible> {
    match state.auth.register(&body).await {
        Ok(_) => Ok(warp::reply::json(&AuthResponse::ok(REGISTRATION_SUCCESSFUL)).into_response()),
        Err(e) => {
            let status = error_status(&e);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                log::error!("❌ {}", e.technical_details());
            }
            Ok(warp::reply::with_status(warp::reply::json(&AuthResponse::failed(&e.public_message())), status).into_response())
        }
    }
}

pub async fn login(body: LoginRequest, state: Arc<AppState>) -> Result<Response, Infallible> {
    let user = match state.auth.login(&body).await {
        Ok(user) => user,
        Err(e) => {
            let status = error_status(&e);
            return Ok(warp::reply::with_status(warp::reply::json(&AuthResponse::failed(&e.public_message())), status).into_response());
        }
    };

    match state.auth.issue_token(&user) {
        Ok(token) => {
            log::info!("🔑 {} logged in", user.username);
            let reply = warp::reply::json(&AuthResponse::ok(LOGIN_SUCCESSFUL));
            Ok(warp::reply::with_header(reply, "set-cookie", session_cookie(&token, state.session_ttl_secs)).into_response())
        }
        Err(e) => Ok(error_response(&e)),
    }
}
