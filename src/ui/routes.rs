use std::convert::Infallible;
use std::sync::Arc;
use serde::de::DeserializeOwned;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};
use warp::{Filter, Rejection};
use crate::config::constants::{MAX_REQUEST_BODY_BYTES, SESSION_COOKIE};
use crate::structs::api::auth_request::{LoginRequest, RegisterRequest};
use crate::structs::api::code_submission::CodeSubmission;
use crate::structs::session_user::SessionUser;
use crate::ui::app_state::AppState;
use crate::ui::handlers::{self, failure};
use crate::ui::pages::{self, APP_JS, STYLE_CSS};

fn with_state(state: Arc<AppState>) -> impl Filter<Extract = (Arc<AppState>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&state))
}

/// The caller's session, if the cookie is present, valid and the user still exists.
fn with_session(state: Arc<AppState>) -> impl Filter<Extract = (Option<SessionUser>,), Error = Rejection> + Clone {
    warp::cookie::optional::<String>(SESSION_COOKIE).and_then(move |token: Option<String>| {
        let state = Arc::clone(&state);
        async move {
            let user = match token {
                Some(token) => state.auth.authenticate(&token).await,
                None => None,
            };
            Ok::<_, Rejection>(user)
        }
    })
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_REQUEST_BODY_BYTES).and(warp::body::json())
}

/// Every route the server answers, with rejections turned into replies.
pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    api_routes(Arc::clone(&state))
        .or(page_routes(state))
        .or(static_routes())
        .recover(handle_rejection)
        .with(warp::log("ai_code_reviewer::http"))
}

fn api_routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let session = with_session(Arc::clone(&state));
    let state = with_state(state);

    let review_code = warp::path!("api" / "review-code")
        .and(warp::post())
        .and(session.clone())
        .and(json_body::<CodeSubmission>())
        .and(state.clone())
        .and_then(handlers::review_code);

    let debug_code = warp::path!("api" / "debug-code")
        .and(warp::post())
        .and(session.clone())
        .and(json_body::<CodeSubmission>())
        .and(state.clone())
        .and_then(handlers::debug_code);

    let analyze_code = warp::path!("api" / "analyze-code")
        .and(warp::post())
        .and(session.clone())
        .and(json_body::<CodeSubmission>())
        .and(state.clone())
        .and_then(handlers::analyze_code);

    let get_review = warp::path!("api" / "review" / i64)
        .and(warp::get())
        .and(session.clone())
        .and(state.clone())
        .and_then(handlers::get_review);

    let delete_review = warp::path!("api" / "review" / i64)
        .and(warp::delete())
        .and(session.clone())
        .and(state.clone())
        .and_then(handlers::delete_review);

    let list_reviews = warp::path!("api" / "reviews")
        .and(warp::get())
        .and(session)
        .and(state.clone())
        .and_then(handlers::list_reviews);

    let login = warp::path!("login")
        .and(warp::post())
        .and(json_body::<LoginRequest>())
        .and(state.clone())
        .and_then(handlers::login);

    let register = warp::path!("register")
        .and(warp::post())
        .and(json_body::<RegisterRequest>())
        .and(state)
        .and_then(handlers::register);

    review_code
        .or(debug_code)
        .or(analyze_code)
        .or(get_review)
        .or(delete_review)
        .or(list_reviews)
        .or(login)
        .or(register)
}

fn page_routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let session = with_session(Arc::clone(&state));
    let state = with_state(state);

    let index = warp::path::end()
        .and(warp::get())
        .and(session.clone())
        .and(state.clone())
        .and_then(pages::index);

    let login = warp::path!("login")
        .and(warp::get())
        .and(session.clone())
        .and_then(pages::login_page);

    let register = warp::path!("register")
        .and(warp::get())
        .and(session.clone())
        .and_then(pages::register_page);

    let logout = warp::path!("logout")
        .and(warp::get())
        .and_then(pages::logout);

    let review = warp::path!("review")
        .and(warp::get())
        .and(session.clone())
        .and_then(pages::review_page);

    let history = warp::path!("history")
        .and(warp::get())
        .and(session.clone())
        .and(state.clone())
        .and_then(pages::history_page);

    let detail = warp::path!("reviews" / i64)
        .and(warp::get())
        .and(session)
        .and(state)
        .and_then(pages::review_detail_page);

    index
        .or(login)
        .or(register)
        .or(logout)
        .or(review)
        .or(history)
        .or(detail)
}

fn static_routes() -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let app_js = warp::path!("static" / "app.js")
        .and(warp::get())
        .map(|| warp::reply::with_header(APP_JS, "content-type", "application/javascript; charset=utf-8"));

    let style = warp::path!("static" / "style.css")
        .and(warp::get())
        .map(|| warp::reply::with_header(STYLE_CSS, "content-type", "text/css; charset=utf-8"));

    app_js.or(style)
}

async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    if err.is_not_found() {
        return Ok(pages::not_found_page(None));
    }

    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(failure(StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large"));
    }

    if err.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(failure(StatusCode::LENGTH_REQUIRED, "Content-Length header is required"));
    }

    if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        log::debug!("Rejected request body: {}", e);
        return Ok(failure(StatusCode::BAD_REQUEST, "Invalid request body"));
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(failure(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON body"));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(failure(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"));
    }

    log::error!("❌ Unhandled rejection: {:?}", err);
    Ok(failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"))
}
