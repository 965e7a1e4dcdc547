use std::convert::Infallible;
use std::sync::Arc;
use askama::Template;
use warp::http::{StatusCode, Uri};
use warp::reply::{Reply, Response};
use crate::config::constants::RECENT_REVIEWS_LIMIT;
use crate::enums::auth_form::AuthForm;
use crate::enums::render_mode::RenderMode;
use crate::services::result_renderer::render_html;
use crate::structs::session_user::SessionUser;
use crate::ui::app_state::AppState;
use crate::ui::handlers::expired_session_cookie;
use crate::ui::templates::{
    AuthTemplate, DashboardTemplate, ErrorTemplate, HistoryTemplate, LandingTemplate, NotFoundTemplate,
    ReviewDetailTemplate, ReviewTemplate,
};

pub const APP_JS: &str = include_str!("static/app.js");
pub const STYLE_CSS: &str = include_str!("static/style.css");

fn html_response<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => warp::reply::with_status(warp::reply::html(html), status).into_response(),
        Err(e) => {
            log::error!("❌ Template error: {}", e);
            warp::reply::with_status("Internal server error", StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

fn redirect(location: &'static str) -> Response {
    warp::redirect::see_other(Uri::from_static(location)).into_response()
}

fn server_error_page(user: Option<&SessionUser>) -> Response {
    html_response(StatusCode::INTERNAL_SERVER_ERROR, &ErrorTemplate { user })
}

pub fn not_found_page(user: Option<&SessionUser>) -> Response {
    html_response(StatusCode::NOT_FOUND, &NotFoundTemplate { user })
}

pub async fn index(user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(html_response(StatusCode::OK, &LandingTemplate { user: None }));
    };

    match state.reviews.list_for_user(user.id, Some(RECENT_REVIEWS_LIMIT)).await {
        Ok(reviews) => Ok(html_response(StatusCode::OK, &DashboardTemplate {
            user: Some(&user),
            username: &user.username,
            reviews: &reviews,
            deletable: false,
        })),
        Err(e) => {
            log::error!("❌ Failed to load dashboard: {}", e);
            Ok(server_error_page(Some(&user)))
        }
    }
}

pub async fn login_page(user: Option<SessionUser>) -> Result<Response, Infallible> {
    if user.is_some() {
        return Ok(redirect("/"));
    }
    Ok(html_response(StatusCode::OK, &AuthTemplate { user: None, form: AuthForm::Login }))
}

pub async fn register_page(user: Option<SessionUser>) -> Result<Response, Infallible> {
    if user.is_some() {
        return Ok(redirect("/"));
    }
    Ok(html_response(StatusCode::OK, &AuthTemplate { user: None, form: AuthForm::Register }))
}

pub async fn logout() -> Result<Response, Infallible> {
    Ok(warp::reply::with_header(
        warp::redirect::see_other(Uri::from_static("/")),
        "set-cookie",
        expired_session_cookie(),
    ).into_response())
}

pub async fn review_page(user: Option<SessionUser>) -> Result<Response, Infallible> {
    match user {
        Some(user) => Ok(html_response(StatusCode::OK, &ReviewTemplate { user: Some(&user) })),
        None => Ok(redirect("/login")),
    }
}

pub async fn history_page(user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(redirect("/login"));
    };

    match state.reviews.list_for_user(user.id, None).await {
        Ok(reviews) => Ok(html_response(StatusCode::OK, &HistoryTemplate {
            user: Some(&user),
            reviews: &reviews,
            deletable: true,
        })),
        Err(e) => {
            log::error!("❌ Failed to load history: {}", e);
            Ok(server_error_page(Some(&user)))
        }
    }
}

pub async fn review_detail_page(id: i64, user: Option<SessionUser>, state: Arc<AppState>) -> Result<Response, Infallible> {
    let Some(user) = user else {
        return Ok(redirect("/login"));
    };

    let review = match state.reviews.find_for_user(id, user.id).await {
        Ok(Some(review)) => review,
        Ok(None) => return Ok(not_found_page(Some(&user))),
        Err(e) => {
            log::error!("❌ Failed to load review {}: {}", id, e);
            return Ok(server_error_page(Some(&user)));
        }
    };

    let raw = review.review_result.as_deref().unwrap_or_default();
    Ok(html_response(StatusCode::OK, &ReviewDetailTemplate {
        user: Some(&user),
        review: &review,
        rendered: render_html(raw, RenderMode::Review, Some(&review.language)),
        raw,
    }))
}
