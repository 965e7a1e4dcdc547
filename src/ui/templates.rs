//! Server-rendered pages. Every page extends `layout.html`, which draws the
//! navigation from `user`.

use askama::Template;
use crate::enums::auth_form::AuthForm;
use crate::structs::review::{Review, ReviewSummary};
use crate::structs::session_user::SessionUser;

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub user: Option<&'a SessionUser>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub user: Option<&'a SessionUser>,
    pub username: &'a str,
    pub reviews: &'a [ReviewSummary],
    pub deletable: bool,
}

#[derive(Template)]
#[template(path = "auth.html")]
pub struct AuthTemplate<'a> {
    pub user: Option<&'a SessionUser>,
    pub form: AuthForm,
}

#[derive(Template)]
#[template(path = "review.html")]
pub struct ReviewTemplate<'a> {
    pub user: Option<&'a SessionUser>,
}

#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate<'a> {
    pub user: Option<&'a SessionUser>,
    pub reviews: &'a [ReviewSummary],
    pub deletable: bool,
}

/// A stored review. `rendered` is the analysis fragment, already escaped by
/// its own template.
#[derive(Template)]
#[template(path = "review_detail.html")]
pub struct ReviewDetailTemplate<'a> {
    pub user: Option<&'a SessionUser>,
    pub review: &'a Review,
    pub rendered: String,
    pub raw: &'a str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub user: Option<&'a SessionUser>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub user: Option<&'a SessionUser>,
}
