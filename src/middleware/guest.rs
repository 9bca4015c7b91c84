use axum::{
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::current_role;

/// Public-only guard for the login and register pages
///
/// A visitor with a resolvable role has no business on these pages and is
/// sent to the dashboard. Anyone else falls through to the handler; a
/// malformed credential fails open here.
pub async fn guest_middleware(jar: CookieJar, req: Request, next: Next) -> Response {
    if current_role(&jar).is_some() {
        return (StatusCode::SEE_OTHER, [(header::LOCATION, "/dashboard")]).into_response();
    }

    next.run(req).await
}
