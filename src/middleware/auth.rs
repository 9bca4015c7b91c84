use axum::{
    extract::Request,
    http::{StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::{ACCESS_TOKEN, TokenStore, decode_token};

/// Auth extension inserted for handlers behind the protected guard
#[derive(Clone, Debug)]
pub struct Auth {
    pub role: String,
    /// Raw credential, forwarded as the bearer on upstream API calls
    pub token: String,
}

/// Protected-route guard
///
/// Reads the access-token cookie and decodes its payload. If no role is
/// resolvable (missing cookie, malformed token, empty role) the request is
/// redirected to the login page with the attempted origin carried in the
/// `from` query parameter. The guard only reads the credential; login and
/// logout are the ones that mutate it.
pub async fn auth_middleware(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let Some(token) = TokenStore::get(&jar, ACCESS_TOKEN) else {
        tracing::debug!(path = %req.uri().path(), "no credential, redirecting to login");
        return redirect_to_login(req.uri());
    };

    // Decode failure is identical to absence: fail closed, no error surfaced
    let Some(role) = decode_token(&token).and_then(|claims| claims.role().map(str::to_owned))
    else {
        tracing::debug!(path = %req.uri().path(), "credential without resolvable role, redirecting to login");
        return redirect_to_login(req.uri());
    };

    req.extensions_mut().insert(Auth { role, token });
    next.run(req).await
}

fn redirect_to_login(uri: &Uri) -> Response {
    let origin = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = format!("/giris?from={}", urlencoding::encode(origin));

    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
}
