//! Credential persistence over the cookie jar
//!
//! The credential is a single named cookie owned exclusively by this module.
//! Absence of the cookie is a normal state, not a failure; natural expiry is
//! enforced by the cookie itself.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

/// Cookie name under which the credential is stored
pub const ACCESS_TOKEN: &str = "access_token";

/// Key-value credential store with day-granular expiry.
///
/// Modeled as a trait so handlers and tests work against any jar; the
/// production implementation is `axum_extra`'s `CookieJar`, which is itself
/// in-memory until the response is written.
pub trait TokenStore: Sized {
    /// Current value for `name`, or `None` if missing or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Persist `value` under `name` with expiry `days` from now, scoped to
    /// the whole site.
    fn set(self, name: &str, value: &str, days: i64) -> Self;

    /// Invalidate `name` immediately. Deleting an absent key is a no-op.
    fn delete(self, name: &str) -> Self;
}

impl TokenStore for CookieJar {
    fn get(&self, name: &str) -> Option<String> {
        CookieJar::get(self, name).map(|cookie| cookie.value().to_string())
    }

    fn set(self, name: &str, value: &str, days: i64) -> Self {
        let cookie = Cookie::build((name.to_owned(), value.to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(days))
            .build();

        self.add(cookie)
    }

    fn delete(self, name: &str) -> Self {
        // Removal cookie: empty value, expiry in the past
        let cookie = Cookie::build((name.to_owned(), String::new()))
            .path("/")
            .build();

        self.remove(cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let jar = CookieJar::new().set(ACCESS_TOKEN, "tok-123", 1);
        assert_eq!(TokenStore::get(&jar, ACCESS_TOKEN).as_deref(), Some("tok-123"));
    }

    #[test]
    fn get_missing_is_none_not_error() {
        let jar = CookieJar::new();
        assert!(TokenStore::get(&jar, ACCESS_TOKEN).is_none());
    }

    #[test]
    fn delete_removes_value() {
        let jar = CookieJar::new().set(ACCESS_TOKEN, "tok-123", 1);
        let jar = jar.delete(ACCESS_TOKEN);
        assert!(TokenStore::get(&jar, ACCESS_TOKEN).is_none());
    }

    #[test]
    fn delete_is_idempotent() {
        let jar = CookieJar::new()
            .set(ACCESS_TOKEN, "tok-123", 1)
            .delete(ACCESS_TOKEN)
            .delete(ACCESS_TOKEN);
        assert!(TokenStore::get(&jar, ACCESS_TOKEN).is_none());
    }

    #[test]
    fn set_scopes_cookie_to_site_root() {
        let jar = CookieJar::new().set(ACCESS_TOKEN, "tok-123", 1);
        let cookie = CookieJar::get(&jar, ACCESS_TOKEN).unwrap();
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(1)));
    }
}
