//! The route-authorization gate: credential storage plus payload decoding.

pub mod store;
pub mod token;

pub use store::{ACCESS_TOKEN, TokenStore};
pub use token::{Claims, decode_token};

use axum_extra::extract::CookieJar;

/// Claims decoded from the stored credential, if any.
///
/// Absent or malformed credentials both yield `None`; the two cases are
/// deliberately indistinguishable to callers.
pub fn current_claims(jar: &CookieJar) -> Option<Claims> {
    let token = TokenStore::get(jar, ACCESS_TOKEN)?;
    decode_token(&token)
}

/// The current role, if a syntactically valid credential with a non-empty
/// role claim is present.
pub fn current_role(jar: &CookieJar) -> Option<String> {
    current_claims(jar).and_then(|claims| claims.role().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    #[test]
    fn role_resolves_from_stored_credential() {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"role":"user"}"#);
        let token = format!("h.{payload}.s");
        let jar = CookieJar::new().set(ACCESS_TOKEN, &token, 1);
        assert_eq!(current_role(&jar).as_deref(), Some("user"));
    }

    #[test]
    fn malformed_credential_yields_no_role() {
        let jar = CookieJar::new().set(ACCESS_TOKEN, "garbage", 1);
        assert!(current_role(&jar).is_none());
    }

    #[test]
    fn empty_jar_yields_no_role() {
        assert!(current_role(&CookieJar::new()).is_none());
    }
}
