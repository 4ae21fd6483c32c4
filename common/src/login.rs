//! Login request payloads and the mapping from an HTTP outcome to what the
//! login page shows or stores.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::session::{CredentialBackend, CredentialStore};

/// Page loaded after a successful login.
pub const HOME_PAGE: &str = "index.html";

/// Text of the navigation link for the current session state.
pub fn auth_link_label(authenticated: bool) -> &'static str {
    if authenticated { "Logout" } else { "Login" }
}

#[derive(Serialize, Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Builds the request from the form inputs as typed; the API decides
    /// what a stray space means.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "userId", deserialize_with = "string_or_number")]
    pub user_id: String,
}

/// The API sends `userId` as a number; older deployments sent a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

/// Failure shown inline under the login form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    #[error("Email ou mot de passe incorrect.")]
    InvalidCredentials,
    #[error("Une erreur est survenue. Veuillez réessayer.")]
    Server,
}

impl LoginFailure {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 404 => LoginFailure::InvalidCredentials,
            _ => LoginFailure::Server,
        }
    }
}

/// Decides the outcome of `POST /users/login`.
///
/// On a 2xx with a decodable body the credentials are saved and the page to
/// navigate to is returned. Nothing is stored on any failure.
pub fn resolve_login<B: CredentialBackend>(
    store: &CredentialStore<B>,
    status: u16,
    body: &str,
) -> Result<&'static str, LoginFailure> {
    if !(200..300).contains(&status) {
        return Err(LoginFailure::from_status(status));
    }
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|_| LoginFailure::Server)?;
    store
        .save(&response.token, &response.user_id)
        .map_err(|_| LoginFailure::Server)?;
    Ok(HOME_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::MemoryBackend;

    fn store() -> CredentialStore<MemoryBackend> {
        CredentialStore::new(MemoryBackend::default())
    }

    #[test]
    fn unauthorized_shows_incorrect_credentials_and_stores_nothing() {
        let store = store();

        let outcome = resolve_login(&store, 401, r#"{"message":"Unauthorized"}"#);

        assert_eq!(outcome, Err(LoginFailure::InvalidCredentials));
        assert_eq!(
            LoginFailure::InvalidCredentials.to_string(),
            "Email ou mot de passe incorrect."
        );
        assert!(!store.is_authenticated());
        assert_eq!(store.user_id(), None);
    }

    #[test]
    fn unknown_user_is_also_an_invalid_credentials_error() {
        assert_eq!(
            resolve_login(&store(), 404, ""),
            Err(LoginFailure::InvalidCredentials)
        );
    }

    #[test]
    fn other_statuses_are_server_errors() {
        for status in [400, 403, 500, 502] {
            assert_eq!(resolve_login(&store(), status, ""), Err(LoginFailure::Server));
        }
    }

    #[test]
    fn success_stores_both_values_and_redirects_home() {
        let store = store();

        let outcome = resolve_login(&store, 200, r#"{"userId":1,"token":"eyJhbGciOi.x.y"}"#);

        assert_eq!(outcome, Ok(HOME_PAGE));
        assert_eq!(store.token().as_deref(), Some("eyJhbGciOi.x.y"));
        assert_eq!(store.user_id().as_deref(), Some("1"));
    }

    #[test]
    fn string_user_id_is_accepted() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"userId":"7","token":"t"}"#).unwrap();

        assert_eq!(response.user_id, "7");
    }

    #[test]
    fn malformed_success_body_is_a_server_error() {
        let store = store();

        assert_eq!(resolve_login(&store, 200, "<html>"), Err(LoginFailure::Server));
        assert_eq!(resolve_login(&store, 200, r#"{"token":""}"#), Err(LoginFailure::Server));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn request_serializes_as_expected_by_the_api() {
        let request = LoginRequest {
            email: "sophie.bluel@test.tld".into(),
            password: "S0phie".into(),
        };

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"email":"sophie.bluel@test.tld","password":"S0phie"}"#
        );
    }

    #[test]
    fn form_inputs_are_posted_as_typed() {
        let request = LoginRequest::new(" sophie.bluel@test.tld ", "S0phie ");

        assert_eq!(request.email, " sophie.bluel@test.tld ");
        assert_eq!(request.password, "S0phie ");
    }

    #[test]
    fn nav_link_reads_login_or_logout() {
        assert_eq!(auth_link_label(false), "Login");
        assert_eq!(auth_link_label(true), "Logout");
    }
}
