//! Auth Calls
//!
//! Email/password sign-in against the hosted auth service. The session is
//! kept on the client and mirrored to `localStorage` so a reload stays
//! signed in.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{check, SupabaseClient};
use crate::error::{ApiError, ApiResult};

const SESSION_KEY: &str = "foodhub.session";

/// Authenticated user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

/// Tokens for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Sign-up answers with a session, or just the user when email
/// confirmation is pending
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

impl SupabaseClient {
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<Session> {
        let request = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", self.anon_key.as_ref())
            .json(&json!({ "email": email, "password": password }));
        let response = check(request.send().await?).await?;
        let session: Session = response.json().await?;
        self.remember(Some(session.clone()));
        log::info!("signed in as {}", session.user.id);
        Ok(session)
    }

    /// Create an account and its `users` row.
    ///
    /// Returns `None` when the account still needs email confirmation.
    pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> ApiResult<Option<Session>> {
        let request = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", self.anon_key.as_ref())
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": full_name },
            }));
        let response = check(request.send().await?).await?;
        match response.json::<SignUpResponse>().await? {
            SignUpResponse::Session(session) => {
                self.remember(Some(session.clone()));
                self.insert(
                    "users",
                    &json!({
                        "id": session.user.id,
                        "email": email,
                        "full_name": full_name,
                        "user_type": "customer",
                    }),
                )
                .await?;
                log::info!("signed up {}", session.user.id);
                Ok(Some(session))
            }
            SignUpResponse::User(user) => {
                log::info!("sign-up for {} awaits confirmation", user.id);
                Ok(None)
            }
        }
    }

    /// Revoke the token and forget the session, even if the call fails
    pub async fn sign_out(&self) -> ApiResult<()> {
        let result = match self.session() {
            Some(_) => {
                let request = self.authorize(self.http.post(self.auth_url("logout")));
                request.send().await.map(|_| ()).map_err(ApiError::from)
            }
            None => Ok(()),
        };
        self.remember(None);
        result
    }

    /// Load a session saved by a previous page load
    pub fn restore_session(&self) -> Option<Session> {
        let session = load_session();
        self.set_session(session.clone());
        session
    }

    fn remember(&self, session: Option<Session>) {
        match &session {
            Some(s) => save_session(s),
            None => clear_session(),
        }
        self.set_session(session);
    }
}

// ========================
// localStorage
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_session() -> Option<Session> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    decode_session(&raw)
}

fn save_session(session: &Session) {
    let Some(storage) = local_storage() else { return };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                log::warn!("could not persist session");
            }
        }
        Err(e) => log::warn!("could not encode session: {}", e),
    }
}

fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Stored sessions from older builds may not parse; treat them as absent
fn decode_session(raw: &str) -> Option<Session> {
    match serde_json::from_str(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parses_as_session() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r",
            "user": {"id": "u1", "email": "a@b.c", "aud": "authenticated"}
        }"#;
        let session: Session = serde_json::from_str(body).unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.refresh_token.as_deref(), Some("r"));
    }

    #[test]
    fn test_signup_without_session() {
        let body = r#"{"id": "u2", "email": "new@b.c", "confirmation_sent_at": "2024-05-01T00:00:00Z"}"#;
        match serde_json::from_str::<SignUpResponse>(body).unwrap() {
            SignUpResponse::User(user) => assert_eq!(user.id, "u2"),
            SignUpResponse::Session(_) => panic!("expected bare user"),
        }
    }

    #[test]
    fn test_decode_session() {
        let session = Session {
            access_token: "jwt".to_string(),
            refresh_token: None,
            user: AuthUser { id: "u1".to_string(), email: None },
        };
        let raw = serde_json::to_string(&session).unwrap();
        assert_eq!(decode_session(&raw), Some(session));
        assert_eq!(decode_session("{not json"), None);
    }
}
