//! Hosted Backend Client
//!
//! Thin wrappers over the Supabase REST (PostgREST) and auth endpoints,
//! organized by table.

mod auth;
mod orders;
mod query;
mod restaurants;
mod users;

use std::sync::{Arc, RwLock};

use leptos::prelude::*;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use auth::*;
pub use orders::*;
pub use query::Query;
pub use restaurants::*;
pub use users::*;

/// Ask PostgREST for a single JSON object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Shared handle to the backend. Clones share the session.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    anon_key: Arc<str>,
    session: Arc<RwLock<Option<Session>>>,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(config.supabase_url.as_str()),
            anon_key: Arc::from(config.supabase_anon_key.as_str()),
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Current session, if signed in
    pub fn session(&self) -> Option<Session> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_session(&self, session: Option<Session>) {
        match self.session.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }

    /// Signed-in user id or `NotSignedIn`
    pub fn user_id(&self) -> ApiResult<String> {
        self.session()
            .map(|s| s.user.id)
            .ok_or(ApiError::NotSignedIn)
    }

    fn rest_url(&self, query: &Query) -> String {
        rest_url(&self.base_url, query)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Attach the API key and the bearer token (user token, else anon key)
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.anon_key.to_string());
        request
            .header("apikey", self.anon_key.as_ref())
            .bearer_auth(bearer)
    }

    // ========================
    // PostgREST verbs
    // ========================

    /// GET rows matching `query`
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> ApiResult<Vec<T>> {
        let request = self.authorize(self.http.get(self.rest_url(query)));
        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// GET exactly one row
    pub async fn select_one<T: DeserializeOwned>(&self, query: &Query) -> ApiResult<T> {
        let request = self
            .authorize(self.http.get(self.rest_url(query)))
            .header("Accept", SINGLE_OBJECT);
        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// PATCH rows matching `query` with `body`
    pub async fn update<B: Serialize + ?Sized>(&self, query: &Query, body: &B) -> ApiResult<()> {
        let request = self
            .authorize(self.http.patch(self.rest_url(query)))
            .header("Prefer", "return=minimal")
            .json(body);
        check(request.send().await?).await?;
        Ok(())
    }

    /// POST a new row into `table`
    pub async fn insert<B: Serialize + ?Sized>(&self, table: &str, body: &B) -> ApiResult<()> {
        let request = self
            .authorize(self.http.post(self.rest_url(&Query::table(table))))
            .header("Prefer", "return=minimal")
            .json(body);
        check(request.send().await?).await?;
        Ok(())
    }
}

fn rest_url(base_url: &str, query: &Query) -> String {
    let params = query.to_query_string();
    if params.is_empty() {
        format!("{}/rest/v1/{}", base_url, query.table_name())
    } else {
        format!("{}/rest/v1/{}?{}", base_url, query.table_name(), params)
    }
}

/// Turn non-2xx responses into `ApiError::Status`
async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    log::warn!("backend returned {}: {}", status.as_u16(), message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Pull a readable message out of a PostgREST or auth error body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error_description", "msg", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// Get the backend client from context
pub fn use_client() -> SupabaseClient {
    expect_context::<SupabaseClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_url() {
        let q = Query::table("menu_items").eq("restaurant_id", "r1");
        assert_eq!(
            rest_url("https://demo.supabase.co", &q),
            "https://demo.supabase.co/rest/v1/menu_items?restaurant_id=eq.r1"
        );
        assert_eq!(
            rest_url("https://demo.supabase.co", &Query::table("users")),
            "https://demo.supabase.co/rest/v1/users"
        );
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(r#"{"code":"42501","message":"permission denied for table orders"}"#),
            Some("permission denied for table orders".to_string())
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            Some("Invalid login credentials".to_string())
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
        assert_eq!(error_message(r#"{"message":""}"#), None);
    }

    #[test]
    fn test_user_id_requires_session() {
        let config = AppConfig::from_values(Some("https://demo.supabase.co"), Some("key"), None, None).unwrap();
        let client = SupabaseClient::new(&config);
        assert!(matches!(client.user_id(), Err(ApiError::NotSignedIn)));

        client.set_session(Some(Session {
            access_token: "token".to_string(),
            refresh_token: None,
            user: AuthUser { id: "u1".to_string(), email: None },
        }));
        assert_eq!(client.user_id().unwrap(), "u1");
        // Clones share the session
        assert!(client.clone().session().is_some());
    }
}
