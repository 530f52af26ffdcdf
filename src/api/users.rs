//! User Calls
//!
//! Profile reads and edits on the `users` table.

use serde_json::json;

use super::{Query, SupabaseClient};
use crate::error::ApiResult;
use crate::models::{ProfileForm, UserProfile};

pub async fn get_profile(client: &SupabaseClient, user_id: &str) -> ApiResult<UserProfile> {
    client
        .select_one(&Query::table("users").select("*").eq("id", user_id))
        .await
}

pub async fn update_profile(client: &SupabaseClient, user_id: &str, form: &ProfileForm) -> ApiResult<()> {
    client.update(&Query::table("users").eq("id", user_id), form).await
}

/// Driver availability toggle; admins use it to deactivate accounts too
pub async fn set_online(client: &SupabaseClient, user_id: &str, online: bool) -> ApiResult<()> {
    client
        .update(&Query::table("users").eq("id", user_id), &json!({ "is_online": online }))
        .await
}

/// All accounts, newest first
pub async fn list_users(client: &SupabaseClient) -> ApiResult<Vec<UserProfile>> {
    client
        .select(&Query::table("users").select("*").order("created_at", false))
        .await
}
