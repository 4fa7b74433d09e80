use serde_json::json;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::AuthResponse;

pub async fn login(api: &ApiClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    api.post(
        "/auth/login",
        &json!({ "email": email, "password": password }),
    )
    .await
}

pub async fn register(
    api: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    api.post(
        "/auth/register",
        &json!({ "name": name, "email": email, "password": password }),
    )
    .await
}
