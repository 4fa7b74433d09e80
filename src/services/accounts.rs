use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Account, NewAccount};

pub async fn list(api: &ApiClient) -> Result<Vec<Account>, ApiError> {
    api.get("/accounts").await
}

pub async fn create(api: &ApiClient, payload: &NewAccount) -> Result<Account, ApiError> {
    api.post("/accounts", payload).await
}
