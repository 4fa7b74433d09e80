use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, NewCategory};

pub async fn list(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get("/categories").await
}

pub async fn create(api: &ApiClient, payload: &NewCategory) -> Result<Category, ApiError> {
    api.post("/categories", payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/categories/{}", id)).await
}
