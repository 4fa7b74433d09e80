use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Budget, BudgetPayload};

pub async fn list(api: &ApiClient) -> Result<Vec<Budget>, ApiError> {
    api.get("/budgets").await
}

pub async fn for_month(api: &ApiClient, month: u32, year: i32) -> Result<Vec<Budget>, ApiError> {
    api.get_with_query("/budgets/month", &month_query(month, year))
        .await
}

pub async fn create(api: &ApiClient, payload: &BudgetPayload) -> Result<Budget, ApiError> {
    api.post("/budgets", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &BudgetPayload) -> Result<Budget, ApiError> {
    api.put(&format!("/budgets/{}", id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/budgets/{}", id)).await
}

fn month_query(month: u32, year: i32) -> Vec<(&'static str, String)> {
    vec![("month", month.to_string()), ("year", year.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_query_carries_both_params() {
        assert_eq!(
            month_query(4, 2025),
            vec![
                ("month", "4".to_string()),
                ("year", "2025".to_string())
            ]
        );
    }
}
