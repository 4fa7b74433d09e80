use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CashFlow, DashboardData, MonthlySummary, NewTransaction, Page, Transaction, TrendPeriod,
    TrendPoint,
};

pub async fn paged(api: &ApiClient, page: u32, size: u32) -> Result<Page<Transaction>, ApiError> {
    api.get_with_query("/transactions/paged", &paged_query(page, size))
        .await
}

pub async fn create(api: &ApiClient, payload: &NewTransaction) -> Result<Transaction, ApiError> {
    api.post("/transactions", payload).await
}

pub async fn monthly_summary(
    api: &ApiClient,
    month: u32,
    year: i32,
) -> Result<MonthlySummary, ApiError> {
    api.get_with_query("/transactions/summary/monthly", &month_query(month, year))
        .await
}

pub async fn dashboard(api: &ApiClient, month: u32, year: i32) -> Result<DashboardData, ApiError> {
    api.get_with_query("/transactions/dashboard", &month_query(month, year))
        .await
}

pub async fn trends(
    api: &ApiClient,
    period: TrendPeriod,
    year: i32,
    month: Option<u32>,
) -> Result<Vec<TrendPoint>, ApiError> {
    api.get_with_query("/transactions/trends", &trends_query(period, year, month))
        .await
}

pub async fn cash_flow(api: &ApiClient, month: u32, year: i32) -> Result<CashFlow, ApiError> {
    api.get_with_query("/transactions/cashflow", &month_query(month, year))
        .await
}

pub async fn export_csv(api: &ApiClient) -> Result<Vec<u8>, ApiError> {
    api.get_binary("/transactions/export/csv").await
}

pub async fn import_csv(
    api: &ApiClient,
    file: web_sys::File,
) -> Result<serde_json::Value, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build upload form".to_string()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Network("could not attach file to upload".to_string()))?;
    api.post_form("/transactions/import/csv", form).await
}

// Zero-based page index, matching the backend's paging contract.
fn paged_query(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("size", size.to_string())]
}

fn month_query(month: u32, year: i32) -> Vec<(&'static str, String)> {
    vec![("month", month.to_string()), ("year", year.to_string())]
}

fn trends_query(
    period: TrendPeriod,
    year: i32,
    month: Option<u32>,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("period", period.as_str().to_string()),
        ("year", year.to_string()),
    ];
    if let Some(month) = month {
        query.push(("month", month.to_string()));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_query_is_zero_based() {
        assert_eq!(
            paged_query(0, 10),
            vec![("page", "0".to_string()), ("size", "10".to_string())]
        );
    }

    #[test]
    fn trends_query_includes_month_only_when_given() {
        let with_month = trends_query(TrendPeriod::Daily, 2025, Some(3));
        assert!(with_month.contains(&("month", "3".to_string())));
        assert_eq!(with_month[0], ("period", "daily".to_string()));

        let without_month = trends_query(TrendPeriod::Monthly, 2025, None);
        assert!(!without_month.iter().any(|(k, _)| *k == "month"));
    }
}
