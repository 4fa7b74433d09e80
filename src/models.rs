use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Cash,
    Bank,
    Credit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Bank => "BANK",
            Self::Credit => "CREDIT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Bank => "Bank",
            Self::Credit => "Credit",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "BANK" => Self::Bank,
            "CREDIT" => Self::Credit,
            _ => Self::Cash,
        }
    }
}

/// Income/expense marker shared by categories and transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        if s == "INCOME" {
            Self::Income
        } else {
            Self::Expense
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub budget_amount: f64,
    #[serde(default)]
    pub spent_amount: f64,
    pub month: u32,
    pub year: i32,
}

/// Create/update payload. The backend expects `amount` on writes even though
/// reads come back as `budgetAmount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    pub category_id: i64,
    pub amount: f64,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub account_id: Option<i64>,
    pub transaction_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category_id: i64,
    pub account_id: i64,
    pub transaction_date: String,
}

/// Spring-style page envelope returned by the paged transaction listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySlice {
    pub name: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub total_balance: Option<f64>,
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub net_savings: f64,
    #[serde(default)]
    pub category_breakdown: Vec<CategorySlice>,
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardData {
    /// Older backend builds report only `netSavings`; fall back to it when
    /// `totalBalance` is absent.
    pub fn balance(&self) -> f64 {
        self.total_balance.unwrap_or(self.net_savings)
    }
}

/// Granularity selector for the trends aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl TrendPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlow {
    pub date: String,
    #[serde(default)]
    pub inflow: f64,
    #[serde(default)]
    pub outflow: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    #[serde(default)]
    pub opening_balance: f64,
    #[serde(default)]
    pub total_inflow: f64,
    #[serde(default)]
    pub total_outflow: f64,
    #[serde(default)]
    pub closing_balance: f64,
    #[serde(default)]
    pub daily_flow: Vec<DailyFlow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_backend_shape() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"user":{"id":1,"name":"A"},"token":"T1"}"#).unwrap();
        assert_eq!(resp.token, "T1");
        assert_eq!(resp.user.id, 1);
        assert_eq!(resp.user.name, "A");
        assert_eq!(resp.user.email, None);
    }

    #[test]
    fn transaction_uses_backend_field_names() {
        let json = r#"{
            "id": 7,
            "description": "Groceries",
            "amount": 42.5,
            "type": "EXPENSE",
            "categoryName": "Food",
            "transactionDate": "2025-03-14"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, EntryKind::Expense);
        assert_eq!(tx.category_name, "Food");
        assert_eq!(tx.transaction_date, "2025-03-14");
    }

    #[test]
    fn new_transaction_serializes_camel_case() {
        let tx = NewTransaction {
            description: "Coffee".to_string(),
            amount: 3.2,
            kind: EntryKind::Expense,
            category_id: 2,
            account_id: 5,
            transaction_date: "2025-03-14".to_string(),
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "EXPENSE");
        assert_eq!(value["categoryId"], 2);
        assert_eq!(value["accountId"], 5);
        assert_eq!(value["transactionDate"], "2025-03-14");
    }

    #[test]
    fn budget_payload_sends_single_amount_field() {
        let payload = BudgetPayload {
            category_id: 3,
            amount: 250.0,
            month: 4,
            year: 2025,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["amount"], 250.0);
        assert!(value.get("budgetAmount").is_none());
    }

    #[test]
    fn page_envelope_tolerates_missing_counters() {
        let page: Page<Transaction> = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn dashboard_balance_falls_back_to_net_savings() {
        let data: DashboardData =
            serde_json::from_str(r#"{"netSavings":120.0,"totalIncome":300.0}"#).unwrap();
        assert_eq!(data.balance(), 120.0);
        let data: DashboardData =
            serde_json::from_str(r#"{"totalBalance":50.0,"netSavings":120.0}"#).unwrap();
        assert_eq!(data.balance(), 50.0);
    }
}
