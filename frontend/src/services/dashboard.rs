use billdash_shared::error::ApiResult;
use billdash_shared::protocol::ApiResponse;
use billdash_shared::{CategoryExpense, DashboardStats, MonthlyExpense};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        let res = self.api.get("/dashboard/stats").await?;
        Ok(res.json::<ApiResponse<DashboardStats>>()?.data)
    }

    pub async fn expenses_by_month(&self, months: u32) -> ApiResult<Vec<MonthlyExpense>> {
        let res = self
            .api
            .get(&format!("/dashboard/expenses-by-month?months={}", months))
            .await?;
        Ok(res.json::<ApiResponse<Vec<MonthlyExpense>>>()?.data)
    }

    pub async fn expenses_by_category(&self) -> ApiResult<Vec<CategoryExpense>> {
        let res = self.api.get("/dashboard/expenses-by-category").await?;
        Ok(res.json::<ApiResponse<Vec<CategoryExpense>>>()?.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::test_client;

    #[tokio::test]
    async fn stats_unwraps_envelope() {
        let (transport, api) = test_client("/");
        transport.mock_response(
            "http://api.test/api/dashboard/stats",
            200,
            json!({"data": {
                "total_expense": "1200.00",
                "paid_this_month": "300.00",
                "unpaid_amount": "900.00",
                "overdue_bills_count": 2,
                "expense_change_percent": -4.2
            }}),
        );

        let stats = DashboardService::new(api).stats().await.unwrap();
        assert_eq!(stats.total_expense, "1200.00");
        assert_eq!(stats.overdue_bills_count, 2);
    }

    #[tokio::test]
    async fn expenses_by_month_passes_months_param() {
        let (transport, api) = test_client("/");
        transport.mock_response(
            "http://api.test/api/dashboard/expenses-by-month?months=6",
            200,
            json!({"data": [{"month": "2025-07", "amount": "150.00"}]}),
        );

        let expenses = DashboardService::new(api).expenses_by_month(6).await.unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].month, "2025-07");
        assert_eq!(
            transport.last_request().url,
            "http://api.test/api/dashboard/expenses-by-month?months=6"
        );
    }
}
