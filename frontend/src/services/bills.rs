use billdash_shared::error::ApiResult;
use billdash_shared::protocol::{ApiResponse, PageEnvelope, PaginatedResponse};
use billdash_shared::{
    Bill, BillActivity, BillFilters, CreateBillInput, PayBillRequest, UpdateBillInput,
};
use chrono::{DateTime, Utc};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct BillService {
    api: ApiClient,
}

impl BillService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// 分页列表；服务端的分页信封在这里换成 `data + meta` 形式
    pub async fn list(&self, filters: &BillFilters) -> ApiResult<PaginatedResponse<Bill>> {
        let mut query = format!("page={}&page_size={}", filters.page, filters.page_size);
        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            query.push_str(&format!("&search={}", search));
        }
        if let Some(status) = filters.status {
            query.push_str(&format!("&status={}", status.as_str()));
        }

        let res = self.api.get(&format!("/bills?{}", query)).await?;
        let envelope = res.json::<ApiResponse<PageEnvelope<Bill>>>()?.data;
        Ok(envelope.into())
    }

    pub async fn get(&self, id: &str) -> ApiResult<Bill> {
        let res = self.api.get(&format!("/bills/{}", id)).await?;
        Ok(res.json::<ApiResponse<Bill>>()?.data)
    }

    pub async fn create(&self, input: &CreateBillInput) -> ApiResult<Bill> {
        let res = self.api.post("/bills", input).await?;
        Ok(res.json::<ApiResponse<Bill>>()?.data)
    }

    pub async fn update(&self, id: &str, input: &UpdateBillInput) -> ApiResult<Bill> {
        let res = self.api.put(&format!("/bills/{}", id), input).await?;
        Ok(res.json::<ApiResponse<Bill>>()?.data)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.api.delete(&format!("/bills/{}", id)).await?;
        Ok(())
    }

    /// 标记已支付；未指定日期时取调用时刻
    pub async fn pay(&self, id: &str, paid_date: Option<DateTime<Utc>>) -> ApiResult<Bill> {
        let body = PayBillRequest {
            paid_date: paid_date.unwrap_or_else(Utc::now),
        };
        let res = self.api.post(&format!("/bills/{}/pay", id), &body).await?;
        Ok(res.json::<ApiResponse<Bill>>()?.data)
    }

    pub async fn activities(&self, id: &str) -> ApiResult<Vec<BillActivity>> {
        let res = self.api.get(&format!("/bills/{}/activities", id)).await?;
        Ok(res.json::<ApiResponse<Vec<BillActivity>>>()?.data)
    }
}

#[cfg(test)]
mod tests {
    use billdash_shared::BillStatus;
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::api::{test_client, HttpMethod};

    fn bill_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "company_id": "c1",
            "user_id": "u1",
            "title": "Hosting",
            "amount": "42.50",
            "currency": "USD",
            "due_date": "2025-09-01T00:00:00Z",
            "status": "unpaid",
            "is_recurring": false,
            "created_at": "2025-08-01T00:00:00Z",
            "updated_at": "2025-08-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_builds_query_and_maps_pagination_envelope() {
        let (transport, api) = test_client("/bills");
        transport.mock_response(
            "http://api.test/api/bills?page=2&page_size=10&status=paid",
            200,
            json!({
                "data": {
                    "items": [bill_json("b1")],
                    "total_items": 42,
                    "page": 2,
                    "page_size": 10,
                    "total_pages": 5
                }
            }),
        );

        let filters = BillFilters {
            status: Some(BillStatus::Paid),
            search: None,
            page: 2,
            page_size: 10,
        };
        let result = BillService::new(api).list(&filters).await.unwrap();

        assert_eq!(
            transport.last_request().url,
            "http://api.test/api/bills?page=2&page_size=10&status=paid"
        );
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].id, "b1");
        assert_eq!(result.meta.current_page, 2);
        assert_eq!(result.meta.page_size, 10);
        assert_eq!(result.meta.total_items, 42);
        assert_eq!(result.meta.total_pages, 5);
    }

    #[tokio::test]
    async fn list_includes_search_before_status() {
        let (transport, api) = test_client("/bills");
        let url = "http://api.test/api/bills?page=1&page_size=10&search=hosting&status=unpaid";
        transport.mock_response(
            url,
            200,
            json!({
                "data": {"items": [], "total_items": 0, "page": 1, "page_size": 10, "total_pages": 0}
            }),
        );

        let filters = BillFilters {
            status: Some(BillStatus::Unpaid),
            search: Some("hosting".into()),
            ..Default::default()
        };
        BillService::new(api).list(&filters).await.unwrap();

        assert_eq!(transport.last_request().url, url);
    }

    #[tokio::test]
    async fn pay_without_date_sends_call_time() {
        let (transport, api) = test_client("/bills");
        transport.mock_response(
            "http://api.test/api/bills/b1/pay",
            200,
            json!({"data": bill_json("b1")}),
        );

        let before = Utc::now();
        BillService::new(api).pay("b1", None).await.unwrap();
        let after = Utc::now();

        let body = transport.last_request().body.unwrap();
        let sent: PayBillRequest = serde_json::from_str(&body).unwrap();
        assert!(sent.paid_date >= before && sent.paid_date <= after);
    }

    #[tokio::test]
    async fn pay_with_explicit_date_sends_it_unchanged() {
        let (transport, api) = test_client("/bills");
        transport.mock_response(
            "http://api.test/api/bills/b1/pay",
            200,
            json!({"data": bill_json("b1")}),
        );

        let date = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        BillService::new(api).pay("b1", Some(date)).await.unwrap();

        let body = transport.last_request().body.unwrap();
        let sent: PayBillRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(sent.paid_date, date);
    }

    #[tokio::test]
    async fn delete_issues_delete_on_detail_path() {
        let (transport, api) = test_client("/bills");
        transport.mock_response("http://api.test/api/bills/b9", 200, json!({"data": null}));

        BillService::new(api).delete("b9").await.unwrap();

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://api.test/api/bills/b9");
    }

    #[tokio::test]
    async fn activities_unwraps_list() {
        let (transport, api) = test_client("/bills");
        transport.mock_response(
            "http://api.test/api/bills/b1/activities",
            200,
            json!({
                "data": [{
                    "id": "a1",
                    "bill_id": "b1",
                    "action": "status_changed",
                    "details": "unpaid -> paid",
                    "created_at": "2025-08-02T10:00:00Z"
                }]
            }),
        );

        let activities = BillService::new(api).activities("b1").await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(
            activities[0].action,
            billdash_shared::ActivityAction::StatusChanged
        );
    }
}
