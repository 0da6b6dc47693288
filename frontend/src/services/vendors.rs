use billdash_shared::error::ApiResult;
use billdash_shared::protocol::ApiResponse;
use billdash_shared::{CreateVendorInput, UpdateVendorInput, Vendor};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct VendorService {
    api: ApiClient,
}

impl VendorService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Vendor>> {
        let res = self.api.get("/vendors").await?;
        Ok(res.json::<ApiResponse<Vec<Vendor>>>()?.data)
    }

    pub async fn get(&self, id: &str) -> ApiResult<Vendor> {
        let res = self.api.get(&format!("/vendors/{}", id)).await?;
        Ok(res.json::<ApiResponse<Vendor>>()?.data)
    }

    pub async fn create(&self, input: &CreateVendorInput) -> ApiResult<Vendor> {
        let res = self.api.post("/vendors", input).await?;
        Ok(res.json::<ApiResponse<Vendor>>()?.data)
    }

    pub async fn update(&self, id: &str, input: &UpdateVendorInput) -> ApiResult<Vendor> {
        let res = self.api.put(&format!("/vendors/{}", id), input).await?;
        Ok(res.json::<ApiResponse<Vendor>>()?.data)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.api.delete(&format!("/vendors/{}", id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::test_client;

    fn vendor_json(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "company_id": "c1",
            "name": name,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_unwraps_envelope() {
        let (transport, api) = test_client("/vendors");
        transport.mock_response(
            "http://api.test/api/vendors",
            200,
            json!({"data": [vendor_json("v1", "Acme"), vendor_json("v2", "Globex")]}),
        );

        let vendors = VendorService::new(api).list().await.unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(vendors[1].name, "Globex");
    }

    #[tokio::test]
    async fn create_posts_input_as_json() {
        let (transport, api) = test_client("/vendors");
        transport.mock_response(
            "http://api.test/api/vendors",
            201,
            json!({"data": vendor_json("v3", "Initech"), "message": "Vendor created"}),
        );

        let input = CreateVendorInput {
            name: "Initech".into(),
            ..Default::default()
        };
        let vendor = VendorService::new(api).create(&input).await.unwrap();

        assert_eq!(vendor.id, "v3");
        let body = transport.last_request().body.unwrap();
        assert_eq!(body, r#"{"name":"Initech"}"#);
    }
}
