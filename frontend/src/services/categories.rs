use billdash_shared::error::ApiResult;
use billdash_shared::protocol::ApiResponse;
use billdash_shared::{Category, CreateCategoryInput, UpdateCategoryInput};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct CategoryService {
    api: ApiClient,
}

impl CategoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        let res = self.api.get("/categories").await?;
        Ok(res.json::<ApiResponse<Vec<Category>>>()?.data)
    }

    pub async fn get(&self, id: &str) -> ApiResult<Category> {
        let res = self.api.get(&format!("/categories/{}", id)).await?;
        Ok(res.json::<ApiResponse<Category>>()?.data)
    }

    pub async fn create(&self, input: &CreateCategoryInput) -> ApiResult<Category> {
        let res = self.api.post("/categories", input).await?;
        Ok(res.json::<ApiResponse<Category>>()?.data)
    }

    pub async fn update(&self, id: &str, input: &UpdateCategoryInput) -> ApiResult<Category> {
        let res = self.api.put(&format!("/categories/{}", id), input).await?;
        Ok(res.json::<ApiResponse<Category>>()?.data)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.api.delete(&format!("/categories/{}", id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::test_client;

    #[tokio::test]
    async fn get_hits_detail_path() {
        let (transport, api) = test_client("/categories");
        transport.mock_response(
            "http://api.test/api/categories/cat1",
            200,
            json!({"data": {
                "id": "cat1",
                "company_id": "c1",
                "name": "Utilities",
                "color": "#00aa55",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-01T00:00:00Z"
            }}),
        );

        let category = CategoryService::new(api).get("cat1").await.unwrap();
        assert_eq!(category.name, "Utilities");
        assert_eq!(category.color.as_deref(), Some("#00aa55"));
        assert_eq!(
            transport.last_request().url,
            "http://api.test/api/categories/cat1"
        );
    }
}
