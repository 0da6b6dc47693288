use billdash_shared::error::ApiResult;
use billdash_shared::protocol::ApiResponse;
use billdash_shared::{ChangePasswordInput, UpdateProfileInput, User};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn profile(&self) -> ApiResult<User> {
        let res = self.api.get("/users/profile").await?;
        Ok(res.json::<ApiResponse<User>>()?.data)
    }

    pub async fn update_profile(&self, input: &UpdateProfileInput) -> ApiResult<User> {
        let res = self.api.put("/users/profile", input).await?;
        Ok(res.json::<ApiResponse<User>>()?.data)
    }

    pub async fn change_password(&self, input: &ChangePasswordInput) -> ApiResult<()> {
        self.api.put("/users/password", input).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::{test_client, HttpMethod};

    #[tokio::test]
    async fn update_profile_puts_to_profile_path() {
        let (transport, api) = test_client("/settings");
        transport.mock_response(
            "http://api.test/api/users/profile",
            200,
            json!({"data": {
                "id": "u1",
                "company_id": "c1",
                "name": "Ada L.",
                "email": "ada@acme.io",
                "role": "member",
                "email_verified": true,
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-06-01T00:00:00Z"
            }}),
        );

        let input = UpdateProfileInput {
            name: Some("Ada L.".into()),
            avatar_url: None,
        };
        let user = UserService::new(api).update_profile(&input).await.unwrap();

        assert_eq!(user.name, "Ada L.");
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"Ada L."}"#));
    }

    #[tokio::test]
    async fn change_password_is_status_only() {
        let (transport, api) = test_client("/settings");
        transport.mock_response(
            "http://api.test/api/users/password",
            200,
            json!({"message": "Password updated", "data": null}),
        );

        let input = ChangePasswordInput {
            current_password: "old".into(),
            new_password: "new".into(),
        };
        UserService::new(api).change_password(&input).await.unwrap();

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://api.test/api/users/password");
    }
}
