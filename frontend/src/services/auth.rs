use billdash_shared::error::ApiResult;
use billdash_shared::protocol::ApiResponse;
use billdash_shared::{AuthResponse, LoginInput, RegisterInput, User};

use crate::api::ApiClient;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn register(&self, input: &RegisterInput) -> ApiResult<AuthResponse> {
        let res = self.api.post("/auth/register", input).await?;
        Ok(res.json::<ApiResponse<AuthResponse>>()?.data)
    }

    pub async fn login(&self, input: &LoginInput) -> ApiResult<AuthResponse> {
        let res = self.api.post("/auth/login", input).await?;
        Ok(res.json::<ApiResponse<AuthResponse>>()?.data)
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.api.post_empty("/auth/logout").await?;
        Ok(())
    }

    pub async fn me(&self) -> ApiResult<User> {
        let res = self.api.get("/auth/me").await?;
        Ok(res.json::<ApiResponse<User>>()?.data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::api::test_client;

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u1",
            "company_id": "c1",
            "name": "Ada",
            "email": "ada@acme.io",
            "role": "admin",
            "email_verified": true,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_unwraps_auth_response() {
        let (transport, api) = test_client("/login");
        transport.mock_response(
            "http://api.test/api/auth/login",
            200,
            json!({"data": {"token": "jwt-1", "user": user_json()}}),
        );

        let service = AuthService::new(api);
        let auth = service
            .login(&LoginInput {
                email: "ada@acme.io".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(auth.token, "jwt-1");
        assert_eq!(auth.user.email, "ada@acme.io");
    }

    #[tokio::test]
    async fn logout_posts_without_body() {
        let (transport, api) = test_client("/");
        transport.mock_response("http://api.test/api/auth/logout", 200, json!({"data": null}));

        AuthService::new(api).logout().await.unwrap();

        let req = transport.last_request();
        assert_eq!(req.url, "http://api.test/api/auth/logout");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn me_returns_current_user() {
        let (transport, api) = test_client("/");
        transport.mock_response("http://api.test/api/auth/me", 200, json!({"data": user_json()}));

        let user = AuthService::new(api).me().await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, billdash_shared::UserRole::Admin);
    }
}
