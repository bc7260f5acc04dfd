//! Register Handler

use std::sync::Arc;

use kore_app::auth::NewUser;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AuthResponse, into_api_error},
    envelope::Envelope,
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Registration Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        NewUser {
            username: request.username,
            email: request.email,
            password: request.password,
            name: request.name,
            phone: request.phone,
        }
    }
}

/// Register Handler
///
/// Creates a customer account and logs it in.
#[endpoint(
    tags("auth"),
    summary = "Register",
    responses(
        (status_code = StatusCode::CREATED, description = "Account created"),
        (status_code = StatusCode::CONFLICT, description = "User already exists"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<AuthResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tokens = state
        .app
        .auth
        .register(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(Envelope::data(tokens.into())))
}

#[cfg(test)]
mod tests {
    use kore_app::auth::{AuthServiceError, MockAuthService};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, auth_service, make_tokens};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        auth_service(auth, Router::with_path("auth/register").post(handler))
    }

    #[tokio::test]
    async fn test_register_returns_201_with_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register()
            .once()
            .withf(|new_user| new_user.username == "asha" && new_user.email == "asha@example.com")
            .return_once(|_| Ok(make_tokens(TEST_USER_UUID)));

        let mut res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "username": "asha",
                "email": "asha@example.com",
                "password": "hunter2hunter2",
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Envelope<AuthResponse> = res.take_json().await?;

        assert!(body.success);
        assert_eq!(
            body.data.map(|data| data.token).as_deref(),
            Some("token-123")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_register_duplicate_returns_409() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_register()
            .once()
            .return_once(|_| Err(AuthServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/auth/register")
            .json(&json!({
                "username": "asha",
                "email": "asha@example.com",
                "password": "hunter2hunter2",
            }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
