//! Upload Menu Image Handler

use std::sync::Arc;

use kore_app::domain::menu::models::NewMenuImage;
use salvo::{http::header::CONTENT_TYPE, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    envelope::Envelope, errors::ApiError, extensions::*, menu::into_api_error, state::State,
};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Uploaded Image Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageUploadResponse {
    /// The unique identifier of the stored image
    pub uuid: Uuid,

    /// Path the image can be fetched from
    pub url: String,
}

/// Upload Menu Image Handler
///
/// Accepts a multipart form with an `image` part and stores it. Admin
/// only. The returned URL can be set as a dish's `image_url`.
#[endpoint(
    tags("menu"),
    summary = "Upload a menu image",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing `image` part"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Envelope<ImageUploadResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(file) = req.file("image").await else {
        return Err(ApiError::bad_request("Missing `image` part"));
    };

    let content_type = file
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string();

    let data = tokio::fs::read(file.path())
        .await
        .or_500("failed to read uploaded image")?;

    let uuid = state
        .app
        .menu
        .store_image(NewMenuImage { content_type, data })
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(Envelope::data(ImageUploadResponse {
        uuid: uuid.into(),
        url: format!("/menu/image/{uuid}"),
    })))
}

#[cfg(test)]
mod tests {
    use kore_app::domain::menu::{MockMenuService, models::MenuImageUuid};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::menu_admin_service;

    use super::*;

    const BOUNDARY: &str = "kore-test-boundary";

    fn make_service(menu: MockMenuService) -> Service {
        menu_admin_service(menu, Router::with_path("menu/upload").post(handler))
    }

    fn multipart_body(part_name: &str) -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{part_name}\"; filename=\"dish.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             not-really-a-png\r\n\
             --{BOUNDARY}--\r\n"
        )
        .into_bytes()
    }

    #[tokio::test]
    async fn test_upload_stores_image_and_returns_url() -> TestResult {
        let uuid = MenuImageUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_store_image()
            .once()
            .withf(|image| image.content_type == "image/png" && image.data == b"not-really-a-png")
            .return_once(move |_| Ok(uuid));

        let mut res = TestClient::post("http://example.com/menu/upload")
            .add_header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(multipart_body("image"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: Envelope<ImageUploadResponse> = res.take_json().await?;
        let data = body.data.ok_or("missing data")?;

        assert_eq!(data.url, format!("/menu/image/{uuid}"));

        Ok(())
    }

    #[tokio::test]
    async fn test_upload_without_image_part_returns_400() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_store_image().never();

        let res = TestClient::post("http://example.com/menu/upload")
            .add_header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
                true,
            )
            .body(multipart_body("attachment"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
