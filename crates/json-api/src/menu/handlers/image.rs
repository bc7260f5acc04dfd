//! Get Menu Image Handler

use std::sync::Arc;

use salvo::{http::header::CONTENT_TYPE, prelude::*};
use uuid::Uuid;

use crate::{errors::ApiError, extensions::*, menu::into_api_error, state::State};

/// Serves a stored dish image as raw bytes.
///
/// Plain handler rather than an OpenAPI endpoint; the response is the
/// image body, not a JSON envelope.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(uuid) = req.param::<Uuid>("image") else {
        ApiError::bad_request("Invalid image id").render_to(res);

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            error.render_to(res);

            return;
        }
    };

    let image = match state.app.menu.image(uuid.into()).await {
        Ok(image) => image,
        Err(error) => {
            into_api_error(error).render_to(res);

            return;
        }
    };

    let _unused = res.add_header(CONTENT_TYPE, image.content_type, true);
    let _unused = res.write_body(image.data);
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use kore_app::domain::menu::{
        MenuServiceError, MockMenuService,
        models::{MenuImage, MenuImageUuid},
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::menu_service;

    use super::*;

    fn make_service(menu: MockMenuService) -> Service {
        menu_service(menu, Router::with_path("menu/image/{image}").get(handler))
    }

    #[tokio::test]
    async fn test_image_is_served_with_its_content_type() -> TestResult {
        let uuid = MenuImageUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_image()
            .once()
            .withf(move |image| *image == uuid)
            .return_once(move |_| {
                Ok(MenuImage {
                    uuid,
                    content_type: "image/png".to_string(),
                    data: b"not-really-a-png".to_vec(),
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::get(format!("http://example.com/menu/image/{uuid}"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            res.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("image/png")
        );
        assert_eq!(
            res.take_bytes(None).await?.to_vec(),
            b"not-really-a-png".to_vec()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_image_returns_404() -> TestResult {
        let uuid = MenuImageUuid::new();

        let mut menu = MockMenuService::new();

        menu.expect_image()
            .once()
            .return_once(|_| Err(MenuServiceError::ImageNotFound));

        let res = TestClient::get(format!("http://example.com/menu/image/{uuid}"))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
