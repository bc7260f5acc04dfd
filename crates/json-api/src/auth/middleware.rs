//! Auth middleware.

use std::sync::Arc;

use kore_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use crate::{errors::ApiError, extensions::*, state::State};

/// Establish the caller's identity from the `Authorization` header.
#[salvo::handler]
pub(crate) async fn require_auth(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        ApiError::unauthorized("Missing or invalid Authorization header").render_to(res);

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            ApiError::internal().render_to(res);

            return;
        }
    };

    let user = match state.app.auth.authenticate(token).await {
        Ok(user) => user,
        Err(AuthServiceError::InvalidToken(source)) => {
            debug!("rejected bearer token: {source}");

            ApiError::unauthorized("Invalid or expired token").render_to(res);

            return;
        }
        Err(error) => {
            error!("failed to authenticate bearer token: {error}");

            ApiError::internal().render_to(res);

            return;
        }
    };

    depot.insert_current_user(user);

    ctrl.call_next(req, depot, res).await;
}

/// Reject callers whose role claim is not `admin`.
///
/// Must run after [`require_auth`].
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    match depot.current_user_or_401() {
        Ok(user) if user.is_admin() => {
            ctrl.call_next(req, depot, res).await;
        }
        Ok(_customer) => {
            ApiError::forbidden("Admin access required").render_to(res);
        }
        Err(error) => {
            error.render_to(res);
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
