//! KORE JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    catcher::Catcher,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kore_app::{
    auth::TokenCodec,
    context::AppContext,
    database::{self, Db},
    mailer::{HttpMailer, MailRelayConfig},
};

use crate::{config::ServerConfig, errors::ErrorBody, state::State};

mod auth;
mod config;
mod envelope;
mod errors;
mod extensions;
mod healthcheck;
mod menu;
mod orders;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Both spellings are live in the wild; the singular came first and
/// shipped clients still use it.
const ORDER_ROUTE_ALIASES: [&str; 2] = ["order", "orders"];

/// KORE JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let pool = match database::connect(&config.database.database_url).await {
        Ok(pool) => pool,
        Err(connect_error) => {
            error!("failed to connect to database: {connect_error}");

            process::exit(1);
        }
    };

    let db = Db::new(pool);

    let tokens = TokenCodec::new(&config.auth.jwt_secret, config.auth.token_ttl_seconds);

    let mailer = Arc::new(HttpMailer::new(MailRelayConfig {
        addr: config.mail.relay_addr,
        token: config.mail.relay_token,
        from: config.mail.from,
    }));

    let app = AppContext::new(&db, tokens, mailer);

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(auth_router())
        .push(menu_router());

    for path in ORDER_ROUTE_ALIASES {
        router = router.push(orders_router(path));
    }

    let doc = OpenApi::new("KORE API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).catcher(Catcher::default().hoop(error_envelope));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}

fn auth_router() -> Router {
    Router::with_path("auth")
        .push(Router::with_path("register").post(auth::handlers::register::handler))
        .push(Router::with_path("login").post(auth::handlers::login::handler))
        .push(Router::with_path("request-otp").post(auth::handlers::request_otp::handler))
        .push(Router::with_path("verify-otp").post(auth::handlers::verify_otp::handler))
        .push(
            Router::with_path("me")
                .hoop(auth::middleware::require_auth)
                .get(auth::handlers::me::get::handler)
                .put(auth::handlers::me::update::handler)
                .delete(auth::handlers::me::delete::handler),
        )
}

fn menu_router() -> Router {
    Router::with_path("menu")
        .get(menu::handlers::index::handler)
        .push(Router::with_path("categories").get(menu::handlers::categories::handler))
        .push(Router::with_path("image/{image}").get(menu::handlers::image::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::require_auth)
                .hoop(auth::middleware::require_admin)
                .post(menu::handlers::create::handler)
                .push(Router::with_path("upload").post(menu::handlers::upload::handler)),
        )
        // Wildcard last so the literal segments above win.
        .push(
            Router::with_path("{item}")
                .get(menu::handlers::get::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::require_auth)
                        .hoop(auth::middleware::require_admin)
                        .put(menu::handlers::update::handler)
                        .delete(menu::handlers::delete::handler),
                ),
        )
}

fn orders_router(path: &str) -> Router {
    Router::with_path(path)
        .hoop(auth::middleware::require_auth)
        .post(orders::handlers::create::handler)
        .push(Router::with_path("me").get(orders::handlers::index_mine::handler))
        .push(
            Router::with_path("all")
                .hoop(auth::middleware::require_admin)
                .get(orders::handlers::all::handler),
        )
        .push(Router::with_path("{order}/cancel").patch(orders::handlers::cancel::handler))
        .push(
            Router::with_path("{order}")
                .get(orders::handlers::get::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::require_admin)
                        .patch(orders::handlers::update_status::handler),
                ),
        )
}

/// Wraps otherwise-bare error responses, e.g. unmatched routes, in the
/// JSON envelope every other response uses.
#[handler]
async fn error_envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    if let Some(status) = res.status_code
        && (status.is_client_error() || status.is_server_error())
    {
        res.render(Json(ErrorBody {
            success: false,
            error: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }));

        ctrl.skip_rest();
    }
}
