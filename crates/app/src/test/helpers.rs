//! Shared fixtures for service-level tests.

use kore::Category;
use rust_decimal::Decimal;

use crate::{
    auth::{AuthService, AuthServiceError, AuthTokens, NewUser},
    domain::menu::{
        MenuService, MenuServiceError,
        models::{MenuItem, NewMenuItem},
    },
    test::TestContext,
};

pub(crate) async fn register_user(
    ctx: &TestContext,
    username: &str,
    email: &str,
) -> Result<AuthTokens, AuthServiceError> {
    ctx.auth
        .register(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "correct horse battery staple".to_string(),
            name: None,
            phone: None,
        })
        .await
}

pub(crate) async fn create_menu_item(
    ctx: &TestContext,
    name: &str,
    price: Decimal,
) -> Result<MenuItem, MenuServiceError> {
    ctx.menu
        .create(NewMenuItem {
            name: name.to_string(),
            description: format!("{name}, fresh from the kitchen"),
            price,
            category: Category::MainCourse,
            is_vegetarian: true,
            image_url: None,
        })
        .await
}
