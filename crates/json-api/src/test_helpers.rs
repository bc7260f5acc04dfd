//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use kore::{Category, OrderStatus};
use kore_app::{
    auth::{AuthTokens, AuthenticatedUser, MockAuthService, Role, User, UserUuid},
    context::AppContext,
    domain::{
        menu::{MockMenuService, models::MenuItem, models::MenuItemUuid},
        orders::{MockOrderService, models::Order, models::OrderItem, models::OrderUuid},
    },
};
use rust_decimal::dec;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());
pub(crate) const TEST_ADMIN_UUID: UserUuid = UserUuid::from_uuid(Uuid::from_u128(1));

pub(crate) fn test_customer() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: TEST_USER_UUID,
        email: "asha@example.com".to_string(),
        role: Role::Customer,
    }
}

pub(crate) fn test_admin() -> AuthenticatedUser {
    AuthenticatedUser {
        uuid: TEST_ADMIN_UUID,
        email: "admin@example.com".to_string(),
        role: Role::Admin,
    }
}

#[salvo::handler]
pub(crate) async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(test_customer());
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_current_user(test_admin());
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_user(uuid: UserUuid) -> User {
    User {
        uuid,
        username: "asha".to_string(),
        email: "asha@example.com".to_string(),
        role: Role::Customer,
        name: Some("Asha Rao".to_string()),
        phone: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_tokens(uuid: UserUuid) -> AuthTokens {
    AuthTokens {
        token: "token-123".to_string(),
        user: make_user(uuid),
    }
}

pub(crate) fn make_menu_item(uuid: MenuItemUuid) -> MenuItem {
    MenuItem {
        uuid,
        name: "Grilled Salmon".to_string(),
        description: "Fresh Atlantic salmon with lemon butter sauce".to_string(),
        price: dec!(24.99),
        category: Category::MainCourse,
        is_vegetarian: false,
        image_url: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, user: UserUuid, status: OrderStatus) -> Order {
    Order {
        uuid,
        user_uuid: user,
        items: vec![OrderItem {
            menu_item_uuid: MenuItemUuid::new(),
            name: "Grilled Salmon".to_string(),
            price: dec!(24.99),
            quantity: 1,
        }],
        total: dec!(24.99),
        status,
        customer_name: Some("Asha Rao".to_string()),
        customer_phone: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_register().never();
    auth.expect_login().never();
    auth.expect_request_otp().never();
    auth.expect_verify_otp().never();
    auth.expect_authenticate().never();
    auth.expect_profile().never();
    auth.expect_update_profile().never();
    auth.expect_delete_account().never();

    auth
}

fn strict_menu_mock() -> MockMenuService {
    let mut menu = MockMenuService::new();

    menu.expect_list().never();
    menu.expect_get().never();
    menu.expect_categories().never();
    menu.expect_create().never();
    menu.expect_update().never();
    menu.expect_delete().never();
    menu.expect_store_image().never();
    menu.expect_image().never();

    menu
}

fn strict_orders_mock() -> MockOrderService {
    let mut orders = MockOrderService::new();

    orders.expect_create().never();
    orders.expect_get().never();
    orders.expect_list_for_user().never();
    orders.expect_list_all().never();
    orders.expect_update_status().never();
    orders.expect_cancel().never();

    orders
}

fn make_state(auth: MockAuthService, menu: MockMenuService, orders: MockOrderService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        auth: Arc::new(auth),
        menu: Arc::new(menu),
        orders: Arc::new(orders),
    }))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(auth, strict_menu_mock(), strict_orders_mock())
}

pub(crate) fn state_with_menu(menu: MockMenuService) -> Arc<State> {
    make_state(strict_auth_mock(), menu, strict_orders_mock())
}

pub(crate) fn state_with_orders(orders: MockOrderService) -> Arc<State> {
    make_state(strict_auth_mock(), strict_menu_mock(), orders)
}

pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(route),
    )
}

pub(crate) fn me_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(inject_customer)
            .push(route),
    )
}

pub(crate) fn menu_service(menu: MockMenuService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_menu(menu)))
            .push(route),
    )
}

pub(crate) fn menu_admin_service(menu: MockMenuService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_menu(menu)))
            .hoop(inject_admin)
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrderService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_customer)
            .push(route),
    )
}

pub(crate) fn orders_admin_service(orders: MockOrderService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_admin)
            .push(route),
    )
}
