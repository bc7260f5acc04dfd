//! Orders repository.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use kore::{MenuItemSnapshot, OrderStatus};
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    auth::UserUuid,
    domain::{
        menu::models::MenuItemUuid,
        orders::models::{OrderItem, OrderUuid},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_FOR_UPDATE_SQL: &str = include_str!("sql/get_order_for_update.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const LIST_ORDERS_FOR_USER_SQL: &str = include_str!("sql/list_orders_for_user.sql");
const LIST_ALL_ORDERS_SQL: &str = include_str!("sql/list_all_orders.sql");
const LIST_ORDER_ITEMS_SQL: &str = include_str!("sql/list_order_items.sql");
const GET_MENU_ITEM_SNAPSHOT_SQL: &str = include_str!("sql/get_menu_item_snapshot.sql");
const GET_USER_CONTACT_SQL: &str = include_str!("sql/get_user_contact.sql");

/// Order header row; items are fetched separately.
#[derive(Debug, Clone)]
pub(crate) struct OrderRow {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub total: Decimal,
    pub status: OrderStatus,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: Timestamp,
}

/// The locked subset of an order read under `FOR UPDATE`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrderLockRow {
    pub user_uuid: UserUuid,
    pub status: OrderStatus,
}

/// An order item joined with the order it belongs to.
#[derive(Debug, Clone)]
pub(crate) struct OrderItemRow {
    pub order_uuid: OrderUuid,
    pub item: OrderItem,
}

/// Contact details used to address order notifications.
#[derive(Debug, Clone)]
pub(crate) struct UserContact {
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl UserContact {
    pub(crate) fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.username)
    }
}

/// New order header persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub total: Decimal,
    pub status: OrderStatus,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderRepository;

impl PgOrderRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn menu_item_snapshot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MenuItemUuid,
    ) -> Result<Option<MenuItemSnapshot>, sqlx::Error> {
        let row = query(GET_MENU_ITEM_SNAPSHOT_SQL)
            .bind(item.into_uuid())
            .fetch_optional(&mut **tx)
            .await?;

        row.map(|row| {
            Ok(MenuItemSnapshot {
                uuid: row.try_get("uuid")?,
                name: row.try_get("name")?,
                price: row.try_get("price")?,
            })
        })
        .transpose()
    }

    pub(crate) async fn user_contact(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Option<UserContact>, sqlx::Error> {
        query_as::<Postgres, UserContact>(GET_USER_CONTACT_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &OrderRecord,
    ) -> Result<Timestamp, sqlx::Error> {
        let created_at = query_scalar::<Postgres, SqlxTimestamp>(CREATE_ORDER_SQL)
            .bind(record.uuid.into_uuid())
            .bind(record.user_uuid.into_uuid())
            .bind(record.total)
            .bind(record.status.as_str())
            .bind(record.customer_name.as_deref())
            .bind(record.customer_phone.as_deref())
            .fetch_one(&mut **tx)
            .await?;

        Ok(created_at.to_jiff())
    }

    pub(crate) async fn create_order_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        item: &OrderItem,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ORDER_ITEM_SQL)
            .bind(order.into_uuid())
            .bind(item.menu_item_uuid.into_uuid())
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRow>, sqlx::Error> {
        query_as::<Postgres, OrderRow>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Read and lock an order's header so a concurrent transition
    /// cannot slip in between the guard check and the update.
    pub(crate) async fn get_order_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderLockRow>, sqlx::Error> {
        query_as::<Postgres, OrderLockRow>(GET_ORDER_FOR_UPDATE_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(status.as_str())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn list_orders_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderRow>, sqlx::Error> {
        query_as::<Postgres, OrderRow>(LIST_ORDERS_FOR_USER_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRow>, sqlx::Error> {
        query_as::<Postgres, OrderRow>(LIST_ALL_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<OrderItemRow>, sqlx::Error> {
        query_as::<Postgres, OrderItemRow>(LIST_ORDER_ITEMS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }
}

fn status_from_row(row: &PgRow) -> sqlx::Result<OrderStatus> {
    let status_str: String = row.try_get("status")?;

    status_str
        .parse::<OrderStatus>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for OrderRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get::<Uuid, _>("user_uuid")?),
            total: row.try_get("total")?,
            status: status_from_row(row)?,
            customer_name: row.try_get("customer_name")?,
            customer_phone: row.try_get("customer_phone")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLockRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get::<Uuid, _>("user_uuid")?),
            status: status_from_row(row)?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get::<Uuid, _>("order_uuid")?),
            item: OrderItem {
                menu_item_uuid: MenuItemUuid::from_uuid(row.try_get::<Uuid, _>("menu_item_uuid")?),
                name: row.try_get("name")?,
                price: row.try_get("price")?,
                quantity: row.try_get("quantity")?,
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for UserContact {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
        })
    }
}
