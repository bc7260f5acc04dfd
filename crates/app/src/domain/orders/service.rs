//! Order service.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use kore::{Actor, OrderLine, OrderStatus, check_transition, order_total};
use mockall::automock;
use tracing::warn;

use crate::{
    auth::{AuthenticatedUser, UserUuid},
    database::Db,
    domain::orders::{
        errors::OrderServiceError,
        models::{NewOrder, Order, OrderItem, OrderUuid},
        repository::{OrderItemRow, OrderRecord, OrderRow, PgOrderRepository},
    },
    mailer::{Mailer, order_confirmation_email},
};

#[automock]
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Place an order for `user`, pricing each line from the current
    /// menu.
    async fn create(&self, user: UserUuid, new_order: NewOrder)
    -> Result<Order, OrderServiceError>;

    /// Fetch an order; owners see their own, admins see any.
    async fn get(
        &self,
        requester: AuthenticatedUser,
        order: OrderUuid,
    ) -> Result<Order, OrderServiceError>;

    /// The requester's orders, newest first.
    async fn list_for_user(&self, user: UserUuid) -> Result<Vec<Order>, OrderServiceError>;

    /// Every order in the system, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError>;

    /// Move an order to `to` with admin authority.
    async fn update_status(
        &self,
        order: OrderUuid,
        to: OrderStatus,
    ) -> Result<Order, OrderServiceError>;

    /// Cancel one of the owner's own orders.
    async fn cancel(&self, owner: UserUuid, order: OrderUuid) -> Result<Order, OrderServiceError>;
}

/// Postgres-backed [`OrderService`].
pub struct PgOrderService {
    db: Db,
    repository: PgOrderRepository,
    mailer: Arc<dyn Mailer>,
}

impl PgOrderService {
    #[must_use]
    pub fn new(db: Db, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db,
            repository: PgOrderRepository::new(),
            mailer,
        }
    }

    async fn load_order(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        order: OrderUuid,
    ) -> Result<Order, OrderServiceError> {
        let Some(row) = self.repository.get_order(tx, order).await? else {
            return Err(OrderServiceError::NotFound);
        };

        let item_rows = self
            .repository
            .list_order_items(tx, &[order.into_uuid()])
            .await?;

        let items = item_rows.into_iter().map(|row| row.item).collect();

        Ok(order_from_row(row, items))
    }
}

#[async_trait]
impl OrderService for PgOrderService {
    async fn create(
        &self,
        user: UserUuid,
        new_order: NewOrder,
    ) -> Result<Order, OrderServiceError> {
        if new_order.items.is_empty() {
            return Err(OrderServiceError::EmptyOrder);
        }

        let mut tx = self.db.begin().await?;

        let Some(contact) = self.repository.user_contact(&mut tx, user).await? else {
            return Err(OrderServiceError::UserNotFound);
        };

        let mut lines = Vec::with_capacity(new_order.items.len());
        let mut items = Vec::with_capacity(new_order.items.len());

        for requested in &new_order.items {
            let Some(snapshot) = self
                .repository
                .menu_item_snapshot(&mut tx, requested.menu_item_uuid)
                .await?
            else {
                return Err(OrderServiceError::UnknownMenuItem(requested.menu_item_uuid));
            };

            let quantity = u32::try_from(requested.quantity)
                .ok()
                .filter(|quantity| *quantity > 0)
                .ok_or_else(|| OrderServiceError::InvalidQuantity {
                    item: snapshot.name.clone(),
                })?;

            items.push(OrderItem {
                menu_item_uuid: requested.menu_item_uuid,
                name: snapshot.name.clone(),
                price: snapshot.price,
                quantity: requested.quantity,
            });

            lines.push(OrderLine {
                item: snapshot,
                quantity,
            });
        }

        let total = order_total(&lines);

        let record = OrderRecord {
            uuid: OrderUuid::new(),
            user_uuid: user,
            total,
            status: OrderStatus::Pending,
            customer_name: new_order.customer_name.or_else(|| contact.name.clone()),
            customer_phone: new_order.customer_phone.or_else(|| contact.phone.clone()),
        };

        let created_at = self.repository.create_order(&mut tx, &record).await?;

        for item in &items {
            self.repository
                .create_order_item(&mut tx, record.uuid, item)
                .await?;
        }

        tx.commit().await?;

        let order = Order {
            uuid: record.uuid,
            user_uuid: user,
            items,
            total,
            status: OrderStatus::Pending,
            customer_name: record.customer_name,
            customer_phone: record.customer_phone,
            created_at,
        };

        let recipient_name = order
            .customer_name
            .as_deref()
            .unwrap_or_else(|| contact.display_name())
            .to_string();

        let message = order_confirmation_email(&contact.email, &recipient_name, &order);
        let mailer = Arc::clone(&self.mailer);
        let order_uuid = order.uuid;

        // Confirmation mail is best effort; the order stands either way.
        tokio::spawn(async move {
            if let Err(error) = mailer.send(&message).await {
                warn!(order = %order_uuid, %error, "failed to deliver order confirmation");
            }
        });

        Ok(order)
    }

    async fn get(
        &self,
        requester: AuthenticatedUser,
        order: OrderUuid,
    ) -> Result<Order, OrderServiceError> {
        let mut tx = self.db.begin().await?;
        let loaded = self.load_order(&mut tx, order).await?;
        tx.commit().await?;

        if loaded.user_uuid != requester.uuid && !requester.is_admin() {
            return Err(OrderServiceError::Forbidden);
        }

        Ok(loaded)
    }

    async fn list_for_user(&self, user: UserUuid) -> Result<Vec<Order>, OrderServiceError> {
        let mut tx = self.db.begin().await?;
        let rows = self.repository.list_orders_for_user(&mut tx, user).await?;
        let orders = self.attach_items(&mut tx, rows).await?;
        tx.commit().await?;

        Ok(orders)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderServiceError> {
        let mut tx = self.db.begin().await?;
        let rows = self.repository.list_all_orders(&mut tx).await?;
        let orders = self.attach_items(&mut tx, rows).await?;
        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        to: OrderStatus,
    ) -> Result<Order, OrderServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(lock) = self.repository.get_order_for_update(&mut tx, order).await? else {
            return Err(OrderServiceError::NotFound);
        };

        check_transition(Actor::Admin, lock.status, to)?;

        self.repository
            .update_order_status(&mut tx, order, to)
            .await?;

        let updated = self.load_order(&mut tx, order).await?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn cancel(&self, owner: UserUuid, order: OrderUuid) -> Result<Order, OrderServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(lock) = self.repository.get_order_for_update(&mut tx, order).await? else {
            return Err(OrderServiceError::NotFound);
        };

        if lock.user_uuid != owner {
            return Err(OrderServiceError::Forbidden);
        }

        check_transition(Actor::Owner, lock.status, OrderStatus::Cancelled)?;

        self.repository
            .update_order_status(&mut tx, order, OrderStatus::Cancelled)
            .await?;

        let updated = self.load_order(&mut tx, order).await?;
        tx.commit().await?;

        Ok(updated)
    }
}

impl PgOrderService {
    async fn attach_items(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        rows: Vec<OrderRow>,
    ) -> Result<Vec<Order>, OrderServiceError> {
        let uuids: Vec<uuid::Uuid> = rows.iter().map(|row| row.uuid.into_uuid()).collect();

        let item_rows = self.repository.list_order_items(tx, &uuids).await?;

        let mut items_by_order: HashMap<OrderUuid, Vec<OrderItem>> = HashMap::new();

        for OrderItemRow { order_uuid, item } in item_rows {
            items_by_order.entry(order_uuid).or_default().push(item);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.uuid).unwrap_or_default();
                order_from_row(row, items)
            })
            .collect())
    }
}

fn order_from_row(row: OrderRow, items: Vec<OrderItem>) -> Order {
    Order {
        uuid: row.uuid,
        user_uuid: row.user_uuid,
        items,
        total: row.total,
        status: row.status,
        customer_name: row.customer_name,
        customer_phone: row.customer_phone,
        created_at: row.created_at,
    }
}
