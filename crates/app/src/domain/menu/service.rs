//! Menu service.

use async_trait::async_trait;
use kore::Category;
use mockall::automock;

use crate::{
    database::Db,
    domain::menu::{
        errors::MenuServiceError,
        models::{
            MenuFilter, MenuImage, MenuImageUuid, MenuItem, MenuItemUpdate, MenuItemUuid,
            NewMenuImage, NewMenuItem,
        },
        repository::PgMenuRepository,
    },
};

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// List dishes, optionally narrowed by category or vegetarian flag.
    async fn list(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, MenuServiceError>;

    /// Fetch a single dish.
    async fn get(&self, item: MenuItemUuid) -> Result<MenuItem, MenuServiceError>;

    /// Distinct categories currently present on the menu.
    async fn categories(&self) -> Result<Vec<Category>, MenuServiceError>;

    /// Add a dish to the menu.
    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, MenuServiceError>;

    /// Apply a partial update to a dish.
    async fn update(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuServiceError>;

    /// Remove a dish from the menu.
    async fn delete(&self, item: MenuItemUuid) -> Result<(), MenuServiceError>;

    /// Store an uploaded dish image and return its id.
    async fn store_image(&self, image: NewMenuImage) -> Result<MenuImageUuid, MenuServiceError>;

    /// Fetch a stored dish image.
    async fn image(&self, image: MenuImageUuid) -> Result<MenuImage, MenuServiceError>;
}

/// Postgres-backed [`MenuService`].
pub struct PgMenuService {
    db: Db,
    repository: PgMenuRepository,
}

impl PgMenuService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMenuRepository::new(),
        }
    }
}

#[async_trait]
impl MenuService for PgMenuService {
    async fn list(&self, filter: MenuFilter) -> Result<Vec<MenuItem>, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let items = self.repository.list(&mut tx, filter).await?;
        tx.commit().await?;

        Ok(items)
    }

    async fn get(&self, item: MenuItemUuid) -> Result<MenuItem, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let found = self.repository.get(&mut tx, item).await?;
        tx.commit().await?;

        found.ok_or(MenuServiceError::NotFound)
    }

    async fn categories(&self) -> Result<Vec<Category>, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let categories = self.repository.list_categories(&mut tx).await?;
        tx.commit().await?;

        Ok(categories)
    }

    async fn create(&self, item: NewMenuItem) -> Result<MenuItem, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let created = self
            .repository
            .create(&mut tx, MenuItemUuid::new(), &item)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn update(
        &self,
        item: MenuItemUuid,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let updated = self.repository.update(&mut tx, item, &update).await?;
        tx.commit().await?;

        updated.ok_or(MenuServiceError::NotFound)
    }

    async fn delete(&self, item: MenuItemUuid) -> Result<(), MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let rows_affected = self.repository.delete(&mut tx, item).await?;
        tx.commit().await?;

        if rows_affected == 0 {
            return Err(MenuServiceError::NotFound);
        }

        Ok(())
    }

    async fn store_image(&self, image: NewMenuImage) -> Result<MenuImageUuid, MenuServiceError> {
        let uuid = MenuImageUuid::new();

        let mut tx = self.db.begin().await?;
        self.repository.create_image(&mut tx, uuid, &image).await?;
        tx.commit().await?;

        Ok(uuid)
    }

    async fn image(&self, image: MenuImageUuid) -> Result<MenuImage, MenuServiceError> {
        let mut tx = self.db.begin().await?;
        let found = self.repository.get_image(&mut tx, image).await?;
        tx.commit().await?;

        found.ok_or(MenuServiceError::ImageNotFound)
    }
}
