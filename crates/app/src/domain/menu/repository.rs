//! Menu repository.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use kore::Category;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::menu::models::{
    MenuFilter, MenuImage, MenuImageUuid, MenuItem, MenuItemUpdate, MenuItemUuid, NewMenuImage,
    NewMenuItem,
};

const LIST_MENU_ITEMS_SQL: &str = include_str!("sql/list_menu_items.sql");
const GET_MENU_ITEM_SQL: &str = include_str!("sql/get_menu_item.sql");
const CREATE_MENU_ITEM_SQL: &str = include_str!("sql/create_menu_item.sql");
const UPDATE_MENU_ITEM_SQL: &str = include_str!("sql/update_menu_item.sql");
const DELETE_MENU_ITEM_SQL: &str = include_str!("sql/delete_menu_item.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const CREATE_MENU_IMAGE_SQL: &str = include_str!("sql/create_menu_image.sql");
const GET_MENU_IMAGE_SQL: &str = include_str!("sql/get_menu_image.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMenuRepository;

impl PgMenuRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filter: MenuFilter,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        query_as::<Postgres, MenuItem>(LIST_MENU_ITEMS_SQL)
            .bind(filter.category.map(Category::as_str))
            .bind(filter.vegetarian_only)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MenuItemUuid,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        query_as::<Postgres, MenuItem>(GET_MENU_ITEM_SQL)
            .bind(item.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: MenuItemUuid,
        item: &NewMenuItem,
    ) -> Result<MenuItem, sqlx::Error> {
        query_as::<Postgres, MenuItem>(CREATE_MENU_ITEM_SQL)
            .bind(uuid.into_uuid())
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(item.category.as_str())
            .bind(item.is_vegetarian)
            .bind(item.image_url.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MenuItemUuid,
        update: &MenuItemUpdate,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        query_as::<Postgres, MenuItem>(UPDATE_MENU_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.description.as_deref())
            .bind(update.price)
            .bind(update.category.map(Category::as_str))
            .bind(update.is_vegetarian)
            .bind(update.image_url.as_deref())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        item: MenuItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_MENU_ITEM_SQL)
            .bind(item.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let names = query_scalar::<Postgres, String>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await?;

        names
            .into_iter()
            .map(|name| {
                name.parse::<Category>()
                    .map_err(|e| sqlx::Error::ColumnDecode {
                        index: "category".to_string(),
                        source: Box::new(e),
                    })
            })
            .collect()
    }

    pub(crate) async fn create_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: MenuImageUuid,
        image: &NewMenuImage,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_MENU_IMAGE_SQL)
            .bind(uuid.into_uuid())
            .bind(&image.content_type)
            .bind(&image.data)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn get_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        image: MenuImageUuid,
    ) -> Result<Option<MenuImage>, sqlx::Error> {
        query_as::<Postgres, MenuImage>(GET_MENU_IMAGE_SQL)
            .bind(image.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for MenuItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category_str: String = row.try_get("category")?;

        let category = category_str
            .parse::<Category>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "category".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: MenuItemUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            category,
            is_vegetarian: row.try_get("is_vegetarian")?,
            image_url: row.try_get("image_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for MenuImage {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: MenuImageUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            content_type: row.try_get("content_type")?,
            data: row.try_get("data")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
