//! Menu data models.

use jiff::Timestamp;
use kore::Category;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Menu item UUID
pub type MenuItemUuid = TypedUuid<MenuItem>;

/// Menu image UUID
pub type MenuImageUuid = TypedUuid<MenuImage>;

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub uuid: MenuItemUuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub is_vegetarian: bool,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub is_vegetarian: bool,
    pub image_url: Option<String>,
}

/// Partial update of a dish; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<Category>,
    pub is_vegetarian: Option<bool>,
    pub image_url: Option<String>,
}

/// Catalog listing filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuFilter {
    pub category: Option<Category>,
    pub vegetarian_only: bool,
}

/// An uploaded dish image, stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuImage {
    pub uuid: MenuImageUuid,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_at: Timestamp,
}

/// Payload for storing an uploaded image.
#[derive(Debug, Clone)]
pub struct NewMenuImage {
    pub content_type: String,
    pub data: Vec<u8>,
}
