//! Menu response payloads.

use kore::round_total;
use kore_app::domain::menu::models::MenuItem;
use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;

/// A dish as returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MenuItemResponse {
    /// The unique identifier of the dish
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Price in the restaurant's currency
    pub price: f64,

    /// Catalog category, e.g. `main-course`
    pub category: String,

    /// Whether the dish is vegetarian
    pub is_vegetarian: bool,

    /// URL of the dish image, when one has been uploaded
    pub image_url: Option<String>,

    /// The date and time the dish was added
    pub created_at: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        MenuItemResponse {
            uuid: item.uuid.into(),
            name: item.name,
            description: item.description,
            price: item.price.to_f64().unwrap_or_default(),
            category: item.category.to_string(),
            is_vegetarian: item.is_vegetarian,
            image_url: item.image_url,
            created_at: item.created_at.to_string(),
        }
    }
}

/// Convert a JSON price into an exact decimal, rejecting bad values.
///
/// Rounding goes through [`round_total`] so prices and order totals
/// share one midpoint policy.
pub(crate) fn parse_price(value: f64) -> Result<Decimal, ApiError> {
    Decimal::from_f64(value)
        .filter(|price| !price.is_sign_negative())
        .map(round_total)
        .ok_or_else(|| ApiError::bad_request("price must be a non-negative number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_price_rounds_to_cents() {
        // 12.125 is exact in binary and a true midpoint; half-away-
        // from-zero gives .13 where banker's rounding would give .12.
        let price = parse_price(12.125).unwrap();

        assert_eq!(price.to_string(), "12.13");
    }

    #[test]
    fn parse_price_rejects_negatives() {
        assert!(parse_price(-1.0).is_err());
    }

    #[test]
    fn parse_price_rejects_nan() {
        assert!(parse_price(f64::NAN).is_err());
    }
}
