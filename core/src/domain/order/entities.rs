use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::{DomainError, Validate, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64)]
pub struct OrderId(pub i64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        OrderId(id)
    }
}

impl From<OrderId> for i64 {
    fn from(order_id: OrderId) -> Self {
        order_id.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATED" => Ok(OrderStatus::Created),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::invalid_order_status(other)),
        }
    }
}

// Is used in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    pub price: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertOrderInput {
    pub product_name: String,
    pub price: f64,
    pub status: OrderStatus,
}

/// Body of `POST /api/orders`.
///
/// Fields are optional on the wire so that a missing value is reported as a
/// field violation instead of a deserialization failure.
#[derive(Debug, Deserialize, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(example = "Mechanical keyboard")]
    pub product_name: Option<String>,
    #[schema(example = 129.9)]
    pub price: Option<f64>,
}

impl Validate for CreateOrderRequest {
    type Valid = InsertOrderInput;

    fn validate(self) -> Result<InsertOrderInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let product_name = self
            .product_name
            .filter(|name| !name.trim().is_empty());
        if product_name.is_none() {
            errors.add("productName", "must not be blank");
        }

        let price = match self.price {
            None => {
                errors.add("price", "must not be null");
                None
            }
            Some(price) if price.is_nan() || price < 0.0 => {
                errors.add("price", "must be greater than or equal to 0");
                None
            }
            price => price,
        };

        match (product_name, price) {
            (Some(product_name), Some(price)) => Ok(InsertOrderInput {
                product_name,
                price,
                status: OrderStatus::Created,
            }),
            _ => Err(errors),
        }
    }
}
