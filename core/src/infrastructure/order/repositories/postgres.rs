use sqlx::{FromRow, PgPool, query, query_as};

use crate::domain::{
    common::DomainError,
    order::{
        entities::{InsertOrderInput, Order, OrderId},
        ports::OrderRepository,
    },
};

// Is used to map database rows to domain entities
#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    product_name: String,
    price: f64,
    status: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId(row.id),
            product_name: row.product_name,
            price: row.price,
            status: row.status.parse()?,
        })
    }
}

#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for PostgresOrderRepository {
    async fn insert(&self, input: InsertOrderInput) -> Result<Order, DomainError> {
        let row = query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (product_name, price, status)
            VALUES ($1, $2, $3)
            RETURNING id, product_name, price, status
            "#,
        )
        .bind(&input.product_name)
        .bind(input.price)
        .bind(input.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row = query_as::<_, OrderRow>(
            r#"
            SELECT id, product_name, price, status
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::database)?;

        row.map(Order::try_from).transpose()
    }

    async fn delete(&self, id: &OrderId) -> Result<(), DomainError> {
        let result = query("DELETE FROM orders WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(DomainError::database)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Order", id));
        }

        Ok(())
    }
}
