use std::io;

use crate::{
    Service,
    domain::{
        common::{DomainError, ErrorCode, ErrorKind},
        health::port::MockHealthRepository,
        order::{
            entities::{InsertOrderInput, Order, OrderId, OrderStatus},
            ports::{MockOrderRepository, OrderRepository, OrderService},
        },
    },
};

fn service() -> Service<MockOrderRepository, MockHealthRepository> {
    Service::new(MockOrderRepository::new(), MockHealthRepository::new())
}

fn input(product_name: &str, price: f64) -> InsertOrderInput {
    InsertOrderInput {
        product_name: product_name.to_string(),
        price,
        status: OrderStatus::Created,
    }
}

/// Repository whose every call fails like an unreachable database.
struct UnreachableOrderRepository;

fn connection_refused() -> DomainError {
    DomainError::database(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    ))
}

impl OrderRepository for UnreachableOrderRepository {
    async fn insert(&self, _input: InsertOrderInput) -> Result<Order, DomainError> {
        Err(connection_refused())
    }

    async fn find_by_id(&self, _id: &OrderId) -> Result<Option<Order>, DomainError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: &OrderId) -> Result<(), DomainError> {
        Err(connection_refused())
    }
}

// == Create Order Tests ==

#[tokio::test]
async fn test_create_order_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let order = service.create_order(input("Mechanical keyboard", 129.9)).await?;

    assert_eq!(order.product_name, "Mechanical keyboard");
    assert_eq!(order.price, 129.9);
    assert_eq!(order.status, OrderStatus::Created, "Expected CREATED status");

    Ok(())
}

#[tokio::test]
async fn test_create_order_generates_distinct_ids() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let first = service.create_order(input("Book", 10.0)).await?;
    let second = service.create_order(input("Pen", 1.5)).await?;

    assert_ne!(first.id, second.id, "Expected store-generated ids to differ");

    Ok(())
}

#[tokio::test]
async fn test_create_order_fail_blank_product_name() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .create_order(input("   ", 10.0))
        .await
        .expect_err("create_order should have returned an error");

    assert_eq!(error.code(), ErrorCode::ValidationFailed);
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(error.message(), "Validation failed: productName must not be blank");

    Ok(())
}

#[tokio::test]
async fn test_create_order_fail_negative_price() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .create_order(input("Book", -0.01))
        .await
        .expect_err("create_order should have returned an error");

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(error.message().contains("price"));

    Ok(())
}

#[tokio::test]
async fn test_create_order_propagates_store_failure() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(UnreachableOrderRepository, MockHealthRepository::new());

    let error = service
        .create_order(input("Book", 10.0))
        .await
        .expect_err("create_order should have returned an error");

    assert_eq!(error.code(), ErrorCode::DatabaseError);
    assert_eq!(error.kind(), ErrorKind::System);
    assert!(
        !error.message().contains("connection refused"),
        "Driver detail must stay in the cause"
    );

    Ok(())
}

// == Get Order Tests ==

#[tokio::test]
async fn test_get_order_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();
    let created = service.create_order(input("Book", 10.0)).await?;

    let order = service.get_order(&created.id).await?;

    assert_eq!(order, created);

    Ok(())
}

#[tokio::test]
async fn test_get_order_fail_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .get_order(&OrderId(999))
        .await
        .expect_err("get_order should have returned an error");

    assert_eq!(error.code(), ErrorCode::OrderNotFound);
    assert_eq!(error.kind(), ErrorKind::Business);
    assert_eq!(error.message(), "Order not found with id: Order with id: 999");

    Ok(())
}

// == Delete Order Tests ==

#[tokio::test]
async fn test_delete_order_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();
    let created = service.create_order(input("Book", 10.0)).await?;

    service.delete_order(&created.id).await?;

    let error = service
        .get_order(&created.id)
        .await
        .expect_err("deleted order should be gone");
    assert_eq!(error.code(), ErrorCode::OrderNotFound);

    Ok(())
}

#[tokio::test]
async fn test_delete_order_fail_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = service();

    let error = service
        .delete_order(&OrderId(42))
        .await
        .expect_err("delete_order should have returned an error");

    assert_eq!(error.code(), ErrorCode::OrderNotFound);
    assert!(error.message().contains("42"));

    Ok(())
}
