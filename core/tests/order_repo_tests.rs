use orders_core::domain::common::ErrorCode;
use orders_core::domain::order::entities::{InsertOrderInput, OrderId, OrderStatus};
use orders_core::domain::order::ports::{MockOrderRepository, OrderRepository};

#[tokio::test]
async fn mock_repo_crud_flow() {
    let repo = MockOrderRepository::new();

    let input = InsertOrderInput {
        product_name: "Mechanical keyboard".to_string(),
        price: 129.9,
        status: OrderStatus::Created,
    };

    // Insert
    let inserted = repo
        .insert(input.clone())
        .await
        .expect("insert should succeed");
    assert_eq!(inserted.product_name, "Mechanical keyboard");
    assert_eq!(inserted.status, OrderStatus::Created);
    let id = inserted.id;

    // Find
    let found = repo.find_by_id(&id).await.expect("find should succeed");
    assert_eq!(found, Some(inserted));

    // Delete
    repo.delete(&id).await.expect("delete should succeed");
    let after = repo
        .find_by_id(&id)
        .await
        .expect("find after delete should succeed");
    assert!(after.is_none());

    // Delete non-existent -> ORDER_NOT_FOUND
    let res = repo.delete(&OrderId(999)).await;
    assert!(matches!(res, Err(ref e) if e.code() == ErrorCode::OrderNotFound));
}

#[tokio::test]
async fn clones_share_the_same_store() {
    let repo = MockOrderRepository::new();
    let clone = repo.clone();

    let order = repo
        .insert(InsertOrderInput {
            product_name: "Book".to_string(),
            price: 10.0,
            status: OrderStatus::Created,
        })
        .await
        .expect("insert should succeed");

    let found = clone.find_by_id(&order.id).await.expect("find should succeed");
    assert!(found.is_some());
}
