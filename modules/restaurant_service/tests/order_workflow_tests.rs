//! Order workflow tests: totals, occupancy side effects and status moves

use restaurant_service::contract::*;
use restaurant_service::Config;

mod common;
use common::{create_test_service, dec, line, seed_menu_item, seed_table};

#[tokio::test]
async fn test_create_order_computes_total_and_occupies_table() {
    let (service, store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let soda = seed_menu_item(&service, "Soda", "2.00", "Drinks").await;
    let table = seed_table(&service, 5, 4).await;
    assert!(!table.occupied);

    let order = service
        .create_order(table.id, vec![line(burger.id, 2), line(soda.id, 1)])
        .await
        .unwrap();
    store.print_state("after create_order");

    assert_eq!(order.total_amount, dec("22.0"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.table_id, table.id);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].menu_item_name, "Burger");
    assert_eq!(order.lines[0].quantity, 2);
    assert_eq!(order.lines[1].menu_item_id, soda.id);

    let table = service.get_table_by_id(table.id).await.unwrap();
    assert!(table.occupied);
    assert!(service.get_available_tables().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_order_keeps_special_instructions() {
    let (service, _store) = create_test_service(Config::default());
    let pasta = seed_menu_item(&service, "Pasta", "12.50", "Mains").await;
    let table = seed_table(&service, 1, 2).await;

    let request = OrderLineRequest {
        menu_item_id: pasta.id,
        quantity: 1,
        special_instructions: Some("no garlic".to_string()),
    };
    let order = service.create_order(table.id, vec![request]).await.unwrap();

    assert_eq!(
        order.lines[0].special_instructions.as_deref(),
        Some("no garlic")
    );
    assert_eq!(order.total_amount, dec("12.50"));
}

#[tokio::test]
async fn test_create_order_with_unknown_menu_item_writes_nothing() {
    let (service, store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 3, 4).await;

    let err = service
        .create_order(table.id, vec![line(burger.id, 1), line(9999, 1)])
        .await
        .unwrap_err();

    assert_eq!(err, RestaurantError::not_found("menu_item", 9999));
    assert_eq!(store.order_count(), 0);
    assert!(!store.table_snapshot(table.id).unwrap().occupied);
}

#[tokio::test]
async fn test_create_order_on_unknown_table_is_not_found() {
    let (service, store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;

    let err = service
        .create_order(4242, vec![line(burger.id, 1)])
        .await
        .unwrap_err();

    assert_eq!(err, RestaurantError::not_found("table", 4242));
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn test_create_order_rejects_non_positive_quantity() {
    let (service, store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 3, 4).await;

    let err = service
        .create_order(table.id, vec![line(burger.id, 0)])
        .await
        .unwrap_err();

    assert!(matches!(err, RestaurantError::Validation { .. }));
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn test_unknown_table_reported_before_line_validation() {
    let (service, store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;

    let err = service
        .create_order(4242, vec![line(burger.id, 0)])
        .await
        .unwrap_err();

    assert_eq!(err, RestaurantError::not_found("table", 4242));
    assert_eq!(store.order_count(), 0);
}

#[tokio::test]
async fn test_oversized_order_total_is_rejected() {
    let (service, store) = create_test_service(Config::default());
    let caviar = seed_menu_item(&service, "Caviar", "99999999.99", "Mains").await;
    let table = seed_table(&service, 3, 4).await;

    let err = service
        .create_order(table.id, vec![line(caviar.id, i32::MAX)])
        .await
        .unwrap_err();

    assert!(matches!(err, RestaurantError::Validation { .. }));
    assert_eq!(store.order_count(), 0);
    assert!(!store.table_snapshot(table.id).unwrap().occupied);
}

#[tokio::test]
async fn test_create_order_respects_line_limit() {
    let config = Config {
        max_lines_per_order: 2,
        ..Config::default()
    };
    let (service, _store) = create_test_service(config);
    let soda = seed_menu_item(&service, "Soda", "2.00", "Drinks").await;
    let table = seed_table(&service, 8, 2).await;

    let err = service
        .create_order(table.id, vec![line(soda.id, 1); 3])
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::Validation { .. }));

    let order = service
        .create_order(table.id, vec![line(soda.id, 1); 2])
        .await
        .unwrap();
    assert_eq!(order.total_amount, dec("4.00"));
}

#[tokio::test]
async fn test_empty_order_is_accepted_with_zero_total() {
    let (service, _store) = create_test_service(Config::default());
    let table = seed_table(&service, 2, 2).await;

    let order = service.create_order(table.id, Vec::new()).await.unwrap();

    assert!(order.lines.is_empty());
    assert_eq!(order.total_amount, dec("0"));
    assert!(service.get_table_by_id(table.id).await.unwrap().occupied);
}

#[tokio::test]
async fn test_second_order_on_occupied_table_is_accepted() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;

    service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();
    let second = service
        .create_order(table.id, vec![line(burger.id, 3)])
        .await
        .unwrap();

    assert_eq!(second.total_amount, dec("30.00"));
    assert!(service.get_table_by_id(table.id).await.unwrap().occupied);
    assert_eq!(service.get_orders_by_table(table.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_paid_releases_table() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let order = service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();

    let paid = service
        .update_order_status(order.id, OrderStatus::Paid)
        .await
        .unwrap();

    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.lines, order.lines);
    assert!(!service.get_table_by_id(table.id).await.unwrap().occupied);
    let available = service.get_available_tables().await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, table.id);
}

#[tokio::test]
async fn test_paying_one_of_two_orders_releases_the_table() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let first = service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();
    service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();

    service
        .update_order_status(first.id, OrderStatus::Paid)
        .await
        .unwrap();

    assert!(!service.get_table_by_id(table.id).await.unwrap().occupied);
}

#[tokio::test]
async fn test_non_paid_statuses_leave_occupancy_alone() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let order = service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();

    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ] {
        let updated = service.update_order_status(order.id, status).await.unwrap();
        assert_eq!(updated.status, status);
        assert!(service.get_table_by_id(table.id).await.unwrap().occupied);
    }
}

#[tokio::test]
async fn test_non_paid_status_does_not_reoccupy_released_table() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let order = service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();

    service
        .update_order_status(order.id, OrderStatus::Paid)
        .await
        .unwrap();
    // Permissive mode lets PAID move back; occupancy stays as it is.
    service
        .update_order_status(order.id, OrderStatus::Pending)
        .await
        .unwrap();

    assert!(!service.get_table_by_id(table.id).await.unwrap().occupied);
}

#[tokio::test]
async fn test_update_status_of_unknown_order_is_not_found() {
    let (service, _store) = create_test_service(Config::default());

    let err = service
        .update_order_status(77, OrderStatus::Ready)
        .await
        .unwrap_err();

    assert_eq!(err, RestaurantError::not_found("order", 77));
}

#[tokio::test]
async fn test_order_keeps_price_after_menu_change() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let order = service
        .create_order(table.id, vec![line(burger.id, 2)])
        .await
        .unwrap();

    service
        .update_menu_item(burger.id, common::menu_draft("Big Burger", "15.00", "Mains"))
        .await
        .unwrap();

    let stored = service.get_order_by_id(order.id).await.unwrap();
    assert_eq!(stored.total_amount, dec("20.00"));
    assert_eq!(stored.lines[0].unit_price, dec("10.00"));
    assert_eq!(stored.lines[0].menu_item_name, "Burger");
}

#[tokio::test]
async fn test_strict_mode_allows_forward_moves_only() {
    let config = Config {
        strict_status_transitions: true,
        ..Config::default()
    };
    let (service, _store) = create_test_service(config);
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let table = seed_table(&service, 5, 4).await;
    let order = service
        .create_order(table.id, vec![line(burger.id, 1)])
        .await
        .unwrap();

    service
        .update_order_status(order.id, OrderStatus::Ready)
        .await
        .unwrap();

    let err = service
        .update_order_status(order.id, OrderStatus::Preparing)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RestaurantError::InvalidTransition {
            from: "READY".to_string(),
            to: "PREPARING".to_string(),
        }
    );

    service
        .update_order_status(order.id, OrderStatus::Paid)
        .await
        .unwrap();
    let err = service
        .update_order_status(order.id, OrderStatus::Paid)
        .await
        .unwrap_err();
    assert!(matches!(err, RestaurantError::InvalidTransition { .. }));
    assert_eq!(
        service.get_order_by_id(order.id).await.unwrap().status,
        OrderStatus::Paid
    );
}

#[tokio::test]
async fn test_order_queries_filter_by_status_and_table() {
    let (service, _store) = create_test_service(Config::default());
    let burger = seed_menu_item(&service, "Burger", "10.00", "Mains").await;
    let t1 = seed_table(&service, 1, 2).await;
    let t2 = seed_table(&service, 2, 2).await;

    let a = service
        .create_order(t1.id, vec![line(burger.id, 1)])
        .await
        .unwrap();
    let b = service
        .create_order(t2.id, vec![line(burger.id, 1)])
        .await
        .unwrap();
    service
        .update_order_status(b.id, OrderStatus::Ready)
        .await
        .unwrap();

    let pending = service
        .get_orders_by_status(OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, a.id);

    let on_t2 = service.get_orders_by_table(t2.id).await.unwrap();
    assert_eq!(on_t2.len(), 1);
    assert_eq!(on_t2[0].status, OrderStatus::Ready);

    assert_eq!(service.get_all_orders().await.unwrap().len(), 2);
    assert_eq!(
        service.get_orders_by_table(999).await.unwrap_err(),
        RestaurantError::not_found("table", 999)
    );
}
