use chrono::Utc;
use pos_core::clients::ActorClient;
use pos_core::config::Config;
use pos_core::lifecycle::{seed_demo_data, PosSystem};
use pos_core::model::{
    CategoryId, EmployeeId, ItemCreate, ItemId, LineItemInput, OrderCreate, OrderId, OrderStatus,
    TableCreate, TableId,
};
use pos_core::money::Money;
use pos_core::order_actor::OrderError;
use pos_core::services::DailySummary;
use std::collections::HashSet;

/// Full system: every actor real, demo data loaded.
async fn seeded_system() -> PosSystem {
    let system = PosSystem::start(&Config::default());
    seed_demo_data(
        &system.catalog_client,
        &system.table_client,
        &system.employee_client,
    )
    .await
    .expect("seeding failed");
    system
}

fn order_on(table: u64, qty: u32, total_cents: i64) -> OrderCreate {
    OrderCreate {
        table_id: TableId(table),
        employee_id: EmployeeId(1),
        line_items: vec![LineItemInput::new(ItemId(1), qty)],
        total: Money::from_cents(total_cents),
    }
}

/// A table is occupied exactly when some order on it is not closed.
async fn assert_occupancy_matches_orders(system: &PosSystem) {
    let orders = system.order_client.list_orders().await.unwrap();
    for table in system.table_client.list_tables().await.unwrap() {
        let has_open = orders
            .iter()
            .any(|o| o.table_id == table.id && o.status.is_open());
        assert_eq!(table.is_occupied(), has_open, "{} out of step", table.id);
    }
}

async fn is_occupied(system: &PosSystem, table: u64) -> bool {
    system
        .table_client
        .get_table(TableId(table))
        .await
        .unwrap()
        .is_occupied()
}

#[tokio::test]
async fn test_order_pay_close_scenario() {
    let system = seeded_system().await;
    assert!(!is_occupied(&system, 1).await);

    let id = system.order_client.create_order(order_on(1, 2, 500)).await.unwrap();
    assert_eq!(id, OrderId(1));
    assert!(is_occupied(&system, 1).await);

    let paid = system
        .payments()
        .pay_order(id, "cash", Money::from_cents(500))
        .await
        .unwrap();
    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.payment_method.as_deref(), Some("cash"));
    assert_eq!(paid.paid_amount, Some(Money::from_cents(500)));
    assert!(paid.paid_at.is_some());
    // Paying does not free the table.
    assert!(is_occupied(&system, 1).await);

    system
        .order_client
        .set_status(id, OrderStatus::Closed)
        .await
        .unwrap();
    assert!(!is_occupied(&system, 1).await);

    let summary = system.statistics().daily_summary(Utc::now()).await.unwrap();
    assert_eq!(
        summary,
        DailySummary {
            total_orders: 1,
            total_sales: Money::from_cents(500),
            open_orders: 0,
            occupied_tables: 0,
        }
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_two_orders_on_one_table() {
    let system = seeded_system().await;
    let first = system.order_client.create_order(order_on(1, 1, 250)).await.unwrap();
    let second = system.order_client.create_order(order_on(1, 2, 500)).await.unwrap();

    system
        .order_client
        .set_status(first, OrderStatus::Closed)
        .await
        .unwrap();
    assert!(is_occupied(&system, 1).await, "second order still open");
    assert_occupancy_matches_orders(&system).await;

    system
        .order_client
        .set_status(second, OrderStatus::Closed)
        .await
        .unwrap();
    assert!(!is_occupied(&system, 1).await);
    assert_occupancy_matches_orders(&system).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_table_is_rejected_without_residue() {
    let system = seeded_system().await;
    let err = system
        .order_client
        .create_order(order_on(99, 1, 250))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidReference(_)));
    assert!(system.order_client.list_orders().await.unwrap().is_empty());

    // The rejected attempt did not consume an id.
    let id = system.order_client.create_order(order_on(2, 1, 250)).await.unwrap();
    assert_eq!(id, OrderId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_second_payment_is_rejected() {
    let system = seeded_system().await;
    let payments = system.payments();
    let id = system.order_client.create_order(order_on(1, 2, 500)).await.unwrap();

    let first = payments.pay_order(id, "card", Money::from_cents(500)).await.unwrap();
    let err = payments
        .pay_order(id, "cash", Money::from_cents(100))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)));

    let order = system.order_client.get_order(id).await.unwrap();
    assert_eq!(order.payment_method.as_deref(), Some("card"));
    assert_eq!(order.paid_amount, Some(Money::from_cents(500)));
    assert_eq!(order.paid_at, first.paid_at);

    drop(payments);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_payment_validation() {
    let system = seeded_system().await;
    let payments = system.payments();
    let id = system.order_client.create_order(order_on(1, 2, 500)).await.unwrap();

    assert!(matches!(
        payments.pay_order(id, "cash", Money::ZERO).await,
        Err(OrderError::InvalidInput(_))
    ));
    let too_much = Money::limit().checked_add(Money::from_cents(1)).unwrap();
    assert!(matches!(
        payments.pay_order(id, "cash", too_much).await,
        Err(OrderError::InvalidInput(_))
    ));
    assert!(matches!(
        payments.pay_order(id, "cheque", Money::from_cents(500)).await,
        Err(OrderError::InvalidPaymentMethod(_))
    ));
    assert!(matches!(
        payments.pay_order(OrderId(42), "cash", Money::from_cents(500)).await,
        Err(OrderError::NotFound(_))
    ));
    assert_eq!(
        system.order_client.get_order(id).await.unwrap().status,
        OrderStatus::New
    );

    drop(payments);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_status_transitions() {
    let system = seeded_system().await;
    let orders = &system.order_client;
    let id = orders.create_order(order_on(1, 2, 500)).await.unwrap();

    for status in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served, OrderStatus::Preparing] {
        assert_eq!(orders.set_status(id, status).await.unwrap().status, status);
    }
    assert!(matches!(
        orders.set_status(id, OrderStatus::Paid).await,
        Err(OrderError::InvalidTransition(_))
    ));

    system
        .payments()
        .pay_order(id, "cash", Money::from_cents(500))
        .await
        .unwrap();
    assert!(matches!(
        orders.set_status(id, OrderStatus::Served).await,
        Err(OrderError::InvalidTransition(_))
    ));

    orders.set_status(id, OrderStatus::Closed).await.unwrap();
    assert!(matches!(
        orders.set_status(id, OrderStatus::New).await,
        Err(OrderError::InvalidTransition(_))
    ));
    assert!(matches!(
        orders.set_status(OrderId(7), OrderStatus::Ready).await,
        Err(OrderError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancelled_order_frees_table_and_closed_cannot_be_paid() {
    let system = seeded_system().await;
    let id = system.order_client.create_order(order_on(3, 1, 250)).await.unwrap();
    system
        .order_client
        .set_status(id, OrderStatus::Closed)
        .await
        .unwrap();
    assert!(!is_occupied(&system, 3).await);

    let err = system
        .payments()
        .pay_order(id, "cash", Money::from_cents(250))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_free_table() {
    let system = seeded_system().await;
    let orders = &system.order_client;
    let id = orders.create_order(order_on(2, 1, 250)).await.unwrap();

    assert!(matches!(
        orders.free_table(TableId(2)).await,
        Err(OrderError::InvalidState(_))
    ));
    assert!(matches!(
        orders.free_table(TableId(99)).await,
        Err(OrderError::NotFound(_))
    ));

    orders.set_status(id, OrderStatus::Closed).await.unwrap();
    // Already free: freeing again is a no-op.
    assert!(!orders.free_table(TableId(2)).await.unwrap());
    assert_occupancy_matches_orders(&system).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_increasing_ids() {
    let system = seeded_system().await;

    let tasks: Vec<_> = (0..30u64)
        .map(|n| {
            let orders = system.order_client.clone();
            tokio::spawn(async move { orders.create_order(order_on(n % 3 + 1, 1, 250)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().unwrap().0);
    }
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 30);
    assert_eq!(unique, (1..=30).collect::<HashSet<_>>());

    let listed: Vec<_> = system
        .order_client
        .list_orders()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.id.0)
        .collect();
    assert!(listed.windows(2).all(|w| w[0] < w[1]));
    assert_occupancy_matches_orders(&system).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_close_racing_create_keeps_occupancy_consistent() {
    let system = seeded_system().await;
    let first = system.order_client.create_order(order_on(1, 1, 250)).await.unwrap();

    let closer = {
        let orders = system.order_client.clone();
        tokio::spawn(async move { orders.set_status(first, OrderStatus::Closed).await })
    };
    let creator = {
        let orders = system.order_client.clone();
        tokio::spawn(async move { orders.create_order(order_on(1, 1, 250)).await })
    };
    closer.await.unwrap().unwrap();
    creator.await.unwrap().unwrap();

    assert!(is_occupied(&system, 1).await);
    assert_occupancy_matches_orders(&system).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_ledger_summary_is_zero() {
    let system = PosSystem::start(&Config::default());
    let summary = system.statistics().daily_summary(Utc::now()).await.unwrap();
    assert_eq!(summary, DailySummary::default());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_summary_of_orders_at_the_amount_limit() {
    let system = seeded_system().await;
    for table in 1..=3 {
        system
            .order_client
            .create_order(order_on(table, 1, 99_999_999_999))
            .await
            .unwrap();
    }

    let summary = system.statistics().daily_summary(Utc::now()).await.unwrap();
    assert_eq!(summary.total_orders, 3);
    assert_eq!(summary.total_sales, Money::from_cents(3 * 99_999_999_999));
    assert!(system.order_client.list_orders().await.is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_and_directory() {
    let system = seeded_system().await;
    let catalog = &system.catalog_client;

    assert_eq!(catalog.list_active_categories().await.unwrap().len(), 3);
    assert_eq!(catalog.list_active_items(Some(CategoryId(1))).await.unwrap().len(), 2);

    let item = catalog
        .create_item(ItemCreate {
            name: "Lemonade".into(),
            price: Money::from_cents(300),
            category_id: CategoryId(1),
        })
        .await
        .unwrap();
    assert_eq!(item.id, ItemId(5));
    assert!(catalog
        .create_item(ItemCreate {
            name: "Ghost".into(),
            price: Money::from_cents(300),
            category_id: CategoryId(9),
        })
        .await
        .is_err());

    catalog.deactivate_item(ItemId(2)).await.unwrap();
    assert_eq!(catalog.list_active_items(Some(CategoryId(1))).await.unwrap().len(), 2);
    // A deactivated item can no longer be ordered.
    let err = system
        .order_client
        .create_order(OrderCreate {
            line_items: vec![LineItemInput::new(ItemId(2), 1)],
            ..order_on(1, 1, 100)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidReference(_)));
    assert!(!is_occupied(&system, 1).await);

    let waiter = system.employee_client.authenticate("5678").await.unwrap();
    assert_eq!(waiter.id, EmployeeId(2));
    assert!(system.employee_client.authenticate("0000").await.is_err());
    assert_eq!(system.employee_client.list().await.unwrap().len(), 3);

    let table = system
        .table_client
        .create_table(TableCreate {
            name: "Terrace".into(),
            seat_count: 8,
        })
        .await
        .unwrap();
    assert_eq!(table, TableId(4));
    // Tables are part of the floor plan and cannot be removed.
    assert!(system.table_client.delete(table).await.is_err());

    system.shutdown().await.unwrap();
}
