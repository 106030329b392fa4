use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use pos_core::clients::{CatalogClient, OrderClient, TableClient};
use pos_core::model::{
    Category, CategoryId, EmployeeId, Item, ItemId, LineItemInput, OrderCreate, OrderStatus,
    PaymentMethod, Table, TableId, TableStatus,
};
use pos_core::money::Money;
use pos_core::order_actor::{LedgerContext, OrderError};
use rust_decimal::Decimal;
use tokio::task::JoinHandle;

/// Real order ledger with mocked table and catalog actors.
///
/// Pattern 2: Actor + Mocks. The mocks answer in the exact order the ledger is
/// expected to ask, so these tests also pin down the validation sequence.
struct Harness {
    tables: MockClient<Table>,
    categories: MockClient<Category>,
    items: MockClient<Item>,
    payment_methods: MockClient<PaymentMethod>,
}

impl Harness {
    fn new() -> Self {
        Self {
            tables: MockClient::new(),
            categories: MockClient::new(),
            items: MockClient::new(),
            payment_methods: MockClient::new(),
        }
    }

    fn start(&self, strict_totals: bool) -> (OrderClient, JoinHandle<()>) {
        let (ledger, orders) = pos_core::order_actor::new(8);
        let ctx = LedgerContext {
            tables: TableClient::new(self.tables.client()),
            catalog: CatalogClient::new(
                self.categories.client(),
                self.items.client(),
                self.payment_methods.client(),
            ),
            strict_totals,
        };
        (orders, tokio::spawn(ledger.run(ctx)))
    }

    fn verify(&self) {
        self.tables.verify();
        self.categories.verify();
        self.items.verify();
        self.payment_methods.verify();
    }
}

fn table(id: u64) -> Table {
    Table {
        id: TableId(id),
        name: format!("Table {id}"),
        seat_count: 4,
        status: TableStatus::Free,
    }
}

fn cola(active: bool) -> Item {
    Item {
        id: ItemId(1),
        name: "Cola".into(),
        price: Money::from_cents(250),
        category_id: CategoryId(1),
        active,
    }
}

fn two_colas(total_cents: i64) -> OrderCreate {
    OrderCreate {
        table_id: TableId(1),
        employee_id: EmployeeId(1),
        line_items: vec![LineItemInput::new(ItemId(1), 2)],
        total: Money::from_cents(total_cents),
    }
}

#[tokio::test]
async fn create_checks_table_prices_lines_and_occupies() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
    h.tables.expect_action(TableId(1)).return_ok(true);

    let (orders, handle) = h.start(false);
    let id = orders.create_order(two_colas(500)).await.unwrap();
    assert_eq!(id.0, 1);

    let order = orders.get_order(id).await.unwrap();
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.line_items[0].unit_price, Money::from_cents(250));
    assert_eq!(order.total, Money::from_cents(500));
    assert!(order.paid_at.is_none());

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn unknown_table_leaves_no_order_behind() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(None);

    let (orders, handle) = h.start(false);
    let err = orders.create_order(two_colas(500)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidReference(_)), "{err:?}");
    assert!(orders.list_orders().await.unwrap().is_empty());

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn inactive_item_is_an_invalid_reference() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(false)));

    let (orders, handle) = h.start(false);
    let err = orders.create_order(two_colas(500)).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidReference(_)), "{err:?}");

    // The table was never marked occupied.
    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn empty_lines_and_negative_totals_are_invalid_input() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));

    let (orders, handle) = h.start(false);

    let mut empty = two_colas(0);
    empty.line_items.clear();
    assert!(matches!(
        orders.create_order(empty).await,
        Err(OrderError::InvalidInput(_))
    ));
    assert!(matches!(
        orders.create_order(two_colas(-100)).await,
        Err(OrderError::InvalidInput(_))
    ));

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn mismatched_total_is_kept_unless_strict() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
    h.tables.expect_action(TableId(1)).return_ok(true);

    let (orders, handle) = h.start(false);
    let id = orders.create_order(two_colas(450)).await.unwrap();
    assert_eq!(orders.get_order(id).await.unwrap().total, Money::from_cents(450));
    h.verify();
    drop(orders);
    handle.await.unwrap();

    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));

    let (orders, handle) = h.start(true);
    assert!(matches!(
        orders.create_order(two_colas(450)).await,
        Err(OrderError::InvalidInput(_))
    ));
    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn failed_occupancy_update_aborts_the_create() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
    h.tables
        .expect_action(TableId(1))
        .return_err(FrameworkError::ActorClosed);

    let (orders, handle) = h.start(false);
    assert!(matches!(
        orders.create_order(two_colas(500)).await,
        Err(OrderError::ActorCommunicationError(_))
    ));
    assert!(orders.list_orders().await.unwrap().is_empty());

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn closing_frees_the_table_only_for_the_last_open_order() {
    let mut h = Harness::new();
    for _ in 0..2 {
        h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
        h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
        h.tables.expect_action(TableId(1)).return_ok(true);
    }
    // Only the second close reaches the table actor.
    h.tables.expect_action(TableId(1)).return_ok(true);

    let (orders, handle) = h.start(false);
    let first = orders.create_order(two_colas(500)).await.unwrap();
    let second = orders.create_order(two_colas(500)).await.unwrap();

    orders.set_status(first, OrderStatus::Closed).await.unwrap();
    let closed = orders.set_status(second, OrderStatus::Closed).await.unwrap();
    assert_eq!(closed.status, OrderStatus::Closed);

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

fn huge() -> Money {
    Money::new(Decimal::from_i128_with_scale(70_000_000_000_000_000_000_000_000_000, 0))
}

#[tokio::test]
async fn oversized_unit_price_is_rejected_and_the_ledger_keeps_serving() {
    let mut h = Harness::new();
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
    h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
    h.tables.expect_action(TableId(1)).return_ok(true);

    let (orders, handle) = h.start(false);
    let mut oversized = two_colas(500);
    oversized.line_items = vec![LineItemInput::priced(ItemId(1), 2, huge())];
    let err = orders.create_order(oversized).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)), "{err:?}");
    assert!(orders.list_orders().await.unwrap().is_empty());

    let id = orders.create_order(two_colas(500)).await.unwrap();
    assert_eq!(id.0, 1);

    h.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn oversized_total_is_rejected() {
    let mut h = Harness::new();
    for _ in 0..2 {
        h.tables.expect_get(TableId(1)).return_ok(Some(table(1)));
        h.items.expect_get(ItemId(1)).return_ok(Some(cola(true)));
    }

    let (orders, handle) = h.start(false);
    let mut order = two_colas(0);
    order.total = huge();
    let err = orders.create_order(order).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)), "{err:?}");

    let mut order = two_colas(0);
    order.total = Money::limit().checked_add(Money::from_cents(1)).unwrap();
    let err = orders.create_order(order).await.unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)), "{err:?}");
    assert!(orders.list_orders().await.unwrap().is_empty());

    h.verify();
    drop(orders);
    handle.await.unwrap();
}
