//! Demo data matching a small café: three categories, four items, three tables,
//! three staff members and the usual payment methods.

use crate::clients::{CatalogClient, EmployeeClient, TableClient};
use crate::model::{
    CategoryCreate, EmployeeCreate, ItemCreate, PaymentMethodCreate, Role, TableCreate,
};
use crate::money::Money;
use anyhow::Context;
use tracing::info;

const CATEGORIES: [&str; 3] = ["Drinks", "Mains", "Desserts"];

/// (name, price in cents, index into `CATEGORIES`)
const ITEMS: [(&str, i64, usize); 4] = [
    ("Cola", 250, 0),
    ("Water", 100, 0),
    ("French fries", 350, 1),
    ("Ice cream", 400, 2),
];

const TABLES: [(&str, u32); 3] = [("Table 1", 2), ("Table 2", 4), ("Table 3", 6)];

const EMPLOYEES: [(&str, Role, &str); 3] = [
    ("Admin", Role::Admin, "1234"),
    ("Waiter", Role::Waiter, "5678"),
    ("User", Role::User, "000"),
];

const PAYMENT_METHODS: [(&str, &str); 3] = [
    ("Cash", "cash"),
    ("Card", "card"),
    ("Aggregators", "aggregators"),
];

/// Loads the demo data into freshly started actors.
pub async fn seed_demo_data(
    catalog: &CatalogClient,
    tables: &TableClient,
    employees: &EmployeeClient,
) -> anyhow::Result<()> {
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = catalog
            .create_category(CategoryCreate { name: name.into() })
            .await
            .with_context(|| format!("seeding category {name}"))?;
        category_ids.push(category.id);
    }

    for (name, cents, category) in ITEMS {
        catalog
            .create_item(ItemCreate {
                name: name.into(),
                price: Money::from_cents(cents),
                category_id: category_ids[category],
            })
            .await
            .with_context(|| format!("seeding item {name}"))?;
    }

    for (name, seat_count) in TABLES {
        tables
            .create_table(TableCreate {
                name: name.into(),
                seat_count,
            })
            .await
            .with_context(|| format!("seeding table {name}"))?;
    }

    for (name, role, pin) in EMPLOYEES {
        employees
            .create_employee(EmployeeCreate {
                name: name.into(),
                role,
                pin: pin.into(),
            })
            .await
            .with_context(|| format!("seeding employee {name}"))?;
    }

    for (name, code) in PAYMENT_METHODS {
        catalog
            .create_payment_method(PaymentMethodCreate {
                name: name.into(),
                code: code.into(),
            })
            .await
            .with_context(|| format!("seeding payment method {code}"))?;
    }

    info!(
        categories = CATEGORIES.len(),
        items = ITEMS.len(),
        tables = TABLES.len(),
        employees = EMPLOYEES.len(),
        payment_methods = PAYMENT_METHODS.len(),
        "Demo data loaded"
    );
    Ok(())
}
