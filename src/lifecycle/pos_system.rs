use crate::clients::{CatalogClient, EmployeeClient, OrderClient, TableClient};
use crate::config::Config;
use crate::order_actor::LedgerContext;
use crate::services::{PaymentProcessor, StatisticsService};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running point-of-sale core: every actor spawned and wired, plus the clients
/// to reach them.
///
/// Created once per process and shared (by cloning clients) with whatever serves
/// requests.
///
/// # Architecture
///
/// - **Table actor**: floor plan and occupancy
/// - **Catalog actors**: categories, items (context: category client), payment methods
/// - **Employee actor**: staff and PIN sign-in
/// - **Order ledger**: orders; context holds the table and catalog clients
///
/// ```ignore
/// let system = PosSystem::start(&Config::default());
/// let id = system.order_client.create_order(params).await?;
/// system.shutdown().await?;
/// ```
pub struct PosSystem {
    pub table_client: TableClient,
    pub catalog_client: CatalogClient,
    pub employee_client: EmployeeClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl PosSystem {
    /// Spawns every actor. Must be called inside a Tokio runtime.
    pub fn start(config: &Config) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors and clients
        let (table_actor, table_client) = crate::table_actor::new(buffer);
        let (catalog_actors, catalog_client) = crate::catalog_actor::new(buffer);
        let (employee_actor, employee_client) = crate::employee_actor::new(buffer);
        let (ledger, order_client) = crate::order_actor::new(buffer);

        // 2. Start them with their injected context
        let mut handles = vec![
            tokio::spawn(table_actor.run(())),
            tokio::spawn(employee_actor.run(())),
        ];
        handles.extend(catalog_actors.spawn(catalog_client.category_client()));
        handles.push(tokio::spawn(ledger.run(LedgerContext {
            tables: table_client.clone(),
            catalog: catalog_client.clone(),
            strict_totals: config.strict_totals,
        })));

        info!(actors = handles.len(), strict_totals = config.strict_totals, "System started");
        Self {
            table_client,
            catalog_client,
            employee_client,
            order_client,
            handles,
        }
    }

    pub fn payments(&self) -> PaymentProcessor {
        PaymentProcessor::new(self.catalog_client.clone(), self.order_client.clone())
    }

    pub fn statistics(&self) -> StatisticsService {
        StatisticsService::new(self.order_client.clone())
    }

    /// Drops this system's clients and waits for every actor to stop.
    ///
    /// Actors only stop once *all* clones of their client are gone, so anything that
    /// cloned a client (an HTTP router, a service) must be dropped first. The ledger
    /// holds table and catalog clients, so those actors finish after it.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.employee_client);
        drop(self.catalog_client);
        drop(self.table_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
