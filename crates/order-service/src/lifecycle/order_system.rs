use crate::clients::{OrderClient, OrderItemClient};
use crate::config::StoreConfig;
use crate::delivery::DeliveryNotifier;
use crate::service::OrderService;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the order service.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping both record stores
/// - **Dependency Wiring**: Building the [`OrderService`] from the store clients and the notifier
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&config.store, notifier);
///
/// let id = system.service.create_order(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub service: OrderService,

    /// Direct access to the item store, for seeding items the service only reads.
    pub item_client: OrderItemClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the Order and OrderItem stores and wires the service on top of them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(store: &StoreConfig, notifier: Arc<dyn DeliveryNotifier>) -> Self {
        let (order_store, order_client) = crate::order_actor::new(store.buffer_size);
        let (item_store, item_client) = crate::order_item_actor::new(store.buffer_size);

        let order_handle = tokio::spawn(order_store.run(()));
        let item_handle = tokio::spawn(item_store.run(()));

        let item_client = OrderItemClient::new(item_client);
        let service =
            OrderService::new(OrderClient::new(order_client), item_client.clone(), notifier);

        Self {
            service,
            item_client,
            handles: vec![order_handle, item_handle],
        }
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the service and clients closes the store channels; each store then drains and
    /// exits. Clones still held elsewhere (an HTTP router, say) keep their store alive, so drop
    /// those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if both stores shut down cleanly
    /// - `Err(String)` if a store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.item_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
