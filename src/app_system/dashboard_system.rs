use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::actors::DashboardService;
use crate::clients::DashboardClient;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::seed;
use crate::store::DomainStore;

/// Owns the running store service.
///
/// Built once at startup; consumers receive clones of [`Self::client`]
/// instead of reaching for a global.
pub struct DashboardSystem {
    pub client: DashboardClient,
    handle: JoinHandle<DomainStore>,
}

impl DashboardSystem {
    /// Builds the store described by `config` and starts its service.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let mut store = DomainStore::new().with_default_avatar(config.default_avatar.clone());
        if config.seed_demo {
            store = store.with_counters(seed::DEMO_COUNTERS);
            seed::load_demo(&mut store);
        }
        Self::with_store(store, config.channel_capacity)
    }

    pub fn with_store(store: DomainStore, buffer_size: usize) -> Self {
        let (service, client) = DashboardService::new(buffer_size, store);
        let handle = tokio::spawn(service.run());
        info!("Dashboard system started");
        Self { client, handle }
    }

    /// Stops the service once queued requests are served and returns the
    /// final store.
    pub async fn shutdown(self) -> StoreResult<DomainStore> {
        info!("Shutting down dashboard system...");
        let sent = self.client.shutdown().await;
        drop(self.client);

        // A failed send means the task already ended; its join result says why.
        match self.handle.await {
            Ok(store) => {
                if let Err(e) = sent {
                    warn!(error = %e, "Store service had already stopped");
                }
                info!("Dashboard system shutdown complete");
                Ok(store)
            }
            Err(e) => {
                error!("Store task failed: {:?}", e);
                Err(StoreError::ActorCommunicationError(format!("Store task failed: {e}")))
            }
        }
    }
}
