//! # Refresh Agent
//!
//! Bridges the store's change notifications to the in-memory listing.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Refresh Agent Architecture                          │
//! │                                                                         │
//! │  Store subscription (INSERT/UPDATE/DELETE on any catalog table)        │
//! │       │                                                                 │
//! │       │  RefreshHandle::notify(event)                                  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │              mpsc channel (100)             │                       │
//! │  └─────────────────────────────────────────────┘                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RefreshAgent::run (single task)                                       │
//! │       │                                                                 │
//! │       ├── drain every queued event   ← burst of N events               │
//! │       │                                collapses into ONE reload       │
//! │       ▼                                                                 │
//! │  CatalogSnapshot::load (full reload of all three listings)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<RwLock<CatalogSnapshot>> ← the session renders from this         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The agent is the only writer of the snapshot, so reloads never run
//! concurrently with themselves; a reload that races a local mutation just
//! gets reloaded again on that mutation's own echo. Reloading is
//! idempotent - it replaces the whole snapshot every time.

use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use stockline_db::{Database, DbResult};

use crate::error::{CatalogError, CatalogResult};
use crate::event::ChangeEvent;
use crate::snapshot::CatalogSnapshot;

// =============================================================================
// Refresh Agent
// =============================================================================

/// Background task that reloads the catalog snapshot on change events.
pub struct RefreshAgent {
    /// Database connection.
    db: Database,

    /// The listing the session renders from.
    snapshot: Arc<RwLock<CatalogSnapshot>>,

    /// Receiver for incoming change events.
    event_rx: mpsc::Receiver<ChangeEvent>,

    /// Shutdown receiver.
    shutdown_rx: mpsc::Receiver<()>,
}

/// Handle for feeding the refresh agent.
#[derive(Clone)]
pub struct RefreshHandle {
    /// Sender for routing change events to the agent.
    event_tx: mpsc::Sender<ChangeEvent>,

    /// Shutdown sender.
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Routes a change event to the agent.
    pub async fn notify(&self, event: ChangeEvent) -> CatalogResult<()> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| CatalogError::Channel("Event channel closed".into()))
    }

    /// Triggers graceful shutdown.
    pub async fn shutdown(&self) -> CatalogResult<()> {
        self.shutdown_tx
            .send(())
            .await
            .map_err(|_| CatalogError::Channel("Shutdown channel closed".into()))
    }
}

impl RefreshAgent {
    /// Creates a new refresh agent and returns a handle plus the shared
    /// snapshot it maintains.
    pub fn new(db: Database) -> (Self, RefreshHandle, Arc<RwLock<CatalogSnapshot>>) {
        let (event_tx, event_rx) = mpsc::channel(100);
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let snapshot = Arc::new(RwLock::new(CatalogSnapshot::default()));

        let agent = RefreshAgent {
            db,
            snapshot: snapshot.clone(),
            event_rx,
            shutdown_rx,
        };

        let handle = RefreshHandle {
            event_tx,
            shutdown_tx,
        };

        (agent, handle, snapshot)
    }

    /// Runs the agent loop.
    ///
    /// Performs one initial load (the dashboard fetches on mount), then
    /// reloads once per burst of queued events until shut down.
    pub async fn run(mut self) {
        info!("Refresh agent starting");

        if let Err(e) = self.reload().await {
            error!(?e, "Initial catalog load failed");
        }

        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    // Collapse every already-queued event into this reload
                    let mut collapsed = 0u32;
                    while self.event_rx.try_recv().is_ok() {
                        collapsed += 1;
                    }

                    debug!(
                        kind = ?event.kind,
                        table = ?event.table,
                        collapsed,
                        "Change notification received"
                    );

                    if let Err(e) = self.reload().await {
                        error!(?e, "Failed to reload catalog snapshot");
                    }
                }

                _ = self.shutdown_rx.recv() => {
                    info!("Refresh agent shutting down");
                    break;
                }
            }
        }

        info!("Refresh agent stopped");
    }

    /// Replaces the shared snapshot with a freshly loaded one.
    async fn reload(&self) -> DbResult<()> {
        let fresh = CatalogSnapshot::load(&self.db).await?;

        if let Ok(mut snapshot) = self.snapshot.write() {
            *snapshot = fresh;
        }

        debug!("Catalog snapshot reloaded");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{CatalogTable, ChangeKind};
    use crate::service::CatalogService;
    use std::time::Duration;
    use stockline_core::ProductInput;
    use stockline_db::DbConfig;

    async fn seeded_service() -> CatalogService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = CatalogService::new(db);
        service.add_brand("Nike").await.unwrap();
        service.add_type("Sneakers").await.unwrap();
        service
    }

    fn product_input(label: &str) -> ProductInput {
        ProductInput {
            base_label: label.to_string(),
            brand_id: 1,
            brand_name: "Nike".to_string(),
            type_id: 1,
            type_name: "Sneakers".to_string(),
            image_url: None,
            mrp_paise: 899900,
            sp_paise: 799900,
            quantity: 3,
            size: None,
        }
    }

    /// Polls until the predicate holds or ~2s elapse.
    async fn wait_until(mut predicate: impl FnMut() -> bool) {
        for _ in 0..200 {
            if predicate() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not met within timeout");
    }

    #[tokio::test]
    async fn test_reload_replaces_snapshot() {
        let service = seeded_service().await;
        let (agent, _handle, snapshot) = RefreshAgent::new(service.database().clone());

        assert!(snapshot.read().unwrap().is_empty());

        agent.reload().await.unwrap();
        assert_eq!(snapshot.read().unwrap().brands.len(), 1);

        // Reloading again over unchanged data is a no-op in effect
        agent.reload().await.unwrap();
        assert_eq!(snapshot.read().unwrap().brands.len(), 1);
    }

    #[tokio::test]
    async fn test_run_loads_initially_and_refreshes_on_event() {
        let service = seeded_service().await;
        let (agent, handle, snapshot) = RefreshAgent::new(service.database().clone());

        let task = tokio::spawn(agent.run());

        // Initial load picks up the seeded brand/type
        {
            let snapshot = snapshot.clone();
            wait_until(move || snapshot.read().unwrap().brands.len() == 1).await;
        }

        // A mutation followed by its echo shows up after the reload
        service.add_product(product_input("Air Max")).await.unwrap();
        handle
            .notify(ChangeEvent::new(ChangeKind::Insert, CatalogTable::Products))
            .await
            .unwrap();

        {
            let snapshot = snapshot.clone();
            wait_until(move || snapshot.read().unwrap().products.len() == 1).await;
        }

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_event_burst_collapses_into_consistent_snapshot() {
        let service = seeded_service().await;
        let (agent, handle, snapshot) = RefreshAgent::new(service.database().clone());

        // Queue a burst BEFORE the agent starts; the whole burst must
        // collapse into reload(s) that each see the final state
        for label in ["Air Max", "Pegasus", "Vaporfly"] {
            service.add_product(product_input(label)).await.unwrap();
            handle
                .notify(ChangeEvent::new(ChangeKind::Insert, CatalogTable::Products))
                .await
                .unwrap();
        }

        let task = tokio::spawn(agent.run());

        {
            let snapshot = snapshot.clone();
            wait_until(move || snapshot.read().unwrap().products.len() == 3).await;
        }

        handle.shutdown().await.unwrap();
        task.await.unwrap();
    }
}
