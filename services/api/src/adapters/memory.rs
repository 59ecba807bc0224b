//! services/api/src/adapters/memory.rs
//!
//! The in-process implementation of the `ReceiptStore` port. Receipts live in a
//! single map guarded by an async read/write lock and are lost when the process
//! exits.

use async_trait::async_trait;
use receipt_processor_core::domain::{Receipt, ReceiptId, StoredReceipt};
use receipt_processor_core::ports::{PortError, PortResult, ReceiptStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A receipt store that keeps every accepted receipt in memory.
#[derive(Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

//=========================================================================================
// Port Implementation
//=========================================================================================

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn submit(&self, receipt: Receipt) -> PortResult<StoredReceipt> {
        let stored = StoredReceipt {
            id: ReceiptId::generate(),
            receipt,
        };
        // v4 collisions are not checked; the chance is negligible.
        self.receipts
            .write()
            .await
            .insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn lookup(&self, id: &str) -> PortResult<StoredReceipt> {
        let not_found = || PortError::NotFound(format!("No receipt found for id {}", id));
        let receipt_id = ReceiptId::parse_issued(id).ok_or_else(not_found)?;
        self.receipts
            .read()
            .await
            .get(&receipt_id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn count(&self) -> PortResult<usize> {
        Ok(self.receipts.read().await.len())
    }
}
