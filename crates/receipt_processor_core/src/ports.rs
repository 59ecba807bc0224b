//! crates/receipt_processor_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary between the scoring core and the adapters
//! that hold receipts, so handlers and tests can swap store implementations.

use async_trait::async_trait;
use crate::domain::{Receipt, StoredReceipt};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Write-once storage for accepted receipts. Entries are never updated or
/// removed for the lifetime of the store.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Assigns a fresh identifier to a validated receipt and stores it.
    async fn submit(&self, receipt: Receipt) -> PortResult<StoredReceipt>;

    /// Fetches a receipt by the exact identifier `submit` returned.
    ///
    /// Identifiers that were never issued, malformed ones included, yield
    /// `PortError::NotFound`.
    async fn lookup(&self, id: &str) -> PortResult<StoredReceipt>;

    /// The number of receipts currently held.
    async fn count(&self) -> PortResult<usize>;
}
