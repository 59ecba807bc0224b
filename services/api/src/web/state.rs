//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use receipt_processor_core::ports::ReceiptStore;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        Self { store }
    }
}
