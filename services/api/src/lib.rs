//! Receipt processor web service.
//!
//! ## Endpoints
//! - POST /receipts/process - Submit a receipt, returns its id
//! - GET /receipts/{id}/points - Points awarded to a stored receipt
//! - GET /health - Liveness and stored receipt count
//! - GET /swagger-ui - Interactive API documentation

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;

pub use web::create_router;
