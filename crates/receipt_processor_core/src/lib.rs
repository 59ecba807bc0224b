pub mod domain;
pub mod ports;
pub mod scoring;

pub use domain::{Item, Receipt, ReceiptId, StoredReceipt, ValidationError};
pub use ports::{PortError, PortResult, ReceiptStore};
pub use scoring::{score, score_breakdown, ScoreBreakdown};
