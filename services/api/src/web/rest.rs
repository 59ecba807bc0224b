//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use receipt_processor_core::domain::{
    parse_amount, parse_purchase_date, parse_purchase_time, Item, Receipt, ValidationError,
};
use receipt_processor_core::ports::PortError;
use receipt_processor_core::scoring::score_breakdown;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        process_receipt_handler,
        get_points_handler,
        health_handler,
    ),
    components(
        schemas(ReceiptPayload, ItemPayload, ReceiptIdResponse, PointsResponse, HealthResponse)
    ),
    tags(
        (name = "Receipt Processor API", description = "Submit receipts and look up their points.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// A receipt as submitted by a client. Amounts are decimal strings.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,
    #[schema(example = "9.00")]
    pub total: String,
    #[schema(example = "2022-03-20")]
    pub purchase_date: String,
    #[schema(example = "14:33")]
    pub purchase_time: String,
    #[serde(default)]
    pub items: Option<Vec<ItemPayload>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    #[schema(example = "Gatorade")]
    pub short_description: String,
    #[schema(example = "2.25")]
    pub price: String,
}

impl ReceiptPayload {
    /// Validates every field and builds the domain receipt.
    pub fn into_domain(self) -> Result<Receipt, ValidationError> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                Ok(Item {
                    price: parse_amount("price", &item.price)?,
                    description: item.short_description,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Receipt {
            total: parse_amount("total", &self.total)?,
            purchase_date: parse_purchase_date(&self.purchase_date)?,
            purchase_time: parse_purchase_time(&self.purchase_time)?,
            retailer: self.retailer,
            items,
        })
    }
}

/// The response payload sent after a receipt is accepted.
#[derive(Serialize, ToSchema)]
pub struct ReceiptIdResponse {
    #[schema(example = "7fb1377b-b223-49d9-a31a-5a02701dd310")]
    pub id: String,
}

/// The points awarded to a stored receipt.
#[derive(Serialize, ToSchema)]
pub struct PointsResponse {
    #[schema(example = 109)]
    pub points: u64,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Submit a receipt for processing.
///
/// Returns the identifier under which the receipt was stored.
#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = ReceiptPayload,
    responses(
        (status = 200, description = "Receipt accepted", body = ReceiptIdResponse),
        (status = 400, description = "The receipt is invalid"),
        (status = 413, description = "The request body is too large"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn process_receipt_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected receipt body: {}", rejection.body_text());
        // Oversized bodies keep their 413; every other rejection is a bad receipt.
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        (
            status,
            format!("The receipt is invalid: {}", rejection.body_text()),
        )
    })?;

    let receipt = payload.into_domain().map_err(|e| {
        warn!("Rejected receipt fields: {}", e);
        (
            StatusCode::BAD_REQUEST,
            format!("The receipt is invalid: {}", e),
        )
    })?;

    let stored = app_state.store.submit(receipt).await.map_err(|e| {
        error!("Failed to store receipt: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store receipt".to_string(),
        )
    })?;

    info!(receipt_id = %stored.id, "Receipt accepted");
    Ok(Json(ReceiptIdResponse {
        id: stored.id.to_string(),
    }))
}

/// Get the points awarded to a receipt.
#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    responses(
        (status = 200, description = "Points computed", body = PointsResponse),
        (status = 404, description = "No receipt found for that id"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = String, Path, description = "The id returned when the receipt was submitted.")
    )
)]
pub async fn get_points_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let stored = app_state.store.lookup(&id).await.map_err(|e| match e {
        PortError::NotFound(_) => {
            warn!(receipt_id = %id, "Points requested for unknown receipt");
            (
                StatusCode::NOT_FOUND,
                "No receipt found for that ID.".to_string(),
            )
        }
        other => {
            error!("Failed to look up receipt {}: {:?}", id, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to look up receipt".to_string(),
            )
        }
    })?;

    let breakdown = score_breakdown(&stored.receipt);
    debug!(receipt_id = %stored.id, ?breakdown, "Receipt scored");

    Ok(Json(PointsResponse {
        points: breakdown.total(),
    }))
}

/// Report that the service is up and how many receipts it holds.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let receipts = app_state.store.count().await.map_err(|e| {
        error!("Failed to count receipts: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Receipt store unavailable".to_string(),
        )
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(date: &str, time: &str, price: &str) -> ReceiptPayload {
        ReceiptPayload {
            retailer: "Target".to_string(),
            total: "1.25".to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items: Some(vec![ItemPayload {
                short_description: "Pepsi".to_string(),
                price: price.to_string(),
            }]),
        }
    }

    #[test]
    fn valid_payload_converts() {
        let receipt = payload("2022-01-01", "13:01", "1.25").into_domain().unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].description, "Pepsi");
    }

    #[test]
    fn missing_items_means_no_items() {
        let mut p = payload("2022-01-01", "13:01", "1.25");
        p.items = None;
        assert!(p.into_domain().unwrap().items.is_empty());
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(matches!(
            payload("01/01/2022", "13:01", "1.25").into_domain(),
            Err(ValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            payload("2022-01-01", "1pm", "1.25").into_domain(),
            Err(ValidationError::InvalidTime(_))
        ));
        assert!(matches!(
            payload("2022-01-01", "13:01", "cheap").into_domain(),
            Err(ValidationError::InvalidAmount { field: "price", .. })
        ));
        assert!(matches!(
            payload("2022-01-01", "13:01", "90000000000000000000").into_domain(),
            Err(ValidationError::AmountTooLarge { field: "price", .. })
        ));
    }
}
