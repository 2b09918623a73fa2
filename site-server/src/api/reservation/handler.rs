//! Reservation API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::ensure_customer;
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, normalize_phone, validate_branch, validate_guests, validate_name,
    validate_optional_text, validate_phone, validate_reservation_slot,
};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reservation form payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    /// Tenant id of the selected branch
    pub branch_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, between 16:00 and 22:00
    pub time: String,
    pub guests: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Created reservation, echoed back to the form script
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationReceipt {
    pub id: String,
    pub reservation_date_time: String,
}

/// Submit a reservation
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<AppResponse<ReservationReceipt>>> {
    validate_name(&payload.name)?;
    let phone = normalize_phone(&payload.phone);
    validate_phone(&phone)?;
    validate_branch(&payload.branch_id)?;
    validate_guests(payload.guests)?;
    validate_optional_text(&payload.notes, "notes", MAX_MESSAGE_LEN)?;
    let slot = validate_reservation_slot(&payload.date, &payload.time)?;

    let customer = ensure_customer(&state, payload.name.trim(), &phone).await?;

    let reservation_date_time = slot.format("%Y-%m-%dT%H:%M:%S").to_string();
    let created = state
        .cms
        .create_reservation(
            &customer.id,
            &reservation_date_time,
            f64::from(payload.guests),
            payload.notes.as_deref(),
            &payload.branch_id,
        )
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    tracing::info!(
        customer_id = %customer.id,
        branch_id = %payload.branch_id,
        slot = %reservation_date_time,
        "Reservation created"
    );

    Ok(Json(AppResponse::success(ReservationReceipt {
        id: created.id,
        reservation_date_time: created.reservation_date_time,
    })))
}
