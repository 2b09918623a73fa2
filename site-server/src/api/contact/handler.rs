//! Contact API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::ensure_customer;
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, normalize_phone, validate_branch, validate_name, validate_optional_text,
    validate_phone,
};
use crate::utils::{AppError, AppResponse, AppResult};

/// Contact form payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    /// Tenant id of the selected branch
    pub branch_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Created record id, echoed back to the form script
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub id: String,
}

/// Submit a contact message
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactRequest>,
) -> AppResult<Json<AppResponse<SubmissionReceipt>>> {
    validate_name(&payload.name)?;
    let phone = normalize_phone(&payload.phone);
    validate_phone(&phone)?;
    validate_branch(&payload.branch_id)?;
    validate_optional_text(&payload.message, "message", MAX_MESSAGE_LEN)?;

    let customer = ensure_customer(&state, payload.name.trim(), &phone).await?;

    let created = state
        .cms
        .create_contact_message(&customer.id, payload.message.as_deref(), &payload.branch_id)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    tracing::info!(
        customer_id = %customer.id,
        branch_id = %payload.branch_id,
        "Contact message created"
    );

    Ok(Json(AppResponse::success(SubmissionReceipt {
        id: created.id,
    })))
}
