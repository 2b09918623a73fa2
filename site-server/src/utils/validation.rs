//! Input validation helpers
//!
//! Centralized field rules for the lead-capture forms. Limits mirror what
//! the CMS accepts; the phone patterns cover Vietnamese numbers only,
//! which is the customer base of every branch.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Minimum customer name length (matches the form rule)
pub const MIN_NAME_LEN: usize = 5;

/// Contact message / special request texts
pub const MAX_MESSAGE_LEN: usize = 500;

// ── Phone numbers ───────────────────────────────────────────────────

// Vietnamese phone number patterns:
// Mobile: 03, 05, 07, 08, 09 + 8 digits
// Landline: 02 + 9 digits
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(03|05|07|08|09)[0-9]{8}$").expect("valid mobile pattern"));
static LANDLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^02[0-9]{9}$").expect("valid landline pattern"));

/// Strip whitespace before matching; users type numbers with spaces.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate an already-normalized phone number.
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if phone.is_empty() {
        return Err(AppError::validation("Phone number is required"));
    }
    if !MOBILE_RE.is_match(phone) && !LANDLINE_RE.is_match(phone) {
        return Err(AppError::validation(
            "Please enter a valid Vietnamese phone number",
        ));
    }
    Ok(())
}

// ── Form fields ─────────────────────────────────────────────────────

/// Customer name: required, at least [`MIN_NAME_LEN`] characters trimmed.
pub fn validate_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name must be at least {MIN_NAME_LEN} characters"
        )));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name is too long ({} chars, max {MAX_NAME_LEN})",
            trimmed.len()
        )));
    }
    Ok(())
}

/// Branch selection: a non-empty tenant id.
pub fn validate_branch(branch_id: &str) -> Result<(), AppError> {
    if branch_id.trim().is_empty() {
        return Err(AppError::validation("Please select a branch"));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Guest count for reservations.
pub fn validate_guests(guests: u32) -> Result<(), AppError> {
    if guests == 0 {
        return Err(AppError::validation("At least 1 guest is required"));
    }
    Ok(())
}

// ── Reservation slot ────────────────────────────────────────────────

/// Validate a reservation date and time, returning the combined slot.
///
/// Rules (as enforced by the booking form):
/// - date must parse as `YYYY-MM-DD` and be today or later
/// - time must parse as `HH:MM` and fall between 16:00 and 22:00
/// - a same-day slot must still be in the future
pub fn validate_reservation_slot(date: &str, time: &str) -> Result<NaiveDateTime, AppError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Date is required"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation("Time is required"))?;

    let minutes = time.hour() * 60 + time.minute();
    if !(16 * 60..=22 * 60).contains(&minutes) {
        return Err(AppError::validation(
            "Time must be between 16:00 and 22:00",
        ));
    }

    let now = Local::now().naive_local();
    if date < now.date() {
        return Err(AppError::validation("Date must be today or later"));
    }

    let slot = NaiveDateTime::new(date, time);
    if date == now.date() && slot <= now {
        return Err(AppError::validation(
            "For today's reservation, please select a time later than now",
        ));
    }

    Ok(slot)
}
