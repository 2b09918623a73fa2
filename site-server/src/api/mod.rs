//! Lead-capture API
//!
//! # 结构
//!
//! - [`contact`] - 联系消息提交接口
//! - [`reservation`] - 订座提交接口
//!
//! Both endpoints share the customer flow: look the customer up by phone
//! first and only create one when the lookup comes back empty.

pub mod contact;
pub mod reservation;

use shared::Customer;

use crate::core::ServerState;
use crate::utils::AppError;

/// Find or create the customer for a submission.
///
/// Lookup-before-create keeps repeat submitters deduplicated by phone.
/// Not transactional: two racing submissions with the same new number can
/// still create two records, which the CMS side tolerates.
pub(crate) async fn ensure_customer(
    state: &ServerState,
    name: &str,
    phone: &str,
) -> Result<Customer, AppError> {
    if let Some(existing) = state.cms.fetch_customer_by_phone(phone).await {
        return Ok(existing);
    }

    state
        .cms
        .create_customer(name, phone)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))
}
