//! CMS client
//!
//! One instance is constructed at startup and cloned into handlers
//! (`reqwest::Client` is an `Arc` internally, so clones are cheap).
//! Every call is an independent POST of `{query, variables}`; no response
//! is cached — each page load re-fetches.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::{Customer, GalleryItem, HomeInformation, SubmissionStatus, Tenant};

use crate::error::{CmsError, CmsResult};
use crate::queries;
use crate::response::{
    CreateContactMessageData, CreateCustomerData, CreateReservationData, CreatedContactMessage,
    CreatedReservation, CustomersData, GalleriesData, GraphQlResponse, HomeInformationData,
    TenantsData,
};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// GraphQL client for the content backend
#[derive(Debug, Clone)]
pub struct CmsClient {
    client: Client,
    endpoint: String,
}

impl CmsClient {
    /// Create a client against the given GraphQL endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout_ms(endpoint, DEFAULT_TIMEOUT_MS)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout_ms(endpoint: impl Into<String>, timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one GraphQL operation and decode its `data` payload
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: Value,
    ) -> CmsResult<T> {
        let request = GraphQlRequest { query, variables };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CmsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse<T> = response.json().await?;

        if !envelope.errors.is_empty() {
            let messages = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CmsError::GraphQl(messages));
        }

        envelope
            .data
            .ok_or_else(|| CmsError::InvalidResponse("response has no data field".into()))
    }

    // ── Read operations (log + fallback) ────────────────────────────

    /// All tenants, up to `limit`. Empty on any failure.
    pub async fn fetch_tenants(&self, limit: u32) -> Vec<Tenant> {
        match self
            .execute::<TenantsData>(queries::GET_TENANTS, json!({ "limit": limit }))
            .await
        {
            Ok(data) => data.tenants.docs,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching tenants");
                Vec::new()
            }
        }
    }

    /// Tenant by slug. `None` on failure or no match.
    pub async fn fetch_tenant_by_slug(&self, slug: &str) -> Option<Tenant> {
        match self
            .execute::<TenantsData>(queries::GET_TENANT, json!({ "slug": slug }))
            .await
        {
            Ok(data) => data.tenants.docs.into_iter().next(),
            Err(e) => {
                tracing::error!(error = %e, slug, "Error fetching tenant");
                None
            }
        }
    }

    /// Landing-page content singleton. `None` on failure.
    pub async fn fetch_home_information(&self) -> Option<HomeInformation> {
        match self
            .execute::<HomeInformationData>(queries::GET_HOME_INFORMATION, json!({}))
            .await
        {
            Ok(data) => data.home_information,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching home information");
                None
            }
        }
    }

    /// Gallery items, optionally restricted to one branch.
    ///
    /// The upstream query has no filter argument, so the full collection is
    /// fetched and filtered here.
    pub async fn fetch_gallery(&self, branch_id: Option<&str>) -> Vec<GalleryItem> {
        match self
            .execute::<GalleriesData>(queries::GET_GALLERY, json!({}))
            .await
        {
            Ok(data) => filter_by_branch(data.galleries.docs, branch_id),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching gallery");
                Vec::new()
            }
        }
    }

    /// Customer lookup by phone. `None` on failure or no match.
    pub async fn fetch_customer_by_phone(&self, phone: &str) -> Option<Customer> {
        match self
            .execute::<CustomersData>(queries::GET_CUSTOMER, json!({ "customerPhone": phone }))
            .await
        {
            Ok(data) => data.customers.docs.into_iter().next(),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching customer");
                None
            }
        }
    }

    // ── Write operations (log + propagate) ──────────────────────────

    /// Create a customer record
    pub async fn create_customer(&self, name: &str, phone: &str) -> CmsResult<Customer> {
        let variables = json!({
            "customerName": name,
            "customerPhone": phone,
        });

        self.execute::<CreateCustomerData>(queries::CREATE_CUSTOMER, variables)
            .await
            .map(|data| data.create_customer)
            .inspect_err(|e| tracing::error!(error = %e, "Error creating customer"))
    }

    /// Create a reservation with status `Pending`
    pub async fn create_reservation(
        &self,
        customer_id: &str,
        reservation_date_time: &str,
        number_of_guests: f64,
        special_requests: Option<&str>,
        branch_id: &str,
    ) -> CmsResult<CreatedReservation> {
        let variables = json!({
            "customer": customer_id,
            "reservationDateTime": reservation_date_time,
            "numberOfGuests": number_of_guests,
            "specialRequests": special_requests,
            "branch": branch_id,
            "status": SubmissionStatus::Pending.as_str(),
        });

        self.execute::<CreateReservationData>(queries::CREATE_RESERVATION, variables)
            .await
            .map(|data| data.create_reservation)
            .inspect_err(|e| tracing::error!(error = %e, "Error creating reservation"))
    }

    /// Create a contact message with status `Pending`
    pub async fn create_contact_message(
        &self,
        customer_id: &str,
        message: Option<&str>,
        branch_id: &str,
    ) -> CmsResult<CreatedContactMessage> {
        let variables = json!({
            "customer": customer_id,
            "message": message.unwrap_or(""),
            "branch": branch_id,
            "status": SubmissionStatus::Pending.as_str(),
        });

        self.execute::<CreateContactMessageData>(queries::CREATE_CONTACT_MESSAGE, variables)
            .await
            .map(|data| data.create_contact_message)
            .inspect_err(|e| tracing::error!(error = %e, "Error creating contact message"))
    }
}

/// Keep only items belonging to `branch_id`, if one is given
fn filter_by_branch(items: Vec<GalleryItem>, branch_id: Option<&str>) -> Vec<GalleryItem> {
    match branch_id {
        Some(id) => items.into_iter().filter(|i| i.belongs_to(id)).collect(),
        None => items,
    }
}
