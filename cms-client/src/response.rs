//! GraphQL response shapes
//!
//! The transport envelope plus the per-operation `data` payloads. Payload
//! collections come back as `{ docs: [...] }` pages.

use serde::Deserialize;
use shared::{Customer, GalleryItem, HomeInformation, Tenant};

/// Transport envelope: `{ data, errors }`
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of the `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Collection page: the CMS wraps list results in `docs`
#[derive(Debug, Deserialize)]
pub struct Docs<T> {
    pub docs: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct TenantsData {
    #[serde(rename = "Tenants")]
    pub tenants: Docs<Tenant>,
}

#[derive(Debug, Deserialize)]
pub struct HomeInformationData {
    #[serde(rename = "HomeInformation")]
    pub home_information: Option<HomeInformation>,
}

#[derive(Debug, Deserialize)]
pub struct GalleriesData {
    #[serde(rename = "Galleries")]
    pub galleries: Docs<GalleryItem>,
}

#[derive(Debug, Deserialize)]
pub struct CustomersData {
    #[serde(rename = "Customers")]
    pub customers: Docs<Customer>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerData {
    #[serde(rename = "createCustomer")]
    pub create_customer: Customer,
}

/// Reservation record as returned by `createReservation`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedReservation {
    pub id: String,
    #[serde(rename = "reservationDateTime")]
    pub reservation_date_time: String,
    #[serde(rename = "numberOfGuests")]
    pub number_of_guests: f64,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationData {
    #[serde(rename = "createReservation")]
    pub create_reservation: CreatedReservation,
}

/// Contact message record as returned by `createContactMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedContactMessage {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateContactMessageData {
    #[serde(rename = "createContactMessage")]
    pub create_contact_message: CreatedContactMessage,
}
