//! CMS Client - GraphQL client for the content backend
//!
//! Issues the fixed set of queries and mutations the site consumes against
//! the CMS's GraphQL endpoint and returns typed `shared` models.
//!
//! # Error policy
//!
//! | Operation kind | On failure |
//! |----------------|------------|
//! | Reads (tenants, gallery, home info, customer lookup) | log + empty/`None` fallback |
//! | Writes (customer, reservation, contact message) | log + return `Err` to the caller |
//!
//! Callers of read operations cannot distinguish "not found" from "backend
//! unreachable"; both produce the fallback value.

pub mod client;
pub mod error;
pub mod queries;
pub mod response;

pub use client::CmsClient;
pub use error::{CmsError, CmsResult};
pub use response::{CreatedContactMessage, CreatedReservation};
