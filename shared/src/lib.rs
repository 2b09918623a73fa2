//! Shared types for the multi-tenant restaurant site
//!
//! Content models consumed from the upstream CMS, used by both the
//! GraphQL client (`cms-client`) and the web server (`site-server`).

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    BranchRef, Customer, GalleryImage, GalleryItem, HomeInformation, Logo, MediaRef, NewMenuItem,
    Quote, SubmissionStatus, Tenant,
};
