//! Tenancy - subdomain resolution and request rewriting
//!
//! One tenant per subdomain: `gold.example.com` serves the `gold` tenant's
//! pages, `example.com` serves the shared landing site. The resolver turns
//! a hostname into an optional tenant slug; the rewrite middleware maps the
//! request path onto the internal `/tenant/{slug}` routes without the
//! browser-visible URL changing.

pub mod resolver;
pub mod rewrite;

pub use resolver::{base_domain, resolve_subdomain, strip_port, tenant_url};
pub use rewrite::{rewrite_path, rewrite_tenant_request};
