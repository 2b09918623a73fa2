//! Tenant Model
//!
//! One restaurant brand/location. The `slug` doubles as the subdomain and
//! as the lookup key; at most one tenant exists per slug.

use serde::{Deserialize, Serialize};

/// Uploaded media reference (menu PDF, hero image, new-menu image)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
}

impl MediaRef {
    /// Public URL of the file.
    ///
    /// The CMS serves uploads under `/media/{filename}`; the raw `url`
    /// field is only a fallback for records without a filename.
    pub fn public_url(&self, api_base: &str) -> String {
        match self.filename.as_deref() {
            Some(name) if !name.is_empty() => format!("{}/media/{}", api_base, name),
            _ => format!("{}{}", api_base, self.url),
        }
    }
}

/// Tenant logo (URL only, no filename on the wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logo {
    pub url: String,
}

/// One image of a tenant's "new menu" promotion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    #[serde(default)]
    pub src: Option<MediaRef>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Tenant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub menu: Option<MediaRef>,
    #[serde(default)]
    pub logo: Option<Logo>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<MediaRef>,
    #[serde(default)]
    pub short_about_title: Option<String>,
    #[serde(default)]
    pub short_about_text: Option<String>,
    #[serde(default)]
    pub new_menu: Vec<NewMenuItem>,
}

impl Tenant {
    /// Whether the tenant has any new-menu promotion images to show.
    pub fn has_new_menu(&self) -> bool {
        self.new_menu.iter().any(|item| item.src.is_some())
    }
}
