//! Gallery Model

use serde::{Deserialize, Serialize};

/// Gallery image payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Owning branch of a gallery item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Gallery entry: an image with optional caption, attributed to a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    #[serde(default)]
    pub image: Option<GalleryImage>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub branch: Option<BranchRef>,
}

impl GalleryItem {
    /// Whether this item belongs to the given branch id.
    pub fn belongs_to(&self, branch_id: &str) -> bool {
        self.branch.as_ref().is_some_and(|b| b.id == branch_id)
    }
}
