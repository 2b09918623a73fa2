//! Home Information Model (Singleton)
//!
//! Global landing-page content: two catchphrases plus a list of quotes.
//! Edited as a single global record in the CMS.

use serde::{Deserialize, Serialize};

/// One marquee quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Landing-page content singleton
///
/// The legacy field names (`CatchPhrase1`, `quote_s_`) come from the CMS
/// schema and are kept on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeInformation {
    #[serde(rename = "CatchPhrase1")]
    pub catch_phrase_1: String,
    #[serde(rename = "CatchPhrase2")]
    pub catch_phrase_2: String,
    #[serde(rename = "quote_s_", default)]
    pub quotes: Vec<Quote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_information_wire_names() {
        let json = serde_json::json!({
            "CatchPhrase1": "Taste the difference",
            "CatchPhrase2": "Every day, every branch",
            "quote_s_": [ { "quote": "Best pho in town", "id": "q1" } ]
        });

        let info: HomeInformation = serde_json::from_value(json).unwrap();
        assert_eq!(info.catch_phrase_1, "Taste the difference");
        assert_eq!(info.quotes.len(), 1);
    }
}
