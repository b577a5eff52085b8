use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Branding document supplied by the CMS, consumed once at startup.
///
/// Every field is optional; a missing document or a missing field silently
/// keeps the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub logo: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub favicon_svg: Option<String>,
    pub favicon_16: Option<String>,
    pub favicon_32: Option<String>,
    pub favicon_180: Option<String>,
    pub favicon_192: Option<String>,
    pub favicon_512: Option<String>,
    pub prospectus: Option<String>,
}

impl SiteSettings {
    /// Load settings from the given document, or return defaults if it is
    /// missing or unparsable.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        fs::read_to_string(path.as_ref())
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}
