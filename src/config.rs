//! Board Configuration
//!
//! Defaults plus optional overrides from `<meta>` tags in the host page.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

const API_BASE_META: &str = "activity-board-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix of every backend URL, without trailing slash
    pub api_base: String,
    /// How long a status message stays visible
    pub message_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

impl BoardConfig {
    /// Read overrides from the current document, falling back to defaults
    pub fn from_document() -> Self {
        let api_base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META)).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        Self { api_base: normalize_api_base(api_base.as_deref()), ..Self::default() }
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() && base != "/" => base.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}
