//! Endpoint URLs
//!
//! Builds the request URLs consumed by the board, relative to the configured
//! API base.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    /// `GET` activity collection
    pub fn activities(&self) -> String {
        format!("{}/activities", self.base)
    }

    /// `POST` create-signup
    pub fn signup(&self) -> String {
        format!("{}/signup", self.base)
    }

    /// `DELETE` a participant from an activity
    pub fn unregister(&self, activity_name: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/unregister?email={}",
            self.base,
            encode_component(activity_name),
            encode_component(email)
        )
    }
}
