//! Frontend Models
//!
//! Data structures matching the activities backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Activity identifier.
///
/// The backend may send ids as JSON strings or integers; both end up as text
/// because the signup body always carries the id as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ActivityId(pub String);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ActivityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ActivityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Int(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self(text),
            Repr::Int(n) => Self(n.to_string()),
        })
    }
}

/// Activity data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub description: String,
    /// Participant emails, in signup order
    pub participants: Vec<String>,
    pub schedule: Option<String>,
    pub leader: Option<String>,
    pub max_participants: Option<u32>,
}

impl Activity {
    /// Remaining capacity, if the backend reports one
    pub fn spots_left(&self) -> Option<u32> {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.map(|max| max.saturating_sub(taken))
    }
}

/// Body of `POST /signup`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    #[serde(rename = "activityId")]
    pub activity_id: ActivityId,
}

/// Error body returned by the backend on rejected requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// ========================
// Payload decoding
// ========================

#[derive(Deserialize)]
struct RawActivity {
    #[serde(default)]
    id: Option<ActivityId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    participants: Option<Vec<String>>,
    #[serde(default)]
    schedule: Option<String>,
    #[serde(default)]
    leader: Option<String>,
    #[serde(default)]
    max_participants: Option<u32>,
}

impl RawActivity {
    fn into_activity(self, key: Option<String>) -> Result<Activity, String> {
        let name = self
            .name
            .or_else(|| key.clone())
            .ok_or_else(|| "activity without a name".to_string())?;
        let id = self.id.or(key.map(ActivityId)).unwrap_or_else(|| ActivityId(name.clone()));

        Ok(Activity {
            id,
            name,
            description: self.description.unwrap_or_default(),
            participants: self.participants.unwrap_or_default(),
            schedule: self.schedule,
            leader: self.leader,
            max_participants: self.max_participants,
        })
    }
}

/// `GET /activities` comes either as a list or as an object keyed by name.
/// The keyed form keeps the server's key order (`preserve_order`).
#[derive(Deserialize)]
#[serde(untagged)]
enum ActivitiesPayload {
    List(Vec<RawActivity>),
    Keyed(serde_json::Map<String, serde_json::Value>),
}

/// Decode the body of `GET /activities` into display order
pub fn decode_activities(body: &str) -> Result<Vec<Activity>, String> {
    let payload: ActivitiesPayload = serde_json::from_str(body).map_err(|e| e.to_string())?;
    match payload {
        ActivitiesPayload::List(raw) => raw.into_iter().map(|a| a.into_activity(None)).collect(),
        ActivitiesPayload::Keyed(raw) => raw
            .into_iter()
            .map(|(key, value)| {
                let a: RawActivity = serde_json::from_value(value).map_err(|e| format!("{}: {}", key, e))?;
                a.into_activity(Some(key))
            })
            .collect(),
    }
}
