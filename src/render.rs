//! Board Projection
//!
//! Pure mapping from the fetched activity sequence to what the page shows.
//! Re-run on every load; the page never patches this incrementally.

use crate::models::{Activity, ActivityId};

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Identity of one participant row: which activity, which email
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantKey {
    pub activity_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParticipantRow {
    /// Shown alone when the activity has nobody signed up
    Placeholder,
    Participant(ParticipantKey),
}

/// One rendered activity card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardView {
    pub key: ActivityId,
    pub name: String,
    pub description: String,
    pub schedule: Option<String>,
    pub leader: Option<String>,
    pub spots_left: Option<u32>,
    pub rows: Vec<ParticipantRow>,
}

/// One `<option>` of the signup select
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: ActivityId,
    pub label: String,
}

/// Everything derived from one activities response
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardModel {
    pub cards: Vec<CardView>,
    pub options: Vec<SelectOption>,
}

fn participant_rows(activity: &Activity) -> Vec<ParticipantRow> {
    if activity.participants.is_empty() {
        return vec![ParticipantRow::Placeholder];
    }
    activity
        .participants
        .iter()
        .map(|email| {
            ParticipantRow::Participant(ParticipantKey {
                activity_name: activity.name.clone(),
                email: email.clone(),
            })
        })
        .collect()
}

/// One card per activity, in response order
pub fn cards(activities: &[Activity]) -> Vec<CardView> {
    activities
        .iter()
        .map(|activity| CardView {
            key: activity.id.clone(),
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            leader: activity.leader.clone(),
            spots_left: activity.spots_left(),
            rows: participant_rows(activity),
        })
        .collect()
}

/// Select options (value = id, label = name); always the complete set
pub fn select_options(activities: &[Activity]) -> Vec<SelectOption> {
    activities
        .iter()
        .map(|activity| SelectOption { value: activity.id.clone(), label: activity.name.clone() })
        .collect()
}

pub fn project(activities: &[Activity]) -> BoardModel {
    BoardModel { cards: cards(activities), options: select_options(activities) }
}
