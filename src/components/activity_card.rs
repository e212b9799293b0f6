//! Activity Card Component
//!
//! Name, description and participant list of one activity.

use leptos::prelude::*;

use crate::components::ParticipantItem;
use crate::render::{CardView, ParticipantKey};

#[component]
pub fn ActivityCard(
    card: CardView,
    on_remove: Callback<ParticipantKey>,
) -> impl IntoView {
    let CardView { name, description, schedule, leader, spots_left, rows, .. } = card;

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            {schedule.map(|s| view! {
                <p class="activity-schedule"><strong>"Schedule: "</strong>{s}</p>
            })}
            {leader.map(|l| view! {
                <p class="activity-leader"><strong>"Leader: "</strong>{l}</p>
            })}
            {spots_left.map(|n| view! {
                <p class="activity-availability"><strong>"Availability: "</strong>{format!("{} spots left", n)}</p>
            })}

            <div class="participants-section">
                <h5>"Participants"</h5>
                <ul class="participants-list">
                    {rows.into_iter().map(|row| view! {
                        <ParticipantItem row=row on_remove=on_remove />
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
