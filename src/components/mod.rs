//! UI Components
//!
//! Leptos components for the activity board.

mod activity_list;
mod activity_card;
mod participant_item;
mod signup_form;
mod message_banner;

pub use activity_list::ActivityList;
pub use activity_card::ActivityCard;
pub use participant_item::ParticipantItem;
pub use signup_form::SignupForm;
pub use message_banner::MessageBanner;
