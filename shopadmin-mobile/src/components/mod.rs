//! Reusable mobile UI components

pub mod card;
pub mod status_badge;

pub use card::Card;
pub use status_badge::StatusBadge;
