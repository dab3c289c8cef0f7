pub mod date;
pub mod error;
pub mod instructor;
pub mod location;
pub mod member;
pub mod membership_plan;
pub mod offer;
pub mod profile;
pub mod time_slot;
