pub mod access;
pub mod auth;
pub mod court;
pub mod id;
pub mod price_extra;
pub mod reservation;
pub mod role;
pub mod time_slot;
pub mod user;
