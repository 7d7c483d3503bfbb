pub mod auth;
pub mod court;
pub mod price_extra;
pub mod reservation;
pub mod time_slot;
pub mod user;
