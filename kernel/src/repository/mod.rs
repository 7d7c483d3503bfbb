pub mod auth;
pub mod availability;
pub mod court;
pub mod health;
pub mod price_extra;
pub mod reservation;
pub mod time_slot;
pub mod user;
