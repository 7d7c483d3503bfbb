use crate::model::id::CourtId;
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug)]
pub struct Court {
    pub court_id: CourtId,
    pub court_name: String,
    pub covered: bool,
    pub capacity: i32,
    pub base_price: Decimal,
}
