use crate::model::id::CourtId;
use rust_decimal::Decimal;

pub struct CreateCourt {
    pub court_name: String,
    pub covered: bool,
    pub capacity: i32,
    pub base_price: Decimal,
}

#[derive(Debug)]
pub struct UpdateCourt {
    pub court_id: CourtId,
    pub court_name: Option<String>,
    pub covered: Option<bool>,
    pub capacity: Option<i32>,
    pub base_price: Option<Decimal>,
}

#[derive(Debug)]
pub struct DeleteCourt {
    pub court_id: CourtId,
}
