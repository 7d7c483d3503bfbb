use kernel::model::{court::Court, id::CourtId};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct CourtRow {
    pub court_id: CourtId,
    pub court_name: String,
    pub covered: bool,
    pub capacity: i32,
    pub base_price: Decimal,
}

impl From<CourtRow> for Court {
    fn from(value: CourtRow) -> Self {
        let CourtRow {
            court_id,
            court_name,
            covered,
            capacity,
            base_price,
        } = value;
        Court {
            court_id,
            court_name,
            covered,
            capacity,
            base_price,
        }
    }
}
