use kernel::model::{id::PriceExtraId, price_extra::PriceExtra};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct PriceExtraRow {
    pub price_extra_id: PriceExtraId,
    pub extra_name: String,
    pub extra_price: Decimal,
}

impl From<PriceExtraRow> for PriceExtra {
    fn from(value: PriceExtraRow) -> Self {
        let PriceExtraRow {
            price_extra_id,
            extra_name,
            extra_price,
        } = value;
        PriceExtra {
            price_extra_id,
            extra_name,
            extra_price,
        }
    }
}
