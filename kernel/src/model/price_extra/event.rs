use crate::model::id::PriceExtraId;
use rust_decimal::Decimal;

pub struct CreatePriceExtra {
    pub extra_name: String,
    pub extra_price: Decimal,
}

#[derive(Debug)]
pub struct UpdatePriceExtra {
    pub price_extra_id: PriceExtraId,
    pub extra_name: Option<String>,
    pub extra_price: Option<Decimal>,
}

#[derive(Debug)]
pub struct DeletePriceExtra {
    pub price_extra_id: PriceExtraId,
}
