pub mod event;

use crate::model::id::PriceExtraId;
use rust_decimal::Decimal;

/// 週末料金の検索に使う追加料金名。この名前の追加料金が存在しない場合、
/// 週末でも基本料金のみで計算する。
pub const WEEKEND_EXTRA_NAME: &str = "Weekend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceExtra {
    pub price_extra_id: PriceExtraId,
    pub extra_name: String,
    pub extra_price: Decimal,
}
