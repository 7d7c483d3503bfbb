use chrono::NaiveDate;
use shared::error::{AppError, AppResult};

pub mod auth;
pub mod availability;
pub mod court;
pub mod price_extra;
pub mod reservation;
pub mod time_slot;
pub mod user;

// リクエスト中の日付文字列は YYYY-MM-DD のみ受け付ける
pub(crate) fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::UnprocessableEntity(format!(
            "日付（{value}）は YYYY-MM-DD 形式で指定してください。"
        ))
    })
}
