use axum::{
    extract::{Query, State},
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    availability::{AvailabilityQuery, FreeSlotsResponse},
    parse_date,
};

// 空き枠の照会は未ログインでも可
pub async fn show_free_slots(
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FreeSlotsResponse>> {
    let date = parse_date(&query.date)?;

    registry
        .availability_repository()
        .find_free_slots(query.court_id, date)
        .await
        .map(|slots| FreeSlotsResponse::new(query.court_id, date, slots))
        .map(Json)
}
