use chrono::NaiveDate;
use kernel::model::{id::CourtId, time_slot::TimeSlot};
use serde::{Deserialize, Serialize};

use crate::model::time_slot::TimeSlotResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub court_id: CourtId,
    pub date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeSlotsResponse {
    pub court_id: CourtId,
    pub date: NaiveDate,
    pub free: Vec<TimeSlotResponse>,
}

impl FreeSlotsResponse {
    pub fn new(court_id: CourtId, date: NaiveDate, slots: Vec<TimeSlot>) -> Self {
        Self {
            court_id,
            date,
            free: slots.into_iter().map(TimeSlotResponse::from).collect(),
        }
    }
}
