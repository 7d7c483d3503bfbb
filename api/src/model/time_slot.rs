use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::TimeSlotId,
    time_slot::{
        event::{CreateTimeSlot, UpdateTimeSlot},
        TimeSlot,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    pub items: Vec<TimeSlotResponse>,
}

impl From<Vec<TimeSlot>> for TimeSlotsResponse {
    fn from(value: Vec<TimeSlot>) -> Self {
        Self {
            items: value.into_iter().map(TimeSlotResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
    pub id: TimeSlotId,
    pub band: String,
    pub shift: String,
}

impl From<TimeSlot> for TimeSlotResponse {
    fn from(value: TimeSlot) -> Self {
        let TimeSlot {
            slot_id,
            band,
            shift,
        } = value;
        Self {
            id: slot_id,
            band,
            shift,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeSlotRequest {
    #[garde(length(min = 1))]
    pub band: String,
    #[garde(length(min = 1))]
    pub shift: String,
}

impl From<CreateTimeSlotRequest> for CreateTimeSlot {
    fn from(value: CreateTimeSlotRequest) -> Self {
        let CreateTimeSlotRequest { band, shift } = value;
        Self { band, shift }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeSlotRequest {
    #[garde(length(min = 1))]
    pub band: Option<String>,
    #[garde(length(min = 1))]
    pub shift: Option<String>,
}

#[derive(new)]
pub struct UpdateTimeSlotRequestWithId(TimeSlotId, UpdateTimeSlotRequest);
impl From<UpdateTimeSlotRequestWithId> for UpdateTimeSlot {
    fn from(value: UpdateTimeSlotRequestWithId) -> Self {
        let UpdateTimeSlotRequestWithId(slot_id, UpdateTimeSlotRequest { band, shift }) = value;
        UpdateTimeSlot {
            slot_id,
            band,
            shift,
        }
    }
}
