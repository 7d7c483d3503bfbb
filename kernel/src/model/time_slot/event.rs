use crate::model::id::TimeSlotId;

pub struct CreateTimeSlot {
    pub band: String,
    pub shift: String,
}

#[derive(Debug)]
pub struct UpdateTimeSlot {
    pub slot_id: TimeSlotId,
    pub band: Option<String>,
    pub shift: Option<String>,
}

#[derive(Debug)]
pub struct DeleteTimeSlot {
    pub slot_id: TimeSlotId,
}
