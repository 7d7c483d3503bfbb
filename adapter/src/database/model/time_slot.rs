use kernel::model::{id::TimeSlotId, time_slot::TimeSlot};

#[derive(sqlx::FromRow)]
pub struct TimeSlotRow {
    pub slot_id: TimeSlotId,
    pub band: String,
    pub shift: String,
}

impl From<TimeSlotRow> for TimeSlot {
    fn from(value: TimeSlotRow) -> Self {
        let TimeSlotRow {
            slot_id,
            band,
            shift,
        } = value;
        TimeSlot {
            slot_id,
            band,
            shift,
        }
    }
}
