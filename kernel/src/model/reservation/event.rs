use crate::model::id::{CourtId, ReservationId, TimeSlotId, UserId};
use chrono::NaiveDate;
use derive_new::new;

#[derive(new)]
pub struct CreateReservation {
    pub reserved_by: UserId,
    pub court_id: CourtId,
    pub reserved_on: NaiveDate,
    pub slot_ids: Vec<TimeSlotId>,
}

#[derive(new)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
    pub requested_by: UserId,
}
