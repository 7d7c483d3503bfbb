pub mod event;

use crate::model::id::TimeSlotId;

/// 予約の最小単位となる時間帯。band が時間帯名、shift が同一時間帯内の区分。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub slot_id: TimeSlotId,
    pub band: String,
    pub shift: String,
}
