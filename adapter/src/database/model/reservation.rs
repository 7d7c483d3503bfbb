use chrono::NaiveDate;
use kernel::model::{
    id::{CourtId, ReservationId, TimeSlotId, UserId},
    reservation::{Reservation, ReservationCourt, ReservationSlot},
    user::ReservationUser,
};
use rust_decimal::Decimal;

// 予約の一覧・詳細を取得する際に使う型
// 予約者とコートの情報も INNER JOIN で一緒に抽出する
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub court_id: CourtId,
    pub court_name: String,
    pub reserved_on: NaiveDate,
}

impl ReservationRow {
    // 別クエリで取得した予約枠と合わせて Reservation 型に組み立てる
    pub fn into_reservation(self, slots: Vec<ReservationSlot>) -> Reservation {
        let ReservationRow {
            reservation_id,
            user_id,
            user_name,
            email,
            court_id,
            court_name,
            reserved_on,
        } = self;
        Reservation {
            reservation_id,
            reserved_by: ReservationUser {
                user_id,
                user_name,
                email,
            },
            court: ReservationCourt {
                court_id,
                court_name,
            },
            reserved_on,
            slots,
        }
    }
}

// 予約に紐づく枠を取得する際に使う型
// 確定済みの単価を保持するため、時間帯の情報と price を一緒に抽出する
#[derive(sqlx::FromRow)]
pub struct ReservationSlotRow {
    pub reservation_id: ReservationId,
    pub slot_id: TimeSlotId,
    pub band: String,
    pub shift: String,
    pub price: Decimal,
}

impl From<ReservationSlotRow> for ReservationSlot {
    fn from(value: ReservationSlotRow) -> Self {
        let ReservationSlotRow {
            reservation_id: _,
            slot_id,
            band,
            shift,
            price,
        } = value;
        ReservationSlot {
            slot_id,
            band,
            shift,
            price,
        }
    }
}
