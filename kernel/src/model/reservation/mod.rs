use crate::model::id::{CourtId, ReservationId, TimeSlotId, UserId};
use crate::model::user::ReservationUser;
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub reserved_by: ReservationUser,
    pub court: ReservationCourt,
    pub reserved_on: NaiveDate,
    pub slots: Vec<ReservationSlot>,
}

impl Reservation {
    /// 合計金額は予約枠ごとに確定した単価の総和。
    pub fn total_price(&self) -> Decimal {
        self.slots.iter().map(|slot| slot.price).sum()
    }
}

#[derive(Debug)]
pub struct ReservationCourt {
    pub court_id: CourtId,
    pub court_name: String,
}

#[derive(Debug)]
pub struct ReservationSlot {
    pub slot_id: TimeSlotId,
    pub band: String,
    pub shift: String,
    pub price: Decimal,
}

/// 予約一覧の絞り込み条件。None の項目は条件に含めない。
#[derive(Debug, Default, Clone, Copy)]
pub struct ReservationFilter {
    pub user_id: Option<UserId>,
    pub court_id: Option<CourtId>,
    pub reserved_on: Option<NaiveDate>,
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 1枠あたりの単価を確定する。
/// 週末かつ週末追加料金が登録済みの場合のみ加算し、それ以外は基本料金のまま。
pub fn slot_price(base_price: Decimal, date: NaiveDate, weekend_extra: Option<Decimal>) -> Decimal {
    if is_weekend(date) {
        match weekend_extra {
            Some(extra) => base_price + extra,
            None => base_price,
        }
    } else {
        base_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_is_not_weekend() {
        // 2025-03-07 は金曜日
        assert!(!is_weekend(date(2025, 3, 7)));
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        assert!(is_weekend(date(2025, 3, 8)));
        assert!(is_weekend(date(2025, 3, 9)));
    }

    #[test]
    fn weekday_price_ignores_weekend_extra() {
        let base = Decimal::new(1000, 2); // 10.00
        let extra = Some(Decimal::new(500, 2)); // 5.00
        assert_eq!(slot_price(base, date(2025, 3, 7), extra), base);
    }

    #[test]
    fn weekend_price_adds_registered_extra() {
        let base = Decimal::new(1000, 2);
        let extra = Some(Decimal::new(500, 2));
        assert_eq!(
            slot_price(base, date(2025, 3, 8), extra),
            Decimal::new(1500, 2)
        );
    }

    #[test]
    fn weekend_price_without_extra_falls_back_to_base() {
        let base = Decimal::new(1000, 2);
        assert_eq!(slot_price(base, date(2025, 3, 8), None), base);
    }

    #[test]
    fn total_price_sums_slot_prices() {
        // 基本料金 10.00、週末追加 5.00、週末に2枠 → 15.00 × 2 = 30.00
        let unit = slot_price(
            Decimal::new(1000, 2),
            date(2025, 3, 8),
            Some(Decimal::new(500, 2)),
        );
        let reservation = Reservation {
            reservation_id: ReservationId::new(),
            reserved_by: ReservationUser {
                user_id: UserId::new(),
                user_name: "test-user".into(),
                email: "test@example.com".into(),
            },
            court: ReservationCourt {
                court_id: CourtId::new(),
                court_name: "Court A".into(),
            },
            reserved_on: date(2025, 3, 8),
            slots: vec![
                ReservationSlot {
                    slot_id: TimeSlotId::new(),
                    band: "morning".into(),
                    shift: "first".into(),
                    price: unit,
                },
                ReservationSlot {
                    slot_id: TimeSlotId::new(),
                    band: "morning".into(),
                    shift: "second".into(),
                    price: unit,
                },
            ],
        };
        assert_eq!(reservation.total_price(), Decimal::new(3000, 2));
    }
}
