use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{CourtId, ReservationId, TimeSlotId, UserId},
    reservation::{Reservation, ReservationCourt, ReservationFilter, ReservationSlot},
    user::ReservationUser,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;

use crate::model::parse_date;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub court_id: CourtId,
    #[garde(length(min = 1))]
    pub date: String,
    #[garde(length(min = 1))]
    pub slot_ids: Vec<TimeSlotId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub reserved_by: ReservationUserResponse,
    pub court: ReservationCourtResponse,
    pub reserved_on: NaiveDate,
    pub slots: Vec<ReservationSlotResponse>,
    pub total_price: Decimal,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let total_price = value.total_price();
        let Reservation {
            reservation_id,
            reserved_by,
            court,
            reserved_on,
            slots,
        } = value;
        Self {
            reservation_id,
            reserved_by: reserved_by.into(),
            court: court.into(),
            reserved_on,
            slots: slots.into_iter().map(ReservationSlotResponse::from).collect(),
            total_price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<ReservationUser> for ReservationUserResponse {
    fn from(value: ReservationUser) -> Self {
        let ReservationUser {
            user_id,
            user_name,
            email,
        } = value;
        Self {
            user_id,
            user_name,
            email,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCourtResponse {
    pub court_id: CourtId,
    pub court_name: String,
}

impl From<ReservationCourt> for ReservationCourtResponse {
    fn from(value: ReservationCourt) -> Self {
        let ReservationCourt {
            court_id,
            court_name,
        } = value;
        Self {
            court_id,
            court_name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSlotResponse {
    pub slot_id: TimeSlotId,
    pub band: String,
    pub shift: String,
    pub price: Decimal,
}

impl From<ReservationSlot> for ReservationSlotResponse {
    fn from(value: ReservationSlot) -> Self {
        let ReservationSlot {
            slot_id,
            band,
            shift,
            price,
        } = value;
        Self {
            slot_id,
            band,
            shift,
            price,
        }
    }
}

// 管理者向け予約一覧の絞り込み条件
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    pub user_id: Option<UserId>,
    pub court_id: Option<CourtId>,
    pub date: Option<String>,
}

impl TryFrom<ReservationListQuery> for ReservationFilter {
    type Error = shared::error::AppError;

    fn try_from(value: ReservationListQuery) -> AppResult<Self> {
        let ReservationListQuery {
            user_id,
            court_id,
            date,
        } = value;
        let reserved_on = date.as_deref().map(parse_date).transpose()?;
        Ok(Self {
            user_id,
            court_id,
            reserved_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_response_totals_slot_prices() {
        let unit = Decimal::new(1500, 2); // 15.00
        let reservation = Reservation {
            reservation_id: "7cb40ae4-fa3d-41a9-a279-de3b0ceba928".parse().unwrap(),
            reserved_by: ReservationUser {
                user_id: UserId::new(),
                user_name: "山田太郎".into(),
                email: "taro@example.com".into(),
            },
            court: ReservationCourt {
                court_id: CourtId::new(),
                court_name: "Aコート".into(),
            },
            reserved_on: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(),
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

        let json = serde_json::to_value(ReservationResponse::from(reservation)).unwrap();
        assert_eq!(json["reservedOn"], "2025-03-08");
        assert_eq!(json["slots"][0]["price"], "15.00");
        assert_eq!(json["totalPrice"], "30.00");
    }

    #[test]
    fn list_query_converts_date_string() {
        let query = ReservationListQuery {
            user_id: None,
            court_id: None,
            date: Some("2025-07-21".into()),
        };
        let filter = ReservationFilter::try_from(query).unwrap();
        assert_eq!(
            filter.reserved_on,
            Some(NaiveDate::from_ymd_opt(2025, 7, 21).unwrap())
        );
        assert!(filter.user_id.is_none());
    }

    #[test]
    fn list_query_rejects_malformed_date() {
        let query = ReservationListQuery {
            user_id: None,
            court_id: None,
            date: Some("07/21/2025".into()),
        };
        assert!(ReservationFilter::try_from(query).is_err());
    }
}
