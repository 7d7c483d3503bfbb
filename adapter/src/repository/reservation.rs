use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ReservationId, ReservationSlotId, TimeSlotId},
    price_extra::WEEKEND_EXTRA_NAME,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        is_weekend, slot_price, Reservation, ReservationFilter, ReservationSlot,
    },
};
use kernel::repository::reservation::ReservationRepository;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::reservation::{ReservationRow, ReservationSlotRow},
    ConnectionPool,
};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定のコート ID をもつコートが存在するか
        // - 指定の時間帯 ID がすべてカタログに存在するか
        // - 希望する枠がすでに予約されていないか
        //
        // 上記のすべてが Yes だった場合、このブロック以降の処理に進む
        let base_price = {
            //
            // ① コートの存在確認
            //
            let base_price = sqlx::query_scalar::<_, Decimal>(
                r#"
                SELECT base_price
                FROM courts
                WHERE court_id = $1
                "#,
            )
            .bind(event.court_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(base_price) = base_price else {
                return Err(AppError::EntityNotFound(format!(
                    "コート（{}）が見つかりませんでした。",
                    event.court_id
                )));
            };

            //
            // ② 時間帯カタログの存在確認
            //
            let known: Vec<TimeSlotId> = sqlx::query_scalar::<_, TimeSlotId>(
                r#"
                SELECT slot_id
                FROM time_slots
                WHERE slot_id = ANY($1)
                "#,
            )
            .bind(&event.slot_ids)
            .fetch_all(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let known: HashSet<TimeSlotId> = known.into_iter().collect();
            if let Some(missing) = event.slot_ids.iter().find(|id| !known.contains(id)) {
                return Err(AppError::EntityNotFound(format!(
                    "時間帯（{}）が見つかりませんでした。",
                    missing
                )));
            }

            //
            // ③ 希望する枠に先約がないか確認
            //    同時に予約が走った場合は reservation_slots の一意制約が最後の砦となるため、
            //    ここでの確認は先約の枠を特定してエラーを返すためのもの
            //
            let occupied = sqlx::query_scalar::<_, TimeSlotId>(
                r#"
                SELECT slot_id
                FROM reservation_slots
                WHERE court_id = $1
                  AND reserved_on = $2
                  AND slot_id = ANY($3)
                LIMIT 1
                "#,
            )
            .bind(event.court_id)
            .bind(event.reserved_on)
            .bind(&event.slot_ids)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if let Some(slot_id) = occupied {
                return Err(AppError::ResourceConflict(format!(
                    "時間帯（{}）はすでに予約されています。",
                    slot_id
                )));
            }

            base_price
        };

        // 1枠あたりの単価を確定する
        // 週末の場合のみ、週末追加料金が登録されていれば加算する
        let weekend_extra = if is_weekend(event.reserved_on) {
            sqlx::query_scalar::<_, Decimal>(
                r#"
                SELECT extra_price
                FROM price_extras
                WHERE extra_name = $1
                "#,
            )
            .bind(WEEKEND_EXTRA_NAME)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
        } else {
            None
        };
        let price = slot_price(base_price, event.reserved_on, weekend_extra);

        // 予約処理を行う、すなわち reservations テーブルにレコードを追加し、
        // 枠ごとのレコードを reservation_slots テーブルに追加する
        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations (reservation_id, user_id, court_id, reserved_on)
                VALUES ($1, $2, $3, $4)
                ;
            "#,
        )
        .bind(reservation_id)
        .bind(event.reserved_by)
        .bind(event.court_id)
        .bind(event.reserved_on)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        // 枠の INSERT が一意制約に違反した場合は、その枠が他の予約に取られている。
        // トランザクション全体をロールバックするため、予約は一切確定しない
        for slot_id in &event.slot_ids {
            let res = sqlx::query(
                r#"
                    INSERT INTO reservation_slots
                    (reservation_slot_id, reservation_id, court_id, reserved_on, slot_id, price)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ;
                "#,
            )
            .bind(ReservationSlotId::new())
            .bind(reservation_id)
            .bind(event.court_id)
            .bind(event.reserved_on)
            .bind(slot_id)
            .bind(price)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(
                    format!("時間帯（{}）はすでに予約されています。", slot_id),
                ),
                _ => AppError::SpecificOperationError(e),
            })?;

            if res.rows_affected() < 1 {
                return Err(AppError::NoRowsAffectedError(
                    "No reservation slot record has been created".into(),
                ));
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    // reservation_id から予約を取得する
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                u.user_name,
                u.email,
                r.court_id,
                c.court_name,
                r.reserved_on
                FROM reservations AS r
                INNER JOIN users AS u ON r.user_id = u.user_id
                INNER JOIN courts AS c ON r.court_id = c.court_id
                WHERE r.reservation_id = $1
                ;
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let slots = self
            .find_slots_by_reservation_ids(&[row.reservation_id])
            .await?
            .into_iter()
            .map(ReservationSlot::from)
            .collect();

        Ok(Some(row.into_reservation(slots)))
    }

    // 絞り込み条件に一致する予約の一覧を取得する
    async fn find_all(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                r.reservation_id,
                r.user_id,
                u.user_name,
                u.email,
                r.court_id,
                c.court_name,
                r.reserved_on
                FROM reservations AS r
                INNER JOIN users AS u ON r.user_id = u.user_id
                INNER JOIN courts AS c ON r.court_id = c.court_id
                WHERE ($1::uuid IS NULL OR r.user_id = $1)
                  AND ($2::uuid IS NULL OR r.court_id = $2)
                  AND ($3::date IS NULL OR r.reserved_on = $3)
                ORDER BY r.reserved_on ASC, r.created_at ASC
                ;
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.court_id)
        .bind(filter.reserved_on)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let reservation_ids: Vec<ReservationId> =
            rows.iter().map(|row| row.reservation_id).collect();
        let slot_rows = self.find_slots_by_reservation_ids(&reservation_ids).await?;

        let mut slots_map: HashMap<ReservationId, Vec<ReservationSlot>> = HashMap::new();
        for slot_row in slot_rows {
            slots_map
                .entry(slot_row.reservation_id)
                .or_default()
                .push(ReservationSlot::from(slot_row));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let slots = slots_map.remove(&row.reservation_id).unwrap_or_default();
                row.into_reservation(slots)
            })
            .collect())
    }

    // 予約を取り消す
    // 予約者本人のレコードのみ削除対象とし、それ以外は見つからなかった扱いにする
    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reservations
                WHERE reservation_id = $1 AND user_id = $2
                ;
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.requested_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "予約（{}）が見つかりませんでした。",
                event.reservation_id
            )));
        }

        Ok(())
    }
}

impl ReservationRepositoryImpl {
    // find_by_id と find_all で予約に紐づく枠を取得するために内部的に使うメソッド
    async fn find_slots_by_reservation_ids(
        &self,
        reservation_ids: &[ReservationId],
    ) -> AppResult<Vec<ReservationSlotRow>> {
        sqlx::query_as::<_, ReservationSlotRow>(
            r#"
                SELECT
                rs.reservation_id,
                rs.slot_id,
                t.band,
                t.shift,
                rs.price
                FROM reservation_slots AS rs
                INNER JOIN time_slots AS t ON rs.slot_id = t.slot_id
                WHERE rs.reservation_id = ANY($1)
                ORDER BY t.band ASC, t.shift ASC
                ;
            "#,
        )
        .bind(reservation_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}
