use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::TimeSlotId,
    time_slot::{
        event::{CreateTimeSlot, DeleteTimeSlot, UpdateTimeSlot},
        TimeSlot,
    },
};
use kernel::repository::time_slot::TimeSlotRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::time_slot::TimeSlotRow, ConnectionPool};

#[derive(new)]
pub struct TimeSlotRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TimeSlotRepository for TimeSlotRepositoryImpl {
    async fn create(&self, event: CreateTimeSlot) -> AppResult<TimeSlot> {
        let slot_id = TimeSlotId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO time_slots (slot_id, band, shift)
                VALUES ($1, $2, $3);
            "#,
        )
        .bind(slot_id)
        .bind(&event.band)
        .bind(&event.shift)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(format!(
                "時間帯（{}・{}）はすでに登録されています。",
                event.band, event.shift
            )),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No time slot record has been created".into(),
            ));
        }

        Ok(TimeSlot {
            slot_id,
            band: event.band,
            shift: event.shift,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<TimeSlot>> {
        let rows: Vec<TimeSlotRow> = sqlx::query_as::<_, TimeSlotRow>(
            r#"
                SELECT slot_id, band, shift
                FROM time_slots
                ORDER BY band ASC, shift ASC;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }

    async fn find_by_id(&self, slot_id: TimeSlotId) -> AppResult<Option<TimeSlot>> {
        let row: Option<TimeSlotRow> = sqlx::query_as::<_, TimeSlotRow>(
            r#"
                SELECT slot_id, band, shift
                FROM time_slots
                WHERE slot_id = $1;
            "#,
        )
        .bind(slot_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(TimeSlot::from))
    }

    async fn update(&self, event: UpdateTimeSlot) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE time_slots
                SET
                    band = COALESCE($2, band),
                    shift = COALESCE($3, shift)
                WHERE slot_id = $1;
            "#,
        )
        .bind(event.slot_id)
        .bind(&event.band)
        .bind(&event.shift)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(
                "指定した時間帯はすでに登録されています。".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "時間帯（{}）が見つかりませんでした。",
                event.slot_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteTimeSlot) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM time_slots WHERE slot_id = $1;
            "#,
        )
        .bind(event.slot_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => AppError::ResourceConflict(
                format!("時間帯（{}）は予約で使用されているため削除できません。", event.slot_id),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "時間帯（{}）が見つかりませんでした。",
                event.slot_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_time_slot(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TimeSlotRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateTimeSlot {
                band: "morning".into(),
                shift: "first".into(),
            })
            .await?;

        let res = repo.find_by_id(created.slot_id).await?;
        assert!(res.is_some());

        let TimeSlot {
            slot_id,
            band,
            shift,
        } = res.unwrap();
        assert_eq!(slot_id, created.slot_id);
        assert_eq!(band, "morning");
        assert_eq!(shift, "first");
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_find_all_orders_by_band_and_shift(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TimeSlotRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateTimeSlot {
            band: "morning".into(),
            shift: "second".into(),
        })
        .await?;
        repo.create(CreateTimeSlot {
            band: "evening".into(),
            shift: "first".into(),
        })
        .await?;
        repo.create(CreateTimeSlot {
            band: "morning".into(),
            shift: "first".into(),
        })
        .await?;

        let all = repo.find_all().await?;
        let listed: Vec<(String, String)> =
            all.into_iter().map(|slot| (slot.band, slot.shift)).collect();
        assert_eq!(
            listed,
            vec![
                ("evening".to_string(), "first".to_string()),
                ("morning".to_string(), "first".to_string()),
                ("morning".to_string(), "second".to_string()),
            ]
        );
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicated_band_and_shift_is_rejected(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TimeSlotRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateTimeSlot {
            band: "morning".into(),
            shift: "first".into(),
        })
        .await?;

        let res = repo
            .create(CreateTimeSlot {
                band: "morning".into(),
                shift: "first".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::ResourceConflict(_))));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_update_and_delete_time_slot(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = TimeSlotRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateTimeSlot {
                band: "morning".into(),
                shift: "first".into(),
            })
            .await?;

        repo.update(UpdateTimeSlot {
            slot_id: created.slot_id,
            band: Some("afternoon".into()),
            shift: None,
        })
        .await?;

        let updated = repo.find_by_id(created.slot_id).await?.unwrap();
        assert_eq!(updated.band, "afternoon");
        assert_eq!(updated.shift, "first");

        repo.delete(DeleteTimeSlot {
            slot_id: created.slot_id,
        })
        .await?;
        assert!(repo.find_by_id(created.slot_id).await?.is_none());

        Ok(())
    }
}
