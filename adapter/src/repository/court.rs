use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    court::{
        event::{CreateCourt, DeleteCourt, UpdateCourt},
        Court,
    },
    id::CourtId,
};
use kernel::repository::court::CourtRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::court::CourtRow, ConnectionPool};

#[derive(new)]
pub struct CourtRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CourtRepository for CourtRepositoryImpl {
    async fn create(&self, event: CreateCourt) -> AppResult<Court> {
        let court_id = CourtId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO courts (court_id, court_name, covered, capacity, base_price)
                VALUES ($1, $2, $3, $4, $5);
            "#,
        )
        .bind(court_id)
        .bind(&event.court_name)
        .bind(event.covered)
        .bind(event.capacity)
        .bind(event.base_price)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(format!(
                "コート名（{}）はすでに登録されています。",
                event.court_name
            )),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No court record has been created".into(),
            ));
        }

        Ok(Court {
            court_id,
            court_name: event.court_name,
            covered: event.covered,
            capacity: event.capacity,
            base_price: event.base_price,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Court>> {
        let rows: Vec<CourtRow> = sqlx::query_as::<_, CourtRow>(
            r#"
                SELECT
                    court_id,
                    court_name,
                    covered,
                    capacity,
                    base_price
                FROM courts
                ORDER BY court_name ASC;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Court::from).collect())
    }

    async fn find_by_id(&self, court_id: CourtId) -> AppResult<Option<Court>> {
        let row: Option<CourtRow> = sqlx::query_as::<_, CourtRow>(
            r#"
                SELECT
                    court_id,
                    court_name,
                    covered,
                    capacity,
                    base_price
                FROM courts
                WHERE court_id = $1;
            "#,
        )
        .bind(court_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Court::from))
    }

    // None の項目は COALESCE で現状の値を維持する
    async fn update(&self, event: UpdateCourt) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE courts
                SET
                    court_name = COALESCE($2, court_name),
                    covered = COALESCE($3, covered),
                    capacity = COALESCE($4, capacity),
                    base_price = COALESCE($5, base_price)
                WHERE court_id = $1;
            "#,
        )
        .bind(event.court_id)
        .bind(&event.court_name)
        .bind(event.covered)
        .bind(event.capacity)
        .bind(event.base_price)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => AppError::ResourceConflict(
                "指定したコート名はすでに登録されています。".into(),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "コート（{}）が見つかりませんでした。",
                event.court_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteCourt) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM courts WHERE court_id = $1;
            "#,
        )
        .bind(event.court_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_foreign_key_violation() => AppError::ResourceConflict(
                format!("コート（{}）は予約で使用されているため削除できません。", event.court_id),
            ),
            _ => AppError::SpecificOperationError(e),
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "コート（{}）が見つかりませんでした。",
                event.court_id
            )));
        }

        Ok(())
    }
}
